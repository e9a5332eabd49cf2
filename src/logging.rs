/*!
 * Logger setup shared by the bot and server binaries.
 */

use log::{LevelFilter, Metadata, Record};

struct StderrLogger {
    level: LevelFilter,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
            eprintln!("[{timestamp}] {} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Install the stderr logger at the given level. Later calls are no-ops.
pub fn init(level: LevelFilter) {
    let logger = Box::new(StderrLogger { level });
    if log::set_boxed_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}
