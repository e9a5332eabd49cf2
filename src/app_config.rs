/*!
 * Application configuration.
 *
 * Everything comes from environment variables; both binaries layer a few
 * CLI overrides on top. `from_lookup` exists so tests can feed variables
 * without touching the process environment.
 */

use std::collections::HashSet;
use std::path::PathBuf;
use std::str::FromStr;

use log::{warn, LevelFilter};

use crate::errors::ConfigError;

const DEFAULT_PREFIX: &str = "!";
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_PORT: u16 = 8080;

/// Log verbosity setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(ConfigError::InvalidLogLevel(other.to_string())),
        }
    }
}

/// Runtime configuration shared by the bot and the API server
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub prefix: String,
    pub admin_ids: HashSet<String>,
    pub pre_initialized_channels: Vec<String>,
    pub data_dir: PathBuf,
    pub database_path: Option<PathBuf>,
    pub enrich_api_key: Option<String>,
    pub port: u16,
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            prefix: DEFAULT_PREFIX.to_string(),
            admin_ids: HashSet::new(),
            pre_initialized_channels: Vec::new(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            database_path: None,
            enrich_api_key: None,
            port: DEFAULT_PORT,
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(token) = lookup("BOT_TOKEN") {
            config.bot_token = token;
        }
        if let Some(prefix) = lookup("BOT_PREFIX") {
            config.prefix = prefix;
        }
        if let Some(admins) = lookup("ADMIN_USER_IDS") {
            config.admin_ids = split_list(&admins).into_iter().collect();
        }
        if let Some(channels) = lookup("PREINIT_CHANNELS") {
            config.pre_initialized_channels = split_list(&channels);
        }
        if let Some(dir) = lookup("DATA_DIR") {
            if !dir.trim().is_empty() {
                config.data_dir = PathBuf::from(dir);
            }
        }
        if let Some(path) = lookup("DATABASE_PATH") {
            if !path.trim().is_empty() {
                config.database_path = Some(PathBuf::from(path));
            }
        }
        if let Some(key) = lookup("COMPANY_ENRICH_API_KEY") {
            if !key.trim().is_empty() {
                config.enrich_api_key = Some(key);
            }
        }
        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            config.log_level = level.parse()?;
        }

        config.validate();
        Ok(config)
    }

    /// Repair or warn about suspicious values
    pub fn validate(&mut self) {
        if self.bot_token.is_empty() {
            warn!("BOT_TOKEN is not set; gateway-backed frontends will not authenticate");
        }
        if self.admin_ids.is_empty() {
            warn!("ADMIN_USER_IDS is empty; admin commands will be unusable");
        }
        if self.prefix.trim().is_empty() {
            warn!("Empty command prefix, falling back to '{DEFAULT_PREFIX}'");
            self.prefix = DEFAULT_PREFIX.to_string();
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
