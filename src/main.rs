/*!
 * Console frontend for the interview-problem bot.
 *
 * Loads the CSV dataset, wires the command handler to a stdout chat client,
 * and reads commands from stdin. Navigation interactions are simulated with
 * `nav <view-id> <first|back|next|last>`.
 */

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use prepbot::app_config::{Config, LogLevel};
use prepbot::bot::{Handler, IncomingMessage};
use prepbot::catalog::load_dir;
use prepbot::chat::console::ConsoleChat;
use prepbot::enrichment::CompanyEnrichApi;
use prepbot::matching::CompanyResolver;
use prepbot::pagination::PaginationManager;
use prepbot::process::store::{default_database_path, SqliteProcessStore};
use prepbot::process::ProcessStore;

const CONSOLE_CHANNEL: &str = "console";
const CONSOLE_USER: &str = "console";

#[derive(Parser)]
#[command(name = "prepbot", about = "Interview problem statistics bot", version)]
struct Cli {
    /// Command prefix (overrides BOT_PREFIX)
    #[arg(short, long)]
    prefix: Option<String>,

    /// Dataset directory (overrides DATA_DIR)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace (overrides LOG_LEVEL)
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(prefix) = cli.prefix {
        config.prefix = prefix;
    }
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level.parse::<LogLevel>().context("Invalid log level")?;
    }
    prepbot::logging::init(config.log_level.to_level_filter());

    let store = Arc::new(
        load_dir(&config.data_dir)
            .with_context(|| format!("Failed to load dataset from {}", config.data_dir.display()))?,
    );
    info!("Loaded {} companies", store.company_count());

    let resolver = match &config.enrich_api_key {
        Some(key) => CompanyResolver::with_enrichment(Arc::new(CompanyEnrichApi::new(key.clone()))),
        None => CompanyResolver::new(),
    };

    let processes: Option<Arc<dyn ProcessStore>> = {
        let path = config
            .database_path
            .clone()
            .unwrap_or_else(default_database_path);
        match SqliteProcessStore::open(&path) {
            Ok(s) => Some(Arc::new(s)),
            Err(e) => {
                warn!("Process tracking disabled: {e}");
                None
            }
        }
    };

    // The console session acts as its own admin in an always-enabled channel
    let mut admin_ids: HashSet<String> = config.admin_ids.clone();
    admin_ids.insert(CONSOLE_USER.to_string());
    let mut channels = config.pre_initialized_channels.clone();
    channels.push(CONSOLE_CHANNEL.to_string());

    let handler = Handler::new(
        store,
        Arc::new(ConsoleChat::new()),
        Arc::new(PaginationManager::new()),
        resolver,
        processes,
        config.prefix.clone(),
        admin_ids,
        channels,
    );

    println!(
        "Ready. Type commands like `{p}problems google` or `{p}help`; `quit` exits.",
        p = config.prefix
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        // `nav <view-id> <action>` stands in for a button press
        if let Some(rest) = line.strip_prefix("nav ") {
            let mut parts = rest.split_whitespace();
            match (parts.next(), parts.next().and_then(|a| a.parse().ok())) {
                (Some(view_id), Some(action)) => {
                    if let Err(e) = handler.handle_interaction(view_id, CONSOLE_USER, action).await {
                        warn!("Navigation failed: {e}");
                    }
                }
                _ => println!("Usage: nav <view-id> <first|back|next|last>"),
            }
            continue;
        }

        let message = IncomingMessage {
            channel_id: CONSOLE_CHANNEL.to_string(),
            author_id: CONSOLE_USER.to_string(),
            author_is_bot: false,
            content: line,
        };
        if let Err(e) = handler.handle_message(&message).await {
            warn!("Command failed: {e}");
        }
    }

    Ok(())
}
