/*!
 * Command handling for the chat bot.
 *
 * [`Handler`] owns the problem catalogue, the company resolver, the
 * pagination manager, and the optional process store, and turns incoming
 * messages and control interactions into chat responses. It holds no
 * gateway state; any [`ChatClient`] implementation can drive it.
 */

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use log::{debug, info, warn};
use parking_lot::RwLock;

use crate::catalog::{ProblemStore, Timeframe};
use crate::chat::ChatClient;
use crate::matching::{self, clean_company_input, display_name, CompanyResolver, Resolution};
use crate::pagination::{needs_pagination, NavAction, PaginationManager};
use crate::process::{ProcessRecord, ProcessStage, ProcessStore};

pub mod format;

/// Commands the bot answers to
pub const VALID_COMMANDS: [&str; 6] = ["problems", "help", "process", "shutdown", "startup", "init"];

/// Trailing arguments scanned for a timeframe token
const TIMEFRAME_SCAN_WINDOW: usize = 4;

/// A message as delivered by the chat platform
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub channel_id: String,
    pub author_id: String,
    pub author_is_bot: bool,
    pub content: String,
}

/// Central command handler
pub struct Handler {
    store: Arc<ProblemStore>,
    client: Arc<dyn ChatClient>,
    pages: Arc<PaginationManager>,
    resolver: CompanyResolver,
    processes: Option<Arc<dyn ProcessStore>>,
    prefix: String,
    admin_ids: HashSet<String>,
    enabled_channels: RwLock<HashSet<String>>,
    disabled: AtomicBool,
}

impl Handler {
    pub fn new(
        store: Arc<ProblemStore>,
        client: Arc<dyn ChatClient>,
        pages: Arc<PaginationManager>,
        resolver: CompanyResolver,
        processes: Option<Arc<dyn ProcessStore>>,
        prefix: impl Into<String>,
        admin_ids: HashSet<String>,
        pre_initialized_channels: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            store,
            client,
            pages,
            resolver,
            processes,
            prefix: prefix.into(),
            admin_ids,
            enabled_channels: RwLock::new(pre_initialized_channels.into_iter().collect()),
            disabled: AtomicBool::new(false),
        }
    }

    pub fn is_admin(&self, user_id: &str) -> bool {
        self.admin_ids.contains(user_id)
    }

    pub fn channel_enabled(&self, channel_id: &str) -> bool {
        self.enabled_channels.read().contains(channel_id)
    }

    /// Route a message to its command handler.
    ///
    /// Messages from bots, without the prefix, or with unrecognizable verbs
    /// are dropped silently so the bot never reacts to ambient chatter.
    pub async fn handle_message(&self, message: &IncomingMessage) -> Result<()> {
        if message.author_is_bot {
            return Ok(());
        }
        let Some(body) = message.content.strip_prefix(&self.prefix) else {
            return Ok(());
        };
        let body = body.trim();
        if body.is_empty() {
            return Ok(());
        }

        let mut parts = body.split_whitespace();
        let verb = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        // Prefixed noise like "!!!" or "!?" is not a command attempt
        if !verb.chars().any(|c| c.is_ascii_alphanumeric()) {
            return Ok(());
        }

        let matched = matching::command::resolve(verb, &VALID_COMMANDS);
        if !matched.is_valid {
            if !matched.suggestion.is_empty() {
                let arg_hint = if args.is_empty() {
                    String::new()
                } else {
                    format!(" {}", args.join(" "))
                };
                self.client
                    .send_text(
                        &message.channel_id,
                        &format!(
                            "Unknown command '{p}{verb}'. Did you mean `{p}{s}{arg_hint}`?",
                            p = self.prefix,
                            s = matched.suggestion
                        ),
                    )
                    .await?;
            } else {
                debug!("Ignoring unrecognizable command '{verb}'");
            }
            return Ok(());
        }
        let command = matched.command.as_str();

        // init and help work everywhere; everything else needs an enabled
        // channel
        if !matches!(command, "init" | "help") && !self.channel_enabled(&message.channel_id) {
            debug!(
                "Dropping '{command}' from non-enabled channel {}",
                message.channel_id
            );
            return Ok(());
        }

        if self.disabled.load(Ordering::SeqCst)
            && !matches!(command, "shutdown" | "startup" | "help" | "init")
        {
            debug!("Dropping '{command}' while disabled");
            return Ok(());
        }

        match command {
            "problems" => self.handle_problems(message, &args).await,
            "help" => self.handle_help(message).await,
            "process" => self.handle_process(message, &args).await,
            "shutdown" => self.handle_shutdown(message).await,
            "startup" => self.handle_startup(message).await,
            "init" => self.handle_init(message, &args).await,
            _ => Ok(()),
        }
    }

    /// Route a navigation control interaction to the pagination manager
    pub async fn handle_interaction(
        &self,
        view_id: &str,
        requester_id: &str,
        action: NavAction,
    ) -> Result<()> {
        self.pages
            .handle_navigation(self.client.as_ref(), view_id, requester_id, action)
            .await?;
        Ok(())
    }

    async fn handle_problems(&self, message: &IncomingMessage, args: &[&str]) -> Result<()> {
        if args.is_empty() {
            self.client
                .send_text(
                    &message.channel_id,
                    &format!("Usage: `{}problems <company> [timeframe]`", self.prefix),
                )
                .await?;
            return Ok(());
        }

        // The timeframe, if present, is the rightmost recognizable token in
        // the trailing window; everything before it is the company phrase.
        let mut timeframe_arg: Option<(usize, Timeframe)> = None;
        let scan_start = args.len().saturating_sub(TIMEFRAME_SCAN_WINDOW);
        for (i, arg) in args.iter().enumerate().skip(scan_start).rev() {
            if Timeframe::is_keyword(arg) {
                timeframe_arg = Some((i, Timeframe::parse(arg)));
                break;
            }
        }

        let company_words: Vec<&str> = match timeframe_arg {
            Some((idx, _)) => args[..idx].to_vec(),
            None => args.to_vec(),
        };
        let raw_company = company_words.join(" ");
        let cleaned = clean_company_input(&raw_company);
        if cleaned.is_empty() {
            self.client
                .send_text(
                    &message.channel_id,
                    &format!("Usage: `{}problems <company> [timeframe]`", self.prefix),
                )
                .await?;
            return Ok(());
        }

        let catalogue = self.store.companies();
        let company = match self.resolver.resolve_with_enrichment(&cleaned, &catalogue).await {
            Resolution::Resolved(key) => key,
            Resolution::Ambiguous(suggestions) | Resolution::Rejected(suggestions) => {
                self.client
                    .send_text(
                        &message.channel_id,
                        &format::company_not_found(&cleaned, &suggestions),
                    )
                    .await?;
                return Ok(());
            }
        };

        let (problems, timeframe) = match timeframe_arg {
            Some((_, tf)) => match self.store.problems(&company, tf) {
                Some(list) if !list.is_empty() => (list.to_vec(), tf),
                _ => {
                    let available = self.store.available_timeframes(&company);
                    let reply = if available.is_empty() {
                        format::no_data_message(&company)
                    } else {
                        format::available_timeframes_hint(&self.prefix, &company, tf, &available)
                    };
                    self.client.send_text(&message.channel_id, &reply).await?;
                    return Ok(());
                }
            },
            None => match self.store.problems_with_priority(&company) {
                Some((list, tf)) => (list.to_vec(), tf),
                None => {
                    self.client
                        .send_text(&message.channel_id, &format::no_data_message(&company))
                        .await?;
                    return Ok(());
                }
            },
        };

        if needs_pagination(problems.len()) {
            let paginator = format::problems_paginator(&company, timeframe, problems.clone());
            // Views published from the message path are public
            match self
                .pages
                .create_view(self.client.as_ref(), &message.channel_id, "", paginator)
                .await
            {
                Ok(view_id) => {
                    info!("Published paged problems for '{company}' as view {view_id}");
                }
                Err(e) => {
                    warn!("Falling back to plain response for '{company}': {e}");
                    self.client
                        .send_text(
                            &message.channel_id,
                            &format::problems_response(&company, timeframe, &problems),
                        )
                        .await?;
                }
            }
        } else {
            self.client
                .send_text(
                    &message.channel_id,
                    &format::problems_response(&company, timeframe, &problems),
                )
                .await?;
        }
        Ok(())
    }

    async fn handle_help(&self, message: &IncomingMessage) -> Result<()> {
        if self.disabled.load(Ordering::SeqCst) {
            self.client
                .send_text(
                    &message.channel_id,
                    "The bot is currently offline. An admin can bring it back with the startup command.",
                )
                .await?;
            return Ok(());
        }

        let paginator = format::help_paginator(&self.prefix, self.is_admin(&message.author_id));
        if let Err(e) = self
            .pages
            .create_view(
                self.client.as_ref(),
                &message.channel_id,
                &message.author_id,
                paginator,
            )
            .await
        {
            warn!("Falling back to plain help text: {e}");
            let page = format::help_paginator(&self.prefix, self.is_admin(&message.author_id))
                .render_page(0);
            self.client
                .send_text(&message.channel_id, &format!("{}\n{}", page.title, page.description))
                .await?;
        }
        Ok(())
    }

    async fn handle_process(&self, message: &IncomingMessage, args: &[&str]) -> Result<()> {
        let Some(store) = &self.processes else {
            self.client
                .send_text(&message.channel_id, "Process tracking is not configured.")
                .await?;
            return Ok(());
        };
        if args.is_empty() {
            self.client
                .send_text(
                    &message.channel_id,
                    &format!("Usage: `{}process <company> [stage]`", self.prefix),
                )
                .await?;
            return Ok(());
        }

        let last = args[args.len() - 1];
        match matching::stage::resolve(last) {
            matching::stage::StageResolution::Valid(stage) if args.len() >= 2 => {
                let company = clean_company_input(&args[..args.len() - 1].join(" "));
                if company.is_empty() {
                    self.client
                        .send_text(
                            &message.channel_id,
                            &format!("Usage: `{}process <company> [stage]`", self.prefix),
                        )
                        .await?;
                    return Ok(());
                }
                let key = matching::normalize_key(&company);
                let record = ProcessRecord::new(key.clone(), stage);
                store.add(record).await?;
                self.client
                    .send_text(
                        &message.channel_id,
                        &format!("Recorded **{}** for {}.", stage.display(), display_name(&key)),
                    )
                    .await?;
            }
            matching::stage::StageResolution::Suggestion(stage) if args.len() >= 2 => {
                self.client
                    .send_text(
                        &message.channel_id,
                        &format!(
                            "Unknown stage '{last}'. Did you mean `{}`?",
                            stage.as_str()
                        ),
                    )
                    .await?;
            }
            _ => {
                // No stage given: summarize what is on record for the company
                let company = clean_company_input(&args.join(" "));
                let key = matching::normalize_key(&company);
                let records = store.by_company(&key).await?;
                if records.is_empty() {
                    self.client
                        .send_text(
                            &message.channel_id,
                            &format!("No process records for {}.", display_name(&key)),
                        )
                        .await?;
                } else {
                    let mut out = format!("Process summary for {}:\n", display_name(&key));
                    for stage in ProcessStage::ALL {
                        let count = records.iter().filter(|r| r.stage == stage).count();
                        if count > 0 {
                            out.push_str(&format!("• {}: {}\n", stage.display(), count));
                        }
                    }
                    self.client.send_text(&message.channel_id, &out).await?;
                }
            }
        }
        Ok(())
    }

    async fn handle_shutdown(&self, message: &IncomingMessage) -> Result<()> {
        if !self.is_admin(&message.author_id) {
            debug!("Ignoring shutdown from non-admin {}", message.author_id);
            return Ok(());
        }
        self.disabled.store(true, Ordering::SeqCst);
        info!("Bot disabled by admin {}", message.author_id);
        self.client
            .send_text(&message.channel_id, "Going offline. See you soon!")
            .await?;
        Ok(())
    }

    async fn handle_startup(&self, message: &IncomingMessage) -> Result<()> {
        if !self.is_admin(&message.author_id) {
            debug!("Ignoring startup from non-admin {}", message.author_id);
            return Ok(());
        }
        self.disabled.store(false, Ordering::SeqCst);
        info!("Bot re-enabled by admin {}", message.author_id);
        self.client
            .send_text(&message.channel_id, "Back online and ready.")
            .await?;
        Ok(())
    }

    async fn handle_init(&self, message: &IncomingMessage, args: &[&str]) -> Result<()> {
        if !self.is_admin(&message.author_id) {
            debug!("Ignoring init from non-admin {}", message.author_id);
            return Ok(());
        }
        let action = args.first().copied().unwrap_or("status");
        let reply = match action {
            "enable" => {
                self.enabled_channels
                    .write()
                    .insert(message.channel_id.clone());
                info!("Channel {} enabled", message.channel_id);
                "\u{2713} This channel is now enabled.".to_string()
            }
            "disable" => {
                self.enabled_channels.write().remove(&message.channel_id);
                info!("Channel {} disabled", message.channel_id);
                "\u{2717} This channel is now disabled.".to_string()
            }
            "status" => {
                if self.channel_enabled(&message.channel_id) {
                    "\u{2713} This channel is enabled.".to_string()
                } else {
                    "\u{2717} This channel is disabled.".to_string()
                }
            }
            other => format!(
                "Unknown init action '{other}'. Use `{p}init enable`, `{p}init disable`, or `{p}init status`.",
                p = self.prefix
            ),
        };
        self.client.send_text(&message.channel_id, &reply).await?;
        Ok(())
    }
}
