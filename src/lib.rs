/*!
 * prepbot - interview problem statistics bot and API.
 *
 * The crate answers "which interview problems does company X ask?" over two
 * surfaces: a chat bot with typo-tolerant company resolution and paged
 * responses, and a read-only HTTP API over the same catalogue.
 *
 * Module map:
 * - `catalog`: problem data model, CSV dataset loader, in-memory store
 * - `matching`: fuzzy company / command / stage resolution
 * - `pagination`: stateful paged views with navigation controls
 * - `chat`: chat platform boundary trait plus console and mock clients
 * - `bot`: command handling on top of the above
 * - `enrichment`: optional external company search fallback
 * - `process`: interview process tracking backed by SQLite
 * - `api`: axum HTTP surface
 */

#![allow(clippy::uninlined_format_args)]

pub mod api;
pub mod app_config;
pub mod bot;
pub mod catalog;
pub mod chat;
pub mod enrichment;
pub mod errors;
pub mod logging;
pub mod matching;
pub mod pagination;
pub mod process;

pub use app_config::Config;
pub use bot::{Handler, IncomingMessage};
pub use catalog::{load_dir, Problem, ProblemStore, Timeframe};
pub use matching::{CompanyResolver, Resolution};
pub use pagination::{NavAction, PaginationManager};
