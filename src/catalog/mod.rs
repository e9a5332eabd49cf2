/*!
 * The interview-problem dataset: model types, the read-only store, and the
 * CSV loader that fills it at startup.
 */

pub mod loader;
pub mod models;
pub mod store;

pub use loader::load_dir;
pub use models::{difficulty_indicator, Problem, Timeframe};
pub use store::ProblemStore;
