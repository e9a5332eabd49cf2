/*!
 * Interview process tracking: stage vocabulary, records, and storage.
 */

pub mod models;
pub mod store;

pub use models::{ProcessRecord, ProcessStage};
pub use store::{ProcessStore, SqliteProcessStore};
