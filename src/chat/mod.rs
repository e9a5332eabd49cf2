/*!
 * Chat platform boundary.
 *
 * The gateway connection, session management, and wire protocol of the real
 * chat platform live outside this crate; the core only needs the four
 * operations below. Implementations:
 * - `console`: prints to stdout, used by the bot binary for local sessions
 * - `mock`: records calls and simulates failures, used by tests
 */

use async_trait::async_trait;

use crate::errors::ChatError;
use crate::pagination::{NavControls, PageContent};

pub mod console;
pub mod mock;

/// Common trait for chat platform clients.
///
/// Message identifiers are assigned by the platform and returned from the
/// send operations; pagination relies on them to key its view table.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send a plain text message, returning the platform-assigned message id
    async fn send_text(&self, channel_id: &str, content: &str) -> Result<String, ChatError>;

    /// Send a rendered page with navigation controls attached, returning the
    /// platform-assigned message id
    async fn send_page(
        &self,
        channel_id: &str,
        page: &PageContent,
        controls: &NavControls,
    ) -> Result<String, ChatError>;

    /// Replace the content and controls of an already published page
    async fn edit_page(
        &self,
        channel_id: &str,
        message_id: &str,
        page: &PageContent,
        controls: &NavControls,
    ) -> Result<(), ChatError>;

    /// Send a short notice visible to a single user (e.g. an ownership
    /// rejection)
    async fn send_notice(
        &self,
        channel_id: &str,
        user_id: &str,
        content: &str,
    ) -> Result<(), ChatError>;
}
