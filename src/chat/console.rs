/*!
 * Console chat client.
 *
 * Renders messages and pages to stdout so the bot can be driven from a
 * terminal without a gateway connection. Message ids are synthesized from a
 * local counter.
 */

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::errors::ChatError;
use crate::pagination::{NavControls, PageContent};

use super::ChatClient;

/// Chat client that writes everything to stdout
pub struct ConsoleChat {
    next_id: AtomicU64,
}

impl ConsoleChat {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
        }
    }

    fn assign_id(&self) -> String {
        format!("msg-{}", self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    fn print_page(&self, channel_id: &str, message_id: &str, page: &PageContent, controls: &NavControls) {
        println!("[{channel_id}] ({message_id}) {}", page.title);
        println!("{}", page.description);
        println!("-- {}", page.footer);
        let mut buttons = Vec::new();
        if !controls.at_first {
            buttons.push("|< first");
            buttons.push("< back");
        }
        if !controls.at_last {
            buttons.push("next >");
            buttons.push("last >|");
        }
        if !buttons.is_empty() {
            println!("   [{}]  (view {})", buttons.join("] ["), controls.view_id);
        }
    }
}

impl Default for ConsoleChat {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for ConsoleChat {
    async fn send_text(&self, channel_id: &str, content: &str) -> Result<String, ChatError> {
        let id = self.assign_id();
        println!("[{channel_id}] ({id}) {content}");
        Ok(id)
    }

    async fn send_page(
        &self,
        channel_id: &str,
        page: &PageContent,
        controls: &NavControls,
    ) -> Result<String, ChatError> {
        let id = self.assign_id();
        self.print_page(channel_id, &id, page, controls);
        Ok(id)
    }

    async fn edit_page(
        &self,
        channel_id: &str,
        message_id: &str,
        page: &PageContent,
        controls: &NavControls,
    ) -> Result<(), ChatError> {
        self.print_page(channel_id, message_id, page, controls);
        Ok(())
    }

    async fn send_notice(
        &self,
        channel_id: &str,
        user_id: &str,
        content: &str,
    ) -> Result<(), ChatError> {
        println!("[{channel_id}] (to {user_id}) {content}");
        Ok(())
    }
}
