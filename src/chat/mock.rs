/*!
 * Mock chat client for tests.
 *
 * Records every call so tests can assert on what the bot published, and can
 * be switched into failure modes to exercise error paths.
 */

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::errors::ChatError;
use crate::pagination::{NavControls, PageContent};

use super::ChatClient;

/// One recorded chat operation
#[derive(Debug, Clone)]
pub enum ChatCall {
    Text {
        channel_id: String,
        content: String,
    },
    Page {
        channel_id: String,
        message_id: String,
        page: PageContent,
        controls: NavControls,
    },
    Edit {
        channel_id: String,
        message_id: String,
        page: PageContent,
        controls: NavControls,
    },
    Notice {
        channel_id: String,
        user_id: String,
        content: String,
    },
}

/// Chat client that records calls instead of talking to a platform
pub struct MockChat {
    calls: Mutex<Vec<ChatCall>>,
    next_id: AtomicU64,
    fail_sends: AtomicBool,
    fail_edits: AtomicBool,
}

impl MockChat {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
            fail_sends: AtomicBool::new(false),
            fail_edits: AtomicBool::new(false),
        }
    }

    /// Snapshot of every call made so far
    pub fn calls(&self) -> Vec<ChatCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Make subsequent send operations fail
    pub fn set_fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent edit operations fail
    pub fn set_fail_edits(&self, fail: bool) {
        self.fail_edits.store(fail, Ordering::SeqCst);
    }

    fn assign_id(&self) -> String {
        format!("mock-{}", self.next_id.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for MockChat {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChat {
    async fn send_text(&self, channel_id: &str, content: &str) -> Result<String, ChatError> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(ChatError::SendFailed {
                channel_id: channel_id.to_string(),
                reason: "simulated send failure".to_string(),
            });
        }
        let id = self.assign_id();
        self.calls.lock().push(ChatCall::Text {
            channel_id: channel_id.to_string(),
            content: content.to_string(),
        });
        Ok(id)
    }

    async fn send_page(
        &self,
        channel_id: &str,
        page: &PageContent,
        controls: &NavControls,
    ) -> Result<String, ChatError> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(ChatError::SendFailed {
                channel_id: channel_id.to_string(),
                reason: "simulated send failure".to_string(),
            });
        }
        let id = self.assign_id();
        self.calls.lock().push(ChatCall::Page {
            channel_id: channel_id.to_string(),
            message_id: id.clone(),
            page: page.clone(),
            controls: controls.clone(),
        });
        Ok(id)
    }

    async fn edit_page(
        &self,
        channel_id: &str,
        message_id: &str,
        page: &PageContent,
        controls: &NavControls,
    ) -> Result<(), ChatError> {
        if self.fail_edits.load(Ordering::SeqCst) {
            return Err(ChatError::EditFailed {
                message_id: message_id.to_string(),
                reason: "simulated edit failure".to_string(),
            });
        }
        self.calls.lock().push(ChatCall::Edit {
            channel_id: channel_id.to_string(),
            message_id: message_id.to_string(),
            page: page.clone(),
            controls: controls.clone(),
        });
        Ok(())
    }

    async fn send_notice(
        &self,
        channel_id: &str,
        user_id: &str,
        content: &str,
    ) -> Result<(), ChatError> {
        self.calls.lock().push(ChatCall::Notice {
            channel_id: channel_id.to_string(),
            user_id: user_id.to_string(),
            content: content.to_string(),
        });
        Ok(())
    }
}
