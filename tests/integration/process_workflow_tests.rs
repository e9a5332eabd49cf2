/*!
 * Process tracking workflow tests over an in-memory store
 */

use std::collections::HashSet;
use std::sync::Arc;

use prepbot::bot::{Handler, IncomingMessage};
use prepbot::chat::mock::{ChatCall, MockChat};
use prepbot::matching::CompanyResolver;
use prepbot::pagination::PaginationManager;
use prepbot::process::{ProcessStage, ProcessStore, SqliteProcessStore};

use crate::common::sample_store;

struct Fixture {
    chat: Arc<MockChat>,
    store: Arc<SqliteProcessStore>,
    handler: Handler,
}

fn fixture() -> Fixture {
    let chat = Arc::new(MockChat::new());
    let store = Arc::new(SqliteProcessStore::in_memory().unwrap());
    let handler = Handler::new(
        Arc::new(sample_store()),
        chat.clone(),
        Arc::new(PaginationManager::new()),
        CompanyResolver::new(),
        Some(store.clone() as Arc<dyn ProcessStore>),
        "!",
        HashSet::new(),
        vec!["general".to_string()],
    );
    Fixture { chat, store, handler }
}

fn message(content: &str) -> IncomingMessage {
    IncomingMessage {
        channel_id: "general".to_string(),
        author_id: "user".to_string(),
        author_is_bot: false,
        content: content.to_string(),
    }
}

fn last_text(chat: &MockChat) -> String {
    match chat.calls().last().cloned() {
        Some(ChatCall::Text { content, .. }) => content,
        other => panic!("expected a text reply, got {other:?}"),
    }
}

#[tokio::test]
async fn test_process_withValidStage_shouldRecordIt() {
    let f = fixture();
    f.handler
        .handle_message(&message("!process google phone"))
        .await
        .unwrap();
    assert!(last_text(&f.chat).contains("Recorded **Phone** for Google"));

    let records = f.store.by_company("google").await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].stage, ProcessStage::Phone);
}

#[tokio::test]
async fn test_process_withMultiWordCompany_shouldNormalizeKey() {
    let f = fixture();
    f.handler
        .handle_message(&message("!process jane street oa"))
        .await
        .unwrap();

    let records = f.store.by_company("jane-street").await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].stage, ProcessStage::Oa);
}

#[tokio::test]
async fn test_process_withStageTypo_shouldSuggestWithoutRecording() {
    let f = fixture();
    f.handler
        .handle_message(&message("!process google phnoe"))
        .await
        .unwrap();
    assert!(last_text(&f.chat).contains("Did you mean `phone`?"));
    assert!(f.store.by_company("google").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_process_withoutStage_shouldSummarizeRecords() {
    let f = fixture();
    f.handler.handle_message(&message("!process google apply")).await.unwrap();
    f.handler.handle_message(&message("!process google phone")).await.unwrap();
    f.handler.handle_message(&message("!process google phone")).await.unwrap();

    f.handler.handle_message(&message("!process google")).await.unwrap();
    let reply = last_text(&f.chat);
    assert!(reply.contains("Process summary for Google"));
    assert!(reply.contains("• Apply: 1"));
    assert!(reply.contains("• Phone: 2"));
    assert!(!reply.contains("Offer"));
}

#[tokio::test]
async fn test_process_withNoRecords_shouldSaySo() {
    let f = fixture();
    f.handler.handle_message(&message("!process stripe")).await.unwrap();
    assert!(last_text(&f.chat).contains("No process records for Stripe"));
}

#[tokio::test]
async fn test_process_withoutConfiguredStore_shouldExplain() {
    let chat = Arc::new(MockChat::new());
    let handler = Handler::new(
        Arc::new(sample_store()),
        chat.clone(),
        Arc::new(PaginationManager::new()),
        CompanyResolver::new(),
        None,
        "!",
        HashSet::new(),
        vec!["general".to_string()],
    );
    handler.handle_message(&message("!process google phone")).await.unwrap();
    assert!(last_text(&chat).contains("not configured"));
}
