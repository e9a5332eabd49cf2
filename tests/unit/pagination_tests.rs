/*!
 * Unit tests for the paged view manager
 */

use prepbot::chat::mock::{ChatCall, MockChat};
use prepbot::pagination::{NavAction, PageContent, PaginationManager, Paginator};

fn five_pages() -> Paginator {
    Paginator::new(5, |page| PageContent {
        title: "List".to_string(),
        description: format!("page {page}"),
        footer: format!("Page {}/5", page + 1),
        color: 0x5865F2,
    })
}

#[tokio::test]
async fn test_createView_shouldPublishThenAttachControls() {
    let chat = MockChat::new();
    let manager = PaginationManager::new();

    let view_id = manager
        .create_view(&chat, "chan", "owner", five_pages())
        .await
        .unwrap();

    assert!(manager.contains_view(&view_id));
    assert_eq!(manager.current_page(&view_id), Some(0));

    let calls = chat.calls();
    assert_eq!(calls.len(), 2);
    match &calls[0] {
        ChatCall::Page { controls, .. } => {
            // Controls on the initial send cannot carry the real message id
            assert_ne!(controls.view_id, view_id);
        }
        other => panic!("expected initial page send, got {other:?}"),
    }
    match &calls[1] {
        ChatCall::Edit { message_id, controls, .. } => {
            assert_eq!(message_id, &view_id);
            assert_eq!(controls.view_id, view_id);
            assert!(controls.at_first);
            assert!(!controls.at_last);
        }
        other => panic!("expected control-attach edit, got {other:?}"),
    }
}

#[tokio::test]
async fn test_handleNavigation_withNextAndBack_shouldMovePages() {
    let chat = MockChat::new();
    let manager = PaginationManager::new();
    let view = manager
        .create_view(&chat, "chan", "owner", five_pages())
        .await
        .unwrap();

    manager
        .handle_navigation(&chat, &view, "owner", NavAction::Next)
        .await
        .unwrap();
    assert_eq!(manager.current_page(&view), Some(1));

    manager
        .handle_navigation(&chat, &view, "owner", NavAction::Back)
        .await
        .unwrap();
    assert_eq!(manager.current_page(&view), Some(0));
}

#[tokio::test]
async fn test_handleNavigation_withBackAtFirstPage_shouldStayPut() {
    let chat = MockChat::new();
    let manager = PaginationManager::new();
    let view = manager
        .create_view(&chat, "chan", "owner", five_pages())
        .await
        .unwrap();

    manager
        .handle_navigation(&chat, &view, "owner", NavAction::Back)
        .await
        .unwrap();
    assert_eq!(manager.current_page(&view), Some(0));

    manager
        .handle_navigation(&chat, &view, "owner", NavAction::First)
        .await
        .unwrap();
    assert_eq!(manager.current_page(&view), Some(0));
}

#[tokio::test]
async fn test_handleNavigation_withNextAtLastPage_shouldClamp() {
    let chat = MockChat::new();
    let manager = PaginationManager::new();
    let view = manager
        .create_view(&chat, "chan", "owner", five_pages())
        .await
        .unwrap();

    manager
        .handle_navigation(&chat, &view, "owner", NavAction::Last)
        .await
        .unwrap();
    assert_eq!(manager.current_page(&view), Some(4));

    manager
        .handle_navigation(&chat, &view, "owner", NavAction::Next)
        .await
        .unwrap();
    assert_eq!(manager.current_page(&view), Some(4));
}

#[tokio::test]
async fn test_handleNavigation_withNonOwner_shouldNoticeAndKeepPage() {
    let chat = MockChat::new();
    let manager = PaginationManager::new();
    let view = manager
        .create_view(&chat, "chan", "owner", five_pages())
        .await
        .unwrap();
    let before = chat.call_count();

    manager
        .handle_navigation(&chat, &view, "intruder", NavAction::Next)
        .await
        .unwrap();

    assert_eq!(manager.current_page(&view), Some(0));
    let calls = chat.calls();
    assert_eq!(calls.len(), before + 1);
    match calls.last().unwrap() {
        ChatCall::Notice { user_id, .. } => assert_eq!(user_id, "intruder"),
        other => panic!("expected rejection notice, got {other:?}"),
    }
}

#[tokio::test]
async fn test_handleNavigation_withPublicView_shouldAllowAnyone() {
    let chat = MockChat::new();
    let manager = PaginationManager::new();
    let view = manager
        .create_view(&chat, "chan", "", five_pages())
        .await
        .unwrap();

    manager
        .handle_navigation(&chat, &view, "anyone", NavAction::Next)
        .await
        .unwrap();
    assert_eq!(manager.current_page(&view), Some(1));
}

#[tokio::test]
async fn test_handleNavigation_withUnknownView_shouldBeSilentNoOp() {
    let chat = MockChat::new();
    let manager = PaginationManager::new();

    manager
        .handle_navigation(&chat, "missing", "user", NavAction::Next)
        .await
        .unwrap();
    assert_eq!(chat.call_count(), 0);
}

#[tokio::test]
async fn test_handleNavigation_withEditFailure_shouldPropagateError() {
    let chat = MockChat::new();
    let manager = PaginationManager::new();
    let view = manager
        .create_view(&chat, "chan", "owner", five_pages())
        .await
        .unwrap();

    chat.set_fail_edits(true);
    let result = manager
        .handle_navigation(&chat, &view, "owner", NavAction::Next)
        .await;
    assert!(result.is_err());
    // The page turn itself already happened; only the publish failed
    assert_eq!(manager.current_page(&view), Some(1));
}

#[tokio::test]
async fn test_createView_withSendFailure_shouldNotRegisterView() {
    let chat = MockChat::new();
    let manager = PaginationManager::new();

    chat.set_fail_sends(true);
    let result = manager.create_view(&chat, "chan", "owner", five_pages()).await;
    assert!(result.is_err());
    assert_eq!(manager.view_count(), 0);
}
