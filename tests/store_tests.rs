//! TemplateListStore tests
//!
//! Load state transitions and refresh ordering against an in-memory gateway.

mod common;

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use common::{FakeGateway, template};
use template_desk::errors::TemplateError;
use template_desk::store::{CollectionState, TemplateListStore};

fn store_for(gateway: &Arc<FakeGateway>) -> TemplateListStore {
    TemplateListStore::new(gateway.clone())
}

#[tokio::test]
async fn test_refresh_ready_with_all_records() {
    let gateway = FakeGateway::with_templates(vec![
        template("1", "Intro"),
        template("2", "Advanced"),
        template("3", "Capstone"),
    ]);
    let store = store_for(&gateway);
    assert_eq!(store.state(), CollectionState::Idle);

    let count = store.refresh().await.unwrap();
    assert_eq!(count, 3);

    let templates = store.templates();
    assert_eq!(templates.len(), 3);
    let ids: HashSet<_> = templates.iter().map(|t| t.id.clone()).collect();
    assert_eq!(ids.len(), 3);
}

#[tokio::test]
async fn test_refresh_is_idempotent() {
    let gateway = FakeGateway::with_templates(vec![template("1", "Intro"), template("2", "Next")]);
    let store = store_for(&gateway);

    store.refresh().await.unwrap();
    let first = store.state();
    store.refresh().await.unwrap();
    assert_eq!(store.state(), first);
    assert_eq!(gateway.calls.list.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_failed_refresh_replaces_collection() {
    let gateway = FakeGateway::with_templates(vec![template("1", "Intro")]);
    let store = store_for(&gateway);
    store.refresh().await.unwrap();

    gateway.fail_list.store(true, Ordering::SeqCst);
    let err = store.refresh().await.unwrap_err();
    assert!(matches!(err, TemplateError::Network(_)));

    let state = store.state();
    assert!(state.error().unwrap().contains("connection refused"));
    assert!(state.templates().is_none());
    assert!(store.templates().is_empty());
    assert!(store.find("1").is_none());
}

#[tokio::test]
async fn test_recovers_after_failure() {
    let gateway = FakeGateway::with_templates(vec![template("1", "Intro")]);
    gateway.fail_list.store(true, Ordering::SeqCst);
    let store = store_for(&gateway);
    assert!(store.refresh().await.is_err());

    gateway.fail_list.store(false, Ordering::SeqCst);
    store.refresh().await.unwrap();
    assert_eq!(store.templates().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_loading_while_request_pending() {
    let gateway = FakeGateway::with_templates(vec![template("1", "Intro")]);
    gateway.push_list_delay(Duration::from_secs(1));
    let store = Arc::new(store_for(&gateway));

    let pending = tokio::spawn({
        let store = store.clone();
        async move { store.refresh().await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(store.state().is_loading());

    pending.await.unwrap().unwrap();
    assert_eq!(store.templates().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_stale_refresh_is_discarded() {
    let gateway = FakeGateway::with_templates(vec![template("1", "Intro")]);
    // First refresh is slow and sees the old collection
    gateway.push_list_delay(Duration::from_millis(500));
    gateway.push_list_delay(Duration::ZERO);
    let store = store_for(&gateway);

    let slow = store.refresh();
    let fast = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        gateway.insert(template("2", "Next"));
        store.refresh().await
    };
    let (slow, fast) = tokio::join!(slow, fast);

    assert_eq!(slow.unwrap(), 1);
    assert_eq!(fast.unwrap(), 2);
    let ids: Vec<_> = store.templates().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[tokio::test]
async fn test_remove_locally_only_touches_ready() {
    let gateway = FakeGateway::with_templates(vec![template("1", "Intro"), template("2", "Next")]);
    let store = store_for(&gateway);
    assert!(!store.remove_locally("1"));

    store.refresh().await.unwrap();
    assert!(store.remove_locally("1"));
    assert!(!store.remove_locally("1"));
    assert_eq!(store.templates().len(), 1);
    assert_eq!(gateway.calls.list.load(Ordering::SeqCst), 1);
}
