//! Synchronization cycle tests: fetch → parse → publish against a mock
//! HTTP config source, and the failure-isolation contract.

use std::sync::Arc;
use std::time::Duration;

use httpmock::prelude::*;
use url::Url;

use route_sync::fetch::{FetchError, HttpFetcher};
use route_sync::sync::{RouteTableSynchronizer, SyncError, SyncOutcome};

fn synchronizer(url: &str, timeout: Duration) -> RouteTableSynchronizer {
    let fetcher = Arc::new(HttpFetcher::new(timeout).unwrap());
    RouteTableSynchronizer::new(fetcher, Url::parse(url).unwrap())
}

fn synchronizer_for(server: &MockServer) -> RouteTableSynchronizer {
    synchronizer(&server.url("/routes.json"), Duration::from_secs(2))
}

#[tokio::test]
async fn test_successful_sync_publishes_parsed_routes_in_order() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/routes.json");
        then.status(200).body(
            r#"{"routes": [
                {"id": "svc-c", "predicate": {"path": "/c"}, "destination": "http://c.local"},
                {"id": "svc-a", "predicate": {"path": "/a"}, "destination": "http://a.local"},
                {"id": "svc-b", "predicate": {"path": "/b"}, "destination": "http://b.local"}
            ]}"#,
        );
    });

    let sync = synchronizer_for(&server);
    let outcome = sync.sync().await;
    assert!(outcome.is_success());

    let table = sync.current_table();
    assert_eq!(table.version(), 1);
    let ids: Vec<&str> = table.routes().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["svc-c", "svc-a", "svc-b"]);
}

#[tokio::test]
async fn test_single_route_document() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/routes.json");
        then.status(200)
            .body(r#"{"routes": [{"id": "svc-a", "destination": "http://svc-a.local", "filters": []}]}"#);
    });

    let sync = synchronizer_for(&server);
    assert!(sync.sync().await.is_success());

    let table = sync.current_table();
    assert_eq!(table.len(), 1);
    let route = table.get("svc-a").unwrap();
    assert_eq!(route.destination.host_str(), Some("svc-a.local"));
    assert!(route.filters.is_empty());
}

#[tokio::test]
async fn test_empty_document_publishes_empty_table() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/routes.json");
        then.status(200).body(r#"{"routes": []}"#);
    });

    let sync = synchronizer_for(&server);
    let outcome = sync.sync().await;
    assert!(outcome.is_success());
    assert!(sync.current_table().is_empty());
}

#[tokio::test]
async fn test_absent_routes_key_is_empty_table() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/routes.json");
        then.status(200).body("{}");
    });

    let sync = synchronizer_for(&server);
    assert!(sync.sync().await.is_success());
    assert!(sync.current_table().is_empty());
}

#[tokio::test]
async fn test_non_success_status_keeps_prior_table() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/routes.json");
        then.status(503);
    });

    let sync = synchronizer_for(&server);
    let before = sync.current_table();

    let outcome = sync.sync().await;
    assert!(matches!(
        outcome,
        SyncOutcome::Failure {
            reason: SyncError::Fetch(FetchError::NonSuccessStatus(503)),
            ..
        }
    ));

    let after = sync.current_table();
    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(after.version(), 0);
}

#[tokio::test]
async fn test_fetch_failure_preserves_last_good_table() {
    let server = MockServer::start();
    let mut mock = server.mock(|when, then| {
        when.method(GET).path("/routes.json");
        then.status(200)
            .body(r#"{"routes": [{"id": "svc-a", "destination": "http://a.local"}]}"#);
    });

    let sync = synchronizer_for(&server);
    assert!(sync.sync().await.is_success());
    let good = sync.current_table();
    assert_eq!(good.version(), 1);

    // Source starts failing; the published table must not move.
    mock.delete();
    server.mock(|when, then| {
        when.method(GET).path("/routes.json");
        then.status(500);
    });

    let outcome = sync.sync().await;
    assert!(!outcome.is_success());

    let after = sync.current_table();
    assert!(Arc::ptr_eq(&good, &after));
    assert_eq!(after.len(), 1);
    assert_eq!(after.version(), 1);
}

#[tokio::test]
async fn test_parse_failure_preserves_last_good_table() {
    let server = MockServer::start();
    let mut mock = server.mock(|when, then| {
        when.method(GET).path("/routes.json");
        then.status(200)
            .body(r#"{"routes": [{"id": "svc-a", "destination": "http://a.local"}]}"#);
    });

    let sync = synchronizer_for(&server);
    assert!(sync.sync().await.is_success());
    let good = sync.current_table();

    mock.delete();
    server.mock(|when, then| {
        when.method(GET).path("/routes.json");
        then.status(200).body("routes: definitely not json");
    });

    let outcome = sync.sync().await;
    assert!(matches!(
        outcome,
        SyncOutcome::Failure {
            reason: SyncError::Parse(_),
            ..
        }
    ));
    assert!(Arc::ptr_eq(&good, &sync.current_table()));
}

#[tokio::test]
async fn test_duplicate_identifier_publishes_nothing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/routes.json");
        then.status(200).body(
            r#"{"routes": [
                {"id": "svc-a", "destination": "http://a.local"},
                {"id": "svc-a", "destination": "http://b.local"}
            ]}"#,
        );
    });

    let sync = synchronizer_for(&server);
    let outcome = sync.sync().await;
    assert!(!outcome.is_success());
    assert!(sync.current_table().is_empty());
    assert_eq!(sync.current_table().version(), 0);
}

#[tokio::test]
async fn test_unchanged_document_is_idempotent() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/routes.json");
        then.status(200)
            .body(r#"{"routes": [{"id": "svc-a", "destination": "http://a.local"}]}"#);
    });

    let sync = synchronizer_for(&server);
    let mut notices = sync.subscribe();

    assert!(sync.sync().await.is_success());
    let first = sync.current_table();
    let notice = notices.recv().await.unwrap();
    assert!(notice.changed);

    assert!(sync.sync().await.is_success());
    let second = sync.current_table();
    let notice = notices.recv().await.unwrap();
    assert!(!notice.changed);

    assert_eq!(first.version(), second.version());
    assert!(first.same_routes(&second));
}

#[tokio::test]
async fn test_timeout_is_reported_as_timeout() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/routes.json");
        then.status(200)
            .body(r#"{"routes": []}"#)
            .delay(Duration::from_millis(500));
    });

    let sync = synchronizer(&server.url("/routes.json"), Duration::from_millis(50));
    let outcome = sync.sync().await;
    assert!(matches!(
        outcome,
        SyncOutcome::Failure {
            reason: SyncError::Fetch(FetchError::Timeout(_)),
            ..
        }
    ));
    assert!(sync.current_table().is_empty());
}

#[tokio::test]
async fn test_unreachable_source() {
    // Reserved port, nothing listening.
    let sync = synchronizer("http://127.0.0.1:1/routes.json", Duration::from_secs(1));
    let outcome = sync.sync().await;
    assert!(matches!(
        outcome,
        SyncOutcome::Failure {
            reason: SyncError::Fetch(FetchError::Unreachable(_)),
            ..
        }
    ));
}

#[tokio::test]
async fn test_concurrent_syncs_serialize() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/routes.json");
        then.status(200)
            .body(r#"{"routes": [{"id": "svc-a", "destination": "http://a.local"}]}"#);
    });

    let sync = Arc::new(synchronizer_for(&server));
    let a = sync.clone();
    let b = sync.clone();

    let (first, second) = tokio::join!(
        tokio::spawn(async move { a.sync().await }),
        tokio::spawn(async move { b.sync().await }),
    );
    let (first, second) = (first.unwrap(), second.unwrap());

    // Both attempts ran to completion, one after the other; at least one
    // published (a queued attempt may report itself superseded).
    assert!(first.is_success() || second.is_success());
    assert_eq!(mock.hits(), 2);

    // Identical content: exactly one attempt's table is in effect and the
    // version moved once.
    let table = sync.current_table();
    assert_eq!(table.version(), 1);
    assert_eq!(table.len(), 1);
}
