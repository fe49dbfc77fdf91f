//! Integration tests for `IndexClient::save_objects` using wiremock HTTP mocks.

use rust_decimal::Decimal;
use serde_json::json;
use shopsync_algolia::{IndexClient, IndexError};
use shopsync_core::SearchRecord;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> IndexClient {
    IndexClient::with_base_url("APPID", "admin-key", "products_en", 5, "shopsync-test/0.1", base_url)
        .expect("client construction should not fail")
}

fn record(id: &str, price_cents: i64) -> SearchRecord {
    SearchRecord {
        object_id: id.to_owned(),
        title: "Shirt".to_owned(),
        price: Decimal::new(price_cents, 2),
        compare_at_price: Decimal::ZERO,
    }
}

#[tokio::test]
async fn save_objects_posts_update_object_batch() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/1/indexes/products_en/batch"))
        .and(header("X-Algolia-Application-Id", "APPID"))
        .and(header("X-Algolia-API-Key", "admin-key"))
        .and(body_json(json!({
            "requests": [
                {
                    "action": "updateObject",
                    "body": { "objectID": "V1", "title": "Shirt", "price": 10.5, "compareAtPrice": 0.0 }
                },
                {
                    "action": "updateObject",
                    "body": { "objectID": "V2", "title": "Shirt", "price": 12.0, "compareAtPrice": 0.0 }
                }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "taskID": 42,
            "objectIDs": ["V1", "V2"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let ack = client
        .save_objects(&[record("V1", 1050), record("V2", 1200)])
        .await
        .expect("batch should be accepted");

    assert_eq!(ack.task_id, Some(42));
    assert_eq!(ack.object_ids, vec!["V1".to_owned(), "V2".to_owned()]);
}

#[tokio::test]
async fn save_objects_surfaces_api_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/1/indexes/products_en/batch"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "Invalid Application-ID or API key",
            "status": 403
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.save_objects(&[record("V1", 100)]).await;

    match result {
        Err(IndexError::UnexpectedStatus {
            index,
            status,
            message,
        }) => {
            assert_eq!(index, "products_en");
            assert_eq!(status, 403);
            assert_eq!(message, "Invalid Application-ID or API key");
        }
        other => panic!("expected IndexError::UnexpectedStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn save_objects_keeps_raw_body_when_error_is_not_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/1/indexes/products_en/batch"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.save_objects(&[record("V1", 100)]).await;
    assert!(
        matches!(result, Err(IndexError::UnexpectedStatus { status: 502, ref message, .. }) if message == "bad gateway"),
        "expected 502 with raw body, got: {result:?}"
    );
}

#[tokio::test]
async fn save_objects_tolerates_unrecognized_acknowledgement() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/1/indexes/products_en/batch"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let ack = client.save_objects(&[record("V1", 100)]).await.unwrap();
    assert!(ack.task_id.is_none());
    assert!(ack.object_ids.is_empty());
}

#[tokio::test]
async fn save_objects_surfaces_connection_failure_as_http_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    let client = test_client(&format!("http://127.0.0.1:{port}"));

    let result = client.save_objects(&[record("gid://shopify/ProductVariant/1", 1000)]).await;

    assert!(
        matches!(result, Err(IndexError::Http(_))),
        "expected Http error, got: {result:?}"
    );
}
