//! Integration tests for the blocking facade using mockito

use quickreq::{blocking, ReqError, RequestOptions};
use serde_json::json;

#[test]
fn test_blocking_get() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("GET", "/status")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"healthy": true}"#)
        .create();

    let url = format!("{}/status", server.url());
    let resp = blocking::get(&url, RequestOptions::default()).expect("GET should succeed");

    assert!(resp.ok());
    let body: serde_json::Value = resp.json().unwrap();
    assert_eq!(body, json!({"healthy": true}));

    mock.assert();
}

#[test]
fn test_blocking_post_json() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("POST", "/items")
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::Json(json!({"name": "widget"})))
        .with_status(500)
        .with_body("boom")
        .create();

    let url = format!("{}/items", server.url());
    let resp = blocking::post(&url, None, Some(json!({"name": "widget"})), RequestOptions::default())
        .expect("500 is still a response");

    assert!(!resp.ok());
    assert_eq!(resp.reason(), "Internal Server Error");
    assert!(matches!(resp.raise_for_status(), Err(ReqError::Status(_))));

    mock.assert();
}

#[test]
fn test_blocking_redirect_conflict() {
    let err = blocking::get("http://192.0.2.1:9/", RequestOptions::default().allow_redirects(false))
        .unwrap_err();
    assert!(matches!(err, ReqError::RedirectPolicy { requested: false, .. }));
}

#[test]
fn test_blocking_head() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("HEAD", "/file")
        .with_status(200)
        .with_header("x-size", "1234")
        .create();

    let url = format!("{}/file", server.url());
    let resp = blocking::head(&url, RequestOptions::default()).unwrap();

    assert_eq!(resp.status_code(), 200);
    assert_eq!(resp.headers()["x-size"], "1234");
    assert!(resp.content().is_empty());

    mock.assert();
}

#[tokio::test]
async fn test_blocking_inside_runtime_returns_error() {
    let err = blocking::get("http://192.0.2.1:9/", RequestOptions::default()).unwrap_err();
    assert!(matches!(err, ReqError::Runtime(_)), "expected runtime error, got {:?}", err);
}
