//! Integration tests for one-time credential tokens and the public page.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_token_page_is_single_use() {
    let app = TestApp::new(2, 2).await;
    let signed = app.sign(1001, 1).await;

    let issued = app.request("POST", "/api/new_qrcode?id=1001").await;
    assert_eq!(issued.status, StatusCode::OK, "{}", issued.text);
    let token = issued.body["data"]["qrcode"].as_str().unwrap().to_string();
    assert_eq!(token.len(), 64);
    assert_ne!(signed["qrcode"].as_str(), Some(token.as_str()));

    let page = app.request("GET", &format!("/qrcode/{token}")).await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.text.contains("<p>Student ID: 1001</p>"));
    assert!(page.text.contains("<p>Name: Student1001</p>"));
    assert!(page.text.contains("<code>oj001</code>"));
    assert!(page.text.contains("<code>pw1</code>"));
    assert!(page.text.contains(&format!("<p>Seat: {} (site 1)</p>", signed["seat"])));

    let second = app.request("GET", &format!("/qrcode/{token}")).await;
    assert_eq!(second.status, StatusCode::OK);
    assert!(second.text.contains("This address is invalid"));
    assert!(!second.text.contains("pw1"));

    let lookup = app.request("GET", "/api/query?id=1001").await;
    assert_eq!(lookup.body["data"]["qrcode"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_check_in_token_is_redeemable() {
    let app = TestApp::new(1, 1).await;
    let signed = app.sign(1001, 2).await;
    let token = signed["qrcode"].as_str().unwrap();

    let page = app.request("GET", &format!("/qrcode/{token}")).await;
    assert!(page.text.contains("<code>oj001</code>"));
}

#[tokio::test]
async fn test_reissue_invalidates_previous_token() {
    let app = TestApp::new(1, 1).await;
    let first = app.sign(1001, 1).await["qrcode"]
        .as_str()
        .unwrap()
        .to_string();

    let issued = app.request("POST", "/api/new_qrcode?id=1001").await;
    let second = issued.body["data"]["qrcode"].as_str().unwrap().to_string();

    let stale = app.request("GET", &format!("/qrcode/{first}")).await;
    assert!(stale.text.contains("This address is invalid"));
    let fresh = app.request("GET", &format!("/qrcode/{second}")).await;
    assert!(fresh.text.contains("<code>oj001</code>"));
}

#[tokio::test]
async fn test_issue_failures() {
    let app = TestApp::new(1, 1).await;

    app.request("POST", "/api/new_qrcode?id=1001")
        .await
        .assert_domain_failure("no such sign");
    app.request("POST", "/api/new_qrcode?id=abc")
        .await
        .assert_domain_failure("id is not a number");
}

#[tokio::test]
async fn test_unknown_token_page() {
    let app = TestApp::new(1, 1).await;
    let page = app.request("GET", "/qrcode/deadbeef").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.text.starts_with("<!DOCTYPE html>"));
    assert!(page.text.contains("This address is invalid"));
}
