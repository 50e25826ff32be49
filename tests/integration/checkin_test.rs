//! Integration tests for sign-in, seat updates, lookups and listings.

use std::collections::HashSet;
use std::sync::Arc;

use http::StatusCode;
use serde_json::Value;

use checkin_core::config::AppConfig;
use checkin_core::config::store::{StoreBackend, StoreConfig};
use checkin_database::Database;

use crate::helpers::{self, TestApp};

#[tokio::test]
async fn test_sign_binds_account_and_assigns_seat() {
    let app = TestApp::new(3, 2).await;

    let data = app.sign(1001, 1).await;

    assert_eq!(data["id"], 1001);
    assert_eq!(data["name"], "Student1001");
    assert_eq!(data["username"], "oj001");
    assert_eq!(data["password"], "pw1");
    assert_eq!(data["site"], 1);
    assert!(matches!(data["seat"].as_i64(), Some(1 | 2)));
    assert_eq!(data["note"], "");
    assert_eq!(data["qrcode"].as_str().map(str::len), Some(64));
    assert!(data["time"].is_string());

    assert_eq!(
        app.notifier.lines().await,
        vec![
            "[BACKUP_USER] 1 -> 1001".to_string(),
            format!("[SIGN] 1001 (Student1001) [1]{}", data["seat"]),
        ]
    );
}

#[tokio::test]
async fn test_sign_is_idempotent() {
    let app = TestApp::new(3, 3).await;

    let first = app.sign(1001, 2).await;
    let again = app.sign(1001, 1).await;

    assert_eq!(first, again);
    assert_eq!(app.db.signs().count().await, 1);
    assert_eq!(app.db.seats().count_used().await, 1);
    assert_eq!(app.notifier.lines().await.len(), 2);
}

#[tokio::test]
async fn test_sign_validation_failures() {
    let app = TestApp::new(1, 1).await;

    app.request("POST", "/api/sign?id=abc&site=1")
        .await
        .assert_domain_failure("id is not a number");
    app.request("POST", "/api/sign?id=1001&site=3")
        .await
        .assert_domain_failure("wrong site");
    app.request("POST", "/api/sign?id=1001")
        .await
        .assert_domain_failure("wrong site");

    let response = app.request("POST", "/api/sign?id=1001&site=0").await;
    assert_eq!(response.body["error"], "VALIDATION");
    assert_eq!(app.db.signs().count().await, 0);
}

#[tokio::test]
async fn test_sign_unknown_student() {
    let app = TestApp::new(1, 1).await;
    app.request("POST", "/api/sign?id=42&site=1")
        .await
        .assert_domain_failure("student id not found");
    assert_eq!(app.db.participants().count_unbound().await, 1);
}

#[tokio::test]
async fn test_no_account_available() {
    let app = TestApp::new(1, 5).await;
    app.sign(1001, 1).await;

    let response = app.request("POST", "/api/sign?id=1002&site=1").await;
    response.assert_domain_failure("no account available");
    assert_eq!(response.body["error"], "CONFLICT");
    assert_eq!(app.db.signs().count().await, 1);
    assert_eq!(app.db.seats().count_used().await, 1);
}

#[tokio::test]
async fn test_full_site_signs_without_seat() {
    let app = TestApp::new(3, 1).await;
    let seated = app.sign(1001, 2).await;
    let unseated = app.sign(1002, 2).await;

    assert_eq!(seated["seat"], 1);
    assert_eq!(unseated["seat"], -1);
    assert!(
        app.notifier
            .lines()
            .await
            .contains(&"[SIGN] 1002 (Student1002) [2]no seat".to_string())
    );

    // The other site is unaffected.
    let other = app.sign(1003, 1).await;
    assert_eq!(other["seat"], 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_signs_never_share_a_seat() {
    let app = Arc::new(TestApp::new(20, 12).await);

    let mut handles = Vec::new();
    for id in 1001..1021 {
        let app = Arc::clone(&app);
        handles.push(tokio::spawn(async move {
            app.request("POST", &format!("/api/sign?id={id}&site=1"))
                .await
        }));
    }

    let mut seats = Vec::new();
    let mut usernames = HashSet::new();
    for handle in handles {
        let response = handle.await.unwrap();
        assert_eq!(response.status, StatusCode::OK, "{}", response.text);
        let data = &response.body["data"];
        usernames.insert(data["username"].as_str().unwrap().to_string());
        let seat = data["seat"].as_i64().unwrap();
        if seat != -1 {
            seats.push(seat);
        }
    }

    let distinct: HashSet<i64> = seats.iter().copied().collect();
    assert_eq!(seats.len(), 12);
    assert_eq!(distinct.len(), 12);
    assert_eq!(usernames.len(), 20);
    assert_eq!(app.db.seats().count_used().await, 12);
}

#[tokio::test]
async fn test_update_moves_participant() {
    let app = TestApp::new(2, 3).await;
    let before = app.sign(1001, 1).await;
    let old_seat = before["seat"].as_i64().unwrap();
    let target = if old_seat == 3 { 2 } else { 3 };

    let response = app
        .request(
            "POST",
            &format!("/api/update?id=1001&seat={target}&name=Renamed&note=front"),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.text);
    let data = &response.body["data"];
    assert_eq!(data["seat"], target);
    assert_eq!(data["name"], "Renamed");
    assert_eq!(data["note"], "front");

    let by_seat = app
        .request("GET", &format!("/api/query?seat={target}&site=1"))
        .await;
    assert_eq!(by_seat.body["data"]["id"], 1001);
    app.request("GET", &format!("/api/query?seat={old_seat}&site=1"))
        .await
        .assert_domain_failure("no record");

    // The freed seat is allocatable again.
    assert_eq!(app.db.seats().count_used().await, 1);
    assert!(
        app.notifier
            .lines()
            .await
            .contains(&format!("[UPDATE] 1001 (Renamed) [1]{target}"))
    );
}

#[tokio::test]
async fn test_update_failures() {
    let app = TestApp::new(3, 10).await;
    let a = app.sign(1001, 1).await;
    let b = app.sign(1002, 1).await;

    app.request("POST", "/api/update?id=1001&seat=11")
        .await
        .assert_domain_failure("no such seat");
    app.request("POST", &format!("/api/update?id=1001&seat={}", b["seat"]))
        .await
        .assert_domain_failure("seat already taken");
    app.request("POST", "/api/update?id=9999&seat=1")
        .await
        .assert_domain_failure("no such user");
    app.request("POST", "/api/update?id=1001&seat=x")
        .await
        .assert_domain_failure("seat is not a number");
    app.request("POST", "/api/update?id=&seat=1")
        .await
        .assert_domain_failure("id is not a number");

    let unchanged = app.request("GET", "/api/query?id=1001").await;
    assert_eq!(unchanged.body["data"]["seat"], a["seat"]);
    assert_eq!(app.db.seats().count_used().await, 2);
}

#[tokio::test]
async fn test_queries() {
    let app = TestApp::new(2, 2).await;
    let signed = app.sign(1001, 2).await;

    let by_id = app.request("GET", "/api/query?id=1001").await;
    assert_eq!(by_id.body["data"], signed);

    let by_username = app.request("GET", "/api/query?username=oj001").await;
    assert_eq!(by_username.body["data"], signed);

    let legacy = app.request("GET", "/api/query?ojUsername=oj001").await;
    assert_eq!(legacy.body["data"]["id"], 1001);

    let blank = app.request("GET", "/api/query?username=oj002").await;
    assert_eq!(blank.status, StatusCode::OK);
    assert_eq!(blank.body["data"]["id"], Value::Null);
    assert_eq!(blank.body["data"]["seat"], Value::Null);

    app.request("GET", "/api/query")
        .await
        .assert_domain_failure("usage: (id) or (seat, site) or (username)");
    app.request("GET", "/api/query?id=7")
        .await
        .assert_domain_failure("no such user");
    app.request("GET", "/api/query?username=nobody")
        .await
        .assert_domain_failure("no such username");
}

#[tokio::test]
async fn test_signs_listing_and_stats() {
    let app = TestApp::new(4, 2).await;
    app.sign(1003, 1).await;
    app.sign(1001, 2).await;

    let signs = app.request("GET", "/api/signs").await;
    assert_eq!(signs.status, StatusCode::OK);
    let usernames: Vec<&str> = signs.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["username"].as_str().unwrap())
        .collect();
    assert_eq!(usernames, vec!["oj001", "oj002"]);

    let stats = app.request("GET", "/api/stats").await;
    assert_eq!(
        stats.body["data"],
        serde_json::json!({
            "bound_participants": 2,
            "total_participants": 4,
            "signs": 2,
            "used_seats": 2,
            "total_seats": 4
        })
    );
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new(0, 0).await;
    let response = app.request("GET", "/api/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_signs_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let store = StoreConfig {
        backend: StoreBackend::File,
        path: dir.path().join("data.json").to_string_lossy().into_owned(),
    };

    // Seed the file, then serve from it.
    let seeded = Database::in_memory(helpers::pool(2, 2)).await.unwrap();
    let snapshot = seeded.snapshot().await;
    std::fs::write(&store.path, serde_json::to_vec(&snapshot).unwrap()).unwrap();

    let config = AppConfig {
        store: store.clone(),
        ..AppConfig::default()
    };
    let db = Arc::new(Database::from_config(&store).await.unwrap());
    let app = TestApp::with_database(db, config.clone());
    let signed = app.sign(1001, 1).await;

    let reopened = Arc::new(Database::from_config(&store).await.unwrap());
    let restarted = TestApp::with_database(reopened, config);
    let again = restarted.sign(1001, 1).await;

    assert_eq!(signed, again);
    assert_eq!(restarted.db.seats().count_used().await, 1);
    assert_eq!(restarted.db.participants().count_unbound().await, 1);
}
