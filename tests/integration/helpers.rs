//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use checkin_api::{AppState, build_app};
use checkin_core::config::AppConfig;
use checkin_core::types::Site;
use checkin_database::{Database, Snapshot};
use checkin_entity::{Participant, Seat};
use checkin_service::identity::StaticIdentityResolver;
use checkin_service::notification::MemoryNotifier;

/// First external id known to the test identity service.
pub const FIRST_STUDENT: i64 = 1001;

/// Number of external ids known to the test identity service.
pub const STUDENTS: i64 = 50;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Document store for direct inspection
    pub db: Arc<Database>,
    /// Recorded notification lines
    pub notifier: Arc<MemoryNotifier>,
}

impl TestApp {
    /// App with `accounts` blank accounts and `seats_per_site` seats in each site.
    pub async fn new(accounts: u32, seats_per_site: u32) -> Self {
        let db = Database::in_memory(pool(accounts, seats_per_site))
            .await
            .expect("Failed to open database");
        Self::with_database(Arc::new(db), AppConfig::default())
    }

    /// App over an existing database.
    pub fn with_database(db: Arc<Database>, config: AppConfig) -> Self {
        let identity = (FIRST_STUDENT..FIRST_STUDENT + STUDENTS).fold(
            StaticIdentityResolver::new(),
            |resolver, id| resolver.with(id, format!("Student{id}")),
        );
        let notifier = Arc::new(MemoryNotifier::new());
        let state = AppState::new(
            config,
            Arc::clone(&db),
            Arc::new(identity),
            notifier.clone(),
        );

        Self {
            router: build_app(state),
            db,
            notifier,
        }
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body, text }
    }

    /// `POST /api/sign`, expecting success; returns the projection.
    pub async fn sign(&self, id: i64, site: u8) -> Value {
        let response = self
            .request("POST", &format!("/api/sign?id={id}&site={site}"))
            .await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.text);
        response.body["data"].clone()
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Null` for non-JSON bodies)
    pub body: Value,
    /// Raw body
    pub text: String,
}

impl TestResponse {
    /// Asserts a domain failure carrying `message`.
    pub fn assert_domain_failure(&self, message: &str) {
        assert_eq!(self.status.as_u16(), 450, "{}", self.text);
        assert_eq!(self.body["message"], message);
    }
}

/// A pool of blank accounts and free seats.
pub fn pool(accounts: u32, seats_per_site: u32) -> Snapshot {
    let participants = (1..=accounts)
        .map(|slot| Participant::blank(slot, format!("oj{slot:03}"), format!("pw{slot}")))
        .collect();
    let seats = Site::ALL
        .iter()
        .flat_map(|&site| {
            (1..=seats_per_site).map(move |n| {
                Seat::new(u32::from(site.number()) * 1000 + n, site, n, 0)
            })
        })
        .collect();
    Snapshot {
        participants,
        signs: Vec::new(),
        seats,
    }
}
