// Helpers for driving the router in-process, without binding a socket.
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, Bytes},
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use serde::Serialize;
use serde_json::{Value, json};
use storage::InMemoryStore;
use tower::ServiceExt;
use web::{auth::TokenKeys, state::AppState};

pub const PASSWORD: &str = "squat2024";
pub const BENCH_PRESS: &str = "00000000-0000-0000-0000-000000000301";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
}

pub fn test_app() -> TestApp {
    let store = Arc::new(InMemoryStore::new());
    let state = AppState::new(store.clone(), TokenKeys::new("test-secret", 60));

    TestApp {
        router: web::app(state),
        store,
    }
}

pub struct TestRequest {
    method: Method,
    uri: String,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl TestRequest {
    fn new(method: Method, uri: &str) -> Self {
        Self {
            method,
            uri: uri.to_owned(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(uri: &str) -> Self {
        Self::new(Method::GET, uri)
    }

    pub fn post(uri: &str) -> Self {
        Self::new(Method::POST, uri)
    }

    pub fn put(uri: &str) -> Self {
        Self::new(Method::PUT, uri)
    }

    pub fn delete(uri: &str) -> Self {
        Self::new(Method::DELETE, uri)
    }

    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_owned(), value.to_owned()));
        self
    }

    pub fn bearer(self, token: &str) -> Self {
        self.header(header::AUTHORIZATION.as_str(), &format!("Bearer {token}"))
    }

    pub fn json<T: Serialize>(self, data: &T) -> Self {
        let body = serde_json::to_string(data).expect("Failed to serialize JSON");
        self.raw_json(&body)
    }

    pub fn raw_json(mut self, body: &str) -> Self {
        self.body = Some(body.to_owned());
        self.headers.push((
            header::CONTENT_TYPE.as_str().to_owned(),
            "application/json".to_owned(),
        ));
        self
    }

    pub async fn send(self, app: &Router) -> TestResponse {
        let mut builder = Request::builder().method(self.method).uri(self.uri);
        for (key, value) in self.headers {
            builder = builder.header(key, value);
        }

        let request = builder
            .body(Body::from(self.body.unwrap_or_default()))
            .expect("Failed to build request");

        let response = app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("Response body is not JSON")
    }

    pub fn data(&self) -> Value {
        self.json()["data"].clone()
    }

    pub fn error(&self) -> Value {
        self.json()["error"].clone()
    }

    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }

    /// `data.<field>` of a successful response, as a string.
    pub fn id(&self, field: &str) -> String {
        self.data()[field]
            .as_str()
            .unwrap_or_else(|| panic!("missing {field} in {}", self.json()))
            .to_owned()
    }
}

pub async fn register(app: &Router, email: &str) -> TestResponse {
    TestRequest::post("/api/auth/register")
        .json(&json!({ "email": email, "password": PASSWORD }))
        .send(app)
        .await
}

pub async fn login(app: &Router, email: &str) -> String {
    let response = TestRequest::post("/api/auth/login")
        .json(&json!({ "email": email, "password": PASSWORD }))
        .send(app)
        .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.json());

    response.data()["access_token"]
        .as_str()
        .expect("token missing")
        .to_owned()
}

/// A registered user's token and the id of their first default workout.
pub async fn signed_up(app: &Router, email: &str) -> (String, String) {
    let registered = register(app, email).await;
    assert_eq!(registered.status, StatusCode::CREATED, "{}", registered.json());

    let workout_id = registered.data()["workouts"][0]["workout_id"]
        .as_str()
        .expect("workout id missing")
        .to_owned();

    (login(app, email).await, workout_id)
}

/// Ids of one session, session exercise and set under `workout_id`.
pub struct Tree {
    pub session_id: String,
    pub session_exercise_id: String,
    pub set_id: String,
}

pub async fn build_tree(app: &Router, token: &str, workout_id: &str) -> Tree {
    let session = TestRequest::post(&format!("/api/workouts/{workout_id}/sessions"))
        .bearer(token)
        .json(&json!({}))
        .send(app)
        .await;
    assert_eq!(session.status, StatusCode::CREATED, "{}", session.json());
    let session_id = session.id("session_id");

    let session_exercise = TestRequest::post(&format!("/api/sessions/{session_id}/exercises"))
        .bearer(token)
        .json(&json!({ "exercise_id": BENCH_PRESS }))
        .send(app)
        .await;
    assert_eq!(
        session_exercise.status,
        StatusCode::CREATED,
        "{}",
        session_exercise.json()
    );
    let session_exercise_id = session_exercise.id("session_exercise_id");

    let set = TestRequest::post(&format!("/api/session-exercises/{session_exercise_id}/sets"))
        .bearer(token)
        .json(&json!({ "weight": "100.0", "reps": 5 }))
        .send(app)
        .await;
    assert_eq!(set.status, StatusCode::CREATED, "{}", set.json());

    Tree {
        session_id,
        session_exercise_id,
        set_id: set.id("set_id"),
    }
}
