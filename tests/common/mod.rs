use axum::{
    body::{to_bytes, Body},
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE},
        Method, Request, StatusCode,
    },
    Router,
};
use bookit_seats::{
    application::{self, ApplicationEnv, StorageEnv},
    repository::{TheatresRepositoryMemory, UsersRepository, UsersRepositoryMemory},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const MAX_HTTP_CONTENT_LEN: usize = 4096;
pub const SEATS_LOAD_THRESHOLD: usize = 3;

pub const REGISTERED_EMAIL: &str = "jane@example.com";
pub const OTHER_REGISTERED_EMAIL: &str = "john@example.com";

pub fn env() -> ApplicationEnv {
    ApplicationEnv {
        log_directory: "logs".to_string(),
        log_filename: "bookit-seats.log".to_string(),
        bind_address: ([127, 0, 0, 1], 0).into(),
        storage: StorageEnv::Memory,
        max_http_content_len: MAX_HTTP_CONTENT_LEN,
        seats_load_threshold: SEATS_LOAD_THRESHOLD,
        reservation_max_rounds: 8,
        cors_allowed_origin: None,
    }
}

///
/// Application over in-memory storage with two registered users
///
pub async fn create_application() -> Router {
    let env = env();

    let users_repository = UsersRepositoryMemory::new();
    users_repository
        .insert(REGISTERED_EMAIL, "Jane")
        .await
        .unwrap();
    users_repository
        .insert(OTHER_REGISTERED_EMAIL, "John")
        .await
        .unwrap();

    let state = application::create_services(
        &env,
        Arc::new(TheatresRepositoryMemory::new()),
        Arc::new(users_repository),
    );
    let middleware = application::create_middleware(&env);

    application::create_application(state, middleware)
}

pub async fn get(application: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(application, request).await
}

pub async fn post(application: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    post_raw(application, uri, body.to_string()).await
}

pub async fn post_raw(application: &Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap();

    send(application, request).await
}

/// Body is [Value::Null] when the response is not JSON
async fn send(application: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = application.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, body)
}

///
/// Uri of a showtime lookup endpoint, e.g. `booked-seats`
///
pub fn show_time_uri(
    endpoint: &str,
    theatre_name: &str,
    date: &str,
    show_time: &str,
    movie_name: &str,
) -> String {
    format!(
        "/bookit/cinema/{endpoint}?theatreName={}&date={}&showTime={}&movieName={}",
        encode(theatre_name),
        encode(date),
        encode(show_time),
        encode(movie_name),
    )
}

/// Percent-encodes spaces and colons, enough for the names used in tests
pub fn encode(value: &str) -> String {
    value.replace(' ', "%20").replace(':', "%3A")
}
