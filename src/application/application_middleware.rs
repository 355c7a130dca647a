use super::ApplicationEnv;
use crate::error::Error;
use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

pub struct ApplicationMiddleware {
    pub trace: TraceLayer<SharedClassifier<ServerErrorsAsFailures>>,
    pub body_limit: RequestBodyLimitLayer,
    /// Only present when a browser origin is allowed
    pub cors: Option<CorsLayer>,
}

pub fn create_middleware(env: &ApplicationEnv) -> ApplicationMiddleware {
    let trace = TraceLayer::new_for_http();

    let body_limit = RequestBodyLimitLayer::new(env.max_http_content_len);

    let cors = env.cors_allowed_origin.clone().map(|origin| {
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_origin(origin)
            .allow_headers([header::CONTENT_TYPE])
    });

    ApplicationMiddleware {
        trace,
        body_limit,
        cors,
    }
}

///
/// [RequestBodyLimitLayer] rejects bodies with too large `Content-Length`
/// before routing, this rewrites its plain text response into [Error::PayloadTooLarge]
///
pub async fn payload_too_large_json(response: Response) -> Response {
    let is_json = response.headers().get(header::CONTENT_TYPE)
        == Some(&HeaderValue::from_static("application/json"));

    match response.status() {
        StatusCode::PAYLOAD_TOO_LARGE if !is_json => Error::PayloadTooLarge.into_response(),
        _ => response,
    }
}
