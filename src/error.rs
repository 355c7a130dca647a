use crate::{dto::output, repository};
use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("request body too large")]
    PayloadTooLarge,

    #[error("route not found")]
    RouteNotFound,

    #[error("user not exist")]
    UserNotExist,

    #[error("cinema not exist")]
    CinemaNotExist,

    #[error("reservation abandoned after {rounds} contended rounds")]
    ReservationContention { rounds: u32 },

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        let status = match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Error::RouteNotFound => StatusCode::NOT_FOUND,
            Error::UserNotExist => StatusCode::NOT_FOUND,
            Error::CinemaNotExist => StatusCode::NOT_FOUND,
            Error::ReservationContention { rounds: _ } => StatusCode::CONFLICT,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match self {
            Error::Validation(message) => message.to_string(),
            Error::Database(_) => "internal server error".to_string(),
            err => err.to_string(),
        };

        (status, Json(output::Failure::new(message))).into_response()
    }
}

impl From<JsonRejection> for Error {
    fn from(value: JsonRejection) -> Self {
        match value.status() {
            StatusCode::PAYLOAD_TOO_LARGE => Error::PayloadTooLarge,
            _ => Error::Validation("request body is not valid JSON"),
        }
    }
}

impl From<PathRejection> for Error {
    fn from(_: PathRejection) -> Self {
        Error::Validation("malformed path")
    }
}

impl From<QueryRejection> for Error {
    fn from(_: QueryRejection) -> Self {
        Error::Validation("malformed query string")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;
    use std::sync::Arc;

    async fn response_json(err: Error) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn validation_bad_request_with_message() {
        let (status, body) = response_json(Error::Validation("name is required")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "name is required");
    }

    #[tokio::test]
    async fn user_not_exist_not_found() {
        let (status, body) = response_json(Error::UserNotExist).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn database_error_message_generic() {
        let err = Error::Database(repository::Error::Mongo(
            mongodb::error::ErrorKind::Custom(Arc::new("connection refused at 10.0.0.7")).into(),
        ));

        let (status, body) = response_json(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "internal server error");
    }
}
