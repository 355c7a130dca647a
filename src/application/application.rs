use super::{payload_too_large_json, ApplicationMiddleware, ApplicationState};
use crate::routing::routing;
use axum::{middleware, Router};

pub fn create_application(
    application_state: ApplicationState,
    application_middleware: ApplicationMiddleware,
) -> Router {
    let router = routing()
        .with_state(application_state)
        .layer(application_middleware.body_limit)
        .layer(middleware::map_response(payload_too_large_json));

    let router = match application_middleware.cors {
        Some(cors) => router.layer(cors),
        None => router,
    };

    router.layer(application_middleware.trace)
}
