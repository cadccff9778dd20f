use axum::{http::StatusCode, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        addresses::{create_address, list_addresses, list_addresses_between},
        root::{hello, method_not_allowed, not_found, redirect_with_slash},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let timeout = state.request_timeout;

    Router::new()
        .route("/", get(hello).fallback(method_not_allowed))
        .route(
            "/address/",
            get(list_addresses)
                .post(create_address)
                .fallback(method_not_allowed),
        )
        .route(
            "/between_address/",
            get(list_addresses_between).fallback(method_not_allowed),
        )
        // Slashless paths redirect to their canonical form
        .route(
            "/address",
            get(redirect_with_slash)
                .post(redirect_with_slash)
                .fallback(method_not_allowed),
        )
        .route(
            "/between_address",
            get(redirect_with_slash).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .with_state(state)
}
