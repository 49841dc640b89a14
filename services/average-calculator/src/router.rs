use crate::handlers::{self, numbers};
use crate::state::AppState;
use axum::{Router, http::StatusCode, routing::get};
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/numbers/{numberid}", get(numbers::get_numbers))
        .fallback(handlers::not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
