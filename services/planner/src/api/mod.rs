//! HTTP API handlers and routing.

mod allocations;
mod classrooms;
pub mod error;
mod fields;
mod health;
pub mod request_context;

use axum::{
    http::{header, HeaderName, Method, Uri},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api::error::ApiError;
use crate::api::request_context::RequestContext;
use crate::state::AppState;

/// Create the main API router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The browser front-end is served from a different origin.
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(request_context::REQUEST_ID_HEADER),
        ])
        .allow_origin(Any);

    let api = Router::new()
        .nest("/classrooms", classrooms::routes())
        .merge(allocations::routes());

    Router::new()
        // Health endpoints
        .merge(health::routes())
        .nest("/api", api)
        .fallback(route_not_found)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Application state
        .with_state(state)
}

/// Unknown paths answer with problem details like every other failure.
async fn route_not_found(ctx: RequestContext, uri: Uri) -> ApiError {
    ApiError::not_found("route_not_found", format!("No route for {}", uri.path()))
        .with_request_id(ctx.request_id)
}
