use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware::from_fn,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    middleware::{make_span_with_request_id, request_id_middleware},
    state::AppState,
};

pub mod guides;
pub mod outfits;
pub mod predict;

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/predict",
            post(predict::predict).layer(DefaultBodyLimit::max(state.max_upload_bytes)),
        )
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/outfits", get(outfits::list))
        .route("/outfits/:id", get(outfits::get))
        .route(
            "/outfits/:id/ratings",
            get(outfits::rating_summary).post(outfits::submit_rating),
        )
        .route("/occasions", get(guides::list_occasions))
        .route("/occasions/:key", get(guides::occasion_advice))
        .route("/budget-outfits", get(guides::budget_outfits))
        .route("/weather-style", get(guides::weather_style))
        .route("/chat", post(guides::chat))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
