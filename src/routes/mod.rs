//! HTTP routes

pub mod api;
pub mod booking;
pub mod pages;

use axum::routing::get;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Build the application router with all routes and middleware
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/hotel_price", get(api::hotel_price))
        .route("/api/hotels", get(api::hotels))
        .route("/api/packages", get(api::packages))
        .route("/api/package/:id/itinerary", get(api::itinerary));

    Router::new()
        .route("/", get(pages::home))
        .route("/packages", get(pages::packages))
        .route("/package/:id", get(pages::package_detail))
        .route("/book/:package_id", get(booking::form).post(booking::submit))
        .route("/health", get(api::health))
        .merge(api)
        .nest_service("/static", ServeDir::new("static"))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
