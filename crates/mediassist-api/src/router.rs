use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    middleware::{logging, timeout},
    openapi,
    routes::{chat, clinics, health, page, reminders, session},
    state::AppState,
};

pub fn build_router(state: Arc<AppState>) -> Router {
    // JSON API behind the page
    let api_routes = Router::new()
        .route("/api/session", post(session::create_session))
        .route("/api/chat", post(chat::get_health_advice))
        .route(
            "/api/reminders",
            get(reminders::list_reminders).post(reminders::add_reminder),
        )
        .route("/api/clinics", post(clinics::search_clinics))
        .route("/api/openapi.json", get(openapi::openapi_json));
    
    // Build full router with middleware
    Router::new()
        .route("/", get(page::index))
        .route("/health", get(health::health_check))
        .merge(api_routes)
        .layer(middleware::from_fn(logging::log_request))
        .layer(TimeoutLayer::new(Duration::from_secs(
            state.config.server.request_timeout_secs,
        )))
        .layer(middleware::map_response(timeout::timeout_as_json))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    if !config.cors.enabled {
        // Same-origin page; no cross-origin access
        return CorsLayer::new();
    }
    
    let cors = CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers(Any);
    
    if config.cors.origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let parsed_origins: Vec<axum::http::HeaderValue> = config.cors.origins
            .iter()
            .filter_map(|o| o.parse::<axum::http::HeaderValue>().ok())
            .collect();
        
        cors.allow_origin(parsed_origins)
    }
}
