//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    crawler_status_handler, create_platform_handler, health_handler, list_genres_handler,
    list_novels_handler, list_platforms_handler, novel_detail_handler,
    platform_connection_test_handler, platform_novels_handler, popular_novels_handler,
    trigger_crawl_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub server_deps: Arc<ServerDeps>,
}

/// Build the Axum application router
pub fn build_app(server_deps: ServerDeps) -> Router {
    let app_state = AxumAppState {
        server_deps: Arc::new(server_deps),
    };

    // CORS configuration - the catalog frontend is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    let api = Router::new()
        // Novels (static segments take precedence over :id)
        .route("/novels", get(list_novels_handler))
        .route("/novels/popular", get(popular_novels_handler))
        .route("/novels/platform/:platform", get(platform_novels_handler))
        .route("/novels/:id", get(novel_detail_handler))
        .route("/genres", get(list_genres_handler))
        // Crawler service hand-off
        .route("/crawler/trigger/:platform", post(trigger_crawl_handler))
        .route("/crawler/status", get(crawler_status_handler))
        // Platform registry
        .route(
            "/platforms",
            get(list_platforms_handler).post(create_platform_handler),
        )
        .route("/platforms/test", get(platform_connection_test_handler));

    Router::new()
        .nest("/api", api)
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
