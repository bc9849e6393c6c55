pub mod analytics;
pub mod error;
pub mod projects;
pub mod suggestions;
pub mod videos;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use trendpulse_ai::{CompletionClient, CompletionOptions};
use trendpulse_store::Store;

pub type AppState = Arc<AppStateInner>;

/// Shared application state, constructed once at startup and injected into
/// every handler. Tests build their own with a fresh store and a scripted
/// completion client.
pub struct AppStateInner {
    pub store: Store,
    pub ai: Arc<dyn CompletionClient>,
    pub ai_options: CompletionOptions,
}

/// Build the full application router over a shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/trending-videos", get(videos::list_trending_videos))
        .route("/api/analytics", get(analytics::get_analytics))
        .route(
            "/api/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/api/projects/{id}",
            get(projects::get_project)
                .patch(projects::update_project)
                .put(projects::update_project),
        )
        .route(
            "/api/content-suggestions",
            get(suggestions::list_content_suggestions),
        )
        .route("/api/ai-suggestions", post(suggestions::create_suggestions))
        .route("/api/analyze-content", post(suggestions::analyze))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// GET /health. Liveness check, no state.
async fn health() -> &'static str {
    "ok"
}
