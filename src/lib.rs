//! Team Admin Backend
//!
//! Validated CRUD over an in-memory team collection, with filtered, sorted and
//! paginated list views.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod query;
pub mod seed;
pub mod store;
pub mod validation;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use store::TeamStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TeamStore>,
    pub config: Arc<Config>,
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Teams
        .route("/teams", get(api::list_teams).post(api::create_team))
        .route("/teams/validate", post(api::validate_team_form))
        .route("/teams/code-availability", get(api::check_code_availability))
        .route("/teams/stats", get(api::team_stats))
        .route(
            "/teams/{id}",
            get(api::get_team)
                .put(api::update_team)
                .delete(api::delete_team),
        )
        // Store state
        .route("/store", get(api::get_store_status))
        .route("/store/error", delete(api::clear_store_error))
        // Form options
        .route("/options", get(api::get_options));

    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
