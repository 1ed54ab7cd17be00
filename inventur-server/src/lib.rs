//! inventur-server library - inventory intake service
//!
//! Public intake form and submission endpoint, plus a password protected
//! admin area for reviewing, archiving and exporting submissions.

use axum::Router;
use inventur_common::api::auth::AdminCredentials;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod archive;
pub mod buildings;
pub mod db;
pub mod error;
pub mod export;
pub mod intake;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Admin account checked by the auth middleware
    pub credentials: AdminCredentials,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, credentials: AdminCredentials) -> Self {
        Self { db, credentials }
    }
}

/// Build application router
///
/// Admin routes require HTTP Basic credentials; the intake form, the
/// submission endpoint, the building list and the health check do not.
pub fn build_router(state: AppState) -> Router {
    use axum::middleware;
    use axum::routing::{get, post};

    // Protected routes (require authentication)
    let protected = Router::new()
        .route("/admin", get(api::serve_admin))
        .route("/admin/data", get(api::get_admin_data))
        .route("/admin/export", get(api::export_csv))
        .route("/admin/toggle-archive/:item_id", post(api::toggle_archive))
        .route("/admin/toggle-submission/:group_id", post(api::toggle_submission))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api::auth_middleware,
        ));

    // Public routes (no authentication)
    let public = Router::new()
        .route("/", get(api::serve_index))
        .route("/submit-all", post(api::submit_all))
        .route("/api/buildings", get(api::get_buildings))
        .merge(api::health_routes());

    // Combine routers
    Router::new()
        .merge(protected)
        .merge(public)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
