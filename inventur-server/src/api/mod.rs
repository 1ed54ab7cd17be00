//! HTTP API handlers for inventur-server

pub mod admin;
pub mod auth;
pub mod export;
pub mod health;
pub mod submit;
pub mod ui;

pub use admin::{get_admin_data, toggle_archive, toggle_submission};
pub use auth::{auth_middleware, AdminIdentity};
pub use export::export_csv;
pub use health::health_routes;
pub use submit::submit_all;
pub use ui::{get_buildings, serve_admin, serve_index};
