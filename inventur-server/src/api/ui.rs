//! UI serving routes
//!
//! Serves the intake form and the admin dashboard as embedded HTML.

use axum::{response::Html, Extension, Json};

use crate::api::auth::AdminIdentity;
use crate::buildings::BUILDINGS;

const INDEX_HTML: &str = include_str!("../../ui/index.html");
const ADMIN_HTML: &str = include_str!("../../ui/admin.html");

/// GET /
///
/// Serves the intake form
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /admin
///
/// Serves the admin dashboard, greeting the authenticated user
pub async fn serve_admin(Extension(identity): Extension<AdminIdentity>) -> Html<String> {
    Html(ADMIN_HTML.replace("{{user}}", &escape_html(&identity.0)))
}

/// GET /api/buildings
pub async fn get_buildings() -> Json<&'static [&'static str]> {
    Json(BUILDINGS)
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
