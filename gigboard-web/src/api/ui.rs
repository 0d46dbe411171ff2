//! Landing page
//!
//! The directory pages themselves are rendered by an external template
//! layer from the JSON page models; only the landing shell is served
//! from here.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../ui/index.html");

/// GET /
///
/// Serves the landing page
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
