use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// The single page hosting the three tabs
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
