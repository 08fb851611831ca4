use axum::response::Html;

/// GET /
///
/// The interactive page: a ticker input, the itemized headline list, the
/// sentiment pie chart, and the error banner. All rendering happens client
/// side against /api/sentiment/:ticker.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
