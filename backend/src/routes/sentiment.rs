use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::TickerSentimentReport;
use crate::services::sentiment_service;
use crate::state::AppState;

/// Query parameters for a ticker sentiment query.
#[derive(Debug, Deserialize)]
pub struct SentimentQueryParams {
    /// Maximum number of headlines to fetch (default: 10).
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    10
}

pub fn router() -> Router<AppState> {
    Router::new().route("/:ticker", get(get_ticker_sentiment))
}

/// GET /api/sentiment/:ticker
/// Query params: limit (default: 10)
///
/// Fetch recent headlines for a ticker and classify each into a sentiment
/// bucket. One query, one pass: a retrieval failure produces a single error
/// response with no partial results, and an empty result set produces a
/// valid all-zero report.
pub async fn get_ticker_sentiment(
    Path(ticker): Path<String>,
    Query(params): Query<SentimentQueryParams>,
    State(state): State<AppState>,
) -> Result<Json<TickerSentimentReport>, AppError> {
    let ticker = ticker.trim().to_uppercase();
    if ticker.is_empty() {
        return Err(AppError::Validation("ticker must not be empty".to_string()));
    }

    info!(
        "GET /api/sentiment/{} - analyzing headlines (limit={})",
        ticker, params.limit
    );

    let articles = state.news_provider.fetch_headlines(&ticker, params.limit).await?;

    let (headlines, breakdown) =
        sentiment_service::analyze_headlines(state.polarity_model.as_ref(), &articles);

    info!(
        "Classified {} headlines for {}: {} positive, {} negative, {} neutral",
        breakdown.total(),
        ticker,
        breakdown.positive,
        breakdown.negative,
        breakdown.neutral
    );

    Ok(Json(sentiment_service::build_report(&ticker, headlines, breakdown)))
}
