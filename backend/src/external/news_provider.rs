use async_trait::async_trait;
use thiserror::Error;

use crate::models::NewsArticle;

#[derive(Debug, Error)]
pub enum NewsProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("rate limited")]
    RateLimited,

    #[error("unauthorized (check NEWS_API_KEY)")]
    Unauthorized,
}

/// A source of recent headlines for a ticker.
///
/// Implementations return articles in the order the source reports them
/// (newest first for NewsAPI); the itemized display preserves that order.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    async fn fetch_headlines(
        &self,
        ticker: &str,
        max_results: u32,
    ) -> Result<Vec<NewsArticle>, NewsProviderError>;
}
