use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single news article as returned by the news source.
///
/// Ephemeral: created per fetch, classified, discarded with the query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub url: String,
    pub source: String,
    pub published_at: Option<DateTime<Utc>>,
    pub description: Option<String>,
}
