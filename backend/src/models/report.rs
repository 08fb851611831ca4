use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::sentiment::{ScoredHeadline, Sentiment, SentimentBreakdown};

/// One slice of the proportional sentiment chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSlice {
    pub label: String,
    pub count: u32,
    pub color: String,
}

impl ChartSlice {
    pub fn for_bucket(bucket: Sentiment, count: u32) -> Self {
        Self {
            label: bucket.label().to_string(),
            count,
            color: bucket.color().to_string(),
        }
    }
}

/// Display-ready result of one ticker query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerSentimentReport {
    pub ticker: String,
    /// Per-headline classification, preserving retrieval order.
    pub headlines: Vec<ScoredHeadline>,
    pub breakdown: SentimentBreakdown,
    /// `None` when no headlines were tallied; the page suppresses the chart
    /// instead of drawing a degenerate pie.
    pub chart: Option<Vec<ChartSlice>>,
    pub fetched_at: DateTime<Utc>,
}
