use serde::{Deserialize, Serialize};

/// Polarity strictly above this is positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Polarity strictly below this is negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Sentiment bucket assigned to a headline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Map a polarity score to its bucket.
    ///
    /// Strict inequality on both bounds: exactly 0.1 and exactly -0.1 are
    /// neutral. Total over any f64 input (NaN fails both comparisons and
    /// lands neutral).
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Label shown in the itemized list and the chart legend.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }

    /// Fixed chart color assignment: green / red / yellow.
    pub fn color(&self) -> &'static str {
        match self {
            Sentiment::Positive => "#2ecc71",
            Sentiment::Negative => "#e74c3c",
            Sentiment::Neutral => "#f1c40f",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

/// A headline paired with its polarity score and bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredHeadline {
    pub title: String,
    pub polarity: f64,
    pub sentiment: Sentiment,
}

/// Per-query tally of headlines by bucket.
///
/// Counts always sum to the number of headlines classified in the query.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentimentBreakdown {
    pub positive: u32,
    pub negative: u32,
    pub neutral: u32,
}

impl SentimentBreakdown {
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    pub fn count(&self, sentiment: Sentiment) -> u32 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> u32 {
        self.positive + self.negative + self.neutral
    }
}
