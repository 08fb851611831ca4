mod news;
mod report;
mod sentiment;

pub use news::NewsArticle;
pub use report::{ChartSlice, TickerSentimentReport};
pub use sentiment::{
    ScoredHeadline, Sentiment, SentimentBreakdown, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD,
};
