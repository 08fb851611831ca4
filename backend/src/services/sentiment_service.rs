//! The classify/aggregate core: pure functions from headlines to a
//! display-ready report. All network and UI concerns live elsewhere.

use chrono::Utc;
use tracing::debug;

use crate::models::{
    ChartSlice, NewsArticle, ScoredHeadline, Sentiment, SentimentBreakdown, TickerSentimentReport,
};
use crate::services::polarity_service::PolarityModel;

/// Score and classify a single headline.
pub fn classify_headline(model: &dyn PolarityModel, title: &str) -> ScoredHeadline {
    let polarity = model.score(title);
    ScoredHeadline {
        title: title.to_string(),
        polarity,
        sentiment: Sentiment::from_polarity(polarity),
    }
}

/// Classify every headline in one pass and tally the breakdown.
///
/// The itemized list preserves input order. The tally is commutative, so
/// processing order can never change the counts, and the counts always sum
/// to the input length.
pub fn analyze_headlines(
    model: &dyn PolarityModel,
    articles: &[NewsArticle],
) -> (Vec<ScoredHeadline>, SentimentBreakdown) {
    let mut breakdown = SentimentBreakdown::default();
    let mut scored = Vec::with_capacity(articles.len());

    for article in articles {
        let headline = classify_headline(model, &article.title);
        debug!("{} -> {}", headline.title, headline.sentiment);
        breakdown.record(headline.sentiment);
        scored.push(headline);
    }

    (scored, breakdown)
}

/// Chart slices in fixed order with the fixed color assignment.
fn chart_slices(breakdown: &SentimentBreakdown) -> Vec<ChartSlice> {
    [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral]
        .into_iter()
        .map(|bucket| ChartSlice::for_bucket(bucket, breakdown.count(bucket)))
        .collect()
}

/// Assemble the display-ready report for one query.
///
/// The chart is suppressed when nothing was tallied, so a percentage-based
/// renderer never divides by zero on an empty result set.
pub fn build_report(
    ticker: &str,
    headlines: Vec<ScoredHeadline>,
    breakdown: SentimentBreakdown,
) -> TickerSentimentReport {
    let chart = if breakdown.total() == 0 {
        None
    } else {
        Some(chart_slices(&breakdown))
    };

    TickerSentimentReport {
        ticker: ticker.to_string(),
        headlines,
        breakdown,
        chart,
        fetched_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scores a headline by parsing its text as a number, so tests can
    /// pin exact polarities.
    struct ScriptedModel;

    impl PolarityModel for ScriptedModel {
        fn score(&self, text: &str) -> f64 {
            text.parse().unwrap_or(0.0)
        }
    }

    fn article(title: &str) -> NewsArticle {
        NewsArticle {
            title: title.to_string(),
            url: String::new(),
            source: String::new(),
            published_at: None,
            description: None,
        }
    }

    #[test]
    fn test_known_polarities_scenario() {
        let articles = vec![article("0.5"), article("-0.5"), article("0.0")];
        let (scored, breakdown) = analyze_headlines(&ScriptedModel, &articles);

        let buckets: Vec<Sentiment> = scored.iter().map(|h| h.sentiment).collect();
        assert_eq!(
            buckets,
            vec![Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral]
        );
        assert_eq!(breakdown.positive, 1);
        assert_eq!(breakdown.negative, 1);
        assert_eq!(breakdown.neutral, 1);
    }

    #[test]
    fn test_counts_sum_to_input_length() {
        let articles: Vec<NewsArticle> = ["0.3", "0.2", "-0.9", "0.05", "-0.1", "0.1", "0.11"]
            .iter()
            .map(|t| article(t))
            .collect();

        let (scored, breakdown) = analyze_headlines(&ScriptedModel, &articles);
        assert_eq!(scored.len(), articles.len());
        assert_eq!(breakdown.total() as usize, articles.len());
    }

    #[test]
    fn test_itemized_list_preserves_input_order() {
        let articles = vec![article("0.9"), article("-0.9"), article("0.0"), article("0.9")];
        let (scored, _) = analyze_headlines(&ScriptedModel, &articles);

        let titles: Vec<&str> = scored.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles, vec!["0.9", "-0.9", "0.0", "0.9"]);
    }

    #[test]
    fn test_tally_is_order_independent() {
        let articles = vec![article("0.5"), article("-0.5"), article("0.0"), article("0.7")];
        let mut permuted = articles.clone();
        permuted.reverse();
        permuted.swap(0, 2);

        let (_, breakdown) = analyze_headlines(&ScriptedModel, &articles);
        let (_, permuted_breakdown) = analyze_headlines(&ScriptedModel, &permuted);
        assert_eq!(breakdown, permuted_breakdown);
    }

    #[test]
    fn test_empty_input_is_safe() {
        let (scored, breakdown) = analyze_headlines(&ScriptedModel, &[]);
        assert!(scored.is_empty());
        assert_eq!(breakdown, SentimentBreakdown::default());

        let report = build_report("AAPL", scored, breakdown);
        assert!(report.headlines.is_empty());
        assert_eq!(report.breakdown.total(), 0);
        assert!(report.chart.is_none());
    }

    #[test]
    fn test_chart_has_fixed_labels_and_colors() {
        let articles = vec![article("0.5"), article("-0.5")];
        let (scored, breakdown) = analyze_headlines(&ScriptedModel, &articles);
        let report = build_report("TSLA", scored, breakdown);

        let chart = report.chart.expect("chart present for non-empty tally");
        assert_eq!(chart.len(), 3);
        assert_eq!(chart[0].label, "Positive");
        assert_eq!(chart[0].color, "#2ecc71");
        assert_eq!(chart[0].count, 1);
        assert_eq!(chart[1].label, "Negative");
        assert_eq!(chart[1].color, "#e74c3c");
        assert_eq!(chart[1].count, 1);
        assert_eq!(chart[2].label, "Neutral");
        assert_eq!(chart[2].color, "#f1c40f");
        assert_eq!(chart[2].count, 0);
    }
}
