//! Headline polarity scoring.
//!
//! The rest of the system treats the scorer as an opaque oracle behind the
//! [`PolarityModel`] trait, so tests can substitute a scripted model and the
//! built-in lexicon can be swapped out without touching the classifier.

/// Scores the polarity of a piece of text in [-1.0, 1.0].
///
/// Implementations must be pure and deterministic; text with no
/// recognizable tone scores 0.0 (which classifies as neutral downstream).
pub trait PolarityModel: Send + Sync {
    fn score(&self, text: &str) -> f64;
}

const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("beat", 0.6),
    ("beats", 0.6),
    ("boost", 0.5),
    ("boosts", 0.5),
    ("bullish", 0.7),
    ("exceeds", 0.6),
    ("gain", 0.5),
    ("gains", 0.5),
    ("growth", 0.5),
    ("high", 0.3),
    ("jump", 0.5),
    ("jumps", 0.5),
    ("optimistic", 0.6),
    ("outperform", 0.6),
    ("outperforms", 0.6),
    ("profit", 0.5),
    ("profits", 0.5),
    ("rally", 0.6),
    ("rallies", 0.6),
    ("rebound", 0.5),
    ("rebounds", 0.5),
    ("record", 0.4),
    ("recovery", 0.5),
    ("rise", 0.4),
    ("rises", 0.4),
    ("soar", 0.8),
    ("soars", 0.8),
    ("strong", 0.5),
    ("success", 0.6),
    ("successful", 0.6),
    ("surge", 0.7),
    ("surges", 0.7),
    ("tops", 0.5),
    ("upgrade", 0.6),
    ("upgraded", 0.6),
    ("upgrades", 0.6),
    ("win", 0.5),
    ("wins", 0.5),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("bankruptcy", -0.9),
    ("bearish", -0.7),
    ("crash", -0.9),
    ("crashes", -0.9),
    ("cut", -0.4),
    ("cuts", -0.4),
    ("decline", -0.5),
    ("declines", -0.5),
    ("downgrade", -0.6),
    ("downgraded", -0.6),
    ("downgrades", -0.6),
    ("drop", -0.5),
    ("drops", -0.5),
    ("fall", -0.4),
    ("falls", -0.4),
    ("fear", -0.5),
    ("fears", -0.5),
    ("fine", -0.4),
    ("fined", -0.5),
    ("fraud", -0.9),
    ("investigation", -0.5),
    ("lawsuit", -0.6),
    ("layoffs", -0.7),
    ("loss", -0.6),
    ("losses", -0.6),
    ("low", -0.3),
    ("miss", -0.5),
    ("misses", -0.5),
    ("plunge", -0.8),
    ("plunges", -0.8),
    ("probe", -0.5),
    ("recall", -0.6),
    ("risk", -0.4),
    ("selloff", -0.7),
    ("sink", -0.6),
    ("sinks", -0.6),
    ("slump", -0.7),
    ("slumps", -0.7),
    ("tumble", -0.7),
    ("tumbles", -0.7),
    ("warning", -0.5),
    ("warns", -0.5),
    ("weak", -0.5),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "without", "won't", "don't", "doesn't", "isn't", "didn't", "wasn't",
];

const MODIFIERS: &[(&str, f64)] = &[
    ("very", 1.5),
    ("sharply", 1.5),
    ("hugely", 1.5),
    ("slightly", 0.5),
    ("somewhat", 0.5),
];

/// Built-in lexicon scorer.
///
/// Mean score of recognized sentiment words, with a small negation window
/// that inverts (with damping) a sentiment word preceded by a negator, and
/// intensity modifiers applied to the following sentiment word.
pub struct LexiconModel {
    negation_window: usize,
}

impl LexiconModel {
    pub fn new() -> Self {
        Self { negation_window: 3 }
    }

    fn word_score(token: &str) -> Option<f64> {
        POSITIVE_WORDS
            .iter()
            .chain(NEGATIVE_WORDS.iter())
            .find(|(word, _)| *word == token)
            .map(|(_, score)| *score)
    }

    fn modifier(token: &str) -> Option<f64> {
        MODIFIERS
            .iter()
            .find(|(word, _)| *word == token)
            .map(|(_, factor)| *factor)
    }
}

impl Default for LexiconModel {
    fn default() -> Self {
        Self::new()
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
}

impl PolarityModel for LexiconModel {
    fn score(&self, text: &str) -> f64 {
        let mut total = 0.0;
        let mut matched = 0usize;
        let mut modifier = 1.0;
        let mut negated_for = 0usize; // tokens left in the negation window

        for token in tokenize(text) {
            if NEGATIONS.contains(&token.as_str()) {
                negated_for = self.negation_window;
                continue;
            }

            if let Some(factor) = Self::modifier(&token) {
                modifier = factor;
                continue;
            }

            if let Some(base) = Self::word_score(&token) {
                let mut score = base * modifier;
                if negated_for > 0 {
                    // Inverted with damping: "no profit" reads negative,
                    // but weaker than "loss".
                    score = -score * 0.8;
                }
                total += score;
                matched += 1;
                modifier = 1.0;
            }

            negated_for = negated_for.saturating_sub(1);
        }

        if matched == 0 {
            return 0.0;
        }

        (total / matched as f64).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_scores_zero() {
        let model = LexiconModel::new();
        assert_eq!(model.score(""), 0.0);
        assert_eq!(model.score("the quick brown fox"), 0.0);
    }

    #[test]
    fn test_positive_and_negative_headlines() {
        let model = LexiconModel::new();
        assert!(model.score("Shares surge on record profit") > 0.1);
        assert!(model.score("Stock plunges after weak results") < -0.1);
    }

    #[test]
    fn test_negation_inverts_tone() {
        let model = LexiconModel::new();
        let plain = model.score("profit expected this quarter");
        let negated = model.score("no profit expected this quarter");
        assert!(plain > 0.0);
        assert!(negated < 0.0);
    }

    #[test]
    fn test_modifier_scales_tone() {
        let model = LexiconModel::new();
        let plain = model.score("shares rise");
        let amplified = model.score("shares sharply rise");
        assert!(amplified > plain);
    }

    #[test]
    fn test_scoring_is_deterministic_and_bounded() {
        let model = LexiconModel::new();
        let text = "record surge soars very strong rally wins";
        let first = model.score(text);
        let second = model.score(text);
        assert_eq!(first, second);
        assert!((-1.0..=1.0).contains(&first));
    }
}
