//! Lexicon polarity scoring.

use super::lexicon::{NEGATORS, SENTIMENT_SCORES};
use crate::utils::math::ratio;
use crate::utils::text::word_tokens;
use serde::Serialize;

/// Polarity of a span of text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Polarity {
    pub score: i32,
    /// `score` divided by the token count
    pub comparative: f64,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// Score `text` against the polarity lexicon. A negator directly before a
/// scored word flips that word's contribution.
pub fn polarity(text: &str) -> Polarity {
    let tokens = word_tokens(text);
    let mut out = Polarity::default();
    for (i, token) in tokens.iter().enumerate() {
        let Some(&base) = SENTIMENT_SCORES.get(token.as_str()) else {
            continue;
        };
        let negated = i > 0 && NEGATORS.contains(&tokens[i - 1].as_str());
        let value = if negated { -base } else { base };
        out.score += value;
        if value > 0 {
            out.positive.push(token.clone());
        } else {
            out.negative.push(token.clone());
        }
    }
    out.comparative = ratio(out.score as f64, tokens.len() as f64);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let p = polarity("I love this wonderful day");
        assert_eq!(p.score, 7);
        assert_eq!(p.positive, vec!["love", "wonderful"]);
        assert!(p.negative.is_empty());
        assert!((p.comparative - 7.0 / 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_negation_flips() {
        let p = polarity("I am not happy");
        assert_eq!(p.score, -3);
        assert_eq!(p.negative, vec!["happy"]);
    }

    #[test]
    fn test_anxious_text_is_negative() {
        let p = polarity("I feel anxious and worried about everything, I can't stop stressing");
        assert!(p.score < 0);
        assert!(p.comparative < 0.0);
        assert!(p.negative.contains(&"anxious".to_string()));
    }

    #[test]
    fn test_empty_text() {
        let p = polarity("");
        assert_eq!(p.score, 0);
        assert_eq!(p.comparative, 0.0);
    }
}
