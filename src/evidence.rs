//! Evidence quotes: the most emotionally charged sentences of the input.

use crate::features::sentiment::polarity;
use crate::utils::text::split_sentences;

pub const DEFAULT_QUOTES: usize = 3;

/// Pick up to `count` sentences. With `count` or fewer sentences, all are
/// returned in order. Otherwise the strongest positive sentences come first
/// (up to ⌈count/2⌉), then the strongest negative (up to ⌊count/2⌋), then
/// neutral sentences in document order to fill any gap.
pub fn extract_quotes(text: &str, count: usize) -> Vec<String> {
    let sentences = split_sentences(text);
    if sentences.len() <= count {
        return sentences;
    }

    let scored: Vec<(String, f64)> = sentences
        .into_iter()
        .map(|s| {
            let c = polarity(&s).comparative;
            (s, c)
        })
        .collect();

    let mut positive: Vec<&(String, f64)> = scored.iter().filter(|(_, c)| *c > 0.0).collect();
    positive.sort_by(|a, b| b.1.total_cmp(&a.1));
    let mut negative: Vec<&(String, f64)> = scored.iter().filter(|(_, c)| *c < 0.0).collect();
    negative.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut quotes: Vec<String> = positive
        .into_iter()
        .take(count.div_ceil(2))
        .chain(negative.into_iter().take(count / 2))
        .map(|(s, _)| s.clone())
        .collect();

    if quotes.len() < count {
        let missing = count - quotes.len();
        quotes.extend(
            scored
                .iter()
                .filter(|(_, c)| *c == 0.0)
                .take(missing)
                .map(|(s, _)| s.clone()),
        );
    }
    quotes
}
