//! Sentence and token helpers shared by the extractor and evidence picker.

/// Split text into sentences on `.`, `!` and `?`, keeping the terminator.
/// Trailing text without a terminator forms the last sentence.
/// Runs of terminators ("?!", "...") stay attached to the sentence they end.
pub fn split_sentences(s: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        cur.push(ch);
        if is_terminator(ch) {
            while let Some(&next) = chars.peek() {
                if !is_terminator(next) {
                    break;
                }
                cur.push(next);
                chars.next();
            }
            push_sentence(&mut out, &cur);
            cur.clear();
        }
    }
    push_sentence(&mut out, &cur);
    out
}

fn is_terminator(ch: char) -> bool {
    ch == '.' || ch == '!' || ch == '?'
}

fn push_sentence(out: &mut Vec<String>, cur: &str) {
    let trimmed = cur.trim();
    // A bare run of punctuation is not a sentence
    if trimmed.chars().any(|c| c.is_alphanumeric()) {
        out.push(trimmed.to_string());
    }
}

/// Lowercase word tokens, splitting on anything that is not alphanumeric or an apostrophe.
/// Curly apostrophes are folded to `'`.
pub fn word_tokens(s: &str) -> Vec<String> {
    s.to_lowercase()
        .replace('\u{2019}', "'")
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|w| w.trim_matches('\''))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
