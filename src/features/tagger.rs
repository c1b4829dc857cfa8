//! Lightweight part-of-speech approximation.
//!
//! Closed-class words are recognised from a fixed list, a handful of common
//! open-class words from small lexicons, and everything else by suffix.
//! Unknown words default to nouns.

use once_cell::sync::Lazy;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pos {
    Noun,
    Verb,
    Adjective,
    Other,
}

static FUNCTION_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // determiners, pronouns
        "a", "an", "the", "this", "that", "these", "those", "some", "any", "each", "every",
        "all", "both", "few", "many", "much", "more", "most", "other", "another", "such", "no",
        "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "you",
        "your", "yours", "yourself", "he", "him", "his", "she", "her", "hers", "it", "its",
        "they", "them", "their", "theirs", "who", "whom", "whose", "which", "what",
        "everyone", "everything", "someone", "something", "anyone", "anything", "nothing",
        // prepositions, conjunctions
        "about", "above", "after", "against", "along", "among", "around", "at", "before",
        "behind", "below", "beside", "between", "beyond", "by", "down", "during", "for",
        "from", "in", "into", "like", "near", "of", "off", "on", "onto", "out", "outside",
        "over", "past", "since", "through", "to", "toward", "towards", "under", "until", "up",
        "upon", "with", "within", "without", "and", "or", "but", "nor", "so", "yet", "if",
        "because", "although", "though", "while", "when", "where", "why", "how", "than",
        "then", "as", "whether", "rather",
        // auxiliaries, adverbs
        "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
        "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
        "must", "not", "don't", "can't", "i'm", "it's", "very", "really", "always", "often",
        "sometimes", "never", "also", "just", "too", "quite", "here", "there", "now", "again",
        "ever", "still", "already", "even", "only", "ahead", "generally", "excessively",
    ]
    .into_iter()
    .collect()
});

static ADJECTIVES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "new", "old", "good", "bad", "great", "big", "small", "large", "little", "long",
        "short", "high", "low", "different", "same", "important", "happy", "sad", "calm",
        "quiet", "loud", "deep", "strong", "weak", "easy", "hard", "simple", "complex",
        "abstract", "concrete", "practical", "familiar", "curious", "kind", "warm", "cold",
        "open", "busy", "free", "clear", "honest", "direct", "stable", "intense", "aware",
        "alone", "alive", "comfortable", "strict", "flexible", "spontaneous", "detailed",
        "perfect", "meticulous", "social", "selective", "healthy", "constructive",
        "objective", "straightforward", "anxious", "worried", "nervous", "upset", "afraid",
        "relaxed", "organized", "excited", "bright", "dark", "nice", "fine", "true", "real",
        "sure", "ready", "able", "unconventional", "conventional", "traditional", "novel",
        "unique", "original", "diverse", "reliable", "thorough", "careful", "precise",
    ]
    .into_iter()
    .collect()
});

static VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "love", "like", "enjoy", "prefer", "feel", "think", "believe", "know", "want", "need",
        "make", "take", "give", "get", "go", "come", "see", "look", "try", "keep", "stick",
        "help", "learn", "work", "plan", "organize", "finish", "complete", "achieve",
        "accomplish", "deliver", "pay", "stay", "brings", "bring", "say", "tell", "ask",
        "speak", "talk", "meet", "share", "tend", "avoid", "appreciate", "treat", "worry",
        "stop", "start", "begin", "handle", "maintain", "focus", "value", "follow", "recharge",
        "process", "overthink", "energize", "explore", "discover", "imagine", "create",
        "build", "fix", "solve", "decide", "choose", "find", "seem", "become", "let", "put",
        "run", "live", "understand", "consider", "remember", "forget", "hope", "wish",
        "schedule", "adapt", "challenge", "agree", "argue", "win", "lose", "thrive",
    ]
    .into_iter()
    .collect()
});

static NOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "thing", "things", "people", "person", "time", "day", "days", "way", "ways", "idea",
        "ideas", "team", "group", "groups", "life", "world", "family", "friend", "friends",
        "goal", "goals", "plans", "deadline", "deadlines", "task", "tasks", "detail",
        "details", "box", "flow", "feeling", "feelings",
    ]
    .into_iter()
    .collect()
});

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "ical", "less", "ish", "ic", "al",
];
const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ing", "ed"];
const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ness", "ment", "ity", "ism", "ship", "ance", "ence",
];

/// Tag a single lowercase token.
pub fn tag(word: &str) -> Pos {
    if word.is_empty() || !word.chars().any(|c| c.is_alphabetic()) {
        return Pos::Other;
    }
    if FUNCTION_WORDS.contains(word) {
        return Pos::Other;
    }
    // Lexicon hits win over suffix guesses
    if ADJECTIVES.contains(word) {
        return Pos::Adjective;
    }
    if NOUNS.contains(word) {
        return Pos::Noun;
    }
    if VERBS.contains(word) || VERBS.contains(word.strip_suffix('s').unwrap_or(word)) {
        return Pos::Verb;
    }
    // Short words carry too little signal in their endings
    if word.chars().count() > 4 {
        if NOUN_SUFFIXES
            .iter()
            .any(|s| word.ends_with(s) || word.strip_suffix('s').is_some_and(|w| w.ends_with(s)))
        {
            return Pos::Noun;
        }
        if ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            return Pos::Adjective;
        }
        if VERB_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            return Pos::Verb;
        }
    }
    Pos::Noun
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_class() {
        assert_eq!(tag("the"), Pos::Other);
        assert_eq!(tag("about"), Pos::Other);
        assert_eq!(tag("they"), Pos::Other);
        assert_eq!(tag("42"), Pos::Other);
    }

    #[test]
    fn test_lexicon_words() {
        assert_eq!(tag("curious"), Pos::Adjective);
        assert_eq!(tag("enjoy"), Pos::Verb);
        assert_eq!(tag("enjoys"), Pos::Verb);
        assert_eq!(tag("plan"), Pos::Verb);
        assert_eq!(tag("plans"), Pos::Noun);
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(tag("discussions"), Pos::Noun);
        assert_eq!(tag("philosophical"), Pos::Adjective);
        assert_eq!(tag("exploring"), Pos::Verb);
        assert_eq!(tag("wonderful"), Pos::Adjective);
        assert_eq!(tag("harmonize"), Pos::Verb);
    }

    #[test]
    fn test_unknown_defaults_to_noun() {
        assert_eq!(tag("quartz"), Pos::Noun);
        assert_eq!(tag("pebbles"), Pos::Noun);
    }
}
