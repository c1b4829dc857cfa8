//! Fixed word lists used by the feature extractor.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

// AFINN-165, compiled in; one `term<TAB>score` pair per line, scores in -5..=5.
// A few terms are phrases and never match a single token.
const SENTIMENT_LEXICON: &str = include_str!("../../data/afinn.txt");

/// Polarity score per lowercase word.
pub static SENTIMENT_SCORES: Lazy<HashMap<&'static str, i32>> = Lazy::new(|| {
    SENTIMENT_LEXICON
        .lines()
        .filter_map(|line| {
            let (word, score) = line.split_once('\t')?;
            let score = score.trim().parse::<i32>().ok()?;
            Some((word.trim(), score))
        })
        .collect()
});

/// Tokens that flip the polarity of the word that follows them.
pub const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "don't", "doesn't",
    "didn't", "can't", "cannot", "won't", "wouldn't", "shouldn't", "isn't", "aren't", "wasn't",
    "weren't", "couldn't", "haven't", "hasn't", "dont", "cant", "wont",
];

/// Auxiliary verbs and connectives dropped from the lexical frequency table.
pub static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "this", "that", "with", "from", "have", "will", "would", "could", "should", "the",
        "and", "but", "for", "not", "are", "was", "were", "been", "being", "has", "had",
        "does", "did", "doing", "might", "must", "shall", "can", "may", "need", "ought",
        "dare",
    ]
    .into_iter()
    .collect()
});

pub const FIRST_PERSON: &[&str] = &[
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves",
];

pub const SECOND_PERSON: &[&str] = &["you", "your", "yours", "yourself", "yourselves"];

pub const THIRD_PERSON: &[&str] = &[
    "he", "him", "his", "himself", "she", "her", "hers", "herself", "they", "them", "their",
    "theirs", "themselves", "it", "its", "itself",
];

/// Emotion sub-categories tracked alongside polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Disgust,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Disgust,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Disgust => "disgust",
        }
    }

    fn words(&self) -> &'static [&'static str] {
        match self {
            Emotion::Joy => &["happy", "joy", "delight", "pleasure", "excited", "thrilled"],
            Emotion::Sadness => &["sad", "unhappy", "depressed", "miserable", "gloomy", "down"],
            Emotion::Anger => &[
                "angry",
                "furious",
                "enraged",
                "irritated",
                "annoyed",
                "frustrated",
            ],
            Emotion::Fear => &[
                "afraid",
                "scared",
                "frightened",
                "terrified",
                "anxious",
                "worried",
            ],
            Emotion::Surprise => &["surprised", "amazed", "astonished", "shocked", "stunned"],
            Emotion::Disgust => &[
                "disgusted",
                "repulsed",
                "revolted",
                "appalled",
                "horrified",
            ],
        }
    }
}

// Whole-word, case-insensitive, with any trailing word characters ("worried" matches "worriedly")
static EMOTION_PATTERNS: Lazy<Vec<(Emotion, Vec<Regex>)>> = Lazy::new(|| {
    Emotion::ALL
        .iter()
        .map(|e| {
            let patterns = e
                .words()
                .iter()
                .filter_map(|w| Regex::new(&format!(r"(?i)\b{}\w*\b", regex::escape(w))).ok())
                .collect();
            (*e, patterns)
        })
        .collect()
});

/// Count matches per emotion category.
pub fn emotion_counts(text: &str) -> HashMap<Emotion, usize> {
    EMOTION_PATTERNS
        .iter()
        .map(|(emotion, patterns)| {
            let count = patterns.iter().map(|re| re.find_iter(text).count()).sum();
            (*emotion, count)
        })
        .collect()
}
