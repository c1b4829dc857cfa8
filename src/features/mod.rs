//! Feature extraction: turns raw text into the signal bundle consumed by the
//! lexicon scorer.
//!
//! Signals are independent of one another:
//! - polarity and six emotion-category counts
//! - lexical frequencies over content words (top 15 kept)
//! - topics (most frequent nouns), adjective and verb samples
//! - sentence structure: question/exclamation rates, average length
//! - pronoun distribution
//! - a bounded complexity score in [1, 10]

pub mod lexicon;
pub mod sentiment;
pub mod tagger;

use crate::utils::math::ratio;
use crate::utils::text::{split_sentences, word_tokens};
use lexicon::{Emotion, FIRST_PERSON, SECOND_PERSON, STOPWORDS, THIRD_PERSON};
use serde::{Serialize, Serializer};
use std::collections::{HashMap, HashSet};
use tagger::Pos;

pub const TOP_WORDS: usize = 15;
pub const TOP_TOPICS: usize = 5;
pub const SAMPLE_LIMIT: usize = 15;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmotionScores {
    pub joy: usize,
    pub sadness: usize,
    pub anger: usize,
    pub fear: usize,
    pub surprise: usize,
    pub disgust: usize,
}

impl EmotionScores {
    fn from_counts(counts: &HashMap<Emotion, usize>) -> Self {
        let get = |e: Emotion| counts.get(&e).copied().unwrap_or(0);
        Self {
            joy: get(Emotion::Joy),
            sadness: get(Emotion::Sadness),
            anger: get(Emotion::Anger),
            fear: get(Emotion::Fear),
            surprise: get(Emotion::Surprise),
            disgust: get(Emotion::Disgust),
        }
    }

    pub fn total(&self) -> usize {
        self.joy + self.sadness + self.anger + self.fear + self.surprise + self.disgust
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentFeatures {
    pub score: i32,
    pub comparative: f64,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub emotional_scores: EmotionScores,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PronounCounts {
    pub first_person: usize,
    pub second_person: usize,
    pub third_person: usize,
}

impl PronounCounts {
    pub fn total(&self) -> usize {
        self.first_person + self.second_person + self.third_person
    }
}

/// Word counts ordered by descending frequency; ties keep first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordFrequencies(Vec<(String, usize)>);

impl WordFrequencies {
    pub fn get(&self, word: &str) -> usize {
        self.0
            .iter()
            .find(|(w, _)| w == word)
            .map_or(0, |(_, c)| *c)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// Summed frequency of every listed word.
    pub fn hits(&self, words: &[&str]) -> usize {
        words.iter().map(|w| self.get(w)).sum()
    }
}

impl Serialize for WordFrequencies {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (w, c) in &self.0 {
            map.serialize_entry(w, c)?;
        }
        map.end()
    }
}

/// Structured signals extracted from one block of text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFeatures {
    pub sentiment: SentimentFeatures,
    pub topics: Vec<String>,
    pub question_frequency: f64,
    pub exclamation_frequency: f64,
    pub word_frequencies: WordFrequencies,
    pub pronouns: PronounCounts,
    pub adjective_use: Vec<String>,
    pub verb_use: Vec<String>,
    pub text_length: usize,
    pub sentence_count: usize,
    pub average_sentence_length: f64,
    pub complexity_score: f64,
}

/// Extract every feature from `text`. Never fails; empty input yields zeroed
/// ratios and the complexity floor.
pub fn extract_features(text: &str) -> TextFeatures {
    let polarity = sentiment::polarity(text);
    let emotions = EmotionScores::from_counts(&lexicon::emotion_counts(text));

    let sentences = split_sentences(text);
    let sentence_count = sentences.len();
    let questions = sentences.iter().filter(|s| is_question(s)).count();
    let exclamations = sentences.iter().filter(|s| s.contains('!')).count();

    let lexical = lexical_tokens(text);
    let content: Vec<&str> = lexical
        .iter()
        .map(String::as_str)
        .filter(|w| !STOPWORDS.contains(w))
        .collect();
    let mut word_frequencies = ranked_counts(content.iter().copied());
    word_frequencies.truncate(TOP_WORDS);

    let words = word_tokens(text);
    let mut nouns = Vec::new();
    let mut adjective_use = Vec::new();
    let mut verb_use = Vec::new();
    for w in &words {
        match tagger::tag(w) {
            Pos::Noun if w.chars().count() > 3 => nouns.push(w.as_str()),
            Pos::Adjective if adjective_use.len() < SAMPLE_LIMIT => adjective_use.push(w.clone()),
            Pos::Verb if verb_use.len() < SAMPLE_LIMIT => verb_use.push(w.clone()),
            _ => {}
        }
    }
    let topics = ranked_counts(nouns.into_iter())
        .into_iter()
        .take(TOP_TOPICS)
        .map(|(w, _)| w)
        .collect();

    let features = TextFeatures {
        sentiment: SentimentFeatures {
            score: polarity.score,
            comparative: polarity.comparative,
            positive: polarity.positive,
            negative: polarity.negative,
            emotional_scores: emotions,
        },
        topics,
        question_frequency: ratio(questions as f64, sentence_count as f64),
        exclamation_frequency: ratio(exclamations as f64, sentence_count as f64),
        word_frequencies: WordFrequencies(word_frequencies),
        pronouns: count_pronouns(&words),
        adjective_use,
        verb_use,
        text_length: lexical.len(),
        sentence_count,
        average_sentence_length: ratio(lexical.len() as f64, sentence_count as f64),
        complexity_score: complexity_score(&content, sentence_count),
    };
    tracing::debug!(
        sentences = features.sentence_count,
        words = features.text_length,
        complexity = features.complexity_score,
        comparative = features.sentiment.comparative,
        "extracted text features"
    );
    features
}

fn is_question(sentence: &str) -> bool {
    sentence
        .trim_end_matches(['.', '!'])
        .ends_with('?')
}

/// Lowercased tokens longer than three characters with punctuation stripped
/// ("can't" becomes "cant").
fn lexical_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .filter(|w| w.chars().count() > 3)
        .map(str::to_string)
        .collect()
}

/// Count occurrences and order by descending count, keeping first-seen order on ties.
fn ranked_counts<'a>(items: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    for item in items {
        match index.get(item) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(item, order.len());
                order.push((item.to_string(), 1));
            }
        }
    }
    // Stable sort keeps insertion order among equal counts
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
}

fn count_pronouns(words: &[String]) -> PronounCounts {
    let mut counts = PronounCounts::default();
    for w in words {
        // "i'm" -> "i", "they're" -> "they"
        let base = w.split('\'').next().unwrap_or(w);
        if FIRST_PERSON.contains(&base) {
            counts.first_person += 1;
        } else if SECOND_PERSON.contains(&base) {
            counts.second_person += 1;
        } else if THIRD_PERSON.contains(&base) {
            counts.third_person += 1;
        }
    }
    counts
}

/// `min(10, max(1, 1.5 × (asl/20×3 + awl/8×2 + unique×3 + long×2)))` over content words.
pub fn complexity_score(content: &[&str], sentence_count: usize) -> f64 {
    let total = content.len() as f64;
    let avg_sentence_len = ratio(total, sentence_count as f64);
    let avg_word_len = ratio(
        content.iter().map(|w| w.chars().count()).sum::<usize>() as f64,
        total,
    );
    let unique: HashSet<&&str> = content.iter().collect();
    let unique_ratio = ratio(unique.len() as f64, total);
    let long_ratio = ratio(
        content.iter().filter(|w| w.chars().count() > 6).count() as f64,
        total,
    );
    let raw = (avg_sentence_len / 20.0) * 3.0
        + (avg_word_len / 8.0) * 2.0
        + unique_ratio * 3.0
        + long_ratio * 2.0;
    (raw * 1.5).clamp(1.0, 10.0)
}
