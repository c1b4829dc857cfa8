//! Lexicon-weighted heuristic scoring.
//!
//! Each trait starts at a neutral 5 and is moved by additive weighted terms
//! over the extracted features, then clamped to [1, 10].

use crate::features::{TextFeatures, WordFrequencies};
use crate::traits::{NEUTRAL_SCORE, Trait, TraitMap, TraitScores};

/// Per-word weight applied to every keyword frequency hit
const KEYWORD_WEIGHT: f64 = 0.7;
/// Scale on the (positive - negative) keyword difference
const KEYWORD_BALANCE: f64 = 0.6;
const IDEAL_SENTENCE_LENGTH: f64 = 15.0;

struct TraitLexicon {
    positive: &'static [&'static str],
    negative: &'static [&'static str],
}

fn lexicon(t: Trait) -> TraitLexicon {
    match t {
        Trait::Openness => TraitLexicon {
            positive: &[
                "imagine", "creative", "artistic", "curious", "explore", "novel", "innovative",
                "abstract", "philosophical", "theoretical", "unconventional", "diverse",
                "experience", "adventure", "discover", "learn", "intellectual", "complex",
                "variety", "change", "different", "unique", "original", "inventive",
            ],
            negative: &[
                "traditional", "conventional", "routine", "familiar", "practical", "simple",
                "basic", "standard", "usual", "normal", "regular", "ordinary",
            ],
        },
        Trait::Conscientiousness => TraitLexicon {
            positive: &[
                "organized", "plan", "schedule", "goal", "achieve", "complete", "finish",
                "responsible", "reliable", "diligent", "thorough", "careful", "precise",
                "methodical", "systematic", "efficient", "productive", "disciplined",
                "punctual", "deadline", "structure", "order", "detail", "accuracy",
            ],
            negative: &[
                "spontaneous", "impulsive", "casual", "relaxed", "flexible", "informal",
                "unstructured", "disorganized", "chaotic", "messy", "careless", "sloppy",
            ],
        },
        Trait::Extraversion => TraitLexicon {
            positive: &[
                "social", "outgoing", "energetic", "enthusiastic", "talkative", "friendly",
                "people", "group", "team", "party", "gathering", "meet", "connect", "interact",
                "communicate", "share", "express", "active", "dynamic", "vibrant", "lively",
                "excited", "passionate", "engaging",
            ],
            negative: &[
                "quiet", "reserved", "private", "solitary", "alone", "independent",
                "introspective", "reflective", "calm", "peaceful", "serene", "contemplative",
            ],
        },
        Trait::Agreeableness => TraitLexicon {
            positive: &[
                "kind", "helpful", "supportive", "caring", "empathetic", "understanding",
                "compassionate", "considerate", "thoughtful", "generous", "cooperative",
                "collaborative", "harmonious", "peaceful", "gentle", "warm", "friendly",
                "trusting", "forgiving", "patient", "tolerant", "accepting",
            ],
            negative: &[
                "direct", "assertive", "competitive", "challenging", "critical", "skeptical",
                "suspicious", "doubtful", "questioning", "analytical", "logical", "rational",
            ],
        },
        // For neuroticism the "positive" list holds stability words, which lower the score
        Trait::Neuroticism => TraitLexicon {
            positive: &[
                "calm", "stable", "relaxed", "confident", "secure", "balanced", "composed",
                "steady", "resilient", "strong", "tough", "robust", "unfazed", "unperturbed",
            ],
            negative: &[
                "anxious", "worried", "stressed", "nervous", "tense", "fearful", "afraid",
                "insecure", "vulnerable", "sensitive", "emotional", "moody", "volatile",
                "unstable", "fragile", "overwhelmed", "distressed", "upset",
            ],
        },
    }
}

const TEMPORAL_TERMS: &[&str] = &[
    "schedule", "plan", "organize", "time", "task", "goal", "achieve", "complete", "deadline",
    "timeline",
];

const ACTION_VERBS: &[&str] = &["complete", "finish", "achieve", "accomplish", "organize", "plan"];

const DISTRESS_TERMS: &[&str] = &[
    "worry", "stress", "afraid", "anxious", "nervous", "fear", "sad", "angry", "upset",
    "overwhelm", "panic", "dread", "horror", "terror", "distress", "agony", "misery", "tense",
    "frustrated", "irritable", "moody", "sensitive", "vulnerable", "insecure",
];

fn weighted_hits(freq: &WordFrequencies, words: &[&str], weight: f64) -> f64 {
    freq.hits(words) as f64 * weight
}

/// (positive - negative) keyword hits for a trait, already weighted.
fn keyword_balance(f: &TextFeatures, t: Trait) -> f64 {
    let lex = lexicon(t);
    let pos = weighted_hits(&f.word_frequencies, lex.positive, KEYWORD_WEIGHT);
    let neg = weighted_hits(&f.word_frequencies, lex.negative, KEYWORD_WEIGHT);
    (pos - neg) * KEYWORD_BALANCE
}

pub fn openness(f: &TextFeatures) -> f64 {
    let mut score = NEUTRAL_SCORE;
    // vocabulary diversity
    score += (f.word_frequencies.len() as f64 / 8.0).min(3.0);
    // curiosity
    score += f.question_frequency * 5.0;
    score += (f.complexity_score - 5.0) * 1.2;
    score += keyword_balance(f, Trait::Openness);
    let mut adjectives: Vec<&str> = f.adjective_use.iter().map(String::as_str).collect();
    adjectives.sort_unstable();
    adjectives.dedup();
    score += (adjectives.len() as f64 / 1.5).min(2.0);
    score += (f.topics.len() as f64 / 2.0).min(1.5);
    score
}

pub fn conscientiousness(f: &TextFeatures) -> f64 {
    let mut score = NEUTRAL_SCORE;
    let deviation = (f.average_sentence_length - IDEAL_SENTENCE_LENGTH).abs();
    score += (10.0 - deviation) * 0.4;
    score += keyword_balance(f, Trait::Conscientiousness);
    score += weighted_hits(&f.word_frequencies, TEMPORAL_TERMS, 0.8) * 0.7;
    let action = f
        .verb_use
        .iter()
        .filter(|v| ACTION_VERBS.contains(&v.as_str()))
        .count();
    score += action as f64 * 0.5;
    score
}

pub fn extraversion(f: &TextFeatures) -> f64 {
    let mut score = NEUTRAL_SCORE;
    score += keyword_balance(f, Trait::Extraversion);
    score += f.exclamation_frequency * 6.0;
    score += f.sentiment.comparative * 2.5;
    let total = f.pronouns.total();
    if total > 0 {
        let social = (f.pronouns.first_person + f.pronouns.second_person) as f64 / total as f64;
        score += (social - 0.5) * 4.0;
    }
    let intensity = f.sentiment.emotional_scores.total() as f64;
    score += (intensity / 4.0).min(2.0);
    score
}

pub fn agreeableness(f: &TextFeatures) -> f64 {
    let mut score = NEUTRAL_SCORE;
    score += keyword_balance(f, Trait::Agreeableness);
    score += f.sentiment.comparative * 3.0;
    let positive = f.sentiment.positive.len();
    let negative = f.sentiment.negative.len();
    // Zero negatives divide by one, so a text with no polar words scores 0 here
    let word_ratio = positive as f64 / negative.max(1) as f64;
    score += (word_ratio - 1.0) * 1.2;
    score += f.question_frequency * 3.0;
    let e = &f.sentiment.emotional_scores;
    let positive_emotions = (e.joy + e.surprise) as f64;
    let negative_emotions = (e.anger + e.fear + e.disgust) as f64;
    score += ((positive_emotions - negative_emotions) / 4.0) * 0.8;
    score
}

pub fn neuroticism(f: &TextFeatures) -> f64 {
    let mut score = NEUTRAL_SCORE;
    // stability words lower, distress words raise
    score -= keyword_balance(f, Trait::Neuroticism);
    score -= f.sentiment.comparative * 3.0;
    score += weighted_hits(&f.word_frequencies, DISTRESS_TERMS, 0.8) * 0.7;
    let e = &f.sentiment.emotional_scores;
    let negative_emotions = (e.anger + e.fear + e.sadness + e.disgust) as f64;
    score += (negative_emotions / 3.0).min(2.0);
    score += f.exclamation_frequency * 3.0;
    score
}

/// Score all five traits from extracted features, each clamped to [1, 10].
pub fn score_features(f: &TextFeatures) -> TraitScores {
    TraitMap::from_fn(|t| match t {
        Trait::Openness => openness(f),
        Trait::Conscientiousness => conscientiousness(f),
        Trait::Extraversion => extraversion(f),
        Trait::Agreeableness => agreeableness(f),
        Trait::Neuroticism => neuroticism(f),
    })
    .clamped()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::extract_features;

    #[test]
    fn test_empty_features_stay_in_range() {
        let s = score_features(&TextFeatures::default());
        for (_, v) in s.iter() {
            assert!((1.0..=10.0).contains(v));
        }
        // neutral rates leave extraversion and neuroticism at baseline
        assert_eq!(s[Trait::Extraversion], 5.0);
        assert_eq!(s[Trait::Neuroticism], 5.0);
        // no polar words: ratio 0 / 1, so (0 - 1) * 1.2 below neutral
        assert!((s[Trait::Agreeableness] - 3.8).abs() < 1e-9);
    }

    #[test]
    fn test_polarity_free_text_pins_agreeableness() {
        let f = extract_features("The train leaves at noon. The station is near the river.");
        assert!(f.sentiment.positive.is_empty() && f.sentiment.negative.is_empty());
        assert_eq!(f.question_frequency, 0.0);
        assert!((agreeableness(&f) - 3.8).abs() < 1e-9, "got {}", agreeableness(&f));
    }

    #[test]
    fn test_positive_words_without_negatives_use_unit_denominator() {
        // love (3) and wonderful (4): ratio 2 / 1, comparative 7 / 5
        let f = extract_features("I love this wonderful day");
        let expected = 5.0 + (7.0 / 5.0) * 3.0 + (2.0 - 1.0) * 1.2;
        assert!((agreeableness(&f) - expected).abs() < 1e-9, "got {}", agreeableness(&f));
    }

    use crate::features::{EmotionScores, PronounCounts, SentimentFeatures};

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    // Keyword tables stay empty so only the structural terms move the score
    fn structural_features() -> TextFeatures {
        TextFeatures {
            sentiment: SentimentFeatures {
                score: 2,
                comparative: 0.4,
                positive: words(&["good", "nice", "great"]),
                negative: words(&["bad"]),
                emotional_scores: EmotionScores {
                    joy: 2,
                    surprise: 2,
                    anger: 1,
                    ..EmotionScores::default()
                },
            },
            topics: words(&["garden"]),
            question_frequency: 0.5,
            exclamation_frequency: 0.5,
            pronouns: PronounCounts {
                first_person: 3,
                second_person: 1,
                third_person: 4,
            },
            adjective_use: words(&["curious", "curious", "bold"]),
            verb_use: words(&["plan", "finish", "walk"]),
            average_sentence_length: 12.0,
            complexity_score: 7.0,
            ..TextFeatures::default()
        }
    }

    #[test]
    fn test_openness_pinned_value() {
        // questions 0.5*5, complexity (7-5)*1.2, 2 distinct adjectives /1.5, 1 topic /2
        let expected = 5.0 + 2.5 + 2.4 + 2.0 / 1.5 + 0.5;
        assert!((openness(&structural_features()) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_conscientiousness_pinned_value() {
        // (10 - |12 - 15|) * 0.4, two action verbs * 0.5
        let expected = 5.0 + 2.8 + 1.0;
        assert!((conscientiousness(&structural_features()) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_extraversion_pinned_value() {
        // exclamations 0.5*6, comparative 0.4*2.5, social share 4/8 adds 0, emotions 5/4
        let expected = 5.0 + 3.0 + 1.0 + 0.0 + 1.25;
        assert!((extraversion(&structural_features()) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_agreeableness_pinned_value() {
        // comparative 0.4*3, ratio (3/1 - 1)*1.2, questions 0.5*3, emotions (4-1)/4*0.8
        let expected = 5.0 + 1.2 + 2.4 + 1.5 + 0.6;
        assert!((agreeableness(&structural_features()) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_neuroticism_pinned_value() {
        let f = TextFeatures {
            sentiment: SentimentFeatures {
                comparative: -0.5,
                emotional_scores: EmotionScores {
                    anger: 1,
                    fear: 3,
                    sadness: 1,
                    ..EmotionScores::default()
                },
                ..SentimentFeatures::default()
            },
            exclamation_frequency: 0.2,
            ..TextFeatures::default()
        };
        // -(-0.5)*3, negative emotions min(5/3, 2), exclamations 0.2*3
        let expected = 5.0 + 1.5 + 5.0 / 3.0 + 0.6;
        assert!((neuroticism(&f) - expected).abs() < 1e-9, "got {}", neuroticism(&f));
    }

    #[test]
    fn test_anxious_text_raises_neuroticism() {
        let f = extract_features("I feel anxious and worried about everything, I can't stop stressing");
        let s = score_features(&f);
        assert!(s[Trait::Neuroticism] > 7.0, "got {}", s[Trait::Neuroticism]);
    }

    #[test]
    fn test_calm_text_lowers_neuroticism() {
        let f = extract_features(
            "I stay calm and steady. Calm mornings keep me confident, stable and secure.",
        );
        let s = score_features(&f);
        assert!(s[Trait::Neuroticism] < 5.0, "got {}", s[Trait::Neuroticism]);
    }

    #[test]
    fn test_curious_complex_text_raises_openness() {
        let f = extract_features(crate::corpus::CORPUS[0].text);
        assert_eq!(score_features(&f)[Trait::Openness], 10.0);
    }

    #[test]
    fn test_exclamations_raise_extraversion() {
        let quiet = score_features(&extract_features("We met friends. We talked."));
        let loud = score_features(&extract_features("We met friends! We talked!"));
        assert!(loud[Trait::Extraversion] > quiet[Trait::Extraversion]);
    }

    #[test]
    fn test_planning_words_raise_conscientiousness() {
        let base = "I walked along the river and watched the boats drift past the old bridge.";
        let planned = "I plan each goal, schedule every task and complete it before the deadline.";
        let a = score_features(&extract_features(base));
        let b = score_features(&extract_features(planned));
        assert!(b[Trait::Conscientiousness] > a[Trait::Conscientiousness]);
    }

    #[test]
    fn test_extreme_input_is_clamped() {
        let text = "anxious worried stressed nervous tense afraid! ".repeat(50);
        let s = score_features(&extract_features(&text));
        for (_, v) in s.iter() {
            assert!((1.0..=10.0).contains(v), "out of range: {v}");
        }
        assert_eq!(s[Trait::Neuroticism], 10.0);
    }
}
