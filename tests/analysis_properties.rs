//! End-to-end properties of the analysis pipeline

use pretty_assertions::assert_eq;
use trait_scope::analyzer::Analyzer;
use trait_scope::config::Config;
use trait_scope::corpus::{CORPUS, entry};
use trait_scope::features::sentiment::polarity;
use trait_scope::matcher::{Aggregation, CorpusMatcher, similarity};
use trait_scope::narrative::CLOSING_RECOMMENDATION;
use trait_scope::scoring::Strategy;
use trait_scope::traits::Trait;

const ANXIOUS: &str = "I feel anxious and worried about everything, I can't stop stressing";

const SAMPLES: &[&str] = &[
    "",
    "   \n\t ",
    "!!!???...",
    "a",
    ANXIOUS,
    "I love meeting people and planning ahead.",
    "Quartz pebbles glisten nearby. Quartz pebbles glisten nearby.",
    "WHY WHY WHY?! Nothing works and I hate every single minute of it!!!",
    "The committee will reconvene on Thursday to finalize the quarterly budget allocation.",
];

fn no_delay() -> Config {
    let mut config = Config::default();
    config.analysis.latency_ms = 0;
    config.narrative.seed = Some(2024);
    config
}

#[test]
fn test_scores_always_in_range_for_every_strategy() {
    for strategy in [Strategy::Corpus, Strategy::Lexicon, Strategy::Blended] {
        let analyzer = Analyzer::new(&no_delay()).with_strategy(strategy);
        for text in SAMPLES.iter().copied().chain(CORPUS.iter().map(|e| e.text)) {
            let r = analyzer.evaluate(text);
            for t in &r.traits {
                assert!(
                    t.value.is_finite() && (1.0..=10.0).contains(&t.value),
                    "{:?} {} = {} for {:?}",
                    strategy,
                    t.name,
                    t.value,
                    text
                );
            }
        }
    }
}

#[test]
fn test_similarity_is_bounded_symmetric_and_reflexive() {
    let texts: Vec<&str> = SAMPLES.iter().copied().chain(CORPUS.iter().map(|e| e.text)).collect();
    for a in &texts {
        for b in &texts {
            let s = similarity(a, b);
            assert!((0.0..=1.0).contains(&s));
            assert_eq!(s, similarity(b, a));
        }
        if a.chars().any(char::is_alphanumeric) {
            assert!((similarity(a, a) - 1.0).abs() < 1e-9, "{a:?}");
        }
    }
}

#[test]
fn test_weights_sum_to_one_when_overlap_exists() {
    let matcher = CorpusMatcher::new();
    for text in SAMPLES.iter().copied().chain(CORPUS.iter().map(|e| e.text)) {
        let blend = matcher.weighted_traits(text, 5);
        if blend.aggregation == Aggregation::Weighted {
            let sum: f64 = blend.weights.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "{text:?}: {sum}");
        }
    }
}

#[test]
fn test_scores_are_deterministic() {
    let a = Analyzer::new(&no_delay());
    let mut unseeded = no_delay();
    unseeded.narrative.seed = None;
    let b = Analyzer::new(&unseeded);
    for text in SAMPLES {
        assert_eq!(a.evaluate(text).scores(), b.evaluate(text).scores());
        assert_eq!(a.evaluate(text), a.evaluate(text));
    }
}

#[test]
fn test_empty_input_degrades_gracefully() {
    let r = Analyzer::new(&no_delay()).evaluate("");
    assert_eq!(r.traits.len(), 5);
    assert!(r.evidence_quotes.is_empty());
    assert!(!r.summary.is_empty());
    assert_eq!(r.recommendations.last().map(String::as_str), Some(CLOSING_RECOMMENDATION));
    assert!(r.similar_profiles.len() <= 3);
}

#[test]
fn test_high_openness_exemplar_round_trips() {
    let text = entry("high_openness").map(|e| e.text).unwrap();

    let top = CorpusMatcher::new().top_k(text, 1);
    assert_eq!(top[0].entry.category, "high_openness");
    assert!((top[0].similarity - 1.0).abs() < 1e-9);

    let r = Analyzer::new(&no_delay()).evaluate(text);
    assert!(r.scores()[Trait::Openness] >= 8.5, "openness {}", r.scores()[Trait::Openness]);
    assert!(r.similar_profiles.iter().any(|p| p.category == "high_openness"));
}

#[test]
fn test_anxious_text_reads_as_neurotic() {
    let r = Analyzer::new(&no_delay()).evaluate(ANXIOUS);
    assert!(r.scores()[Trait::Neuroticism] > 6.0, "neuroticism {}", r.scores()[Trait::Neuroticism]);
    assert!(
        r.evidence_quotes.iter().any(|q| polarity(q).score < 0),
        "{:?}",
        r.evidence_quotes
    );
}

#[test]
fn test_vocabulary_sparse_text_uses_mean_fallback() {
    let text = "Quartz pebbles glisten nearby. ".repeat(10);
    let blend = CorpusMatcher::new().weighted_traits(&text, 5);
    assert_eq!(blend.aggregation, Aggregation::UnweightedMean);

    let scores = Analyzer::new(&no_delay()).scores(&text);
    for (t, v) in scores.iter() {
        assert!(v.is_finite());
        assert!((4.5..=7.5).contains(v), "{t} = {v}");
    }
}

#[tokio::test]
async fn test_analyze_waits_and_returns_full_result() {
    let mut config = no_delay();
    config.analysis.latency_ms = 10;
    let started = std::time::Instant::now();
    let r = Analyzer::new(&config).analyze(ANXIOUS).await;
    assert!(started.elapsed() >= std::time::Duration::from_millis(10));

    let names: Vec<&str> = r.traits.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Openness", "Conscientiousness", "Extraversion", "Agreeableness", "Neuroticism"]
    );
    assert_eq!(r.evidence_quotes, vec![ANXIOUS.to_string()]);
}

#[tokio::test]
async fn test_concurrent_analyses_agree() {
    let analyzer = std::sync::Arc::new(Analyzer::new(&no_delay()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let a = analyzer.clone();
            tokio::spawn(async move { a.analyze(ANXIOUS).await.scores() })
        })
        .collect();
    let expected = analyzer.scores(ANXIOUS);
    for h in handles {
        assert_eq!(h.await.unwrap(), expected);
    }
}
