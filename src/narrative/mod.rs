//! Narrative synthesis: summary paragraph and recommendations from trait scores.
//!
//! Scores drive which clauses are eligible; the RNG only picks among them.
//! Callers pass the RNG in, so a seeded `StdRng` reproduces a summary exactly.

pub mod phrases;
pub mod recommend;

use crate::traits::{NEUTRAL_SCORE, Trait, TraitScores};
use phrases::{INSIGHT_RULES, Level};
use rand::Rng;
use rand::seq::SliceRandom;

pub use recommend::{CLOSING_RECOMMENDATION, recommendations};

/// Distance from neutral at which a trait counts as dominant.
pub const DOMINANCE_THRESHOLD: f64 = 1.5;

fn pick<R: Rng + ?Sized>(pool: &[&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Traits with `|score - 5| >= 1.5`, strongest first. Ties keep trait order.
pub fn dominant_traits(scores: &TraitScores) -> Vec<(Trait, f64)> {
    let mut dominant: Vec<(Trait, f64)> = scores
        .iter()
        .map(|(t, s)| (t, *s))
        .filter(|(_, s)| (s - NEUTRAL_SCORE).abs() >= DOMINANCE_THRESHOLD)
        .collect();
    dominant.sort_by(|a, b| {
        (b.1 - NEUTRAL_SCORE)
            .abs()
            .total_cmp(&(a.1 - NEUTRAL_SCORE).abs())
    });
    dominant
}

/// Behavioral insights whose pair conditions hold; at most one per rule.
pub fn eligible_insights(scores: &TraitScores) -> Vec<&'static str> {
    INSIGHT_RULES
        .iter()
        .filter_map(|rule| {
            let a = Level::of(scores[rule.first]);
            let b = Level::of(scores[rule.second]);
            rule.cases
                .iter()
                .find(|(la, lb, _)| *la == a && *lb == b)
                .map(|(_, _, text)| *text)
        })
        .collect()
}

/// Communication clauses for every trait at or beyond the 6.5 / 3.5 thresholds.
pub fn eligible_communication_styles(scores: &TraitScores) -> Vec<&'static str> {
    phrases::COMMUNICATION_ORDER
        .iter()
        .filter_map(|t| {
            let (high, low) = phrases::communication_clauses(*t);
            match Level::of(scores[*t]) {
                Level::High => Some(high),
                Level::Low => Some(low),
                Level::Mid => None,
            }
        })
        .collect()
}

fn join_descriptors<R: Rng + ?Sized>(descriptors: &[&str], rng: &mut R) -> String {
    match descriptors {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => {
            format!("{first} {} {second}", pick(phrases::CONJUNCTIONS, rng))
        }
        [init @ .., last] => {
            format!(
                "{}, {} {last}",
                init.join(", "),
                pick(phrases::CONJUNCTIONS, rng)
            )
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NarrativeSynthesizer;

impl NarrativeSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Opening, trait description, optional insight, communication style.
    pub fn compose<R: Rng + ?Sized>(&self, scores: &TraitScores, rng: &mut R) -> String {
        let mut summary = String::with_capacity(320);
        summary.push_str(pick(phrases::OPENINGS, rng));
        summary.push(' ');

        let dominant = dominant_traits(scores);
        if dominant.is_empty() {
            summary.push_str(pick(phrases::BALANCED, rng));
        } else {
            let descriptors: Vec<&str> = dominant
                .iter()
                .map(|(t, s)| phrases::descriptor(*t, *s))
                .collect();
            summary.push_str(&join_descriptors(&descriptors, rng));
        }
        summary.push_str(". ");

        let insights = eligible_insights(scores);
        if !insights.is_empty() {
            summary.push_str(pick(&insights, rng));
            summary.push_str(". ");
        }

        summary.push_str(pick(phrases::COMMUNICATION_INTROS, rng));
        summary.push(' ');
        let styles = eligible_communication_styles(scores);
        if styles.is_empty() {
            summary.push_str(phrases::COMMUNICATION_FALLBACK);
        } else {
            summary.push_str(pick(&styles, rng));
        }
        summary.push('.');
        summary
    }
}
