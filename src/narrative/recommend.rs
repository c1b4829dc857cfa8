use crate::traits::{Trait, TraitScores};

pub const HIGH_RECOMMENDATION: f64 = 7.0;
pub const LOW_RECOMMENDATION: f64 = 4.0;

pub const CLOSING_RECOMMENDATION: &str =
    "Adapt communication style to match their personality preferences for more effective interaction.";

fn advice(t: Trait) -> (&'static str, &'static str) {
    match t {
        Trait::Openness => (
            "Engage this person with new ideas and creative projects that challenge conventional thinking.",
            "Present information in familiar formats and connect new ideas to established concepts.",
        ),
        Trait::Conscientiousness => (
            "Provide clear timelines and structured plans when collaborating with this person.",
            "Set gentle reminders and break complex tasks into smaller actionable steps.",
        ),
        Trait::Extraversion => (
            "Create opportunities for social interaction and collaborative discussion.",
            "Respect their need for personal space and provide time to process information privately.",
        ),
        Trait::Agreeableness => (
            "Acknowledge their supportive nature and approach disagreements with sensitivity.",
            "Be direct and factual in communication, focusing on logical arguments rather than emotional appeals.",
        ),
        Trait::Neuroticism => (
            "Provide reassurance and clear expectations to reduce uncertainty and anxiety.",
            "Leverage their emotional stability for situations requiring calm under pressure.",
        ),
    }
}

/// One recommendation per trait at >= 7 or <= 4, then the closing line.
/// Never empty.
pub fn recommendations(scores: &TraitScores) -> Vec<String> {
    let mut out: Vec<String> = scores
        .iter()
        .filter_map(|(t, s)| {
            let (high, low) = advice(t);
            if *s >= HIGH_RECOMMENDATION {
                Some(high.to_string())
            } else if *s <= LOW_RECOMMENDATION {
                Some(low.to_string())
            } else {
                None
            }
        })
        .collect();
    out.push(CLOSING_RECOMMENDATION.to_string());
    out
}
