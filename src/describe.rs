//! Canned tier descriptions per trait.

use crate::traits::Trait;

const TIERS: usize = 5;

fn tiers(t: Trait) -> &'static [&'static str; TIERS] {
    match t {
        Trait::Openness => &[
            "Shows very conventional thinking and preferences for the familiar.",
            "Tends to be practical with narrow interests and traditional approaches.",
            "Balances tradition and novelty, with moderate curiosity about new experiences.",
            "Displays curiosity and appreciation for diverse ideas and experiences.",
            "Highly creative and intellectually curious with love for novelty and exploration.",
        ],
        Trait::Conscientiousness => &[
            "Very spontaneous with a casual approach to goals and obligations.",
            "Somewhat disorganized and may procrastinate on important tasks.",
            "Moderately organized with a balanced approach to work and leisure.",
            "Reliable and organized with clear goals and structured approach to tasks.",
            "Extremely methodical, disciplined and goal-oriented with attention to details.",
        ],
        Trait::Extraversion => &[
            "Strongly prefers solitude and finds social interaction draining.",
            "Tends to be reserved and values time alone over social gatherings.",
            "Balances social time and solitude with moderate engagement in groups.",
            "Socially confident and energetic, enjoying interaction and group activities.",
            "Highly outgoing and enthusiastic with a preference for being around others.",
        ],
        Trait::Agreeableness => &[
            "Very direct and challenging, prioritizing honesty over harmony.",
            "Somewhat skeptical of others' motives with a competitive approach.",
            "Balanced between cooperation and self-interest in relationships.",
            "Generally warm, trusting and cooperative in interpersonal relations.",
            "Extremely empathetic and cooperative, prioritizing others' needs.",
        ],
        Trait::Neuroticism => &[
            "Exceptionally calm and emotionally stable even under stress.",
            "Generally relaxed with resilience to most everyday stressors.",
            "Moderate emotional reactions with typical ups and downs.",
            "Tends to experience stress and worry more readily than average.",
            "Highly sensitive to stress with frequent experience of negative emotions.",
        ],
    }
}

/// Tier index for a score: `min(floor(score / 2), 4)`, never out of bounds.
pub fn tier(score: f64) -> usize {
    if !score.is_finite() || score <= 0.0 {
        return 0;
    }
    ((score / 2.0).floor() as usize).min(TIERS - 1)
}

/// Description of a trait at the given score.
pub fn describe(t: Trait, score: f64) -> &'static str {
    tiers(t)[tier(score)]
}
