//! Phrase tables for the narrative.

use crate::traits::Trait;

pub const OPENINGS: &[&str] = &[
    "Based on the analysis of their communication style, this person",
    "The text analysis reveals that this individual",
    "Looking at their writing patterns, this person",
    "From analyzing their communication, this individual",
    "The personality assessment indicates that this person",
];

pub const BALANCED: &[&str] = &[
    "shows a balanced personality profile with no extreme traits",
    "demonstrates a well-rounded personality with moderate expression of traits",
    "presents a balanced approach to different aspects of personality",
    "shows adaptability across different personality dimensions",
    "exhibits a harmonious blend of personality characteristics",
];

pub const CONJUNCTIONS: &[&str] = &["and", "while also", "as well as", "along with", "in addition to"];

pub const COMMUNICATION_INTROS: &[&str] = &[
    "In terms of communication preferences, they",
    "When it comes to communication style, they",
    "Their communication approach suggests they",
    "In their interactions, they",
    "Their preferred communication style indicates they",
];

pub const COMMUNICATION_FALLBACK: &str = "adapt well to various communication styles";

/// Intensity bands, strongest first, over `|score - 5| / 5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Extreme,
    Strong,
    Moderate,
    Mild,
}

impl Band {
    pub fn of(intensity: f64) -> Self {
        if intensity > 0.8 {
            Band::Extreme
        } else if intensity > 0.6 {
            Band::Strong
        } else if intensity > 0.4 {
            Band::Moderate
        } else {
            Band::Mild
        }
    }

    fn index(self) -> usize {
        match self {
            Band::Extreme => 0,
            Band::Strong => 1,
            Band::Moderate => 2,
            Band::Mild => 3,
        }
    }
}

// [above-5 bands, below-5 bands], each ordered Extreme..Mild
const DESCRIPTORS: [[[&str; 4]; 2]; 5] = [
    [
        [
            "demonstrates exceptional creativity and intellectual curiosity",
            "shows strong appreciation for new ideas and experiences",
            "displays moderate openness to new perspectives",
            "shows some interest in exploring new concepts",
        ],
        [
            "strongly prefers familiar and conventional approaches",
            "tends to favor practical and established methods",
            "shows some preference for traditional approaches",
            "leans towards familiar ways of thinking",
        ],
    ],
    [
        [
            "exhibits exceptional organization and attention to detail",
            "shows strong planning and methodical tendencies",
            "demonstrates reliable and structured behavior",
            "tends to be organized and systematic",
        ],
        [
            "prefers a highly flexible and spontaneous approach",
            "tends to be more casual and adaptable",
            "shows some preference for informal methods",
            "leans towards a relaxed approach",
        ],
    ],
    [
        [
            "is highly energetic and socially engaging",
            "shows strong enthusiasm for social interaction",
            "demonstrates moderate social confidence",
            "tends to be outgoing and sociable",
        ],
        [
            "prefers quiet reflection and independent work",
            "tends to be more reserved in social settings",
            "shows some preference for solitary activities",
            "leans towards introspective behavior",
        ],
    ],
    [
        [
            "demonstrates exceptional empathy and cooperation",
            "shows strong consideration for others' perspectives",
            "tends to be supportive and understanding",
            "shows a cooperative nature",
        ],
        [
            "prefers direct and analytical communication",
            "tends to be more objective and straightforward",
            "shows some preference for factual discussion",
            "leans towards direct communication",
        ],
    ],
    [
        [
            "shows high emotional sensitivity and reactivity",
            "tends to experience emotions more intensely",
            "demonstrates some emotional expressiveness",
            "shows emotional awareness",
        ],
        [
            "exhibits exceptional emotional stability",
            "shows strong resilience to stress",
            "tends to maintain emotional balance",
            "demonstrates emotional composure",
        ],
    ],
];

/// Descriptor for a trait at a given score.
pub fn descriptor(t: Trait, score: f64) -> &'static str {
    let intensity = (score - 5.0).abs() / 5.0;
    let direction = if score > 5.0 { 0 } else { 1 };
    DESCRIPTORS[t.index()][direction][Band::of(intensity).index()]
}

/// Every descriptor of a trait, for membership checks.
pub fn descriptors_of(t: Trait) -> impl Iterator<Item = &'static str> {
    DESCRIPTORS[t.index()].iter().flat_map(|d| d.iter().copied())
}

/// Which side of the thresholds a score falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    High,
    Low,
    Mid,
}

pub const HIGH_THRESHOLD: f64 = 6.5;
pub const LOW_THRESHOLD: f64 = 3.5;

impl Level {
    pub fn of(score: f64) -> Self {
        if score >= HIGH_THRESHOLD {
            Level::High
        } else if score <= LOW_THRESHOLD {
            Level::Low
        } else {
            Level::Mid
        }
    }
}

/// A pairwise trait-combination insight.
pub struct InsightRule {
    pub first: Trait,
    pub second: Trait,
    /// (first level, second level, sentence); the first matching case fires
    pub cases: &'static [(Level, Level, &'static str)],
}

pub const INSIGHT_RULES: &[InsightRule] = &[
    InsightRule {
        first: Trait::Openness,
        second: Trait::Extraversion,
        cases: &[
            (
                Level::High,
                Level::High,
                "They likely thrive in dynamic environments where they can explore new ideas while engaging with others",
            ),
            (
                Level::High,
                Level::Low,
                "They may prefer to explore new concepts independently before sharing their insights",
            ),
            (
                Level::Low,
                Level::High,
                "They excel at social interaction while preferring familiar topics and approaches",
            ),
        ],
    },
    InsightRule {
        first: Trait::Conscientiousness,
        second: Trait::Neuroticism,
        cases: &[
            (
                Level::High,
                Level::High,
                "Their attention to detail and planning may be driven by a desire to maintain control and reduce uncertainty",
            ),
            (
                Level::High,
                Level::Low,
                "They approach tasks with calm confidence and systematic precision",
            ),
            (
                Level::Low,
                Level::High,
                "They may experience stress when faced with unstructured situations",
            ),
        ],
    },
    InsightRule {
        first: Trait::Agreeableness,
        second: Trait::Extraversion,
        cases: &[
            (
                Level::High,
                Level::High,
                "They excel at building and maintaining harmonious relationships in group settings",
            ),
            (
                Level::High,
                Level::Low,
                "They express their caring nature through thoughtful actions rather than overt social interaction",
            ),
            (
                Level::Low,
                Level::High,
                "They engage actively in social settings while maintaining analytical distance",
            ),
        ],
    },
    InsightRule {
        first: Trait::Openness,
        second: Trait::Conscientiousness,
        cases: &[
            (
                Level::High,
                Level::Low,
                "They may prefer creative freedom over structured approaches to tasks",
            ),
            (
                Level::Low,
                Level::High,
                "They excel in environments with clear procedures and established methods",
            ),
            (
                Level::High,
                Level::High,
                "They combine creativity with systematic implementation of ideas",
            ),
        ],
    },
    InsightRule {
        first: Trait::Neuroticism,
        second: Trait::Agreeableness,
        cases: &[
            (
                Level::High,
                Level::High,
                "Their emotional sensitivity often translates into deep empathy for others",
            ),
            (
                Level::Low,
                Level::High,
                "They maintain emotional stability while being highly considerate of others",
            ),
            (
                Level::High,
                Level::Low,
                "They may experience intense emotions while maintaining analytical objectivity",
            ),
        ],
    },
];

/// Per-trait communication clause for (high, low) scores.
pub fn communication_clauses(t: Trait) -> (&'static str, &'static str) {
    match t {
        Trait::Extraversion => (
            "prefer interactive and engaging discussions",
            "appreciate time to process information and respond thoughtfully",
        ),
        Trait::Openness => (
            "enjoy exploring abstract concepts and possibilities",
            "respond well to concrete examples and practical applications",
        ),
        Trait::Conscientiousness => (
            "value clear structure and specific details",
            "prefer flexible approaches and high-level overviews",
        ),
        Trait::Agreeableness => (
            "appreciate a supportive and collaborative tone",
            "prefer direct and objective communication",
        ),
        Trait::Neuroticism => (
            "may need reassurance and clear expectations",
            "handle pressure well and maintain composure in challenging situations",
        ),
    }
}

/// Order in which communication clauses become eligible.
pub const COMMUNICATION_ORDER: [Trait; 5] = [
    Trait::Extraversion,
    Trait::Openness,
    Trait::Conscientiousness,
    Trait::Agreeableness,
    Trait::Neuroticism,
];
