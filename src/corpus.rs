//! Fixed reference corpus of labelled personality exemplars.
//!
//! One "high" and one "low" exemplar per trait. The table is process-wide,
//! read-only and never grows.

use crate::traits::{Trait, TraitMap};

#[derive(Debug)]
pub struct CorpusEntry {
    pub text: &'static str,
    /// Trait vector, each value in 1..=10
    pub traits: TraitMap<f64>,
    pub category: &'static str,
    pub description: &'static str,
}

pub const CORPUS_SIZE: usize = 10;

pub static CORPUS: [CorpusEntry; CORPUS_SIZE] = [
    CorpusEntry {
        text: "I love exploring new ideas and concepts. Every day brings exciting opportunities to learn something different. I'm always curious about how things work and why they are the way they are. Abstract thinking and philosophical discussions really energize me. I enjoy challenging conventional wisdom and thinking outside the box.",
        traits: TraitMap::new([9.0, 6.0, 7.0, 6.0, 4.0]),
        category: "high_openness",
        description: "Creative and intellectually curious individual who values novelty and exploration",
    },
    CorpusEntry {
        text: "I believe in following a structured approach to everything I do. Planning ahead and being organized helps me stay on track. I make detailed to-do lists and stick to my schedule. Deadlines are important to me, and I always deliver on my commitments. I pay attention to details and take pride in doing things thoroughly.",
        traits: TraitMap::new([5.0, 9.0, 4.0, 6.0, 3.0]),
        category: "high_conscientiousness",
        description: "Methodical and organized individual who values structure and responsibility",
    },
    CorpusEntry {
        text: "I really enjoy being around people and socializing. Group activities and team projects are my favorite. I love meeting new people and making connections. I'm energized by social interactions and feel most alive when I'm with others. I'm comfortable speaking up in groups and sharing my thoughts.",
        traits: TraitMap::new([7.0, 5.0, 9.0, 7.0, 4.0]),
        category: "high_extraversion",
        description: "Outgoing and sociable individual who thrives in social settings",
    },
    CorpusEntry {
        text: "I always try to be understanding and considerate of others' feelings. I believe in treating everyone with kindness and respect. I enjoy helping people and making them feel comfortable. I'm good at seeing things from different perspectives and finding common ground. Harmony in relationships is important to me.",
        traits: TraitMap::new([6.0, 6.0, 6.0, 9.0, 5.0]),
        category: "high_agreeableness",
        description: "Empathetic and cooperative individual who values harmony and understanding",
    },
    CorpusEntry {
        text: "I often worry about things and can be quite sensitive to stress. I tend to overthink situations and sometimes feel overwhelmed. My emotions can be intense, and I'm very aware of my feelings. I'm careful about making decisions because I want to avoid potential problems. I appreciate reassurance and support from others.",
        traits: TraitMap::new([6.0, 7.0, 4.0, 6.0, 8.0]),
        category: "high_neuroticism",
        description: "Emotionally sensitive individual who experiences feelings deeply",
    },
    CorpusEntry {
        text: "I prefer familiar routines and traditional approaches. I like things to be practical and straightforward. I'm not really into abstract theories or unconventional ideas. I value stability and prefer to stick with what I know works. I'm more comfortable with concrete facts than speculative concepts.",
        traits: TraitMap::new([3.0, 7.0, 5.0, 6.0, 4.0]),
        category: "low_openness",
        description: "Practical and conventional individual who prefers familiarity and tradition",
    },
    CorpusEntry {
        text: "I like to keep things flexible and spontaneous. I don't need strict schedules or detailed plans. I'm comfortable going with the flow and adapting to changes. I prefer a relaxed approach to tasks and deadlines. I'm not too concerned about perfect organization or meticulous details.",
        traits: TraitMap::new([7.0, 3.0, 6.0, 6.0, 4.0]),
        category: "low_conscientiousness",
        description: "Spontaneous and flexible individual who prefers a relaxed approach",
    },
    CorpusEntry {
        text: "I enjoy my own company and prefer quiet environments. I need time alone to recharge and process my thoughts. I'm comfortable with silence and don't feel the need to always be social. I prefer deep one-on-one conversations over large group settings. I'm selective about my social interactions.",
        traits: TraitMap::new([6.0, 6.0, 3.0, 6.0, 4.0]),
        category: "low_extraversion",
        description: "Introspective and reserved individual who values solitude and meaningful connections",
    },
    CorpusEntry {
        text: "I believe in being direct and honest in my communication. I value logical thinking and objective analysis. I'm comfortable with healthy debate and constructive criticism. I focus on facts and solutions rather than emotions. I prefer straightforward interactions over excessive politeness.",
        traits: TraitMap::new([6.0, 7.0, 5.0, 3.0, 4.0]),
        category: "low_agreeableness",
        description: "Direct and analytical individual who values honesty and logical thinking",
    },
    CorpusEntry {
        text: "I generally stay calm under pressure and don't get easily stressed. I'm emotionally stable and don't experience intense mood swings. I take things in stride and maintain my composure in challenging situations. I'm confident in my ability to handle difficulties. I don't worry excessively about things.",
        traits: TraitMap::new([6.0, 6.0, 5.0, 6.0, 2.0]),
        category: "low_neuroticism",
        description: "Emotionally stable individual who maintains composure under pressure",
    },
];

/// Look up an entry by its category label.
pub fn entry(category: &str) -> Option<&'static CorpusEntry> {
    CORPUS.iter().find(|e| e.category == category)
}

/// Category label for the high or low exemplar of a trait.
pub fn category_for(t: Trait, high: bool) -> String {
    format!("{}_{}", if high { "high" } else { "low" }, t.as_str())
}
