//! Big Five trait identifiers and per-trait storage.

use serde::{Serialize, Serializer};
use std::ops::{Index, IndexMut};

/// The five personality dimensions, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Trait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl Trait {
    pub const ALL: [Trait; 5] = [
        Trait::Openness,
        Trait::Conscientiousness,
        Trait::Extraversion,
        Trait::Agreeableness,
        Trait::Neuroticism,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase key, as used in corpus categories ("high_openness").
    pub fn as_str(&self) -> &'static str {
        match self {
            Trait::Openness => "openness",
            Trait::Conscientiousness => "conscientiousness",
            Trait::Extraversion => "extraversion",
            Trait::Agreeableness => "agreeableness",
            Trait::Neuroticism => "neuroticism",
        }
    }

    /// Display name for result payloads.
    pub fn label(&self) -> &'static str {
        match self {
            Trait::Openness => "Openness",
            Trait::Conscientiousness => "Conscientiousness",
            Trait::Extraversion => "Extraversion",
            Trait::Agreeableness => "Agreeableness",
            Trait::Neuroticism => "Neuroticism",
        }
    }
}

impl std::fmt::Display for Trait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed-size map with one slot per trait.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TraitMap<T>([T; 5]);

impl<T> TraitMap<T> {
    pub const fn new(values: [T; 5]) -> Self {
        Self(values)
    }

    pub fn from_fn(mut f: impl FnMut(Trait) -> T) -> Self {
        Self(Trait::ALL.map(&mut f))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Trait, &T)> {
        Trait::ALL.into_iter().zip(self.0.iter())
    }

    pub fn map<U>(self, mut f: impl FnMut(Trait, T) -> U) -> TraitMap<U> {
        let mut idx = 0;
        TraitMap(self.0.map(|v| {
            let t = Trait::ALL[idx];
            idx += 1;
            f(t, v)
        }))
    }
}

impl<T> Index<Trait> for TraitMap<T> {
    type Output = T;

    fn index(&self, t: Trait) -> &T {
        &self.0[t.index()]
    }
}

impl<T> IndexMut<Trait> for TraitMap<T> {
    fn index_mut(&mut self, t: Trait) -> &mut T {
        &mut self.0[t.index()]
    }
}

impl<T: Serialize> Serialize for TraitMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(5))?;
        for (t, v) in self.iter() {
            map.serialize_entry(t.as_str(), v)?;
        }
        map.end()
    }
}

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 10.0;
pub const NEUTRAL_SCORE: f64 = 5.0;

/// Five trait scores, each kept within [1, 10].
pub type TraitScores = TraitMap<f64>;

impl TraitScores {
    /// Clamp every score into [1, 10]; non-finite values fall back to neutral.
    pub fn clamped(self) -> Self {
        self.map(|_, v| {
            if v.is_finite() {
                v.clamp(MIN_SCORE, MAX_SCORE)
            } else {
                NEUTRAL_SCORE
            }
        })
    }

    /// Round every score to one decimal.
    pub fn rounded(self) -> Self {
        self.map(|_, v| crate::utils::round1(v))
    }

    pub fn neutral() -> Self {
        Self::new([NEUTRAL_SCORE; 5])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_matches_presentation() {
        let labels: Vec<_> = Trait::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Openness",
                "Conscientiousness",
                "Extraversion",
                "Agreeableness",
                "Neuroticism"
            ]
        );
    }

    #[test]
    fn test_index_by_trait() {
        let mut m = TraitMap::new([1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(m[Trait::Extraversion], 3.0);
        m[Trait::Neuroticism] = 9.5;
        assert_eq!(m[Trait::Neuroticism], 9.5);
    }

    #[test]
    fn test_clamped_masks_out_of_range_and_nan() {
        let s = TraitScores::new([-3.0, 0.5, 12.0, f64::NAN, f64::INFINITY]).clamped();
        assert_eq!(s, TraitScores::new([1.0, 1.0, 10.0, 5.0, 5.0]));
    }

    #[test]
    fn test_serializes_as_keyed_object() {
        let s = TraitScores::new([9.0, 6.0, 7.0, 6.0, 4.0]);
        let json = serde_json::to_value(s).unwrap();
        assert_eq!(json["openness"], 9.0);
        assert_eq!(json["neuroticism"], 4.0);
    }
}
