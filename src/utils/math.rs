//! Mathematical utility functions

use std::collections::HashMap;

/// Term-frequency vector keyed by token.
pub type FrequencyVector = HashMap<String, usize>;

/// Calculate cosine similarity between two sparse frequency vectors.
/// The dot product only needs the shared vocabulary; magnitudes use each full vector.
/// Returns 0.0 if either vector has zero magnitude.
pub fn cosine_similarity(a: &FrequencyVector, b: &FrequencyVector) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot_product: f64 = small
        .iter()
        .filter_map(|(word, x)| large.get(word).map(|y| (*x as f64) * (*y as f64)))
        .sum();
    let norm_a: f64 = a.values().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    let norm_b: f64 = b.values().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    // Rounding can push identical vectors a hair past 1.0
    (dot_product / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Round to one decimal place.
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Guarded ratio: 0.0 when the denominator is zero.
pub fn ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 { 0.0 } else { num / den }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec_of(words: &[(&str, usize)]) -> FrequencyVector {
        words.iter().map(|(w, c)| (w.to_string(), *c)).collect()
    }

    #[test]
    fn test_identical_vectors() {
        let a = vec_of(&[("calm", 2), ("steady", 1)]);
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_vectors() {
        let a = vec_of(&[("calm", 2)]);
        let b = vec_of(&[("storm", 3)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_zero_magnitude() {
        let a = FrequencyVector::new();
        let b = vec_of(&[("storm", 3)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
        assert_eq!(cosine_similarity(&a, &a), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // (1*1) / (sqrt(2) * sqrt(2)) = 0.5
        let a = vec_of(&[("x", 1), ("y", 1)]);
        let b = vec_of(&[("x", 1), ("z", 1)]);
        assert!((cosine_similarity(&a, &b) - 0.5).abs() < 1e-12);
        assert!((cosine_similarity(&b, &a) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_round1_and_ratio() {
        assert_eq!(round1(6.66), 6.7);
        assert_eq!(round1(4.04), 4.0);
        assert_eq!(ratio(3.0, 0.0), 0.0);
        assert_eq!(ratio(3.0, 2.0), 1.5);
    }
}
