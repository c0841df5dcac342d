// Cosine similarity over sparse term-weight maps.
//
//   cos(a, b) = sum(a_t * b_t) / (|a| * |b|)
//
// Weights are non-negative TF-IDF values, so the result lies in [0, 1]. It is
// clamped anyway to absorb floating-point drift just past 1.0.

use std::collections::HashMap;

/// Sparse vector: term -> weight.
pub type TermWeights = HashMap<String, f64>;

/// Compute cosine similarity between two sparse weight maps.
///
/// Returns 0.0 when either side has zero magnitude.
pub fn cosine_from_weights(weights_a: &TermWeights, weights_b: &TermWeights) -> f64 {
    // Iterate the smaller map for the dot product
    let (small, large) = if weights_a.len() <= weights_b.len() {
        (weights_a, weights_b)
    } else {
        (weights_b, weights_a)
    };

    let dot: f64 = small
        .iter()
        .filter_map(|(term, w)| large.get(term).map(|v| w * v))
        .sum();

    let mag_a = magnitude(weights_a);
    let mag_b = magnitude(weights_b);

    let denom = mag_a * mag_b;
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(0.0, 1.0)
    }
}

/// Euclidean norm of a weight map.
pub fn magnitude(weights: &TermWeights) -> f64 {
    weights.values().map(|w| w * w).sum::<f64>().sqrt()
}
