//! C6 — ML Fallback: nearest-centroid classification over L2-normalized
//! sentence embeddings.

use std::collections::HashMap;

use crate::constants::round4;
use crate::types::{Emotion, Label};

/// Nearest-centroid decision given a raw (not necessarily normalized) query
/// embedding and the loaded centroid table. Never fails: an empty centroid
/// table or a degenerate embedding both fall through to `(Unknown, 0.0)`.
pub fn classify(
    embedding: &[f64],
    centroids: &HashMap<Emotion, Vec<f64>>,
    neutral_threshold: f64,
) -> (Label, f64) {
    if centroids.is_empty() || embedding.is_empty() {
        return (Label::Unknown, 0.0);
    }

    let mut normalized = embedding.to_vec();
    l2_normalize(&mut normalized);

    let mut best: Option<(Emotion, f64)> = None;
    for (&emotion, centroid) in centroids {
        if emotion == Emotion::Neutral {
            continue;
        }
        let score = dot(&normalized, centroid);
        best = match best {
            Some((_, best_score)) if best_score >= score => best,
            _ => Some((emotion, score)),
        };
    }

    let Some((best_label, best_score)) = best else {
        return (Label::Unknown, 0.0);
    };

    if best_score < neutral_threshold {
        (Label::Known(Emotion::Neutral), round4(best_score))
    } else {
        (Label::Known(best_label), round4(best_score))
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

fn l2_normalize(v: &mut [f64]) {
    let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_centroids_yield_unknown() {
        let (label, confidence) = classify(&[1.0, 0.0], &HashMap::new(), 0.25);
        assert!(matches!(label, Label::Unknown));
        assert_eq!(confidence, 0.0);
    }

    #[test]
    fn below_threshold_maps_to_neutral() {
        let mut centroids = HashMap::new();
        centroids.insert(Emotion::Happy, vec![0.1, 0.0]);
        let (label, _) = classify(&[0.0, 1.0], &centroids, 0.25);
        assert!(matches!(label, Label::Known(Emotion::Neutral)));
    }

    #[test]
    fn above_threshold_picks_best_centroid() {
        let mut centroids = HashMap::new();
        centroids.insert(Emotion::Happy, vec![1.0, 0.0]);
        centroids.insert(Emotion::Sad, vec![0.0, 1.0]);
        let (label, confidence) = classify(&[1.0, 0.0], &centroids, 0.25);
        assert!(matches!(label, Label::Known(Emotion::Happy)));
        assert_eq!(confidence, 1.0);
    }

    #[test]
    fn neutral_centroid_is_excluded_from_the_argmax() {
        let mut centroids = HashMap::new();
        centroids.insert(Emotion::Neutral, vec![1.0, 0.0]);
        centroids.insert(Emotion::Sad, vec![0.5, 0.5]);
        let (label, _) = classify(&[1.0, 0.0], &centroids, 0.25);
        assert!(matches!(label, Label::Known(Emotion::Sad)));
    }
}
