//! C7 — Hybrid Arbiter.
//!
//! Decides whether Tier 3's ontology scores are authoritative on their own
//! or whether the ML fallback (C6) should resolve the query instead. Pure
//! logic — the only async step in the pipeline is the ML call itself, made
//! by the caller once this module asks for it.

use std::collections::HashMap;

use crate::constants::{round4, DOMINANCE_RATIO};
use crate::types::{ClassificationResult, Emotion, Label};

/// What the arbiter decided, given ontology scores alone.
pub enum Decision {
    /// Tier 2/3 output is authoritative; no ML call needed.
    Ontology(ClassificationResult),
    /// Ontology tiers were inconclusive; the caller should run C6 and fold
    /// its result in via [`resolve_with_ml`].
    DelegateToMl {
        matched_words: HashMap<Emotion, Vec<String>>,
        trace: Vec<String>,
        reason: String,
    },
}

pub fn decide(
    scores: HashMap<Emotion, f64>,
    matched_words: HashMap<Emotion, Vec<String>>,
    mut trace: Vec<String>,
) -> Decision {
    if scores.is_empty() {
        trace.push("no ontology frame matched".to_string());
        return Decision::DelegateToMl {
            matched_words,
            trace,
            reason: "ML - No Ontology Match".to_string(),
        };
    }

    if scores.len() == 1 {
        let (&emotion, &weight) = scores.iter().next().expect("len checked above");
        let confidence = round4(weight / 2.0).clamp(0.5, 1.0);
        let k = matched_words.get(&emotion).map(Vec::len).unwrap_or(0);
        let method = format!("Ontology (Frame-based, {k} triggers)");
        trace.push(format!(
            "single emotion {emotion} scored {weight:.4}, confidence {confidence:.4}"
        ));
        return Decision::Ontology(ClassificationResult {
            label: Label::Known(emotion),
            confidence,
            method,
            matched_words,
            explanation: trace,
        });
    }

    let mut ranked: Vec<(Emotion, f64)> = scores.into_iter().collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).expect("scores are finite"));
    let (top, t_top) = ranked[0];
    let (second, t_2) = ranked[1];

    if t_top > 0.0 && (t_2 == 0.0 || t_top / t_2 >= DOMINANCE_RATIO) {
        let confidence = round4(t_top / (t_top + t_2)).min(1.0);
        let method = format!("Ontology (dominant: top={top}={t_top:.4} vs second={second}={t_2:.4})");
        trace.push(format!(
            "dominant win: {top}={t_top:.4} vs {second}={t_2:.4}, confidence {confidence:.4}"
        ));
        return Decision::Ontology(ClassificationResult {
            label: Label::Known(top),
            confidence,
            method,
            matched_words,
            explanation: trace,
        });
    }

    let reason = format!("ML - Frame Conflict ({top}={t_top:.4} vs {second}={t_2:.4})");
    trace.push(format!(
        "frame conflict: {top}={t_top:.4} vs {second}={t_2:.4}, no dominance, delegating to ML"
    ));
    Decision::DelegateToMl {
        matched_words,
        trace,
        reason,
    }
}

/// Fold the ML fallback's verdict into a final result after [`decide`]
/// returned [`Decision::DelegateToMl`].
pub fn resolve_with_ml(
    reason: String,
    matched_words: HashMap<Emotion, Vec<String>>,
    mut trace: Vec<String>,
    ml_label: Label,
    ml_confidence: f64,
) -> ClassificationResult {
    trace.push(format!("ML fallback returned {ml_label} ({ml_confidence:.4})"));
    ClassificationResult {
        label: ml_label,
        confidence: ml_confidence,
        method: reason,
        matched_words,
        explanation: trace,
    }
}
