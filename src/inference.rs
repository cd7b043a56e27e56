//! C5 — Semantic Inferencer (Tier 3).
//!
//! Combines frame matches with the linguistic context into per-emotion
//! weighted scores, matched-word evidence, and a human-readable trace.

use std::collections::HashMap;

use crate::constants::{
    HOSTILE_WEIGHT, INTENSIFIER_WINDOW, NEGATION_WINDOW, STRONG_FRAME_NEGATION_THRESHOLD,
};
use crate::frames::MatchRecord;
use crate::linguistic::LinguisticContext;
use crate::types::{ConnectiveKind, Emotion};

/// Output of one inference pass: emotion -> accumulated weight, emotion ->
/// surface forms that contributed, and the ordered explanation trace.
pub struct InferenceOutput {
    pub scores: HashMap<Emotion, f64>,
    pub matched_words: HashMap<Emotion, Vec<String>>,
    pub trace: Vec<String>,
}

pub fn infer(matches: &[MatchRecord], ctx: &LinguisticContext) -> InferenceOutput {
    let mut scores: HashMap<Emotion, f64> = HashMap::new();
    let mut matched_words: HashMap<Emotion, Vec<String>> = HashMap::new();
    let mut trace = Vec::new();

    for m in matches {
        let mut emotion = select_role_emotion(m, ctx);

        if m.weight >= STRONG_FRAME_NEGATION_THRESHOLD && is_negated(m.token_idx, ctx) {
            trace.push(format!(
                "token[{}] '{}' negated: {} -> {}",
                m.token_idx, m.token, emotion, m.negated_emotion
            ));
            emotion = m.negated_emotion;
        }

        let weight = compute_weight(m, ctx);

        *scores.entry(emotion).or_insert(0.0) += weight;
        matched_words.entry(emotion).or_default().push(m.token.clone());
        trace.push(format!(
            "token[{}] '{}' -> frame '{}' contributes {:.4} to {}",
            m.token_idx, m.token, m.frame_name, weight, emotion
        ));
    }

    if ctx.hostile_address {
        let contribution = HOSTILE_WEIGHT * ctx.hostile_count as f64;
        *scores.entry(Emotion::Angry).or_insert(0.0) += contribution;
        trace.push(format!(
            "hostile address ({} token(s)) contributes {:.4} to Angry",
            ctx.hostile_count, contribution
        ));
    }

    InferenceOutput {
        scores,
        matched_words,
        trace,
    }
}

fn select_role_emotion(m: &MatchRecord, ctx: &LinguisticContext) -> Emotion {
    if ctx.speaker_is_patient {
        m.patient_emotion
    } else if ctx.speaker_is_agent {
        m.agent_emotion
    } else {
        m.typical_emotion
    }
}

fn is_negated(token_idx: usize, ctx: &LinguisticContext) -> bool {
    ctx.negation_positions.iter().any(|&n| {
        n != token_idx && token_idx.abs_diff(n) <= NEGATION_WINDOW
    })
}

fn compute_weight(m: &MatchRecord, ctx: &LinguisticContext) -> f64 {
    let mut weight = m.weight;

    let max_intensifier = ctx
        .intensifiers
        .iter()
        .filter(|(idx, _)| *idx != m.token_idx && m.token_idx.abs_diff(*idx) <= INTENSIFIER_WINDOW)
        .map(|(_, mult)| *mult)
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))));
    if let Some(mult) = max_intensifier {
        weight *= mult;
    }

    let min_diminisher = ctx
        .diminishers
        .iter()
        .filter(|(idx, _)| *idx != m.token_idx && m.token_idx.abs_diff(*idx) <= INTENSIFIER_WINDOW)
        .map(|(_, mult)| *mult)
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.min(v))));
    if let Some(mult) = min_diminisher {
        weight *= mult;
    }

    for (c, kind, pre_weight, post_weight) in &ctx.connectives {
        if *kind != ConnectiveKind::Contrastive {
            continue;
        }
        if m.token_idx < *c {
            weight *= pre_weight;
        } else if m.token_idx > *c {
            weight *= post_weight;
        }
    }

    weight
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Polarity;

    fn frame_match(token_idx: usize, token: &str, weight: f64) -> MatchRecord {
        MatchRecord {
            token_idx,
            token: token.to_string(),
            matched_label: token.to_string(),
            frame_name: "f".to_string(),
            typical_emotion: Emotion::Happy,
            agent_emotion: Emotion::Happy,
            patient_emotion: Emotion::Sad,
            negated_emotion: Emotion::Sad,
            polarity: Polarity::Positive,
            weight,
        }
    }

    #[test]
    fn typical_emotion_used_with_no_role_context() {
        let ctx = LinguisticContext::default();
        let out = infer(&[frame_match(0, "x", 0.5)], &ctx);
        assert_eq!(out.scores.get(&Emotion::Happy), Some(&0.5));
    }

    #[test]
    fn patient_role_overrides_typical_emotion() {
        let mut ctx = LinguisticContext::default();
        ctx.speaker_is_patient = true;
        let out = infer(&[frame_match(0, "x", 0.5)], &ctx);
        assert_eq!(out.scores.get(&Emotion::Sad), Some(&0.5));
    }

    #[test]
    fn strong_frame_within_negation_window_is_negated() {
        let mut ctx = LinguisticContext::default();
        ctx.negation_positions.insert(1);
        let out = infer(&[frame_match(0, "x", 0.8)], &ctx);
        assert_eq!(out.scores.get(&Emotion::Sad), Some(&0.8));
        assert!(out.scores.get(&Emotion::Happy).is_none());
    }

    #[test]
    fn weak_frame_is_not_negatable() {
        let mut ctx = LinguisticContext::default();
        ctx.negation_positions.insert(1);
        let out = infer(&[frame_match(0, "x", 0.5)], &ctx);
        assert_eq!(out.scores.get(&Emotion::Happy), Some(&0.5));
    }

    #[test]
    fn intensifier_multiplies_by_max_within_window() {
        let mut ctx = LinguisticContext::default();
        ctx.intensifiers.push((1, 1.5));
        ctx.intensifiers.push((2, 2.0));
        let out = infer(&[frame_match(0, "x", 0.4)], &ctx);
        assert!((out.scores[&Emotion::Happy] - 0.8).abs() < 1e-9);
    }

    #[test]
    fn contrastive_connective_applies_post_weight_after_c() {
        let mut ctx = LinguisticContext::default();
        ctx.connectives
            .push((1, ConnectiveKind::Contrastive, 0.3, 1.2));
        let out = infer(&[frame_match(2, "x", 0.5)], &ctx);
        assert!((out.scores[&Emotion::Happy] - 0.6).abs() < 1e-9);
    }

    #[test]
    fn hostile_address_adds_to_angry_even_without_frame_match() {
        let mut ctx = LinguisticContext::default();
        ctx.hostile_address = true;
        ctx.hostile_count = 2;
        let out = infer(&[], &ctx);
        assert!((out.scores[&Emotion::Angry] - 1.4).abs() < 1e-9);
    }
}
