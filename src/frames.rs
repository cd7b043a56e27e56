//! C4 — Frame Matcher (Tier 2).
//!
//! Maps each content token to zero or more [`MatchRecord`]s by exact and
//! length-bounded prefix matching against the trigger index built by C1.

use std::collections::HashMap;

use crate::assets::AssetStore;
use crate::constants::{MIN_FRAME_TOKEN_LEN, PREFIX_LENGTH_DIFF_CAP};
use crate::types::{Emotion, Polarity};

/// One frame activated by one token. Transient — lives only for a query.
#[derive(Debug, Clone)]
pub struct MatchRecord {
    pub token_idx: usize,
    pub token: String,
    /// The trigger surface form that matched (may be a prefix of `token` or
    /// vice versa), kept for dedup and for explanation traces.
    pub matched_label: String,
    pub frame_name: String,
    pub typical_emotion: Emotion,
    pub agent_emotion: Emotion,
    pub patient_emotion: Emotion,
    pub negated_emotion: Emotion,
    #[allow(dead_code)]
    pub polarity: Polarity,
    pub weight: f64,
}

/// Run the matcher over every token, in index order.
pub fn match_all(tokens: &[String], assets: &AssetStore) -> Vec<MatchRecord> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| eligible(token, assets))
        .flat_map(|(idx, token)| match_token(idx, token, assets))
        .collect()
}

fn eligible(token: &str, assets: &AssetStore) -> bool {
    token.chars().count() >= MIN_FRAME_TOKEN_LEN && !assets.is_modifier(token)
}

/// Candidate triggers for one token, deduplicated per frame by keeping the
/// longest (most specific) matched label.
fn match_token(token_idx: usize, token: &str, assets: &AssetStore) -> Vec<MatchRecord> {
    let token_len = token.chars().count();

    // frame_name -> (matched_label, matched_label length)
    let mut best: HashMap<&str, (&str, usize)> = HashMap::new();

    for (label, frame_names) in &assets.triggers {
        if !is_prefix_match(label, token, token_len) {
            continue;
        }
        let label_len = label.chars().count();
        for frame_name in frame_names {
            best.entry(frame_name.as_str())
                .and_modify(|entry| {
                    if label_len > entry.1 {
                        *entry = (label.as_str(), label_len);
                    }
                })
                .or_insert((label.as_str(), label_len));
        }
    }

    best.into_iter()
        .filter_map(|(frame_name, (matched_label, _))| {
            let frame = assets.frames.get(frame_name)?;
            Some(MatchRecord {
                token_idx,
                token: token.to_string(),
                matched_label: matched_label.to_string(),
                frame_name: frame_name.to_string(),
                typical_emotion: frame.typical_emotion,
                agent_emotion: frame.agent_emotion,
                patient_emotion: frame.patient_emotion,
                negated_emotion: frame.negated_emotion,
                polarity: frame.polarity,
                weight: frame.weight,
            })
        })
        .collect()
}

/// `label == token`, or a prefix relation in either direction bounded by
/// [`PREFIX_LENGTH_DIFF_CAP`] Unicode scalars of length difference.
fn is_prefix_match(label: &str, token: &str, token_len: usize) -> bool {
    if label == token {
        return true;
    }
    let label_len = label.chars().count();
    let diff = label_len.abs_diff(token_len);
    if diff > PREFIX_LENGTH_DIFF_CAP {
        return false;
    }
    token.starts_with(label) || label.starts_with(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EmotionFrame, Polarity};

    fn store_with_frame(name: &str, word: &str, weight: f64) -> AssetStore {
        let mut store = AssetStore::default();
        store.frames.insert(
            name.to_string(),
            EmotionFrame {
                typical_emotion: Emotion::Happy,
                agent_emotion: Emotion::Happy,
                patient_emotion: Emotion::Happy,
                negated_emotion: Emotion::Sad,
                polarity: Polarity::Positive,
                weight,
                words: vec![word.to_string()],
                description: String::new(),
            },
        );
        store
            .triggers
            .entry(word.to_string())
            .or_default()
            .push(name.to_string());
        store
    }

    #[test]
    fn exact_match_yields_one_record() {
        let store = store_with_frame("happy_exclaim", "සතුටුයි", 0.8);
        let tokens = vec!["සතුටුයි".to_string()];
        let records = match_all(&tokens, &store);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].matched_label, "සතුටුයි");
        assert_eq!(records[0].frame_name, "happy_exclaim");
    }

    #[test]
    fn short_tokens_are_never_triggers() {
        let store = store_with_frame("x", "ab", 0.5);
        let tokens = vec!["ab".to_string()];
        assert!(match_all(&tokens, &store).is_empty());
    }

    #[test]
    fn modifier_tokens_are_skipped_even_if_in_trigger_index() {
        let mut store = store_with_frame("x", "වුණත්", 0.5);
        store.negation_words.insert("වුණත්".to_string());
        let tokens = vec!["වුණත්".to_string()];
        assert!(match_all(&tokens, &store).is_empty());
    }

    #[test]
    fn prefix_within_cap_matches() {
        // "happiness"-style stem vs a 2-char-longer inflected form.
        let store = store_with_frame("x", "සතුට", 0.6);
        let tokens = vec!["සතුටුයි".to_string()];
        let records = match_all(&tokens, &store);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn dedup_keeps_longest_matched_label_per_frame() {
        let mut store = AssetStore::default();
        store.frames.insert(
            "happy".to_string(),
            EmotionFrame {
                typical_emotion: Emotion::Happy,
                agent_emotion: Emotion::Happy,
                patient_emotion: Emotion::Happy,
                negated_emotion: Emotion::Sad,
                polarity: Polarity::Positive,
                weight: 0.6,
                words: vec!["සතුට".to_string(), "සතුටුයි".to_string()],
                description: String::new(),
            },
        );
        store
            .triggers
            .entry("සතුට".to_string())
            .or_default()
            .push("happy".to_string());
        store
            .triggers
            .entry("සතුටුයි".to_string())
            .or_default()
            .push("happy".to_string());

        let tokens = vec!["සතුටුයි".to_string()];
        let records = match_all(&tokens, &store);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].matched_label, "සතුටුයි");
    }
}
