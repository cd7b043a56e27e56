//! C3 — Linguistic Analyzer (Tier 1).
//!
//! A single left-to-right scan over the token sequence that records where
//! negation, intensifiers, diminishers, connectives and role markers sit.
//! Nothing here consumes a token for Tier 2; `frames::match_all` independently
//! skips tokens that are purely modifiers.

use std::collections::HashSet;

use crate::assets::AssetStore;
use crate::constants::VERB_SUFFIX_GUARD_LEN;
use crate::types::ConnectiveKind;

/// Positional evidence collected from one pass over a tokenized query.
#[derive(Debug, Default)]
pub struct LinguisticContext {
    pub negation_positions: HashSet<usize>,
    /// (token_idx, multiplier)
    pub intensifiers: Vec<(usize, f64)>,
    /// (token_idx, multiplier)
    pub diminishers: Vec<(usize, f64)>,
    /// (token_idx, kind, pre_weight, post_weight)
    pub connectives: Vec<(usize, ConnectiveKind, f64, f64)>,
    pub speaker_is_agent: bool,
    pub speaker_is_patient: bool,
    pub speaker_is_experiencer: bool,
    pub hostile_address: bool,
    pub hostile_count: usize,
}

pub fn analyze(tokens: &[String], assets: &AssetStore) -> LinguisticContext {
    let mut ctx = LinguisticContext::default();

    for (i, token) in tokens.iter().enumerate() {
        if assets.negation_words.contains(token) {
            ctx.negation_positions.insert(i);
        } else if token.chars().count() > VERB_SUFFIX_GUARD_LEN
            && assets
                .negation_verb_suffixes
                .iter()
                .any(|suffix| token.ends_with(suffix.as_str()))
        {
            ctx.negation_positions.insert(i);
        }

        if let Some(&multiplier) = assets.intensifiers.get(token) {
            ctx.intensifiers.push((i, multiplier));
        }

        if let Some(&multiplier) = assets.diminishers.get(token) {
            ctx.diminishers.push((i, multiplier));
        }

        if let Some(connective) = assets.connectives.get(token) {
            ctx.connectives.push((
                i,
                connective.kind.clone(),
                connective.pre_weight,
                connective.post_weight,
            ));
        }

        use crate::types::Role;
        if assets
            .first_person_by_role
            .get(&Role::Agent)
            .is_some_and(|set| set.contains(token))
        {
            ctx.speaker_is_agent = true;
        }
        if assets
            .first_person_by_role
            .get(&Role::Patient)
            .is_some_and(|set| set.contains(token))
        {
            ctx.speaker_is_patient = true;
        }
        if assets
            .first_person_by_role
            .get(&Role::Experiencer)
            .is_some_and(|set| set.contains(token))
        {
            ctx.speaker_is_experiencer = true;
        }

        if assets.hostile_words.contains(token) {
            ctx.hostile_address = true;
            ctx.hostile_count += 1;
        }
    }

    ctx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetStore, ConnectiveEntry};
    use std::collections::{HashMap, HashSet as Set};

    fn store_with_negation(words: &[&str]) -> AssetStore {
        let mut store = AssetStore::default();
        store.negation_words = words.iter().map(|w| w.to_string()).collect();
        store
    }

    #[test]
    fn records_negation_word_position() {
        let store = store_with_negation(&["නෑ"]);
        let tokens = vec!["මම".to_string(), "නෑ".to_string()];
        let ctx = analyze(&tokens, &store);
        assert!(ctx.negation_positions.contains(&1));
        assert!(!ctx.negation_positions.contains(&0));
    }

    #[test]
    fn verb_suffix_negation_requires_long_token() {
        let mut store = AssetStore::default();
        store.negation_verb_suffixes = vec!["නෑය".to_string()];
        // "කෑ" + suffix repeated to exceed the guard length; short token is exempt.
        let short = "නෑය".to_string();
        let long = "මමමමමනෑය".to_string();
        let tokens = vec![short.clone(), long.clone()];
        let ctx = analyze(&tokens, &store);
        assert!(!ctx.negation_positions.contains(&0));
        assert!(ctx.negation_positions.contains(&1));
    }

    #[test]
    fn hostile_words_increment_count_and_flag() {
        let mut store = AssetStore::default();
        store.hostile_words = Set::from(["තෝ".to_string(), "යකෝ".to_string()]);
        let tokens = vec!["තෝ".to_string(), "යකෝ".to_string()];
        let ctx = analyze(&tokens, &store);
        assert!(ctx.hostile_address);
        assert_eq!(ctx.hostile_count, 2);
    }

    #[test]
    fn first_person_agent_sets_speaker_flag() {
        use crate::types::Role;
        let mut store = AssetStore::default();
        let mut map = HashMap::new();
        map.insert(Role::Agent, Set::from(["මම".to_string()]));
        store.first_person_by_role = map;
        let tokens = vec!["මම".to_string()];
        let ctx = analyze(&tokens, &store);
        assert!(ctx.speaker_is_agent);
        assert!(!ctx.speaker_is_patient);
    }

    #[test]
    fn contrastive_connective_is_recorded_with_weights() {
        use crate::types::ConnectiveKind;
        let mut store = AssetStore::default();
        store.connectives.insert(
            "වුණත්".to_string(),
            ConnectiveEntry {
                kind: ConnectiveKind::Contrastive,
                pre_weight: 0.3,
                post_weight: 1.2,
            },
        );
        let tokens = vec!["වුණත්".to_string()];
        let ctx = analyze(&tokens, &store);
        assert_eq!(ctx.connectives.len(), 1);
        let (idx, kind, pre, post) = &ctx.connectives[0];
        assert_eq!(*idx, 0);
        assert_eq!(*kind, ConnectiveKind::Contrastive);
        assert_eq!(*pre, 0.3);
        assert_eq!(*post, 1.2);
    }
}
