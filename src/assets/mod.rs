//! C1 — Asset Loader.
//!
//! Loads the four knowledge-base artifacts (frames, modifiers, role
//! markers, centroids) and builds the fast-lookup indices the runtime
//! tiers query. All entities here are immutable after [`AssetStore::load`]
//! returns; there is no mutable state shared across queries.

pub mod loader;
pub mod schema;

use std::collections::{HashMap, HashSet};

use crate::types::{ConnectiveKind, Emotion, Role};

/// A resolved discourse-connective entry, ready for Tier 3 to consult.
#[derive(Debug, Clone)]
pub struct ConnectiveEntry {
    pub kind: ConnectiveKind,
    pub pre_weight: f64,
    pub post_weight: f64,
}

/// Everything the three ontology tiers need, built once at startup.
#[derive(Debug, Default)]
pub struct AssetStore {
    /// frame name -> frame definition
    pub frames: HashMap<String, crate::types::EmotionFrame>,
    /// surface form -> frame names it triggers (exact-form index; prefix
    /// resolution happens at query time, see [`crate::frames::match_token`]).
    pub triggers: HashMap<String, Vec<String>>,

    pub negation_words: HashSet<String>,
    pub negation_verb_suffixes: Vec<String>,
    pub intensifiers: HashMap<String, f64>,
    pub diminishers: HashMap<String, f64>,
    pub connectives: HashMap<String, ConnectiveEntry>,

    /// surface form -> role
    pub roles: HashMap<String, Role>,
    pub hostile_words: HashSet<String>,
    /// role -> set of first-person surface forms for that role
    pub first_person_by_role: HashMap<Role, HashSet<String>>,

    /// emotion -> L2-normalizable centroid vector
    pub centroids: HashMap<Emotion, Vec<f64>>,

    /// What failed to load, for the `status` CLI subcommand and tests.
    pub report: AssetReport,
}

/// Non-fatal problems encountered while loading assets. The classifier
/// degrades gracefully around any of these; this struct just makes the
/// degradation visible.
#[derive(Debug, Default, Clone)]
pub struct AssetReport {
    pub missing: Vec<String>,
    pub malformed: Vec<String>,
}

impl AssetReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.malformed.is_empty()
    }
}

impl AssetStore {
    /// Is a given surface form "purely a modifier" — i.e. excluded from
    /// ever being treated as a frame trigger?
    pub fn is_modifier(&self, token: &str) -> bool {
        self.negation_words.contains(token)
            || self.intensifiers.contains_key(token)
            || self.diminishers.contains_key(token)
            || self.connectives.contains_key(token)
    }
}
