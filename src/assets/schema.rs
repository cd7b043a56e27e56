//! On-disk asset formats. Plain JSON, consumed once at startup by
//! [`super::loader`]. These structs mirror the asset files byte-for-byte;
//! the loader is responsible for turning them into the fast-lookup
//! indices the runtime tiers actually query.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::EmotionFrame;

/// Top-level frames asset: frame name -> frame definition.
pub type FramesAsset = HashMap<String, EmotionFrame>;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ModifiersAsset {
    #[serde(default)]
    pub negation: NegationSection,
    #[serde(default)]
    pub intensifiers: IntensifiersSection,
    #[serde(default)]
    pub diminishers: DiminisherEntry,
    #[serde(default)]
    pub discourse_connectives: ConnectivesSection,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct NegationSection {
    #[serde(default)]
    pub words: Vec<String>,
    /// Verb-final suffixes (e.g. endings meaning "...doesn't do"), applied
    /// only to tokens longer than [`crate::constants::VERB_SUFFIX_GUARD_LEN`].
    #[serde(default)]
    pub verb_suffixes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct IntensifiersSection {
    #[serde(default)]
    pub levels: HashMap<String, LevelEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelEntry {
    pub multiplier: f64,
    #[serde(default)]
    pub words: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DiminisherEntry {
    #[serde(default)]
    pub multiplier: f64,
    #[serde(default)]
    pub words: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ConnectivesSection {
    #[serde(default)]
    pub types: HashMap<String, ConnectiveEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConnectiveEntry {
    pub pre_clause_weight: f64,
    pub post_clause_weight: f64,
    #[serde(default)]
    pub words: Vec<String>,
}

/// Top-level role-marker asset: marker type name -> role definition.
pub type RoleMarkersAsset = HashMap<String, RoleMarkerType>;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoleMarkerType {
    pub role: String,
    #[serde(default)]
    pub groups: HashMap<String, RoleGroup>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct RoleGroup {
    #[serde(default)]
    pub hostile: bool,
    #[serde(default)]
    pub words: Vec<String>,
}

/// Top-level centroid asset: emotion label -> dense vector.
pub type CentroidsAsset = HashMap<String, Vec<f64>>;
