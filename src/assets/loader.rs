//! Reads the JSON asset files from an assets directory and builds an
//! [`AssetStore`]. Every failure here is recovered locally: a missing file
//! degrades that table to empty, a malformed individual entry is skipped
//! and the rest of the file still loads. Nothing in this module ever
//! aborts the process.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;
use tracing::warn;

use crate::types::{ConnectiveKind, Emotion, EmotionFrame, Role};

use super::schema::{CentroidsAsset, ModifiersAsset, RoleMarkersAsset};
use super::{AssetReport, AssetStore, ConnectiveEntry};

const FRAMES_FILE: &str = "frames.json";
const MODIFIERS_FILE: &str = "modifiers.json";
const ROLE_MARKERS_FILE: &str = "role_markers.json";
const CENTROIDS_FILE: &str = "centroids.json";

impl AssetStore {
    /// Load all four artifacts from `dir`. Always returns a usable store —
    /// check `.report` to see what was degraded.
    pub fn load(dir: &Path) -> AssetStore {
        let mut report = AssetReport::default();

        let (frames, triggers) = load_frames(dir, &mut report);
        let modifiers = load_modifiers(dir, &mut report);
        let (roles, hostile_words, first_person_by_role) = load_role_markers(dir, &mut report);
        let centroids = load_centroids(dir, &mut report);

        AssetStore {
            frames,
            triggers,
            negation_words: modifiers.negation.words.into_iter().collect(),
            negation_verb_suffixes: modifiers.negation.verb_suffixes,
            intensifiers: flatten_levels(modifiers.intensifiers.levels),
            diminishers: modifiers
                .diminishers
                .words
                .into_iter()
                .map(|w| (w, modifiers.diminishers.multiplier))
                .collect(),
            connectives: flatten_connectives(modifiers.discourse_connectives.types),
            roles,
            hostile_words,
            first_person_by_role,
            centroids,
            report,
        }
    }

    /// Convenience for callers that just want the default `./assets` layout.
    pub fn load_default() -> AssetStore {
        AssetStore::load(Path::new("./assets"))
    }
}

fn read_file(dir: &Path, name: &str, report: &mut AssetReport) -> Option<String> {
    let path = dir.join(name);
    match std::fs::read_to_string(&path) {
        Ok(s) => Some(s),
        Err(e) => {
            warn!(file = %path.display(), error = %e, "asset file missing or unreadable, degrading");
            report.missing.push(name.to_string());
            None
        }
    }
}

/// Frames are parsed entry-by-entry so one malformed frame doesn't sink the
/// whole table.
fn load_frames(
    dir: &Path,
    report: &mut AssetReport,
) -> (HashMap<String, EmotionFrame>, HashMap<String, Vec<String>>) {
    let mut frames = HashMap::new();
    let mut triggers: HashMap<String, Vec<String>> = HashMap::new();

    let Some(contents) = read_file(dir, FRAMES_FILE, report) else {
        return (frames, triggers);
    };

    let raw: HashMap<String, Value> = match serde_json::from_str(&contents) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "frames.json is not a JSON object, degrading to empty frame table");
            report.malformed.push(FRAMES_FILE.to_string());
            return (frames, triggers);
        }
    };

    for (name, value) in raw {
        match serde_json::from_value::<EmotionFrame>(value) {
            Ok(frame) => {
                for word in &frame.words {
                    triggers.entry(word.clone()).or_default().push(name.clone());
                }
                frames.insert(name, frame);
            }
            Err(e) => {
                warn!(frame = %name, error = %e, "malformed frame entry, skipping");
                report.malformed.push(format!("{FRAMES_FILE}:{name}"));
            }
        }
    }

    (frames, triggers)
}

fn load_modifiers(dir: &Path, report: &mut AssetReport) -> ModifiersAsset {
    let Some(contents) = read_file(dir, MODIFIERS_FILE, report) else {
        return ModifiersAsset::default();
    };
    match serde_json::from_str(&contents) {
        Ok(m) => m,
        Err(e) => {
            warn!(error = %e, "modifiers.json malformed, degrading to no modifiers");
            report.malformed.push(MODIFIERS_FILE.to_string());
            ModifiersAsset::default()
        }
    }
}

fn flatten_levels(levels: HashMap<String, super::schema::LevelEntry>) -> HashMap<String, f64> {
    let mut out = HashMap::new();
    for entry in levels.into_values() {
        for word in entry.words {
            out.insert(word, entry.multiplier);
        }
    }
    out
}

fn flatten_connectives(
    types: HashMap<String, super::schema::ConnectiveEntry>,
) -> HashMap<String, ConnectiveEntry> {
    let mut out = HashMap::new();
    for (type_name, entry) in types {
        let kind = if type_name == "contrastive" {
            ConnectiveKind::Contrastive
        } else {
            ConnectiveKind::Other
        };
        for word in entry.words {
            out.insert(
                word,
                ConnectiveEntry {
                    kind: kind.clone(),
                    pre_weight: entry.pre_clause_weight,
                    post_weight: entry.post_clause_weight,
                },
            );
        }
    }
    out
}

fn load_role_markers(
    dir: &Path,
    report: &mut AssetReport,
) -> (
    HashMap<String, Role>,
    std::collections::HashSet<String>,
    HashMap<Role, std::collections::HashSet<String>>,
) {
    let mut roles = HashMap::new();
    let mut hostile_words = std::collections::HashSet::new();
    let mut first_person_by_role: HashMap<Role, std::collections::HashSet<String>> =
        HashMap::new();

    let Some(contents) = read_file(dir, ROLE_MARKERS_FILE, report) else {
        return (roles, hostile_words, first_person_by_role);
    };

    let raw: RoleMarkersAsset = match serde_json::from_str(&contents) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "role_markers.json malformed, degrading to no role markers");
            report.malformed.push(ROLE_MARKERS_FILE.to_string());
            return (roles, hostile_words, first_person_by_role);
        }
    };

    for (marker_type, def) in raw {
        let Some(role) = parse_role(&def.role) else {
            warn!(marker_type = %marker_type, role = %def.role, "unknown role, skipping marker type");
            report.malformed.push(format!("{ROLE_MARKERS_FILE}:{marker_type}"));
            continue;
        };

        for (group_name, group) in def.groups {
            for word in &group.words {
                roles.insert(word.clone(), role);
                if group.hostile {
                    hostile_words.insert(word.clone());
                }
            }
            if group_name.contains("first_person") {
                first_person_by_role
                    .entry(role)
                    .or_default()
                    .extend(group.words);
            }
        }
    }

    (roles, hostile_words, first_person_by_role)
}

fn parse_role(s: &str) -> Option<Role> {
    match s {
        "agent" => Some(Role::Agent),
        "patient" => Some(Role::Patient),
        "experiencer" => Some(Role::Experiencer),
        "possessive" => Some(Role::Possessive),
        _ => None,
    }
}

/// Centroids are parsed entry-by-entry like frames: one malformed vector
/// (wrong type, non-numeric) doesn't sink the rest of the table.
fn load_centroids(dir: &Path, report: &mut AssetReport) -> HashMap<Emotion, Vec<f64>> {
    let mut centroids = HashMap::new();

    let Some(contents) = read_file(dir, CENTROIDS_FILE, report) else {
        return centroids;
    };

    let raw: HashMap<String, Value> = match serde_json::from_str(&contents) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "centroids.json is not a JSON object, degrading to no centroids");
            report.malformed.push(CENTROIDS_FILE.to_string());
            return centroids;
        }
    };

    for (label, value) in raw {
        let Some(emotion) = parse_emotion(&label) else {
            warn!(label = %label, "unknown emotion label in centroids.json, skipping");
            report.malformed.push(format!("{CENTROIDS_FILE}:{label}"));
            continue;
        };
        match serde_json::from_value::<CentroidsAsset>(HashMap::from([(label.clone(), value)])) {
            Ok(mut map) => {
                if let Some(vec) = map.remove(&label) {
                    centroids.insert(emotion, vec);
                }
            }
            Err(e) => {
                warn!(label = %label, error = %e, "malformed centroid vector, skipping");
                report.malformed.push(format!("{CENTROIDS_FILE}:{label}"));
            }
        }
    }

    centroids
}

fn parse_emotion(s: &str) -> Option<Emotion> {
    match s {
        "Happy" => Some(Emotion::Happy),
        "Sad" => Some(Emotion::Sad),
        "Angry" => Some(Emotion::Angry),
        "Neutral" => Some(Emotion::Neutral),
        _ => None,
    }
}
