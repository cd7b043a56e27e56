//! Core data model — the closed emotion label set, scoring records, and the
//! public classification result.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed emotion label set frames and centroids are defined over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Neutral,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "Happy",
            Emotion::Sad => "Sad",
            Emotion::Angry => "Angry",
            Emotion::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Informational polarity tag carried by a frame. Not consulted by any
/// scoring rule — purely descriptive metadata for asset authors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

/// The public result label. A superset of `Emotion` that also admits
/// `Unknown` for the case where neither tier can produce a confident
/// answer. Kept separate from `Emotion` so frame/centroid tables stay a
/// true closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Known(Emotion),
    Unknown,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Known(e) => e.as_str(),
            Label::Unknown => "Unknown",
        }
    }
}

impl From<Emotion> for Label {
    fn from(e: Emotion) -> Self {
        Label::Known(e)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Label {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// The grammatical role a [`crate::assets::schema::RoleMarkerType`] assigns
/// to the tokens in its groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Agent,
    Patient,
    Experiencer,
    Possessive,
}

/// A discourse connective's rhetorical type. Only `Contrastive` currently
/// alters scoring; other types load but have no active effect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectiveKind {
    Contrastive,
    #[serde(other)]
    Other,
}

/// A named semantic frame: the four role-indexed emotion outcomes plus
/// polarity/weight metadata. Loaded verbatim from the frames asset file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionFrame {
    pub typical_emotion: Emotion,
    pub agent_emotion: Emotion,
    pub patient_emotion: Emotion,
    pub negated_emotion: Emotion,
    pub polarity: Polarity,
    pub weight: f64,
    #[serde(default)]
    pub words: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// The final verdict returned by [`crate::classifier::Classifier::predict`].
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    pub label: Label,
    pub confidence: f64,
    pub method: String,
    /// Per-emotion list of surface forms that contributed to the score.
    pub matched_words: HashMap<Emotion, Vec<String>>,
    pub explanation: Vec<String>,
}

impl ClassificationResult {
    pub fn unknown(method: impl Into<String>, explanation: Vec<String>) -> Self {
        Self {
            label: Label::Unknown,
            confidence: 0.0,
            method: method.into(),
            matched_words: HashMap::new(),
            explanation,
        }
    }
}
