//! Tunable constants fixed by the classifier's design. Centralized here so
//! the windowing/threshold rules documented alongside each tier are easy to
//! cross-reference and to override in tests.

/// Tier 3 negation test: a negation position must be within this many
/// tokens of the match to flip its emotion.
pub const NEGATION_WINDOW: usize = 2;

/// Tier 3 intensifier/diminisher window (exclusive of the token itself).
pub const INTENSIFIER_WINDOW: usize = 3;

/// Flat score added to Angry per hostile-address token.
pub const HOSTILE_WEIGHT: f64 = 0.7;

/// Only frames at or above this base weight are eligible for negation.
pub const STRONG_FRAME_NEGATION_THRESHOLD: f64 = 0.7;

/// Maximum absolute Unicode-scalar length difference for a prefix match
/// between a trigger's surface form and a candidate token.
pub const PREFIX_LENGTH_DIFF_CAP: usize = 3;

/// Tokens shorter than this (in Unicode scalars) are never frame triggers.
pub const MIN_FRAME_TOKEN_LEN: usize = 3;

/// Verb-final negation suffixes only apply to tokens longer than this.
pub const VERB_SUFFIX_GUARD_LEN: usize = 5;

/// ML fallback: centroid dot-product scores below this are mapped to Neutral.
pub const ML_NEUTRAL_THRESHOLD: f64 = 0.25;

/// Dominant-win arbitration ratio: the top score must be at least this many
/// times the runner-up to win outright instead of delegating to ML.
pub const DOMINANCE_RATIO: f64 = 2.0;

/// Round to 4 decimal places. Every reported confidence goes through this.
pub fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}
