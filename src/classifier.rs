//! Ties C1–C7 together behind one `predict` call.

use std::sync::Arc;

use tracing::warn;

use crate::arbiter::{self, Decision};
use crate::assets::AssetStore;
use crate::constants::ML_NEUTRAL_THRESHOLD;
use crate::embedding::{fallback, Embedder};
use crate::frames;
use crate::inference::{self, InferenceOutput};
use crate::linguistic;
use crate::tokenizer;
use crate::types::{ClassificationResult, Label};

/// The full classifier: the loaded knowledge base plus an optional ML
/// fallback encoder. Safe to call `predict` concurrently — all state is
/// read-only after construction.
pub struct Classifier {
    assets: AssetStore,
    embedder: Option<Arc<dyn Embedder>>,
    neutral_threshold: f64,
}

impl Classifier {
    pub fn new(assets: AssetStore, embedder: Option<Arc<dyn Embedder>>) -> Self {
        Self::with_neutral_threshold(assets, embedder, ML_NEUTRAL_THRESHOLD)
    }

    pub fn with_neutral_threshold(
        assets: AssetStore,
        embedder: Option<Arc<dyn Embedder>>,
        neutral_threshold: f64,
    ) -> Self {
        Self {
            assets,
            embedder,
            neutral_threshold,
        }
    }

    /// Never fails. Missing knowledge base inputs or an unavailable embedder
    /// degrade the result instead of surfacing as an error.
    pub async fn predict(&self, text: &str) -> ClassificationResult {
        let tokens = tokenizer::tokenize(text);
        let ctx = linguistic::analyze(&tokens, &self.assets);
        let matches = frames::match_all(&tokens, &self.assets);
        let InferenceOutput {
            scores,
            matched_words,
            trace,
        } = inference::infer(&matches, &ctx);

        match arbiter::decide(scores, matched_words, trace) {
            Decision::Ontology(result) => result,
            Decision::DelegateToMl {
                matched_words,
                trace,
                reason,
            } => {
                let (label, confidence) = self.run_ml(text).await;
                arbiter::resolve_with_ml(reason, matched_words, trace, label, confidence)
            }
        }
    }

    async fn run_ml(&self, text: &str) -> (Label, f64) {
        let Some(embedder) = &self.embedder else {
            return (Label::Unknown, 0.0);
        };
        match embedder.encode(text).await {
            Ok(embedding) => {
                fallback::classify(&embedding, &self.assets.centroids, self.neutral_threshold)
            }
            Err(e) => {
                warn!(error = %e, "embedder call failed, degrading to Unknown");
                (Label::Unknown, 0.0)
            }
        }
    }

    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }

    pub fn has_embedder(&self) -> bool {
        self.embedder.is_some()
    }
}
