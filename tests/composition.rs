//! End-to-end scenarios driving the whole `Classifier` through a small
//! fixture asset set (no embedder, no centroids — the ML fallback always
//! degrades to `Unknown` here, which is itself part of what's under test).

use std::path::Path;

use seo::assets::AssetStore;
use seo::classifier::Classifier;
use seo::types::{Emotion, Label};

fn fixture_classifier() -> Classifier {
    let assets = AssetStore::load(Path::new("tests/fixtures"));
    Classifier::new(assets, None)
}

#[tokio::test]
async fn simple_positive_trigger_with_no_modifiers() {
    let classifier = fixture_classifier();
    let result = classifier.predict("සතුටුයි").await;

    assert!(matches!(result.label, Label::Known(Emotion::Happy)));
    assert!(result.method.starts_with("Ontology"));
    assert!(result.matched_words[&Emotion::Happy].contains(&"සතුටුයි".to_string()));
}

#[tokio::test]
async fn positive_trigger_negated_within_window_flips_to_sad() {
    let classifier = fixture_classifier();
    let result = classifier.predict("සතුටුයි නෑ").await;

    assert!(matches!(result.label, Label::Known(Emotion::Sad)));
    assert!(result.method.starts_with("Ontology"));
}

#[tokio::test]
async fn equal_weight_conflict_delegates_to_ml() {
    let classifier = fixture_classifier();
    let result = classifier.predict("සතුටුයි දුකයි").await;

    assert!(result.method.starts_with("ML - Frame Conflict"));
    assert!(result.matched_words.contains_key(&Emotion::Happy));
    assert!(result.matched_words.contains_key(&Emotion::Sad));
}

#[tokio::test]
async fn hostile_address_without_frame_trigger_yields_angry() {
    let classifier = fixture_classifier();
    let result = classifier.predict("තෝ යකෝ").await;

    assert!(matches!(result.label, Label::Known(Emotion::Angry)));
    assert!((result.confidence - 0.7).abs() < 1e-9); // round(1.4/2, 4) clamped to [0.5, 1.0]
    assert!(result.confidence >= 0.5);
    assert!(result.method.starts_with("Ontology"));
}

#[tokio::test]
async fn contrastive_connective_lets_post_clause_dominate() {
    let classifier = fixture_classifier();
    let result = classifier.predict("සතුටෙන් වුණත් දුකින්").await;

    assert!(matches!(result.label, Label::Known(Emotion::Sad)));
    assert!(result.method.starts_with("Ontology (dominant"));
    assert_eq!(result.confidence, 0.8);
}

#[tokio::test]
async fn no_triggers_and_no_centroids_yields_unknown() {
    let classifier = fixture_classifier();
    let result = classifier.predict("මෙය කිසිවක් නැති වාක්‍යයකි").await;

    assert!(matches!(result.label, Label::Unknown));
    assert_eq!(result.confidence, 0.0);
    assert_eq!(result.method, "ML - No Ontology Match");
    assert!(result.matched_words.is_empty());
}

#[tokio::test]
async fn repeated_calls_are_deterministic() {
    let classifier = fixture_classifier();
    let a = classifier.predict("සතුටුයි නෑ").await;
    let b = classifier.predict("සතුටුයි නෑ").await;
    assert_eq!(a.label.as_str(), b.label.as_str());
    assert_eq!(a.confidence, b.confidence);
    assert_eq!(a.method, b.method);
}
