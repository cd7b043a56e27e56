//! System status display — which assets loaded, how much got indexed, and
//! whether the ML fallback is available.

use crate::classifier::Classifier;

pub fn show(classifier: &Classifier) {
    let assets = classifier.assets();

    println!("Frames:       {} loaded", assets.frames.len());
    println!("Triggers:     {} surface forms indexed", assets.triggers.len());
    println!("Negation:     {} words, {} verb suffixes", assets.negation_words.len(), assets.negation_verb_suffixes.len());
    println!("Intensifiers: {} words", assets.intensifiers.len());
    println!("Diminishers:  {} words", assets.diminishers.len());
    println!("Connectives:  {} words", assets.connectives.len());
    println!("Roles:        {} surface forms, {} hostile", assets.roles.len(), assets.hostile_words.len());
    println!("Centroids:    {} emotions", assets.centroids.len());
    println!(
        "Embedder:     {}",
        if classifier.has_embedder() { "available" } else { "not loaded" }
    );

    let report = &assets.report;
    if report.is_clean() {
        println!("\nAll assets loaded cleanly.");
    } else {
        if !report.missing.is_empty() {
            println!("\nMissing: {}", report.missing.join(", "));
        }
        if !report.malformed.is_empty() {
            println!("Malformed (skipped): {}", report.malformed.join(", "));
        }
    }
}
