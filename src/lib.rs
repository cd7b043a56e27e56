//! Frame-based ontology classifier for Sinhala emotion detection, arbitrated
//! against an embedding nearest-centroid fallback.
//!
//! Data flow: text -> [`tokenizer`] -> ([`linguistic`], [`frames`]) ->
//! [`inference`] -> [`arbiter`], which may delegate to [`embedding::fallback`].
//! [`classifier::Classifier`] ties the whole pipeline behind one `predict`
//! call; [`assets`] loads the knowledge base it runs against.

pub mod arbiter;
pub mod assets;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod frames;
pub mod inference;
pub mod linguistic;
pub mod status;
pub mod tokenizer;
pub mod types;

#[cfg(feature = "web")]
pub mod web;
