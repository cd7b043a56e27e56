//! Central configuration loaded from environment variables (via `.env`,
//! loaded automatically at startup with `dotenvy`).

use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::constants::ML_NEUTRAL_THRESHOLD;
use crate::embedding::download;

pub struct Config {
    pub assets_dir: PathBuf,
    pub model_dir: PathBuf,
    pub neutral_threshold: f64,
    pub bind_addr: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables. Every field has a
    /// usable default — nothing here is required just to run `classify`.
    pub fn load() -> Result<Self> {
        Ok(Self {
            assets_dir: env::var("SEO_ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./assets")),
            model_dir: env::var("SEO_MODEL_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| download::default_model_dir()),
            neutral_threshold: env::var("SEO_NEUTRAL_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(ML_NEUTRAL_THRESHOLD),
            bind_addr: env::var("SEO_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("SEO_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }
}
