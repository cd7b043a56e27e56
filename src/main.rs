use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{info, warn};

use seo::assets::AssetStore;
use seo::classifier::Classifier;
use seo::config::Config;
use seo::embedding::{download, Embedder, OnnxEmbedder};

/// seo-classify: frame-based ontology classifier for Sinhala emotion
/// detection, with an embedding nearest-centroid fallback.
#[derive(Parser)]
#[command(name = "seo-classify", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one utterance
    Classify {
        /// The text to classify
        #[arg(long)]
        text: String,

        /// Directory containing frames.json, modifiers.json, role_markers.json, centroids.json
        #[arg(long)]
        assets_dir: Option<PathBuf>,

        /// Directory containing the embedding model (model.onnx, tokenizer.json)
        #[arg(long)]
        model_dir: Option<PathBuf>,
    },

    /// Download the sentence-embedding ONNX model (~470 MB)
    DownloadModel {
        #[arg(long)]
        model_dir: Option<PathBuf>,
    },

    /// Show which assets loaded and whether the ML fallback is available
    Status {
        #[arg(long)]
        assets_dir: Option<PathBuf>,
        #[arg(long)]
        model_dir: Option<PathBuf>,
    },

    /// Start the HTTP server
    #[cfg(feature = "web")]
    Serve {
        #[arg(long)]
        assets_dir: Option<PathBuf>,
        #[arg(long)]
        model_dir: Option<PathBuf>,
        #[arg(long)]
        bind: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("seo=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            text,
            assets_dir,
            model_dir,
        } => {
            let mut config = Config::load()?;
            if let Some(dir) = assets_dir {
                config.assets_dir = dir;
            }
            if let Some(dir) = model_dir {
                config.model_dir = dir;
            }

            let classifier = build_classifier(&config).await;
            let result = classifier.predict(&text).await;

            let label_colored = match result.label.as_str() {
                "Happy" => result.label.to_string().green(),
                "Sad" => result.label.to_string().blue(),
                "Angry" => result.label.to_string().red(),
                "Unknown" => result.label.to_string().dimmed(),
                _ => result.label.to_string().normal(),
            };

            println!("{}", text.bold());
            println!(
                "  {} {} (confidence {:.4})",
                "label:".dimmed(),
                label_colored,
                result.confidence
            );
            println!("  {} {}", "method:".dimmed(), result.method);
            if !result.matched_words.is_empty() {
                println!("  {}", "matched words:".dimmed());
                for (emotion, words) in &result.matched_words {
                    println!("    {emotion}: {}", words.join(", "));
                }
            }
            println!("  {}", "trace:".dimmed());
            for line in &result.explanation {
                println!("    {line}");
            }
        }

        Commands::DownloadModel { model_dir } => {
            let config = Config::load()?;
            let dir = model_dir.unwrap_or(config.model_dir);

            println!("Downloading sentence embedding model...");
            println!("  Destination: {}", dir.display());

            download::download_model(&dir).await?;

            println!("\n{}", "Model downloaded successfully.".bold());
        }

        Commands::Status {
            assets_dir,
            model_dir,
        } => {
            let mut config = Config::load()?;
            if let Some(dir) = assets_dir {
                config.assets_dir = dir;
            }
            if let Some(dir) = model_dir {
                config.model_dir = dir;
            }

            let classifier = build_classifier(&config).await;
            seo::status::show(&classifier);
        }

        #[cfg(feature = "web")]
        Commands::Serve {
            assets_dir,
            model_dir,
            bind,
            port,
        } => {
            let mut config = Config::load()?;
            if let Some(dir) = assets_dir {
                config.assets_dir = dir;
            }
            if let Some(dir) = model_dir {
                config.model_dir = dir;
            }
            if let Some(bind) = bind {
                config.bind_addr = bind;
            }
            if let Some(port) = port {
                config.port = port;
            }

            let classifier = Arc::new(build_classifier(&config).await);
            seo::web::run_server(classifier, &config.bind_addr, config.port).await?;
        }
    }

    Ok(())
}

/// Load assets and, if present, the local ONNX embedder. Neither failure is
/// fatal: a missing embedding model just means the ML fallback degrades to
/// `Unknown`, matching the classifier's own degraded-mode design.
async fn build_classifier(config: &Config) -> Classifier {
    info!(assets_dir = %config.assets_dir.display(), "loading assets");
    let assets = AssetStore::load(&config.assets_dir);
    if !assets.report.is_clean() {
        warn!(
            missing = ?assets.report.missing,
            malformed = ?assets.report.malformed,
            "asset loader degraded"
        );
    }

    let embedder: Option<Arc<dyn Embedder>> = if download::model_files_present(&config.model_dir) {
        match OnnxEmbedder::load(&config.model_dir) {
            Ok(embedder) => {
                info!("loaded ONNX sentence embedder");
                Some(Arc::new(embedder))
            }
            Err(e) => {
                warn!(error = %e, "failed to load embedder, ML fallback will return Unknown");
                None
            }
        }
    } else {
        None
    };

    Classifier::with_neutral_threshold(assets, embedder, config.neutral_threshold)
}
