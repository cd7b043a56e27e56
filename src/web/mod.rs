//! Web server — a thin Axum wrapper exposing `Classifier::predict` over
//! HTTP. Two routes only, per the public HTTP contract: a welcome string and
//! the classify endpoint. No auth, no SPA — this is a reference binary, not
//! the deployed service.

use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::classifier::Classifier;

#[derive(Clone)]
struct AppState {
    classifier: Arc<Classifier>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(classifier: Arc<Classifier>, bind: &str, port: u16) -> Result<()> {
    let state = AppState { classifier };
    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("seo-classify listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/classify", get(classify))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn welcome() -> impl IntoResponse {
    "Sinhala emotion ontology classifier. GET /classify?text=<utf8> to classify an utterance."
}

#[derive(Deserialize)]
struct ClassifyParams {
    text: String,
}

async fn classify(
    State(state): State<AppState>,
    Query(params): Query<ClassifyParams>,
) -> impl IntoResponse {
    let result = state.classifier.predict(&params.text).await;
    Json(serde_json::json!({
        "text": params.text,
        "emotion": result.label.as_str(),
        "confidence": result.confidence,
        "method": result.method,
        "matched_words": result.matched_words,
    }))
}
