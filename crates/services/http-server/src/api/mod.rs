//! HTTP API for the EV metadata server
//!
//! - `GET /` - API index
//! - `GET /health` - Health check
//! - `GET /case-study/jev` - JEV case study summary
//! - `GET /ontology/synonyms` - EV synonym list and GO term
//! - `GET /ontology/normalize/:term` - Normalize an EV term

pub mod case_study;
pub mod error;
pub mod ontology;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

/// Build the HTTP API router
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/case-study/jev", get(case_study::case_study_jev))
        .route("/ontology/synonyms", get(ontology::synonyms))
        .route("/ontology/normalize/:term", get(ontology::normalize))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Response body for `GET /`
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub endpoints: Vec<&'static str>,
}

async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "EV metadata harmonization API",
        endpoints: vec!["/case-study/jev"],
    })
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
