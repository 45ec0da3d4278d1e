//! JEV case study endpoint
//!
//! Ontology-aware harmonization of EV proteomics metadata across the
//! EV-specific databases (ExoCarta and Vesiclepedia).

use axum::{extract::State, http::StatusCode, Json};
use evmeta_core::{harmonize, JevSummary};

use super::error::{api_error, map_core_error, ApiError};
use super::AppState;

/// GET /case-study/jev
///
/// The dataset is read on every request so a replaced file is served
/// without a restart.
pub async fn case_study_jev(
    State(state): State<AppState>,
) -> Result<Json<JevSummary>, ApiError> {
    let locator = state.config.locator();

    let summary = tokio::task::spawn_blocking(move || -> evmeta_core::Result<JevSummary> {
        let dataset = locator.load()?;
        harmonize::case_study_jev(dataset)
    })
    .await
    .map_err(|e| {
        tracing::error!("Case study task failed: {}", e);
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal",
            format!("Case study task failed: {}", e),
        )
    })?
    .map_err(map_core_error)?;

    tracing::info!(
        total_records = summary.results.total_records,
        databases = summary.results.databases_covered.len(),
        "Served JEV case study"
    );

    Ok(Json(summary))
}
