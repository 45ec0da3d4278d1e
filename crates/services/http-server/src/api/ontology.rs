//! Ontology lookup endpoints

use axum::{extract::Path, http::StatusCode, Json};
use evmeta_core::ontology::{go_term_for, EV_SYNONYMS, EXTRACELLULAR_VESICLE};
use evmeta_core::{normalize_term, OntologyTerm};
use serde::Serialize;

use super::error::{api_error, ApiError};

/// Response body for `GET /ontology/synonyms`
#[derive(Debug, Serialize)]
pub struct SynonymsResponse {
    pub entity: &'static str,
    pub ontology: Vec<&'static str>,
    pub synonyms: &'static [&'static str],
}

/// GET /ontology/synonyms
pub async fn synonyms() -> Json<SynonymsResponse> {
    Json(SynonymsResponse {
        entity: EXTRACELLULAR_VESICLE,
        ontology: go_term_for(EXTRACELLULAR_VESICLE).into_iter().collect(),
        synonyms: EV_SYNONYMS,
    })
}

/// GET /ontology/normalize/:term
pub async fn normalize(Path(term): Path<String>) -> Result<Json<OntologyTerm>, ApiError> {
    normalize_term(&term).map(Json).ok_or_else(|| {
        api_error(
            StatusCode::NOT_FOUND,
            "unknown_term",
            format!("No ontology entry for term: {}", term),
        )
    })
}
