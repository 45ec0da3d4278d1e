//! End-to-end tests of the HTTP API against Parquet fixtures

use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{Field, Schema};
use arrow::record_batch::RecordBatch;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use parquet::arrow::ArrowWriter;
use serde_json::{json, Value};
use tower::ServiceExt;

use evmeta_http_server::api::{build_router, AppState};
use evmeta_http_server::config::Config;

fn write_fixture(path: &Path) {
    let columns: Vec<(&str, Vec<Option<&str>>)> = vec![
        (
            "source_database",
            vec![Some("ExoCarta"), Some("Vesiclepedia"), Some("UniProt"), Some("ExoCarta")],
        ),
        (
            "sample_description",
            vec![
                Some("Exosomes from plasma"),
                Some("Small extracellular vesicles, SEC"),
                Some("Exosomes from plasma"),
                Some("Whole cell lysate"),
            ],
        ),
        (
            "protein_accession",
            vec![Some("P08962"), Some("P21926"), Some("P60709"), Some("P04406")],
        ),
        (
            "species",
            vec![Some("Homo sapiens"), Some("Homo sapiens"), Some("Homo sapiens"), None],
        ),
    ];

    let schema = Arc::new(Schema::new(
        columns
            .iter()
            .map(|(name, _)| Field::new(*name, arrow::datatypes::DataType::Utf8, true))
            .collect::<Vec<_>>(),
    ));
    let arrays: Vec<ArrayRef> = columns
        .into_iter()
        .map(|(_, values)| Arc::new(StringArray::from(values)) as ArrayRef)
        .collect();
    let batch = RecordBatch::try_new(schema.clone(), arrays).unwrap();

    let file = std::fs::File::create(path).unwrap();
    let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();
}

fn router_for(parquet_path: Option<PathBuf>, search_paths: Vec<PathBuf>) -> Router {
    let mut config = Config::default();
    config.dataset.parquet_path = parquet_path;
    config.dataset.search_paths = search_paths;
    build_router(AppState::new(Arc::new(config)))
}

async fn get(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(router, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_index() {
    let (status, body) = get_json(router_for(None, vec![]), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "EV metadata harmonization API",
            "endpoints": ["/case-study/jev"]
        })
    );
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(router_for(None, vec![]), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn test_case_study_summary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("unified_ev_metadata.parquet");
    write_fixture(&path);

    let router = router_for(None, vec![dir.path().join("missing.parquet"), path]);
    let (status, body) = get_json(router, "/case-study/jev").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"]["entity"], "extracellular vesicle");
    assert_eq!(body["query"]["ontology"], json!(["GO:1903561"]));
    assert_eq!(body["query"]["synonyms_used"].as_array().unwrap().len(), 9);
    assert_eq!(
        body["results"],
        json!({
            "total_records": 2,
            "unique_proteins": 2,
            "databases_covered": ["ExoCarta", "Vesiclepedia"],
            "species_distribution": {"Homo sapiens": 2}
        })
    );
}

#[tokio::test]
async fn test_case_study_without_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let router = router_for(None, vec![dir.path().join("missing.parquet")]);
    let (status, body) = get_json(router, "/case-study/jev").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error_type"], "dataset_unavailable");
    // searched paths stay in the server log
    assert!(!body["message"].as_str().unwrap().contains("missing.parquet"));
}

#[tokio::test]
async fn test_case_study_override_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let router = router_for(Some(dir.path().join("gone.parquet")), vec![]);
    let (status, body) = get_json(router, "/case-study/jev").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error_type"], "dataset_read");
}

#[tokio::test]
async fn test_ontology_endpoints() {
    let router = router_for(None, vec![]);
    let (status, body) = get_json(router.clone(), "/ontology/normalize/Exosome").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"label": "exosome", "ontology_id": "GO:0070062"}));

    let (status, body) = get_json(router.clone(), "/ontology/normalize/ectosome").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_type"], "unknown_term");

    let (status, body) = get_json(router, "/ontology/synonyms").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entity"], "extracellular vesicle");
    assert_eq!(body["synonyms"][4], "exosome");
}
