//! Ontology-aware harmonization of extracellular vesicle (EV) proteomics metadata
//!
//! The unified metadata table merges sample annotations from several
//! proteomics databases. This crate reads it from Parquet and answers the
//! JEV case study: which EV-specific records (ExoCarta, Vesiclepedia) describe
//! extracellular vesicles under any of their common names, and what they
//! cover.
//!
//! # Usage
//!
//! ```ignore
//! use evmeta_core::{harmonize, DatasetLocator};
//!
//! let dataset = DatasetLocator::default().load()?;
//! let summary = harmonize::case_study_jev(dataset)?;
//! println!("{}", serde_json::to_string_pretty(&summary)?);
//! ```

pub mod dataset;
pub mod error;
pub mod harmonize;
pub mod ontology;
pub mod source;

pub use dataset::{Column, Dataset, EvRecord};
pub use error::{Error, Result};
pub use harmonize::{case_study_jev, JevSummary};
pub use ontology::{normalize_term, OntologyTerm};
pub use source::DatasetLocator;
