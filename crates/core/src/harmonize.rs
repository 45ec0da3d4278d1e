//! Ontology-aware harmonization
//!
//! Restricts the unified table to EV-specific source databases, keeps the
//! samples whose description mentions an EV synonym, and summarizes what is
//! left. Every step is a no-op when the column it needs is missing, so a
//! partial export still yields a (less filtered) summary instead of an error.

use std::collections::{BTreeMap, BTreeSet};

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::dataset::{Column, Dataset};
use crate::error::Result;
use crate::ontology::{go_term_for, EV_SYNONYMS, EXTRACELLULAR_VESICLE};

/// Source databases that curate EV-specific proteomics
pub const EV_DATABASES: &[&str] = &["ExoCarta", "Vesiclepedia"];

/// Keep rows whose `source_database` is one of `allowed` (exact match).
///
/// Rows with a null database are dropped. A dataset without the column is
/// returned unchanged.
pub fn filter_source_databases(mut dataset: Dataset, allowed: &[&str]) -> Dataset {
    if !dataset.has_column(Column::SourceDatabase) {
        tracing::debug!("source_database column missing, skipping database filter");
        return dataset;
    }
    dataset.retain(|r| {
        r.source_database
            .as_deref()
            .is_some_and(|db| allowed.iter().any(|a| *a == db))
    });
    dataset
}

/// Case-insensitive substring matcher over a list of synonyms
#[derive(Debug, Clone)]
pub struct SynonymMatcher {
    pattern: Regex,
}

impl SynonymMatcher {
    /// Compile a matcher. Terms are matched literally, anywhere in the text.
    pub fn new(terms: &[&str]) -> Result<Self> {
        let alternation = terms
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build()?;
        Ok(Self { pattern })
    }

    /// Matcher for the extracellular-vesicle synonym list
    pub fn extracellular_vesicle() -> Result<Self> {
        Self::new(EV_SYNONYMS)
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Keep rows whose `column` mentions an EV synonym.
///
/// Null cells never match. If the column is absent the dataset is returned
/// unchanged.
pub fn filter_by_ev_synonyms(mut dataset: Dataset, column: Column) -> Result<Dataset> {
    if !dataset.has_column(column) {
        tracing::debug!(
            column = column.name(),
            "Synonym column missing, skipping synonym filter"
        );
        return Ok(dataset);
    }
    let matcher = SynonymMatcher::extracellular_vesicle()?;
    dataset.retain(|r| r.get(column).is_some_and(|text| matcher.is_match(text)));
    Ok(dataset)
}

/// Describes which ontology concept a summary was computed for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryInfo {
    pub entity: String,
    pub ontology: Vec<String>,
    pub synonyms_used: Vec<String>,
}

impl QueryInfo {
    pub fn extracellular_vesicle() -> Self {
        Self {
            entity: EXTRACELLULAR_VESICLE.to_string(),
            ontology: go_term_for(EXTRACELLULAR_VESICLE)
                .into_iter()
                .map(String::from)
                .collect(),
            synonyms_used: EV_SYNONYMS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Summary statistics over the harmonized rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResults {
    pub total_records: usize,
    /// Distinct non-null accessions; `None` when the column is absent
    pub unique_proteins: Option<usize>,
    pub databases_covered: Vec<String>,
    pub species_distribution: BTreeMap<String, usize>,
}

impl SummaryResults {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let unique_proteins = dataset.has_column(Column::ProteinAccession).then(|| {
            dataset
                .values(Column::ProteinAccession)
                .flatten()
                .collect::<BTreeSet<_>>()
                .len()
        });

        let databases_covered = dataset
            .values(Column::SourceDatabase)
            .flatten()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(String::from)
            .collect();

        let mut species_distribution = BTreeMap::new();
        for species in dataset.values(Column::Species).flatten() {
            *species_distribution.entry(species.to_string()).or_insert(0) += 1;
        }

        Self {
            total_records: dataset.len(),
            unique_proteins,
            databases_covered,
            species_distribution,
        }
    }
}

/// Response of the JEV case study
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JevSummary {
    pub query: QueryInfo,
    pub results: SummaryResults,
}

impl JevSummary {
    pub fn build(dataset: &Dataset) -> Self {
        Self {
            query: QueryInfo::extracellular_vesicle(),
            results: SummaryResults::from_dataset(dataset),
        }
    }
}

/// JEV case study: EV databases only, EV synonyms in the sample description,
/// then summarize.
pub fn case_study_jev(dataset: Dataset) -> Result<JevSummary> {
    let loaded = dataset.len();
    let dataset = filter_source_databases(dataset, EV_DATABASES);
    let after_databases = dataset.len();
    let dataset = filter_by_ev_synonyms(dataset, Column::SampleDescription)?;

    tracing::debug!(
        loaded,
        after_databases,
        after_synonyms = dataset.len(),
        "Harmonized JEV case study rows"
    );

    Ok(JevSummary::build(&dataset))
}
