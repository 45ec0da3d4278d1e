//! EV ontology tables and term normalization
//!
//! A deliberately small vocabulary: the synonym list used to recognise
//! extracellular-vesicle samples in free-text descriptions, the Gene
//! Ontology ids for the entities we report on, and a label normalizer
//! mapping common EV terms onto their GO cellular-component ids.

use serde::{Deserialize, Serialize};

/// Canonical entity name for extracellular vesicles
pub const EXTRACELLULAR_VESICLE: &str = "extracellular vesicle";

/// Synonyms matched against sample descriptions for [`EXTRACELLULAR_VESICLE`]
pub const EV_SYNONYMS: &[&str] = &[
    "extracellular vesicle",
    "extracellular vesicles",
    "ev",
    "evs",
    "exosome",
    "exosomes",
    "small extracellular vesicle",
    "sev",
    "sevs",
];

const SYNONYMS: &[(&str, &[&str])] = &[(EXTRACELLULAR_VESICLE, EV_SYNONYMS)];

const GO_TERMS: &[(&str, &str)] = &[(EXTRACELLULAR_VESICLE, "GO:1903561")];

/// (lookup key, label, ontology id)
const EV_TERMS: &[(&str, &str, &str)] = &[
    ("exosome", "exosome", "GO:0070062"),
    ("extracellular vesicle", "extracellular vesicle", "GO:1903561"),
    ("microvesicle", "microvesicle", "GO:1903561"),
];

/// A normalized ontology term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyTerm {
    /// Preferred label
    pub label: String,
    /// Ontology identifier, e.g. `GO:0070062`
    pub ontology_id: String,
}

/// Synonym list for an entity, if the entity is known
pub fn synonyms_for(entity: &str) -> Option<&'static [&'static str]> {
    SYNONYMS
        .iter()
        .find(|(name, _)| *name == entity)
        .map(|(_, synonyms)| *synonyms)
}

/// GO term id for an entity, if the entity is known
pub fn go_term_for(entity: &str) -> Option<&'static str> {
    GO_TERMS
        .iter()
        .find(|(name, _)| *name == entity)
        .map(|(_, id)| *id)
}

/// Normalize a free-text EV term to its ontology entry.
///
/// Lookup is case-insensitive and ignores surrounding whitespace. Empty input
/// and unknown terms yield `None`.
pub fn normalize_term(term: &str) -> Option<OntologyTerm> {
    let key = term.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }
    EV_TERMS
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, label, id)| OntologyTerm {
            label: (*label).to_string(),
            ontology_id: (*id).to_string(),
        })
}
