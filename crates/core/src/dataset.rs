//! Unified EV metadata table
//!
//! The unified table is a Parquet file with one row per (sample, protein)
//! observation. Only the columns the harmonization step looks at are kept in
//! memory; every column may be missing from a given export, so presence is
//! tracked separately from values.

use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

use arrow::array::{ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ProjectionMask;

use crate::error::Result;

/// Columns of the unified table that the service reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    SourceDatabase,
    SampleDescription,
    ProteinAccession,
    Species,
}

impl Column {
    pub const ALL: [Column; 4] = [
        Column::SourceDatabase,
        Column::SampleDescription,
        Column::ProteinAccession,
        Column::Species,
    ];

    /// Column name in the Parquet schema
    pub fn name(self) -> &'static str {
        match self {
            Column::SourceDatabase => "source_database",
            Column::SampleDescription => "sample_description",
            Column::ProteinAccession => "protein_accession",
            Column::Species => "species",
        }
    }
}

/// One row of the unified table. `None` is a null cell or an absent column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvRecord {
    pub source_database: Option<String>,
    pub sample_description: Option<String>,
    pub protein_accession: Option<String>,
    pub species: Option<String>,
}

impl EvRecord {
    pub fn get(&self, column: Column) -> Option<&str> {
        match column {
            Column::SourceDatabase => self.source_database.as_deref(),
            Column::SampleDescription => self.sample_description.as_deref(),
            Column::ProteinAccession => self.protein_accession.as_deref(),
            Column::Species => self.species.as_deref(),
        }
    }

    fn slot(&mut self, column: Column) -> &mut Option<String> {
        match column {
            Column::SourceDatabase => &mut self.source_database,
            Column::SampleDescription => &mut self.sample_description,
            Column::ProteinAccession => &mut self.protein_accession,
            Column::Species => &mut self.species,
        }
    }
}

/// In-memory view of the unified table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    columns: BTreeSet<String>,
    records: Vec<EvRecord>,
}

impl Dataset {
    /// Build a dataset from the names of the columns present and its rows
    pub fn new<I, S>(columns: I, records: Vec<EvRecord>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            records,
        }
    }

    /// Read the recognised columns of a Parquet file.
    ///
    /// All column names of the file schema are recorded, but only the
    /// [`Column`] values are decoded. Non-string columns are cast to UTF-8
    /// text.
    pub fn read_parquet(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;

        let columns: BTreeSet<String> = builder
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect();

        let schema_descr = builder.parquet_schema();
        let roots: Vec<usize> = schema_descr
            .root_schema()
            .get_fields()
            .iter()
            .enumerate()
            .filter(|(_, field)| Column::ALL.iter().any(|c| c.name() == field.name()))
            .map(|(idx, _)| idx)
            .collect();
        let mask = ProjectionMask::roots(schema_descr, roots);

        let reader = builder.with_projection(mask).build()?;
        let mut records = Vec::new();

        for batch in reader {
            let batch = batch?;

            let mut selected: Vec<(Column, ArrayRef)> = Vec::new();
            for column in Column::ALL {
                if let Some(array) = batch.column_by_name(column.name()) {
                    selected.push((column, cast(array, &DataType::Utf8)?));
                }
            }

            let offset = records.len();
            records.resize(offset + batch.num_rows(), EvRecord::default());

            for (column, array) in &selected {
                let values = array.as_string::<i32>();
                for (row, value) in values.iter().enumerate() {
                    *records[offset + row].slot(*column) = value.map(str::to_string);
                }
            }
        }

        tracing::debug!(
            path = %path.display(),
            rows = records.len(),
            columns = columns.len(),
            "Loaded Parquet dataset"
        );

        Ok(Self { columns, records })
    }

    pub fn has_column(&self, column: Column) -> bool {
        self.columns.contains(column.name())
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    pub fn records(&self) -> &[EvRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keep only the rows for which `keep` returns true
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&EvRecord) -> bool,
    {
        self.records.retain(keep);
    }

    /// Values of a column, nulls included
    pub fn values(&self, column: Column) -> impl Iterator<Item = Option<&str>> {
        self.records.iter().map(move |r| r.get(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(db: Option<&str>, species: Option<&str>) -> EvRecord {
        EvRecord {
            source_database: db.map(String::from),
            species: species.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_column_presence() {
        let dataset = Dataset::new(["source_database", "extra"], vec![]);
        assert!(dataset.has_column(Column::SourceDatabase));
        assert!(!dataset.has_column(Column::Species));
        assert_eq!(
            dataset.column_names().collect::<Vec<_>>(),
            vec!["extra", "source_database"]
        );
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_retain_and_values() {
        let mut dataset = Dataset::new(
            ["source_database", "species"],
            vec![
                record(Some("ExoCarta"), Some("Homo sapiens")),
                record(None, Some("Mus musculus")),
                record(Some("UniProt"), None),
            ],
        );

        dataset.retain(|r| r.source_database.is_some());
        assert_eq!(dataset.len(), 2);
        assert_eq!(
            dataset.values(Column::Species).collect::<Vec<_>>(),
            vec![Some("Homo sapiens"), None]
        );
    }
}
