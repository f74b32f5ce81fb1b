//! CSV annotation-table reading.
//!
//! The table is a header-bearing CSV with one row per (region, species)
//! pair. Column values are handed on as raw strings; the cell-level grammar
//! lives in [`crate::parsing::fields`].

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Column names every annotation table variant must carry. The `Stage` and
/// gene-distance columns exist only in the extended variant and are not
/// checked here.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "ID",
    "Aliases",
    "Human-Chimp Difference",
    "Species",
    "Coordinates (hg19 or panTro4)",
    "Consistent Activity Domains (# pos)",
    "Suggestive Activity Domains (# pos)",
    "Expression",
];

#[derive(Error, Debug)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid annotation table: {0}")]
    InvalidTable(#[from] csv::Error),

    #[error("annotation table is missing required column(s): {0}")]
    MissingColumns(String),
}

/// One raw row of the annotation table.
///
/// The `Stage` and gene-distance columns only exist in the extended table
/// variant; they deserialize to `None` when the column is absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegionRow {
    #[serde(rename = "ID", default)]
    pub id: String,

    #[serde(rename = "Aliases", default)]
    pub aliases: String,

    #[serde(rename = "Human-Chimp Difference", default)]
    pub species_difference: String,

    #[serde(rename = "Species", default)]
    pub species: String,

    #[serde(rename = "Coordinates (hg19 or panTro4)", default)]
    pub genome_coords: String,

    #[serde(rename = "Consistent Activity Domains (# pos)", default)]
    pub consistent_activity_domains: String,

    #[serde(rename = "Suggestive Activity Domains (# pos)", default)]
    pub suggestive_activity_domains: String,

    #[serde(rename = "Expression", default)]
    pub expression: String,

    #[serde(rename = "Stage", default)]
    pub stage: Option<String>,

    #[serde(rename = "Genes within 1 Mb (distance to TSS)", default)]
    pub gene_distances: Option<String>,
}

/// Read all rows from an annotation table file, in source order.
///
/// # Errors
///
/// Returns `TableError::Io` if the file cannot be read,
/// `TableError::MissingColumns` if a required column is absent, or
/// `TableError::InvalidTable` if the CSV structure is otherwise unusable.
/// Per-row content problems are not errors at this layer.
pub fn read_table_file(path: &Path) -> Result<Vec<RegionRow>, TableError> {
    let text = std::fs::read_to_string(path)?;
    read_table_text(&text)
}

/// Read all rows from annotation-table CSV text, in source order.
///
/// # Errors
///
/// Returns `TableError::MissingColumns` if any of [`REQUIRED_COLUMNS`] is
/// absent from the header, or `TableError::InvalidTable` if the CSV
/// structure is otherwise unusable.
pub fn read_table_text(text: &str) -> Result<Vec<RegionRow>, TableError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(text.as_bytes());

    // Blank-padding rows deserialize to harmless empty fields, so a table
    // missing a required column would otherwise read as cleanly empty;
    // check the header up front instead.
    let headers = reader.headers()?;
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|required| !headers.iter().any(|h| h == *required))
        .collect();
    if !missing.is_empty() {
        return Err(TableError::MissingColumns(missing.join(", ")));
    }

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: RegionRow = record?;
        rows.push(row);
    }
    Ok(rows)
}
