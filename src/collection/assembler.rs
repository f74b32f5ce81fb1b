//! The composition root: CSV rows plus discovered image paths in, a
//! validated region collection plus diagnostics out.
//!
//! Per-row and per-file problems never abort an assembly; the only fatal
//! conditions are an unreadable record source, an unenumerable image
//! directory, or a structurally unusable table.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::core::config::SpeciesCodeTable;
use crate::core::diagnostics::Diagnostic;
use crate::imaging::ImageClassifier;
use crate::parsing::table::{self, RegionRow, TableError};
use crate::utils::walk;

use super::builder::RegionCollectionBuilder;
use super::store::RegionCollection;

#[derive(Error, Debug)]
pub enum AssembleError {
    #[error("cannot read {path}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    InvalidTable(#[from] TableError),
}

/// Knobs for an assembly run.
#[derive(Debug, Clone, Default)]
pub struct AssembleOptions {
    /// Species-code table injected into the image classifier
    pub species_codes: SpeciesCodeTable,

    /// Also record non-conforming filenames as diagnostics; they are
    /// skipped silently otherwise
    pub report_unmatched: bool,
}

/// The result of a run: the completed collection and every skip/reject
/// decision made along the way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assembly {
    pub regions: RegionCollection,
    pub diagnostics: Vec<Diagnostic>,
}

/// Assemble from already-read rows and an already-discovered path list.
///
/// Rows are folded strictly in slice order, then paths in slice order, so
/// identical inputs always produce an identical assembly. Callers that want
/// deterministic image last-write-wins should hand in a sorted path list
/// (see [`crate::utils::walk::discover_images`]).
#[must_use]
pub fn assemble(rows: &[RegionRow], paths: &[PathBuf], options: &AssembleOptions) -> Assembly {
    let classifier = ImageClassifier::new(options.species_codes.clone());
    let mut builder = RegionCollectionBuilder::new(classifier, options.report_unmatched);

    for row in rows {
        builder.fold_row(row);
    }
    for path in paths {
        builder.attach_image(path);
    }

    let (regions, diagnostics) = builder.finish();
    info!(
        regions = regions.len(),
        diagnostics = diagnostics.len(),
        "assembly complete"
    );
    Assembly {
        regions,
        diagnostics,
    }
}

/// Assemble from annotation-table CSV text and a discovered path list.
///
/// # Errors
///
/// Returns `AssembleError::InvalidTable` if the CSV structure is unusable,
/// including a header missing any required column.
pub fn assemble_text(
    csv_text: &str,
    paths: &[PathBuf],
    options: &AssembleOptions,
) -> Result<Assembly, AssembleError> {
    let rows = table::read_table_text(csv_text)?;
    Ok(assemble(&rows, paths, options))
}

/// Assemble from an annotation-table file and a recursively scanned image
/// directory.
///
/// # Errors
///
/// Returns `AssembleError::SourceUnreadable` if the CSV file cannot be read
/// or the image directory cannot be enumerated, and
/// `AssembleError::InvalidTable` for structurally unusable CSV.
pub fn assemble_files(
    csv_path: &Path,
    image_dir: &Path,
    options: &AssembleOptions,
) -> Result<Assembly, AssembleError> {
    let csv_text =
        std::fs::read_to_string(csv_path).map_err(|source| AssembleError::SourceUnreadable {
            path: csv_path.to_path_buf(),
            source,
        })?;

    let paths = walk::discover_images(image_dir).map_err(|source| {
        AssembleError::SourceUnreadable {
            path: image_dir.to_path_buf(),
            source,
        }
    })?;

    assemble_text(&csv_text, &paths, options)
}
