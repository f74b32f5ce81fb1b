//! Image filename classification.
//!
//! Discovered files are matched against a fixed basename grammar:
//! `<region id>_<2-letter species code><digits>_<sequence number>L.tif`
//! (the `L.tif` suffix is case-sensitive). Only the basename is inspected;
//! classification never creates a region.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use crate::core::config::SpeciesCodeTable;
use crate::core::types::RegionId;

static IMAGE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)_([A-Za-z]{2})\d+_(\d+)L\.tif$").unwrap());

/// A successfully classified image filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedImage {
    pub region: RegionId,
    /// Canonical species key looked up from the filename code
    pub species: String,
    pub sequence_number: u32,
}

/// Why a filename was not classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Basename does not match the filename grammar (silent by default)
    Unmatched,
    /// Grammar matched but the species code is not in the table
    UnknownSpeciesCode(String),
}

/// Matches file basenames against the image grammar, resolving species
/// codes through an injected table.
#[derive(Debug, Clone)]
pub struct ImageClassifier {
    species_codes: SpeciesCodeTable,
}

impl ImageClassifier {
    #[must_use]
    pub fn new(species_codes: SpeciesCodeTable) -> Self {
        Self { species_codes }
    }

    /// Classify one discovered path by its basename.
    ///
    /// Whether the extracted region id is known is the caller's concern;
    /// the classifier only checks the grammar and the species table.
    pub fn classify(&self, path: &Path) -> Result<ClassifiedImage, Rejection> {
        let basename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or(Rejection::Unmatched)?;

        let captures = IMAGE_NAME_RE
            .captures(basename)
            .ok_or(Rejection::Unmatched)?;

        // The digit groups are bounded by the grammar but can still overflow
        // u32 on pathological names; treat that as non-conforming.
        let region: u32 = captures[1].parse().map_err(|_| Rejection::Unmatched)?;
        let sequence_number: u32 = captures[3].parse().map_err(|_| Rejection::Unmatched)?;

        let code = &captures[2];
        let species = self
            .species_codes
            .species_for(code)
            .ok_or_else(|| Rejection::UnknownSpeciesCode(code.to_string()))?;

        Ok(ClassifiedImage {
            region: RegionId(region),
            species: species.to_string(),
            sequence_number,
        })
    }
}

impl Default for ImageClassifier {
    fn default() -> Self {
        Self::new(SpeciesCodeTable::default())
    }
}
