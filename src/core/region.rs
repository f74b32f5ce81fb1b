use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::core::types::{ActivityDomain, BracketedGenes, RegionId};

/// One genomic element identified by a numeric id, aggregating data across
/// species.
///
/// Regions are created exactly once per distinct id during ingestion, mutated
/// only additively (new species records and images, never retractions), and
/// are immutable once ingestion completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Canonical numeric identifier
    pub id: RegionId,

    /// Original textual label as first encountered (e.g. `2xHAR.123`)
    pub display_name: String,

    /// Cross-references to other regions, in source order. `None` marks an
    /// alias segment that did not parse as an identifier; dangling ids are
    /// representable and left to consumers to resolve.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<Option<RegionId>>,

    /// Verbatim human-chimp difference description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub species_difference: String,

    /// Nearest upstream/downstream gene pair; first successful resolution
    /// wins, later rows never overwrite it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bracketed_genes: Option<BracketedGenes>,

    /// Per-species annotation sets, keyed by lower-cased species name
    pub species_data: BTreeMap<String, SpeciesRecord>,
}

impl Region {
    #[must_use]
    pub fn new(id: RegionId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            aliases: Vec::new(),
            species_difference: String::new(),
            bracketed_genes: None,
            species_data: BTreeMap::new(),
        }
    }

    /// Aliases that parsed to an identifier, with null placeholders dropped
    pub fn resolved_aliases(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.aliases.iter().filter_map(|a| *a)
    }

    /// Total number of images attached across all species
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.species_data.values().map(|s| s.images.len()).sum()
    }
}

/// Per-species annotation set for a region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    /// Verbatim coordinate string (hg19 or panTro4); not parsed further
    pub genome_coords: String,

    /// Domains with reproducible activity, in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consistent_activity_domains: Vec<ActivityDomain>,

    /// Domains with suggestive-only activity, in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestive_activity_domains: Vec<ActivityDomain>,

    /// Verbatim expression description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub expression: String,

    /// Developmental stage; only present in the extended table variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,

    /// Discovered image paths keyed by sequence number. A later-ingested
    /// path for the same number overwrites the earlier one.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub images: BTreeMap<u32, PathBuf>,
}
