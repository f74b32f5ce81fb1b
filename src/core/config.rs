//! Injectable configuration tables.
//!
//! The species-code and genome-browser tables were module-level constants in
//! earlier tooling around this data; here they are explicit values handed to
//! the components that need them, so tests and alternate deployments can
//! substitute their own mappings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maps the two-letter species code embedded in image filenames (e.g. `hg`)
/// to the canonical species key used in the annotation table (e.g. `human`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesCodeTable {
    codes: BTreeMap<String, String>,
}

impl SpeciesCodeTable {
    #[must_use]
    pub fn new(codes: BTreeMap<String, String>) -> Self {
        Self { codes }
    }

    /// Look up the canonical species key for a filename code
    #[must_use]
    pub fn species_for(&self, code: &str) -> Option<&str> {
        self.codes.get(code).map(String::as_str)
    }
}

impl Default for SpeciesCodeTable {
    fn default() -> Self {
        let mut codes = BTreeMap::new();
        codes.insert("hg".to_string(), "human".to_string());
        codes.insert("pt".to_string(), "chimp".to_string());
        Self { codes }
    }
}

/// Maps canonical species keys to an external genome-browser URL prefix;
/// appending a coordinate string yields a browsable link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenomeUrlTable {
    prefixes: BTreeMap<String, String>,
}

impl GenomeUrlTable {
    #[must_use]
    pub fn new(prefixes: BTreeMap<String, String>) -> Self {
        Self { prefixes }
    }

    #[must_use]
    pub fn prefix_for(&self, species: &str) -> Option<&str> {
        self.prefixes.get(species).map(String::as_str)
    }

    /// Full browser URL for a species/coordinate pair, if the species is known
    #[must_use]
    pub fn url_for(&self, species: &str, coords: &str) -> Option<String> {
        self.prefix_for(species).map(|p| format!("{p}{coords}"))
    }
}

impl Default for GenomeUrlTable {
    fn default() -> Self {
        let mut prefixes = BTreeMap::new();
        prefixes.insert(
            "human".to_string(),
            "http://genome.ucsc.edu/cgi-bin/hgTracks?org=Human&db=hg19&position=".to_string(),
        );
        prefixes.insert(
            "chimp".to_string(),
            "http://genome.ucsc.edu/cgi-bin/hgTracks?org=Chimp&db=panTro4&position=".to_string(),
        );
        Self { prefixes }
    }
}
