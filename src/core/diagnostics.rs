use serde::{Deserialize, Serialize};

/// Which component rejected or skipped an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// CSV row ingestion (identifier parsing, species record merge)
    Row,
    /// Bracketing-gene resolution
    Genes,
    /// Image filename classification
    Image,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Row => write!(f, "row"),
            Self::Genes => write!(f, "genes"),
            Self::Image => write!(f, "image"),
        }
    }
}

/// Reason code for a non-fatal skip/reject decision.
///
/// Malformed activity-domain and gene-distance segments are dropped with no
/// diagnostic at all; that asymmetry is deliberate and matches the data this
/// tool was built around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Row label did not match the identifier grammar
    UnrecognizedIdentifier,
    /// A second row for the same (region, species) pair replaced the first
    DuplicateSpeciesRow,
    /// Gene-distance list had no entry with a negative distance
    NoUpstreamGene,
    /// Gene-distance list had no entry with a positive distance
    NoDownstreamGene,
    /// File basename did not match the image filename grammar
    UnmatchedFilename,
    /// Image species code is not in the configured table
    UnknownSpeciesCode,
    /// Image names a region id absent from the collection
    UnknownRegionReference,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::UnrecognizedIdentifier => "unrecognized identifier",
            Self::DuplicateSpeciesRow => "duplicate species row",
            Self::NoUpstreamGene => "no upstream gene",
            Self::NoDownstreamGene => "no downstream gene",
            Self::UnmatchedFilename => "unmatched filename",
            Self::UnknownSpeciesCode => "unknown species code",
            Self::UnknownRegionReference => "unknown region reference",
        };
        write!(f, "{s}")
    }
}

/// One structured skip/reject record.
///
/// Every non-fatal rejection across ingestion is observable as one of these,
/// so tests and alternate front ends can assert on them rather than scraping
/// console output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub stage: Stage,
    pub reason: SkipReason,
    /// The offending raw value: the row label, gene list, or file path
    pub raw: String,
}

impl Diagnostic {
    pub fn new(stage: Stage, reason: SkipReason, raw: impl Into<String>) -> Self {
        Self {
            stage,
            reason,
            raw: raw.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.stage, self.reason, self.raw)
    }
}
