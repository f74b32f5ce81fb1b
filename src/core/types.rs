use serde::{Deserialize, Serialize};

/// Canonical numeric identifier for a region.
///
/// Two textual labels that normalize to the same integer (e.g. `HAR123` and
/// `2xHAR.123`) refer to the same region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionId(pub u32);

impl RegionId {
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named anatomical/tissue region with its positive observation count,
/// as parsed from an activity-domain cell like `Forebrain (3)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDomain {
    pub name: String,
    pub positive_count: u32,
}

impl ActivityDomain {
    pub fn new(name: impl Into<String>, positive_count: u32) -> Self {
        Self {
            name: name.into(),
            positive_count,
        }
    }
}

/// One entry of a gene-distance cell like `NPAS3 (-48000)`: a gene name and
/// its signed distance to the region (negative = upstream of the region).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneDistance {
    pub gene: String,
    pub distance: i64,
}

impl GeneDistance {
    pub fn new(gene: impl Into<String>, distance: i64) -> Self {
        Self {
            gene: gene.into(),
            distance,
        }
    }
}

/// The nearest annotated gene on each side of a region.
///
/// Never partially set: either both genes are known or the region carries no
/// bracketing at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketedGenes {
    pub upstream: String,
    pub downstream: String,
}

impl std::fmt::Display for BracketedGenes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} .. {}", self.upstream, self.downstream)
    }
}
