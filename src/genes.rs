//! Gene proximity resolution.
//!
//! Derives the nearest upstream/downstream gene pair from a parsed
//! gene-distance list. A one-sided list is a reportable, non-fatal
//! condition: the caller records a diagnostic and leaves the region
//! unbracketed.

use thiserror::Error;

use crate::core::types::{BracketedGenes, GeneDistance};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    #[error("no upstream genes found")]
    NoUpstream,

    #[error("no downstream genes found")]
    NoDownstream,
}

/// Select the nearest gene on each side of the region.
///
/// Entries with a negative distance lie upstream, positive downstream;
/// a distance of exactly zero belongs to neither side. The chosen
/// upstream gene has the maximum (least negative) distance, the chosen
/// downstream gene the minimum positive distance. Distances are discarded
/// from the result.
///
/// # Errors
///
/// Returns `BracketError::NoUpstream` or `NoDownstream` when the
/// corresponding side is empty.
pub fn resolve_bracketed(distances: &[GeneDistance]) -> Result<BracketedGenes, BracketError> {
    let upstream = distances
        .iter()
        .filter(|g| g.distance < 0)
        .max_by_key(|g| g.distance)
        .ok_or(BracketError::NoUpstream)?;

    let downstream = distances
        .iter()
        .filter(|g| g.distance > 0)
        .min_by_key(|g| g.distance)
        .ok_or(BracketError::NoDownstream)?;

    Ok(BracketedGenes {
        upstream: upstream.gene.clone(),
        downstream: downstream.gene.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distances(entries: &[(&str, i64)]) -> Vec<GeneDistance> {
        entries
            .iter()
            .map(|(gene, d)| GeneDistance::new(*gene, *d))
            .collect()
    }

    #[test]
    fn test_select_closest_on_each_side() {
        let list = distances(&[("GENEA", -500_000), ("GENEB", -20_000), ("GENEC", 15_000)]);
        let bracketed = resolve_bracketed(&list).unwrap();
        assert_eq!(bracketed.upstream, "GENEB");
        assert_eq!(bracketed.downstream, "GENEC");
    }

    #[test]
    fn test_all_upstream_is_reportable() {
        let list = distances(&[("GENEA", -100), ("GENEB", -200)]);
        assert_eq!(resolve_bracketed(&list), Err(BracketError::NoDownstream));
    }

    #[test]
    fn test_all_downstream_is_reportable() {
        let list = distances(&[("GENEA", 100), ("GENEB", 200)]);
        assert_eq!(resolve_bracketed(&list), Err(BracketError::NoUpstream));
    }

    #[test]
    fn test_zero_distance_belongs_to_neither_side() {
        let list = distances(&[("OVERLAP", 0), ("GENEB", -50), ("GENEC", 70)]);
        let bracketed = resolve_bracketed(&list).unwrap();
        assert_eq!(bracketed.upstream, "GENEB");
        assert_eq!(bracketed.downstream, "GENEC");

        let only_zero = distances(&[("OVERLAP", 0)]);
        assert!(resolve_bracketed(&only_zero).is_err());
    }
}
