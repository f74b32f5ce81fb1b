//! Cell-level field parsers.
//!
//! Each parser turns one raw CSV cell string into typed values. The parsers
//! are tolerant by contract: an unrecognized identifier is a skip-the-row
//! signal for the caller, and malformed list segments are dropped without
//! any diagnostic (only well-formed segments contribute).

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::core::types::{ActivityDomain, GeneDistance, RegionId};

/// Identifier labels: optional `2x` prefix, literal `HAR`, optional dot,
/// digits. Anchored at the start; trailing text is ignored.
static REGION_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:2[xX])?HAR\.?(\d+)").unwrap());

/// Activity-domain segments: `<name> (<digits>)`
static ACTIVITY_DOMAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*\S)\s*\((\d+)\)$").unwrap());

/// Gene-distance segments: `<gene> (<signed integer>)`
static GENE_DISTANCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^\s(][^(]*?)\s*\((-?\d+)\)$").unwrap());

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FieldError {
    #[error("unrecognized region identifier: '{0}'")]
    UnrecognizedIdentifier(String),
}

/// Parse a region label like `HAR123`, `HAR.123`, or `2xHAR.123` into its
/// numeric identifier.
///
/// # Errors
///
/// Returns `FieldError::UnrecognizedIdentifier` if the label does not match
/// the identifier grammar. Callers treat this as "skip the row".
pub fn parse_region_id(label: &str) -> Result<RegionId, FieldError> {
    let captures = REGION_ID_RE
        .captures(label)
        .ok_or_else(|| FieldError::UnrecognizedIdentifier(label.to_string()))?;
    let digits = &captures[1];
    let id: u32 = digits
        .parse()
        .map_err(|_| FieldError::UnrecognizedIdentifier(label.to_string()))?;
    Ok(RegionId(id))
}

/// Parse a semicolon-separated activity-domain cell.
///
/// The empty string and the literal `none` yield an empty list. Segments
/// that do not match `<name> (<count>)` are silently dropped; order of the
/// surviving segments is preserved.
#[must_use]
pub fn parse_activity_domains(cell: &str) -> Vec<ActivityDomain> {
    if cell.is_empty() || cell == "none" {
        return Vec::new();
    }
    cell.split(';')
        .filter_map(|segment| {
            let segment = segment.trim();
            let captures = ACTIVITY_DOMAIN_RE.captures(segment)?;
            let count: u32 = captures[2].parse().ok()?;
            Some(ActivityDomain::new(&captures[1], count))
        })
        .collect()
}

/// Parse a comma-separated gene-distance cell.
///
/// The empty string and the literal `None` yield an empty list. Segments
/// that do not match `<gene> (<signed distance>)` are silently dropped.
#[must_use]
pub fn parse_gene_distances(cell: &str) -> Vec<GeneDistance> {
    if cell.is_empty() || cell == "None" {
        return Vec::new();
    }
    cell.split(',')
        .filter_map(|segment| {
            let segment = segment.trim();
            let captures = GENE_DISTANCE_RE.captures(segment)?;
            let distance: i64 = captures[2].parse().ok()?;
            Some(GeneDistance::new(captures[1].trim(), distance))
        })
        .collect()
}

/// Parse a semicolon-separated list of identifier labels.
///
/// A segment that fails the identifier grammar yields a `None` placeholder
/// in its position rather than aborting the list; callers may filter.
#[must_use]
pub fn parse_aliases(cell: &str) -> Vec<Option<RegionId>> {
    if cell.is_empty() {
        return Vec::new();
    }
    cell.split(';')
        .map(|segment| parse_region_id(segment.trim()).ok())
        .collect()
}
