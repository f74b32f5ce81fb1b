//! Fold-style construction of the region collection.
//!
//! The builder owns the in-progress collection and exposes only append
//! operations: rows fold in through [`RegionCollectionBuilder::fold_row`],
//! discovered paths through [`RegionCollectionBuilder::attach_image`].
//! Every skip/reject decision lands in the diagnostics list; nothing here
//! is fatal.

use std::path::Path;
use tracing::{debug, warn};

use crate::core::diagnostics::{Diagnostic, SkipReason, Stage};
use crate::core::region::{Region, SpeciesRecord};
use crate::genes::{resolve_bracketed, BracketError};
use crate::imaging::{ImageClassifier, Rejection};
use crate::parsing::fields::{
    parse_activity_domains, parse_aliases, parse_gene_distances, parse_region_id,
};
use crate::parsing::table::RegionRow;

use super::store::RegionCollection;

pub struct RegionCollectionBuilder {
    collection: RegionCollection,
    diagnostics: Vec<Diagnostic>,
    classifier: ImageClassifier,
    /// Record unmatched filenames as diagnostics instead of skipping them
    /// silently
    report_unmatched: bool,
}

impl RegionCollectionBuilder {
    #[must_use]
    pub fn new(classifier: ImageClassifier, report_unmatched: bool) -> Self {
        Self {
            collection: RegionCollection::default(),
            diagnostics: Vec::new(),
            classifier,
            report_unmatched,
        }
    }

    /// Fold one annotation row into the collection.
    ///
    /// Rows with an empty `ID` cell are blank-line padding and are skipped
    /// without a diagnostic. Rows whose label fails the identifier grammar
    /// are skipped with a diagnostic naming the raw label.
    pub fn fold_row(&mut self, row: &RegionRow) {
        if row.id.is_empty() {
            return;
        }

        let id = match parse_region_id(&row.id) {
            Ok(id) => id,
            Err(_) => {
                warn!(label = %row.id, "skipping row with unrecognized identifier");
                self.diagnostics.push(Diagnostic::new(
                    Stage::Row,
                    SkipReason::UnrecognizedIdentifier,
                    &row.id,
                ));
                return;
            }
        };

        if !self.collection.contains(id) {
            let mut region = Region::new(id, &row.id);
            region.aliases = parse_aliases(&row.aliases);
            region.species_difference = row.species_difference.clone();
            self.collection.insert(region);
        }

        // Every kept row contributes to gene bracketing until the first row
        // that resolves; later rows never overwrite the pair.
        let region = self.collection.get_mut(id).expect("region inserted above");
        if region.bracketed_genes.is_none() {
            if let Some(cell) = row.gene_distances.as_deref() {
                let distances = parse_gene_distances(cell);
                if !distances.is_empty() {
                    match resolve_bracketed(&distances) {
                        Ok(bracketed) => region.bracketed_genes = Some(bracketed),
                        Err(err) => {
                            let reason = match err {
                                BracketError::NoUpstream => SkipReason::NoUpstreamGene,
                                BracketError::NoDownstream => SkipReason::NoDownstreamGene,
                            };
                            warn!(region = %region.display_name, %err, "genes not bracketed");
                            self.diagnostics.push(Diagnostic::new(
                                Stage::Genes,
                                reason,
                                &region.display_name,
                            ));
                        }
                    }
                }
            }
        }

        let species = row.species.to_lowercase();
        let record = SpeciesRecord {
            genome_coords: row.genome_coords.clone(),
            consistent_activity_domains: parse_activity_domains(&row.consistent_activity_domains),
            suggestive_activity_domains: parse_activity_domains(&row.suggestive_activity_domains),
            expression: row.expression.clone(),
            stage: row.stage.clone().filter(|s| !s.is_empty()),
            images: std::collections::BTreeMap::new(),
        };

        // Last row wins for a duplicate (id, species) pair; the replacement
        // is recorded so callers can decide whether to treat it as an error.
        if region.species_data.insert(species.clone(), record).is_some() {
            warn!(region = %region.display_name, %species, "replacing duplicate species row");
            self.diagnostics.push(Diagnostic::new(
                Stage::Row,
                SkipReason::DuplicateSpeciesRow,
                format!("{} / {species}", region.display_name),
            ));
        }
    }

    /// Classify one discovered path and attach it to the matching species
    /// record. Never creates a region.
    pub fn attach_image(&mut self, path: &Path) {
        let image = match self.classifier.classify(path) {
            Ok(image) => image,
            Err(Rejection::Unmatched) => {
                if self.report_unmatched {
                    self.diagnostics.push(Diagnostic::new(
                        Stage::Image,
                        SkipReason::UnmatchedFilename,
                        path.display().to_string(),
                    ));
                }
                return;
            }
            Err(Rejection::UnknownSpeciesCode(code)) => {
                warn!(%code, path = %path.display(), "skipping image with unknown species code");
                self.diagnostics.push(Diagnostic::new(
                    Stage::Image,
                    SkipReason::UnknownSpeciesCode,
                    path.display().to_string(),
                ));
                return;
            }
        };

        let Some(region) = self.collection.get_mut(image.region) else {
            warn!(region = %image.region, path = %path.display(), "skipping image for unknown region");
            self.diagnostics.push(Diagnostic::new(
                Stage::Image,
                SkipReason::UnknownRegionReference,
                path.display().to_string(),
            ));
            return;
        };

        let Some(record) = region.species_data.get_mut(&image.species) else {
            // Region exists but has no row for this species; the image has
            // nowhere to hang, so treat it like an unknown reference.
            warn!(
                region = %image.region,
                species = %image.species,
                path = %path.display(),
                "skipping image for species absent from region"
            );
            self.diagnostics.push(Diagnostic::new(
                Stage::Image,
                SkipReason::UnknownRegionReference,
                path.display().to_string(),
            ));
            return;
        };

        debug!(
            region = %image.region,
            species = %image.species,
            num = image.sequence_number,
            "attached image"
        );
        record
            .images
            .insert(image.sequence_number, path.to_path_buf());
    }

    /// Finish ingestion and hand out the immutable collection and the
    /// accumulated diagnostics.
    #[must_use]
    pub fn finish(self) -> (RegionCollection, Vec<Diagnostic>) {
        (self.collection, self.diagnostics)
    }
}
