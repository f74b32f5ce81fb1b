//! # har-atlas
//!
//! A library for reconciling HAR (human accelerated region) annotation
//! tables with embryo microscopy image sets.
//!
//! The annotation source is a loosely structured CSV with one row per
//! (region, species) pair: textual region labels, semicolon-separated alias
//! and activity-domain lists, and an optional gene-distance column. Image
//! files on disk encode their target region, species, and sequence number
//! in the filename. `har-atlas` parses the cells into typed sub-records,
//! merges rows into one [`Region`] per numeric identifier, resolves the
//! nearest bracketing genes, and attaches classified images onto the right
//! per-species record — collecting a structured diagnostic for every input
//! it has to skip.
//!
//! ## Example
//!
//! ```rust,no_run
//! use har_atlas::collection::{assemble_files, AssembleOptions};
//! use std::path::Path;
//!
//! let assembly = assemble_files(
//!     Path::new("annotations.csv"),
//!     Path::new("scans/"),
//!     &AssembleOptions::default(),
//! )
//! .unwrap();
//!
//! for region in assembly.regions.iter() {
//!     println!("{}: {} images", region.display_name, region.image_count());
//! }
//! for skipped in &assembly.diagnostics {
//!     eprintln!("{skipped}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: region/species data model, diagnostics, configuration tables
//! - [`parsing`]: CSV table reading and cell-level field parsers
//! - [`genes`]: nearest-gene bracketing
//! - [`imaging`]: image filename classification
//! - [`collection`]: the fold-style builder and the assembler composition root
//! - [`cli`]: command-line interface implementation

pub mod cli;
pub mod collection;
pub mod core;
pub mod genes;
pub mod imaging;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::collection::store::RegionCollection;
pub use crate::collection::{assemble, assemble_files, assemble_text, AssembleOptions, Assembly};
pub use crate::core::diagnostics::{Diagnostic, SkipReason, Stage};
pub use crate::core::region::{Region, SpeciesRecord};
pub use crate::core::types::*;
pub use crate::imaging::classifier::ImageClassifier;
