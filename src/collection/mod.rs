//! Region collection construction: the fold-style builder, the immutable
//! store, and the assembler composition root.

pub mod assembler;
pub mod builder;
pub mod store;

pub use assembler::{assemble, assemble_files, assemble_text, AssembleError, AssembleOptions, Assembly};
pub use builder::RegionCollectionBuilder;
pub use store::RegionCollection;
