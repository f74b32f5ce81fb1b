//! Parsers for the annotation table and its loosely structured cells.

pub mod fields;
pub mod table;

pub use fields::FieldError;
pub use table::{RegionRow, TableError};
