//! Image discovery support: filename classification against the image
//! grammar and species-code table.

pub mod classifier;

pub use classifier::{ClassifiedImage, ImageClassifier, Rejection};
