//! Logical structure recovery.
//!
//! Turns the body lines of a read [`File`](crate::model::File) into a
//! [`Document`](crate::model::Document) tree.

mod extractor;
mod options;
pub mod predicates;

pub use extractor::{extract, extract_with_options, BlockKind, Extractor};
pub use options::{ParseOptions, DEFAULT_TRANSITION_LIMIT};
