//! Model types for Hansard content.
//!
//! Two views of the same input live here. The physical view is a [`File`]
//! of [`Page`]s holding [`Line`]s, exactly as the reader found them. The
//! logical view is a [`Document`] of sections, headers, paragraphs,
//! divisions and the attendance roll, built by the extractor. Logical blocks
//! hold copies of the physical lines they were recovered from.

mod document;
mod file;
mod line;
mod page;
mod paragraph;
mod person;
mod preface;
mod section;
mod structure;
mod vote;

pub use document::Document;
pub use file::File;
pub use line::{line_ranges, Line, PAGE_BREAK};
pub use page::Page;
pub use paragraph::{Attendance, Paragraph};
pub use person::Person;
pub use preface::{Preface, TableOfContents};
pub use section::{Header, Section, SectionId};
pub use structure::{SectionStructure, VoteStructure};
pub use vote::{Outcome, Response, Vote, VotePhase, DIVISION_MARKER, QUESTION_PUT_MARKER};
