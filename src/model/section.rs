//! Sections and their headers.

use super::line::{line_ranges, Line};
use super::{Attendance, Paragraph, Vote};
use serde::Serialize;
use std::fmt;

/// Handle of a section inside its [`Document`](super::Document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SectionId(pub(crate) usize);

impl SectionId {
    /// Position of the section in the document's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A section of the proceedings: a header followed by content and nested sections.
///
/// Sections live in the document's arena. `parent` and `sub_sections` are
/// handles into that arena, never owning pointers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// This section's handle
    pub id: SectionId,

    /// Enclosing section, `None` for top-level sections
    pub parent: Option<SectionId>,

    /// Section header
    pub header: Option<Header>,

    /// Paragraphs in order
    pub paragraphs: Vec<Paragraph>,

    /// Divisions in order
    pub votes: Vec<Vote>,

    /// Nested sections in order
    pub sub_sections: Vec<SectionId>,

    /// Attendance roll
    pub attendance: Option<Attendance>,
}

impl Section {
    pub(crate) fn new(id: SectionId, parent: Option<SectionId>) -> Self {
        Self {
            id,
            parent,
            header: None,
            paragraphs: Vec::new(),
            votes: Vec::new(),
            sub_sections: Vec::new(),
            attendance: None,
        }
    }

    /// Check if this is a top-level section.
    pub fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }

    /// Check if the header reads "ATTENDANCE" (ignoring case).
    pub fn is_attendance(&self) -> bool {
        self.header
            .as_ref()
            .is_some_and(|h| h.normalised_no_whitespace().to_lowercase() == "attendance")
    }

    /// The header text, or an empty string when there is no header.
    pub fn title(&self) -> String {
        self.header
            .as_ref()
            .map(Header::normalised_no_whitespace)
            .unwrap_or_default()
    }

    /// Check if the section holds no content of its own.
    pub fn is_empty(&self) -> bool {
        self.header.is_none()
            && self.paragraphs.is_empty()
            && self.votes.is_empty()
            && self.sub_sections.is_empty()
            && self.attendance.is_none()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.header {
            Some(header) => write!(f, "{}", header)?,
            None => write!(f, "(no header)")?,
        }
        write!(
            f,
            " with {} paras, {} votes, and {} sections",
            self.paragraphs.len(),
            self.votes.len(),
            self.sub_sections.len()
        )
    }
}

/// The heading lines of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    /// Owning section
    #[serde(skip)]
    pub section: SectionId,

    /// Header lines
    pub lines: Vec<Line>,
}

impl Header {
    /// Create an empty header for a section.
    pub fn new(section: SectionId) -> Self {
        Self {
            section,
            lines: Vec::new(),
        }
    }

    /// Header lines joined by single spaces.
    pub fn normalised(&self) -> String {
        self.lines
            .iter()
            .map(Line::normalised)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Trimmed header lines joined by single spaces.
    pub fn normalised_no_whitespace(&self) -> String {
        self.lines
            .iter()
            .map(Line::normalised_no_whitespace)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            line_ranges(&self.lines),
            self.normalised_no_whitespace()
        )
    }
}
