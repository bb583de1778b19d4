//! Line-number projection of the block tree.
//!
//! Each node maps to the overall line numbers it subsumes. Empty fields are
//! left out when serialized, which keeps regression fixtures short.

use super::{Document, Line, Preface, Section, TableOfContents, Vote};
use serde::Serialize;

/// Lines covered by a section and its descendants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionStructure {
    /// Header lines
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub header: Vec<usize>,

    /// Lines of all paragraphs, flattened
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub paragraphs: Vec<usize>,

    /// One entry per division
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub votes: Vec<VoteStructure>,

    /// Nested sections
    #[serde(rename = "sections", skip_serializing_if = "Vec::is_empty")]
    pub sub_sections: Vec<SectionStructure>,

    /// Attendance lines
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attendance: Vec<usize>,
}

/// Lines covered by each part of a division.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VoteStructure {
    /// Question lines
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub question: Vec<usize>,

    /// Ayes heading and names
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub yes: Vec<usize>,

    /// Noes heading and names
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub no: Vec<usize>,

    /// Pair lines
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pair: Vec<usize>,

    /// Resolution lines
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resolution: Vec<usize>,

    /// Outcome lines
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outcome: Vec<usize>,
}

fn numbers(lines: &[Line]) -> Vec<usize> {
    lines.iter().map(Line::overall_line_number).collect()
}

impl From<&Vote> for VoteStructure {
    fn from(vote: &Vote) -> Self {
        Self {
            question: numbers(&vote.question),
            yes: numbers(&vote.yes),
            no: numbers(&vote.no),
            pair: numbers(&vote.pair),
            resolution: numbers(&vote.resolution),
            outcome: numbers(&vote.outcome),
        }
    }
}

impl Preface {
    /// Overall line numbers of the preface.
    pub fn structure(&self) -> Vec<usize> {
        numbers(&self.lines)
    }
}

impl TableOfContents {
    /// Overall line numbers of the contents listing.
    pub fn structure(&self) -> Vec<usize> {
        numbers(&self.lines)
    }
}

impl Document {
    /// Project every top-level section onto the line numbers it covers.
    pub fn structure(&self) -> Vec<SectionStructure> {
        self.sections()
            .map(|section| self.section_structure(section))
            .collect()
    }

    /// Project one section, and its nested sections, onto line numbers.
    pub fn section_structure(&self, section: &Section) -> SectionStructure {
        SectionStructure {
            header: section
                .header
                .as_ref()
                .map(|h| numbers(&h.lines))
                .unwrap_or_default(),
            paragraphs: section
                .paragraphs
                .iter()
                .flat_map(|p| p.lines.iter().map(Line::overall_line_number))
                .collect(),
            votes: section.votes.iter().map(VoteStructure::from).collect(),
            sub_sections: self
                .sub_sections(section)
                .map(|child| self.section_structure(child))
                .collect(),
            attendance: section
                .attendance
                .as_ref()
                .map(|a| numbers(&a.lines))
                .unwrap_or_default(),
        }
    }
}
