//! Paragraphs and the attendance roll.

use super::line::{line_ranges, Line};
use super::{Person, SectionId};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// A block of spoken or procedural text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    /// Owning section
    #[serde(skip)]
    pub section: SectionId,

    /// Speaker, when known (not populated by the extractor)
    pub person: Option<Person>,

    /// When the paragraph began, when known (not populated by the extractor)
    pub start_time: Option<NaiveDateTime>,

    /// Paragraph lines
    pub lines: Vec<Line>,
}

impl Paragraph {
    /// Create an empty paragraph in a section.
    pub fn new(section: SectionId) -> Self {
        Self {
            section,
            person: None,
            start_time: None,
            lines: Vec::new(),
        }
    }

    /// Paragraph text with lines joined by single spaces.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(Line::normalised_no_whitespace)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check if the paragraph has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", line_ranges(&self.lines))?;
        if let Some(person) = &self.person {
            write!(f, " by {}", person)?;
        }
        if let Some(start) = &self.start_time {
            write!(f, " at {}", start)?;
        }
        Ok(())
    }
}

/// The members present during the sitting.
///
/// Names stay as raw lines; resolving them to people is left to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attendance {
    /// Owning section
    #[serde(skip)]
    pub section: SectionId,

    /// Roll lines
    pub lines: Vec<Line>,
}

impl Attendance {
    /// Create an empty attendance roll in a section.
    pub fn new(section: SectionId) -> Self {
        Self {
            section,
            lines: Vec::new(),
        }
    }

    /// Comma separated names on the roll, in order.
    pub fn names(&self) -> Vec<&str> {
        self.lines
            .iter()
            .flat_map(|line| line.normalised_no_whitespace().split(','))
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    }
}

impl fmt::Display for Attendance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} names",
            line_ranges(&self.lines),
            self.names().len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_plain_text() {
        let mut para = Paragraph::new(SectionId(0));
        assert!(para.is_empty());
        para.lines.push(Line::new("        Mr SPEAKER: Order! The member\n", 10, Some(1), 1));
        para.lines.push(Line::new("for Maiwar will resume his seat.\n", 11, Some(2), 1));
        assert_eq!(
            para.plain_text(),
            "Mr SPEAKER: Order! The member for Maiwar will resume his seat."
        );
        assert_eq!(para.to_string(), "10-11");
    }

    #[test]
    fn test_attendance_names() {
        let mut roll = Attendance::new(SectionId(0));
        roll.lines.push(Line::new("Andrew, Bailey, Bates,\n", 20, Some(1), 1));
        roll.lines.push(Line::new("Simpson, Sorensen\n", 21, Some(2), 1));
        assert_eq!(roll.names(), vec!["Andrew", "Bailey", "Bates", "Simpson", "Sorensen"]);
        assert_eq!(roll.to_string(), "20-21: 5 names");
    }
}
