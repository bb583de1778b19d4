//! Physical pages.

use super::line::{line_ranges, Line};
use serde::Serialize;
use std::fmt;

/// A single physical page of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Page number across the whole input, including blank pages (1-indexed)
    pub overall_number: usize,

    /// Printed page number parsed from the banner
    pub header_number: Option<u32>,

    /// Title text parsed from the banner
    pub header_title: Option<String>,

    /// Banner lines, including the blank line that ends the banner
    pub header_lines: Vec<Line>,

    /// Body lines
    pub body_lines: Vec<Line>,

    /// Footer lines (this format never has any)
    pub footer_lines: Vec<Line>,
}

impl Page {
    /// Create an empty page.
    pub fn new(overall_number: usize) -> Self {
        Self {
            overall_number,
            header_number: None,
            header_title: None,
            header_lines: Vec::new(),
            body_lines: Vec::new(),
            footer_lines: Vec::new(),
        }
    }

    /// Check if the page has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.header_lines.is_empty() && self.body_lines.is_empty() && self.footer_lines.is_empty()
    }

    /// Check if the banner carried a printed page number.
    pub fn has_header_number(&self) -> bool {
        self.header_number.is_some()
    }

    /// Total number of lines on the page.
    pub fn line_count(&self) -> usize {
        self.header_lines.len() + self.body_lines.len() + self.footer_lines.len()
    }

    /// All lines in header, body, footer order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.header_lines
            .iter()
            .chain(self.body_lines.iter())
            .chain(self.footer_lines.iter())
    }

    /// Find a line on this page by its overall number.
    pub fn find_line(&self, overall_line_number: usize) -> Option<&Line> {
        self.lines()
            .find(|line| line.overall_line_number() == overall_line_number)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page {}", self.overall_number)?;
        match (&self.header_title, self.header_number) {
            (Some(title), Some(number)) => write!(f, " \"{} - {}\"", title, number)?,
            (Some(title), None) => write!(f, " \"{}\"", title)?,
            (None, Some(number)) => write!(f, " \"{}\"", number)?,
            (None, None) => {}
        }
        write!(
            f,
            "; lines: {} header, {} body, {} footer",
            line_ranges(&self.header_lines),
            line_ranges(&self.body_lines),
            line_ranges(&self.footer_lines)
        )
    }
}
