//! The physical input: a path and its pages.

use super::{Line, Page};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A read input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct File {
    /// Where the input came from
    pub path: PathBuf,

    /// Pages in input order
    pub pages: Vec<Page>,
}

impl File {
    /// Create a file with no pages.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pages: Vec::new(),
        }
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get a page by overall number (1-indexed).
    pub fn get_page(&self, overall_number: usize) -> Option<&Page> {
        if overall_number == 0 {
            return None;
        }
        self.pages.get(overall_number - 1)
    }

    /// Every line of every page, in page order then header, body, footer order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.pages.iter().flat_map(Page::lines)
    }

    /// Body lines paired with their page, in page then line order.
    pub fn body_lines(&self) -> impl Iterator<Item = (&Page, &Line)> {
        self.pages
            .iter()
            .flat_map(|page| page.body_lines.iter().map(move |line| (page, line)))
    }

    /// Total number of lines across all pages.
    pub fn line_count(&self) -> usize {
        self.pages.iter().map(Page::line_count).sum()
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pages, {} lines in {}",
            self.page_count(),
            self.line_count(),
            self.path.display()
        )
    }
}
