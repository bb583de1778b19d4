//! Front matter: the title block and the table of contents.

use super::line::{line_ranges, Line};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Long-form sitting date, e.g. `Thursday, 6 February 2020`.
const SESSION_DATE_FORMAT: &str = "%A, %d %B %Y";

/// The title block before the table of contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Preface {
    /// Serial number from the `ISSN` line
    pub identifier: Option<String>,

    /// Parliament session, title-cased
    pub session: Option<String>,

    /// Sitting date
    pub session_date: Option<NaiveDate>,

    /// Preface lines
    pub lines: Vec<Line>,
}

impl Preface {
    /// Create an empty preface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line, picking up metadata the first time each kind appears.
    pub fn record(&mut self, line: Line) {
        let text = line.normalised_no_whitespace();

        if self.identifier.is_none() {
            if let Some(value) = text.strip_prefix("ISSN ") {
                self.identifier = Some(value.trim().to_string());
            }
        }

        if self.session.is_none() && line.contains("SESSION") && line.contains("PARLIAMENT") {
            self.session = Some(title_case(text));
        }

        if self.session_date.is_none() {
            if let Ok(date) = NaiveDate::parse_from_str(text, SESSION_DATE_FORMAT) {
                self.session_date = Some(date);
            }
        }

        self.lines.push(line);
    }
}

impl fmt::Display for Preface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} for {} on {}",
            line_ranges(&self.lines),
            self.identifier.as_deref().unwrap_or("(no identifier)"),
            self.session.as_deref().unwrap_or("(no session)"),
            self.session_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "(no date)".to_string())
        )
    }
}

/// The contents listing between the preface and the proceedings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableOfContents {
    /// Contents lines
    pub lines: Vec<Line>,
}

impl TableOfContents {
    /// Create an empty table of contents.
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for TableOfContents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", line_ranges(&self.lines))
    }
}

/// Capitalise the first letter of every alphabetic run and lowercase the rest.
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_alphabetic = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_alphabetic {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_alphabetic = true;
        } else {
            result.push(c);
            previous_alphabetic = false;
        }
    }
    result
}
