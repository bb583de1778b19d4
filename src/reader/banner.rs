//! Page banner parsing.
//!
//! The first line after a page break repeats the document title, the sitting
//! date and the printed page number, separated by runs of two or more
//! spaces. Odd pages put the numeral last, even pages put it first.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::Line;

/// `<date>  <title>  <numeral>`
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NUMERAL_LAST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?) {2,}(.+?) {2,}([^ ]+)$").expect("valid regex"));

/// `<numeral>  <title>  <date>`
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NUMERAL_FIRST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^ ]+) {2,}(.+?) {2,}(.+?)$").expect("valid regex"));

/// Title and printed page number taken from a banner line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Banner {
    /// Banner title
    pub title: Option<String>,
    /// Printed page number
    pub number: Option<u32>,
}

impl Banner {
    /// Parse the first banner line of a page.
    pub fn parse(line: &Line) -> Self {
        let text = line.normalised_no_whitespace();

        if let Some(caps) = NUMERAL_LAST.captures(text) {
            return Self {
                title: Some(caps[2].to_string()),
                number: caps[3].parse().ok(),
            };
        }

        if let Some(caps) = NUMERAL_FIRST.captures(text) {
            return Self {
                title: Some(caps[2].to_string()),
                number: caps[1].parse().ok(),
            };
        }

        if text.is_empty() {
            log::warn!(
                "Page banner at line {} has no text",
                line.overall_line_number()
            );
            return Self::default();
        }

        Self {
            title: Some(text.to_string()),
            number: None,
        }
    }

    /// Append a continuation banner line to the title.
    pub fn extend_title(title: &mut Option<String>, line: &Line) {
        let text = line.normalised_no_whitespace();
        match title {
            Some(existing) => {
                existing.push(' ');
                existing.push_str(text);
            }
            None => *title = Some(text.to_string()),
        }
    }
}
