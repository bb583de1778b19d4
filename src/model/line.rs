//! Physical input lines and their classification queries.

use serde::Serialize;
use std::fmt;

/// The control character that separates physical pages.
pub const PAGE_BREAK: char = '\u{c}';

/// One physical line of the input.
///
/// A line is created once by the reader and never changes afterwards.
/// All queries are pure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    raw_text: String,
    overall_line_number: usize,
    page_line_number: Option<usize>,
    page_number: usize,
}

impl Line {
    /// Create a line.
    ///
    /// `page_line_number` is `None` while the line belongs to a page banner.
    pub fn new(
        raw_text: impl Into<String>,
        overall_line_number: usize,
        page_line_number: Option<usize>,
        page_number: usize,
    ) -> Self {
        Self {
            raw_text: raw_text.into(),
            overall_line_number,
            page_line_number,
            page_number,
        }
    }

    /// The exact input text, including any line terminator and page break.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Line number across the whole input (1-indexed).
    pub fn overall_line_number(&self) -> usize {
        self.overall_line_number
    }

    /// Line number within the page body (1-indexed).
    pub fn page_line_number(&self) -> Option<usize> {
        self.page_line_number
    }

    /// Overall number of the page that owns this line.
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    /// The text with page breaks, line terminators and tabs stripped from both ends.
    pub fn normalised(&self) -> &str {
        self.raw_text
            .trim_matches(|c| c == PAGE_BREAK || c == '\n' || c == '\r' || c == '\t')
    }

    /// [`normalised`](Self::normalised) with surrounding whitespace removed as well.
    pub fn normalised_no_whitespace(&self) -> &str {
        self.normalised().trim()
    }

    /// Words of the line.
    ///
    /// Tokens are split on whitespace and stripped of leading and trailing
    /// punctuation. Tokens without any alphabetic character are dropped.
    pub fn split_words(&self) -> Vec<&str> {
        self.normalised_no_whitespace()
            .split_whitespace()
            .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|token| token.chars().any(char::is_alphabetic))
            .collect()
    }

    /// Check if the line holds nothing but whitespace and control characters.
    pub fn is_empty(&self) -> bool {
        self.normalised_no_whitespace().is_empty()
    }

    /// Check if the line contains at least one alphabetic character.
    pub fn has_readable_text(&self) -> bool {
        !self.raw_text.is_empty() && self.normalised().chars().any(char::is_alphabetic)
    }

    /// Check if the text has letters and none of them are lowercase.
    pub fn is_uppercase(&self) -> bool {
        let text = self.normalised_no_whitespace();
        text.chars().any(char::is_alphabetic) && !text.chars().any(char::is_lowercase)
    }

    /// Check if this is the first body line of its page.
    pub fn is_page_first_line(&self) -> bool {
        self.page_line_number == Some(1)
    }

    /// Check if this is the first line of the input.
    pub fn is_file_first_line(&self) -> bool {
        self.overall_line_number == 1
    }

    /// Overall number of the preceding line, if any.
    pub fn previous_line_number(&self) -> Option<usize> {
        if self.is_file_first_line() {
            None
        } else {
            Some(self.overall_line_number - 1)
        }
    }

    /// Overall number of the following line.
    pub fn next_line_number(&self) -> usize {
        self.overall_line_number + 1
    }

    /// Check if the line is indented by exactly one of `columns` repetitions of `character`.
    ///
    /// The character after the indent must exist and must not be `character`,
    /// so an indent of 10 does not match a candidate of 8.
    pub fn has_indent(&self, columns: &[usize], character: char) -> bool {
        columns.iter().any(|&count| {
            let mut chars = self.raw_text.chars();
            chars.by_ref().take(count).filter(|&c| c == character).count() == count
                && chars.next().is_some_and(|c| c != character)
        })
    }

    /// Check if the text starts with a space once page breaks are stripped.
    pub fn is_indented(&self) -> bool {
        self.normalised().starts_with(' ')
    }

    /// Case-insensitive substring test.
    pub fn contains(&self, text: &str) -> bool {
        self.normalised()
            .to_lowercase()
            .contains(&text.to_lowercase())
    }

    /// Case-insensitive test for a whole word.
    pub fn contains_word(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.split_words()
            .iter()
            .any(|token| token.to_lowercase() == word)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.overall_line_number,
            self.normalised_no_whitespace()
        )
    }
}

/// Summarise lines as compact ranges of overall line numbers, e.g. `206-212, 214`.
pub fn line_ranges(lines: &[Line]) -> String {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for number in lines.iter().map(Line::overall_line_number) {
        match ranges.last_mut() {
            Some((_, end)) if *end + 1 == number => *end = number,
            _ => ranges.push((number, number)),
        }
    }

    if ranges.is_empty() {
        return "none".to_string();
    }

    ranges
        .iter()
        .map(|&(start, end)| {
            if start == end {
                start.to_string()
            } else {
                format!("{}-{}", start, end)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> Line {
        Line::new(text, 1, Some(1), 1)
    }

    #[test]
    fn test_normalised() {
        let l = line("\u{c}   ISSN 1322-0330\n");
        assert_eq!(l.normalised(), "   ISSN 1322-0330");
        assert_eq!(l.normalised_no_whitespace(), "ISSN 1322-0330");
    }

    #[test]
    fn test_split_words_drops_punctuation_only_tokens() {
        let l = line("MINISTERIAL STATEMENTS ............ 206\n");
        assert_eq!(l.split_words(), vec!["MINISTERIAL", "STATEMENTS"]);

        let l = line("Resolved in the affirmative.\n");
        assert_eq!(l.split_words(), vec!["Resolved", "in", "the", "affirmative"]);
    }

    #[test]
    fn test_is_empty() {
        assert!(line("\n").is_empty());
        assert!(line("   \t\n").is_empty());
        assert!(line("\u{c}\n").is_empty());
        assert!(!line("  x\n").is_empty());
    }

    #[test]
    fn test_has_readable_text() {
        assert!(line("Mr SPEAKER\n").has_readable_text());
        assert!(!line("   206\n").has_readable_text());
        assert!(!line("......\n").has_readable_text());
        assert!(!line("").has_readable_text());
    }

    #[test]
    fn test_is_uppercase() {
        assert!(line("MINISTERIAL STATEMENTS\n").is_uppercase());
        assert!(line("PRIVATE MEMBERS’ STATEMENTS 2020\n").is_uppercase());
        assert!(!line("Health Services\n").is_uppercase());
        assert!(!line("  2020\n").is_uppercase());
    }

    #[test]
    fn test_has_indent_is_exact() {
        let eight = line("        Mr SPEAKER: Order!\n");
        let ten = line("          for the Department\n");
        assert!(eight.has_indent(&[8], ' '));
        assert!(!eight.has_indent(&[10], ' '));
        assert!(ten.has_indent(&[8, 10], ' '));
        assert!(!ten.has_indent(&[8], ' '));
        assert!(!line("text\n").has_indent(&[8, 10], ' '));
        assert!(!line("        ").has_indent(&[8], ' '));
    }

    #[test]
    fn test_contains_and_contains_word() {
        let l = line("Motion agreed to.\n");
        assert!(l.contains("AGREED TO"));
        assert!(l.contains_word("motion"));
        assert!(!l.contains_word("agree"));
    }

    #[test]
    fn test_line_numbers() {
        let first = Line::new("a\n", 1, Some(1), 1);
        assert!(first.is_file_first_line());
        assert!(first.is_page_first_line());
        assert_eq!(first.previous_line_number(), None);
        assert_eq!(first.next_line_number(), 2);

        let banner = Line::new("\u{c}Title\n", 5, None, 2);
        assert!(!banner.is_page_first_line());
        assert_eq!(banner.previous_line_number(), Some(4));
    }

    #[test]
    fn test_line_ranges() {
        let lines: Vec<Line> = [206, 207, 208, 210, 214, 215]
            .iter()
            .map(|&n| Line::new("x\n", n, Some(1), 1))
            .collect();
        assert_eq!(line_ranges(&lines), "206-208, 210, 214-215");
        assert_eq!(line_ranges(&[]), "none");
    }
}
