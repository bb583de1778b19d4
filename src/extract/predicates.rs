//! Line classification for the Queensland Hansard layout.
//!
//! Speech paragraphs open at 8 or 10 columns (or flush left), sub-headings
//! are indented further, and top-level headings are set in capitals.

use crate::model::{Line, Page, VotePhase};

/// Indents that open a paragraph.
pub const PARAGRAPH_INDENTS: [usize; 2] = [8, 10];

/// Indent of centred sub-headings. Headings are told apart by case and by
/// not sitting at a paragraph indent, so this is informational.
pub const SECTION_HEADER_INDENT: usize = 17;

/// The phrase that opens a division.
pub const DIVISION_PHRASE: &str = "Division: Question put—";

/// Check if the line closes the preface: its words are exactly `Subject Page`.
pub fn is_contents_heading(line: &Line) -> bool {
    let words = line.split_words();
    words.len() == 2
        && words[0].eq_ignore_ascii_case("Subject")
        && words[1].eq_ignore_ascii_case("Page")
}

/// Check if the line ends the table of contents: the first body line of a
/// page whose banner carries a page number.
pub fn is_contents_end(page: &Page, line: &Line) -> bool {
    page.has_header_number() && line.is_page_first_line()
}

/// A top-level heading, set entirely in capitals.
pub fn is_header1(line: &Line) -> bool {
    line.has_readable_text() && line.is_uppercase()
}

/// A sub-heading: indented, mixed case, and not at a paragraph indent.
pub fn is_header2(line: &Line) -> bool {
    line.has_readable_text()
        && !line.is_uppercase()
        && !line.has_indent(&PARAGRAPH_INDENTS, ' ')
        && line.is_indented()
}

pub fn is_vote_start(line: &Line) -> bool {
    line.has_readable_text()
        && line.contains(DIVISION_PHRASE)
        && line.has_indent(&PARAGRAPH_INDENTS, ' ')
}

pub fn is_paragraph_start(line: &Line) -> bool {
    line.has_readable_text()
        && (line.has_indent(&PARAGRAPH_INDENTS, ' ') || !line.is_indented())
        && !line.contains(DIVISION_PHRASE)
}

pub fn is_paragraph_continuation(line: &Line) -> bool {
    line.has_readable_text() && !line.is_indented() && !line.contains(DIVISION_PHRASE)
}

/// Check if the line opens the given division phase.
///
/// The question phase only opens through [`is_vote_start`].
pub fn starts_vote_phase(phase: VotePhase, line: &Line) -> bool {
    let text = line.normalised_no_whitespace();
    match phase {
        VotePhase::Question => false,
        VotePhase::Yes => text.starts_with("AYES, ") && text.ends_with(':'),
        VotePhase::No => text.starts_with("NOES, ") && text.ends_with(':'),
        VotePhase::Pair => text.starts_with("Pair: "),
        VotePhase::Resolution => {
            line.contains_word("affirmative") || line.contains_word("negatived")
        }
        VotePhase::Outcome => line.contains("agreed to"),
    }
}
