//! The focus automaton that turns body lines into a block tree.
//!
//! Exactly one block has focus at a time. Each line is offered to the block
//! in focus; the block either absorbs it, hands focus to a new child, or
//! hands focus back to its parent. Whenever focus moves to a different kind
//! of block the same line is offered again, so a single line may travel
//! through several blocks before it settles.

use std::fmt;

use super::options::ParseOptions;
use super::predicates::{
    is_contents_end, is_contents_heading, is_header1, is_header2, is_paragraph_continuation,
    is_paragraph_start, is_vote_start, starts_vote_phase,
};
use crate::error::{Error, Result};
use crate::model::{
    Attendance, Document, File, Header, Line, Page, Paragraph, Preface, SectionId,
    TableOfContents, Vote,
};

/// The kinds of block that can hold focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Document,
    Preface,
    TableOfContents,
    Section,
    Header,
    Paragraph,
    Vote,
    Attendance,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockKind::Document => "document",
            BlockKind::Preface => "preface",
            BlockKind::TableOfContents => "table of contents",
            BlockKind::Section => "section",
            BlockKind::Header => "header",
            BlockKind::Paragraph => "paragraph",
            BlockKind::Vote => "vote",
            BlockKind::Attendance => "attendance",
        };
        f.write_str(name)
    }
}

/// The block currently in focus.
///
/// `Section(None)` is the section context entered from the document before
/// any section exists; it only reacts to headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Document,
    Preface,
    TableOfContents,
    Section(Option<SectionId>),
    Header(SectionId),
    Paragraph(SectionId, usize),
    Vote(SectionId, usize),
    Attendance(SectionId),
}

impl Focus {
    fn kind(self) -> BlockKind {
        match self {
            Focus::Document => BlockKind::Document,
            Focus::Preface => BlockKind::Preface,
            Focus::TableOfContents => BlockKind::TableOfContents,
            Focus::Section(_) => BlockKind::Section,
            Focus::Header(_) => BlockKind::Header,
            Focus::Paragraph(..) => BlockKind::Paragraph,
            Focus::Vote(..) => BlockKind::Vote,
            Focus::Attendance(_) => BlockKind::Attendance,
        }
    }
}

/// Incremental document builder.
///
/// Feed it body lines in input order with [`push_page`](Self::push_page) or
/// [`push_line`](Self::push_line), then take the document with
/// [`finish`](Self::finish).
#[derive(Debug)]
pub struct Extractor {
    options: ParseOptions,
    document: Document,
    focus: Focus,
}

impl Extractor {
    /// Create an extractor with default options.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Create an extractor with the given options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            document: Document::new(),
            focus: Focus::Document,
        }
    }

    /// Kind of the block currently in focus.
    pub fn focus(&self) -> BlockKind {
        self.focus.kind()
    }

    /// The document built so far.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Feed every body line of a page.
    pub fn push_page(&mut self, page: &Page) -> Result<()> {
        for line in &page.body_lines {
            self.push_line(page, line)?;
        }
        Ok(())
    }

    /// Feed one body line of `page`.
    pub fn push_line(&mut self, page: &Page, line: &Line) -> Result<()> {
        let mut transitions = 0;
        loop {
            let next = self.handle(self.focus, page, line);
            if next.kind() == self.focus.kind() {
                self.focus = next;
                return Ok(());
            }

            log::trace!(
                "Line {}: {} -> {}",
                line.overall_line_number(),
                self.focus.kind(),
                next.kind()
            );
            self.focus = next;

            transitions += 1;
            if transitions > self.options.transition_limit {
                return Err(Error::TransitionLimit {
                    line: line.overall_line_number(),
                    limit: self.options.transition_limit,
                });
            }
        }
    }

    /// Take the finished document.
    pub fn finish(self) -> Document {
        self.document
    }

    fn handle(&mut self, focus: Focus, page: &Page, line: &Line) -> Focus {
        match focus {
            Focus::Document => self.handle_document(line),
            Focus::Preface => self.handle_preface(line),
            Focus::TableOfContents => self.handle_table_of_contents(page, line),
            Focus::Section(id) => self.handle_section(id, line),
            Focus::Header(id) => self.handle_header(id, line),
            Focus::Paragraph(id, index) => self.handle_paragraph(id, index, line),
            Focus::Vote(id, index) => self.handle_vote(id, index, line),
            Focus::Attendance(id) => self.handle_attendance(id, line),
        }
    }

    fn handle_document(&mut self, line: &Line) -> Focus {
        if self.document.preface.is_none() {
            log::debug!("Line {}: preface starts", line.overall_line_number());
            self.document.preface = Some(Preface::new());
            return Focus::Preface;
        }

        if self.document.table_of_contents.is_none() {
            log::debug!(
                "Line {}: table of contents starts",
                line.overall_line_number()
            );
            self.document.table_of_contents = Some(TableOfContents::new());
            return Focus::TableOfContents;
        }

        if line.is_empty() {
            Focus::Document
        } else {
            Focus::Section(None)
        }
    }

    fn handle_preface(&mut self, line: &Line) -> Focus {
        if is_contents_heading(line) {
            return Focus::Document;
        }
        if let Some(preface) = self.document.preface.as_mut() {
            preface.record(line.clone());
        }
        Focus::Preface
    }

    fn handle_table_of_contents(&mut self, page: &Page, line: &Line) -> Focus {
        if is_contents_end(page, line) {
            log::debug!(
                "Line {}: proceedings start on printed page {}",
                line.overall_line_number(),
                page.header_number.unwrap_or_default()
            );
            return Focus::Document;
        }
        if let Some(toc) = self.document.table_of_contents.as_mut() {
            toc.lines.push(line.clone());
        }
        Focus::TableOfContents
    }

    fn handle_section(&mut self, current: Option<SectionId>, line: &Line) -> Focus {
        if line.is_empty() {
            return Focus::Section(current);
        }

        if is_header1(line) {
            return self.open_section(None, line);
        }

        if is_header2(line) {
            return self.open_section(current, line);
        }

        let Some(id) = current else {
            log::debug!(
                "Line {}: dropped before the first heading",
                line.overall_line_number()
            );
            return Focus::Section(None);
        };

        let section = self.document.section_mut(id);

        if section.is_attendance() {
            section.attendance.get_or_insert_with(|| Attendance::new(id));
            return Focus::Attendance(id);
        }

        if is_vote_start(line) {
            log::debug!("Line {}: division starts", line.overall_line_number());
            section.votes.push(Vote::new(id));
            return Focus::Vote(id, section.votes.len() - 1);
        }

        if is_paragraph_start(line) {
            section.paragraphs.push(Paragraph::new(id));
            return Focus::Paragraph(id, section.paragraphs.len() - 1);
        }

        if is_paragraph_continuation(line) && !section.paragraphs.is_empty() {
            return Focus::Paragraph(id, section.paragraphs.len() - 1);
        }

        log::debug!(
            "Line {}: no block accepts {:?}",
            line.overall_line_number(),
            line.normalised()
        );
        Focus::Section(current)
    }

    fn open_section(&mut self, parent: Option<SectionId>, line: &Line) -> Focus {
        let id = self.document.add_section(parent);
        self.document.section_mut(id).header = Some(Header::new(id));
        log::debug!(
            "Line {}: new {} section {}",
            line.overall_line_number(),
            if parent.is_some() { "nested" } else { "top-level" },
            id.index()
        );
        Focus::Header(id)
    }

    fn handle_header(&mut self, id: SectionId, line: &Line) -> Focus {
        if line.is_empty() {
            return Focus::Section(Some(id));
        }
        if line.has_readable_text() {
            if let Some(header) = self.document.section_mut(id).header.as_mut() {
                header.lines.push(line.clone());
            }
        }
        Focus::Header(id)
    }

    fn handle_paragraph(&mut self, id: SectionId, index: usize, line: &Line) -> Focus {
        if line.is_empty() || is_vote_start(line) {
            return Focus::Section(Some(id));
        }

        let Some(paragraph) = self.document.section_mut(id).paragraphs.get_mut(index) else {
            log::warn!("Paragraph {} of section {} is missing", index, id.index());
            return Focus::Section(Some(id));
        };

        if is_paragraph_start(line) || is_paragraph_continuation(line) {
            paragraph.lines.push(line.clone());
        } else {
            log::debug!(
                "Line {}: dropped inside a paragraph",
                line.overall_line_number()
            );
        }
        Focus::Paragraph(id, index)
    }

    fn handle_vote(&mut self, id: SectionId, index: usize, line: &Line) -> Focus {
        let Some(vote) = self.document.section_mut(id).votes.get_mut(index) else {
            log::warn!("Division {} of section {} is missing", index, id.index());
            return Focus::Section(Some(id));
        };

        if line.is_empty() {
            if vote.is_complete() {
                return Focus::Section(Some(id));
            }
            return Focus::Vote(id, index);
        }

        let current = vote.current_phase();
        let phase = current
            .successors()
            .iter()
            .copied()
            .find(|&next| starts_vote_phase(next, line))
            .unwrap_or(current);
        vote.push(phase, line.clone());
        Focus::Vote(id, index)
    }

    fn handle_attendance(&mut self, id: SectionId, line: &Line) -> Focus {
        if !line.is_empty() {
            if let Some(attendance) = self.document.section_mut(id).attendance.as_mut() {
                attendance.lines.push(line.clone());
            }
        }
        Focus::Attendance(id)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the document for a read file with default options.
pub fn extract(file: &File) -> Result<Document> {
    extract_with_options(file, &ParseOptions::default())
}

/// Build the document for a read file.
pub fn extract_with_options(file: &File, options: &ParseOptions) -> Result<Document> {
    let mut extractor = Extractor::with_options(options.clone());
    for page in &file.pages {
        extractor.push_page(page)?;
    }
    let document = extractor.finish();

    log::info!(
        "Extracted {} sections, {} paragraphs, {} divisions from {}",
        document.section_count(),
        document.all_paragraphs().len(),
        document.all_votes().len(),
        file.path.display()
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A page whose banner has a printed number, with the given body lines.
    fn numbered_page(overall: usize, first_line: usize, body: &[&str]) -> Page {
        let mut page = Page::new(overall);
        page.header_number = Some(200 + overall as u32);
        for (i, text) in body.iter().enumerate() {
            page.body_lines
                .push(Line::new(*text, first_line + i, Some(i + 1), overall));
        }
        page
    }

    /// Extractor already past the preface and contents.
    fn in_proceedings() -> Extractor {
        let mut extractor = Extractor::new();
        let front = numbered_page(1, 1, &["ISSN 1322-0330\n", "Subject Page\n"]);
        extractor.push_page(&front).unwrap();
        extractor
    }

    fn feed(extractor: &mut Extractor, first_line: usize, body: &[&str]) {
        let page = numbered_page(9, first_line, body);
        for line in &page.body_lines[..] {
            extractor.push_line(&page, line).unwrap();
        }
    }

    #[test]
    fn test_first_line_opens_preface() {
        let mut extractor = Extractor::new();
        let page = numbered_page(1, 1, &["ISSN 1322-0330\n"]);
        extractor.push_page(&page).unwrap();
        assert_eq!(extractor.focus(), BlockKind::Preface);
        let preface = extractor.document().preface.as_ref().unwrap();
        assert_eq!(preface.identifier.as_deref(), Some("1322-0330"));
    }

    #[test]
    fn test_contents_heading_moves_line_into_contents() {
        let extractor = in_proceedings();
        assert_eq!(extractor.focus(), BlockKind::TableOfContents);
        let doc = extractor.finish();
        assert_eq!(doc.preface.unwrap().lines.len(), 1);
        assert_eq!(doc.table_of_contents.unwrap().lines.len(), 1);
    }

    #[test]
    fn test_header1_then_paragraphs() {
        let mut extractor = in_proceedings();
        // first line of a numbered page ends the contents
        let page = numbered_page(2, 3, &["SPEAKER’S STATEMENT\n", "\n", "        Mr SPEAKER: Order!\n", "continued\n", "\n"]);
        extractor.push_page(&page).unwrap();
        assert_eq!(extractor.focus(), BlockKind::Section);

        let doc = extractor.finish();
        assert_eq!(doc.section_ids().len(), 1);
        let section = doc.sections().next().unwrap();
        assert_eq!(section.title(), "SPEAKER’S STATEMENT");
        assert_eq!(section.paragraphs.len(), 1);
        assert_eq!(section.paragraphs[0].lines.len(), 2);
    }

    #[test]
    fn test_header2_nests_under_current_section() {
        let mut extractor = in_proceedings();
        let page = numbered_page(2, 3, &["MINISTERIAL STATEMENTS\n"]);
        extractor.push_page(&page).unwrap();
        feed(
            &mut extractor,
            4,
            &["\n", "                 Tourism Industry\n", "\n", "        Hon. A PALASZCZUK: I rise.\n"],
        );

        let doc = extractor.finish();
        let top = doc.sections().next().unwrap();
        let nested: Vec<_> = doc.sub_sections(top).collect();
        assert_eq!(nested.len(), 1);
        assert_eq!(nested[0].title(), "Tourism Industry");
        assert_eq!(nested[0].paragraphs.len(), 1);
        assert!(top.paragraphs.is_empty());
    }

    #[test]
    fn test_detached_context_drops_plain_lines() {
        let mut extractor = in_proceedings();
        let page = numbered_page(2, 3, &["        stray paragraph\n", "\n", "                 Sub heading\n"]);
        extractor.push_page(&page).unwrap();

        let doc = extractor.finish();
        assert_eq!(doc.section_ids().len(), 1);
        let section = doc.sections().next().unwrap();
        assert!(section.is_top_level());
        assert_eq!(section.title(), "Sub heading");
        assert!(section.paragraphs.is_empty());
    }

    #[test]
    fn test_division_phases() {
        let mut extractor = in_proceedings();
        let page = numbered_page(2, 3, &["MOTION\n"]);
        extractor.push_page(&page).unwrap();
        feed(
            &mut extractor,
            4,
            &[
                "\n",
                "        Division: Question put—That the motion be agreed to.\n",
                "\n",
                "AYES, 2:\n",
                "\n",
                "Bailey, Bates.\n",
                "\n",
                "NOES, 1:\n",
                "Crisafulli.\n",
                "\n",
                "Pair: Dick, Frecklington.\n",
                "\n",
                "        Resolved in the affirmative.\n",
                "        Motion agreed to.\n",
            ],
        );
        assert_eq!(extractor.focus(), BlockKind::Vote);
        feed(&mut extractor, 18, &["\n"]);
        assert_eq!(extractor.focus(), BlockKind::Section);

        let doc = extractor.finish();
        let votes = doc.all_votes();
        assert_eq!(votes.len(), 1);
        let vote = votes[0];
        assert_eq!(vote.question.len(), 1);
        assert_eq!(vote.yes.len(), 2);
        assert_eq!(vote.no.len(), 2);
        assert_eq!(vote.pair.len(), 1);
        assert_eq!(vote.resolution.len(), 1);
        assert_eq!(vote.outcome.len(), 1);
        assert_eq!(vote.declared_yes_count(), Some(2));
    }

    #[test]
    fn test_division_without_pair() {
        let mut extractor = in_proceedings();
        let page = numbered_page(2, 3, &["MOTION\n"]);
        extractor.push_page(&page).unwrap();
        feed(
            &mut extractor,
            4,
            &[
                "\n",
                "        Division: Question put—That the amendment be agreed to.\n",
                "\n",
                "AYES, 1:\n",
                "Bailey.\n",
                "\n",
                "NOES, 1:\n",
                "Bates.\n",
                "\n",
                "        Question negatived.\n",
                "        Amendment agreed to.\n",
                "\n",
            ],
        );
        assert_eq!(extractor.focus(), BlockKind::Section);

        let doc = extractor.finish();
        let vote = doc.all_votes()[0];
        assert!(vote.pair.is_empty());
        assert_eq!(vote.no.len(), 2);
        assert_eq!(vote.resolution.len(), 1);
        assert_eq!(vote.outcome.len(), 1);
        assert!(vote.is_complete());
    }

    #[test]
    fn test_division_ends_paragraph() {
        let mut extractor = in_proceedings();
        let page = numbered_page(2, 3, &["MOTION\n"]);
        extractor.push_page(&page).unwrap();
        feed(
            &mut extractor,
            4,
            &[
                "\n",
                "        Mr SPEAKER: I put the question.\n",
                "        Division: Question put—That the motion be agreed to.\n",
            ],
        );
        assert_eq!(extractor.focus(), BlockKind::Vote);
        let doc = extractor.finish();
        let section = doc.sections().next().unwrap();
        assert_eq!(section.paragraphs[0].lines.len(), 1);
        assert_eq!(section.votes[0].question.len(), 1);
    }

    #[test]
    fn test_attendance_absorbs_to_end() {
        let mut extractor = in_proceedings();
        let page = numbered_page(2, 3, &["ATTENDANCE\n"]);
        extractor.push_page(&page).unwrap();
        feed(
            &mut extractor,
            4,
            &["\n", "Andrew, Bailey, Bates\n", "\n", "                 Boothman, Boyce\n"],
        );
        assert_eq!(extractor.focus(), BlockKind::Attendance);

        let doc = extractor.finish();
        let attendance = doc.sections().next().unwrap().attendance.as_ref().unwrap();
        assert_eq!(attendance.lines.len(), 2);
        assert_eq!(attendance.names().len(), 5);
    }

    #[test]
    fn test_transition_limit() {
        let mut extractor = Extractor::with_options(ParseOptions::new().with_transition_limit(1));
        let page = numbered_page(1, 1, &["ISSN 1322-0330\n", "Subject Page\n"]);
        let result = extractor.push_page(&page);
        assert!(matches!(
            result,
            Err(Error::TransitionLimit { line: 2, limit: 1 })
        ));
    }

    #[test]
    fn test_block_kind_display() {
        assert_eq!(BlockKind::TableOfContents.to_string(), "table of contents");
        assert_eq!(BlockKind::Vote.to_string(), "vote");
    }
}
