//! Visitor pattern for walking the block tree.
//!
//! [`walk`] visits every section depth-first in document order, and within a
//! section its paragraphs, divisions and attendance roll before its nested
//! sections. Visitors decide per block whether it is rendered normally,
//! replaced, or skipped.
//!
//! # Example
//!
//! ```
//! use hansard::model::Vote;
//! use hansard::render::visitor::{DocumentVisitor, VisitorAction};
//!
//! struct HideDivisions;
//!
//! impl DocumentVisitor for HideDivisions {
//!     fn visit_vote(&mut self, _vote: &Vote, _depth: usize) -> VisitorAction {
//!         VisitorAction::Replace("[division omitted]".to_string())
//!     }
//! }
//! ```

use crate::model::{Attendance, Document, Paragraph, Section, Vote};

/// Action returned by visitor methods to control rendering behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VisitorAction {
    /// Continue with default rendering.
    #[default]
    Continue,

    /// Replace the block with custom output.
    Replace(String),

    /// Skip this block entirely (for a section, its whole subtree).
    Skip,
}

impl VisitorAction {
    /// Check if this action indicates the block should be skipped.
    pub fn should_skip(&self) -> bool {
        matches!(self, VisitorAction::Skip)
    }

    /// Check if this action provides replacement content.
    pub fn is_replace(&self) -> bool {
        matches!(self, VisitorAction::Replace(_))
    }

    /// Get replacement content if available.
    pub fn replacement(&self) -> Option<&str> {
        match self {
            VisitorAction::Replace(s) => Some(s),
            _ => None,
        }
    }
}

/// Trait for visiting blocks of a document.
///
/// All methods return `VisitorAction::Continue` by default. `depth` is the
/// nesting depth of the owning section, 0 for top-level sections.
pub trait DocumentVisitor {
    /// Called before a section and its contents.
    fn visit_section(&mut self, section: &Section, depth: usize) -> VisitorAction {
        let _ = (section, depth);
        VisitorAction::Continue
    }

    fn visit_paragraph(&mut self, para: &Paragraph, depth: usize) -> VisitorAction {
        let _ = (para, depth);
        VisitorAction::Continue
    }

    fn visit_vote(&mut self, vote: &Vote, depth: usize) -> VisitorAction {
        let _ = (vote, depth);
        VisitorAction::Continue
    }

    fn visit_attendance(&mut self, attendance: &Attendance, depth: usize) -> VisitorAction {
        let _ = (attendance, depth);
        VisitorAction::Continue
    }

    /// Called after a section and everything nested in it.
    fn on_section_end(&mut self, section: &Section, depth: usize) {
        let _ = (section, depth);
    }
}

/// A block reached during a walk, paired with the visitor's decision.
#[derive(Debug, Clone, Copy)]
pub enum Block<'a> {
    Section(&'a Section),
    Paragraph(&'a Paragraph),
    Vote(&'a Vote),
    Attendance(&'a Attendance),
    /// End of a section that was not skipped
    SectionEnd(&'a Section),
}

/// Walk the document, asking `visitor` about each block.
///
/// `emit` receives every block that was not skipped, with its depth and the
/// visitor's action (`Continue` or `Replace`).
pub fn walk<'a, V, F>(doc: &'a Document, visitor: &mut V, mut emit: F)
where
    V: DocumentVisitor + ?Sized,
    F: FnMut(Block<'a>, usize, &VisitorAction),
{
    for section in doc.sections() {
        walk_section(doc, section, 0, visitor, &mut emit);
    }
}

fn walk_section<'a, V, F>(
    doc: &'a Document,
    section: &'a Section,
    depth: usize,
    visitor: &mut V,
    emit: &mut F,
) where
    V: DocumentVisitor + ?Sized,
    F: FnMut(Block<'a>, usize, &VisitorAction),
{
    let action = visitor.visit_section(section, depth);
    if action.should_skip() {
        return;
    }
    emit(Block::Section(section), depth, &action);

    for para in &section.paragraphs {
        let action = visitor.visit_paragraph(para, depth);
        if !action.should_skip() {
            emit(Block::Paragraph(para), depth, &action);
        }
    }

    for vote in &section.votes {
        let action = visitor.visit_vote(vote, depth);
        if !action.should_skip() {
            emit(Block::Vote(vote), depth, &action);
        }
    }

    if let Some(attendance) = &section.attendance {
        let action = visitor.visit_attendance(attendance, depth);
        if !action.should_skip() {
            emit(Block::Attendance(attendance), depth, &action);
        }
    }

    for child in doc.sub_sections(section) {
        walk_section(doc, child, depth + 1, visitor, emit);
    }

    visitor.on_section_end(section, depth);
    emit(Block::SectionEnd(section), depth, &VisitorAction::Continue);
}

/// Default visitor that performs no customization.
#[derive(Debug, Clone, Default)]
pub struct DefaultVisitor;

impl DefaultVisitor {
    /// Create a new default visitor.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentVisitor for DefaultVisitor {}

/// Visitor that leaves out attendance rolls.
#[derive(Debug, Clone, Default)]
pub struct SkipAttendanceVisitor;

impl DocumentVisitor for SkipAttendanceVisitor {
    fn visit_attendance(&mut self, _attendance: &Attendance, _depth: usize) -> VisitorAction {
        VisitorAction::Skip
    }
}

/// Visitor that prunes sections nested deeper than a limit.
#[derive(Debug, Clone)]
pub struct MaxDepthVisitor {
    max_depth: usize,
}

impl MaxDepthVisitor {
    /// Keep sections up to `max_depth` (0 keeps only top-level sections).
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl DocumentVisitor for MaxDepthVisitor {
    fn visit_section(&mut self, _section: &Section, depth: usize) -> VisitorAction {
        if depth > self.max_depth {
            VisitorAction::Skip
        } else {
            VisitorAction::Continue
        }
    }
}

/// Composite visitor that chains multiple visitors.
///
/// Visitors are called in order. The first visitor that returns
/// a non-Continue action determines the result.
#[derive(Default)]
pub struct CompositeVisitor {
    visitors: Vec<Box<dyn DocumentVisitor>>,
}

impl CompositeVisitor {
    /// Create a new composite visitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a visitor to the chain.
    pub fn with_visitor<V: DocumentVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }

    fn first_action(
        &mut self,
        mut ask: impl FnMut(&mut dyn DocumentVisitor) -> VisitorAction,
    ) -> VisitorAction {
        for visitor in &mut self.visitors {
            let action = ask(visitor.as_mut());
            if action != VisitorAction::Continue {
                return action;
            }
        }
        VisitorAction::Continue
    }
}

impl DocumentVisitor for CompositeVisitor {
    fn visit_section(&mut self, section: &Section, depth: usize) -> VisitorAction {
        self.first_action(|v| v.visit_section(section, depth))
    }

    fn visit_paragraph(&mut self, para: &Paragraph, depth: usize) -> VisitorAction {
        self.first_action(|v| v.visit_paragraph(para, depth))
    }

    fn visit_vote(&mut self, vote: &Vote, depth: usize) -> VisitorAction {
        self.first_action(|v| v.visit_vote(vote, depth))
    }

    fn visit_attendance(&mut self, attendance: &Attendance, depth: usize) -> VisitorAction {
        self.first_action(|v| v.visit_attendance(attendance, depth))
    }

    fn on_section_end(&mut self, section: &Section, depth: usize) {
        for visitor in &mut self.visitors {
            visitor.on_section_end(section, depth);
        }
    }
}
