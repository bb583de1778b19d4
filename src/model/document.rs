//! Document-level types.
//!
//! The document owns every section in a flat arena. Sections refer to their
//! parent and children by [`SectionId`], so the ownership graph stays a tree
//! while navigation works in both directions.

use super::{Paragraph, Preface, Section, SectionId, TableOfContents, Vote};
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::fmt;

/// The recovered structure of one Hansard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Title block before the table of contents
    pub preface: Option<Preface>,

    /// Contents listing
    pub table_of_contents: Option<TableOfContents>,

    arena: Vec<Section>,
    roots: Vec<SectionId>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a section and attach it to `parent`, or to the document when `parent` is `None`.
    pub fn add_section(&mut self, parent: Option<SectionId>) -> SectionId {
        let id = SectionId(self.arena.len());
        self.arena.push(Section::new(id, parent));
        match parent {
            Some(parent) => self.section_mut(parent).sub_sections.push(id),
            None => self.roots.push(id),
        }
        id
    }

    /// Look up a section by handle.
    ///
    /// Handles are only ever issued by [`add_section`](Self::add_section) on
    /// this document, so lookup cannot miss.
    pub fn section(&self, id: SectionId) -> &Section {
        &self.arena[id.0]
    }

    /// Look up a section by handle for mutation.
    pub fn section_mut(&mut self, id: SectionId) -> &mut Section {
        &mut self.arena[id.0]
    }

    /// Look up a section by handle, returning `None` for foreign handles.
    pub fn get_section(&self, id: SectionId) -> Option<&Section> {
        self.arena.get(id.0)
    }

    /// Top-level sections in order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.roots.iter().map(|&id| self.section(id))
    }

    /// Handles of the top-level sections in order.
    pub fn section_ids(&self) -> &[SectionId] {
        &self.roots
    }

    /// Nested sections of a section in order.
    pub fn sub_sections<'a>(&'a self, section: &'a Section) -> impl Iterator<Item = &'a Section> {
        section.sub_sections.iter().map(|&id| self.section(id))
    }

    /// The enclosing section, if any.
    pub fn parent(&self, section: &Section) -> Option<&Section> {
        section.parent.map(|id| self.section(id))
    }

    /// Nesting depth of a section (0 for top-level sections).
    pub fn depth(&self, section: &Section) -> usize {
        let mut depth = 0;
        let mut current = section.parent;
        while let Some(id) = current {
            depth += 1;
            current = self.section(id).parent;
        }
        depth
    }

    /// Every section, depth-first in document order.
    pub fn all_sections(&self) -> Vec<&Section> {
        let mut result = Vec::with_capacity(self.arena.len());
        let mut stack: Vec<SectionId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let section = self.section(id);
            result.push(section);
            stack.extend(section.sub_sections.iter().rev().copied());
        }
        result
    }

    /// Every paragraph of every section, in document order.
    pub fn all_paragraphs(&self) -> Vec<&Paragraph> {
        self.all_sections()
            .into_iter()
            .flat_map(|section| section.paragraphs.iter())
            .collect()
    }

    /// Every division of every section, in document order.
    pub fn all_votes(&self) -> Vec<&Vote> {
        self.all_sections()
            .into_iter()
            .flat_map(|section| section.votes.iter())
            .collect()
    }

    /// Total number of sections, nested ones included.
    pub fn section_count(&self) -> usize {
        self.arena.len()
    }

    /// Check if nothing was recovered.
    pub fn is_empty(&self) -> bool {
        self.preface.is_none() && self.table_of_contents.is_none() && self.arena.is_empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.preface {
            Some(preface) => write!(f, "{}", preface)?,
            None => write!(f, "(no preface)")?,
        }
        match &self.table_of_contents {
            Some(toc) => write!(f, "; contents {}", toc)?,
            None => write!(f, "; (no contents)")?,
        }
        write!(f, "; {} sections", self.roots.len())
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let sections: Vec<SectionNode<'_>> = self
            .sections()
            .map(|section| SectionNode {
                document: self,
                section,
            })
            .collect();

        let mut state = serializer.serialize_struct("Document", 3)?;
        state.serialize_field("preface", &self.preface)?;
        state.serialize_field("table_of_contents", &self.table_of_contents)?;
        state.serialize_field("sections", &sections)?;
        state.end()
    }
}

/// A section serialized with its nested sections inline.
struct SectionNode<'a> {
    document: &'a Document,
    section: &'a Section,
}

impl Serialize for SectionNode<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let sub_sections: Vec<SectionNode<'_>> = self
            .document
            .sub_sections(self.section)
            .map(|section| SectionNode {
                document: self.document,
                section,
            })
            .collect();

        let mut state = serializer.serialize_struct("Section", 5)?;
        state.serialize_field("header", &self.section.header)?;
        state.serialize_field("paragraphs", &self.section.paragraphs)?;
        state.serialize_field("votes", &self.section.votes)?;
        state.serialize_field("attendance", &self.section.attendance)?;
        state.serialize_field("sub_sections", &sub_sections)?;
        state.end()
    }
}
