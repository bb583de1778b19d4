//! # hansard
//!
//! Structure recovery for plain-text Hansard transcripts.
//!
//! The Queensland Parliament publishes its Record of Proceedings as text
//! with form feeds between physical pages. This library recovers two views
//! of such a file: the physical pages and lines it is made of, and the
//! logical document printed on them (preface, contents, sections, speech
//! paragraphs, divisions and the attendance roll).
//!
//! ## Quick Start
//!
//! ```no_run
//! use hansard::{parse_file, render};
//!
//! fn main() -> hansard::Result<()> {
//!     let doc = parse_file("record.txt")?;
//!
//!     if let Some(preface) = &doc.preface {
//!         println!("{:?}", preface.session_date);
//!     }
//!
//!     let outline = render::to_text(&doc, &render::RenderOptions::default())?;
//!     println!("{}", outline);
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - [`reader`] splits the input into [`Page`]s of [`Line`]s in a single
//!   streaming pass.
//! - [`extract`] feeds the body lines through a focus automaton that builds
//!   the [`Document`] tree.
//! - [`render`] serializes the tree to JSON, a line-number projection, or a
//!   text outline.

pub mod error;
pub mod extract;
pub mod model;
pub mod reader;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use extract::{
    extract, extract_with_options, Extractor, ParseOptions, DEFAULT_TRANSITION_LIMIT,
};
pub use model::{
    Attendance, Document, File, Header, Line, Page, Paragraph, Person, Preface, Section,
    SectionId, TableOfContents, Vote,
};
pub use reader::PageReader;
pub use render::{JsonFormat, PageSelection, RenderOptions};

use std::io::BufRead;
use std::path::Path;

/// Read a transcript into pages without extracting its structure.
///
/// # Example
///
/// ```no_run
/// let file = hansard::read_file("record.txt").unwrap();
/// println!("{} pages", file.page_count());
/// ```
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<File> {
    reader::read_path(path)
}

/// Read a transcript and extract its document.
///
/// # Example
///
/// ```no_run
/// use hansard::parse_file;
///
/// let doc = parse_file("record.txt").unwrap();
/// println!("Sections: {}", doc.section_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    parse_file_with_options(path, &ParseOptions::default())
}

/// Read a transcript and extract its document with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<Document> {
    let file = reader::read_path(path)?;
    extract_with_options(&file, options)
}

/// Extract the document from transcript text held in memory.
pub fn parse_str(text: &str) -> Result<Document> {
    parse_reader(text.as_bytes())
}

/// Extract the document from any buffered source.
///
/// Pages are handed to the extractor as soon as they are read, so only the
/// page being read is held besides the growing document.
///
/// # Example
///
/// ```no_run
/// use hansard::parse_reader;
/// use std::fs::File;
/// use std::io::BufReader;
///
/// let input = BufReader::new(File::open("record.txt").unwrap());
/// let doc = parse_reader(input).unwrap();
/// ```
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Document> {
    parse_reader_with_options(reader, &ParseOptions::default())
}

/// Extract the document from any buffered source with custom options.
pub fn parse_reader_with_options<R: BufRead>(reader: R, options: &ParseOptions) -> Result<Document> {
    let mut extractor = Extractor::with_options(options.clone());
    for page in PageReader::new(reader) {
        extractor.push_page(&page?)?;
    }
    Ok(extractor.finish())
}

/// Convert a transcript to document JSON.
///
/// # Example
///
/// ```no_run
/// use hansard::{to_json, JsonFormat};
///
/// let json = to_json("record.txt", JsonFormat::Pretty).unwrap();
/// std::fs::write("record.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}

/// Convert a transcript to the JSON line-number projection of its document.
pub fn to_structure_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_structure_json(&doc, format)
}

/// Convert a transcript to a text outline.
pub fn to_text<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_text(&doc, options)
}

/// Builder for reading, extracting and rendering a transcript.
///
/// # Example
///
/// ```no_run
/// use hansard::Hansard;
///
/// let outline = Hansard::new()
///     .body_only()
///     .with_indent_width(4)
///     .parse("record.txt")?
///     .to_text()?;
/// # Ok::<(), hansard::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Hansard {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Hansard {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-line transition limit of the extractor.
    pub fn with_transition_limit(mut self, limit: usize) -> Self {
        self.parse_options = self.parse_options.with_transition_limit(limit);
        self
    }

    /// Leave the preface and contents out of the outline.
    pub fn body_only(mut self) -> Self {
        self.render_options = self.render_options.body_only();
        self
    }

    /// Set the outline indent width.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.render_options = self.render_options.with_indent_width(width);
        self
    }

    /// Set page selection for the page listing.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.render_options = self.render_options.with_pages(pages);
        self
    }

    /// Read and extract a transcript file.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<HansardResult> {
        let file = reader::read_path(path)?;
        self.finish(file)
    }

    /// Read and extract transcript text held in memory.
    pub fn parse_str(self, text: &str, path: impl Into<std::path::PathBuf>) -> Result<HansardResult> {
        let file = reader::read_str(text, path)?;
        self.finish(file)
    }

    fn finish(self, file: File) -> Result<HansardResult> {
        let document = extract_with_options(&file, &self.parse_options)?;
        Ok(HansardResult {
            file,
            document,
            render_options: self.render_options,
        })
    }
}

/// A read transcript together with its extracted document.
#[derive(Debug, Clone)]
pub struct HansardResult {
    /// The physical pages
    pub file: File,
    /// The logical structure
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl HansardResult {
    /// Convert to a text outline.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to document JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Convert to the JSON line-number projection.
    pub fn to_structure_json(&self, format: JsonFormat) -> Result<String> {
        render::to_structure_json(&self.document, format)
    }

    /// One summary line per selected page.
    pub fn page_list(&self) -> String {
        render::to_page_list(&self.file, &self.render_options)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Get the read file.
    pub fn file(&self) -> &File {
        &self.file
    }
}
