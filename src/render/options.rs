//! Rendering options and configuration.

use std::ops::RangeInclusive;

/// Options for rendering a read file or its document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Show the preface metadata at the top of the outline
    pub include_preface: bool,

    /// Show the table of contents summary at the top of the outline
    pub include_table_of_contents: bool,

    /// Spaces per nesting level in the outline
    pub indent_width: usize,

    /// Pages to list
    pub page_selection: PageSelection,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the preface block.
    pub fn with_preface(mut self, include: bool) -> Self {
        self.include_preface = include;
        self
    }

    /// Enable or disable the table of contents block.
    pub fn with_table_of_contents(mut self, include: bool) -> Self {
        self.include_table_of_contents = include;
        self
    }

    /// Leave out both front matter blocks.
    pub fn body_only(mut self) -> Self {
        self.include_preface = false;
        self.include_table_of_contents = false;
        self
    }

    /// Set the indent width.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, selection: PageSelection) -> Self {
        self.page_selection = selection;
        self
    }

    /// Set specific page range.
    pub fn with_page_range(mut self, range: RangeInclusive<usize>) -> Self {
        self.page_selection = PageSelection::Range(range);
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_preface: true,
            include_table_of_contents: true,
            indent_width: 2,
            page_selection: PageSelection::All,
        }
    }
}

/// Selection of pages by overall page number (1-indexed).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// Every page
    #[default]
    All,
    /// An inclusive range of pages
    Range(RangeInclusive<usize>),
    /// Specific pages, sorted and without duplicates
    Pages(Vec<usize>),
}

impl PageSelection {
    /// Check if a page number is selected.
    pub fn includes(&self, page: usize) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.binary_search(&page).is_ok(),
        }
    }

    /// Parse a page selection string (e.g., "1-10", "1,3,5,7-10").
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if s.is_empty() || s == "all" {
            return Ok(PageSelection::All);
        }

        if !s.contains(',') {
            if let Some((start, end)) = s.split_once('-') {
                let start = parse_page(start)?;
                let end = parse_page(end)?;
                return Ok(PageSelection::Range(start..=end));
            }
        }

        let mut pages = Vec::new();
        for part in s.split(',') {
            match part.split_once('-') {
                Some((start, end)) => pages.extend(parse_page(start)?..=parse_page(end)?),
                None => pages.push(parse_page(part)?),
            }
        }

        pages.sort_unstable();
        pages.dedup();
        Ok(PageSelection::Pages(pages))
    }
}

fn parse_page(s: &str) -> Result<usize, String> {
    s.trim()
        .parse()
        .map_err(|_| format!("Invalid page number: {:?}", s.trim()))
}
