//! Streaming page segmentation.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::error::{Error, Result};
use crate::model::{Line, Page, PAGE_BREAK};

use super::banner::Banner;

/// Iterator that turns a line-oriented input into pages.
///
/// Only the page under construction is held in memory; finished pages are
/// handed out as soon as the page break that ends them has been read.
///
/// A line starting with one or more page breaks closes the current page.
/// Every page break beyond the first stands for a blank page. What follows
/// the last page break is the first banner line of the next page; the banner
/// runs until the first blank line, after which body lines are numbered from 1.
pub struct PageReader<R> {
    reader: R,
    buffer: String,
    physical_line: usize,
    overall_line_number: usize,
    page_line_number: Option<usize>,
    overall_page_number: usize,
    current: Option<Page>,
    in_banner: bool,
    started: bool,
    finished: bool,
    ready: VecDeque<Page>,
}

impl<R: BufRead> PageReader<R> {
    /// Create a page reader over a buffered input.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            physical_line: 0,
            overall_line_number: 1,
            page_line_number: Some(1),
            overall_page_number: 1,
            current: None,
            in_banner: false,
            started: false,
            finished: false,
            ready: VecDeque::new(),
        }
    }

    /// Number of lines assigned so far.
    pub fn lines_read(&self) -> usize {
        self.overall_line_number - 1
    }

    fn consume(&mut self, text: String) -> Result<()> {
        self.physical_line += 1;

        if let Some(position) = text.find(PAGE_BREAK) {
            if position != 0 {
                return Err(Error::malformed(
                    self.physical_line,
                    "page break is not the first character of the line",
                ));
            }
        }

        if !self.started {
            self.started = true;
            self.current = Some(Page::new(self.overall_page_number));
        }

        if text.starts_with(PAGE_BREAK) {
            self.start_pages(text)
        } else {
            self.add_line(text);
            Ok(())
        }
    }

    /// Close the current page and open the page(s) introduced by a page-break line.
    fn start_pages(&mut self, text: String) -> Result<()> {
        if let Some(page) = self.current.take() {
            self.ready.push_back(page);
        }

        let segments: Vec<&str> = text.split(PAGE_BREAK).collect();

        // a lone page break only marks the end of the page before it
        if segments.len() == 2 && segments.iter().all(|s| s.is_empty()) {
            log::trace!("Page break marker after page {}", self.overall_page_number);
            return Ok(());
        }

        let blank_pages = &segments[1..segments.len() - 1];
        if blank_pages.iter().any(|s| !s.is_empty()) {
            return Err(Error::malformed(
                self.physical_line,
                "content between consecutive page breaks",
            ));
        }

        for _ in blank_pages {
            self.overall_page_number += 1;
            log::debug!("Blank page {}", self.overall_page_number);
            self.ready.push_back(Page::new(self.overall_page_number));
        }

        self.overall_page_number += 1;
        self.page_line_number = None;
        self.in_banner = true;

        let line = Line::new(text, self.overall_line_number, None, self.overall_page_number);
        let banner = Banner::parse(&line);

        let mut page = Page::new(self.overall_page_number);
        page.header_title = banner.title;
        page.header_number = banner.number;
        page.header_lines.push(line);
        self.current = Some(page);

        self.overall_line_number += 1;
        Ok(())
    }

    fn add_line(&mut self, text: String) {
        if self.current.is_none() {
            // only reachable when a lone page break is followed by more input
            log::warn!(
                "Content after a page break marker at line {}; starting a new page",
                self.physical_line
            );
            self.overall_page_number += 1;
            self.page_line_number = Some(1);
            self.in_banner = false;
        }
        let page_number = self.overall_page_number;
        let page = self.current.get_or_insert_with(|| Page::new(page_number));

        if self.in_banner {
            let line = Line::new(text, self.overall_line_number, None, page_number);
            if line.is_empty() {
                self.in_banner = false;
                self.page_line_number = Some(1);
            } else {
                Banner::extend_title(&mut page.header_title, &line);
            }
            page.header_lines.push(line);
        } else {
            let line = Line::new(
                text,
                self.overall_line_number,
                self.page_line_number,
                page_number,
            );
            page.body_lines.push(line);
            self.page_line_number = self.page_line_number.map(|n| n + 1);
        }

        self.overall_line_number += 1;
    }
}

impl<R: BufRead> Iterator for PageReader<R> {
    type Item = Result<Page>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(page) = self.ready.pop_front() {
                return Some(Ok(page));
            }
            if self.finished {
                return None;
            }

            self.buffer.clear();
            match self.reader.read_line(&mut self.buffer) {
                Ok(0) => {
                    self.finished = true;
                    if let Some(page) = self.current.take() {
                        self.ready.push_back(page);
                    }
                }
                Ok(_) => {
                    let text = std::mem::take(&mut self.buffer);
                    if let Err(e) = self.consume(text) {
                        self.finished = true;
                        self.ready.clear();
                        return Some(Err(e));
                    }
                }
                Err(e) => {
                    self.finished = true;
                    self.ready.clear();
                    return Some(Err(e.into()));
                }
            }
        }
    }
}
