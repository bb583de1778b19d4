//! Plain text rendering: an indented outline of the document and a page listing.

use std::fmt::Write;

use crate::error::{Error, Result};
use crate::model::{Document, File, Outcome, Response, Vote};

use super::visitor::{walk, Block, DefaultVisitor, DocumentVisitor, VisitorAction};
use super::RenderOptions;

/// Convert a document to an indented text outline.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    to_text_with_visitor(doc, options, &mut DefaultVisitor)
}

/// Convert a document to an indented text outline, letting `visitor` replace or skip blocks.
pub fn to_text_with_visitor<V: DocumentVisitor + ?Sized>(
    doc: &Document,
    options: &RenderOptions,
    visitor: &mut V,
) -> Result<String> {
    let mut output = String::new();
    write_front_matter(&mut output, doc, options).map_err(render_error)?;

    let mut failure = None;
    walk(doc, visitor, |block, depth, action| {
        if failure.is_some() {
            return;
        }
        if let Err(e) = write_block(&mut output, block, depth, action, options.indent_width) {
            failure = Some(e);
        }
    });
    if let Some(e) = failure {
        return Err(render_error(e));
    }

    Ok(output.trim_end().to_string())
}

/// One summary line per selected page.
pub fn to_page_list(file: &File, options: &RenderOptions) -> String {
    let mut output = String::new();
    for page in file
        .pages
        .iter()
        .filter(|page| options.page_selection.includes(page.overall_number))
    {
        output.push_str(&page.to_string());
        output.push('\n');
    }
    output
}

fn render_error(e: std::fmt::Error) -> Error {
    Error::Render(format!("text formatting error: {}", e))
}

fn write_front_matter(
    out: &mut String,
    doc: &Document,
    options: &RenderOptions,
) -> std::fmt::Result {
    if options.include_preface {
        if let Some(preface) = &doc.preface {
            if let Some(identifier) = &preface.identifier {
                writeln!(out, "ISSN: {}", identifier)?;
            }
            if let Some(session) = &preface.session {
                writeln!(out, "Session: {}", session)?;
            }
            if let Some(date) = preface.session_date {
                writeln!(out, "Date: {}", date.format("%A, %-d %B %Y"))?;
            }
            writeln!(out)?;
        }
    }

    if options.include_table_of_contents {
        if let Some(toc) = &doc.table_of_contents {
            writeln!(out, "Contents: lines {}", toc)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_block(
    out: &mut String,
    block: Block<'_>,
    depth: usize,
    action: &VisitorAction,
    indent_width: usize,
) -> std::fmt::Result {
    let indent = " ".repeat(depth * indent_width);
    let inner = " ".repeat((depth + 1) * indent_width);

    if let Some(replacement) = action.replacement() {
        return writeln!(out, "{}{}", inner, replacement);
    }

    match block {
        Block::Section(section) => {
            let title = section.title();
            if title.is_empty() {
                writeln!(out, "{}(untitled section)", indent)
            } else {
                writeln!(out, "{}{}", indent, title)
            }
        }
        Block::Paragraph(para) => writeln!(out, "{}{}", inner, para.plain_text()),
        Block::Vote(vote) => writeln!(out, "{}{}", inner, vote_summary(vote)),
        Block::Attendance(attendance) => writeln!(
            out,
            "{}Attendance: {}",
            inner,
            attendance.names().join(", ")
        ),
        Block::SectionEnd(_) if depth == 0 => writeln!(out),
        Block::SectionEnd(_) => Ok(()),
    }
}

fn vote_summary(vote: &Vote) -> String {
    let mut summary = format!(
        "Division: {}",
        vote.question_text().unwrap_or_else(|| "(no question)".to_string())
    );

    if let (Some(ayes), Some(noes)) = (vote.declared_yes_count(), vote.declared_no_count()) {
        let _ = write!(summary, " (ayes {}, noes {})", ayes, noes);
    }

    match vote.resolution() {
        Some(Response::Affirmative) => summary.push_str(" - resolved in the affirmative"),
        Some(Response::Negative) => summary.push_str(" - negatived"),
        None => {}
    }

    match vote.outcome() {
        Some(Outcome::Agreed) => summary.push_str(" - agreed to"),
        Some(Outcome::Negatived) => summary.push_str(" - not agreed to"),
        None => {}
    }
    summary
}
