//! Integration tests for page recovery.

use std::io::Write;

use hansard::reader::{read_from, read_path, read_str, PageReader};
use hansard::{read_file, Error};

const SITTING: &str = include_str!("fixtures/sitting.txt");

#[test]
fn test_page_layout() {
    let file = read_str(SITTING, "sitting.txt").unwrap();
    assert_eq!(file.page_count(), 6);

    let summary: Vec<(usize, Option<u32>, usize, usize)> = file
        .pages
        .iter()
        .map(|p| {
            (
                p.overall_number,
                p.header_number,
                p.header_lines.len(),
                p.body_lines.len(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            (1, None, 0, 9),
            (2, None, 2, 5),
            (3, None, 0, 0),
            (4, Some(205), 2, 13),
            (5, Some(206), 2, 19),
            (6, Some(296), 2, 5),
        ]
    );
}

#[test]
fn test_banner_titles() {
    let file = read_str(SITTING, "sitting.txt").unwrap();
    let titles: Vec<Option<&str>> = file
        .pages
        .iter()
        .map(|p| p.header_title.as_deref())
        .collect();
    assert_eq!(
        titles,
        vec![
            None,
            Some("Table of Contents – Thursday, 6 February 2020"),
            None,
            Some("Legislative Assembly"),
            Some("Legislative Assembly"),
            Some("Attendance"),
        ]
    );
}

#[test]
fn test_overall_line_numbers_are_contiguous() {
    let file = read_str(SITTING, "sitting.txt").unwrap();
    let numbers: Vec<usize> = file.lines().map(|l| l.overall_line_number()).collect();
    assert_eq!(numbers, (1..=59).collect::<Vec<_>>());
}

#[test]
fn test_page_line_numbers_restart_after_banner() {
    let file = read_str(SITTING, "sitting.txt").unwrap();
    for page in &file.pages {
        for line in &page.header_lines {
            assert_eq!(line.page_line_number(), None);
            assert_eq!(line.page_number(), page.overall_number);
        }
        for (i, line) in page.body_lines.iter().enumerate() {
            assert_eq!(line.page_line_number(), Some(i + 1));
            assert_eq!(line.page_number(), page.overall_number);
        }
    }
}

#[test]
fn test_lone_page_break_contributes_no_line() {
    let file = read_str(SITTING, "sitting.txt").unwrap();
    assert!(file.lines().all(|l| l.raw_text() != "\u{c}"));
    let last = file.pages.last().unwrap();
    assert_eq!(
        last.body_lines.last().unwrap().raw_text(),
        "Frecklington, Mander\n"
    );
}

#[test]
fn test_page_reader_streams_pages() {
    let mut pages = PageReader::new(SITTING.as_bytes());
    let first = pages.next().unwrap().unwrap();
    assert_eq!(first.overall_number, 1);
    assert_eq!(pages.lines_read(), 10);
    assert_eq!(pages.count(), 5);
}

#[test]
fn test_read_path_from_disk() {
    let mut temp = tempfile::NamedTempFile::new().unwrap();
    temp.write_all(SITTING.as_bytes()).unwrap();

    let from_disk = read_path(temp.path()).unwrap();
    let in_memory = read_from(SITTING.as_bytes(), temp.path()).unwrap();
    assert_eq!(from_disk, in_memory);
    assert_eq!(from_disk.path, temp.path());
}

#[test]
fn test_read_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    match read_file(&missing) {
        Err(Error::NotFound(path)) => assert_eq!(path, missing),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_page_break_inside_line_is_rejected() {
    let input = "first\nsecond\nthird \u{c}fourth\n";
    match read_str(input, "bad.txt") {
        Err(Error::MalformedInput { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected MalformedInput, got {:?}", other),
    }
}

#[test]
fn test_crlf_line_endings() {
    let file = read_str(
        "one\r\n\u{c}205  Legislative Assembly  6 Feb 2020\r\n\r\nbody\r\n",
        "crlf.txt",
    )
    .unwrap();
    let page = &file.pages[1];
    assert_eq!(page.header_number, Some(205));
    assert_eq!(page.body_lines[0].normalised(), "body");
    assert_eq!(page.body_lines[0].page_line_number(), Some(1));
}
