//! Physical page recovery.
//!
//! The reader makes one streaming pass over the input and groups its lines
//! into pages. It never looks at the logical structure of the text.

mod banner;
mod page_reader;

pub use banner::Banner;
pub use page_reader::PageReader;

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::File;

/// Read a transcript from disk.
///
/// Fails with [`Error::NotFound`] before anything is read when the path
/// does not exist.
pub fn read_path(path: impl AsRef<Path>) -> Result<File> {
    let path = path.as_ref();
    let handle = match fs::File::open(path) {
        Ok(handle) => handle,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    read_from(BufReader::new(handle), path)
}

/// Read a transcript held in memory.
pub fn read_str(text: &str, path: impl Into<PathBuf>) -> Result<File> {
    read_from(text.as_bytes(), path)
}

/// Read a transcript from any buffered source.
pub fn read_from<R: BufRead>(reader: R, path: impl Into<PathBuf>) -> Result<File> {
    let mut file = File::new(path);
    for page in PageReader::new(reader) {
        file.pages.push(page?);
    }

    log::info!(
        "Read {} pages, {} lines from {}",
        file.page_count(),
        file.line_count(),
        file.path.display()
    );
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_str_sets_path() {
        let file = read_str("line\n", "memory.txt").unwrap();
        assert_eq!(file.path, PathBuf::from("memory.txt"));
        assert_eq!(file.page_count(), 1);
        assert_eq!(file.line_count(), 1);
    }

    #[test]
    fn test_read_missing_path() {
        let result = read_path("/nonexistent/hansard/transcript.txt");
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_read_stops_at_first_error() {
        let result = read_str("ok\nbad\u{c}\n", "memory.txt");
        assert!(matches!(result, Err(Error::MalformedInput { line: 2, .. })));
    }
}
