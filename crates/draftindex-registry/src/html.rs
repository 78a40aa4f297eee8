//! Title extraction from pre-rendered spec documents.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::ExtractError;

/// Extract the text of the first complete `<title>` element.
///
/// The document is scanned line by line and scanning stops as soon as the
/// element closes; a title element that never closes yields `None`.
pub fn title_from_html(path: &Path) -> Result<Option<String>, ExtractError> {
    let file = File::open(path).map_err(|e| ExtractError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = BufReader::new(file);

    let mut scanner = TitleScanner::default();
    for line in reader.lines() {
        let line = line.map_err(|e| ExtractError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        scanner.feed(&line);
        if scanner.done {
            break;
        }
    }

    Ok(scanner.into_title())
}

/// Streaming scanner with just enough state to find one title element.
#[derive(Debug, Default)]
struct TitleScanner {
    in_title: bool,
    done: bool,
    buf: String,
}

impl TitleScanner {
    fn feed(&mut self, line: &str) {
        let mut rest = line;
        while !self.done {
            if !self.in_title {
                let Some(text_start) = find_title_start(rest) else {
                    return;
                };
                self.in_title = true;
                rest = &rest[text_start..];
            } else {
                match find_ignore_case(rest, "</title") {
                    Some(end) => {
                        self.buf.push_str(&rest[..end]);
                        self.done = true;
                    }
                    None => {
                        self.buf.push_str(rest);
                        self.buf.push('\n');
                        return;
                    }
                }
            }
        }
    }

    fn into_title(self) -> Option<String> {
        self.done.then_some(self.buf)
    }
}

/// Find a `<title>` start tag in `rest` and return the index just past its
/// closing `>`. Attributes are allowed; a start tag that does not finish on
/// this line is not matched.
fn find_title_start(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut from = 0;
    while let Some(found) = find_ignore_case(&rest[from..], "<title") {
        let open = from + found;
        let after = open + "<title".len();
        match bytes.get(after).copied() {
            Some(b'>') => return Some(after + 1),
            Some(c) if c.is_ascii_whitespace() => {
                return rest[after..].find('>').map(|close| after + close + 1);
            }
            // Some longer tag name, e.g. <titlebar>; keep looking.
            Some(_) => from = open + 1,
            None => return None,
        }
    }
    None
}

/// ASCII case-insensitive substring search, returning a byte index.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle.len())
        .find(|&i| haystack[i..i + needle.len()].eq_ignore_ascii_case(needle))
}
