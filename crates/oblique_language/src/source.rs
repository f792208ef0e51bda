//! Loading and preprocessing of source text.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use oblique_foundation::{Error, ErrorKind, Result};

/// Reads a document from disk.
///
/// # Errors
///
/// Returns [`ErrorKind::Io`] if the file cannot be read as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| {
        Error::new(ErrorKind::Io {
            path: path.to_path_buf(),
            source,
        })
    })
}

/// Removes the leading whitespace common to every non-blank line.
///
/// Lines holding only whitespace are emptied and do not count towards the
/// common prefix. Spaces and tabs are compared literally. Text that needs no
/// change is returned borrowed.
#[must_use]
pub fn dedent(text: &str) -> Cow<'_, str> {
    let margin = text
        .split_inclusive('\n')
        .filter(|line| !is_blank(line))
        .map(leading_whitespace)
        .reduce(common_prefix)
        .unwrap_or("");

    let needs_change = !margin.is_empty()
        || text
            .split_inclusive('\n')
            .any(|line| is_blank(line) && line != line_ending(line));
    if !needs_change {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        if is_blank(line) {
            out.push_str(line_ending(line));
        } else {
            out.push_str(&line[margin.len()..]);
        }
    }
    Cow::Owned(out)
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn leading_whitespace(line: &str) -> &str {
    let content = line.trim_start_matches([' ', '\t']);
    &line[..line.len() - content.len()]
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

fn line_ending(line: &str) -> &str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}
