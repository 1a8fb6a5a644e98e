//! Dictionary parsing
//!
//! The source dictionary is a plain-text file made of blocks separated by blank
//! lines. A block starts with a term line: the term begins the line with a
//! capital letter and runs to the first `.` or `,`; the rest of the block is the
//! definition. Blocks that don't match this shape are skipped.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::error::{DictionaryError, Result};

fn entry_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Term line through first '.' or ',', then the non-blank definition
        // lines, terminated by a blank line.
        Regex::new(r"(?m)^(?P<term>[A-Z].*?[.,]) (?P<def>(?:.+\n)+)\n")
            .expect("entry pattern is valid")
    })
}

/// Strip newlines and extraneous whitespace from a raw definition block
fn normalize_definition(raw: &str) -> String {
    raw.replace("  ", " ").replace('\n', " ").trim().to_string()
}

/// Parse raw dictionary text into a term -> definition map.
///
/// Duplicate terms are overwritten by their last occurrence.
pub fn parse(raw: &str) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();

    for capture in entry_pattern().captures_iter(raw) {
        let term = capture["term"].to_string();
        let definition = normalize_definition(&capture["def"]);
        entries.insert(term, definition);
    }

    debug!("parsed {} dictionary entries", entries.len());
    entries
}

/// Read and parse a dictionary file, expanding `~` in the path.
///
/// An unreadable file is an error; no partial results are returned.
pub fn load(path: &str) -> Result<BTreeMap<String, String>> {
    let expanded = shellexpand::tilde(path).to_string();
    let raw = std::fs::read_to_string(&expanded).map_err(DictionaryError::ReadError)?;
    Ok(parse(&raw))
}
