//! Author list parsing
//!
//! Splits a BibTeX `author` field on the word `and` and normalizes each
//! author to a display name. An author may carry an e-mail address written
//! as `Name <address>`.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref AUTHOR_SEPARATOR: Regex = Regex::new(r"(?i)\s+and\s+").unwrap();

    static ref NAME_WITH_EMAIL: Regex = Regex::new(r"^(.+?)\s*<([^>]+)>$").unwrap();
}

/// One author taken from an `author` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAuthor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Never filled in from BibTeX text; left for the caller to enrich.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
}

impl ParsedAuthor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            affiliation: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Parse a BibTeX author field into authors, keeping source order.
///
/// Duplicates are kept. A surname that is literally the word "and" splits
/// the list there.
pub fn parse_authors(raw: &str) -> Vec<ParsedAuthor> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    AUTHOR_SEPARATOR
        .split(raw)
        .filter_map(parse_single_author)
        .collect()
}

fn parse_single_author(piece: &str) -> Option<ParsedAuthor> {
    let piece = piece.trim();
    if piece.is_empty() {
        return None;
    }

    if let Some(caps) = NAME_WITH_EMAIL.captures(piece) {
        let name = caps.get(1)?.as_str().trim();
        let email = caps.get(2)?.as_str().trim();
        return Some(ParsedAuthor::new(name).with_email(email));
    }

    // "Last, First" -> "First Last"
    if let Some((last, first)) = piece.split_once(',') {
        let name = format!("{} {}", first.trim(), last.trim());
        return Some(ParsedAuthor::new(name.trim()));
    }

    Some(ParsedAuthor::new(piece))
}
