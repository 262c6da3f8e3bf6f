//! BibTeXEntry → article conversion

use serde::{Deserialize, Serialize};

use super::authors::{parse_authors, ParsedAuthor};
use super::entry::BibTeXEntry;

/// Title used when an entry has none; the importer never stores an empty title.
pub const UNTITLED: &str = "Untitled";

/// The article shape handed to the importer for one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedArticle {
    pub title: String,
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    /// Publication order follows the source `author` field.
    pub authors: Vec<ParsedAuthor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

/// Convert a parsed entry into the importer's article shape.
pub fn bibtex_entry_to_article(entry: &BibTeXEntry) -> NormalizedArticle {
    NormalizedArticle {
        title: entry.title.clone().unwrap_or_else(|| UNTITLED.to_string()),
        abstract_text: entry.abstract_text.clone(),
        keywords: entry.keywords.clone(),
        doi: entry.doi.clone(),
        url: entry.url.clone(),
        pages: entry.pages.clone(),
        authors: entry.author.as_deref().map(parse_authors).unwrap_or_default(),
        venue: synthesize_venue(entry),
        year: entry.year,
    }
}

/// Journal (or booktitle), then `, Vol. <volume>`, then `(<number>)`.
/// Volume and number stand alone as `Vol. <v>` / `No. <n>` when nothing precedes them.
fn synthesize_venue(entry: &BibTeXEntry) -> Option<String> {
    let mut venue = entry.journal.clone().or_else(|| entry.booktitle.clone());

    if let Some(volume) = &entry.volume {
        venue = Some(match venue {
            Some(v) => format!("{v}, Vol. {volume}"),
            None => format!("Vol. {volume}"),
        });
    }

    if let Some(number) = &entry.number {
        venue = Some(match venue {
            Some(v) => format!("{v}({number})"),
            None => format!("No. {number}"),
        });
    }

    venue
}
