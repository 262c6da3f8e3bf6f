//! BibTeX entry data structures

use serde::{Deserialize, Serialize};

/// A parsed BibTeX entry.
///
/// Only the fields the importer understands are kept; any other field name
/// found in the source is dropped by [`BibTeXEntry::set_field`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BibTeXEntry {
    /// Lowercased entry type (`article`, `inproceedings`, ...). Any token is accepted.
    #[serde(rename = "type")]
    pub entry_type: String,
    /// Citation key, trimmed. Not checked for uniqueness.
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booktitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl BibTeXEntry {
    /// Create an empty entry. The type is lowercased and the key trimmed.
    pub fn new(entry_type: &str, key: &str) -> Self {
        Self {
            entry_type: entry_type.to_lowercase(),
            key: key.trim().to_string(),
            ..Default::default()
        }
    }

    /// Store a normalized field value under its BibTeX name (case-insensitive).
    ///
    /// Returns `false` when the name is not one of the known fields, in which
    /// case the value is discarded. A later occurrence of the same field
    /// overwrites an earlier one.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name.to_lowercase().as_str() {
            "year" => {
                self.year = parse_year(&value);
                return true;
            }
            "title" => &mut self.title,
            "author" => &mut self.author,
            "journal" => &mut self.journal,
            "booktitle" => &mut self.booktitle,
            "pages" => &mut self.pages,
            "volume" => &mut self.volume,
            "number" => &mut self.number,
            "publisher" => &mut self.publisher,
            "doi" => &mut self.doi,
            "url" => &mut self.url,
            "abstract" => &mut self.abstract_text,
            "keywords" => &mut self.keywords,
            "isbn" => &mut self.isbn,
            "issn" => &mut self.issn,
            "editor" => &mut self.editor,
            "address" => &mut self.address,
            "month" => &mut self.month,
            "note" => &mut self.note,
            "location" => &mut self.location,
            _ => return false,
        };
        *slot = Some(value);
        true
    }
}

/// Read a year the way a lenient base-10 integer parse does: skip leading
/// whitespace, accept an optional sign, then take the leading digits.
/// Anything after the digits is ignored. No digits means no year.
pub(crate) fn parse_year(value: &str) -> Option<i32> {
    let s = value.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let year: i32 = rest[..digits_end].parse().ok()?;
    Some(if negative { -year } else { year })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_type_and_key() {
        let entry = BibTeXEntry::new("InProceedings", "  Smith2024 ");
        assert_eq!(entry.entry_type, "inproceedings");
        assert_eq!(entry.key, "Smith2024");
    }

    #[test]
    fn test_set_field_dispatch() {
        let mut entry = BibTeXEntry::new("article", "k");
        assert!(entry.set_field("Title", "A Great Paper".to_string()));
        assert!(entry.set_field("ABSTRACT", "Summary".to_string()));
        assert!(entry.set_field("year", "2024".to_string()));
        assert!(!entry.set_field("primaryclass", "cs.CL".to_string()));

        assert_eq!(entry.title.as_deref(), Some("A Great Paper"));
        assert_eq!(entry.abstract_text.as_deref(), Some("Summary"));
        assert_eq!(entry.year, Some(2024));
    }

    #[test]
    fn test_later_field_overwrites() {
        let mut entry = BibTeXEntry::new("misc", "k");
        entry.set_field("note", "first".to_string());
        entry.set_field("note", "second".to_string());
        assert_eq!(entry.note.as_deref(), Some("second"));
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2020"), Some(2020));
        assert_eq!(parse_year("2020}"), Some(2020));
        assert_eq!(parse_year(" 1999a"), Some(1999));
        assert_eq!(parse_year("-44"), Some(-44));
        assert_eq!(parse_year("forthcoming"), None);
        assert_eq!(parse_year(""), None);
    }

    #[test]
    fn test_unparsable_year_clears_previous() {
        let mut entry = BibTeXEntry::new("misc", "k");
        entry.set_field("year", "2001".to_string());
        entry.set_field("year", "n.d.".to_string());
        assert_eq!(entry.year, None);
    }
}
