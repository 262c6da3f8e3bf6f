//! BibTeX tokenizer
//!
//! Parsing runs in three explicit stages:
//! - [`split_entries`] isolates `@type{key, ...}` blocks
//! - [`split_fields`] isolates `name = value` pairs inside a block
//! - [`unescape_value`] turns a raw field value into its final text
//!
//! A block extends from its `@type{` marker up to the next marker or the end
//! of the input. Outer braces are never balanced against the entry's closing
//! `}`; brace nesting is only considered inside a single field value, and only
//! one level deep. Malformed blocks and fields are skipped, never reported.

use lazy_static::lazy_static;
use regex::Regex;

use super::entry::BibTeXEntry;

lazy_static! {
    static ref LINE_COMMENT: Regex = Regex::new(r"(?m)%.*$").unwrap();

    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    // `@type{` entry marker; also the boundary of the previous block
    static ref ENTRY_MARKER: Regex = Regex::new(r"@([A-Za-z0-9_]+)\s*\{").unwrap();

    // name = {braced, one nested level} | "quoted" | bare run up to a comma
    static ref FIELD: Regex = Regex::new(
        r#"([A-Za-z0-9_]+)\s*=\s*(\{(?:[^{}]|\{[^{}]*\})*\}|"[^"]*"|[^,]+)\s*,?"#
    ).unwrap();
}

/// One `@type{key, ...}` block as found in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEntry<'a> {
    /// Entry type exactly as written (not yet lowercased)
    pub entry_type: &'a str,
    /// Citation key, trimmed
    pub key: &'a str,
    /// Everything after the key's comma up to the next entry marker
    pub body: &'a str,
}

/// One `name = value` pair inside an entry body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawField<'a> {
    pub name: &'a str,
    /// Value including its delimiters (`{...}`, `"..."`, or a bare run)
    pub raw_value: &'a str,
}

/// Parse BibTeX text into entries, in source order.
///
/// Never fails: text without any recognizable block yields an empty vector.
pub fn parse_bibtex(content: &str) -> Vec<BibTeXEntry> {
    let cleaned = clean_content(content);

    let entries: Vec<BibTeXEntry> = split_entries(&cleaned)
        .into_iter()
        .map(|raw| build_entry(&raw))
        .collect();

    tracing::debug!(entries = entries.len(), "parsed BibTeX content");
    entries
}

/// Drop `%` line comments, then collapse every whitespace run to one space.
fn clean_content(content: &str) -> String {
    let without_comments = LINE_COMMENT.replace_all(content, "");
    WHITESPACE_RUN
        .replace_all(&without_comments, " ")
        .into_owned()
}

fn build_entry(raw: &RawEntry<'_>) -> BibTeXEntry {
    let mut entry = BibTeXEntry::new(raw.entry_type, raw.key);
    for field in split_fields(raw.body) {
        if !entry.set_field(field.name, unescape_value(field.raw_value)) {
            tracing::debug!(key = %entry.key, field = field.name, "ignoring unknown field");
        }
    }
    entry
}

/// Isolate entry blocks.
///
/// Each block runs from an `@type{` marker to the next marker (or the end of
/// the text). The key is the text up to the first comma of the block; blocks
/// without a comma or with an empty key are skipped.
pub fn split_entries(text: &str) -> Vec<RawEntry<'_>> {
    let markers: Vec<_> = ENTRY_MARKER.captures_iter(text).collect();
    let mut entries = Vec::with_capacity(markers.len());

    for (i, caps) in markers.iter().enumerate() {
        let (Some(whole), Some(entry_type)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let block_end = markers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |m| m.start());
        let block = &text[whole.end()..block_end];

        let Some((key, body)) = block.split_once(',') else {
            tracing::debug!(entry_type = entry_type.as_str(), "skipping block without key");
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            tracing::debug!(entry_type = entry_type.as_str(), "skipping block with empty key");
            continue;
        }

        entries.push(RawEntry {
            entry_type: entry_type.as_str(),
            key,
            body,
        });
    }

    entries
}

/// Isolate `name = value` pairs in an entry body, in order.
///
/// The trailing comma after a value is optional.
pub fn split_fields(body: &str) -> Vec<RawField<'_>> {
    FIELD
        .captures_iter(body)
        .filter_map(|caps| {
            Some(RawField {
                name: caps.get(1)?.as_str(),
                raw_value: caps.get(2)?.as_str(),
            })
        })
        .collect()
}

/// Normalize a raw field value.
///
/// Strips one layer of `{...}` or `"..."` delimiters, resolves the `\"`,
/// `\'` and `\\` escapes, collapses whitespace and trims. A bare value that
/// swallowed the entry's closing `}` has that brace removed first.
pub fn unescape_value(raw: &str) -> String {
    let value = strip_unmatched_closing_brace(raw.trim());
    let inner = strip_delimiters(value);
    let unescaped = resolve_escapes(inner);
    unescaped.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_unmatched_closing_brace(value: &str) -> &str {
    let opening = value.matches('{').count();
    let closing = value.matches('}').count();
    if closing > opening {
        value.strip_suffix('}').map_or(value, str::trim_end)
    } else {
        value
    }
}

fn strip_delimiters(value: &str) -> &str {
    if value.len() >= 2 {
        if let Some(inner) = value.strip_prefix('{').and_then(|v| v.strip_suffix('}')) {
            return inner;
        }
        if let Some(inner) = value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
            return inner;
        }
    }
    value
}

fn resolve_escapes(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if matches!(next, '"' | '\'' | '\\') {
                    result.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_content_strips_comments_and_whitespace() {
        let input = "% header comment\n@article{k,\n\ttitle = {T}, % trailing\n}";
        assert_eq!(clean_content(input), " @article{k, title = {T}, }");
    }

    #[test]
    fn test_split_entries_uses_next_marker_as_boundary() {
        let text = "@misc{a, title={A}} @misc{b, title={B}}";
        let entries = split_entries(text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].entry_type, "misc");
        assert_eq!(entries[0].key, "a");
        assert_eq!(entries[0].body, " title={A}} ");
        assert_eq!(entries[1].key, "b");
        assert_eq!(entries[1].body, " title={B}}");
    }

    #[test]
    fn test_split_entries_skips_block_without_key() {
        let text = "@misc{nokey} @article{k, title={T}}";
        let entries = split_entries(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key, "k");
    }

    #[test]
    fn test_split_entries_ignores_at_sign_in_email() {
        let text = "@article{k, author={Jo <jo@x.org>}, title={T}}";
        let entries = split_entries(text);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].body.contains("jo@x.org"));
    }

    #[test]
    fn test_split_fields_value_forms() {
        let body = r#" title = {A {B} C}, journal = "J Q", year = 2020}"#;
        let fields = split_fields(body);
        assert_eq!(
            fields,
            vec![
                RawField {
                    name: "title",
                    raw_value: "{A {B} C}"
                },
                RawField {
                    name: "journal",
                    raw_value: "\"J Q\""
                },
                RawField {
                    name: "year",
                    raw_value: "2020}"
                },
            ]
        );
    }

    #[test]
    fn test_unescape_value() {
        assert_eq!(unescape_value("{Sample Title}"), "Sample Title");
        assert_eq!(unescape_value("\"Quoted\""), "Quoted");
        assert_eq!(unescape_value("{  spaced \t out  }"), "spaced out");
        assert_eq!(unescape_value(r#"{Say \"hi\" \'x\' a\\b}"#), r#"Say "hi" 'x' a\b"#);
        assert_eq!(unescape_value(r"{\LaTeX}"), r"\LaTeX");
    }

    #[test]
    fn test_unescape_value_strips_swallowed_entry_brace() {
        assert_eq!(unescape_value("jan}"), "jan");
        assert_eq!(unescape_value("{{A {Nested} Title}}}"), "{A {Nested} Title}");
    }

    #[test]
    fn test_unescape_value_keeps_one_inner_layer() {
        assert_eq!(unescape_value("{{A {Nested} Title}}"), "{A {Nested} Title}");
    }
}
