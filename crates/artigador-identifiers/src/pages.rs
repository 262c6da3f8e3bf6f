//! Page-range parsing

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    // Article edit path: exactly one hyphen
    static ref HYPHEN_RANGE: Regex = Regex::new(r"^(\d+)\s*-\s*(\d+)$").unwrap();

    // BibTeX import path: runs of hyphen, en-dash or em-dash ("10--20", "10–20")
    static ref DASH_RANGE: Regex = Regex::new(r"^(\d+)\s*[-–—]+\s*(\d+)$").unwrap();
}

/// First page, last page and page count of an article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRange {
    pub start_page: Option<u32>,
    pub end_page: Option<u32>,
    pub page_count: Option<u32>,
}

impl PageRange {
    /// `None` when the range is descending or its page count does not fit.
    fn span(start: u32, end: u32) -> Option<Self> {
        let count = end.checked_sub(start)?.checked_add(1)?;
        Some(Self {
            start_page: Some(start),
            end_page: Some(end),
            page_count: Some(count),
        })
    }

    fn count_only(count: u32) -> Self {
        Self {
            page_count: Some(count),
            ..Self::default()
        }
    }

    /// True when nothing could be parsed
    pub fn is_empty(&self) -> bool {
        self.start_page.is_none() && self.end_page.is_none() && self.page_count.is_none()
    }
}

/// Parse a page string as entered when editing an article.
///
/// `"45-60"` gives 45, 60 and 16 pages. A bare number is a page count with no
/// start or end; it must be the whole string and non-negative, so `"-5"` and
/// `"12abc"` give nothing. Anything else, including a descending range, gives
/// nothing.
pub fn parse_pages(raw: Option<&str>) -> PageRange {
    let Some(raw) = raw else {
        return PageRange::default();
    };
    let trimmed = raw.trim();

    if let Some(range) = match_range(&HYPHEN_RANGE, trimmed) {
        return range;
    }

    trimmed
        .parse::<u32>()
        .map(PageRange::count_only)
        .unwrap_or_default()
}

/// Parse a BibTeX `pages` value during import.
///
/// Accepts `-`, `–` and `—` separators, repeated (`"10--20"`). Only ascending
/// ranges are recognized; a single number gives nothing.
pub fn parse_import_pages(raw: Option<&str>) -> PageRange {
    raw.and_then(|raw| match_range(&DASH_RANGE, raw.trim()))
        .unwrap_or_default()
}

fn match_range(pattern: &Regex, text: &str) -> Option<PageRange> {
    let caps = pattern.captures(text)?;
    let start: u32 = caps.get(1)?.as_str().parse().ok()?;
    let end: u32 = caps.get(2)?.as_str().parse().ok()?;
    PageRange::span(start, end)
}
