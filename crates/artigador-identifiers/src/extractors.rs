//! Identifier extraction from article links

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // New-style arXiv IDs (YYMM.NNNNN) in abs/ or pdf/ links; version suffix dropped
    static ref ARXIV_URL_REGEX: Regex = Regex::new(
        r"(?i)arxiv\.org/(?:abs|pdf)/(?P<id>\d{4}\.\d{4,5})(?:v\d+)?"
    ).unwrap();
}

/// Extract the arXiv ID from an arxiv.org abstract or PDF URL.
///
/// `https://arxiv.org/pdf/2301.12345v2` gives `2301.12345`.
pub fn extract_arxiv_id(url: Option<&str>) -> Option<String> {
    ARXIV_URL_REGEX
        .captures(url?)
        .and_then(|cap| cap.name("id"))
        .map(|m| m.as_str().to_string())
}
