//! Page-range and identifier extraction for imported articles
//!
//! - Page ranges: `"45-60"` → start, end and page count. Two parsers exist
//!   with different acceptance rules: [`parse_pages`] (single hyphen, used
//!   when editing an article) and [`parse_import_pages`] (hyphen, en-dash or
//!   em-dash runs, used for BibTeX imports).
//! - arXiv IDs from arxiv.org abstract/PDF links
//!
//! Unparsable input gives empty results; nothing here returns an error.

pub mod extractors;
pub mod pages;

pub use extractors::*;
pub use pages::*;
