//! BibTeX parsing for the Artigador article importer
//!
//! This crate turns the raw text of an uploaded `.bib` file into structured
//! entries and normalized article records:
//! - Entry tokenizer (`parse_bibtex`) with separately usable stages
//!   (`split_entries`, `split_fields`, `unescape_value`)
//! - Author list parsing with `<email>` annotations and "Last, First" inversion
//! - Mapping of an entry to the article shape consumed by the importer
//!
//! Nothing here performs I/O or fails on malformed content: unrecognized
//! blocks and fields are skipped and unparsable values are left empty.

mod article;
mod authors;
mod entry;
pub mod parser;

pub use article::{bibtex_entry_to_article, NormalizedArticle, UNTITLED};
pub use authors::{parse_authors, ParsedAuthor};
pub use entry::BibTeXEntry;
pub use parser::{parse_bibtex, split_entries, split_fields, unescape_value, RawEntry, RawField};
