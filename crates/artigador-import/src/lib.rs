//! Import preparation for BibTeX uploads
//!
//! Turns the text of an uploaded `.bib` file into import candidates: the
//! normalized article, page range, arXiv ID and expected PDF file name for
//! each entry, plus per-entry failures and warnings. Persisting the
//! candidates is left to the caller.

pub mod config;
pub mod error;
pub mod import;

pub use config::ImportConfig;
pub use error::{ConfigError, ImportError};
pub use import::{prepare_import, ImportCandidate, ImportFailure, ImportPreview};
