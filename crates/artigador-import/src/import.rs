//! BibTeX import preparation

use std::collections::HashSet;

use artigador_bibtex::{bibtex_entry_to_article, parse_bibtex, BibTeXEntry, NormalizedArticle};
use artigador_identifiers::{extract_arxiv_id, parse_import_pages, PageRange};
use serde::{Deserialize, Serialize};

use crate::config::ImportConfig;
use crate::error::ImportError;

/// An entry ready to be persisted by the importer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportCandidate {
    pub cite_key: String,
    pub entry_type: String,
    pub article: NormalizedArticle,
    pub pages: PageRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arxiv_id: Option<String>,
    /// Name of the PDF to look for in the upload archive
    pub pdf_file_name: String,
}

/// An entry that cannot be imported, with a message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportFailure {
    pub cite_key: String,
    pub message: String,
}

/// Outcome of preparing one BibTeX upload, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportPreview {
    pub candidates: Vec<ImportCandidate>,
    pub failures: Vec<ImportFailure>,
    pub warnings: Vec<String>,
}

impl ImportPreview {
    pub fn success_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
}

/// Parse an uploaded BibTeX file and prepare every entry for import.
///
/// Entries are handled one at a time in source order, so the reported
/// successes and failures are deterministic.
pub fn prepare_import(
    content: &str,
    config: &ImportConfig,
) -> Result<ImportPreview, ImportError> {
    if content.trim().is_empty() {
        return Err(ImportError::EmptyInput);
    }

    let entries = parse_bibtex(content);
    if entries.is_empty() {
        return Err(ImportError::NoEntries);
    }

    let mut preview = ImportPreview::default();
    let mut seen_keys = HashSet::new();

    for entry in &entries {
        if config.warn_on_duplicate_keys && !seen_keys.insert(entry.key.as_str()) {
            preview
                .warnings
                .push(format!("{}: duplicate citation key", entry.key));
        }

        match prepare_entry(entry, config) {
            Ok(candidate) => preview.candidates.push(candidate),
            Err(failure) => {
                tracing::warn!(key = %failure.cite_key, "{}", failure.message);
                preview.failures.push(failure);
            }
        }
    }

    tracing::info!(
        imported = preview.success_count(),
        failed = preview.failure_count(),
        "prepared BibTeX import"
    );
    Ok(preview)
}

fn prepare_entry(
    entry: &BibTeXEntry,
    config: &ImportConfig,
) -> Result<ImportCandidate, ImportFailure> {
    let article = bibtex_entry_to_article(entry);

    if config.require_authors && article.authors.is_empty() {
        return Err(ImportFailure {
            cite_key: entry.key.clone(),
            message: format!("Entry {}: author is required", entry.key),
        });
    }

    Ok(ImportCandidate {
        cite_key: entry.key.clone(),
        entry_type: entry.entry_type.clone(),
        pages: parse_import_pages(entry.pages.as_deref()),
        arxiv_id: extract_arxiv_id(entry.url.as_deref()),
        pdf_file_name: config.pdf_file_name(&entry.key),
        article,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let config = ImportConfig::default();
        assert_eq!(prepare_import("", &config), Err(ImportError::EmptyInput));
        assert_eq!(prepare_import(" \n ", &config), Err(ImportError::EmptyInput));
    }

    #[test]
    fn test_no_entries() {
        let result = prepare_import("not a bibtex file", &ImportConfig::default());
        assert_eq!(result, Err(ImportError::NoEntries));
    }

    #[test]
    fn test_candidate_fields() {
        let bibtex = "@article{mykey2023, title={T}, author={Doe, Jane}, pages={10--20}, url={https://arxiv.org/abs/2301.12345v2}}";
        let preview = prepare_import(bibtex, &ImportConfig::default()).unwrap();

        assert_eq!(preview.success_count(), 1);
        let candidate = &preview.candidates[0];
        assert_eq!(candidate.cite_key, "mykey2023");
        assert_eq!(candidate.entry_type, "article");
        assert_eq!(candidate.article.authors[0].name, "Jane Doe");
        assert_eq!(candidate.pages.page_count, Some(11));
        assert_eq!(candidate.arxiv_id.as_deref(), Some("2301.12345"));
        assert_eq!(candidate.pdf_file_name, "mykey2023.pdf");
    }

    #[test]
    fn test_missing_author_fails_entry() {
        let bibtex = "@misc{a, title={No authors}} @misc{b, title={Fine}, author={X Y}}";
        let preview = prepare_import(bibtex, &ImportConfig::default()).unwrap();

        assert_eq!(preview.success_count(), 1);
        assert_eq!(preview.failure_count(), 1);
        assert_eq!(preview.failures[0].cite_key, "a");
        assert_eq!(preview.failures[0].message, "Entry a: author is required");
        assert_eq!(preview.candidates[0].cite_key, "b");
    }

    #[test]
    fn test_authors_optional_when_configured() {
        let config = ImportConfig {
            require_authors: false,
            ..ImportConfig::default()
        };
        let preview = prepare_import("@misc{a, title={No authors}}", &config).unwrap();
        assert_eq!(preview.success_count(), 1);
        assert!(preview.failures.is_empty());
    }

    #[test]
    fn test_duplicate_key_warning() {
        let bibtex = "@misc{k, author={A}} @misc{k, author={B}} @misc{k, author={C}}";
        let preview = prepare_import(bibtex, &ImportConfig::default()).unwrap();
        assert_eq!(preview.success_count(), 3);
        assert_eq!(preview.warnings.len(), 2);

        let quiet = ImportConfig {
            warn_on_duplicate_keys: false,
            ..ImportConfig::default()
        };
        assert!(prepare_import(bibtex, &quiet).unwrap().warnings.is_empty());
    }
}
