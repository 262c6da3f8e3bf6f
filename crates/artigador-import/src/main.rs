//! artigador-bibtex
//!
//! Command line front end for the BibTeX import core. Reads `.bib` files and
//! prints parsed entries, article records or an import preview as JSON.

use std::path::{Path, PathBuf};

use artigador_bibtex::{bibtex_entry_to_article, parse_authors, parse_bibtex, NormalizedArticle};
use artigador_identifiers::{extract_arxiv_id, parse_import_pages, parse_pages};
use artigador_import::{prepare_import, ImportConfig};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "artigador-bibtex", version, about = "Parse and preview BibTeX imports")]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the entries parsed from a BibTeX file
    Parse { file: PathBuf },
    /// Print the article record for every entry
    Articles { file: PathBuf },
    /// Prepare a file for import and print candidates, failures and warnings
    Import {
        file: PathBuf,
        /// TOML config file (defaults to $ARTIGADOR_IMPORT_CONFIG)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Split an author field into authors
    Authors { text: String },
    /// Parse a page range
    Pages {
        text: String,
        /// Use the import rules (dash variants, no bare counts)
        #[arg(long)]
        import: bool,
    },
    /// Extract an arXiv ID from a URL
    Arxiv { url: String },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Parse { file } => {
            let entries = parse_bibtex(&read_input(&file)?);
            print_json(&entries, cli.pretty)
        }
        Command::Articles { file } => {
            let articles: Vec<NormalizedArticle> = parse_bibtex(&read_input(&file)?)
                .iter()
                .map(bibtex_entry_to_article)
                .collect();
            print_json(&articles, cli.pretty)
        }
        Command::Import { file, config } => {
            let config = ImportConfig::resolve(config.as_deref())?;
            let preview = prepare_import(&read_input(&file)?, &config)?;
            print_json(&preview, cli.pretty)
        }
        Command::Authors { text } => print_json(&parse_authors(&text), cli.pretty),
        Command::Pages { text, import } => {
            let range = if import {
                parse_import_pages(Some(&text))
            } else {
                parse_pages(Some(&text))
            };
            print_json(&range, cli.pretty)
        }
        Command::Arxiv { url } => print_json(&extract_arxiv_id(Some(&url)), cli.pretty),
    }
}

fn read_input(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    tracing::debug!("reading {}", path.display());
    std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e).into())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
