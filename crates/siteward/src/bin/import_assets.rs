//! Asset importer CLI
//!
//! Scans the named Markdown files for remote media links, downloads each
//! into a sibling `assets/` directory, and rewrites the links to the
//! local copies. One diagnostic line per asset is written to stderr:
//! `<url> => <filename>`.

use anyhow::Result;
use clap::Parser;
use regex::Regex;
use siteward_assets::AssetImporter;
use siteward_core::ImportConfig;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Any spelling of a help request: -h, -help, --help, -HELP, ...
static HELP_FLAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^-+h(elp)?$").unwrap());

/// Localize remote media links in Markdown files
#[derive(Parser, Debug)]
#[command(name = "import-assets", version, about, long_about = None)]
struct Args {
    /// Markdown files to rewrite
    #[arg(required = true, value_name = "FILE.md")]
    files: Vec<PathBuf>,

    /// Name of the assets directory created next to each file
    #[arg(long, default_value = "assets", env = "SITEWARD_ASSETS_DIR")]
    assets_dir: String,

    /// Download timeout in seconds
    #[arg(long, default_value_t = 30, env = "SITEWARD_FETCH_TIMEOUT")]
    timeout_secs: u64,
}

fn main() {
    // No arguments or a help flag prints usage and exits cleanly before
    // anything else happens
    let raw: Vec<String> = std::env::args().skip(1).collect();
    if raw.is_empty() || HELP_FLAG.is_match(&raw[0]) {
        println!("Usage: import-assets FILE.md [FILE2.md ...]");
        return;
    }

    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let config = ImportConfig::builder()
        .assets_dir(&args.assets_dir)
        .timeout_secs(args.timeout_secs)
        .build()?;

    let importer = AssetImporter::new(config)?;
    let reports = importer.import_all(&args.files)?;

    let downloaded = reports
        .iter()
        .flat_map(|r| &r.assets)
        .filter(|a| a.fetched)
        .count();
    let rewritten: usize = reports.iter().map(|r| r.rewritten).sum();
    log::info!(
        "processed {} files: {} links rewritten, {} assets downloaded",
        reports.len(),
        rewritten,
        downloaded
    );

    Ok(())
}
