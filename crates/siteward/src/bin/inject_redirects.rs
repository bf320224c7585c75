//! Redirect injector CLI
//!
//! Recursively scans a directory tree for Markdown files and sets a
//! `redirect_from` front matter field on every document that has usable
//! front matter and no `series` key. Silent on stdout by design;
//! per-file skips are visible with RUST_LOG=debug.

use anyhow::Result;
use clap::Parser;
use siteward_core::RedirectConfig;
use siteward_redirect::RedirectInjector;
use std::path::PathBuf;

/// Inject redirect_from fields into Markdown front matter
#[derive(Parser, Debug)]
#[command(name = "inject-redirects", version, about, long_about = None)]
struct Args {
    /// Root directory to scan
    #[arg(long, default_value = ".", env = "SITEWARD_ROOT")]
    root: PathBuf,

    /// Prefix of the injected redirect path
    #[arg(
        long,
        default_value = "/collections/tutorials",
        env = "SITEWARD_REDIRECT_PREFIX"
    )]
    redirect_prefix: String,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let config = RedirectConfig::builder()
        .redirect_prefix(&args.redirect_prefix)
        .build()?;

    let injector = RedirectInjector::new(config);
    let report = injector.run(&args.root)?;

    log::info!(
        "scanned {} files: {} updated, {} skipped, {} errored",
        report.scanned,
        report.updated,
        report.skipped,
        report.errored
    );

    Ok(())
}
