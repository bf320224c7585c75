//! # Siteward Assets
//!
//! The asset importer: scans Markdown files for remote media links,
//! downloads each into a sibling `assets/` directory, and rewrites the
//! link destination to the local copy.
//!
//! Downloads are best-effort. A failed fetch is logged and recorded in the
//! [`ImportReport`], but the link is rewritten unconditionally and the run
//! continues; only a missing input file aborts the batch.
//!
//! The HTTP client sits behind the [`Fetcher`] trait so tests can run
//! without a network.

use serde::{Deserialize, Serialize};
use siteward_core::prelude::*;
use siteward_parser::MediaScanner;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Downloads a URL to a destination path.
pub trait Fetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()>;
}

/// Blocking HTTP fetcher backed by `ureq`.
///
/// Redirects are followed (ureq default). An HTTP error status or a
/// transport failure is returned as [`Error::Fetch`]; nothing is written
/// to `dest` in that case.
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    /// Create a fetcher with a per-request timeout.
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self { agent }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| Error::fetch(url, e.to_string()))?;

        let mut reader = response.into_reader();
        let mut out = fs::File::create(dest)?;
        io::copy(&mut reader, &mut out)?;
        Ok(())
    }
}

/// Record of a single discovered media reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Remote URL including any query string
    pub source: String,
    /// Local asset filename the link now points at
    pub asset: String,
    /// Whether the download succeeded
    pub fetched: bool,
}

/// Result of importing a single file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    /// The processed file
    pub file: PathBuf,
    /// One record per discovered media reference
    pub assets: Vec<AssetRecord>,
    /// Number of links rewritten
    pub rewritten: usize,
}

/// The asset importer.
pub struct AssetImporter {
    config: ImportConfig,
    scanner: MediaScanner,
    fetcher: Box<dyn Fetcher>,
}

impl AssetImporter {
    /// Create an importer with the real HTTP fetcher.
    pub fn new(config: ImportConfig) -> Result<Self> {
        let timeout = config.timeout();
        Self::with_fetcher(config, Box::new(HttpFetcher::new(timeout)))
    }

    /// Create an importer with a custom fetcher (tests).
    pub fn with_fetcher(config: ImportConfig, fetcher: Box<dyn Fetcher>) -> Result<Self> {
        config.validate()?;
        let scanner = MediaScanner::new(&config.media_extensions)?;
        Ok(Self {
            config,
            scanner,
            fetcher,
        })
    }

    /// Import every named file, failing fast on a bad argument.
    ///
    /// All arguments are validated before any file is touched: a single
    /// missing input aborts the whole run with no partial work.
    pub fn import_all(&self, paths: &[PathBuf]) -> Result<Vec<ImportReport>> {
        let resolved = paths
            .iter()
            .map(|p| resolve_existing_file(p))
            .collect::<Result<Vec<_>>>()?;

        resolved.iter().map(|p| self.import_file(p)).collect()
    }

    /// Import a single file.
    ///
    /// The sibling assets directory is created before scanning, so it
    /// exists even when the file contains no media links.
    pub fn import_file(&self, path: &Path) -> Result<ImportReport> {
        let path = resolve_existing_file(path)?;
        let mut doc = Document::load(&path)?;

        let assets_dir = doc.dir().join(&self.config.assets_dir);
        fs::create_dir_all(&assets_dir)?;

        let prefix = document_prefix(doc.stem());
        log::debug!("importing assets for {} (prefix {})", path.display(), prefix);

        let mut records = Vec::new();
        let (rewritten_text, rewritten) = self.scanner.rewrite(&doc.text, |media| {
            let asset = asset_name(&prefix, media.basename());
            let source = media.remote_target();

            // Per-asset diagnostic contract: one stderr line per download
            eprintln!("{} => {}", source, asset);

            let fetched = match self.fetcher.fetch(&source, &assets_dir.join(&asset)) {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("{}", e);
                    false
                }
            };
            records.push(AssetRecord {
                source,
                asset: asset.clone(),
                fetched,
            });

            format!("{}/{}", self.config.assets_dir, asset)
        });

        doc.text = rewritten_text;
        doc.save()?;

        Ok(ImportReport {
            file: path,
            assets: records,
            rewritten,
        })
    }
}
