//! Configuration types for the Siteward tools.
//!
//! Follows a builder pattern with validation at build time.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Media extensions recognized by the asset importer.
pub const DEFAULT_MEDIA_EXTENSIONS: &[&str] = &[
    "png", "gif", "jpg", "jpeg", "pdf", "webp", "webm", "mp4", "avi", "ogg",
];

/// Default name of the per-directory asset directory.
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Default redirect prefix injected into front matter.
pub const DEFAULT_REDIRECT_PREFIX: &str = "/collections/tutorials";

/// File stems containing any of these (case-insensitively) are never
/// touched by the redirect injector.
pub const DEFAULT_SKIP_NAMES: &[&str] = &["README", "index"];

/// Configuration for the asset importer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Name of the assets directory created next to each input file
    pub assets_dir: String,
    /// Media extensions that qualify a link destination for import
    pub media_extensions: Vec<String>,
    /// Per-request download timeout in seconds
    pub timeout_secs: u64,
}

impl ImportConfig {
    /// Create a new import config with builder
    pub fn builder() -> ImportConfigBuilder {
        ImportConfigBuilder::new()
    }

    /// Download timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the import configuration
    pub fn validate(&self) -> Result<()> {
        if self.assets_dir.is_empty() {
            return Err(Error::config("assets dir name cannot be empty"));
        }

        if self.assets_dir.contains(['/', '\\']) {
            return Err(Error::config(format!(
                "assets dir must be a bare directory name, got: {}",
                self.assets_dir
            )));
        }

        if self.media_extensions.is_empty() {
            return Err(Error::config("at least one media extension is required"));
        }

        if self.timeout_secs == 0 {
            return Err(Error::config("download timeout cannot be zero"));
        }

        Ok(())
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            assets_dir: DEFAULT_ASSETS_DIR.to_string(),
            media_extensions: DEFAULT_MEDIA_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            timeout_secs: 30,
        }
    }
}

/// Builder for ImportConfig
pub struct ImportConfigBuilder {
    config: ImportConfig,
}

impl ImportConfigBuilder {
    /// Create a new builder with defaults
    pub fn new() -> Self {
        Self {
            config: ImportConfig::default(),
        }
    }

    /// Set the assets directory name
    pub fn assets_dir(mut self, name: impl Into<String>) -> Self {
        self.config.assets_dir = name.into();
        self
    }

    /// Replace the recognized media extensions
    pub fn media_extensions(mut self, extensions: Vec<String>) -> Self {
        self.config.media_extensions = extensions;
        self
    }

    /// Set the download timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Build and validate
    pub fn build(self) -> Result<ImportConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ImportConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for the redirect injector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedirectConfig {
    /// Prefix of the injected `redirect_from` path, e.g. `/collections/tutorials`
    pub redirect_prefix: String,
    /// File stems containing any of these substrings are skipped
    pub skip_names: Vec<String>,
}

impl RedirectConfig {
    /// Create a new redirect config with builder
    pub fn builder() -> RedirectConfigBuilder {
        RedirectConfigBuilder::new()
    }

    /// Validate the redirect configuration
    pub fn validate(&self) -> Result<()> {
        if !self.redirect_prefix.starts_with('/') {
            return Err(Error::config(format!(
                "redirect prefix must start with '/', got: {}",
                self.redirect_prefix
            )));
        }

        if self.redirect_prefix.ends_with('/') {
            return Err(Error::config(format!(
                "redirect prefix must not end with '/', got: {}",
                self.redirect_prefix
            )));
        }

        Ok(())
    }

    /// The `redirect_from` value for a given file stem
    pub fn redirect_for(&self, stem: &str) -> String {
        format!("{}/{}/", self.redirect_prefix, stem)
    }

    /// Whether a file stem matches one of the skip names (case-insensitive)
    pub fn is_skipped_name(&self, stem: &str) -> bool {
        let lowered = stem.to_lowercase();
        self.skip_names
            .iter()
            .any(|name| lowered.contains(&name.to_lowercase()))
    }
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            redirect_prefix: DEFAULT_REDIRECT_PREFIX.to_string(),
            skip_names: DEFAULT_SKIP_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Builder for RedirectConfig
pub struct RedirectConfigBuilder {
    config: RedirectConfig,
}

impl RedirectConfigBuilder {
    /// Create a new builder with defaults
    pub fn new() -> Self {
        Self {
            config: RedirectConfig::default(),
        }
    }

    /// Set the redirect prefix
    pub fn redirect_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.redirect_prefix = prefix.into();
        self
    }

    /// Replace the skip-name substrings
    pub fn skip_names(mut self, names: Vec<String>) -> Self {
        self.config.skip_names = names;
        self
    }

    /// Build and validate
    pub fn build(self) -> Result<RedirectConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for RedirectConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
