//! Core data models shared by the Siteward tools.
//!
//! These types are designed to be:
//! - **Serializable**: reference/report types derive Serialize/Deserialize
//! - **Debuggable**: everything derives Debug
//! - **Transient**: a [`Document`] lives entirely in memory between load
//!   and save; there is no intermediate persistence and no backup.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A Markdown document read entirely into memory.
///
/// Saving always writes back to the same path and appends a trailing
/// newline when the text lacks one.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub text: String,
}

impl Document {
    /// Load a document from disk
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let text = fs::read_to_string(&path)?;
        Ok(Self { path, text })
    }

    /// Base filename without its extension
    pub fn stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }

    /// Directory containing the document
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Overwrite the document on disk, ensuring a trailing newline
    pub fn save(&self) -> Result<()> {
        if self.text.ends_with('\n') {
            fs::write(&self.path, &self.text)?;
        } else {
            let mut out = String::with_capacity(self.text.len() + 1);
            out.push_str(&self.text);
            out.push('\n');
            fs::write(&self.path, out)?;
        }
        Ok(())
    }
}

/// One media link destination matched inside a document body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaRef {
    /// Full URL up to and including the media extension
    pub url: String,
    /// Filename portion of the URL (everything after the scheme)
    pub filename: String,
    /// Query string following the extension, if any
    pub query: Option<String>,
    /// Trailing annotation text between the URL and the closing paren
    pub trailing: String,
    /// Byte offset of the match within the document text
    pub offset: usize,
}

impl MediaRef {
    /// The URL actually downloaded: base URL plus query string
    pub fn remote_target(&self) -> String {
        match &self.query {
            Some(query) => format!("{}{}", self.url, query),
            None => self.url.clone(),
        }
    }

    /// Bare basename of the URL's filename portion
    pub fn basename(&self) -> &str {
        self.filename
            .rsplit('/')
            .next()
            .unwrap_or(&self.filename)
    }
}

/// Collapse runs of spaces into single hyphens.
pub fn hyphenate(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for ch in s.chars() {
        if ch == ' ' {
            if !in_run {
                out.push('-');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

/// Filename-safe prefix for a document: trimmed stem with space runs hyphenated.
pub fn document_prefix(stem: &str) -> String {
    hyphenate(stem.trim())
}

/// Local asset filename for a media reference basename.
///
/// Collisions are not checked; last write wins.
pub fn asset_name(prefix: &str, basename: &str) -> String {
    format!("{}-{}", prefix, hyphenate(basename))
}

/// Resolve a CLI argument to an absolute path of an existing file.
pub fn resolve_existing_file(path: &Path) -> Result<PathBuf> {
    let resolved = path
        .canonicalize()
        .map_err(|_| Error::file_not_found(path))?;
    if !resolved.is_file() {
        return Err(Error::file_not_found(path));
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_hyphenate() {
        assert_eq!(hyphenate("foo bar.png"), "foo-bar.png");
        assert_eq!(hyphenate("a   b"), "a-b");
        assert_eq!(hyphenate("clean.png"), "clean.png");
    }

    #[test]
    fn test_document_prefix() {
        assert_eq!(document_prefix("My Post"), "My-Post");
        assert_eq!(document_prefix("  padded  "), "padded");
    }

    #[test]
    fn test_asset_name() {
        assert_eq!(asset_name("post", "foo bar.png"), "post-foo-bar.png");
        assert_eq!(asset_name("My-Post", "img.gif"), "My-Post-img.gif");
    }

    #[test]
    fn test_media_ref_target_and_basename() {
        let r = MediaRef {
            url: "http://example.com/dir/pic.png".to_string(),
            filename: "example.com/dir/pic.png".to_string(),
            query: Some("?w=200".to_string()),
            trailing: String::new(),
            offset: 0,
        };
        assert_eq!(r.remote_target(), "http://example.com/dir/pic.png?w=200");
        assert_eq!(r.basename(), "pic.png");
    }

    #[test]
    fn test_document_save_appends_newline() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("note.md");
        std::fs::write(&path, "no newline").unwrap();

        let doc = Document::load(&path).unwrap();
        doc.save().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "no newline\n");

        // Already-terminated text is untouched
        let doc = Document::load(&path).unwrap();
        doc.save().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "no newline\n");
    }

    #[test]
    fn test_document_stem() {
        let doc = Document {
            path: PathBuf::from("/tmp/My Post.md"),
            text: String::new(),
        };
        assert_eq!(doc.stem(), "My Post");
    }

    #[test]
    fn test_resolve_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("real.md");
        std::fs::write(&path, "x").unwrap();

        assert!(resolve_existing_file(&path).is_ok());
        assert!(resolve_existing_file(&temp.path().join("missing.md")).is_err());
        assert!(resolve_existing_file(temp.path()).is_err());
    }
}
