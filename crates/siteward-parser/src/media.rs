//! Media link scanner: `(https://host/path/file.png?query annotation)`
//!
//! Matches Markdown link destinations pointing at remote media files so
//! they can be rewritten to local asset paths. The pattern is
//! case-insensitive; the trailing-annotation group spans newlines.
//!
//! Note: the regex crate has no lookbehind/lookahead, so the pattern
//! consumes the surrounding parentheses and [`MediaScanner::rewrite`]
//! re-emits them around the replacement.

use regex::{Captures, Regex};
use siteward_core::{Error, MediaRef, Result, DEFAULT_MEDIA_EXTENSIONS};
use std::sync::LazyLock;

/// Matches a parenthesized link destination with a recognized media
/// extension, built from the default extension set.
static DEFAULT_MEDIA_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&media_pattern(DEFAULT_MEDIA_EXTENSIONS.iter().copied())).unwrap()
});

/// Fast pre-filter: skip regex if no URL scheme separator exists.
#[inline]
fn has_remote_link(content: &str) -> bool {
    content.contains("://")
}

fn media_pattern<'a>(extensions: impl Iterator<Item = &'a str>) -> String {
    let alternation = extensions
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    format!(
        r"(?i)\((?P<url>https?://(?P<filename>[^)]+?\.(?:{})))(?P<query>[^ )]+)?(?P<addl>[^)]*)\)",
        alternation
    )
}

/// Scanner for remote media link destinations.
#[derive(Debug, Clone)]
pub struct MediaScanner {
    pattern: Regex,
}

impl MediaScanner {
    /// Build a scanner for a custom extension set.
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> Result<Self> {
        if extensions.is_empty() {
            return Err(Error::config("at least one media extension is required"));
        }
        if extensions.iter().any(|e| e.as_ref().is_empty()) {
            return Err(Error::config("media extensions cannot be empty strings"));
        }

        let pattern = Regex::new(&media_pattern(extensions.iter().map(|e| e.as_ref())))
            .map_err(|e| Error::config(format!("invalid media extension pattern: {}", e)))?;
        Ok(Self { pattern })
    }

    /// Find every media reference in the content.
    pub fn find(&self, content: &str) -> Vec<MediaRef> {
        if !has_remote_link(content) {
            return Vec::new();
        }

        self.pattern
            .captures_iter(content)
            .map(|caps| media_ref(&caps))
            .collect()
    }

    /// Replace every media reference, calling `local_path` once per match
    /// to supply the rewritten destination. The trailing annotation and
    /// the surrounding parentheses are preserved.
    ///
    /// Returns the rewritten text and the number of replacements.
    pub fn rewrite(
        &self,
        content: &str,
        mut local_path: impl FnMut(&MediaRef) -> String,
    ) -> (String, usize) {
        if !has_remote_link(content) {
            return (content.to_string(), 0);
        }

        let mut count = 0usize;
        let rewritten = self.pattern.replace_all(content, |caps: &Captures| {
            let media = media_ref(caps);
            let local = local_path(&media);
            count += 1;
            format!("({}{})", local, media.trailing)
        });
        (rewritten.into_owned(), count)
    }
}

impl Default for MediaScanner {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_MEDIA_LINK.clone(),
        }
    }
}

fn media_ref(caps: &Captures) -> MediaRef {
    MediaRef {
        url: caps["url"].to_string(),
        filename: caps["filename"].to_string(),
        query: caps.name("query").map(|m| m.as_str().to_string()),
        trailing: caps
            .name("addl")
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        // Offset of the destination itself, just past the opening paren
        offset: caps.get(0).map(|m| m.start() + 1).unwrap_or_default(),
    }
}
