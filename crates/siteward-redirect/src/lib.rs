//! # Siteward Redirect
//!
//! The redirect injector: walks a directory tree, and for every Markdown
//! file with usable front matter and no `series` key, sets a
//! `redirect_from` field derived from the file's stem.
//!
//! Processing is best-effort by design: a file that fails to read, parse,
//! or write is logged and counted, never fatal. This is the opposite
//! policy from the asset importer, which fails fast on bad arguments.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use siteward_core::prelude::*;
use std::path::Path;
use walkdir::WalkDir;

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// `redirect_from` was set and the file rewritten
    Updated,
    /// File stem matched a skip name (README, index)
    SkippedName,
    /// Fewer than two `---` delimiters
    MissingFrontMatter,
    /// Front matter parsed to an empty mapping
    EmptyFrontMatter,
    /// Front matter already declares a truthy `series`
    HasSeries,
}

/// Counters for one injector run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RunReport {
    /// Markdown files visited
    pub scanned: usize,
    /// Files rewritten with a `redirect_from`
    pub updated: usize,
    /// Files skipped by rule (name, missing/empty front matter, series)
    pub skipped: usize,
    /// Files skipped because processing raised an error
    pub errored: usize,
}

/// The redirect injector.
pub struct RedirectInjector {
    config: RedirectConfig,
}

impl RedirectInjector {
    /// Create an injector from a validated config.
    pub fn new(config: RedirectConfig) -> Self {
        Self { config }
    }

    /// Recursively process every `.md` file under `root`.
    ///
    /// Per-file errors are swallowed: logged at debug level, counted in
    /// the report, and the walk continues. Only a nonexistent root is
    /// fatal.
    pub fn run(&self, root: &Path) -> Result<RunReport> {
        if !root.is_dir() {
            return Err(Error::file_not_found(root));
        }

        let mut report = RunReport::default();

        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().map_or(true, |ext| ext != "md") {
                continue;
            }

            report.scanned += 1;
            match self.process_file(path) {
                Ok(Outcome::Updated) => {
                    log::debug!("updated {}", path.display());
                    report.updated += 1;
                }
                Ok(outcome) => {
                    log::debug!("skipping {}: {:?}", path.display(), outcome);
                    report.skipped += 1;
                }
                Err(e) => {
                    log::debug!("skipping {}: {}", path.display(), e);
                    report.errored += 1;
                }
            }
        }

        Ok(report)
    }

    /// Process a single file, returning what was done.
    pub fn process_file(&self, path: &Path) -> Result<Outcome> {
        let doc = Document::load(path)?;
        let stem = doc.stem();

        if self.config.is_skipped_name(stem) {
            return Ok(Outcome::SkippedName);
        }

        let Some(split) = siteward_parser::split_document(&doc.text) else {
            return Ok(Outcome::MissingFrontMatter);
        };

        let mut mapping = siteward_parser::parse_mapping(split.header)?;
        if mapping.is_empty() {
            return Ok(Outcome::EmptyFrontMatter);
        }

        let series_key = Value::String("series".to_string());
        if mapping
            .get(&series_key)
            .map(siteward_parser::truthy)
            .unwrap_or(false)
        {
            return Ok(Outcome::HasSeries);
        }

        mapping.insert(
            Value::String("redirect_from".to_string()),
            Value::String(self.config.redirect_for(stem)),
        );

        let text = siteward_parser::render(&mapping, &split.body)?;
        let updated = Document {
            path: doc.path,
            text,
        };
        updated.save()?;

        Ok(Outcome::Updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn injector() -> RedirectInjector {
        RedirectInjector::new(RedirectConfig::default())
    }

    fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_injects_redirect() {
        let temp = TempDir::new().unwrap();
        let path = write(
            temp.path(),
            "intro.md",
            "---\ntitle: Hello\n---\nBody text\n",
        );

        let outcome = injector().process_file(&path).unwrap();
        assert_eq!(outcome, Outcome::Updated);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("title: Hello"));
        assert!(content.contains("redirect_from: /collections/tutorials/intro/"));
        assert!(content.ends_with("Body text\n"));
    }

    #[test]
    fn test_skips_readme_and_index() {
        let temp = TempDir::new().unwrap();
        for name in ["README.md", "readme.md", "index.md", "API-index.md"] {
            let path = write(temp.path(), name, "---\ntitle: T\n---\nbody\n");
            let before = fs::read_to_string(&path).unwrap();
            let outcome = injector().process_file(&path).unwrap();
            assert_eq!(outcome, Outcome::SkippedName, "{name}");
            assert_eq!(fs::read_to_string(&path).unwrap(), before, "{name}");
        }
    }

    #[test]
    fn test_skips_plain_markdown() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "notes.md", "# Just a heading\n\nNo front matter\n");
        let before = fs::read_to_string(&path).unwrap();

        let outcome = injector().process_file(&path).unwrap();
        assert_eq!(outcome, Outcome::MissingFrontMatter);
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_skips_series() {
        let temp = TempDir::new().unwrap();
        let path = write(
            temp.path(),
            "part-2.md",
            "---\ntitle: T\nseries: rust-basics\n---\nbody\n",
        );
        let before = fs::read_to_string(&path).unwrap();

        let outcome = injector().process_file(&path).unwrap();
        assert_eq!(outcome, Outcome::HasSeries);
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_false_series_is_not_a_series() {
        let temp = TempDir::new().unwrap();
        let path = write(
            temp.path(),
            "solo.md",
            "---\ntitle: T\nseries: false\n---\nbody\n",
        );

        let outcome = injector().process_file(&path).unwrap();
        assert_eq!(outcome, Outcome::Updated);
        assert!(fs::read_to_string(&path)
            .unwrap()
            .contains("redirect_from: /collections/tutorials/solo/"));
    }

    #[test]
    fn test_overwrites_existing_redirect() {
        let temp = TempDir::new().unwrap();
        let path = write(
            temp.path(),
            "moved.md",
            "---\ntitle: T\nredirect_from: /old/place/\n---\nbody\n",
        );

        let outcome = injector().process_file(&path).unwrap();
        assert_eq!(outcome, Outcome::Updated);
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("redirect_from: /collections/tutorials/moved/"));
        assert!(!content.contains("/old/place/"));
    }

    #[test]
    fn test_preserves_body_delimiters() {
        let temp = TempDir::new().unwrap();
        let path = write(
            temp.path(),
            "rules.md",
            "---\ntitle: T\n---\nIntro\n\n---\n\nOutro\n",
        );

        injector().process_file(&path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Intro\n\n---\n\nOutro\n"));
    }

    #[test]
    fn test_run_walks_recursively_and_swallows_errors() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("guides/deep");
        fs::create_dir_all(&nested).unwrap();

        write(temp.path(), "top.md", "---\ntitle: Top\n---\nbody\n");
        write(&nested, "leaf.md", "---\ntitle: Leaf\n---\nbody\n");
        write(temp.path(), "broken.md", "---\ntitle: [never closed\n---\nbody\n");
        write(temp.path(), "plain.md", "no front matter\n");
        write(temp.path(), "notes.txt", "---\ntitle: T\n---\nnot markdown\n");

        let report = injector().run(temp.path()).unwrap();
        assert_eq!(report.scanned, 4);
        assert_eq!(report.updated, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.errored, 1);

        assert!(fs::read_to_string(nested.join("leaf.md"))
            .unwrap()
            .contains("redirect_from: /collections/tutorials/leaf/"));
    }

    #[test]
    fn test_run_requires_existing_root() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        assert!(injector().run(&missing).is_err());
    }
}
