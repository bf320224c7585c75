//! # Siteward Parser
//!
//! Text-level parsing for the Siteward tools:
//!
//! - Front matter: literal `---` splitting, YAML mapping parse/render
//!   (`serde_yaml`), truthiness checks for skip logic
//! - Media links: regex scanning of Markdown link destinations with
//!   recognized media extensions, plus replacement-driven rewriting
//!
//! Patterns are compiled once behind `std::sync::LazyLock` and guarded by
//! cheap `contains` pre-filters so documents without remote links skip the
//! regex entirely.
//!
//! ## Quick Start
//!
//! ```
//! use siteward_parser::{split_document, MediaScanner};
//!
//! let doc = "---\ntitle: Post\n---\n![img](http://example.com/pic.png)\n";
//! let split = split_document(doc).unwrap();
//! assert!(split.header.contains("title"));
//!
//! let scanner = MediaScanner::default();
//! let refs = scanner.find(doc);
//! assert_eq!(refs[0].basename(), "pic.png");
//! ```

mod frontmatter;
mod media;

pub use frontmatter::{parse_mapping, render, split_document, truthy, SplitDocument};
pub use media::MediaScanner;

// Re-export the media reference model for consumers
pub use siteward_core::MediaRef;
