//! Front matter handling: split on `---`, parse YAML, render back.
//!
//! Splitting is literal rather than line-anchored: the document text is
//! split on every `---` occurrence and the body segments are rejoined with
//! the same delimiter, so horizontal rules in the body round-trip
//! unchanged.

use serde_yaml::{Mapping, Value};
use siteward_core::{Error, Result};

/// A document split into its front matter header and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitDocument<'a> {
    /// Raw text between the first and second `---`
    pub header: &'a str,
    /// Everything after the second `---`, inner delimiters restored
    pub body: String,
}

/// Split raw document text on literal `---` delimiters.
///
/// Returns `None` when the split yields fewer than three segments (fewer
/// than two delimiters), i.e. the file lacks a usable front-matter block.
pub fn split_document(text: &str) -> Option<SplitDocument<'_>> {
    let parts: Vec<&str> = text.split("---").collect();
    if parts.len() < 3 {
        return None;
    }
    Some(SplitDocument {
        header: parts[1],
        body: parts[2..].join("---"),
    })
}

/// Parse a front matter header as a YAML mapping.
///
/// A header that is valid YAML but not a mapping (scalar, sequence, null)
/// is a parse error.
pub fn parse_mapping(header: &str) -> Result<Mapping> {
    let value: Value =
        serde_yaml::from_str(header).map_err(|e| Error::parse(e.to_string()))?;
    match value {
        Value::Mapping(mapping) => Ok(mapping),
        other => Err(Error::parse(format!(
            "front matter is not a mapping: {:?}",
            other
        ))),
    }
}

/// Serialize a mapping back into front matter form and reattach the body.
///
/// The body keeps whatever leading whitespace it carried after the closing
/// delimiter, so `---\n<yaml>---<body>` reproduces the original layout.
pub fn render(mapping: &Mapping, body: &str) -> Result<String> {
    let yaml = serde_yaml::to_string(mapping).map_err(|e| Error::parse(e.to_string()))?;
    Ok(format!("---\n{}---{}", yaml, body))
}

/// Whether a YAML value counts as present: not null, not `false`, not an
/// empty string.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple() {
        let text = "---\ntitle: Test\n---\nContent here\n";
        let split = split_document(text).unwrap();
        assert_eq!(split.header, "\ntitle: Test\n");
        assert_eq!(split.body, "\nContent here\n");
    }

    #[test]
    fn test_split_requires_two_delimiters() {
        assert!(split_document("Just content, no front matter\n").is_none());
        assert!(split_document("---\ntitle: Unclosed\n").is_none());
    }

    #[test]
    fn test_split_preserves_inner_delimiters() {
        let text = "---\ntitle: Test\n---\nIntro\n\n---\n\nOutro\n";
        let split = split_document(text).unwrap();
        assert_eq!(split.body, "\nIntro\n\n---\n\nOutro\n");
    }

    #[test]
    fn test_parse_mapping() {
        let mapping = parse_mapping("\ntitle: Hello\ntags:\n  - a\n  - b\n").unwrap();
        assert_eq!(mapping.len(), 2);

        assert!(parse_mapping("- just\n- a list\n").is_err());
        assert!(parse_mapping("title: [never closed").is_err());
    }

    #[test]
    fn test_render_round_trip() {
        let text = "---\ntitle: Hello\n---\nBody text\n";
        let split = split_document(text).unwrap();
        let mapping = parse_mapping(split.header).unwrap();
        let out = render(&mapping, &split.body).unwrap();
        assert!(out.starts_with("---\ntitle: Hello\n---\n"));
        assert!(out.ends_with("Body text\n"));
    }

    #[test]
    fn test_render_preserves_sequences_and_nesting() {
        let header = "\ntitle: T\ntags:\n  - rust\n  - cli\nmeta:\n  author: someone\n";
        let mapping = parse_mapping(header).unwrap();
        let out = render(&mapping, "\nbody\n").unwrap();
        let reparsed = parse_mapping(split_document(&out).unwrap().header).unwrap();
        assert_eq!(mapping, reparsed);
    }

    #[test]
    fn test_truthy() {
        assert!(!truthy(&Value::Null));
        assert!(!truthy(&Value::Bool(false)));
        assert!(!truthy(&Value::String(String::new())));
        assert!(truthy(&Value::Bool(true)));
        assert!(truthy(&Value::String("tutorial".to_string())));
        assert!(truthy(&Value::Number(0.into())));
    }
}
