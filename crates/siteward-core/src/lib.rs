//! # Siteward Core
//!
//! Core data models, error types, and configuration for the Siteward
//! Markdown-collection maintenance tools. This crate defines the canonical
//! types that all other crates depend on.
//!
//! ## Architecture Principles
//!
//! - **No External Crate Dependencies Beyond Serialization**: only serde +
//!   thiserror + basic Rust stdlib
//! - **Zero Panic in Libraries**: all fallible operations return `Result<T>`
//! - **Builder Pattern for Configuration**: config structs validate at build
//! - **Transient Documents**: a document is read whole, mutated in memory,
//!   and written back; no intermediate persistence, no backup
//!
//! ## Core Modules
//!
//! - [`models`] - Document, media reference, and asset naming helpers
//! - [`error`] - Error type and Result alias
//! - [`config`] - Importer and injector configuration
//!
//! ## Error Handling
//!
//! ```
//! use siteward_core::prelude::*;
//!
//! fn localize() -> Result<()> {
//!     let _err = Error::parse("front matter is not a mapping");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod models;

pub use config::*;
pub use error::{Error, Result};
pub use models::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{ImportConfig, RedirectConfig};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        asset_name, document_prefix, hyphenate, resolve_existing_file, Document, MediaRef,
    };
}
