//! # Docmatch - Pattern-Based Document Predicates
//!
//! Predicates that decide whether a document's file-system metadata
//! (filename, path, extension) matches configured regular-expression
//! patterns. Predicates are the building blocks a document-routing
//! pipeline composes to select which documents a processing step applies
//! to.
//!
//! ## Features
//!
//! - **Regex matching**: search semantics per field, anchor with `^`/`$`
//!   when full-string matching is wanted
//! - **Optional constraints**: path and extension patterns are only
//!   enforced when configured
//! - **Pre-flight validation**: configuration problems are accumulated as
//!   human-readable errors before any matching runs
//! - **Declarative definitions**: predicates load from YAML or JSON files
//!
//! ## Quick Start
//!
//! ```
//! use docmatch::{FileSystemWhereSpecification, InMemoryDocument, WhereSpecification};
//!
//! let spec = FileSystemWhereSpecification {
//!     filename: Some(r"^report-\d+\.pdf$".to_string()),
//!     ..Default::default()
//! };
//!
//! let document = InMemoryDocument::with_metadata(
//!     [("Filename", "report-20260806.pdf")].into_iter().collect(),
//! );
//!
//! assert!(spec.matches(&document).unwrap());
//! ```

pub mod config;
pub mod document;
pub mod notification;
pub mod predicates;
pub mod shared;

pub use document::{Document, InMemoryDocument, Metadata};
pub use notification::Notification;
pub use predicates::{FileSystemWhereSpecification, WhereSpecification};

/// Result type alias for docmatch operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
