//! Document model for predicate evaluation
//!
//! This module defines the read-only view predicates have of a document:
//! a string-keyed, string-valued metadata mapping. Documents themselves
//! live in the host pipeline; predicates only ever look at metadata.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Well-known metadata keys populated by file-system document sources
pub mod keys {
    /// Name of the file a document was read from
    pub const FILENAME: &str = "Filename";

    /// Directory the file was read from
    pub const PATH: &str = "Path";

    /// File extension, including the leading dot
    pub const EXTENSION: &str = "Extension";
}

/// String-keyed, string-valued attribute set attached to a document
///
/// Absence of a key is a valid state, not an error; predicates treat a
/// missing key as a non-match for constrained fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<String, String>);

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Read-only view of a document under evaluation
///
/// Any type exposing a metadata mapping is substitutable: an in-memory
/// record, a row from a store, a remote-backed accessor.
pub trait Document {
    /// The document's metadata, if any has been attached
    fn metadata(&self) -> Option<&Metadata>;
}

/// Document carrying nothing but metadata
///
/// The simplest [`Document`] implementation, used by pipelines that
/// construct documents on the fly and throughout the test suites.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InMemoryDocument {
    #[serde(default)]
    metadata: Option<Metadata>,
}

impl InMemoryDocument {
    /// A document with no metadata attached at all
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metadata(metadata: Metadata) -> Self {
        Self {
            metadata: Some(metadata),
        }
    }
}

impl Document for InMemoryDocument {
    fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }
}
