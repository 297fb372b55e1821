//! File-system metadata predicate
//!
//! Matches a document's file-system metadata (filename, path, extension)
//! against configured regex patterns. Filename is the mandatory field;
//! path and extension constraints only apply when a pattern is set.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::WhereSpecification;
use crate::Result;
use crate::document::{Document, Metadata, keys};
use crate::notification::Notification;
use crate::shared::patterns;

/// Matches documents on file-system metadata patterns
///
/// All three fields hold regex sources with search semantics - anchor
/// with `^`/`$` when full-string matching is wanted. A document matches
/// only when every configured field matches its metadata value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileSystemWhereSpecification {
    /// Pattern the `Filename` metadata value must match
    ///
    /// Required for the predicate to be well configured: `validate`
    /// reports an unset (or empty) filename pattern as a configuration
    /// error. At match time an unset pattern compiles to the empty regex,
    /// which matches any present filename; a document without a
    /// `Filename` key never matches.
    #[serde(default)]
    pub filename: Option<String>,

    /// Pattern the `Path` metadata value must match, when set
    ///
    /// Unset leaves the path unconstrained. Set, it requires the `Path`
    /// key to be present and matching.
    #[serde(default)]
    pub path: Option<String>,

    /// Pattern the `Extension` metadata value must match, when set
    #[serde(default)]
    pub extension: Option<String>,
}

impl FileSystemWhereSpecification {
    pub fn new() -> Self {
        Self::default()
    }

    fn match_filename(&self, metadata: &Metadata) -> Result<bool> {
        let Some(value) = metadata.get(keys::FILENAME) else {
            trace!("No Filename key in metadata, rejecting document");
            return Ok(false);
        };

        let pattern = self.filename.as_deref().unwrap_or("");
        Ok(patterns::compile(pattern)?.is_match(value))
    }

    fn match_optional(pattern: Option<&str>, metadata: &Metadata, key: &str) -> Result<bool> {
        // Unset pattern leaves the field unconstrained
        let Some(pattern) = pattern.filter(|p| !p.is_empty()) else {
            return Ok(true);
        };

        let Some(value) = metadata.get(key) else {
            trace!("No {} key in metadata, rejecting document", key);
            return Ok(false);
        };

        Ok(patterns::compile(pattern)?.is_match(value))
    }
}

impl WhereSpecification for FileSystemWhereSpecification {
    fn matches(&self, document: &dyn Document) -> Result<bool> {
        let Some(metadata) = document.metadata() else {
            trace!("Document has no metadata, rejecting");
            return Ok(false);
        };

        Ok(self.match_filename(metadata)?
            && Self::match_optional(self.path.as_deref(), metadata, keys::PATH)?
            && Self::match_optional(self.extension.as_deref(), metadata, keys::EXTENSION)?)
    }

    fn validate(&self, notification: &mut Notification) {
        if self.filename.as_deref().unwrap_or("").is_empty() {
            notification.add_error("Filename value has not been specified.");
        }
    }
}
