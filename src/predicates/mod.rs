//! Document predicates
//!
//! A predicate is a composable boolean test over documents. The host
//! pipeline combines predicates to decide which documents a processing
//! step applies to; this crate supplies the file-system metadata
//! predicate and the trait seam the pipeline consumes.

use crate::Result;
use crate::document::Document;
use crate::notification::Notification;

pub mod filesystem;

pub use filesystem::FileSystemWhereSpecification;

/// A composable boolean test over documents
pub trait WhereSpecification {
    /// Evaluate the predicate against a document
    ///
    /// Every normal rejection is `Ok(false)`; an `Err` is reserved for a
    /// configured pattern that fails to compile.
    fn matches(&self, document: &dyn Document) -> Result<bool>;

    /// Report configuration problems without evaluating any document
    ///
    /// Appends human-readable messages to the notification; callers
    /// validate all their predicates and inspect the accumulated result
    /// before matching begins.
    fn validate(&self, notification: &mut Notification);
}
