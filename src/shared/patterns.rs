//! Pattern compilation utilities
//!
//! This module provides regex compilation for pattern-based predicates.
//! Compiled patterns are cached process-wide, so predicates evaluated in
//! a hot loop do not pay recompilation cost on every document.

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

/// Global compiled-pattern cache - compiled once, shared across all threads
///
/// `Regex` is cheap to clone (the compiled program is behind an `Arc`), so
/// cache hits hand out clones rather than holding the lock across matching.
/// Compilation failures are never cached; a bad pattern re-reports its
/// error at every use site.
static COMPILED_PATTERNS: LazyLock<RwLock<HashMap<String, Regex>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Compile a regex pattern, reusing a previously compiled instance when available
///
/// Matching uses search semantics: patterns are unanchored unless they
/// anchor themselves with `^`/`$`. The empty pattern compiles and matches
/// every string.
pub fn compile(pattern: &str) -> Result<Regex> {
    if let Ok(cache) = COMPILED_PATTERNS.read() {
        if let Some(regex) = cache.get(pattern) {
            tracing::trace!("Pattern cache hit: {}", pattern);
            return Ok(regex.clone());
        }
    }

    let regex =
        Regex::new(pattern).with_context(|| format!("Invalid regex pattern: '{}'", pattern))?;
    tracing::debug!("Compiled pattern: {}", pattern);

    // A poisoned lock only costs us the caching, not correctness
    if let Ok(mut cache) = COMPILED_PATTERNS.write() {
        cache.insert(pattern.to_string(), regex.clone());
    }

    Ok(regex)
}
