//! Parser configuration.
//!
//! Limits applied to every document before and while it is parsed. The
//! defaults are suitable for responses received over the POST and Redirect
//! bindings; callers embedding very large attribute statements may raise
//! `max_document_size`.

use serde::{Deserialize, Serialize};

/// Default maximum document size (1 MiB).
pub const DEFAULT_MAX_DOCUMENT_SIZE: usize = 1024 * 1024;

/// Default maximum element nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Configuration for response parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum accepted document size in bytes. Also caps the inflated size
    /// of messages decoded from the HTTP-Redirect binding.
    pub max_document_size: usize,
    /// Maximum element nesting depth.
    pub max_depth: usize,
    /// Whether `<!DOCTYPE` declarations are tolerated. Entities are never
    /// expanded either way.
    pub allow_doctype: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_document_size: DEFAULT_MAX_DOCUMENT_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
            allow_doctype: false,
        }
    }
}

impl ParserConfig {
    /// Sets the maximum document size.
    #[must_use]
    pub const fn with_max_document_size(mut self, bytes: usize) -> Self {
        self.max_document_size = bytes;
        self
    }

    /// Sets the maximum nesting depth.
    #[must_use]
    pub const fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Allows or rejects DTD declarations.
    #[must_use]
    pub const fn allow_doctype(mut self, allow: bool) -> Self {
        self.allow_doctype = allow;
        self
    }
}
