//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for devdocs-mcp core operations.
pub type Result<T> = std::result::Result<T, DocsError>;

/// Errors surfaced by the search-and-retrieve engine.
///
/// Every variant propagates to the calling binding (MCP tool or CLI);
/// nothing is logged-and-swallowed inside the core.
#[derive(Debug, thiserror::Error)]
pub enum DocsError {
    /// The documentation root is missing or unreadable. Fatal to every
    /// operation until the tree is extracted.
    #[error("documentation root not usable at {path}: {source}")]
    Index {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The caller asked for a doc set that does not exist in the index.
    #[error("unknown doc set '{requested}' (available: {})", available.join(", "))]
    UnknownDocSet {
        requested: String,
        available: Vec<String>,
    },

    /// Empty or whitespace-only search query.
    #[error("search query must not be empty")]
    InvalidQuery,

    /// No document matched the requested path, even with fuzzy fallback.
    #[error("no documentation found for '{requested}'{}", nearest_score.map(|s| format!(" (closest candidate scored {s:.0}, below cutoff)")).unwrap_or_default())]
    DocNotFound {
        requested: String,
        /// Best similarity seen among the rejected candidates, if any.
        nearest_score: Option<f64>,
    },

    /// The HTML to Markdown conversion failed for a resolved document.
    #[error("failed to render '{path}': {reason}")]
    Render { path: String, reason: String },

    /// Reading a resolved document's file failed.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
