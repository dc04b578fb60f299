//! Read tool handler.

use crate::store::DocStore;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ReadDocRequest {
    /// Path to the documentation file, relative to the docs root
    /// (e.g. 'python/list.html')
    pub path: String,
}

/// Resolve a documentation path (fuzzily if needed) and return its content
/// as Markdown.
pub async fn handle_read(store: &DocStore, request: ReadDocRequest) -> Result<String, String> {
    let result = store
        .resolver()
        .read(&request.path)
        .await
        .map_err(|e| e.to_string())?;

    if result.exact {
        return Ok(result.content);
    }

    // Fuzzy fallback: tell the caller which page they actually got.
    Ok(format!(
        "Note: '{}' not found; showing closest match `{}`.\n\n{}",
        result.requested.as_deref().unwrap_or(&request.path),
        result.entry.path,
        result.content
    ))
}
