//! Search tool handler.

use crate::search::DEFAULT_SEARCH_LIMIT;
use crate::store::DocStore;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchDocsRequest {
    /// Search query to find documentation entries
    pub query: String,
    /// Optional documentation set to search within (e.g. 'python', 'javascript')
    pub doc_set: Option<String>,
    /// Maximum number of results to return (default: 20)
    #[serde(default = "default_limit")]
    pub limit: Option<usize>,
}

fn default_limit() -> Option<usize> {
    Some(DEFAULT_SEARCH_LIMIT)
}

/// Execute a fuzzy documentation search and format the results.
pub async fn handle_search(store: &DocStore, request: SearchDocsRequest) -> Result<String, String> {
    let limit = request.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    let results = store
        .engine()
        .search(&request.query, request.doc_set.as_deref(), limit)
        .await
        .map_err(|e| e.to_string())?;

    if results.is_empty() {
        let scope = request
            .doc_set
            .as_deref()
            .map(|set| format!(" in '{}'", set))
            .unwrap_or_default();
        let mut msg = format!("No results found for '{}'{}.\n\n", request.query, scope);
        msg.push_str("Search tips:\n");
        msg.push_str("• Try a shorter or more general term\n");
        msg.push_str("• Search by topic name, like 'list', 'array' or 'grid'\n");
        msg.push_str("• Use list_doc_sets to see which documentation sets exist\n");
        return Ok(msg);
    }

    let scope = request
        .doc_set
        .as_deref()
        .map(|set| format!(" in '{}'", set))
        .unwrap_or_default();
    let mut output = format!("Search results for '{}'{}:\n\n", request.query, scope);

    for (idx, result) in results.iter().enumerate() {
        let variant = if result.via_expansion { " (variant)" } else { "" };
        output
            .write_fmt(format_args!(
                "{}. `{}` [{}] - relevance: {:.0}%{}\n",
                idx + 1,
                result.entry.path,
                result.entry.doc_set,
                result.score.min(crate::search::MAX_SCORE),
                variant
            ))
            .unwrap();
    }

    output.push_str("\nUse read_doc with one of these paths to read the page.\n");
    Ok(output)
}
