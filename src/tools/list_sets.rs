//! List tool handler.

use crate::store::DocStore;
use std::fmt::Write as _;

/// List the indexed documentation sets with their entry counts.
pub async fn handle_list_sets(store: &DocStore) -> Result<String, String> {
    let sets = store
        .engine()
        .list_doc_sets()
        .await
        .map_err(|e| e.to_string())?;

    if sets.is_empty() {
        return Ok(format!(
            "No documentation sets found under {}.\n\
             Extract a DevDocs tree there first, or point the server at one \
             with --docs-dir / DEVDOCS_DOCS_DIR.\n",
            store.docs_dir().display()
        ));
    }

    let mut output = format!("Documentation sets ({}):\n", sets.len());
    for (name, count) in &sets {
        output
            .write_fmt(format_args!("  • {} ({} entries)\n", name, count))
            .unwrap();
    }
    Ok(output)
}
