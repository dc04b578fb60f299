mod common;

use assert2::check;
use common::{TempDocs, sample_docs};
use devdocs_mcp::DocsError;
use devdocs_mcp::tools::list_sets::handle_list_sets;
use rstest::rstest;
use std::sync::Arc;

/// Test: unchanged tree, two snapshot calls, same Arc back (no re-walk).
#[rstest]
#[tokio::test]
async fn snapshot_is_cached_while_tree_unchanged(sample_docs: TempDocs) {
    let first = sample_docs.store.index().snapshot().await.unwrap();
    let second = sample_docs.store.index().snapshot().await.unwrap();

    check!(Arc::ptr_eq(&first, &second));
    check!(first.entry_count() == 4);
}

/// Test: entries are grouped by first path segment and ordered by path.
#[rstest]
#[tokio::test]
async fn snapshot_groups_by_doc_set(sample_docs: TempDocs) {
    let snapshot = sample_docs.store.index().snapshot().await.unwrap();

    check!(snapshot.set_names() == vec!["python".to_string(), "rust".to_string()]);

    let python = snapshot.set("python").unwrap();
    let paths: Vec<&str> = python.entries.iter().map(|e| e.path.as_str()).collect();
    check!(
        paths
            == vec![
                "python/index.html",
                "python/list.fragment.html",
                "python/list.html",
            ]
    );
    check!(python.entries.iter().all(|e| e.doc_set == "python"));
}

/// Test: explicit invalidation forces the next call to pick up new files.
#[rstest]
#[tokio::test]
async fn invalidate_triggers_rebuild(sample_docs: TempDocs) {
    let before = sample_docs.store.index().snapshot().await.unwrap();
    check!(before.find_exact("python/dict.html").is_none());

    sample_docs.create_doc("python/dict.html", "Python dict documentation.");
    sample_docs.store.index().invalidate().await;

    let after = sample_docs.store.index().snapshot().await.unwrap();
    check!(after.find_exact("python/dict.html").is_some());
    check!(!Arc::ptr_eq(&before, &after));
}

/// Test: writing into a doc-set directory changes its mtime, which the
/// fingerprint check picks up without an explicit invalidation.
#[rstest]
#[tokio::test]
async fn mtime_change_invalidates_cache(sample_docs: TempDocs) {
    let before = sample_docs.store.index().snapshot().await.unwrap();

    // Some filesystems have coarse mtime resolution.
    std::thread::sleep(std::time::Duration::from_millis(20));
    sample_docs.create_doc("rust/string.html", "Rust String documentation.");

    let after = sample_docs.store.index().snapshot().await.unwrap();
    check!(after.find_exact("rust/string.html").is_some());
}

/// Test: non-HTML files and files outside any doc set are ignored.
#[rstest]
#[tokio::test]
async fn walk_ignores_non_docs() {
    let docs = TempDocs::empty();
    docs.create_doc("python/list.html", "Python list documentation.");
    std::fs::write(docs.root().join("python/notes.txt"), "not a doc").unwrap();
    std::fs::write(docs.root().join("stray.html"), "<p>no set</p>").unwrap();

    let snapshot = docs.store.index().snapshot().await.unwrap();
    check!(snapshot.entry_count() == 1);
    check!(snapshot.find_exact("python/list.html").is_some());
}

/// Test: a missing root is an index error for every operation.
#[tokio::test]
async fn missing_root_is_index_error() {
    let store = devdocs_mcp::DocStore::new("/nonexistent/devdocs/tree");

    let err = store.index().snapshot().await.unwrap_err();
    check!(matches!(err, DocsError::Index { .. }));

    let err = store.engine().search("list", None, 20).await.unwrap_err();
    check!(matches!(err, DocsError::Index { .. }));
}

/// Test: the list tool shows set names with entry counts.
#[rstest]
#[tokio::test]
async fn list_sets_tool_shows_counts(sample_docs: TempDocs) {
    let output = handle_list_sets(&sample_docs.store).await.unwrap();

    check!(output.contains("Documentation sets (2)"));
    check!(output.contains("python (3 entries)"));
    check!(output.contains("rust (1 entries)"));
}

/// Test: an empty tree lists no sets but does not error.
#[tokio::test]
async fn empty_tree_lists_nothing() {
    let docs = TempDocs::empty();
    let output = handle_list_sets(&docs.store).await.unwrap();
    check!(output.contains("No documentation sets found"));
}
