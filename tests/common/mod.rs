//! Shared test fixtures for integration tests.
//!
//! Each test gets an isolated temp directory holding a small synthetic
//! DevDocs tree and its own `DocStore`, so index caches never leak between
//! tests.

use devdocs_mcp::DocStore;
use rstest::fixture;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// A temporary docs tree plus a store indexing it.
pub struct TempDocs {
    _temp: TempDir,
    root: PathBuf,
    pub store: Arc<DocStore>,
}

#[allow(dead_code)] // Helpers used across different integration test crates
impl TempDocs {
    /// Creates an empty docs tree.
    pub fn empty() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().join("docs");
        std::fs::create_dir_all(&root).expect("Failed to create docs root");
        let store = Arc::new(DocStore::new(&root));
        Self {
            _temp: temp,
            root,
            store,
        }
    }

    /// Returns the docs root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes an HTML file at `rel_path` (creating parent directories).
    pub fn create_doc(&self, rel_path: &str, body: &str) {
        let full = self.root.join(rel_path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create doc set directory");
        }
        std::fs::write(
            &full,
            format!("<html><body><h1>{rel_path}</h1><p>{body}</p></body></html>"),
        )
        .expect("Failed to write doc file");
    }
}

/// Standard fixture tree used by most scenarios:
///
/// ```text
/// python/index.html
/// python/list.html
/// python/list.fragment.html
/// rust/vec.html
/// ```
#[fixture]
pub fn sample_docs() -> TempDocs {
    let docs = TempDocs::empty();
    docs.create_doc("python/index.html", "Welcome to Python documentation.");
    docs.create_doc("python/list.html", "Python list documentation.");
    docs.create_doc("python/list.fragment.html", "List methods fragment.");
    docs.create_doc("rust/vec.html", "Rust Vec documentation.");
    docs
}
