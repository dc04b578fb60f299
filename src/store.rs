//! Shared engine state.

use crate::index::FileIndex;
use crate::resolve::DocResolver;
use crate::search::{JaroWinklerScorer, SearchEngine, SimilarityScorer};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Lifecycle-scoped bundle of the index, search engine, and resolver.
///
/// Constructed once per process (or per test, over a synthetic tree) and
/// shared by `Arc` with every tool handler. There is deliberately no
/// process-global instance.
pub struct DocStore {
    index: Arc<FileIndex>,
    engine: SearchEngine,
    resolver: DocResolver,
}

impl std::fmt::Debug for DocStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocStore")
            .field("root", &self.index.root())
            .finish()
    }
}

impl DocStore {
    /// Create a store over `docs_dir` with the default Jaro-Winkler scorer.
    pub fn new(docs_dir: impl Into<PathBuf>) -> Self {
        Self::with_scorer(docs_dir, Arc::new(JaroWinklerScorer))
    }

    /// Create a store with an explicit scorer (tests pin tiebreak behavior
    /// with reference scorers).
    pub fn with_scorer(docs_dir: impl Into<PathBuf>, scorer: Arc<dyn SimilarityScorer>) -> Self {
        let index = Arc::new(FileIndex::new(docs_dir));
        let engine = SearchEngine::new(index.clone(), scorer.clone());
        let resolver = DocResolver::new(index.clone(), scorer);
        Self {
            index,
            engine,
            resolver,
        }
    }

    pub fn docs_dir(&self) -> &Path {
        self.index.root()
    }

    pub fn index(&self) -> &Arc<FileIndex> {
        &self.index
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    pub fn resolver(&self) -> &DocResolver {
        &self.resolver
    }
}
