//! Document path resolution and reading.

use crate::error::{DocsError, Result};
use crate::index::{DocEntry, FileIndex};
use crate::render::MarkdownRenderer;
use crate::search::scoring::{RESOLVE_SCORE_CUTOFF, SimilarityScorer};
use std::sync::Arc;

/// A resolved, rendered document.
#[derive(Debug, Clone)]
pub struct ReadResult {
    pub entry: DocEntry,
    /// Rendered Markdown content.
    pub content: String,
    /// True when the requested path matched an entry verbatim.
    pub exact: bool,
    /// The original requested path, kept for transparency when resolution
    /// fell back to a fuzzy match.
    pub requested: Option<String>,
}

/// Resolves requested paths to index entries, with a fuzzy fallback for
/// near-miss paths (typos, missing extensions).
pub struct DocResolver {
    index: Arc<FileIndex>,
    scorer: Arc<dyn SimilarityScorer>,
    renderer: MarkdownRenderer,
}

impl DocResolver {
    pub fn new(index: Arc<FileIndex>, scorer: Arc<dyn SimilarityScorer>) -> Self {
        Self {
            index,
            scorer,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Resolve `requested` to an entry.
    ///
    /// An exact path match short-circuits without any fuzzy scoring.
    /// Otherwise the closest path above [`RESOLVE_SCORE_CUTOFF`] wins; if
    /// none clears it, [`DocsError::DocNotFound`] reports the nearest score
    /// seen.
    pub async fn resolve(&self, requested: &str) -> Result<(DocEntry, bool)> {
        let normalized = requested.trim().trim_start_matches("./").trim_start_matches('/');
        if normalized.is_empty() {
            return Err(DocsError::InvalidQuery);
        }

        let snapshot = self.index.snapshot().await?;

        if let Some(entry) = snapshot.find_exact(normalized) {
            return Ok((entry.clone(), true));
        }

        // Fuzzy fallback over every known path.
        let mut best: Option<(&DocEntry, f64)> = None;
        let mut nearest = None;
        for entry in snapshot.entries() {
            let score = self.scorer.score(normalized, &entry.path);
            if nearest.is_none_or(|n| score > n) {
                nearest = Some(score);
            }
            if score < RESOLVE_SCORE_CUTOFF {
                continue;
            }
            let better = match best {
                Some((best_entry, best_score)) => {
                    score > best_score
                        || (score == best_score && entry.path.len() < best_entry.path.len())
                        || (score == best_score
                            && entry.path.len() == best_entry.path.len()
                            && entry.path < best_entry.path)
                }
                None => true,
            };
            if better {
                best = Some((entry, score));
            }
        }

        match best {
            Some((entry, score)) => {
                tracing::debug!(
                    requested,
                    resolved = %entry.path,
                    score,
                    "fuzzy path fallback"
                );
                Ok((entry.clone(), false))
            }
            None => Err(DocsError::DocNotFound {
                requested: requested.to_string(),
                nearest_score: nearest,
            }),
        }
    }

    /// Resolve `requested`, read the file, and render it to Markdown.
    pub async fn read(&self, requested: &str) -> Result<ReadResult> {
        let (entry, exact) = self.resolve(requested).await?;

        let full_path = self.index.root().join(&entry.path);
        let html = tokio::fs::read_to_string(&full_path)
            .await
            .map_err(|source| DocsError::Io {
                path: full_path,
                source,
            })?;

        let content = self
            .renderer
            .render(&html)
            .map_err(|reason| DocsError::Render {
                path: entry.path.clone(),
                reason,
            })?;

        Ok(ReadResult {
            requested: (!exact).then(|| requested.to_string()),
            entry,
            content,
            exact,
        })
    }
}
