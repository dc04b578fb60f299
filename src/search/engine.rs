//! Search orchestration: rank, dedupe by stem, expand, truncate.

use crate::error::{DocsError, Result};
use crate::index::{DocEntry, FileIndex};
use crate::search::scoring::{SEARCH_SCORE_CUTOFF, SimilarityScorer, rank_entries};
use crate::stem::group_by_stem;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Default number of results when the caller does not specify a limit.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// One search hit.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub entry: DocEntry,
    /// Representative score of the entry's stem group, `[0, 100]` plus any
    /// set boost.
    pub score: f64,
    /// True when this entry rode along with a better-scoring variant of the
    /// same stem rather than matching the query on its own.
    pub via_expansion: bool,
}

/// Fuzzy search over the indexed documentation.
pub struct SearchEngine {
    index: Arc<FileIndex>,
    scorer: Arc<dyn SimilarityScorer>,
}

impl SearchEngine {
    pub fn new(index: Arc<FileIndex>, scorer: Arc<dyn SimilarityScorer>) -> Self {
        Self { index, scorer }
    }

    /// Search entry titles/paths for `query`.
    ///
    /// When `doc_set` is given, candidates are restricted to that set; a
    /// name not present in the index is an [`DocsError::UnknownDocSet`]
    /// (reporting which sets exist), while a present set with no hits is an
    /// empty list. Hits are deduplicated by stem and then expanded so that
    /// every variant of a matched topic appears together: a user searching
    /// "list" wants `list.html` and `list.fragment.html` side by side, not
    /// whichever one happened to score higher.
    pub async fn search(
        &self,
        query: &str,
        doc_set: Option<&str>,
        limit: usize,
    ) -> Result<Vec<SearchResult>> {
        if query.trim().is_empty() {
            return Err(DocsError::InvalidQuery);
        }

        let snapshot = self.index.snapshot().await?;

        let candidates: Vec<&DocEntry> = match doc_set {
            Some(name) => snapshot
                .set(name)
                .ok_or_else(|| DocsError::UnknownDocSet {
                    requested: name.to_string(),
                    available: snapshot.set_names(),
                })?
                .entries
                .iter()
                .collect(),
            None => snapshot.entries().collect(),
        };

        let ranked = rank_entries(
            self.scorer.as_ref(),
            query,
            candidates.iter().copied(),
            doc_set,
            SEARCH_SCORE_CUTOFF,
        );

        // Expansion pulls from the full candidate pool, not just the ranked
        // survivors: a variant below the cutoff still belongs to its group.
        let groups = group_by_stem(&candidates);
        let mut members_of = HashMap::new();
        for (stem, members) in &groups {
            members_of.insert(stem.as_str(), members);
        }

        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        let mut results = Vec::new();

        for hit in &ranked {
            let key = (hit.entry.doc_set.as_str(), hit.entry.stem.as_str());
            if !seen.insert(key) {
                continue;
            }

            results.push(SearchResult {
                entry: hit.entry.clone(),
                score: hit.score,
                via_expansion: false,
            });

            if let Some(members) = members_of.get(hit.entry.stem.as_str()) {
                for member in members.iter() {
                    if member.path == hit.entry.path || member.doc_set != hit.entry.doc_set {
                        continue;
                    }
                    results.push(SearchResult {
                        entry: (*member).clone(),
                        score: hit.score,
                        via_expansion: true,
                    });
                }
            }
        }

        results.truncate(limit);
        tracing::debug!(
            query,
            doc_set = doc_set.unwrap_or("<all>"),
            results = results.len(),
            "search complete"
        );
        Ok(results)
    }

    /// Doc set names with their entry counts, in name order.
    pub async fn list_doc_sets(&self) -> Result<Vec<(String, usize)>> {
        let snapshot = self.index.snapshot().await?;
        Ok(snapshot
            .sets()
            .map(|set| (set.name.clone(), set.entries.len()))
            .collect())
    }
}
