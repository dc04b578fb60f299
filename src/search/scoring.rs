//! Fuzzy similarity scoring and candidate ranking.
//!
//! Scores live in `[0, 100]`, higher is closer. A case-insensitive equality
//! or substring hit short-circuits to the maximum before the edit-distance
//! measure runs. The concrete similarity algorithm sits behind
//! [`SimilarityScorer`] so it can be swapped and pinned with fixture vectors
//! in tests.

use crate::index::DocEntry;
use rapidfuzz::distance::jaro_winkler;

/// Maximum similarity score.
pub const MAX_SCORE: f64 = 100.0;

/// Minimum similarity for a search hit to appear in results.
pub const SEARCH_SCORE_CUTOFF: f64 = 60.0;

/// Minimum similarity for the read-path fuzzy fallback to accept a
/// candidate. Stricter than search: returning the wrong document is worse
/// than returning none.
pub const RESOLVE_SCORE_CUTOFF: f64 = 70.0;

/// Score bonus for entries whose doc set matches the caller's filter when
/// searching in "boost, don't filter" mode. Applied after the cutoff so it
/// reorders but never admits poor matches.
pub const SET_MATCH_BOOST: f64 = 5.0;

/// Narrow seam over the approximate string similarity measure.
pub trait SimilarityScorer: Send + Sync {
    /// Score `candidate` against `query`, returning a value in `[0, 100]`.
    fn score(&self, query: &str, candidate: &str) -> f64;
}

/// Default scorer: Jaro-Winkler similarity with an exact/substring
/// short-circuit.
#[derive(Debug, Default, Clone, Copy)]
pub struct JaroWinklerScorer;

impl SimilarityScorer for JaroWinklerScorer {
    fn score(&self, query: &str, candidate: &str) -> f64 {
        let query = query.to_lowercase();
        let candidate = candidate.to_lowercase();

        if !query.is_empty() && candidate.contains(&query) {
            return MAX_SCORE;
        }

        jaro_winkler::similarity(query.chars(), candidate.chars()) * MAX_SCORE
    }
}

/// One ranked candidate.
#[derive(Debug, Clone, Copy)]
pub struct RankedEntry<'a> {
    pub entry: &'a DocEntry,
    pub score: f64,
}

/// Rank `entries` against `query`, descending by score.
///
/// An entry's score is the better of its title score and its path score.
/// Entries whose raw score falls below `cutoff` are excluded entirely;
/// `boost_set` then adds [`SET_MATCH_BOOST`] to same-set survivors. Ties
/// break toward the shorter (more specific) path, then lexically by path,
/// so repeated calls over an unchanged snapshot are fully deterministic.
pub fn rank_entries<'a>(
    scorer: &dyn SimilarityScorer,
    query: &str,
    entries: impl IntoIterator<Item = &'a DocEntry>,
    boost_set: Option<&str>,
    cutoff: f64,
) -> Vec<RankedEntry<'a>> {
    let mut ranked: Vec<RankedEntry<'a>> = entries
        .into_iter()
        .filter_map(|entry| {
            let raw = scorer
                .score(query, &entry.title)
                .max(scorer.score(query, &entry.path));
            if raw < cutoff {
                return None;
            }
            let boost = match boost_set {
                Some(set) if entry.doc_set == set => SET_MATCH_BOOST,
                _ => 0.0,
            };
            Some(RankedEntry {
                entry,
                score: raw + boost,
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.entry.path.len().cmp(&b.entry.path.len()))
            .then_with(|| a.entry.path.cmp(&b.entry.path))
    });

    ranked
}
