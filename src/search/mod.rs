//! Fuzzy search over the documentation index.

mod engine;
pub mod scoring;

pub use engine::{DEFAULT_SEARCH_LIMIT, SearchEngine, SearchResult};
pub use scoring::{
    JaroWinklerScorer, MAX_SCORE, RESOLVE_SCORE_CUTOFF, SEARCH_SCORE_CUTOFF, SET_MATCH_BOOST,
    SimilarityScorer, rank_entries,
};
