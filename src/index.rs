//! File-list index over the extracted documentation tree.
//!
//! The index walks the docs root once, groups files by their first path
//! segment into doc sets, and memoizes the result as an [`IndexSnapshot`].
//! Freshness is tracked with a directory-mtime fingerprint: a cache hit
//! returns the prior snapshot without touching the tree beyond a shallow
//! `read_dir`, a miss rebuilds the whole snapshot off to the side and swaps
//! it in atomically. Readers always see either the old or the new snapshot
//! in full.

use crate::error::{DocsError, Result};
use crate::stem::stem_of;
use ignore::WalkBuilder;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::UNIX_EPOCH;
use tokio::sync::RwLock;
use xxhash_rust::xxh3::Xxh3;

/// One documentation file, owned by exactly one [`DocSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocEntry {
    /// Path relative to the docs root, `/`-separated.
    pub path: String,
    /// Display title: path without extension, separators humanized.
    pub title: String,
    /// Grouping key collapsing format/fragment variants. See [`stem_of`].
    pub stem: String,
    /// Name of the owning doc set (first path segment).
    pub doc_set: String,
}

impl DocEntry {
    fn new(doc_set: &str, rel_path: String) -> Self {
        let without_ext = rel_path
            .strip_suffix(".html")
            .or_else(|| rel_path.strip_suffix(".htm"))
            .unwrap_or(&rel_path);
        let title = without_ext.replace(['_', '-'], " ");
        let stem = stem_of(&rel_path);
        Self {
            path: rel_path,
            title,
            stem,
            doc_set: doc_set.to_string(),
        }
    }
}

/// A named collection of documentation files for one technology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocSet {
    pub name: String,
    /// Ordered by path for deterministic ranking and grouping.
    pub entries: Vec<DocEntry>,
}

/// The full in-memory picture of the docs tree at one point in time.
///
/// Immutable once built; replaced wholesale on rebuild.
#[derive(Debug)]
pub struct IndexSnapshot {
    sets: BTreeMap<String, DocSet>,
    fingerprint: u64,
}

impl IndexSnapshot {
    /// Look up a doc set by name.
    pub fn set(&self, name: &str) -> Option<&DocSet> {
        self.sets.get(name)
    }

    /// All doc sets, in name order.
    pub fn sets(&self) -> impl Iterator<Item = &DocSet> {
        self.sets.values()
    }

    /// All entries across every doc set.
    pub fn entries(&self) -> impl Iterator<Item = &DocEntry> {
        self.sets.values().flat_map(|set| set.entries.iter())
    }

    /// Names of the indexed doc sets, in order.
    pub fn set_names(&self) -> Vec<String> {
        self.sets.keys().cloned().collect()
    }

    /// Find an entry whose relative path matches `path` verbatim.
    ///
    /// Uses the first path segment to pick the doc set when possible,
    /// falling back to a scan across all sets.
    pub fn find_exact(&self, path: &str) -> Option<&DocEntry> {
        if let Some((set_name, _)) = path.split_once('/')
            && let Some(set) = self.sets.get(set_name)
        {
            return set.entries.iter().find(|e| e.path == path);
        }
        self.entries().find(|e| e.path == path)
    }

    /// Freshness token this snapshot was built against.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Total number of indexed entries.
    pub fn entry_count(&self) -> usize {
        self.sets.values().map(|set| set.entries.len()).sum()
    }
}

/// Cached, freshness-checked view of the docs tree.
///
/// Constructed once and shared by handle; tests build isolated instances
/// over synthetic trees.
pub struct FileIndex {
    root: PathBuf,
    cached: RwLock<Option<Arc<IndexSnapshot>>>,
}

impl std::fmt::Debug for FileIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileIndex").field("root", &self.root).finish()
    }
}

impl FileIndex {
    /// Create an index over `root`. No filesystem access happens until the
    /// first [`snapshot`](Self::snapshot) call.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cached: RwLock::new(None),
        }
    }

    /// The documentation root this index walks.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the current snapshot, rebuilding only when the tree changed.
    pub async fn snapshot(&self) -> Result<Arc<IndexSnapshot>> {
        let fingerprint = self.fingerprint()?;

        {
            let cached = self.cached.read().await;
            if let Some(snapshot) = cached.as_ref()
                && snapshot.fingerprint == fingerprint
            {
                tracing::debug!(fingerprint, "index cache hit");
                return Ok(snapshot.clone());
            }
        }

        let snapshot = Arc::new(self.rebuild(fingerprint)?);
        tracing::info!(
            sets = snapshot.sets.len(),
            entries = snapshot.entry_count(),
            "rebuilt documentation index"
        );
        *self.cached.write().await = Some(snapshot.clone());
        Ok(snapshot)
    }

    /// Drop the cached snapshot, forcing a rebuild on the next call.
    pub async fn invalidate(&self) {
        *self.cached.write().await = None;
    }

    /// Cheap freshness signal: hash of the root mtime plus each doc-set
    /// subdirectory's name and mtime, in sorted order.
    fn fingerprint(&self) -> Result<u64> {
        let index_err = |source| DocsError::Index {
            path: self.root.clone(),
            source,
        };

        let mut hasher = Xxh3::new();
        hash_mtime(&mut hasher, &std::fs::metadata(&self.root).map_err(index_err)?);

        let mut subdirs: Vec<(String, std::fs::Metadata)> = Vec::new();
        for entry in std::fs::read_dir(&self.root).map_err(index_err)? {
            let entry = entry.map_err(index_err)?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            let meta = entry.metadata().map_err(index_err)?;
            if meta.is_dir() {
                subdirs.push((name, meta));
            }
        }
        subdirs.sort_by(|a, b| a.0.cmp(&b.0));

        for (name, meta) in &subdirs {
            hasher.update(name.as_bytes());
            hash_mtime(&mut hasher, meta);
        }

        Ok(hasher.digest())
    }

    /// Full rebuild: walk the tree and group `*.html` files by doc set.
    fn rebuild(&self, fingerprint: u64) -> Result<IndexSnapshot> {
        let mut sets: BTreeMap<String, Vec<DocEntry>> = BTreeMap::new();

        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .hidden(true)
            .build();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("skipping unreadable entry: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.path();
            let is_html = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"));
            if !is_html {
                continue;
            }

            let Ok(rel) = path.strip_prefix(&self.root) else {
                continue;
            };
            let rel: Vec<String> = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            // Files directly under the root belong to no doc set.
            if rel.len() < 2 {
                continue;
            }

            let doc_set = rel[0].clone();
            let rel_path = rel.join("/");
            sets.entry(doc_set.clone())
                .or_default()
                .push(DocEntry::new(&doc_set, rel_path));
        }

        let sets = sets
            .into_iter()
            .map(|(name, mut entries)| {
                entries.sort_by(|a, b| a.path.cmp(&b.path));
                let set = DocSet {
                    name: name.clone(),
                    entries,
                };
                (name, set)
            })
            .collect();

        Ok(IndexSnapshot { sets, fingerprint })
    }
}

fn hash_mtime(hasher: &mut Xxh3, meta: &std::fs::Metadata) {
    if let Ok(mtime) = meta.modified()
        && let Ok(since_epoch) = mtime.duration_since(UNIX_EPOCH)
    {
        hasher.update(&since_epoch.as_nanos().to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn entry_derives_title_and_stem() {
        let entry = DocEntry::new("python", "python/exception_groups.html".to_string());
        check!(entry.title == "python/exception groups");
        check!(entry.stem == "python/exception_groups");
        check!(entry.doc_set == "python");
    }

    #[test]
    fn fragment_variants_share_a_stem() {
        let a = DocEntry::new("python", "python/list.html".to_string());
        let b = DocEntry::new("python", "python/list.fragment.html".to_string());
        check!(a.stem == b.stem);
    }
}
