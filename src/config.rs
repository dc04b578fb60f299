//! Documentation root discovery.
//!
//! The docs tree is produced by an external extraction step (the DevDocs
//! container copy). Resolution order: explicit path, `DEVDOCS_DOCS_DIR`
//! environment variable, then a list of conventional locations.

use std::borrow::Cow;
use std::path::PathBuf;

/// Environment variable pointing at the extracted docs tree.
pub const DOCS_DIR_ENV: &str = "DEVDOCS_DOCS_DIR";

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
///
/// Returns `Cow::Borrowed` if no expansion needed, `Cow::Owned` if expanded.
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}

/// Resolve the documentation root directory.
///
/// An explicit `flag` wins, then the `DEVDOCS_DOCS_DIR` environment
/// variable, then the first existing conventional location. Falls back to
/// `docs/docs` (the default extraction target) so that a missing tree
/// surfaces as an index error rather than a silent empty result.
pub fn resolve_docs_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return PathBuf::from(expand_tilde(&dir.display().to_string()).into_owned());
    }

    if let Ok(dir) = std::env::var(DOCS_DIR_ENV)
        && !dir.trim().is_empty()
    {
        return PathBuf::from(expand_tilde(&dir).into_owned());
    }

    let mut candidates = vec![PathBuf::from("docs/docs"), PathBuf::from("docs")];
    candidates.push(PathBuf::from("/usr/local/share/devdocs/docs"));
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".local/share/devdocs/docs"));
    }

    for candidate in candidates {
        if candidate.is_dir() {
            return candidate;
        }
    }

    PathBuf::from("docs/docs")
}
