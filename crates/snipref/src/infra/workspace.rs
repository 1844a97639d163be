//! Workspace root discovery and relative path rendering.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Resolve the root used for relative references: an explicit override, else
/// the nearest repository root, else the current directory.
pub fn resolve_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = explicit {
        return Ok(root);
    }
    let cwd = std::env::current_dir().context("unable to determine working directory")?;
    Ok(find_repo_root(&cwd).unwrap_or(cwd))
}

/// Nearest ancestor of `start` containing a `.git` entry.
pub fn find_repo_root(start: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

/// Render `path` relative to `root` when it lies underneath it; otherwise
/// render the path as given. Both sides are canonicalized on a best-effort
/// basis so symlinked roots still match.
pub fn relative_to_root(path: &Path, root: &Path) -> String {
    let canonical_path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    let canonical_root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());

    match canonical_path.strip_prefix(&canonical_root) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative.display().to_string(),
        _ => path.display().to_string(),
    }
}
