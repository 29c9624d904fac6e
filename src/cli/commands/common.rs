use crate::utils::{GitUtilError, Result};
use std::path::{Path, PathBuf};

/// Resolves the directory to scan: the explicit flag value or the current
/// directory, normalized to an absolute path.
pub fn resolve_scan_root(directory: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match directory {
        Some(dir) => dir,
        None => std::env::current_dir()
            .map_err(|e| GitUtilError::fs(format!("failed to get current directory: {e}")))?,
    };

    dir.canonicalize()
        .map_err(|e| GitUtilError::fs(format!("failed to resolve '{}': {e}", dir.display())))
}

/// Path shown for a repository: relative to the scan root, or the root's
/// file name when the repository is the scan root itself.
pub fn display_path(repo: &Path, root: &Path) -> String {
    match repo.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string()),
        Ok(rel) => rel.display().to_string(),
        Err(_) => repo.display().to_string(),
    }
}
