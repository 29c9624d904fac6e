use crate::utils::{GitUtilError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const GIT_DIR_NAME: &str = ".git";

/// Subtrees that never need to be scanned for repositories. Skipping them is
/// a speed optimization, not a correctness requirement.
const SKIPPED_DIRS: &[&str] = &["node_modules", "vendor", "target", "build"];

/// Walks `root` recursively and returns the root path of every Git
/// repository found (the parent of each `.git` directory).
///
/// The walk does not descend into `.git` directories or into the excluded
/// subtrees, but it does keep walking the rest of a discovered repository's
/// working tree, so repositories nested inside another repository are
/// reported as independent entries. Unreadable entries produce a warning on
/// stderr and are skipped; the rest of the tree is still walked.
///
/// Paths come back in filesystem-traversal order. Callers that need
/// deterministic output must sort explicitly.
pub fn find_git_repos(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(GitUtilError::fs(format!(
            "'{}' is not a directory",
            root.display()
        )));
    }

    let mut repos = Vec::new();
    let mut walker = WalkDir::new(root).into_iter();

    loop {
        let entry = match walker.next() {
            None => break,
            Some(Err(err)) => {
                eprintln!("git-util: warning: error accessing path: {err}");
                continue;
            }
            Some(Ok(entry)) => entry,
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if name == GIT_DIR_NAME {
            if let Some(parent) = entry.path().parent() {
                repos.push(parent.to_path_buf());
            }
            walker.skip_current_dir();
        } else if SKIPPED_DIRS.iter().any(|skipped| *skipped == name) {
            walker.skip_current_dir();
        }
    }

    Ok(repos)
}
