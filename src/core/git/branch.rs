use super::command::run_git;
use crate::utils::{GitUtilError, Result};
use std::path::Path;

/// Tries `main` and then `master` and returns the first branch that exists
/// locally. Probing treats any command failure as "branch missing" without
/// distinguishing real verification failures; this matches the underlying
/// `show-ref --verify --quiet` contract and is an accepted simplification.
pub fn detect_default_branch(repo: &Path) -> Result<String> {
    for candidate in ["main", "master"] {
        if branch_exists(repo, candidate) {
            return Ok(candidate.to_string());
        }
    }
    Err(GitUtilError::NoDefaultBranch)
}

fn branch_exists(repo: &Path, name: &str) -> bool {
    run_git(
        repo,
        &["show-ref", "--verify", "--quiet", &format!("refs/heads/{name}")],
    )
    .is_ok()
}

/// Lists the local branches fully merged into `target`, excluding the
/// current branch and `target` itself. A listing failure caused by a missing
/// target branch surfaces as `BranchNotFound`; any other failure is returned
/// as-is.
pub fn merged_branch_candidates(repo: &Path, target: &str) -> Result<Vec<String>> {
    let listing = run_git(repo, &["branch", "--merged", target]).map_err(|err| {
        if err
            .stderr()
            .is_some_and(|stderr| stderr.contains("malformed object name"))
        {
            GitUtilError::BranchNotFound(target.to_string())
        } else {
            err
        }
    })?;

    Ok(filter_merged_listing(&listing, target))
}

/// Pure filter over the `branch --merged` listing: trims each line, drops
/// empties, drops the `"* "`-marked current branch and the target branch
/// itself. Order is preserved from the listing.
fn filter_merged_listing(listing: &str, target: &str) -> Vec<String> {
    listing
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with('*'))
        .filter(|line| *line != target)
        .map(str::to_string)
        .collect()
}

/// Safe delete (`branch -d`): fails if the branch is not fully merged.
pub fn delete_branch(repo: &Path, name: &str) -> Result<()> {
    run_git(repo, &["branch", "-d", name]).map(|_| ())
}
