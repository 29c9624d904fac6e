use crate::cli::parser::CleanArgs;
use crate::core::git::{delete_branch, detect_default_branch, merged_branch_candidates};
use crate::utils::Result;
use std::path::Path;

/// Branch cleanup against the repository at `repo` (the current directory
/// in normal use): determine the target branch, list the branches merged
/// into it, then report or delete them depending on the flags.
pub fn execute(repo: &Path, args: CleanArgs) -> Result<()> {
    let target = match args.main_branch {
        Some(branch) => branch,
        None => detect_default_branch(repo)?,
    };

    let candidates = merged_branch_candidates(repo, &target)?;
    if candidates.is_empty() {
        println!("No local branches merged into '{target}'.");
        return Ok(());
    }

    if !args.delete {
        println!("Local branches merged into '{target}':");
        for branch in &candidates {
            println!("  {branch}");
        }
        println!("\nRun again with --delete to remove them.");
        return Ok(());
    }

    if args.dry_run {
        for branch in &candidates {
            println!("Would delete branch '{branch}'");
        }
        println!("\nDry run: {} branches left untouched.", candidates.len());
        return Ok(());
    }

    let (deleted, failed) = delete_branches(repo, &candidates);
    println!("\nDeleted {deleted} branches, {failed} failed.");
    Ok(())
}

/// Deletes each candidate independently; a failure on one branch does not
/// abort the rest. Returns (deleted, failed) counts.
fn delete_branches(repo: &Path, candidates: &[String]) -> (usize, usize) {
    let mut deleted = 0;
    let mut failed = 0;
    for branch in candidates {
        match delete_branch(repo, branch) {
            Ok(()) => {
                println!("Deleted branch '{branch}'");
                deleted += 1;
            }
            Err(err) => {
                eprintln!("git-util: warning: failed to delete '{branch}': {err}");
                failed += 1;
            }
        }
    }
    (deleted, failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{git, setup_test_repo};
    use crate::utils::GitUtilError;

    fn clean_args(delete: bool, dry_run: bool) -> CleanArgs {
        CleanArgs {
            main_branch: None,
            delete,
            dry_run,
        }
    }

    #[test]
    fn test_report_mode_deletes_nothing() {
        let (_temp_dir, repo) = setup_test_repo();
        git(&repo, &["branch", "feature-a"]);

        execute(&repo, clean_args(false, false)).expect("clean failed");

        let remaining = merged_branch_candidates(&repo, "main").expect("Failed to list branches");
        assert_eq!(remaining, vec!["feature-a"]);
    }

    #[test]
    fn test_dry_run_deletes_nothing() {
        let (_temp_dir, repo) = setup_test_repo();
        git(&repo, &["branch", "feature-a"]);
        git(&repo, &["branch", "feature-b"]);

        execute(&repo, clean_args(true, true)).expect("clean failed");

        let remaining = merged_branch_candidates(&repo, "main").expect("Failed to list branches");
        assert_eq!(remaining, vec!["feature-a", "feature-b"]);
    }

    #[test]
    fn test_delete_removes_merged_branches() {
        let (_temp_dir, repo) = setup_test_repo();
        git(&repo, &["branch", "feature-a"]);
        git(&repo, &["branch", "feature-b"]);

        execute(&repo, clean_args(true, false)).expect("clean failed");

        let remaining = merged_branch_candidates(&repo, "main").expect("Failed to list branches");
        assert!(remaining.is_empty());
    }

    #[test]
    fn test_one_failed_deletion_does_not_stop_the_rest() {
        let (_temp_dir, repo) = setup_test_repo();
        git(&repo, &["branch", "feature-a"]);
        git(&repo, &["branch", "feature-b"]);

        let candidates = vec![
            "feature-a".to_string(),
            "no-such-branch".to_string(),
            "feature-b".to_string(),
        ];
        let (deleted, failed) = delete_branches(&repo, &candidates);

        assert_eq!(deleted, 2);
        assert_eq!(failed, 1);
        let remaining = merged_branch_candidates(&repo, "main").expect("Failed to list branches");
        assert!(remaining.is_empty());
    }

    #[test]
    fn test_missing_target_branch_is_fatal() {
        let (_temp_dir, repo) = setup_test_repo();

        let args = CleanArgs {
            main_branch: Some("no-such-branch".to_string()),
            delete: false,
            dry_run: false,
        };
        let err = execute(&repo, args).expect_err("expected clean to fail");
        assert!(matches!(err, GitUtilError::BranchNotFound(_)));
    }

    #[test]
    fn test_explicit_target_overrides_detection() {
        let (_temp_dir, repo) = setup_test_repo();
        git(&repo, &["branch", "-m", "main", "trunk"]);
        git(&repo, &["branch", "feature-a"]);

        let args = CleanArgs {
            main_branch: Some("trunk".to_string()),
            delete: true,
            dry_run: false,
        };
        execute(&repo, args).expect("clean failed");

        let remaining = merged_branch_candidates(&repo, "trunk").expect("Failed to list branches");
        assert!(remaining.is_empty());
    }
}
