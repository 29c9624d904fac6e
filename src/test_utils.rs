use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Runs a git command in `repo` and panics on failure. Test-fixture plumbing
/// only; production code goes through `core::git::command::run_git`.
pub fn git(repo: &Path, args: &[&str]) {
    let status = Command::new("git")
        .current_dir(repo)
        .args(args)
        .status()
        .expect("Failed to execute git");
    assert!(status.success(), "git {args:?} failed in {repo:?}");
}

/// Runs a git command in `repo` and returns its trimmed stdout.
pub fn git_output(repo: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo)
        .args(args)
        .output()
        .expect("Failed to execute git");
    assert!(output.status.success(), "git {args:?} failed in {repo:?}");
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Initializes a repository at `repo` on branch `main` with one commit.
pub fn init_repo_at(repo: &Path) {
    fs::create_dir_all(repo).expect("Failed to create repo directory");
    git(repo, &["init", "--initial-branch=main"]);
    git(repo, &["config", "user.name", "Test User"]);
    git(repo, &["config", "user.email", "test@example.com"]);

    fs::write(repo.join("README.md"), "# Test Repository").expect("Failed to write README");
    git(repo, &["add", "README.md"]);
    git(repo, &["commit", "-m", "Initial commit"]);
}

/// Creates a throwaway repository on branch `main` with one commit.
pub fn setup_test_repo() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let repo = temp_dir.path().to_path_buf();
    init_repo_at(&repo);
    (temp_dir, repo)
}

/// Clones `origin` to `target`; the clone has `origin/main` as the
/// configured upstream of `main`.
pub fn clone_repo_at(origin: &Path, target: &Path) {
    let status = Command::new("git")
        .arg("clone")
        .arg(origin)
        .arg(target)
        .status()
        .expect("Failed to execute git clone");
    assert!(status.success(), "git clone failed for {origin:?}");

    git(target, &["config", "user.name", "Test User"]);
    git(target, &["config", "user.email", "test@example.com"]);
}

/// Clones `origin` into a fresh temp dir.
pub fn clone_test_repo(origin: &Path) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let clone = temp_dir.path().join("clone");
    clone_repo_at(origin, &clone);
    (temp_dir, clone)
}
