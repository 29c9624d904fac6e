use super::common::{display_path, resolve_scan_root};
use crate::cli::parser::StatusArgs;
use crate::core::discovery::find_git_repos;
use crate::core::git::repo_status;
use crate::utils::Result;

/// Scans a directory tree and prints one status line per repository, in the
/// order the locator found them, aligned on the longest displayed path.
pub fn execute(args: StatusArgs) -> Result<()> {
    let root = resolve_scan_root(args.directory)?;
    println!("Scanning directory: {}\n", root.display());

    let repos = find_git_repos(&root)?;
    if repos.is_empty() {
        println!("No Git repositories found in the specified directory.");
        return Ok(());
    }

    let labels: Vec<String> = repos.iter().map(|repo| display_path(repo, &root)).collect();
    let width = labels.iter().map(String::len).max().unwrap_or(0);

    for (repo, label) in repos.iter().zip(&labels) {
        let status = repo_status(repo);
        println!("{label:<width$} : {}", status.summary());
    }

    Ok(())
}
