use super::common::{display_path, resolve_scan_root};
use crate::cli::parser::SyncArgs;
use crate::core::discovery::find_git_repos;
use crate::core::git::{sync_repo, SyncAction};
use crate::utils::Result;
use std::io::Write;

/// Scans a directory tree and fetches or pulls every repository found,
/// sequentially. A failing repository is reported and counted but never
/// stops the remaining ones; the exit code stays zero.
pub fn execute(args: SyncArgs) -> Result<()> {
    // Reject a bad action before any repository is touched.
    let action = SyncAction::parse(&args.action)?;

    let root = resolve_scan_root(args.directory)?;
    println!(
        "Scanning directory: {} (action: {})\n",
        root.display(),
        action.label()
    );

    let repos = find_git_repos(&root)?;
    if repos.is_empty() {
        println!("No Git repositories found in the specified directory.");
        return Ok(());
    }

    let labels: Vec<String> = repos.iter().map(|repo| display_path(repo, &root)).collect();
    let width = labels.iter().map(String::len).max().unwrap_or(0);

    let mut succeeded = 0;
    let mut failed = 0;
    for (repo, label) in repos.iter().zip(&labels) {
        print!("{label:<width$} : Syncing ({})... ", action.label());
        std::io::stdout().flush().ok();

        let outcome = sync_repo(repo, action);
        if outcome.succeeded {
            println!("OK");
            succeeded += 1;
        } else {
            println!("FAILED");
            if let Some(error) = &outcome.error {
                eprintln!("  {error}");
            }
            if !outcome.output.is_empty() {
                eprintln!("  output: {}", outcome.output);
            }
            failed += 1;
        }
    }

    println!("\nSynced {succeeded} repositories, {failed} failed.");
    Ok(())
}
