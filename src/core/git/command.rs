use crate::utils::{GitUtilError, Result};
use std::path::Path;
use std::process::Command;

/// Runs `git` with the given arguments inside `repo`, capturing stdout and
/// stderr separately. Returns the trimmed stdout, or an error that carries
/// the joined argument list, the underlying cause and the captured stderr.
///
/// Blocking; one OS process per call; no retry and no timeout.
pub fn run_git(repo: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .current_dir(repo)
        .args(args)
        .output()
        .map_err(|e| GitUtilError::GitCommand {
            command: args.join(" "),
            cause: format!("failed to execute git: {e}"),
            stderr: String::new(),
            output: String::new(),
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(GitUtilError::GitCommand {
            command: args.join(" "),
            cause: output.status.to_string(),
            stderr,
            output: stdout,
        });
    }

    Ok(stdout)
}
