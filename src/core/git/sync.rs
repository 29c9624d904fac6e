use super::command::run_git;
use crate::utils::{GitUtilError, Result};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    Fetch,
    Pull,
}

impl SyncAction {
    /// Parses the CLI action string (case-insensitive). Rejecting invalid
    /// values here means no repository is touched for a bad action.
    pub fn parse(action: &str) -> Result<Self> {
        match action.to_ascii_lowercase().as_str() {
            "fetch" => Ok(Self::Fetch),
            "pull" => Ok(Self::Pull),
            _ => Err(GitUtilError::InvalidAction(action.to_string())),
        }
    }

    pub fn git_args(self) -> &'static [&'static str] {
        match self {
            Self::Fetch => &["fetch", "--prune"],
            Self::Pull => &["pull", "--ff-only"],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Pull => "pull",
        }
    }
}

#[derive(Debug)]
pub struct SyncOutcome {
    pub succeeded: bool,
    pub output: String,
    pub error: Option<String>,
}

/// Runs the sync action against one repository. Never panics or aborts the
/// surrounding loop; a failure is folded into the outcome so later
/// repositories still get processed.
pub fn sync_repo(repo: &Path, action: SyncAction) -> SyncOutcome {
    match run_git(repo, action.git_args()) {
        Ok(output) => SyncOutcome {
            succeeded: true,
            output,
            error: None,
        },
        Err(err) => {
            let output = match &err {
                GitUtilError::GitCommand { output, .. } => output.clone(),
                _ => String::new(),
            };
            SyncOutcome {
                succeeded: false,
                output,
                error: Some(err.to_string()),
            }
        }
    }
}
