pub mod cli;
pub mod core;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

pub use crate::core::discovery::find_git_repos;
pub use crate::core::git::{repo_status, RepoStatus, SyncAction, SyncOutcome, UpstreamState};
pub use utils::{GitUtilError, Result};
