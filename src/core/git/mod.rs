pub mod branch;
pub mod command;
pub mod status;
pub mod sync;

pub use branch::{delete_branch, detect_default_branch, merged_branch_candidates};
pub use command::run_git;
pub use status::{repo_status, RepoStatus, UpstreamState};
pub use sync::{sync_repo, SyncAction, SyncOutcome};
