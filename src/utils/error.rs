use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitUtilError>;

#[derive(Error, Debug)]
pub enum GitUtilError {
    /// A `git` subprocess exited non-zero or failed to launch. `command` is
    /// the joined argument list, `stderr` the captured error stream and
    /// `output` whatever partial stdout the process produced.
    #[error("command 'git {command}' failed: {cause}\nstderr: {stderr}")]
    GitCommand {
        command: String,
        cause: String,
        stderr: String,
        output: String,
    },

    #[error("neither 'main' nor 'master' branch found; specify one with --main")]
    NoDefaultBranch,

    #[error("branch '{0}' does not exist")]
    BranchNotFound(String),

    #[error("invalid action '{0}': must be 'fetch' or 'pull'")]
    InvalidAction(String),

    #[error("filesystem error: {0}")]
    Fs(String),
}

impl GitUtilError {
    pub fn fs(msg: impl Into<String>) -> Self {
        Self::Fs(msg.into())
    }

    /// Captured stderr of a failed subprocess, if this error came from one.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::GitCommand { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}
