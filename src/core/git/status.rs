use super::command::run_git;
use crate::utils::GitUtilError;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamState {
    Synced,
    Ahead,
    Behind,
    Diverged,
    NoUpstream,
    Error,
}

/// Per-repository classification. Dirtiness and upstream state are
/// independent axes; the ahead/behind counts stay 0 for the `NoUpstream`
/// and `Error` sentinel states.
#[derive(Debug, Clone)]
pub struct RepoStatus {
    pub dirty: bool,
    pub ahead: usize,
    pub behind: usize,
    pub upstream: UpstreamState,
}

impl RepoStatus {
    /// Human-readable status line: `Dirty`/`Clean` prefix plus an upstream
    /// suffix, appended regardless of dirtiness.
    pub fn summary(&self) -> String {
        let prefix = if self.dirty { "Dirty" } else { "Clean" };
        let suffix = match self.upstream {
            UpstreamState::Synced => "up to date".to_string(),
            UpstreamState::Ahead => format!("ahead {}", self.ahead),
            UpstreamState::Behind => format!("behind {}", self.behind),
            UpstreamState::Diverged => {
                format!("diverged (ahead {}, behind {})", self.ahead, self.behind)
            }
            UpstreamState::NoUpstream => "no upstream".to_string(),
            UpstreamState::Error => "status unavailable".to_string(),
        };
        format!("{prefix} | {suffix}")
    }
}

/// Determines working-tree cleanliness and upstream divergence for one
/// repository. Infallible by design: a failed status query conservatively
/// marks the repository dirty, and divergence failures map to the
/// `NoUpstream` or `Error` states, each with a warning on stderr.
pub fn repo_status(repo: &Path) -> RepoStatus {
    let dirty = match run_git(repo, &["status", "--porcelain"]) {
        Ok(output) => !output.is_empty(),
        Err(err) => {
            eprintln!(
                "git-util: warning: status query failed for '{}': {err}",
                repo.display()
            );
            true
        }
    };

    let (ahead, behind, upstream) = match run_git(
        repo,
        &["rev-list", "--left-right", "--count", "HEAD...@{u}"],
    ) {
        Ok(output) => match parse_divergence(&output) {
            Some((ahead, behind)) => (ahead, behind, classify_divergence(ahead, behind)),
            None => {
                eprintln!(
                    "git-util: warning: unexpected rev-list output for '{}': {output:?}",
                    repo.display()
                );
                (0, 0, UpstreamState::Error)
            }
        },
        Err(err) if is_no_upstream_error(&err) => (0, 0, UpstreamState::NoUpstream),
        Err(err) => {
            eprintln!(
                "git-util: warning: divergence query failed for '{}': {err}",
                repo.display()
            );
            (0, 0, UpstreamState::Error)
        }
    };

    RepoStatus {
        dirty,
        ahead,
        behind,
        upstream,
    }
}

/// Parses the two-field tab-separated `rev-list --left-right --count`
/// output into (ahead, behind). Anything but exactly two integer fields is
/// a parse failure.
fn parse_divergence(output: &str) -> Option<(usize, usize)> {
    let mut fields = output.split('\t');
    let ahead = fields.next()?.trim().parse().ok()?;
    let behind = fields.next()?.trim().parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some((ahead, behind))
}

fn classify_divergence(ahead: usize, behind: usize) -> UpstreamState {
    match (ahead, behind) {
        (0, 0) => UpstreamState::Synced,
        (_, 0) => UpstreamState::Ahead,
        (0, _) => UpstreamState::Behind,
        _ => UpstreamState::Diverged,
    }
}

/// Recognizes git's "no upstream configured" diagnostics by substring.
/// The messages are locale-dependent; unmatched locales fall through to the
/// `Error` classification. Kept in one place so a structured signal can
/// replace it if git ever exposes one.
fn is_no_upstream_error(err: &GitUtilError) -> bool {
    err.stderr().is_some_and(|stderr| {
        stderr.contains("no upstream configured") || stderr.contains("does not point to a branch")
    })
}
