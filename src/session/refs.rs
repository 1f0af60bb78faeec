//! Ref-level helpers: push call shapes, HEAD parsing, remote branch listing.

use crate::error::{Result, SessionError};

const HEAD_BRANCH_PREFIX: &str = "ref: refs/heads/";

/// What to push.
///
/// Omitted branch names fall back: `CurrentBranch` pushes the checked-out
/// branch to the same name remotely, `Branch` pushes a branch to the same
/// name, `Refspec` is used verbatim. An empty `local` deletes `remote`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushTarget {
    CurrentBranch,
    Branch(String),
    Refspec { local: String, remote: String },
}

impl PushTarget {
    /// Build a target from up to two optional branch names, positional style:
    /// `(None, None)` → current branch, `(Some(b), None)` → `b:b`,
    /// `(Some(l), Some(r))` → `l:r`.
    pub fn from_branches(first: Option<String>, second: Option<String>) -> Self {
        match (first, second) {
            (None, None) => PushTarget::CurrentBranch,
            (Some(branch), None) | (None, Some(branch)) => PushTarget::Branch(branch),
            (Some(local), Some(remote)) => PushTarget::Refspec { local, remote },
        }
    }

    /// Resolve to `(local, remote)` branch names. `current` is only called for
    /// [`PushTarget::CurrentBranch`].
    pub fn resolve<F>(self, current: F) -> Result<(String, String)>
    where
        F: FnOnce() -> Result<String>,
    {
        match self {
            PushTarget::CurrentBranch => {
                let branch = current()?;
                Ok((branch.clone(), branch))
            }
            PushTarget::Branch(branch) => Ok((branch.clone(), branch)),
            PushTarget::Refspec { local, remote } => Ok((local, remote)),
        }
    }
}

/// Extract the branch name from the contents of `.git/HEAD`.
pub fn parse_head_ref(content: &str) -> Result<String> {
    let content = content.trim();
    match content.strip_prefix(HEAD_BRANCH_PREFIX) {
        Some(branch) if !branch.is_empty() => Ok(branch.to_string()),
        _ => Err(SessionError::UserError(format!(
            "HEAD does not point at a branch (detached at '{}')",
            content
        ))),
    }
}

/// Branch names of `remote` from `git branch -r` output.
///
/// Lines are trimmed; only `<remote>/...` entries are kept, with the prefix
/// stripped. Symbolic entries (`origin/HEAD -> origin/main`) are skipped.
pub fn parse_remote_branches(remote: &str, listing: &str) -> Vec<String> {
    let prefix = format!("{}/", remote);
    listing
        .lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix(&prefix))
        .filter(|branch| !branch.is_empty() && !branch.contains(" -> "))
        .map(str::to_string)
        .collect()
}
