//! Git process runner for gitrig.
//!
//! Spawns git with an explicit working directory and captured output. The
//! process-wide current directory is never changed, so runners for different
//! repositories can be used side by side.

use crate::error::{Result, SessionError};
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Captured result of one git invocation.
///
/// A non-zero exit is still a `GitOutput`; inspect [`GitOutput::success`]
/// or [`GitOutput::code`] to decide what it means for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitOutput {
    /// The composed command, without the binary name.
    pub command: String,
    /// Standard output, untrimmed.
    pub stdout: String,
    /// Standard error, untrimmed.
    pub stderr: String,
    /// Exit code, `None` if git was terminated by a signal.
    pub code: Option<i32>,
}

impl GitOutput {
    fn from_output(command: &str, output: &Output) -> Self {
        Self {
            command: command.to_string(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            code: output.status.code(),
        }
    }

    /// Returns true if git exited with status 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Non-blank stdout lines, in order.
    pub fn lines(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .collect()
    }

    /// Returns stdout with leading/trailing whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.stdout.trim()
    }
}

/// Run git in `cwd` with pre-split arguments.
///
/// `env` entries are layered over the inherited environment for this child
/// only. stdin is closed.
///
/// # Returns
///
/// * `Ok(GitOutput)` - git ran to completion, whatever its exit status
/// * `Err(SessionError::GitError)` - git could not be spawned
pub fn run_git<P: AsRef<Path>>(
    binary: &str,
    cwd: P,
    args: &[String],
    env: &[(&str, &str)],
) -> Result<GitOutput> {
    let cwd = cwd.as_ref();
    let command = args.join(" ");

    let output = Command::new(binary)
        .current_dir(cwd)
        .args(args)
        .envs(env.iter().copied())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| {
            SessionError::GitError(format!(
                "failed to execute {} {} in '{}': {}",
                binary,
                args.first().map(String::as_str).unwrap_or(""),
                cwd.display(),
                e
            ))
        })?;

    Ok(GitOutput::from_output(&command, &output))
}
