//! Repository sessions.
//!
//! A [`RepoSession`] binds git invocations to one directory. Every command
//! runs with that directory as the child's working directory; the process
//! working directory is left alone, so independent sessions can coexist.
//!
//! Once [`RepoSession::destroy`] has removed the directory, every further
//! command fails with [`SessionError::Destroyed`].

mod ops;
mod refs;


pub use refs::{PushTarget, parse_head_ref, parse_remote_branches};

use crate::command::{CommandOptions, build_command};
use crate::config::Config;
use crate::error::{Result, SessionError};
use crate::fs;
use crate::git::{GitOutput, run_git};
use chrono::Utc;
use log::debug;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Handle on a repository directory.
#[derive(Debug)]
pub struct RepoSession {
    dir: PathBuf,
    name: String,
    credentials_path: PathBuf,
    config: Config,
    destroyed: bool,
}

impl RepoSession {
    /// Open a session over an existing directory with default configuration.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        Self::open_with_config(dir, Config::default())
    }

    /// Open a session over an existing directory.
    ///
    /// The directory must exist; creating it (and running `init`) is up to
    /// the caller.
    pub fn open_with_config<P: AsRef<Path>>(dir: P, config: Config) -> Result<Self> {
        let dir = dir.as_ref();
        config.validate()?;

        let dir = dir.canonicalize().map_err(|e| {
            SessionError::UserError(format!(
                "repository directory '{}' is not accessible: {}",
                dir.display(),
                e
            ))
        })?;
        if !dir.is_dir() {
            return Err(SessionError::UserError(format!(
                "'{}' is not a directory",
                dir.display()
            )));
        }

        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| dir.display().to_string());

        let credentials_path = dir
            .join(".git")
            .join(format!("credentials-{}", Utc::now().timestamp_millis()));

        Ok(Self {
            dir,
            name,
            credentials_path,
            config,
            destroyed: false,
        })
    }

    /// Absolute path of the session directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Final path segment of the session directory.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where `set_user_info` stores an access token.
    pub fn credentials_path(&self) -> &Path {
        &self.credentials_path
    }

    /// Settings this session was opened with.
    pub fn settings(&self) -> &Config {
        &self.config
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn ensure_alive(&self) -> Result<()> {
        if self.destroyed {
            Err(SessionError::Destroyed(self.name.clone()))
        } else {
            Ok(())
        }
    }

    /// Run `git <partial> <options>` in the session directory.
    ///
    /// `extra_env` is layered over the inherited environment for this call
    /// only. The composed command and every non-blank stdout line are logged
    /// at debug level.
    ///
    /// # Returns
    ///
    /// * `Ok(GitOutput)` - git ran, whatever its exit status
    /// * `Err(SessionError::Destroyed)` - the session was destroyed
    /// * `Err(SessionError::UserError)` - the composed command has unbalanced quoting
    /// * `Err(SessionError::GitError)` - git could not be spawned
    pub fn execute(
        &self,
        partial: &str,
        opts: &CommandOptions,
        extra_env: &[(&str, &str)],
    ) -> Result<GitOutput> {
        self.ensure_alive()?;

        let command = build_command(partial, opts);
        let args = shell_words::split(&command).map_err(|e| {
            SessionError::UserError(format!(
                "failed to parse git command '{}': {}\n\
                 Fix: check for unmatched quotes or invalid escape sequences.",
                command, e
            ))
        })?;

        debug!("git {}{}", command, render_env(extra_env));

        let mut output = run_git(&self.config.git_binary, &self.dir, &args, extra_env)?;
        output.command = command;

        for line in output.lines() {
            debug!("{}", line);
        }

        Ok(output)
    }

    /// Branch HEAD points at.
    ///
    /// Reads `.git/HEAD` directly; falls back to `git symbolic-ref` when
    /// `.git` is not a directory (linked worktrees, submodules).
    pub fn current_branch(&self) -> Result<String> {
        self.ensure_alive()?;

        let head_path = self.dir.join(".git").join("HEAD");
        if let Ok(content) = std::fs::read_to_string(&head_path) {
            return parse_head_ref(&content);
        }

        let output = self.execute("symbolic-ref --short HEAD", &CommandOptions::new(), &[])?;
        if output.success() {
            Ok(output.trimmed().to_string())
        } else {
            Err(SessionError::UserError(format!(
                "could not determine the current branch of '{}': {}",
                self.dir.display(),
                output.stderr.trim()
            )))
        }
    }

    /// Remove the session directory and mark the session destroyed.
    ///
    /// Calling this on an already destroyed session does nothing.
    pub fn destroy(&mut self) -> Result<()> {
        if self.destroyed {
            return Ok(());
        }

        fs::remove_dir_all(&self.dir)?;
        self.destroyed = true;
        debug!("destroyed session '{}' at {}", self.name, self.dir.display());
        Ok(())
    }
}

/// Render extra environment variables for the command log line.
///
/// Each variable becomes ` (KEY="value")` with the value JSON-quoted.
pub(crate) fn render_env(extra_env: &[(&str, &str)]) -> String {
    extra_env
        .iter()
        .map(|(key, value)| format!(" ({}={})", key, Value::String((*value).to_string())))
        .collect()
}
