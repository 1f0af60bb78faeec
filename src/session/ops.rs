//! Named repository operations built on [`RepoSession::execute`].
//!
//! A non-zero git exit is never an error here; the returned [`GitOutput`]
//! carries the status for the caller.

use super::RepoSession;
use super::refs::{PushTarget, parse_remote_branches};
use crate::command::{CommandOptions, OptionValue};
use crate::error::{Result, SessionError};
use crate::fs::write_private_file;
use crate::git::GitOutput;

/// Suppresses the interactive warning `git filter-branch` prints before
/// rewriting history.
const FILTER_BRANCH_SQUELCH_ENV: &str = "FILTER_BRANCH_SQUELCH_WARNING";

fn quote(value: &str) -> String {
    shell_words::quote(value).into_owned()
}

fn no_options() -> CommandOptions {
    CommandOptions::new()
}

impl RepoSession {
    /// `git init`.
    pub fn init(&self, opts: &CommandOptions) -> Result<GitOutput> {
        self.execute("init", opts, &[])
    }

    /// `git checkout <reference>`.
    pub fn checkout(&self, reference: &str, opts: &CommandOptions) -> Result<GitOutput> {
        self.execute(&format!("checkout {}", reference), opts, &[])
    }

    /// Commit with a possibly multi-line message.
    ///
    /// The message travels as a single `--message` value with newlines
    /// replaced by the configured placeholder. When the commit succeeds and
    /// the message had newlines, the new commit alone is rewritten through
    /// `filter-branch --msg-filter` to put them back.
    ///
    /// Returns the output of the `commit` call. A failed restore is a
    /// [`SessionError::GitError`]; the commit itself is kept.
    pub fn commit(&self, message: &str, opts: &CommandOptions) -> Result<GitOutput> {
        let placeholder = &self.config.newline_placeholder;
        let flattened = message.replace('\n', placeholder);

        let mut opts = opts.clone();
        opts.set("message", OptionValue::Value(quote(&flattened)));
        let output = self.execute("commit", &opts, &[])?;

        if output.success() && flattened != message {
            self.restore_commit_newlines()?;
        }

        Ok(output)
    }

    /// Rewrite the message of HEAD, turning placeholders back into newlines.
    ///
    /// The revision range covers HEAD only: `HEAD~1..HEAD`, or `HEAD` when
    /// HEAD is a root commit.
    ///
    /// Runs with `core.bare=true` so filter-branch neither requires a clean
    /// work tree nor touches it. Only the message changes, so the index and
    /// work tree still match the rewritten HEAD.
    fn restore_commit_newlines(&self) -> Result<GitOutput> {
        let parent = self.execute("rev-parse --verify --quiet HEAD~1", &no_options(), &[])?;
        let range = if parent.success() { "HEAD~1..HEAD" } else { "HEAD" };

        let filter = format!(
            r#"awk '{{ gsub(/{}/, "\n"); print }}'"#,
            self.config.newline_placeholder
        );
        let opts = CommandOptions::new()
            .switch("f", true)
            .value("msg-filter", quote(&filter))
            .trailing([range]);

        let output = self.execute(
            "-c core.bare=true filter-branch",
            &opts,
            &[(FILTER_BRANCH_SQUELCH_ENV, "1")],
        )?;
        if !output.success() {
            return Err(SessionError::GitError(format!(
                "restoring newlines in the message of HEAD failed: {}",
                output.stderr.trim()
            )));
        }
        Ok(output)
    }

    /// `git fetch <remote> <branch>`; a missing branch fetches the remote's
    /// default refspecs.
    pub fn fetch(
        &self,
        remote: &str,
        branch: Option<&str>,
        opts: &CommandOptions,
    ) -> Result<GitOutput> {
        self.execute(
            &format!("fetch {} {}", remote, branch.unwrap_or("")),
            opts,
            &[],
        )
    }

    /// `git push <remote> <local>:<remote_branch>`.
    pub fn push(
        &self,
        remote: &str,
        target: PushTarget,
        opts: &CommandOptions,
    ) -> Result<GitOutput> {
        self.ensure_alive()?;
        let (local, remote_branch) = target.resolve(|| self.current_branch())?;
        self.execute(
            &format!("push {} {}:{}", remote, local, remote_branch),
            opts,
            &[],
        )
    }

    /// Delete `branch` on `remote` by pushing an empty source ref.
    pub fn delete_remote_branch(&self, remote: &str, branch: &str) -> Result<GitOutput> {
        self.push(
            remote,
            PushTarget::Refspec {
                local: String::new(),
                remote: branch.to_string(),
            },
            &no_options(),
        )
    }

    /// Branch names on `remote`, after a shallow tag-less fetch.
    pub fn get_remote_branches(&self, remote: &str) -> Result<Vec<String>> {
        let fetch_opts = CommandOptions::new()
            .value("depth", "1")
            .switch("no-tags", true);
        self.fetch(remote, None, &fetch_opts)?;

        let listing = self.execute("branch -r", &no_options(), &[])?;
        Ok(parse_remote_branches(remote, &listing.stdout))
    }

    /// `git config <key> <value>`.
    pub fn config(&self, key: &str, value: &str) -> Result<GitOutput> {
        self.execute(&format!("config {} {}", key, quote(value)), &no_options(), &[])
    }

    /// Replace any remote called `name` with one pointing at `url`.
    pub fn add_remote(&self, name: &str, url: &str) -> Result<GitOutput> {
        // Fails when the remote does not exist yet; that is fine.
        self.execute(&format!("remote remove {}", name), &no_options(), &[])?;
        self.execute(
            &format!("remote add {} {}", name, quote(url)),
            &no_options(),
            &[],
        )
    }

    /// Set the commit identity, and optionally store an access token for
    /// HTTPS remotes in a session-scoped credentials file.
    pub fn set_user_info(&self, name: &str, email: &str, token: Option<&str>) -> Result<()> {
        self.ensure_alive()?;
        self.config("user.name", name)?;
        self.config("user.email", email)?;

        if let Some(token) = token {
            let line = format!(
                "https://x-access-token:{}@{}\n",
                token, self.config.credential_host
            );
            write_private_file(&self.credentials_path, line.as_bytes())?;

            let path = self.credentials_path.to_string_lossy();
            let helper = format!("store --file={}", quote(&path));
            self.config("credential.helper", &helper)?;
        }

        Ok(())
    }

    /// `git add -- <files>`.
    pub fn stage<S: AsRef<str>>(&self, files: &[S], opts: &CommandOptions) -> Result<GitOutput> {
        let opts = opts
            .clone()
            .trailing(files.iter().map(|f| quote(f.as_ref())));
        self.execute("add", &opts, &[])
    }
}
