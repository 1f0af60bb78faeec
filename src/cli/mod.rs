//! CLI argument parsing for gitrig.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gitrig: drive git repository operations through a typed façade.
///
/// Every command runs against one repository directory (`--repo`, default
/// the current directory). Extra git flags can be passed as a JSON options
/// object with `--opts`, e.g. `--opts '{"depth": "1", "no-tags": true}'`.
#[derive(Parser, Debug)]
#[command(name = "gitrig")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Repository directory to operate on.
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub repo: PathBuf,

    /// YAML configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Extra git options as a JSON object (`"--"` holds trailing arguments).
    #[arg(long, global = true)]
    pub opts: Option<String>,

    /// Log composed git commands and their output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for gitrig.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty repository in the directory.
    Init,

    /// Check out a branch, tag or commit.
    Checkout(CheckoutArgs),

    /// Commit staged changes; multi-line messages are preserved.
    Commit(CommitArgs),

    /// Fetch from a remote, optionally a single branch.
    Fetch(FetchArgs),

    /// Push a branch to a remote.
    ///
    /// With no branch, pushes the current branch to the same name. With one,
    /// pushes that branch to the same name. With two, pushes LOCAL to
    /// REMOTE_BRANCH.
    Push(PushArgs),

    /// Delete a branch on a remote.
    DeleteRemoteBranch(DeleteRemoteBranchArgs),

    /// List the branches of a remote after a shallow fetch.
    RemoteBranches(RemoteBranchesArgs),

    /// Set a repository config value.
    Config(ConfigArgs),

    /// Add a remote, replacing any existing remote with the same name.
    AddRemote(AddRemoteArgs),

    /// Set the commit identity and optionally an access token.
    SetUser(SetUserArgs),

    /// Stage files.
    Stage(StageArgs),

    /// Delete the repository directory.
    Destroy,
}

/// Arguments for the `checkout` command.
#[derive(Parser, Debug)]
pub struct CheckoutArgs {
    /// Ref to check out.
    pub reference: String,
}

/// Arguments for the `commit` command.
#[derive(Parser, Debug)]
pub struct CommitArgs {
    /// Commit message; may contain newlines.
    #[arg(short, long)]
    pub message: String,
}

/// Arguments for the `fetch` command.
#[derive(Parser, Debug)]
pub struct FetchArgs {
    /// Remote name or URL.
    pub remote: String,

    /// Branch to fetch. Defaults to the remote's configured refspecs.
    pub branch: Option<String>,
}

/// Arguments for the `push` command.
#[derive(Parser, Debug)]
pub struct PushArgs {
    /// Remote name or URL.
    pub remote: String,

    /// Local branch (or the only branch, pushed to the same name).
    pub local: Option<String>,

    /// Remote branch name.
    pub remote_branch: Option<String>,
}

/// Arguments for the `delete-remote-branch` command.
#[derive(Parser, Debug)]
pub struct DeleteRemoteBranchArgs {
    /// Remote name or URL.
    pub remote: String,

    /// Branch to delete on the remote.
    pub branch: String,
}

/// Arguments for the `remote-branches` command.
#[derive(Parser, Debug)]
pub struct RemoteBranchesArgs {
    /// Remote name.
    pub remote: String,
}

/// Arguments for the `config` command.
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Config key, e.g. `core.autocrlf`.
    pub key: String,

    /// Value to set.
    pub value: String,
}

/// Arguments for the `add-remote` command.
#[derive(Parser, Debug)]
pub struct AddRemoteArgs {
    /// Remote name.
    pub name: String,

    /// Remote URL.
    pub url: String,
}

/// Arguments for the `set-user` command.
#[derive(Parser, Debug)]
pub struct SetUserArgs {
    /// Value for `user.name`.
    pub name: String,

    /// Value for `user.email`.
    pub email: String,

    /// Access token stored in a repository-scoped credentials file.
    #[arg(long)]
    pub token: Option<String>,
}

/// Arguments for the `stage` command.
#[derive(Parser, Debug)]
pub struct StageArgs {
    /// Files to stage.
    #[arg(required = true)]
    pub files: Vec<String>,
}
