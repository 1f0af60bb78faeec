//! Command implementations for gitrig.
//!
//! Routes each CLI command to the matching session operation and turns the
//! captured git output into an exit code.

use crate::cli::{Cli, Command};
use gitrig::command::CommandOptions;
use gitrig::config::Config;
use gitrig::error::{Result, SessionError};
use gitrig::exit_codes;
use gitrig::git::GitOutput;
use gitrig::session::{PushTarget, RepoSession};
use log::info;

/// Dispatch a command to its implementation.
///
/// Returns the process exit code: success, or git failure when git exited
/// non-zero. Errors carry their own exit code.
pub fn dispatch(cli: Cli) -> Result<i32> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let opts = parse_opts(cli.opts.as_deref())?;
    let mut session = RepoSession::open_with_config(&cli.repo, config)?;

    match cli.command {
        Command::Init => Ok(report(&session.init(&opts)?)),
        Command::Checkout(args) => Ok(report(&session.checkout(&args.reference, &opts)?)),
        Command::Commit(args) => Ok(report(&session.commit(&args.message, &opts)?)),
        Command::Fetch(args) => Ok(report(&session.fetch(
            &args.remote,
            args.branch.as_deref(),
            &opts,
        )?)),
        Command::Push(args) => {
            let target = PushTarget::from_branches(args.local, args.remote_branch);
            Ok(report(&session.push(&args.remote, target, &opts)?))
        }
        Command::DeleteRemoteBranch(args) => Ok(report(
            &session.delete_remote_branch(&args.remote, &args.branch)?,
        )),
        Command::RemoteBranches(args) => {
            for branch in session.get_remote_branches(&args.remote)? {
                println!("{}", branch);
            }
            Ok(exit_codes::SUCCESS)
        }
        Command::Config(args) => Ok(report(&session.config(&args.key, &args.value)?)),
        Command::AddRemote(args) => Ok(report(&session.add_remote(&args.name, &args.url)?)),
        Command::SetUser(args) => {
            session.set_user_info(&args.name, &args.email, args.token.as_deref())?;
            if args.token.is_some() {
                info!(
                    "Stored credentials at {}",
                    session.credentials_path().display()
                );
            }
            Ok(exit_codes::SUCCESS)
        }
        Command::Stage(args) => Ok(report(&session.stage(&args.files, &opts)?)),
        Command::Destroy => {
            session.destroy()?;
            info!("Removed {}", session.dir().display());
            Ok(exit_codes::SUCCESS)
        }
    }
}

/// Parse `--opts` JSON into command options.
fn parse_opts(raw: Option<&str>) -> Result<CommandOptions> {
    let Some(raw) = raw else {
        return Ok(CommandOptions::new());
    };

    let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| {
        SessionError::UserError(format!(
            "failed to parse --opts as JSON: {}\n\
             Example: --opts '{{\"depth\": \"1\", \"no-tags\": true}}'",
            e
        ))
    })?;
    CommandOptions::from_json(&value)
}

/// Print captured output and map git's status to an exit code.
fn report(output: &GitOutput) -> i32 {
    print!("{}", output.stdout);
    if output.success() {
        exit_codes::SUCCESS
    } else {
        eprint!("{}", output.stderr);
        exit_codes::GIT_FAILURE
    }
}
