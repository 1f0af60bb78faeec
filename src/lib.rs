//! gitrig: a typed façade over the git command line.
//!
//! Options objects become command lines ([`command`]), commands run in a
//! repository directory through a [`session::RepoSession`], and named
//! operations (commit, push, fetch, remote management, credential setup)
//! are built on top.
//!
//! ```no_run
//! use gitrig::command::CommandOptions;
//! use gitrig::session::{PushTarget, RepoSession};
//!
//! let session = RepoSession::open("/srv/checkouts/site")?;
//! session.stage(&["index.html"], &CommandOptions::new())?;
//! session.commit("Update index\n\nRegenerated from source.", &CommandOptions::new())?;
//! let output = session.push("origin", PushTarget::CurrentBranch, &CommandOptions::new())?;
//! if !output.success() {
//!     eprintln!("push failed: {}", output.stderr);
//! }
//! # Ok::<(), gitrig::error::SessionError>(())
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod git;
pub mod logging;
pub mod session;

#[cfg(test)]
mod test_support;
