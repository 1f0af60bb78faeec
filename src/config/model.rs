//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// Git executable looked up on `PATH`.
pub const DEFAULT_GIT_BINARY: &str = "git";

/// Token that stands in for newlines while a commit message travels as one
/// command-line value.
pub const DEFAULT_NEWLINE_PLACEHOLDER: &str = "__GITRIG_NEWLINE__";

/// Host written into the credentials file.
pub const DEFAULT_CREDENTIAL_HOST: &str = "github.com";

/// Configuration for gitrig sessions.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path or name of the git executable.
    #[serde(default = "default_git_binary")]
    pub git_binary: String,

    /// Placeholder substituted for `\n` in commit messages.
    /// Must match `^[A-Za-z0-9_]+$`.
    #[serde(default = "default_newline_placeholder")]
    pub newline_placeholder: String,

    /// Host the access token is stored for.
    #[serde(default = "default_credential_host")]
    pub credential_host: String,
}

fn default_git_binary() -> String {
    DEFAULT_GIT_BINARY.to_string()
}

fn default_newline_placeholder() -> String {
    DEFAULT_NEWLINE_PLACEHOLDER.to_string()
}

fn default_credential_host() -> String {
    DEFAULT_CREDENTIAL_HOST.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            git_binary: default_git_binary(),
            newline_placeholder: default_newline_placeholder(),
            credential_host: default_credential_host(),
        }
    }
}
