//! Config loading, validation, and serialization.

use super::model::Config;
use crate::error::{Result, SessionError};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]+$").expect("placeholder pattern is a valid regex")
});

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(SessionError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SessionError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| SessionError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            SessionError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// - `git_binary` must be non-empty
    /// - `newline_placeholder` must be word characters only, since it is
    ///   used verbatim as an awk pattern when restoring commit messages
    /// - `credential_host` must be non-empty and contain no `/` or `@`
    pub fn validate(&self) -> Result<()> {
        if self.git_binary.trim().is_empty() {
            return Err(SessionError::UserError(
                "config validation failed: git_binary must be non-empty".to_string(),
            ));
        }

        if !PLACEHOLDER_PATTERN.is_match(&self.newline_placeholder) {
            return Err(SessionError::UserError(format!(
                "config validation failed: newline_placeholder must contain only letters, digits and underscores (found '{}')",
                self.newline_placeholder
            )));
        }

        let host = self.credential_host.trim();
        if host.is_empty() || host.contains('/') || host.contains('@') {
            return Err(SessionError::UserError(format!(
                "config validation failed: credential_host must be a bare host name (found '{}')",
                self.credential_host
            )));
        }

        Ok(())
    }
}
