//! Command construction for gitrig.
//!
//! Translates a semantic options object into the flag portion of a git
//! command line. Values are interpolated verbatim: callers quote anything
//! containing spaces or shell metacharacters (see [`shell_words::quote`]).
//!
//! # Rendering rules
//!
//! - `false` and absent options never render
//! - `true` renders as a bare flag
//! - a list renders the flag once per element, in order
//! - one-character names use a single dash (`-x`), longer names two (`--name`)
//! - trailing arguments render last, after a literal `--`

use crate::error::{Result, SessionError};
use serde_json::Value;

/// JSON key reserved for trailing positional arguments.
pub const TRAILING_ARGS_KEY: &str = "--";

/// Value held by a single option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Option is present but unset. Never rendered.
    Absent,
    /// Boolean switch. `true` renders as a bare flag, `false` is dropped.
    Switch(bool),
    /// Flag followed by one value.
    Value(String),
    /// Flag repeated once per value.
    Values(Vec<String>),
}

impl OptionValue {
    /// Normalize into the list of occurrences to render.
    ///
    /// Returns `None` for options that must not appear at all.
    fn occurrences(&self) -> Option<Vec<&str>> {
        match self {
            OptionValue::Absent | OptionValue::Switch(false) => None,
            OptionValue::Switch(true) => Some(vec![""]),
            OptionValue::Value(v) => Some(vec![v.as_str()]),
            OptionValue::Values(vs) => Some(vs.iter().map(String::as_str).collect()),
        }
    }
}

/// Ordered set of command options plus optional trailing arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOptions {
    entries: Vec<(String, OptionValue)>,
    trailing: Option<Vec<String>>,
}

impl CommandOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, replacing any earlier value for the same name in place.
    pub fn set(&mut self, name: impl Into<String>, value: OptionValue) -> &mut Self {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Builder form of a boolean switch.
    pub fn switch(mut self, name: impl Into<String>, on: bool) -> Self {
        self.set(name, OptionValue::Switch(on));
        self
    }

    /// Builder form of a single-valued flag.
    pub fn value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, OptionValue::Value(value.into()));
        self
    }

    /// Builder form of a repeated flag.
    pub fn values<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(
            name,
            OptionValue::Values(values.into_iter().map(Into::into).collect()),
        );
        self
    }

    /// Builder form for the arguments rendered after `--`.
    pub fn trailing<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trailing = Some(args.into_iter().map(Into::into).collect());
        self
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn trailing_args(&self) -> Option<&[String]> {
        self.trailing.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.trailing.is_none()
    }

    /// Parse the options-object shape from JSON.
    ///
    /// Accepts `null` (absent), booleans, strings, numbers (rendered with
    /// their JSON text) and arrays of strings or numbers. The `"--"` key
    /// holds trailing arguments.
    ///
    /// ```
    /// use gitrig::command::{build_command, CommandOptions};
    /// use serde_json::json;
    ///
    /// let opts = CommandOptions::from_json(&json!({"depth": "1", "no-tags": true}))?;
    /// assert_eq!(build_command("fetch origin", &opts), "fetch origin --depth 1 --no-tags");
    /// # Ok::<(), gitrig::error::SessionError>(())
    /// ```
    pub fn from_json(value: &Value) -> Result<Self> {
        let map = value.as_object().ok_or_else(|| {
            SessionError::UserError(format!("options must be a JSON object, got: {}", value))
        })?;

        let mut opts = CommandOptions::new();
        for (name, raw) in map {
            if name == TRAILING_ARGS_KEY {
                opts.trailing = Some(json_string_list(name, raw)?);
                continue;
            }

            let parsed = match raw {
                Value::Null => OptionValue::Absent,
                Value::Bool(b) => OptionValue::Switch(*b),
                Value::String(s) => OptionValue::Value(s.clone()),
                Value::Number(n) => OptionValue::Value(n.to_string()),
                Value::Array(_) => OptionValue::Values(json_string_list(name, raw)?),
                Value::Object(_) => {
                    return Err(SessionError::UserError(format!(
                        "option '{}' has an unsupported value: {}",
                        name, raw
                    )));
                }
            };
            opts.set(name.clone(), parsed);
        }

        Ok(opts)
    }
}

fn json_string_list(name: &str, raw: &Value) -> Result<Vec<String>> {
    let invalid = || {
        SessionError::UserError(format!(
            "option '{}' must be a string or a list of strings, got: {}",
            name, raw
        ))
    };

    match raw {
        Value::String(s) => Ok(vec![s.clone()]),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                Value::Number(n) => Ok(n.to_string()),
                _ => Err(invalid()),
            })
            .collect(),
        _ => Err(invalid()),
    }
}

/// Render a flag name with its dash prefix.
fn flag_name(name: &str) -> String {
    if name.chars().count() == 1 {
        format!("-{}", name)
    } else {
        format!("--{}", name)
    }
}

/// Render the options alone, without base command.
pub fn render_options(opts: &CommandOptions) -> String {
    let mut parts: Vec<String> = Vec::new();

    for (name, value) in &opts.entries {
        let Some(occurrences) = value.occurrences() else {
            continue;
        };
        let flag = flag_name(name);
        for occurrence in occurrences {
            parts.push(format!("{} {}", flag, occurrence).trim().to_string());
        }
    }

    if let Some(trailing) = &opts.trailing {
        parts.push(TRAILING_ARGS_KEY.to_string());
        parts.extend(trailing.iter().cloned());
    }

    parts.join(" ")
}

/// Append the rendered options to `base`.
pub fn build_command(base: &str, opts: &CommandOptions) -> String {
    let rendered = render_options(opts);
    if rendered.is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, rendered)
    }
}
