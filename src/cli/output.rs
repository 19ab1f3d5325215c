//! CLI output: output modes, the output map handed to printers, and
//! error mapping for the outer runner.

use crate::error::{CliError, CommandError};
use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::io::IsTerminal;
use std::str::FromStr;

/// The closed set of output modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputMode {
    /// Human-readable rendering.
    Terminal,
    /// Machine-readable rendering.
    Json,
}

impl OutputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Terminal => "terminal",
            OutputMode::Json => "json",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminal" => Ok(OutputMode::Terminal),
            "json" => Ok(OutputMode::Json),
            _ => Err(CliError::InvalidOutput(s.to_string())),
        }
    }
}

/// Key to rendering value map consumed once by a printer.
///
/// Built in one go from an iterator; there is no way to mutate it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OutputMap(BTreeMap<String, Value>);

impl OutputMap {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for OutputMap {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        OutputMap(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Map a command error to the line the outer runner prints, if any.
/// Silent errors were already reported and map to `None`.
pub fn map_error(e: &CommandError) -> Option<String> {
    match e {
        CommandError::Silent => None,
        CommandError::Unreported(err) => Some(err.to_string()),
    }
}

/// Color only on an interactive stream and only when `NO_COLOR` is unset.
pub(crate) fn use_color(stream: &impl IsTerminal) -> bool {
    std::env::var_os("NO_COLOR").is_none() && stream.is_terminal()
}

/// Report an error raised before a printer exists.
pub fn report_preflight(err: &CliError) {
    if use_color(&std::io::stderr()) {
        eprintln!("{}", err.to_string().red());
    } else {
        eprintln!("{}", err);
    }
}
