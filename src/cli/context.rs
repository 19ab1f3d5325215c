//! Execution context: the per-invocation view of the global flags, built once
//! from settings and never modified afterwards.

use crate::cli::deps::CliDependencies;
use crate::cli::output::OutputMode;
use crate::cli::printer::Printer;
use crate::config::flags::{aap_target_key, FLAG_OUTPUT, FLAG_VERBOSE, FLAG_WORKDIR};
use crate::config::Settings;
use crate::error::CliError;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliContext {
    workdir: PathBuf,
    output: OutputMode,
    verbose: bool,
    aap_target: String,
}

impl CliContext {
    pub fn from_settings(settings: &Settings) -> Result<Self, CliError> {
        let workdir = settings.get_string(FLAG_WORKDIR);
        if workdir.trim().is_empty() {
            return Err(CliError::InvalidWorkdir(workdir));
        }
        let output = settings.get_string(FLAG_OUTPUT).parse::<OutputMode>()?;
        Ok(Self {
            workdir: PathBuf::from(workdir),
            output,
            verbose: settings.get_bool(FLAG_VERBOSE),
            aap_target: settings.get_string(&aap_target_key()),
        })
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    pub fn output(&self) -> OutputMode {
        self.output
    }

    pub fn is_terminal_output(&self) -> bool {
        self.output == OutputMode::Terminal
    }

    pub fn is_json_output(&self) -> bool {
        self.output == OutputMode::Json
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_verbose_terminal_output(&self) -> bool {
        self.verbose && self.is_terminal_output()
    }

    pub fn aap_target(&self) -> &str {
        &self.aap_target
    }
}

/// Build the context and a printer bound to its output mode.
pub fn create_context_and_printer(
    deps: &dyn CliDependencies,
    settings: &Settings,
) -> Result<(CliContext, Box<dyn Printer>), CliError> {
    let context = CliContext::from_settings(settings)?;
    let printer = deps.create_printer(context.output(), context.is_verbose())?;
    Ok((context, printer))
}
