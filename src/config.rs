//! Configuration System
//!
//! Read-only, layered settings store for command flags. Every command flag lands
//! under a namespaced key (see [`flags::flag_name`]) and is read back by the
//! commands through [`Settings`]. Layers, lowest to highest precedence:
//! defaults, global config file, working-directory config file, `AAPCTL_*`
//! environment variables, CLI flag overrides.

use crate::error::CliError;
use crate::logging::LoggingConfig;
use config::{ConfigError, Value};
use std::path::PathBuf;

pub mod flags;
mod merge;
mod sources;

pub use merge::merge_policy::DEFAULT_AAP_TARGET;
pub use sources::environment::{EnvSource, ENV_PREFIX};
pub use sources::global_file::global_config_path;
pub use sources::workdir_file::workdir_config_path;

/// Inputs for building a [`Settings`] store.
#[derive(Debug, Clone, Default)]
pub struct SettingsSources {
    /// Global or explicitly requested config file.
    pub config_file: Option<PathBuf>,
    /// Whether `config_file` was requested explicitly (and must exist).
    pub config_file_required: bool,
    /// Working directory whose `.aapctl/config.toml` is layered in.
    pub workdir: Option<PathBuf>,
    /// Environment binding.
    pub env: EnvSource,
    /// Flag values given on the command line, already namespaced.
    pub overrides: Vec<(String, Value)>,
}

impl SettingsSources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a command-line flag value under its namespaced key.
    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.overrides.push((key.into(), value.into()));
        self
    }

    pub fn with_env(mut self, env: EnvSource) -> Self {
        self.env = env;
        self
    }

    pub fn with_config_file(mut self, path: PathBuf, required: bool) -> Self {
        self.config_file = Some(path);
        self.config_file_required = required;
        self
    }

    pub fn with_workdir(mut self, workdir: PathBuf) -> Self {
        self.workdir = Some(workdir);
        self
    }
}

/// Immutable key/value settings for one command invocation.
///
/// Getters follow flag-library semantics: a key that is absent (or does not
/// convert) reads as the zero value of the requested type.
#[derive(Debug, Clone)]
pub struct Settings {
    inner: config::Config,
}

impl Settings {
    /// Build the layered store.
    pub fn load(sources: &SettingsSources) -> Result<Self, CliError> {
        let mut builder = merge::merge_policy::builder_with_defaults()?;
        if let Some(ref path) = sources.config_file {
            builder = sources::global_file::add_to_builder(
                builder,
                path,
                sources.config_file_required,
            )?;
        }
        if let Some(ref workdir) = sources.workdir {
            builder = sources::workdir_file::add_to_builder(builder, workdir)?;
        }
        builder = sources::environment::add_to_builder(builder, &sources.env);
        builder = merge::merge_policy::apply_overrides(builder, &sources.overrides)?;
        let inner = builder.build()?;
        Ok(Self { inner })
    }

    /// Settings holding only defaults plus the given overrides.
    pub fn from_overrides<K, V, I>(overrides: I) -> Result<Self, CliError>
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let sources = overrides
            .into_iter()
            .fold(SettingsSources::new(), |sources, (k, v)| sources.with_override(k, v));
        Self::load(&sources)
    }

    pub fn get_string(&self, key: &str) -> String {
        self.inner.get_string(key).unwrap_or_default()
    }

    /// Non-empty string value, if any.
    pub fn get_opt_string(&self, key: &str) -> Option<String> {
        self.inner
            .get_string(key)
            .ok()
            .filter(|value| !value.trim().is_empty())
    }

    pub fn get_i64(&self, key: &str) -> i64 {
        self.inner.get_int(key).unwrap_or_default()
    }

    pub fn get_opt_i64(&self, key: &str) -> Option<i64> {
        self.inner.get_int(key).ok()
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.inner.get_bool(key).unwrap_or_default()
    }

    /// Logging section (`[logging]`) of the config files; defaults when absent.
    pub fn logging(&self) -> Result<LoggingConfig, CliError> {
        match self.inner.get::<LoggingConfig>("logging") {
            Ok(logging) => Ok(logging),
            Err(ConfigError::NotFound(_)) => Ok(LoggingConfig::default()),
            Err(err) => Err(err.into()),
        }
    }
}
