//! Global config file source: `<config dir>/aapctl/config.toml` or an explicit `--config` path.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path to the per-user config file, if a home directory can be resolved.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "aapctl").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add the config file at `path` to the builder. A missing default file is skipped;
/// an explicitly requested file must exist.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
    required: bool,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if !required && !path.exists() {
        debug!(config_path = %path.display(), "Global configuration file not found; skipping");
        return Ok(builder);
    }
    Ok(builder.add_source(File::from(path).required(required)))
}
