//! Working-directory config file source: `<workdir>/.aapctl/config.toml`.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};

/// Location of the config file inside a working directory.
pub fn workdir_config_path(workdir: &Path) -> PathBuf {
    workdir.join(".aapctl").join("config.toml")
}

/// Add the working-directory config file to the builder when present.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workdir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = workdir_config_path(workdir);
    if path.exists() {
        return Ok(builder.add_source(File::from(path.as_path()).required(false)));
    }
    Ok(builder)
}
