//! Merge rules: defaults, override order, conflict handling.

use crate::config::flags::{aap_target_key, FLAG_OUTPUT, FLAG_VERBOSE, FLAG_WORKDIR};
use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;
use config::Value;

/// Default AAP service address.
pub const DEFAULT_AAP_TARGET: &str = "localhost:9092";

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default(FLAG_WORKDIR, ".")?
        .set_default(FLAG_OUTPUT, "terminal")?
        .set_default(FLAG_VERBOSE, false)?
        .set_default(aap_target_key(), DEFAULT_AAP_TARGET)
}

/// Apply CLI flag overrides last so they win over every file and env source.
pub fn apply_overrides(
    mut builder: ConfigBuilder<DefaultState>,
    overrides: &[(String, Value)],
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    for (key, value) in overrides {
        builder = builder.set_override(key.as_str(), value.clone())?;
    }
    Ok(builder)
}
