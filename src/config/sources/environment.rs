//! Environment source: `AAPCTL_<PREFIX>__<SUFFIX>` maps to `<prefix>.<suffix>`.
//!
//! Shell variable names cannot hold `-`, so an `_` inside the command prefix
//! stands for `-`: `AAPCTL_IDENTITIES_UPDATE__IDENTITYID` sets
//! `identities-update.identityid`. Variables without the `__` separator are
//! left as they are.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;
use std::collections::HashMap;

pub const ENV_PREFIX: &str = "AAPCTL";

const PREFIX_SEPARATOR: &str = "_";
const KEY_SEPARATOR: &str = "__";

/// Where environment-bound settings come from.
#[derive(Debug, Clone, Default)]
pub enum EnvSource {
    /// Do not read environment variables.
    #[default]
    Disabled,
    /// Read the process environment.
    Process,
    /// Read a fixed variable map instead of the process environment.
    Vars(HashMap<String, String>),
}

/// Rewrite `AAPCTL_<A>_<B>__<SUFFIX>` to `AAPCTL_<A>-<B>__<SUFFIX>`.
fn command_scoped_name(name: &str) -> String {
    let head = format!("{}{}", ENV_PREFIX, PREFIX_SEPARATOR);
    let Some(rest) = name
        .get(..head.len())
        .filter(|start| start.eq_ignore_ascii_case(&head))
        .map(|_| &name[head.len()..])
    else {
        return name.to_string();
    };
    match rest.split_once(KEY_SEPARATOR) {
        Some((prefix, suffix)) => format!(
            "{}{}{}{}",
            head,
            prefix.replace('_', "-"),
            KEY_SEPARATOR,
            suffix
        ),
        None => name.to_string(),
    }
}

fn command_scoped_vars<I>(vars: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    vars.into_iter()
        .map(|(name, value)| (command_scoped_name(&name), value))
        .collect()
}

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    source: &EnvSource,
) -> ConfigBuilder<DefaultState> {
    let vars = match source {
        EnvSource::Disabled => return builder,
        EnvSource::Process => command_scoped_vars(std::env::vars()),
        EnvSource::Vars(vars) => command_scoped_vars(vars.clone()),
    };
    let environment = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(PREFIX_SEPARATOR)
        .separator(KEY_SEPARATOR)
        .try_parsing(true)
        .source(Some(vars));
    builder.add_source(environment)
}
