//! CLI route: maps parsed flags onto namespaced settings keys and dispatches
//! each command to its resource module.

use crate::cli::commands::{applications, identities, identity_sources, tenants};
use crate::cli::deps::CliDependencies;
use crate::cli::help::command_name;
use crate::cli::parse::{
    ApplicationCommands, Cli, Commands, IdentityCommands, IdentitySourceCommands, ListArgs,
    TenantCommands,
};
use crate::config::flags::{
    aap_target_key, flag_name, FLAG_APPLICATION_ID, FLAG_IDENTITY_ID, FLAG_IDENTITY_SOURCE_ID,
    FLAG_KIND, FLAG_NAME, FLAG_OUTPUT, FLAG_PAGE, FLAG_PAGE_SIZE, FLAG_TENANT_ID, FLAG_VERBOSE,
    FLAG_WORKDIR,
};
use crate::config::{global_config_path, EnvSource, Settings, SettingsSources};
use crate::error::CommandError;
use config::Value;
use std::path::PathBuf;
use tracing::{debug, info_span};

/// Flag values of one command prefix, recorded only when given.
struct FlagOverrides<'a> {
    prefix: &'a str,
    values: Vec<(String, Value)>,
}

impl<'a> FlagOverrides<'a> {
    fn new(prefix: &'a str) -> Self {
        Self {
            prefix,
            values: Vec::new(),
        }
    }

    fn set(mut self, suffix: &str, value: impl Into<Value>) -> Self {
        self.values.push((flag_name(self.prefix, suffix), value.into()));
        self
    }

    fn set_opt<V: Into<Value>>(self, suffix: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(suffix, value),
            None => self,
        }
    }

    fn list(self, list: &ListArgs) -> Self {
        self.set_opt(FLAG_PAGE, list.page)
            .set_opt(FLAG_PAGE_SIZE, list.page_size)
            .set_opt(FLAG_NAME, list.name.clone())
    }

    fn into_values(self) -> Vec<(String, Value)> {
        self.values
    }
}

/// Namespaced overrides for the flags of `command`.
pub fn command_overrides(command: &Commands) -> Vec<(String, Value)> {
    use applications::{
        COMMAND_APPLICATIONS_CREATE, COMMAND_APPLICATIONS_DELETE, COMMAND_APPLICATIONS_LIST,
        COMMAND_APPLICATIONS_UPDATE,
    };
    use identities::{
        COMMAND_IDENTITIES, COMMAND_IDENTITIES_CREATE, COMMAND_IDENTITIES_DELETE,
        COMMAND_IDENTITIES_LIST, COMMAND_IDENTITIES_UPDATE,
    };
    use identity_sources::{
        COMMAND_IDENTITY_SOURCES, COMMAND_IDENTITY_SOURCES_CREATE,
        COMMAND_IDENTITY_SOURCES_DELETE, COMMAND_IDENTITY_SOURCES_LIST,
        COMMAND_IDENTITY_SOURCES_UPDATE,
    };
    use tenants::{
        COMMAND_TENANTS, COMMAND_TENANTS_CREATE, COMMAND_TENANTS_DELETE, COMMAND_TENANTS_LIST,
        COMMAND_TENANTS_UPDATE,
    };

    match command {
        Commands::Applications { command } => {
            let verb = match command {
                ApplicationCommands::Create { name } => {
                    FlagOverrides::new(COMMAND_APPLICATIONS_CREATE).set(FLAG_NAME, name.clone())
                }
                ApplicationCommands::Update {
                    application_id,
                    name,
                } => FlagOverrides::new(COMMAND_APPLICATIONS_UPDATE)
                    .set(FLAG_APPLICATION_ID, *application_id)
                    .set_opt(FLAG_NAME, name.clone()),
                ApplicationCommands::Delete { application_id } => {
                    FlagOverrides::new(COMMAND_APPLICATIONS_DELETE)
                        .set(FLAG_APPLICATION_ID, *application_id)
                }
                ApplicationCommands::List {
                    application_id,
                    list,
                } => FlagOverrides::new(COMMAND_APPLICATIONS_LIST)
                    .set_opt(FLAG_APPLICATION_ID, *application_id)
                    .list(list),
            };
            verb.into_values()
        }
        Commands::IdentitySources {
            application_id,
            command,
        } => {
            let group = FlagOverrides::new(COMMAND_IDENTITY_SOURCES)
                .set_opt(FLAG_APPLICATION_ID, *application_id);
            let verb = match command {
                IdentitySourceCommands::Create { name } => {
                    FlagOverrides::new(COMMAND_IDENTITY_SOURCES_CREATE)
                        .set(FLAG_NAME, name.clone())
                }
                IdentitySourceCommands::Update {
                    identity_source_id,
                    name,
                } => FlagOverrides::new(COMMAND_IDENTITY_SOURCES_UPDATE)
                    .set(FLAG_IDENTITY_SOURCE_ID, identity_source_id.clone())
                    .set_opt(FLAG_NAME, name.clone()),
                IdentitySourceCommands::Delete { identity_source_id } => {
                    FlagOverrides::new(COMMAND_IDENTITY_SOURCES_DELETE)
                        .set(FLAG_IDENTITY_SOURCE_ID, identity_source_id.clone())
                }
                IdentitySourceCommands::List {
                    identity_source_id,
                    list,
                } => FlagOverrides::new(COMMAND_IDENTITY_SOURCES_LIST)
                    .set_opt(FLAG_IDENTITY_SOURCE_ID, identity_source_id.clone())
                    .list(list),
            };
            [group.into_values(), verb.into_values()].concat()
        }
        Commands::Identities {
            application_id,
            command,
        } => {
            let group = FlagOverrides::new(COMMAND_IDENTITIES)
                .set_opt(FLAG_APPLICATION_ID, *application_id);
            let verb = match command {
                IdentityCommands::Create {
                    identity_source_id,
                    name,
                    kind,
                } => FlagOverrides::new(COMMAND_IDENTITIES_CREATE)
                    .set(FLAG_IDENTITY_SOURCE_ID, identity_source_id.clone())
                    .set(FLAG_NAME, name.clone())
                    .set(FLAG_KIND, kind.clone()),
                IdentityCommands::Update {
                    identity_id,
                    name,
                    kind,
                } => FlagOverrides::new(COMMAND_IDENTITIES_UPDATE)
                    .set(FLAG_IDENTITY_ID, identity_id.clone())
                    .set_opt(FLAG_NAME, name.clone())
                    .set_opt(FLAG_KIND, kind.clone()),
                IdentityCommands::Delete { identity_id } => {
                    FlagOverrides::new(COMMAND_IDENTITIES_DELETE)
                        .set(FLAG_IDENTITY_ID, identity_id.clone())
                }
                IdentityCommands::List { identity_id, list } => {
                    FlagOverrides::new(COMMAND_IDENTITIES_LIST)
                        .set_opt(FLAG_IDENTITY_ID, identity_id.clone())
                        .list(list)
                }
            };
            [group.into_values(), verb.into_values()].concat()
        }
        Commands::Tenants {
            application_id,
            command,
        } => {
            let group =
                FlagOverrides::new(COMMAND_TENANTS).set_opt(FLAG_APPLICATION_ID, *application_id);
            let verb = match command {
                TenantCommands::Create { name } => {
                    FlagOverrides::new(COMMAND_TENANTS_CREATE).set(FLAG_NAME, name.clone())
                }
                TenantCommands::Update { tenant_id, name } => {
                    FlagOverrides::new(COMMAND_TENANTS_UPDATE)
                        .set(FLAG_TENANT_ID, tenant_id.clone())
                        .set_opt(FLAG_NAME, name.clone())
                }
                TenantCommands::Delete { tenant_id } => FlagOverrides::new(COMMAND_TENANTS_DELETE)
                    .set(FLAG_TENANT_ID, tenant_id.clone()),
                TenantCommands::List { tenant_id, list } => {
                    FlagOverrides::new(COMMAND_TENANTS_LIST)
                        .set_opt(FLAG_TENANT_ID, tenant_id.clone())
                        .list(list)
                }
            };
            [group.into_values(), verb.into_values()].concat()
        }
    }
}

/// Settings layers for one invocation: config files, process environment,
/// and every flag given on the command line.
pub fn settings_sources(cli: &Cli) -> SettingsSources {
    let mut sources = SettingsSources::new().with_env(EnvSource::Process);

    match cli.config {
        Some(ref path) => sources = sources.with_config_file(path.clone(), true),
        None => {
            if let Some(path) = global_config_path() {
                sources = sources.with_config_file(path, false);
            }
        }
    }

    let workdir = cli.workdir.clone().unwrap_or_else(|| PathBuf::from("."));
    sources = sources.with_workdir(workdir);

    if let Some(ref workdir) = cli.workdir {
        sources = sources.with_override(FLAG_WORKDIR, workdir.to_string_lossy().into_owned());
    }
    if let Some(ref output) = cli.output {
        sources = sources.with_override(FLAG_OUTPUT, output.clone());
    }
    if cli.verbose {
        sources = sources.with_override(FLAG_VERBOSE, true);
    }
    if let Some(ref target) = cli.aap_target {
        sources = sources.with_override(aap_target_key(), target.clone());
    }

    command_overrides(&cli.command)
        .into_iter()
        .fold(sources, |sources, (key, value)| sources.with_override(key, value))
}

/// Single route table: run `command` against the given dependencies.
pub fn run(
    command: &Commands,
    deps: &dyn CliDependencies,
    settings: &Settings,
) -> Result<(), CommandError> {
    let name = command_name(command);
    let span = info_span!("command", command = %name);
    let _entered = span.enter();
    debug!("Dispatching command");

    match command {
        Commands::Applications { command } => match command {
            ApplicationCommands::Create { .. } => applications::run_create(deps, settings),
            ApplicationCommands::Update { .. } => applications::run_update(deps, settings),
            ApplicationCommands::Delete { .. } => applications::run_delete(deps, settings),
            ApplicationCommands::List { .. } => applications::run_list(deps, settings),
        },
        Commands::IdentitySources { command, .. } => match command {
            IdentitySourceCommands::Create { .. } => identity_sources::run_create(deps, settings),
            IdentitySourceCommands::Update { .. } => identity_sources::run_update(deps, settings),
            IdentitySourceCommands::Delete { .. } => identity_sources::run_delete(deps, settings),
            IdentitySourceCommands::List { .. } => identity_sources::run_list(deps, settings),
        },
        Commands::Identities { command, .. } => match command {
            IdentityCommands::Create { .. } => identities::run_create(deps, settings),
            IdentityCommands::Update { .. } => identities::run_update(deps, settings),
            IdentityCommands::Delete { .. } => identities::run_delete(deps, settings),
            IdentityCommands::List { .. } => identities::run_list(deps, settings),
        },
        Commands::Tenants { command, .. } => match command {
            TenantCommands::Create { .. } => tenants::run_create(deps, settings),
            TenantCommands::Update { .. } => tenants::run_update(deps, settings),
            TenantCommands::Delete { .. } => tenants::run_delete(deps, settings),
            TenantCommands::List { .. } => tenants::run_list(deps, settings),
        },
    }
}
