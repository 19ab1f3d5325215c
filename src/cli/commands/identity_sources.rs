//! `identitysources` commands.

use crate::cli::deps::CliDependencies;
use crate::cli::executor::{execute_list, execute_single, Operation};
use crate::config::flags::{flag_name, FLAG_APPLICATION_ID, FLAG_IDENTITY_SOURCE_ID, FLAG_NAME};
use crate::config::Settings;
use crate::error::CommandError;
use crate::models::{NamedRecordUpdate, NewNamedRecord};

use super::build_list_query;

pub const COMMAND_IDENTITY_SOURCES: &str = "identitysources";
pub const COMMAND_IDENTITY_SOURCES_CREATE: &str = "identitysources-create";
pub const COMMAND_IDENTITY_SOURCES_UPDATE: &str = "identitysources-update";
pub const COMMAND_IDENTITY_SOURCES_DELETE: &str = "identitysources-delete";
pub const COMMAND_IDENTITY_SOURCES_LIST: &str = "identitysources-list";

pub fn application_id(settings: &Settings) -> i64 {
    settings.get_i64(&flag_name(COMMAND_IDENTITY_SOURCES, FLAG_APPLICATION_ID))
}

pub fn build_create_request(settings: &Settings, flag_prefix: &str) -> NewNamedRecord {
    NewNamedRecord {
        application_id: application_id(settings),
        name: settings.get_string(&flag_name(flag_prefix, FLAG_NAME)),
    }
}

pub fn build_update_request(settings: &Settings, flag_prefix: &str) -> NamedRecordUpdate {
    NamedRecordUpdate {
        id: settings.get_string(&flag_name(flag_prefix, FLAG_IDENTITY_SOURCE_ID)),
        application_id: application_id(settings),
        name: settings.get_string(&flag_name(flag_prefix, FLAG_NAME)),
    }
}

pub fn run_create(deps: &dyn CliDependencies, settings: &Settings) -> Result<(), CommandError> {
    execute_single(deps, settings, Operation::Create, |client, settings| {
        client.create_identity_source(&build_create_request(
            settings,
            COMMAND_IDENTITY_SOURCES_CREATE,
        ))
    })
}

pub fn run_update(deps: &dyn CliDependencies, settings: &Settings) -> Result<(), CommandError> {
    execute_single(deps, settings, Operation::Update, |client, settings| {
        client.update_identity_source(&build_update_request(
            settings,
            COMMAND_IDENTITY_SOURCES_UPDATE,
        ))
    })
}

pub fn run_delete(deps: &dyn CliDependencies, settings: &Settings) -> Result<(), CommandError> {
    execute_single(deps, settings, Operation::Delete, |client, settings| {
        let identity_source_id = settings.get_string(&flag_name(
            COMMAND_IDENTITY_SOURCES_DELETE,
            FLAG_IDENTITY_SOURCE_ID,
        ));
        client.delete_identity_source(application_id(settings), &identity_source_id)
    })
}

pub fn run_list(deps: &dyn CliDependencies, settings: &Settings) -> Result<(), CommandError> {
    execute_list(deps, settings, |client, settings| {
        let query = build_list_query(
            settings,
            COMMAND_IDENTITY_SOURCES_LIST,
            FLAG_IDENTITY_SOURCE_ID,
        );
        client.fetch_identity_sources(application_id(settings), &query)
    })
}
