//! `identities` commands.
//!
//! Create and update share [`identity_fields`]; each has its own builder so
//! the create path never reads an identifier and the update path always does.

use crate::cli::deps::CliDependencies;
use crate::cli::executor::{execute_list, execute_single, Operation};
use crate::config::flags::{
    flag_name, FLAG_APPLICATION_ID, FLAG_IDENTITY_ID, FLAG_IDENTITY_SOURCE_ID, FLAG_KIND,
    FLAG_NAME,
};
use crate::config::Settings;
use crate::error::CommandError;
use crate::models::{IdentityUpdate, NewIdentity};

use super::build_list_query;

pub const COMMAND_IDENTITIES: &str = "identities";
pub const COMMAND_IDENTITIES_CREATE: &str = "identities-create";
pub const COMMAND_IDENTITIES_UPDATE: &str = "identities-update";
pub const COMMAND_IDENTITIES_DELETE: &str = "identities-delete";
pub const COMMAND_IDENTITIES_LIST: &str = "identities-list";

/// Application id bound on the `identities` group.
pub fn application_id(settings: &Settings) -> i64 {
    settings.get_i64(&flag_name(COMMAND_IDENTITIES, FLAG_APPLICATION_ID))
}

/// Fields common to create and update: (application id, kind, name).
fn identity_fields(settings: &Settings, flag_prefix: &str) -> (i64, String, String) {
    (
        application_id(settings),
        settings.get_string(&flag_name(flag_prefix, FLAG_KIND)),
        settings.get_string(&flag_name(flag_prefix, FLAG_NAME)),
    )
}

pub fn build_create_request(settings: &Settings, flag_prefix: &str) -> NewIdentity {
    let (application_id, kind, name) = identity_fields(settings, flag_prefix);
    NewIdentity {
        application_id,
        identity_source_id: settings.get_string(&flag_name(flag_prefix, FLAG_IDENTITY_SOURCE_ID)),
        kind,
        name,
    }
}

pub fn build_update_request(settings: &Settings, flag_prefix: &str) -> IdentityUpdate {
    let (application_id, kind, name) = identity_fields(settings, flag_prefix);
    IdentityUpdate {
        identity_id: settings.get_string(&flag_name(flag_prefix, FLAG_IDENTITY_ID)),
        application_id,
        kind,
        name,
    }
}

pub fn run_create(deps: &dyn CliDependencies, settings: &Settings) -> Result<(), CommandError> {
    execute_single(deps, settings, Operation::Create, |client, settings| {
        client.create_identity(&build_create_request(settings, COMMAND_IDENTITIES_CREATE))
    })
}

pub fn run_update(deps: &dyn CliDependencies, settings: &Settings) -> Result<(), CommandError> {
    execute_single(deps, settings, Operation::Update, |client, settings| {
        client.update_identity(&build_update_request(settings, COMMAND_IDENTITIES_UPDATE))
    })
}

pub fn run_delete(deps: &dyn CliDependencies, settings: &Settings) -> Result<(), CommandError> {
    execute_single(deps, settings, Operation::Delete, |client, settings| {
        let identity_id =
            settings.get_string(&flag_name(COMMAND_IDENTITIES_DELETE, FLAG_IDENTITY_ID));
        client.delete_identity(application_id(settings), &identity_id)
    })
}

pub fn run_list(deps: &dyn CliDependencies, settings: &Settings) -> Result<(), CommandError> {
    execute_list(deps, settings, |client, settings| {
        let query = build_list_query(settings, COMMAND_IDENTITIES_LIST, FLAG_IDENTITY_ID);
        client.fetch_identities(application_id(settings), &query)
    })
}
