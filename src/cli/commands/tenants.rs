//! `tenants` commands.

use crate::cli::deps::CliDependencies;
use crate::cli::executor::{execute_list, execute_single, Operation};
use crate::config::flags::{flag_name, FLAG_APPLICATION_ID, FLAG_NAME, FLAG_TENANT_ID};
use crate::config::Settings;
use crate::error::CommandError;
use crate::models::{NamedRecordUpdate, NewNamedRecord};

use super::build_list_query;

pub const COMMAND_TENANTS: &str = "tenants";
pub const COMMAND_TENANTS_CREATE: &str = "tenants-create";
pub const COMMAND_TENANTS_UPDATE: &str = "tenants-update";
pub const COMMAND_TENANTS_DELETE: &str = "tenants-delete";
pub const COMMAND_TENANTS_LIST: &str = "tenants-list";

pub fn application_id(settings: &Settings) -> i64 {
    settings.get_i64(&flag_name(COMMAND_TENANTS, FLAG_APPLICATION_ID))
}

pub fn build_create_request(settings: &Settings, flag_prefix: &str) -> NewNamedRecord {
    NewNamedRecord {
        application_id: application_id(settings),
        name: settings.get_string(&flag_name(flag_prefix, FLAG_NAME)),
    }
}

pub fn build_update_request(settings: &Settings, flag_prefix: &str) -> NamedRecordUpdate {
    NamedRecordUpdate {
        id: settings.get_string(&flag_name(flag_prefix, FLAG_TENANT_ID)),
        application_id: application_id(settings),
        name: settings.get_string(&flag_name(flag_prefix, FLAG_NAME)),
    }
}

pub fn run_create(deps: &dyn CliDependencies, settings: &Settings) -> Result<(), CommandError> {
    execute_single(deps, settings, Operation::Create, |client, settings| {
        client.create_tenant(&build_create_request(settings, COMMAND_TENANTS_CREATE))
    })
}

pub fn run_update(deps: &dyn CliDependencies, settings: &Settings) -> Result<(), CommandError> {
    execute_single(deps, settings, Operation::Update, |client, settings| {
        client.update_tenant(&build_update_request(settings, COMMAND_TENANTS_UPDATE))
    })
}

pub fn run_delete(deps: &dyn CliDependencies, settings: &Settings) -> Result<(), CommandError> {
    execute_single(deps, settings, Operation::Delete, |client, settings| {
        let tenant_id = settings.get_string(&flag_name(COMMAND_TENANTS_DELETE, FLAG_TENANT_ID));
        client.delete_tenant(application_id(settings), &tenant_id)
    })
}

pub fn run_list(deps: &dyn CliDependencies, settings: &Settings) -> Result<(), CommandError> {
    execute_list(deps, settings, |client, settings| {
        let query = build_list_query(settings, COMMAND_TENANTS_LIST, FLAG_TENANT_ID);
        client.fetch_tenants(application_id(settings), &query)
    })
}
