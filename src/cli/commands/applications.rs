//! `applications` commands.

use crate::cli::deps::CliDependencies;
use crate::cli::executor::{execute_list, execute_single, Operation};
use crate::config::flags::{flag_name, FLAG_APPLICATION_ID, FLAG_NAME};
use crate::config::Settings;
use crate::error::CommandError;
use crate::models::{ApplicationUpdate, NewApplication};

use super::build_list_query;

pub const COMMAND_APPLICATIONS: &str = "applications";
pub const COMMAND_APPLICATIONS_CREATE: &str = "applications-create";
pub const COMMAND_APPLICATIONS_UPDATE: &str = "applications-update";
pub const COMMAND_APPLICATIONS_DELETE: &str = "applications-delete";
pub const COMMAND_APPLICATIONS_LIST: &str = "applications-list";

pub fn build_create_request(settings: &Settings, flag_prefix: &str) -> NewApplication {
    NewApplication {
        name: settings.get_string(&flag_name(flag_prefix, FLAG_NAME)),
    }
}

pub fn build_update_request(settings: &Settings, flag_prefix: &str) -> ApplicationUpdate {
    ApplicationUpdate {
        application_id: settings.get_i64(&flag_name(flag_prefix, FLAG_APPLICATION_ID)),
        name: settings.get_string(&flag_name(flag_prefix, FLAG_NAME)),
    }
}

pub fn run_create(deps: &dyn CliDependencies, settings: &Settings) -> Result<(), CommandError> {
    execute_single(deps, settings, Operation::Create, |client, settings| {
        client.create_application(&build_create_request(settings, COMMAND_APPLICATIONS_CREATE))
    })
}

pub fn run_update(deps: &dyn CliDependencies, settings: &Settings) -> Result<(), CommandError> {
    execute_single(deps, settings, Operation::Update, |client, settings| {
        client.update_application(&build_update_request(settings, COMMAND_APPLICATIONS_UPDATE))
    })
}

pub fn run_delete(deps: &dyn CliDependencies, settings: &Settings) -> Result<(), CommandError> {
    execute_single(deps, settings, Operation::Delete, |client, settings| {
        let application_id =
            settings.get_i64(&flag_name(COMMAND_APPLICATIONS_DELETE, FLAG_APPLICATION_ID));
        client.delete_application(application_id)
    })
}

pub fn run_list(deps: &dyn CliDependencies, settings: &Settings) -> Result<(), CommandError> {
    execute_list(deps, settings, |client, settings| {
        let query = build_list_query(settings, COMMAND_APPLICATIONS_LIST, FLAG_APPLICATION_ID);
        client.fetch_applications(&query)
    })
}
