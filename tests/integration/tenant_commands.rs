//! End-to-end tests for the `tenants` commands.

use super::test_utils::*;
use aapctl::cli::run;
use aapctl::error::CommandError;
use aapctl::models::{NamedRecordUpdate, NewNamedRecord};
use serde_json::json;

fn run_with(deps: &MockDependencies, args: &[&str]) -> Result<(), CommandError> {
    let (cli, settings) = settings_from_args(args);
    run(&cli.command, deps, &settings)
}

#[test]
fn test_create_tenant() {
    let deps = MockDependencies::new();
    let result = run_with(
        &deps,
        &["aapctl", "tenants", "--appid", "7", "create", "--name", "matera-branch"],
    );

    assert!(result.is_ok());
    assert_eq!(
        deps.client_calls(),
        vec![ClientCall::CreateTenant(NewNamedRecord {
            application_id: 7,
            name: "matera-branch".to_string(),
        })]
    );
    assert_eq!(
        deps.printer_calls(),
        vec![PrinterCall::PrintlnMap(
            vec![("t-0001", json!("matera-branch"))].into_iter().collect()
        )]
    );
}

#[test]
fn test_update_tenant_failure_verbose() {
    let deps = MockDependencies::with_failing_remote();
    let result = run_with(
        &deps,
        &[
            "aapctl",
            "-v",
            "tenants",
            "--appid",
            "7",
            "update",
            "--tenantid",
            "t-0001",
            "--name",
            "x",
        ],
    );

    assert!(matches!(result, Err(CommandError::Silent)));
    assert_eq!(
        deps.client_calls(),
        vec![ClientCall::UpdateTenant(NamedRecordUpdate {
            id: "t-0001".to_string(),
            application_id: 7,
            name: "x".to_string(),
        })]
    );
    assert_eq!(
        deps.printer_calls(),
        vec![
            PrinterCall::Println("Failed to update the tenant.".to_string()),
            PrinterCall::Error("Remote call failed with status 500: remote failure".to_string()),
        ]
    );
}

#[test]
fn test_empty_list_json_keeps_collection_key() {
    let deps = MockDependencies::new();
    let result = run_with(&deps, &["aapctl", "-o", "json", "tenants", "--appid", "7", "list"]);

    assert!(result.is_ok());
    assert_eq!(
        deps.printer_calls(),
        vec![PrinterCall::PrintlnMap(
            vec![("tenants", json!([]))].into_iter().collect()
        )]
    );
}

#[test]
fn test_empty_list_terminal_prints_empty_map() {
    let deps = MockDependencies::new();
    let result = run_with(&deps, &["aapctl", "tenants", "--appid", "7", "list"]);

    assert!(result.is_ok());
    assert_eq!(
        deps.printer_calls(),
        vec![PrinterCall::PrintlnMap(Default::default())]
    );
}
