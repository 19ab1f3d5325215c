//! End-to-end tests for the `applications` commands against the stub client.

use super::test_utils::*;
use aapctl::cli::{run, OutputMap};
use aapctl::error::CommandError;
use aapctl::models::{ApplicationUpdate, ListQuery, NewApplication};
use serde_json::{json, Value};

fn delete_args(extra: &[&'static str]) -> Vec<&'static str> {
    let mut args = vec!["aapctl"];
    args.extend_from_slice(extra);
    args.extend_from_slice(&["applications", "delete", "--appid", "581616507495"]);
    args
}

fn run_with(deps: &MockDependencies, args: &[&str]) -> Result<(), CommandError> {
    let (cli, settings) = settings_from_args(args);
    run(&cli.command, deps, &settings)
}

#[test]
fn test_delete_failure_terminal_prints_one_line_and_no_map() {
    let deps = MockDependencies::with_failing_remote();
    let result = run_with(&deps, &delete_args(&["-o", "terminal"]));

    assert!(matches!(result, Err(CommandError::Silent)));
    assert_eq!(
        deps.printer_calls(),
        vec![PrinterCall::Println(
            "Failed to delete the application.".to_string()
        )]
    );
    assert_eq!(
        deps.client_calls(),
        vec![ClientCall::DeleteApplication(APPLICATION_ID)]
    );
}

#[test]
fn test_delete_failure_terminal_verbose_reports_error_once() {
    let deps = MockDependencies::with_failing_remote();
    let result = run_with(&deps, &delete_args(&["-o", "terminal", "-v"]));

    assert!(matches!(result, Err(CommandError::Silent)));
    let calls = deps.printer_calls();
    let errors: Vec<_> = calls
        .iter()
        .filter(|call| matches!(call, PrinterCall::Error(_)))
        .collect();
    assert_eq!(
        errors,
        vec![&PrinterCall::Error(
            "Remote call failed with status 500: remote failure".to_string()
        )]
    );
    assert!(!calls
        .iter()
        .any(|call| matches!(call, PrinterCall::PrintMap(_) | PrinterCall::PrintlnMap(_))));
}

#[test]
fn test_delete_failure_json_prints_nothing() {
    for verbose in [false, true] {
        let deps = MockDependencies::with_failing_remote();
        let mut extra = vec!["-o", "json"];
        if verbose {
            extra.push("-v");
        }
        let result = run_with(&deps, &delete_args(&extra));

        assert!(matches!(result, Err(CommandError::Silent)));
        assert!(deps.printer_calls().is_empty(), "json failure must stay silent");
        assert_eq!(deps.client_calls().len(), 1);
    }
}

#[test]
fn test_delete_success_terminal_prints_id_to_name() {
    let deps = MockDependencies::new();
    let result = run_with(&deps, &delete_args(&["-o", "terminal"]));

    assert!(result.is_ok());
    let expected: OutputMap = vec![("581616507495", Value::from("mycorporate"))]
        .into_iter()
        .collect();
    assert_eq!(deps.printer_calls(), vec![PrinterCall::PrintlnMap(expected)]);
}

#[test]
fn test_delete_success_json_prints_collection() {
    let deps = MockDependencies::new();
    let result = run_with(&deps, &delete_args(&["-o", "json"]));

    assert!(result.is_ok());
    let calls = deps.printer_calls();
    assert_eq!(calls.len(), 1);
    let PrinterCall::PrintlnMap(map) = &calls[0] else {
        panic!("expected a printed map, got {:?}", calls[0]);
    };
    assert_eq!(map.len(), 1);
    assert_eq!(
        map.get("applications"),
        Some(&json!([{
            "application_id": 581616507495_i64,
            "name": "mycorporate",
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": "2024-05-01T10:00:00Z",
        }]))
    );
}

#[test]
fn test_create_application_sends_name_only() {
    let deps = MockDependencies::new();
    let result = run_with(
        &deps,
        &["aapctl", "applications", "create", "--name", "mycorporate"],
    );

    assert!(result.is_ok());
    assert_eq!(
        deps.client_calls(),
        vec![ClientCall::CreateApplication(NewApplication {
            name: "mycorporate".to_string(),
        })]
    );
}

#[test]
fn test_update_application_carries_identifier() {
    let deps = MockDependencies::new();
    let result = run_with(
        &deps,
        &[
            "aapctl",
            "applications",
            "update",
            "--appid",
            "581616507495",
            "--name",
            "mycorporate-renamed",
        ],
    );

    assert!(result.is_ok());
    assert_eq!(
        deps.client_calls(),
        vec![ClientCall::UpdateApplication(ApplicationUpdate {
            application_id: APPLICATION_ID,
            name: "mycorporate-renamed".to_string(),
        })]
    );
    let expected: OutputMap = vec![("581616507495", Value::from("mycorporate-renamed"))]
        .into_iter()
        .collect();
    assert_eq!(deps.printer_calls(), vec![PrinterCall::PrintlnMap(expected)]);
}

#[test]
fn test_list_applications_renders_every_record() {
    let deps = MockDependencies::new();
    let result = run_with(
        &deps,
        &["aapctl", "applications", "list", "--page", "1", "--pagesize", "10"],
    );

    assert!(result.is_ok());
    assert_eq!(
        deps.client_calls(),
        vec![ClientCall::FetchApplications(ListQuery {
            page: Some(1),
            page_size: Some(10),
            id: None,
            name: None,
        })]
    );
    let calls = deps.printer_calls();
    let PrinterCall::PrintlnMap(map) = &calls[0] else {
        panic!("expected a printed map, got {:?}", calls[0]);
    };
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("895741663247"), Some(&json!("mycorporate-dev")));
}

#[test]
fn test_list_failure_terminal_message() {
    let deps = MockDependencies::with_failing_remote();
    let result = run_with(&deps, &["aapctl", "applications", "list"]);

    assert!(matches!(result, Err(CommandError::Silent)));
    assert_eq!(
        deps.printer_calls(),
        vec![PrinterCall::Println(
            "Failed to list the applications.".to_string()
        )]
    );
}
