//! End-to-end tests for the `identities` and `identitysources` commands.

use super::test_utils::*;
use aapctl::cli::run;
use aapctl::error::CommandError;
use aapctl::models::{IdentityUpdate, ListQuery, NamedRecordUpdate, NewIdentity, NewNamedRecord};
use serde_json::json;

fn run_with(deps: &MockDependencies, args: &[&str]) -> Result<(), CommandError> {
    let (cli, settings) = settings_from_args(args);
    run(&cli.command, deps, &settings)
}

#[test]
fn test_create_identity_request_shape() {
    let deps = MockDependencies::new();
    let result = run_with(
        &deps,
        &[
            "aapctl",
            "identities",
            "--appid",
            "581616507495",
            "create",
            "--identitysourceid",
            "1da1d9094501",
            "--name",
            "nicolagallo",
            "--kind",
            "user",
        ],
    );

    assert!(result.is_ok());
    assert_eq!(
        deps.client_calls(),
        vec![ClientCall::CreateIdentity(NewIdentity {
            application_id: APPLICATION_ID,
            identity_source_id: "1da1d9094501".to_string(),
            kind: "user".to_string(),
            name: "nicolagallo".to_string(),
        })]
    );
    assert_eq!(
        deps.printer_calls(),
        vec![PrinterCall::PrintlnMap(
            vec![("9ab2b0a4", json!("nicolagallo"))].into_iter().collect()
        )]
    );
}

#[test]
fn test_update_identity_request_shape() {
    let deps = MockDependencies::new();
    let result = run_with(
        &deps,
        &[
            "aapctl",
            "identities",
            "update",
            "--appid",
            "581616507495",
            "--identityid",
            "9ab2b0a4",
            "--name",
            "nicola",
            "--kind",
            "role-actor",
        ],
    );

    assert!(result.is_ok());
    assert_eq!(
        deps.client_calls(),
        vec![ClientCall::UpdateIdentity(IdentityUpdate {
            identity_id: "9ab2b0a4".to_string(),
            application_id: APPLICATION_ID,
            kind: "role-actor".to_string(),
            name: "nicola".to_string(),
        })]
    );
}

#[test]
fn test_create_identity_failure_message() {
    let deps = MockDependencies::with_failing_remote();
    let result = run_with(
        &deps,
        &[
            "aapctl",
            "identities",
            "--appid",
            "1",
            "create",
            "--identitysourceid",
            "src",
            "--name",
            "n",
        ],
    );

    assert!(matches!(result, Err(CommandError::Silent)));
    assert_eq!(
        deps.printer_calls(),
        vec![PrinterCall::Println(
            "Failed to create the identity.".to_string()
        )]
    );
}

#[test]
fn test_delete_identity_uses_verbatim_identifier() {
    let deps = MockDependencies::new();
    let result = run_with(
        &deps,
        &[
            "aapctl",
            "identities",
            "--appid",
            "581616507495",
            "delete",
            "--identityid",
            "not a uuid/at all",
        ],
    );

    assert!(result.is_ok());
    assert_eq!(
        deps.client_calls(),
        vec![ClientCall::DeleteIdentity(
            APPLICATION_ID,
            "not a uuid/at all".to_string()
        )]
    );
}

#[test]
fn test_list_identities_json_keys_by_collection() {
    let deps = MockDependencies::new();
    let result = run_with(
        &deps,
        &[
            "aapctl",
            "-o",
            "json",
            "identities",
            "--appid",
            "581616507495",
            "list",
            "--name",
            "nicola",
        ],
    );

    assert!(result.is_ok());
    assert_eq!(
        deps.client_calls(),
        vec![ClientCall::FetchIdentities(
            APPLICATION_ID,
            ListQuery {
                name: Some("nicola".to_string()),
                ..ListQuery::default()
            }
        )]
    );
    let calls = deps.printer_calls();
    let PrinterCall::PrintlnMap(map) = &calls[0] else {
        panic!("expected a printed map, got {:?}", calls[0]);
    };
    let identities = map.get("identities").and_then(|v| v.as_array()).unwrap();
    assert_eq!(identities.len(), 2);
    assert_eq!(identities[1]["kind"], "role-actor");
}

#[test]
fn test_identity_source_create_and_update() {
    let deps = MockDependencies::new();
    run_with(
        &deps,
        &[
            "aapctl",
            "identitysources",
            "--appid",
            "581616507495",
            "create",
            "--name",
            "keycloak",
        ],
    )
    .unwrap();
    run_with(
        &deps,
        &[
            "aapctl",
            "identitysources",
            "--appid",
            "581616507495",
            "update",
            "--identitysourceid",
            "1da1d9094501",
            "--name",
            "keycloak-eu",
        ],
    )
    .unwrap();

    assert_eq!(
        deps.client_calls(),
        vec![
            ClientCall::CreateIdentitySource(NewNamedRecord {
                application_id: APPLICATION_ID,
                name: "keycloak".to_string(),
            }),
            ClientCall::UpdateIdentitySource(NamedRecordUpdate {
                id: "1da1d9094501".to_string(),
                application_id: APPLICATION_ID,
                name: "keycloak-eu".to_string(),
            }),
        ]
    );
}

#[test]
fn test_identity_source_delete_failure_names_resource() {
    let deps = MockDependencies::with_failing_remote();
    let result = run_with(
        &deps,
        &[
            "aapctl",
            "identitysources",
            "--appid",
            "1",
            "delete",
            "--identitysourceid",
            "x",
        ],
    );

    assert!(matches!(result, Err(CommandError::Silent)));
    assert_eq!(
        deps.printer_calls(),
        vec![PrinterCall::Println(
            "Failed to delete the identity source.".to_string()
        )]
    );
}
