//! Settings layering as seen by a running command: config files, environment
//! and command-line flags.

use super::test_utils::*;
use aapctl::cli::{run, settings_sources, Cli, OutputMode};
use aapctl::config::flags::{aap_target_key, flag_name};
use aapctl::config::{workdir_config_path, EnvSource, Settings};
use clap::Parser;
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

fn write_workdir_config(workdir: &TempDir, contents: &str) {
    let path = workdir_config_path(workdir.path());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn load(cli: &Cli, env: EnvSource) -> Settings {
    let mut sources = settings_sources(cli);
    sources.config_file = None;
    sources.env = env;
    Settings::load(&sources).unwrap()
}

#[test]
fn test_workdir_config_selects_output_and_target() {
    let workdir = TempDir::new().unwrap();
    write_workdir_config(&workdir, "output = \"json\"\n\n[aap]\ntarget = \"file:9092\"\n");
    let dir = workdir.path().to_string_lossy().into_owned();

    let cli = Cli::try_parse_from([
        "aapctl",
        "-w",
        dir.as_str(),
        "applications",
        "delete",
        "--appid",
        "581616507495",
    ])
    .unwrap();
    let settings = load(&cli, EnvSource::Disabled);
    let deps = MockDependencies::new();
    run(&cli.command, &deps, &settings).unwrap();

    assert_eq!(deps.printer_creations(), vec![(OutputMode::Json, false)]);
    assert_eq!(deps.client_targets(), vec!["file:9092".to_string()]);
}

#[test]
fn test_flag_beats_env_beats_workdir_file() {
    let workdir = TempDir::new().unwrap();
    write_workdir_config(&workdir, "[aap]\ntarget = \"file:9092\"\n");
    let dir = workdir.path().to_string_lossy().into_owned();
    let mut vars = HashMap::new();
    vars.insert("AAPCTL_AAP__TARGET".to_string(), "env:9092".to_string());

    let cli = Cli::try_parse_from(["aapctl", "-w", dir.as_str(), "tenants", "list"]).unwrap();
    let settings = load(&cli, EnvSource::Vars(vars.clone()));
    assert_eq!(settings.get_string(&aap_target_key()), "env:9092");

    let cli = Cli::try_parse_from([
        "aapctl",
        "-w",
        dir.as_str(),
        "--aap-target",
        "flag:9092",
        "tenants",
        "list",
    ])
    .unwrap();
    let settings = load(&cli, EnvSource::Vars(vars));
    assert_eq!(settings.get_string(&aap_target_key()), "flag:9092");
}

#[test]
fn test_command_flag_can_come_from_environment() {
    let mut vars = HashMap::new();
    vars.insert("AAPCTL_TENANTS__APPLICATIONID".to_string(), "42".to_string());

    let cli = Cli::try_parse_from(["aapctl", "tenants", "list"]).unwrap();
    let settings = load(&cli, EnvSource::Vars(vars));
    assert_eq!(settings.get_i64(&flag_name("tenants", "applicationid")), 42);

    let deps = MockDependencies::new();
    run(&cli.command, &deps, &settings).unwrap();
    assert!(matches!(
        deps.client_calls().as_slice(),
        [ClientCall::FetchTenants(42, _)]
    ));
}

#[test]
fn test_verb_scoped_flag_can_come_from_environment() {
    let mut vars = HashMap::new();
    vars.insert("AAPCTL_IDENTITIES__APPLICATIONID".to_string(), "7".to_string());
    vars.insert(
        "AAPCTL_IDENTITIES_LIST__IDENTITYID".to_string(),
        "9ab2b0a4".to_string(),
    );

    let cli = Cli::try_parse_from(["aapctl", "identities", "list"]).unwrap();
    let settings = load(&cli, EnvSource::Vars(vars));
    assert_eq!(
        settings.get_string(&flag_name("identities-list", "identityid")),
        "9ab2b0a4"
    );

    let deps = MockDependencies::new();
    run(&cli.command, &deps, &settings).unwrap();
    assert!(matches!(
        deps.client_calls().as_slice(),
        [ClientCall::FetchIdentities(7, query)] if query.id.as_deref() == Some("9ab2b0a4")
    ));
}

#[test]
fn test_explicit_config_file_must_exist() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("absent.toml");
    let path = missing.to_string_lossy().into_owned();
    let cli = Cli::try_parse_from(["aapctl", "--config", path.as_str(), "tenants", "list"])
        .unwrap();

    let mut sources = settings_sources(&cli);
    sources.env = EnvSource::Disabled;
    assert!(sources.config_file_required);
    assert!(Settings::load(&sources).is_err());
}
