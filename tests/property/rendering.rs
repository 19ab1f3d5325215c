//! Property-based tests for the output renderer

use aapctl::cli::render::{render, render_all};
use aapctl::cli::OutputMode;
use aapctl::models::Application;
use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use serde_json::Value;

fn application(application_id: i64, name: String) -> Application {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    Application {
        application_id,
        name,
        created_at: at,
        updated_at: at,
    }
}

/// Every mode yields exactly one entry for one record
#[test]
fn test_single_record_renders_one_entry_in_every_mode() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(any::<i64>(), ".{0,24}"), |(id, name)| {
            let app = application(id, name.clone());
            for mode in [OutputMode::Terminal, OutputMode::Json] {
                prop_assert_eq!(render(&app, mode).unwrap().len(), 1);
            }
            let terminal = render(&app, OutputMode::Terminal).unwrap();
            prop_assert_eq!(terminal.get(&id.to_string()), Some(&Value::String(name)));
            Ok(())
        })
        .unwrap();
}

/// Json output always holds the full record set under the collection key
#[test]
fn test_json_render_keeps_every_record() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &proptest::collection::vec((any::<i64>(), "[a-z]{1,8}"), 0..8),
            |records| {
                let apps: Vec<Application> = records
                    .into_iter()
                    .map(|(id, name)| application(id, name))
                    .collect();
                let map = render_all(&apps, OutputMode::Json).unwrap();
                let rendered = map.get("applications").and_then(|v| v.as_array()).cloned();
                prop_assert_eq!(rendered.map(|v| v.len()), Some(apps.len()));
                Ok(())
            },
        )
        .unwrap();
}
