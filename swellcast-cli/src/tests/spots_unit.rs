//! Unit tests for the `spots` command.

use super::helpers::{Workspace, spot};
use crate::spots::{SpotsArgs, run_spots_with};
use crate::{ARG_SPOTS, CliError};
use rstest::rstest;
use swellcast_data::SpotRecord;

#[rstest]
fn prints_catalogue_records() {
    let workspace = Workspace::new();
    let args = SpotsArgs {
        spots: Some(workspace.write_catalogue()),
    };
    let mut stdout = Vec::new();

    run_spots_with(args, &mut stdout).expect("spots succeeds");

    let records: Vec<SpotRecord> = serde_json::from_slice(&stdout).expect("catalogue JSON");
    assert_eq!(records, vec![SpotRecord::from(&spot())]);
    assert!(stdout.ends_with(b"\n"));
}

#[rstest]
fn missing_catalogue_is_reported() {
    let workspace = Workspace::new();
    let args = SpotsArgs {
        spots: Some(workspace.path("absent.json")),
    };
    let mut stdout = Vec::new();

    let err = run_spots_with(args, &mut stdout).expect_err("missing catalogue");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_SPOTS),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}
