//! Unit tests for the stats command and the JSON file catalogue.

use super::helpers::{Workspace, write_utf8};
use super::*;
use crate::stats::run_stats_with;
use rstest::rstest;
use serde_json::json;
use suburb_core::{CatalogError, RegionCatalog};

#[rstest]
fn stats_prints_catalogue_totals() {
    let workspace = Workspace::new();
    let args = StatsArgs {
        catalog: Some(workspace.write_catalog()),
    };
    let mut stdout = Vec::new();
    run_stats_with(args, &mut stdout).expect("command should succeed");

    let printed: serde_json::Value = serde_json::from_slice(&stdout).expect("stdout is JSON");
    assert_eq!(printed.get("region_count"), Some(&json!(2)));
    assert_eq!(printed.get("total_pois"), Some(&json!(25)));
    let per_category = printed.get("per_category").expect("per-category totals");
    assert_eq!(per_category.get("recreation"), Some(&json!(15)));
    assert_eq!(per_category.get("community"), Some(&json!(10)));
}

#[rstest]
fn stats_reports_missing_catalogue() {
    let workspace = Workspace::new();
    let args = StatsArgs {
        catalog: Some(workspace.path("absent.json")),
    };
    let err = run_stats_with(args, &mut Vec::new()).expect_err("missing file should fail");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_CATALOG),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn json_catalogue_rereads_the_file() {
    let workspace = Workspace::new();
    let path = workspace.write_catalog();
    let catalog = JsonFileCatalog::new(path.clone());
    assert_eq!(catalog.snapshot().expect("first read").len(), 2);

    write_utf8(&path, br#"[{"name": "C"}]"#);
    let snapshot = catalog.snapshot().expect("second read");
    assert_eq!(snapshot.len(), 1);
    assert_eq!(catalog.path(), path);
}

#[rstest]
#[case::malformed(b"[{".as_slice())]
#[case::unknown_category(br#"[{"name": "C", "poi_counts": {"nightlife": 2}}]"#.as_slice())]
#[case::half_centroid(br#"[{"name": "C", "latitude": -33.8}]"#.as_slice())]
fn json_catalogue_rejects_bad_records(#[case] payload: &[u8]) {
    let workspace = Workspace::new();
    let path = workspace.path("regions.json");
    write_utf8(&path, payload);
    let err = JsonFileCatalog::new(path)
        .snapshot()
        .expect_err("bad catalogue should fail");
    assert!(matches!(err, CatalogError::Source(_)));
}

#[rstest]
fn json_catalogue_rejects_duplicate_names() {
    let workspace = Workspace::new();
    let path = workspace.path("regions.json");
    write_utf8(&path, br#"[{"name": "C"}, {"name": "C"}]"#);
    let err = JsonFileCatalog::new(path)
        .snapshot()
        .expect_err("duplicates should fail");
    assert!(matches!(err, CatalogError::DuplicateRegion { .. }));
}
