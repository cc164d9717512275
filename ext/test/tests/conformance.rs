//! Conformance tests that run YAML fixtures against recmatch
//!
//! Run with: cargo test -p recmatch-test --test conformance
//!
//! Set `RUST_LOG=recmatch=trace` to see every evaluated entry.

#![cfg(feature = "fixtures")]

use recmatch_test::fixture::Fixture;
use std::fs;
use std::path::{Path, PathBuf};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The fixtures directory of this crate
fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and run every fixture in one file
fn run_fixture_file(name: &str) {
    init_tracing();

    let path = fixtures_dir().join(name);
    let yaml = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));

    // Parse potentially multiple fixtures (separated by ---)
    let fixtures = Fixture::from_yaml_multi(&yaml).unwrap_or_else(|e| {
        panic!("Failed to parse {}: {}", path.display(), e);
    });
    assert!(!fixtures.is_empty(), "{} has no fixtures", path.display());

    for fixture in fixtures {
        println!("  Running: {}", fixture.name);
        fixture.run_and_assert();
    }
}

#[test]
fn test_modes() {
    run_fixture_file("01_modes.yaml");
}

#[test]
fn test_direction() {
    run_fixture_file("02_direction.yaml");
}

#[test]
fn test_flatten() {
    run_fixture_file("03_flatten.yaml");
}

#[test]
fn test_membership() {
    run_fixture_file("04_membership.yaml");
}

#[test]
fn test_errors() {
    run_fixture_file("05_errors.yaml");
}

#[test]
fn every_fixture_file_is_covered() {
    let mut files: Vec<String> = fs::read_dir(fixtures_dir())
        .expect("read fixtures dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".yaml") || name.ends_with(".yml"))
        .collect();
    files.sort();
    assert_eq!(
        files,
        vec![
            "01_modes.yaml",
            "02_direction.yaml",
            "03_flatten.yaml",
            "04_membership.yaml",
            "05_errors.yaml",
        ]
    );
}
