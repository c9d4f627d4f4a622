//! Tests for loading breakpoint tables from disk.

use std::fs;
use std::path::PathBuf;

use stratum_test::prelude::*;
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write config file");
    path
}

#[test]
fn test_load_custom_table_and_drive_state() {
    init_tracing();
    let dir = TempDir::new().expect("create temp dir");
    let path = write_config(
        &dir,
        "phone-first.toml",
        "[breakpoints]\nxs = 360\nsm = 600\nmd = 905\nlg = 1240\nxl = 1440\nxxl = 1920\n",
    );
    let grid = GridBreakpoints::load(&path).expect("table loads");
    assert_eq!(grid.threshold(Breakpoint::Sm), 600.0);

    let host = FixedViewport::new(700.0, 900.0);
    let state = ResponsiveState::with_grid(host.source(), grid);
    assert_eq!(state.breakpoint(), ScreenSizeBp::Sm);
    assert!(state.is_tablet());
}

#[test]
fn test_load_rejects_bad_table() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_config(
        &dir,
        "descending.toml",
        "[breakpoints]\nxs = 1920\nsm = 1440\nmd = 1280\nlg = 1020\nxl = 800\nxxl = 320\n",
    );
    let err = GridBreakpoints::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().starts_with("invalid breakpoint table"));
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().expect("create temp dir");
    let missing = dir.path().join("breakpoints.toml");
    assert!(matches!(
        GridBreakpoints::load(missing),
        Err(ConfigError::Read { .. })
    ));
}
