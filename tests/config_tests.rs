mod common;
use common::temp_out;
use rfattracker::config::migrate::{migrate_config_file, missing_keys};
use rfattracker::config::{Config, DEFAULT_STORAGE_KEY};
use rfattracker::errors::AppError;
use std::fs;
use std::path::Path;

fn write_conf(name: &str, content: &str) -> String {
    let path = temp_out(name, "conf");
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn test_load_fills_missing_fields_with_defaults() {
    let path = write_conf("config_defaults", "database: /tmp/ledger.sqlite\n");
    let cfg = Config::load_from(Path::new(&path)).expect("load");

    assert_eq!(cfg.database, "/tmp/ledger.sqlite");
    assert_eq!(cfg.storage_key, DEFAULT_STORAGE_KEY);
    assert_eq!(cfg.chart_width, 30);
    assert_eq!(cfg.log_level, "warn");
}

#[test]
fn test_load_expands_tilde() {
    let path = write_conf("config_tilde", "database: ~/ledger.sqlite\n");
    let cfg = Config::load_from(Path::new(&path)).expect("load");

    let home = dirs::home_dir().expect("home dir");
    assert_eq!(
        cfg.database,
        home.join("ledger.sqlite").to_string_lossy().to_string()
    );
}

#[test]
fn test_load_missing_file_gives_defaults() {
    let path = temp_out("config_absent", "conf");
    let cfg = Config::load_from(Path::new(&path)).expect("load");
    assert_eq!(cfg.storage_key, DEFAULT_STORAGE_KEY);
    assert!(cfg.database.ends_with("rfattracker.sqlite"));
}

#[test]
fn test_load_rejects_invalid_values() {
    let path = write_conf("config_invalid", "database: /tmp/x.sqlite\nchart_width: wide\n");
    let err = Config::load_from(Path::new(&path)).expect_err("must fail");
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_missing_keys_are_reported() {
    let path = write_conf("config_missing_keys", "database: /tmp/ledger.sqlite\n");
    let missing = missing_keys(Path::new(&path)).expect("check");
    assert_eq!(missing, ["storage_key", "chart_width", "log_level"]);
}

#[test]
fn test_migrate_adds_defaults_and_keeps_values() {
    let path = write_conf(
        "config_migrate",
        "database: /tmp/ledger.sqlite\nstorage_key: my-ledger\n",
    );

    let added = migrate_config_file(Path::new(&path)).expect("migrate");
    assert_eq!(added, ["chart_width", "log_level"]);
    assert!(missing_keys(Path::new(&path)).expect("check").is_empty());

    let cfg = Config::load_from(Path::new(&path)).expect("load");
    assert_eq!(cfg.database, "/tmp/ledger.sqlite");
    assert_eq!(cfg.storage_key, "my-ledger");
    assert_eq!(cfg.chart_width, 30);

    // second run has nothing to add
    assert!(migrate_config_file(Path::new(&path)).expect("migrate").is_empty());
}

#[test]
fn test_non_mapping_config_is_rejected() {
    let path = write_conf("config_sequence", "- database\n- storage_key\n");

    let err = missing_keys(Path::new(&path)).expect_err("must fail");
    assert!(matches!(err, AppError::Config(_)));

    let err = migrate_config_file(Path::new(&path)).expect_err("must fail");
    assert!(matches!(err, AppError::Config(_)));
}
