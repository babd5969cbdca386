mod common;
use common::{add, init_db, rft, setup_test_db, temp_out};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

#[test]
fn test_init_creates_database() {
    let db = setup_test_db("init_creates_database");
    init_db(&db);
    assert!(std::path::Path::new(&db).exists());
}

#[test]
fn test_add_and_list() {
    let db = setup_test_db("add_and_list");
    init_db(&db);

    rft()
        .args([
            "--db", &db, "--today", "2025-09-01", "add", "--in", "2000", "--out", "2400",
        ])
        .assert()
        .success()
        .stdout(contains("Recorded 2025-09-01: in 2000 kcal, out 2400 kcal"))
        .stdout(contains("1 day streak"));

    rft()
        .args(["--db", &db, "--today", "2025-09-01", "list"])
        .assert()
        .success()
        .stdout(contains("Daily report"))
        .stdout(contains("2025-09-01"))
        .stdout(contains("-400"));
}

#[test]
fn test_same_day_entries_are_summed() {
    let db = setup_test_db("same_day_summed");
    init_db(&db);
    add(&db, "2025-09-02", "1000", "1200");

    rft()
        .args([
            "--db", &db, "--today", "2025-09-02", "add", "--in", "500", "--out", "400",
        ])
        .assert()
        .success()
        .stdout(contains("Day total: 1500 - 1600 = -100 kcal"));
}

#[test]
fn test_add_nothing_is_a_no_op() {
    let db = setup_test_db("add_nothing");
    init_db(&db);

    rft()
        .args([
            "--db", &db, "--today", "2025-09-01", "add", "--in", "", "--out", "0",
        ])
        .assert()
        .success()
        .stdout(contains("Nothing to record"));

    rft()
        .args(["--db", &db, "list"])
        .assert()
        .success()
        .stdout(contains("No entries recorded."));
}

#[test]
fn test_add_coerces_invalid_numbers() {
    let db = setup_test_db("add_coerces");
    init_db(&db);

    rft()
        .args([
            "--db", &db, "--today", "2025-09-01", "add", "--in", "abc", "--out", "300",
        ])
        .assert()
        .success()
        .stdout(contains("in 0 kcal, out 300 kcal"));
}

#[test]
fn test_status_shows_estimate_and_streak() {
    let db = setup_test_db("status_estimate");
    init_db(&db);
    add(&db, "2025-09-01", "2000", "2400");

    rft()
        .args(["--db", &db, "--today", "2025-09-01", "status"])
        .assert()
        .success()
        .stdout(contains("Streak: 1 days"))
        .stdout(contains("55.6 g"))
        .stdout(contains("バター1箱"));
}

#[test]
fn test_status_stale_ledger_has_no_streak() {
    let db = setup_test_db("status_stale");
    init_db(&db);
    add(&db, "2025-09-01", "2000", "2400");

    rft()
        .args(["--db", &db, "--today", "2025-09-04", "status"])
        .assert()
        .success()
        .stdout(contains("Streak: 0 days"));
}

#[test]
fn test_del_with_yes() {
    let db = setup_test_db("del_with_yes");
    init_db(&db);
    add(&db, "2025-09-01", "2000", "2400");
    add(&db, "2025-09-01", "300", "0");
    add(&db, "2025-09-02", "1800", "2000");

    rft()
        .args(["--db", &db, "del", "2025-09-01", "--yes"])
        .assert()
        .success()
        .stdout(contains("Deleted 2 entries for 2025-09-01"));

    rft()
        .args(["--db", &db, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-02"))
        .stdout(contains("2025-09-01").not());
}

#[test]
fn test_del_unknown_date_fails() {
    let db = setup_test_db("del_unknown");
    init_db(&db);
    add(&db, "2025-09-01", "2000", "2400");

    rft()
        .args(["--db", &db, "del", "2025-09-09", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No entries found for date 2025-09-09"));
}

#[test]
fn test_del_invalid_date_fails() {
    let db = setup_test_db("del_invalid");
    init_db(&db);

    rft()
        .args(["--db", &db, "del", "2025-13-01", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_del_cancelled_keeps_entries() {
    let db = setup_test_db("del_cancelled");
    init_db(&db);
    add(&db, "2025-09-01", "2000", "2400");

    rft()
        .args(["--db", &db, "del", "2025-09-01"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Deletion cancelled."));

    rft()
        .args(["--db", &db, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"));
}

#[test]
fn test_gallery_marks_unlocked_milestones() {
    let db = setup_test_db("gallery_unlocked");
    init_db(&db);
    add(&db, "2025-09-01", "0", "1440");

    rft()
        .args(["--db", &db, "--today", "2025-09-01", "gallery"])
        .assert()
        .success()
        .stdout(contains("GET"))
        .stdout(contains("？？？"))
        .stdout(contains("1/11 unlocked"));
}

#[test]
fn test_chart_labels_days() {
    let db = setup_test_db("chart_labels");
    init_db(&db);
    add(&db, "2025-09-01", "2000", "2400");
    add(&db, "2025-09-02", "2600", "2400");

    rft()
        .args(["--db", &db, "--today", "2025-09-02", "chart"])
        .assert()
        .success()
        .stdout(contains("Balance trend"))
        .stdout(contains("09-01"))
        .stdout(contains("09-02"));
}

#[test]
fn test_chart_empty() {
    let db = setup_test_db("chart_empty");
    init_db(&db);

    rft()
        .args(["--db", &db, "chart"])
        .assert()
        .success()
        .stdout(contains("No data to chart."));
}

#[test]
fn test_import_merges_by_id() {
    let db = setup_test_db("import_merge");
    init_db(&db);

    let file = temp_out("import_merge", "json");
    fs::write(
        &file,
        r#"[
            {"id":"1725235200000","date":"2025-09-02","intake":1800,"burn":2100},
            {"id":"1725148800000","date":"2025-09-01","intake":2000,"burn":2400}
        ]"#,
    )
    .expect("write import file");

    rft()
        .args(["--db", &db, "import", "--file", &file])
        .assert()
        .success()
        .stdout(contains("Imported 2 entries"));

    // same file again: every id is already known
    rft()
        .args(["--db", &db, "import", "--file", &file])
        .assert()
        .success()
        .stdout(contains("Imported 0 entries"));

    rft()
        .args(["--db", &db, "list", "--asc"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-02"));
}

#[test]
fn test_import_rejects_bad_file() {
    let db = setup_test_db("import_bad");
    init_db(&db);

    let file = temp_out("import_bad", "json");
    fs::write(&file, "not json").expect("write import file");

    rft()
        .args(["--db", &db, "import", "--file", &file])
        .assert()
        .failure()
        .stderr(contains("JSON error"));
}

#[test]
fn test_log_records_operations() {
    let db = setup_test_db("log_records");
    init_db(&db);
    add(&db, "2025-09-01", "2000", "2400");

    rft()
        .args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("add"))
        .stdout(contains("migration_applied"));
}

#[test]
fn test_backup_copies_database() {
    let db = setup_test_db("backup_copy");
    init_db(&db);
    add(&db, "2025-09-01", "2000", "2400");

    let dest = temp_out("backup_copy", "sqlite");
    rft()
        .args(["--db", &db, "backup", "--file", &dest, "--force"])
        .assert()
        .success();

    assert!(std::path::Path::new(&dest).exists());
}
