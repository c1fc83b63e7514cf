use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{lg, setup_test_db, temp_out};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    lg("cli_init")
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_year_view_for_fixed_date() {
    lg("cli_year")
        .args(["--today", "2024-06-15", "--ascii", "year"])
        .assert()
        .success()
        .stdout(contains("2024 in days"))
        .stdout(contains("Jan ###"))
        .stdout(contains("167 of 366"))
        .stdout(contains("45.6%"));
}

#[test]
fn test_year_stats_only_skips_grid() {
    lg("cli_year_stats")
        .args(["--today", "2023-01-01", "--ascii", "year", "--stats-only"])
        .assert()
        .success()
        .stdout(contains("1 of 365"))
        .stdout(contains("Jan @").not());
}

#[test]
fn test_life_without_birthdate_shows_hint() {
    let db_path = setup_test_db("cli_life_none");

    lg("cli_life_none")
        .args(["--db", &db_path, "--today", "2024-09-24", "life"])
        .assert()
        .success()
        .stdout(contains("No birthdate configured"));
}

#[test]
fn test_life_with_birthdate_saves_and_renders() {
    let db_path = setup_test_db("cli_life_set");

    lg("cli_life_set")
        .args([
            "--db",
            &db_path,
            "--today",
            "2024-09-24",
            "--lifespan",
            "80",
            "life",
            "--birthdate",
            "1991-09-24",
            "--stats-only",
        ])
        .assert()
        .success()
        .stdout(contains("1,722"))
        .stdout(contains("2,438 of 4,160"));

    lg("cli_life_set")
        .args(["--db", &db_path, "--today", "2024-09-24", "birthdate"])
        .assert()
        .success()
        .stdout(contains("Birthdate: 1991-09-24"));

    // stored birthdate is picked up, default 90-year horizon
    lg("cli_life_set")
        .args(["--db", &db_path, "--today", "2024-09-24", "--ascii", "life"])
        .assert()
        .success()
        .stdout(contains("90 years × 52 weeks"))
        .stdout(contains("2,958 of 4,680"));
}

#[test]
fn test_future_birthdate_rejected_and_previous_kept() {
    let db_path = setup_test_db("cli_future");

    lg("cli_future")
        .args(["--db", &db_path, "--today", "2024-01-01", "birthdate", "2000-03-15"])
        .assert()
        .success()
        .stdout(contains("Birthdate saved: 2000-03-15"));

    lg("cli_future")
        .args(["--db", &db_path, "--today", "2024-01-01", "birthdate", "2030-01-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid input"));

    lg("cli_future")
        .args(["--db", &db_path, "--today", "2024-01-01", "birthdate", "2000-13-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid input"));

    lg("cli_future")
        .args(["--db", &db_path, "--today", "2024-01-01", "birthdate"])
        .assert()
        .success()
        .stdout(contains("Birthdate: 2000-03-15"));
}

#[test]
fn test_clear_birthdate() {
    let db_path = setup_test_db("cli_clear");

    lg("cli_clear")
        .args(["--db", &db_path, "birthdate", "1980-05-17"])
        .assert()
        .success();

    lg("cli_clear")
        .args(["--db", &db_path, "birthdate", "--clear"])
        .assert()
        .success()
        .stdout(contains("removed"));

    lg("cli_clear")
        .args(["--db", &db_path, "birthdate"])
        .assert()
        .success()
        .stdout(contains("No birthdate configured"));
}

#[test]
fn test_cell_description() {
    lg("cli_cell_year")
        .args(["--today", "2024-01-01", "cell", "--view", "year", "--index", "0"])
        .assert()
        .success()
        .stdout(contains("Jan 1"))
        .stdout(contains("Today"));

    let db_path = setup_test_db("cli_cell_life");
    lg("cli_cell_life")
        .args(["--db", &db_path, "--today", "2024-09-24", "birthdate", "1991-09-24"])
        .assert()
        .success();

    lg("cli_cell_life")
        .args(["--db", &db_path, "--today", "2024-09-24", "cell", "--index", "1722"])
        .assert()
        .success()
        .stdout(contains("Year 34, Week 7"))
        .stdout(contains("Now"));

    lg("cli_cell_life")
        .args(["--db", &db_path, "--today", "2024-09-24", "cell", "--index", "100000"])
        .assert()
        .failure()
        .stderr(contains("out of range"));
}

#[test]
fn test_invalid_reference_date() {
    lg("cli_bad_today")
        .args(["--today", "2024-02-30", "year"])
        .assert()
        .failure()
        .stderr(contains("Error: Invalid date format"));
}

#[test]
fn test_export_and_log() {
    let db_path = setup_test_db("cli_export");
    let out = temp_out("cli_export", "json");

    lg("cli_export")
        .args(["--db", &db_path, "--today", "2024-09-24", "birthdate", "1991-09-24"])
        .assert()
        .success();

    lg("cli_export")
        .args([
            "--db",
            &db_path,
            "--today",
            "2024-09-24",
            "--lifespan",
            "80",
            "export",
            "--view",
            "life",
            "--format",
            "json",
            "--file",
            &out,
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"units_total\": 4160"));

    lg("cli_export")
        .args(["--db", &db_path, "--no-color", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("birthdate"))
        .stdout(contains("export"));
}

#[test]
fn test_show_uses_requested_view() {
    lg("cli_show")
        .args(["--today", "2024-06-15", "show", "--view", "year", "--stats-only"])
        .assert()
        .success()
        .stdout(contains("Year complete"));
}

#[test]
fn test_life_birthdate_not_saved_when_grid_fails() {
    let db_path = setup_test_db("cli_life_keep");

    lg("cli_life_keep")
        .args(["--db", &db_path, "--today", "2024-01-01", "birthdate", "1990-01-01"])
        .assert()
        .success();

    lg("cli_life_keep")
        .args([
            "--db",
            &db_path,
            "--today",
            "2024-01-01",
            "--lifespan",
            "0",
            "life",
            "--birthdate",
            "1985-05-05",
        ])
        .assert()
        .failure()
        .stderr(contains("life horizon must be positive"));

    lg("cli_life_keep")
        .args([
            "--db",
            &db_path,
            "--today",
            "2024-01-01",
            "--lifespan",
            "4294967295",
            "--weeks-per-year",
            "1",
            "life",
            "--birthdate",
            "2000-01-01",
        ])
        .assert()
        .code(1)
        .stderr(contains("too large"));

    lg("cli_life_keep")
        .args(["--db", &db_path, "--today", "2024-01-01", "birthdate"])
        .assert()
        .success()
        .stdout(contains("Birthdate: 1990-01-01"));
}

#[test]
fn test_life_shows_age_breakdown_for_end_of_month_birthdate() {
    let db_path = setup_test_db("cli_life_age");

    lg("cli_life_age")
        .args([
            "--db",
            &db_path,
            "--today",
            "2023-03-01",
            "life",
            "--birthdate",
            "1990-03-31",
            "--stats-only",
        ])
        .assert()
        .success()
        .stdout(contains("32 (32 years, 11 months, 0 days)"))
        .stdout(contains(", -").not());
}
