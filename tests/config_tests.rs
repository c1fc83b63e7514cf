use lifegrid::config::{Config, migrate};
use lifegrid::errors::AppError;
use lifegrid::models::view_mode::ViewMode;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Unique config file path inside the system temp dir, removed first
fn temp_conf(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_lifegrid.conf", name));
    fs::remove_file(&path).ok();
    path
}

#[test]
fn test_missing_file_gives_defaults() {
    let path = temp_conf("cfg_missing");
    let cfg = Config::load_from(&path).expect("defaults");
    assert_eq!(cfg.lifespan_years, 90);
    assert_eq!(cfg.weeks_per_year, 52);
    assert_eq!(cfg.default_view, ViewMode::Life);
    assert_eq!(cfg.default_birthdate, None);
    assert!(cfg.color);
}

#[test]
fn test_partial_file_uses_serde_defaults() {
    let path = temp_conf("cfg_partial");
    fs::write(&path, "lifespan_years: 80\ndefault_view: year\n").expect("write");

    let cfg = Config::load_from(&path).expect("parse");
    assert_eq!(cfg.lifespan_years, 80);
    assert_eq!(cfg.weeks_per_year, 52);
    assert_eq!(cfg.default_view, ViewMode::Year);
    assert_eq!(cfg.horizon().total_weeks().expect("horizon"), 4160);
}

#[test]
fn test_malformed_file_is_an_error() {
    let path = temp_conf("cfg_malformed");
    fs::write(&path, "lifespan_years: [not, a, number\n").expect("write");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_save_then_load() {
    let path = temp_conf("cfg_save");
    let cfg = Config {
        lifespan_years: 85,
        default_birthdate: Some("1991-09-24".into()),
        color: false,
        ..Config::default()
    };

    cfg.save_to(&path).expect("save");
    let back = Config::load_from(&path).expect("load");
    assert_eq!(back, cfg);
}

#[test]
fn test_missing_keys_and_fill() {
    let path = temp_conf("cfg_fill");
    fs::write(&path, "lifespan_years: 80\n").expect("write");

    let missing = migrate::missing_keys(&path).expect("check");
    assert!(missing.contains(&"weeks_per_year".to_string()));
    assert!(missing.contains(&"database".to_string()));
    assert!(missing.contains(&"color".to_string()));
    assert!(!missing.contains(&"lifespan_years".to_string()));

    let added = migrate::fill_missing_keys(&path).expect("fill");
    assert_eq!(added.len(), missing.len());

    // existing value survives, nothing left to add
    let cfg = Config::load_from(&path).expect("load");
    assert_eq!(cfg.lifespan_years, 80);
    assert!(migrate::missing_keys(&path).expect("recheck").is_empty());
    assert!(migrate::fill_missing_keys(&path).expect("refill").is_empty());
}

#[test]
fn test_validate_reports_unusable_values() {
    let cfg = Config {
        lifespan_years: 0,
        weeks_per_year: 0,
        default_birthdate: Some("yesterday".into()),
        ..Config::default()
    };

    let problems = migrate::validate(&cfg);
    assert_eq!(problems.len(), 3);
    assert!(migrate::validate(&Config::default()).is_empty());
}

#[test]
fn test_validate_reports_oversized_horizon() {
    let cfg = Config {
        lifespan_years: u32::MAX,
        weeks_per_year: 1,
        ..Config::default()
    };

    let problems = migrate::validate(&cfg);
    assert_eq!(problems.len(), 1);
    assert!(problems[0].contains("too large"));
}
