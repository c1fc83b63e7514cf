use lifegrid::core::calculator::calendar::{days_between, days_in_month, is_leap_year};
use lifegrid::core::calculator::{classify_cell, compute_year_grid};
use lifegrid::models::cell::CellState;

mod common;
use common::ymd;

#[test]
fn test_leap_year_rules() {
    assert!(is_leap_year(2024));
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2023));
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2023, 2), 28);
    assert_eq!(days_in_month(2023, 4), 30);
}

#[test]
fn test_days_total_follows_leap_year() {
    let leap = compute_year_grid(ymd(2024, 6, 15));
    assert_eq!(leap.days_total, 366);
    assert_eq!(leap.cells.len(), 366);

    let common = compute_year_grid(ymd(2023, 6, 15));
    assert_eq!(common.days_total, 365);
    assert_eq!(common.cells.len(), 365);
}

#[test]
fn test_mid_year_counts() {
    let grid = compute_year_grid(ymd(2024, 6, 15));
    assert_eq!(grid.year, 2024);
    assert_eq!(grid.days_elapsed, 166);
    assert_eq!(grid.days_left, 199);
    assert_eq!(grid.cells[165].state, CellState::Past);
    assert_eq!(grid.cells[166].state, CellState::Current);
    assert_eq!(grid.cells[167].state, CellState::Future);
}

#[test]
fn test_days_elapsed_is_calendar_distance_from_jan_first() {
    for reference in [ymd(2024, 3, 10), ymd(2024, 11, 3), ymd(2023, 12, 31)] {
        let grid = compute_year_grid(reference);
        let jan_first = ymd(grid.year, 1, 1);
        assert_eq!(
            i64::from(grid.days_elapsed),
            days_between(jan_first, reference)
        );
    }
}

#[test]
fn test_jan_first_has_only_first_cell_current() {
    let grid = compute_year_grid(ymd(2023, 1, 1));
    assert_eq!(grid.days_elapsed, 0);
    assert_eq!(grid.days_left, 364);
    assert_eq!(grid.cells[0].state, CellState::Current);
    assert!(grid.cells[1..].iter().all(|c| c.state == CellState::Future));
}

#[test]
fn test_dec_31_of_leap_year() {
    let grid = compute_year_grid(ymd(2024, 12, 31));
    assert_eq!(grid.days_elapsed, 365);
    assert_eq!(grid.days_left, 0);
    assert_eq!(grid.cells[365].state, CellState::Current);
    assert_eq!(grid.stats().percent_complete, 100.0);
}

#[test]
fn test_exactly_one_current_cell() {
    let mut d = ymd(2023, 1, 1);
    while d <= ymd(2023, 12, 31) {
        let grid = compute_year_grid(d);
        let current = grid.cells.iter().filter(|c| c.state.is_current()).count();
        assert_eq!(current, 1, "{d}");
        d = d.succ_opt().expect("next day");
    }
}

#[test]
fn test_year_stats_counts_today_as_passed() {
    let stats = compute_year_grid(ymd(2024, 6, 15)).stats();
    assert_eq!(stats.units_elapsed, 166);
    assert_eq!(stats.units_total, 366);
    assert!((stats.percent_complete - 167.0 / 366.0 * 100.0).abs() < 1e-9);
    assert_eq!(stats.age_years, None);
}

#[test]
fn test_date_of_cell() {
    let grid = compute_year_grid(ymd(2023, 5, 1));
    assert_eq!(grid.date_of(0), Some(ymd(2023, 1, 1)));
    assert_eq!(grid.date_of(364), Some(ymd(2023, 12, 31)));
    assert_eq!(grid.date_of(365), None);
}

#[test]
fn test_classify_cell_policy() {
    assert_eq!(classify_cell(0, 3), CellState::Past);
    assert_eq!(classify_cell(2, 3), CellState::Past);
    assert_eq!(classify_cell(3, 3), CellState::Current);
    assert_eq!(classify_cell(4, 3), CellState::Future);
    assert_eq!(classify_cell(0, 0), CellState::Current);
}

#[test]
fn test_year_grid_is_deterministic() {
    let a = compute_year_grid(ymd(2024, 2, 29));
    let b = compute_year_grid(ymd(2024, 2, 29));
    assert_eq!(a, b);
}

#[test]
fn test_day_count_ignores_daylight_saving_changes() {
    // spring forward / fall back weekends in most northern-hemisphere zones
    assert_eq!(days_between(ymd(2024, 3, 9), ymd(2024, 3, 11)), 2);
    assert_eq!(days_between(ymd(2024, 3, 30), ymd(2024, 4, 1)), 2);
    assert_eq!(days_between(ymd(2024, 10, 26), ymd(2024, 10, 28)), 2);
    assert_eq!(days_between(ymd(2024, 11, 2), ymd(2024, 11, 4)), 2);
}
