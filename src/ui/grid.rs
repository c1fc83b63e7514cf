//! Terminal rendering of the life and year grids.
//!
//! Everything here returns `String`s so the output can be printed, piped or
//! asserted on in tests; the cell states themselves come from
//! `core::calculator` and are never recomputed here.

use crate::core::calculator::calendar::days_in_month;
use crate::core::calculator::{LifeGrid, YearGrid};
use crate::models::cell::{CellState, GridCell};
use crate::models::stats::Stats;
use crate::utils::colors::{color_for_state, paint};
use crate::utils::date::MONTH_NAMES;
use crate::utils::formatting::{format_percent, pad_left, pad_right, progress_bar, thousands};
use unicode_width::UnicodeWidthStr;

const DAY_SLOTS: usize = 31;
const STATS_LABEL_WIDTH: usize = 14;
const BAR_WIDTH: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub past: &'static str,
    pub current: &'static str,
    pub future: &'static str,
    pub empty: &'static str,
}

impl Glyphs {
    pub const BLOCKS: Glyphs = Glyphs {
        past: "■",
        current: "◆",
        future: "□",
        empty: " ",
    };

    pub const ASCII: Glyphs = Glyphs {
        past: "#",
        current: "@",
        future: ".",
        empty: " ",
    };

    pub fn for_state(&self, state: CellState) -> &'static str {
        match state {
            CellState::Past => self.past,
            CellState::Current => self.current,
            CellState::Future => self.future,
        }
    }

    /// Terminal columns taken by one cell.
    fn cell_width(&self) -> usize {
        [self.past, self.current, self.future, self.empty]
            .iter()
            .map(|g| UnicodeWidthStr::width(*g))
            .max()
            .unwrap_or(1)
            .max(1)
    }

    /// Pad `glyph` to the common cell width.
    fn fit(&self, glyph: &str) -> String {
        let pad = self.cell_width().saturating_sub(UnicodeWidthStr::width(glyph));
        format!("{glyph}{}", " ".repeat(pad))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub color: bool,
    pub glyphs: Glyphs,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: true,
            glyphs: Glyphs::BLOCKS,
        }
    }
}

fn paint_cell(cell: &GridCell, opts: &RenderOptions) -> String {
    let glyph = opts.glyphs.fit(opts.glyphs.for_state(cell.state));
    paint(&glyph, color_for_state(cell.state), opts.color)
}

/// Column ruler: "1" over the first cell, then every multiple of `step`
/// right-aligned over its column.
fn ruler(columns: usize, step: usize, cell_width: usize) -> String {
    let mut chars = vec![' '; columns * cell_width];

    let mut place = |n: usize| {
        let label = n.to_string();
        let end = (n - 1) * cell_width + 1;
        if end < label.len() {
            return;
        }
        let start = end - label.len();
        for (i, ch) in label.chars().enumerate() {
            if let Some(slot) = chars.get_mut(start + i) {
                *slot = ch;
            }
        }
    };

    place(1);
    let mut n = step;
    while n <= columns {
        place(n);
        n += step;
    }

    chars.into_iter().collect::<String>().trim_end().to_string()
}

fn legend(opts: &RenderOptions, labels: [&str; 3]) -> String {
    [CellState::Past, CellState::Current, CellState::Future]
        .iter()
        .zip(labels)
        .map(|(state, label)| {
            let glyph = paint(
                opts.glyphs.for_state(*state),
                color_for_state(*state),
                opts.color,
            );
            format!("{glyph} {label}")
        })
        .collect::<Vec<_>>()
        .join("   ")
}

/// One row per year of life, `weeks_per_year` cells wide, with a label on
/// every decade row.
pub fn render_life_grid(grid: &LifeGrid, opts: &RenderOptions) -> String {
    let per_row = (grid.horizon.weeks_per_year as usize).max(1);
    let label_width = grid.horizon.lifespan_years.to_string().len().max(2);
    let cell_width = opts.glyphs.cell_width();

    let mut out = String::new();
    out.push_str(&" ".repeat(label_width + 1));
    out.push_str(&ruler(per_row, 10, cell_width));
    out.push('\n');

    for (row, chunk) in grid.cells.chunks(per_row).enumerate() {
        let label = if row % 10 == 0 {
            row.to_string()
        } else {
            String::new()
        };
        out.push_str(&pad_left(&label, label_width));
        out.push(' ');
        for cell in chunk {
            out.push_str(&paint_cell(cell, opts));
        }
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&legend(opts, ["lived", "now", "future"]));
    out.push('\n');
    out
}

/// Twelve month rows of 31 slots; slots past the month's length stay blank.
pub fn render_year_grid(grid: &YearGrid, opts: &RenderOptions) -> String {
    let cell_width = opts.glyphs.cell_width();
    let empty = opts.glyphs.fit(opts.glyphs.empty);

    let mut out = String::new();
    out.push_str("    ");
    out.push_str(&ruler(DAY_SLOTS, 5, cell_width));
    out.push('\n');

    let mut index = 0usize;
    for (m, name) in MONTH_NAMES.iter().enumerate() {
        let month_days = days_in_month(grid.year, m as u32 + 1) as usize;
        let mut row = pad_right(name, 4);

        for slot in 0..DAY_SLOTS {
            if slot < month_days {
                if let Some(cell) = grid.cells.get(index) {
                    row.push_str(&paint_cell(cell, opts));
                }
                index += 1;
            } else {
                row.push_str(&empty);
            }
        }

        out.push_str(row.trim_end());
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&legend(opts, ["passed", "today", "upcoming"]));
    out.push('\n');
    out
}

fn stat_line(label: &str, value: &str) -> String {
    format!("{} {}\n", pad_right(&format!("{label}:"), STATS_LABEL_WIDTH), value)
}

fn percent_line(stats: &Stats) -> String {
    format!(
        "{} {}",
        format_percent(stats.percent_complete),
        progress_bar(stats.percent_complete, BAR_WIDTH)
    )
}

pub fn render_life_stats(grid: &LifeGrid) -> String {
    let stats = grid.stats();
    let mut out = String::new();
    out.push_str(&stat_line("Born", &grid.birthdate.format("%Y-%m-%d").to_string()));
    out.push_str(&stat_line(
        "Age",
        &format!("{} ({})", grid.age, grid.age_breakdown()),
    ));
    out.push_str(&stat_line(
        "Weeks lived",
        &thousands(u64::from(grid.weeks_elapsed)),
    ));
    out.push_str(&stat_line(
        "Weeks left",
        &format!(
            "{} of {}",
            thousands(u64::from(grid.weeks_left)),
            thousands(u64::from(grid.weeks_total))
        ),
    ));
    out.push_str(&stat_line("Life complete", &percent_line(&stats)));
    out
}

pub fn render_year_stats(grid: &YearGrid) -> String {
    let stats = grid.stats();
    let mut out = String::new();
    out.push_str(&stat_line("Year", &grid.year.to_string()));
    out.push_str(&stat_line(
        "Day",
        &format!("{} of {}", grid.days_elapsed + 1, grid.days_total),
    ));
    out.push_str(&stat_line("Days left", &grid.days_left.to_string()));
    out.push_str(&stat_line("Year complete", &percent_line(&stats)));
    out
}
