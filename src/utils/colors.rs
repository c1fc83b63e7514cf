/// ANSI color helper utilities for terminal output.
use crate::models::cell::CellState;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const BOLD_YELLOW: &str = "\x1b[1;33m";

/// Cell colour:
/// past → green
/// current → yellow (bold)
/// future → grey
pub fn color_for_state(state: CellState) -> &'static str {
    match state {
        CellState::Past => GREEN,
        CellState::Current => BOLD_YELLOW,
        CellState::Future => GREY,
    }
}

/// Wrap `value` in `color` when colours are enabled.
pub fn paint(value: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}
