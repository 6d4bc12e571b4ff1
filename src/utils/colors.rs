//! ANSI color helper utilities for terminal output.

use crate::models::cell::CellCategory;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

// Background blocks for grid cells
pub const BG_BLUE: &str = "\x1b[44;97m";
pub const BG_GREEN: &str = "\x1b[42;97m";
pub const BG_ORANGE: &str = "\x1b[48;5;208;97m";
pub const BG_RED: &str = "\x1b[48;5;217;30m";
pub const BG_PURPLE: &str = "\x1b[48;5;183;30m";
pub const BG_GREY: &str = "\x1b[48;5;252;30m";

/// Vacation → blue, overtime → green, sick → orange, public holiday → red,
/// school holiday → purple, weekend → grey.
pub fn color_for_category(category: CellCategory) -> &'static str {
    match category {
        CellCategory::Vacation => BG_BLUE,
        CellCategory::Overtime => BG_GREEN,
        CellCategory::Sick => BG_ORANGE,
        CellCategory::PublicHoliday => BG_RED,
        CellCategory::SchoolHoliday => BG_PURPLE,
        CellCategory::Weekend => BG_GREY,
        CellCategory::Plain => RESET,
    }
}

pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}
