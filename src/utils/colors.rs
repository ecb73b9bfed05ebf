//! ANSI color helper utilities for terminal output.
use crate::core::calculator::ExtraDuration;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Overtime color:
/// N/A → grey
/// \>0 → green
/// 0 → reset
pub fn color_for_extra(value: &ExtraDuration) -> &'static str {
    match value {
        ExtraDuration::NotApplicable => GREY,
        ExtraDuration::Minutes(m) if *m > 0 => GREEN,
        ExtraDuration::Minutes(_) => RESET,
    }
}

/// Grey out placeholders ("--", "N/A"), leave real values untouched.
pub fn colorize_optional(value: &str) -> String {
    match value.trim() {
        "" | "--" | "N/A" => format!("{GREY}{value}{RESET}"),
        _ => value.to_string(),
    }
}

/// Entry in green, exit in red.
pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    if value.trim() == "--" {
        return colorize_optional(value);
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}
