/// ANSI color helper utilities for terminal output.
use std::sync::OnceLock;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// False when `NO_COLOR` is set.
pub fn colors_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| std::env::var_os("NO_COLOR").is_none())
}

/// Wrap `text` in `color` unless colors are disabled.
pub fn paint(color: &str, text: &str) -> String {
    if colors_enabled() {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Sugar color against the daily limit:
/// over the limit → red
/// at 80% or more → yellow
/// otherwise → green
pub fn color_for_sugar(consumed: f64, limit: f64) -> &'static str {
    if consumed > limit {
        RED
    } else if limit > 0.0 && consumed >= limit * 0.8 {
        YELLOW
    } else {
        GREEN
    }
}

/// Grey out zero amounts so the non-zero ones stand out.
pub fn colorize_amount(value: &str) -> String {
    if value.trim() == "0" {
        paint(GREY, value)
    } else {
        value.to_string()
    }
}
