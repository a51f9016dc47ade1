//! User-facing terminal messages (icons + colors).
//! Respects `NO_COLOR`; diagnostics go through `tracing` instead.

use crate::utils::colors::{BLUE, GREEN, RED, RESET, YELLOW, colors_enabled};
use std::fmt;

const BOLD: &str = "\x1b[1m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn styled(color: &str, icon: &str, msg: impl fmt::Display) -> String {
    if colors_enabled() {
        format!("{color}{BOLD}{icon}{RESET} {msg}")
    } else {
        format!("{icon} {msg}")
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", styled(BLUE, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", styled(GREEN, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", styled(YELLOW, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", styled(RED, ICON_ERR, msg));
}

/// Section header, e.g. `=== 2025-03-01 ===`.
pub fn header<T: fmt::Display>(msg: T) {
    if colors_enabled() {
        println!("\n{BLUE}{BOLD}=== {msg} ==={RESET}");
    } else {
        println!("\n=== {msg} ===");
    }
}
