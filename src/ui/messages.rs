use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";

fn styled<T: fmt::Display>(color: &str, icon: &str, msg: T) -> String {
    format!("{color}{BOLD}{icon}{RESET} {msg}")
}

pub fn info_text<T: fmt::Display>(msg: T) -> String {
    styled(FG_BLUE, ICON_INFO, msg)
}

pub fn warning_text<T: fmt::Display>(msg: T) -> String {
    styled(FG_YELLOW, ICON_WARN, msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", info_text(msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", styled(FG_GREEN, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", warning_text(msg));
}

/// Section title, e.g. above each report block.
pub fn header_text<T: fmt::Display>(msg: T) -> String {
    format!("{FG_BLUE}{BOLD}=== {msg}{RESET}")
}
