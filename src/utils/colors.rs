/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Net-minutes color:
/// \>0 → green
/// 0 → grey
pub fn color_for_net(value: i64) -> &'static str {
    if value > 0 { GREEN } else { GREY }
}

/// Presence-status color for the `today` header.
pub fn color_for_status(status: &str) -> &'static str {
    match status {
        "online" => GREEN,
        "break" => YELLOW,
        _ => GREY,
    }
}

/// Returns a grey rendering for empty placeholder values ("--:--" etc.),
/// and the value untouched otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" || value.trim() == "00h 00m" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
