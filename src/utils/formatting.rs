//! Formatting utilities used for CLI and export outputs.

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        // e.g. 07:30
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // e.g. 07h 30m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Human label and ANSI color for a work-mode tag.
/// Unknown tags pass through untouched: the tag is free-form by contract.
pub fn describe_work_mode(tag: &str) -> (String, &'static str) {
    match tag.to_lowercase().as_str() {
        "office" => ("Office".into(), "\x1b[34m"),
        "wfh" => ("Work From Home".into(), "\x1b[36m"),
        "field" => ("Field work".into(), "\x1b[33m"),
        "meeting" => ("Client meeting".into(), "\x1b[35m"),
        _ => (tag.to_string(), "\x1b[0m"),
    }
}
