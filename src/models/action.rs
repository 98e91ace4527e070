use serde::Serialize;

/// Kind of a time-entry action.
///
/// The wire strings are fixed (`checkin`, `checkout`, `break_start`,
/// `break_end`). Anything else decodes to `Unknown` and is carried through
/// untouched: newer clients may introduce action kinds this version does
/// not understand, and the timeline builder simply skips them.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum Action {
    CheckIn,
    CheckOut,
    BreakStart,
    BreakEnd,
    Unknown(String),
}

impl Action {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &str {
        match self {
            Action::CheckIn => "checkin",
            Action::CheckOut => "checkout",
            Action::BreakStart => "break_start",
            Action::BreakEnd => "break_end",
            Action::Unknown(s) => s.as_str(),
        }
    }

    /// Convert DB string → enum. Never fails: unrecognized kinds survive
    /// as `Unknown` so the row still round-trips.
    pub fn from_db_str(s: &str) -> Self {
        match s {
            "checkin" => Action::CheckIn,
            "checkout" => Action::CheckOut,
            "break_start" => Action::BreakStart,
            "break_end" => Action::BreakEnd,
            other => Action::Unknown(other.to_string()),
        }
    }

    /// Helper: convert input code from CLI. Strict, unlike `from_db_str`:
    /// a typo on the command line is an error, not a forward-compat case.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "in" | "checkin" => Some(Action::CheckIn),
            "out" | "checkout" => Some(Action::CheckOut),
            "break" | "break-start" | "break_start" => Some(Action::BreakStart),
            "resume" | "break-end" | "break_end" => Some(Action::BreakEnd),
            _ => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Action::Unknown(_))
    }
}
