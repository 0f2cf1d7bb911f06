use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// Calendar-day timestamp extracted from the raw date strings carried by user
/// profiles (`"YYYY-MM-DD"`, optionally followed by a time-of-day and a
/// `"UTC"` suffix).
///
/// All event ordering in the attribution story happens at day granularity, so
/// the time portion is parsed away rather than preserved. Anything that does
/// not start with a valid `YYYY-MM-DD` day yields `None` from [`EventDate::parse`];
/// callers decide whether to omit, fall back to the raw string, or sort last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventDate(NaiveDate);

impl EventDate {
    /// Parse a raw profile date string into a calendar day.
    ///
    /// Accepted shapes (the time and `UTC` suffix are ignored):
    /// - `2025-11-05`
    /// - `2025-11-05 08:14:52`
    /// - `2025-11-05 08:14:52.123 UTC`
    pub fn parse(raw: &str) -> Option<Self> {
        let day = raw.trim().split_whitespace().next()?;
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok().map(EventDate)
    }

    pub fn day(&self) -> NaiveDate {
        self.0
    }

    /// Render in the dashboard's short form, e.g. `"Nov 5, 2025"`.
    pub fn display(&self) -> String {
        self.0.format("%b %-d, %Y").to_string()
    }
}

impl Serialize for EventDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display())
    }
}

/// Display form when the raw string parses, the raw string untouched when it
/// does not. This is the tolerance rule for malformed dates inside narrative
/// content: never an error, never a dropped line.
pub fn display_or_raw(raw: &str) -> String {
    match EventDate::parse(raw) {
        Some(date) => date.display(),
        None => raw.to_string(),
    }
}
