//! Canonical day vocabulary.
//!
//! Availability maps are keyed by three-letter labels. Only the seven labels
//! produced by [`day_label`] are recognized by day-scoped queries; any other
//! key is carried along but never matched.

use chrono::Weekday;

use crate::error::{QuorumError, Result};

/// Canonical day order, used for iteration and for best-day tie-breaking.
pub const DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// The availability-map key for a canonical day (`"Mon"` .. `"Sun"`).
pub fn day_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Parse a canonical three-letter label, ignoring ASCII case.
///
/// Full names such as `"Monday"` are rejected: availability maps only ever
/// use the short form, so accepting more here would let a query name a day
/// that no roster can contain.
pub fn parse_day(label: &str) -> Result<Weekday> {
    DAYS.iter()
        .copied()
        .find(|d| day_label(*d).eq_ignore_ascii_case(label.trim()))
        .ok_or_else(|| QuorumError::UnknownDay(label.to_string()))
}
