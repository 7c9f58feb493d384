//! Day scoring and best-day selection.

use chrono::Weekday;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::day::day_label;
use crate::matching::GroupMatches;
use crate::overlap::OverlapWindow;

/// Total matched hours for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayScore {
    pub day: Weekday,
    pub hours: u32,
}

impl Serialize for DayScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("DayScore", 2)?;
        s.serialize_field("day", day_label(self.day))?;
        s.serialize_field("hours", &self.hours)?;
        s.end()
    }
}

/// Sum of `end - start` over `windows`.
pub fn day_score(windows: &[OverlapWindow<'_>]) -> u32 {
    windows.iter().map(OverlapWindow::hours).sum()
}

/// The day with the most matched hours.
///
/// Days are scanned in canonical order and only a strictly greater score
/// replaces the current best, so a tie keeps the earlier day.
pub fn best_day(matches: &GroupMatches<'_>) -> Option<DayScore> {
    let mut best: Option<DayScore> = None;
    for score in matches.scores() {
        match best {
            Some(current) if score.hours <= current.hours => {}
            _ => best = Some(score),
        }
    }
    best
}
