//! Quorum filtering across the canonical week.
//!
//! Each canonical day is solved on its own with
//! [`compute_day_overlaps`](crate::overlap::compute_day_overlaps); windows
//! with fewer participants than the quorum are dropped, and days left with
//! nothing are omitted. Results always come back in canonical day order,
//! which is what keeps best-day tie-breaking deterministic.

use chrono::Weekday;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use crate::day::{day_label, DAYS};
use crate::overlap::{compute_day_overlaps, OverlapWindow};
use crate::roster::Roster;
use crate::scoring::{self, DayScore};

/// Group size used when the caller does not choose one.
pub const DEFAULT_QUORUM: usize = 4;

/// Configuration for [`match_groups_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Minimum number of participants a window needs to qualify.
    /// Zero keeps every non-empty window.
    pub quorum: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            quorum: DEFAULT_QUORUM,
        }
    }
}

/// Qualifying windows for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayMatches<'a> {
    pub day: Weekday,
    pub windows: Vec<OverlapWindow<'a>>,
}

impl DayMatches<'_> {
    /// Total matched hours on this day.
    pub fn score(&self) -> u32 {
        scoring::day_score(&self.windows)
    }
}

impl Serialize for DayMatches<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("DayMatches", 3)?;
        s.serialize_field("day", day_label(self.day))?;
        s.serialize_field("score", &self.score())?;
        s.serialize_field("windows", &self.windows)?;
        s.end()
    }
}

/// Days with at least one qualifying window, in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroupMatches<'a> {
    days: Vec<DayMatches<'a>>,
}

impl<'a> GroupMatches<'a> {
    /// Windows for `day`, or `None` if the day had no qualifying window.
    pub fn get(&self, day: Weekday) -> Option<&[OverlapWindow<'a>]> {
        self.days
            .iter()
            .find(|m| m.day == day)
            .map(|m| m.windows.as_slice())
    }

    pub fn contains_day(&self, day: Weekday) -> bool {
        self.get(day).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayMatches<'a>> {
        self.days.iter()
    }

    /// Qualifying days in canonical order.
    pub fn days(&self) -> Vec<Weekday> {
        self.days.iter().map(|m| m.day).collect()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Per-day scores, in canonical order.
    pub fn scores(&self) -> Vec<DayScore> {
        self.days
            .iter()
            .map(|m| DayScore {
                day: m.day,
                hours: m.score(),
            })
            .collect()
    }

    /// The highest-scoring day; ties go to the canonically earlier day.
    pub fn best_day(&self) -> Option<DayScore> {
        scoring::best_day(self)
    }
}

impl<'a, 'g> IntoIterator for &'g GroupMatches<'a> {
    type Item = &'g DayMatches<'a>;
    type IntoIter = std::slice::Iter<'g, DayMatches<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

impl<'a> IntoIterator for GroupMatches<'a> {
    type Item = DayMatches<'a>;
    type IntoIter = std::vec::IntoIter<DayMatches<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.into_iter()
    }
}

/// Qualifying windows for a single day, or `None` if none qualify.
fn match_day(day: Weekday, roster: &Roster, quorum: usize) -> Option<DayMatches<'_>> {
    let windows: Vec<OverlapWindow<'_>> = compute_day_overlaps(day, roster)
        .into_iter()
        .filter(|w| w.len() >= quorum)
        .collect();

    if windows.is_empty() {
        None
    } else {
        Some(DayMatches { day, windows })
    }
}

#[cfg(not(feature = "parallel"))]
fn match_all_days(roster: &Roster, quorum: usize) -> Vec<DayMatches<'_>> {
    DAYS.iter()
        .filter_map(|&day| match_day(day, roster, quorum))
        .collect()
}

// Indexed parallel iterators collect in input order, so canonical order holds.
#[cfg(feature = "parallel")]
fn match_all_days(roster: &Roster, quorum: usize) -> Vec<DayMatches<'_>> {
    use rayon::prelude::*;

    let per_day: Vec<Option<DayMatches<'_>>> = DAYS
        .par_iter()
        .map(|&day| match_day(day, roster, quorum))
        .collect();
    per_day.into_iter().flatten().collect()
}

/// For each canonical day, the overlap windows with at least `quorum`
/// participants. Days without a qualifying window are left out entirely.
///
/// A quorum above the roster size simply matches nothing.
pub fn match_groups(roster: &Roster, quorum: usize) -> GroupMatches<'_> {
    let days = match_all_days(roster, quorum);
    debug!(
        participants = roster.len(),
        quorum,
        matched_days = days.len(),
        "matched groups"
    );
    GroupMatches { days }
}

/// [`match_groups`] driven by a [`MatchConfig`].
pub fn match_groups_with<'a>(roster: &'a Roster, config: &MatchConfig) -> GroupMatches<'a> {
    match_groups(roster, config.quorum)
}
