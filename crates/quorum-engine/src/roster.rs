//! Participants and the roster that owns them.
//!
//! The roster is a plain insertion-ordered container: it stores participants
//! and hands them back, nothing more. Day-scoped computation lives in
//! [`crate::overlap`] and borrows participants from here.

use std::collections::BTreeMap;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::day::day_label;
use crate::error::{QuorumError, Result};

/// Last hour boundary of a day; an interval may end here.
pub const HOURS_PER_DAY: u32 = 24;

/// Half-open hour range `[start, end)` on a 24-hour clock.
///
/// Serialized as a two-element array, e.g. `[18, 22]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HourRange(pub u32, pub u32);

impl HourRange {
    pub fn new(start: u32, end: u32) -> Self {
        HourRange(start, end)
    }

    pub fn start(self) -> u32 {
        self.0
    }

    pub fn end(self) -> u32 {
        self.1
    }

    /// Whether the whole unit slot `[hour, hour + 1)` lies inside this range.
    ///
    /// Partial coverage does not count. An inverted range contains no slot.
    pub fn contains_slot(self, hour: u32) -> bool {
        self.0 <= hour && self.1 > hour
    }

    /// `0 <= start < end <= 24`.
    pub fn is_well_formed(self) -> bool {
        self.0 < self.1 && self.1 <= HOURS_PER_DAY
    }
}

/// A person with a weekly availability calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name. Not required to be unique.
    pub name: String,
    /// Opaque zone label, carried for the caller and never interpreted.
    #[serde(rename = "timeZone", alias = "time_zone", default)]
    pub time_zone: String,
    /// Day label → declared free intervals, in declaration order.
    #[serde(default)]
    pub availability: BTreeMap<String, Vec<HourRange>>,
}

impl Participant {
    pub fn new(name: impl Into<String>, time_zone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            time_zone: time_zone.into(),
            availability: BTreeMap::new(),
        }
    }

    /// Append intervals under `label`. The label is stored verbatim, so a
    /// non-canonical label is kept but never matched by day queries.
    pub fn with_day(mut self, label: impl Into<String>, ranges: &[(u32, u32)]) -> Self {
        self.availability
            .entry(label.into())
            .or_default()
            .extend(ranges.iter().map(|&(s, e)| HourRange(s, e)));
        self
    }

    /// Intervals declared for a canonical day (empty if none).
    pub fn intervals_on(&self, day: Weekday) -> &[HourRange] {
        self.availability
            .get(day_label(day))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether a single declared interval on `day` fully contains slot `hour`.
    pub fn is_available(&self, day: Weekday, hour: u32) -> bool {
        self.intervals_on(day).iter().any(|r| r.contains_slot(hour))
    }

    /// Check every declared interval, under any label, for `0 <= start < end <= 24`.
    ///
    /// # Errors
    /// Returns `QuorumError::InvalidInterval` for the first offending interval.
    pub fn validate(&self) -> Result<()> {
        for (label, ranges) in &self.availability {
            if let Some(bad) = ranges.iter().find(|r| !r.is_well_formed()) {
                return Err(QuorumError::InvalidInterval {
                    participant: self.name.clone(),
                    day: label.clone(),
                    start: bad.start(),
                    end: bad.end(),
                });
            }
        }
        Ok(())
    }
}

/// Insertion-ordered participant roster.
///
/// Participants are only ever appended; a repeated name is a distinct entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_participant(&mut self, participant: Participant) {
        self.participants.push(participant);
    }

    /// All participants, in insertion order.
    pub fn all_participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Validate every participant's intervals.
    ///
    /// Computation never calls this; it is the opt-in hardened path for
    /// rosters built in-process. Loaders always apply it.
    pub fn validate(&self) -> Result<()> {
        self.participants.iter().try_for_each(Participant::validate)
    }

    /// Parse a JSON array of participants and validate it.
    ///
    /// # Errors
    /// `QuorumError::Json` for malformed JSON, `QuorumError::InvalidInterval`
    /// for an interval outside `0 <= start < end <= 24`.
    pub fn from_json(json: &str) -> Result<Self> {
        let roster: Roster = serde_json::from_str(json)?;
        roster.validate()?;
        debug!(participants = roster.len(), "loaded roster");
        Ok(roster)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FromIterator<Participant> for Roster {
    fn from_iter<I: IntoIterator<Item = Participant>>(iter: I) -> Self {
        Self {
            participants: iter.into_iter().collect(),
        }
    }
}

impl Extend<Participant> for Roster {
    fn extend<I: IntoIterator<Item = Participant>>(&mut self, iter: I) {
        self.participants.extend(iter);
    }
}
