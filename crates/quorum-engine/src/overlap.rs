//! Per-day overlap computation.
//!
//! A day is cut into 24 unit-hour slots. Each slot collects the participants
//! that have a single declared interval fully containing it, and runs of
//! contiguous slots with identical participant sets are merged into windows.
//!
//! Participant identity is roster position, not name: two entries named
//! "Alex" are two people, and two slots only merge when the very same roster
//! entries are present in both.

use chrono::Weekday;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::trace;

use crate::day::day_label;
use crate::roster::{Participant, Roster, HOURS_PER_DAY};

/// A maximal run of hours during which one exact participant set is free.
#[derive(Debug, Clone)]
pub struct OverlapWindow<'a> {
    /// First hour of the window (inclusive).
    pub start: u32,
    /// Hour the window ends at (exclusive).
    pub end: u32,
    /// Free participants, in roster order.
    pub participants: Vec<&'a Participant>,
}

impl OverlapWindow<'_> {
    /// Length of the window in hours.
    pub fn hours(&self) -> u32 {
        self.end - self.start
    }

    /// Number of participants free for the whole window.
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.participants.iter().map(|p| p.name.as_str()).collect()
    }
}

// Windows borrow from the roster, so equality is identity of the borrowed
// participants rather than equality of their contents.
impl PartialEq for OverlapWindow<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.end == other.end
            && self.participants.len() == other.participants.len()
            && self
                .participants
                .iter()
                .zip(&other.participants)
                .all(|(a, b)| std::ptr::eq(*a, *b))
    }
}

impl Eq for OverlapWindow<'_> {}

impl Serialize for OverlapWindow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("OverlapWindow", 3)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.serialize_field("participants", &self.names())?;
        s.end()
    }
}

/// One free slot: the hour it starts at and the roster positions free for it.
struct Slot {
    hour: u32,
    members: Vec<usize>,
}

/// Roster positions free for each non-empty slot of `day`, ascending by hour.
///
/// A participant is listed at most once per slot even when several of their
/// intervals contain it. Intervals are never unioned: two intervals that only
/// together cover a slot do not make the participant free for it.
fn occupied_slots(day: Weekday, participants: &[Participant]) -> Vec<Slot> {
    (0..HOURS_PER_DAY)
        .filter_map(|hour| {
            let members: Vec<usize> = participants
                .iter()
                .enumerate()
                .filter(|(_, p)| p.is_available(day, hour))
                .map(|(i, _)| i)
                .collect();
            (!members.is_empty()).then_some(Slot { hour, members })
        })
        .collect()
}

/// Merge contiguous slots that share an identical member set.
///
/// Returns `(start, end, members)` runs in ascending order.
fn merge_slots(slots: Vec<Slot>) -> Vec<(u32, u32, Vec<usize>)> {
    let mut merged: Vec<(u32, u32, Vec<usize>)> = Vec::new();
    for slot in slots {
        if let Some(last) = merged.last_mut() {
            if last.1 == slot.hour && last.2 == slot.members {
                last.1 = slot.hour + 1;
                continue;
            }
        }
        merged.push((slot.hour, slot.hour + 1, slot.members));
    }
    merged
}

/// Compute every overlap window for `day`, with no quorum applied.
///
/// Windows come back in ascending start order, participants in roster order.
/// A day with no declared intervals yields an empty list. Input intervals are
/// not validated here; an inverted interval simply contains no slot.
pub fn compute_day_overlaps(day: Weekday, roster: &Roster) -> Vec<OverlapWindow<'_>> {
    let participants = roster.all_participants();
    let slots = occupied_slots(day, participants);

    let windows: Vec<OverlapWindow<'_>> = merge_slots(slots)
        .into_iter()
        .map(|(start, end, members)| OverlapWindow {
            start,
            end,
            participants: members.into_iter().map(|i| &participants[i]).collect(),
        })
        .collect();

    trace!(day = day_label(day), windows = windows.len(), "computed day overlaps");
    windows
}
