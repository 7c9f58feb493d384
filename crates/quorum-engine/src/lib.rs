//! # quorum-engine
//!
//! Finds the hours of the week when enough people are free at once.
//!
//! Each participant declares, per day, a list of half-open hour ranges
//! `[start, end)`. The engine cuts every day into 24 unit-hour slots, records
//! who is fully free in each slot, and merges runs of contiguous slots with
//! the same people into windows. Windows below a quorum are discarded and
//! the remaining hours are summed per day to pick a best day.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::Weekday;
//! use quorum_engine::{match_groups, Participant, Roster};
//!
//! let mut roster = Roster::new();
//! roster.add_participant(Participant::new("Ana", "UTC").with_day("Mon", &[(18, 20)]));
//! roster.add_participant(Participant::new("Bo", "UTC-5").with_day("Mon", &[(19, 21)]));
//!
//! let matches = match_groups(&roster, 2);
//! let monday = matches.get(Weekday::Mon).unwrap();
//! assert_eq!((monday[0].start, monday[0].end), (19, 20));
//! assert_eq!(monday[0].names(), ["Ana", "Bo"]);
//! assert_eq!(matches.best_day().unwrap().day, Weekday::Mon);
//! ```
//!
//! ## Modules
//!
//! - [`roster`] - participants, hour ranges, and the insertion-ordered roster
//! - [`overlap`] - per-day slot discretization and window merging
//! - [`matching`] - quorum filtering across the canonical week
//! - [`scoring`] - per-day scores and best-day selection
//! - [`day`] - canonical day labels and order
//! - [`error`] - Error types

pub mod day;
pub mod error;
pub mod matching;
pub mod overlap;
pub mod roster;
pub mod scoring;

pub use day::{day_label, parse_day, DAYS};
pub use error::QuorumError;
pub use matching::{
    match_groups, match_groups_with, DayMatches, GroupMatches, MatchConfig, DEFAULT_QUORUM,
};
pub use overlap::{compute_day_overlaps, OverlapWindow};
pub use roster::{HourRange, Participant, Roster};
pub use scoring::{best_day, day_score, DayScore};
