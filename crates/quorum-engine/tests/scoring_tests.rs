//! Tests for day scoring and best-day selection.

use chrono::Weekday;
use quorum_engine::{best_day, day_score, match_groups, DayScore, Participant, Roster};

fn person(name: &str, days: &[(&str, &[(u32, u32)])]) -> Participant {
    days.iter()
        .fold(Participant::new(name, "UTC"), |p, (day, ranges)| {
            p.with_day(*day, ranges)
        })
}

fn roster(participants: Vec<Participant>) -> Roster {
    participants.into_iter().collect()
}

#[test]
fn score_sums_window_lengths() {
    let r = roster(vec![
        person("p1", &[("Mon", &[(8, 10), (12, 15)])]),
        person("p2", &[("Mon", &[(8, 10), (12, 15)])]),
    ]);

    let matches = match_groups(&r, 2);
    let windows = matches.get(Weekday::Mon).unwrap();

    assert_eq!(day_score(windows), 5);
    assert_eq!(matches.iter().next().unwrap().score(), 5);
}

#[test]
fn score_of_no_windows_is_zero() {
    assert_eq!(day_score(&[]), 0);
}

#[test]
fn highest_score_wins() {
    let r = roster(vec![
        person("p1", &[("Mon", &[(9, 10)]), ("Fri", &[(9, 13)])]),
        person("p2", &[("Mon", &[(9, 10)]), ("Fri", &[(9, 13)])]),
    ]);

    let matches = match_groups(&r, 2);

    assert_eq!(
        best_day(&matches),
        Some(DayScore {
            day: Weekday::Fri,
            hours: 4
        })
    );
}

#[test]
fn tie_goes_to_canonically_earlier_day() {
    // Wed is declared before Tue and both score 3.
    let r = roster(vec![
        person("p1", &[("Wed", &[(1, 4)]), ("Tue", &[(10, 13)])]),
        person("p2", &[("Wed", &[(1, 4)]), ("Tue", &[(10, 13)])]),
    ]);

    let matches = match_groups(&r, 2);

    let best = matches.best_day().unwrap();
    assert_eq!(best.day, Weekday::Tue);
    assert_eq!(best.hours, 3);
}

#[test]
fn tie_across_split_windows_still_prefers_earlier_day() {
    // Mon scores 2 from two one-hour windows, Sun scores 2 from one window.
    let r = roster(vec![
        person("p1", &[("Mon", &[(1, 2), (5, 6)]), ("Sun", &[(7, 9)])]),
        person("p2", &[("Mon", &[(1, 2), (5, 6)]), ("Sun", &[(7, 9)])]),
    ]);

    let matches = match_groups(&r, 2);

    assert_eq!(matches.best_day().unwrap().day, Weekday::Mon);
}

#[test]
fn scores_are_listed_in_canonical_order() {
    let r = roster(vec![person(
        "p1",
        &[("Sat", &[(0, 6)]), ("Tue", &[(0, 1)]), ("Thu", &[(0, 3)])],
    )]);

    let scores = match_groups(&r, 1).scores();

    assert_eq!(
        scores,
        vec![
            DayScore { day: Weekday::Tue, hours: 1 },
            DayScore { day: Weekday::Thu, hours: 3 },
            DayScore { day: Weekday::Sat, hours: 6 },
        ]
    );
}

#[test]
fn no_matches_means_no_best_day() {
    let r = roster(vec![person("p1", &[("Mon", &[(9, 17)])])]);

    assert_eq!(match_groups(&r, 2).best_day(), None);
}

#[test]
fn day_score_serializes_with_label() {
    let score = DayScore {
        day: Weekday::Sat,
        hours: 6,
    };

    assert_eq!(
        serde_json::to_value(score).unwrap(),
        serde_json::json!({ "day": "Sat", "hours": 6 })
    );
}
