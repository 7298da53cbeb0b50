use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::models::{Problem, StreakStatus, StreakSummary};

/// Current consecutive-day completion streak plus the most recent activity
/// date. Pure function of the record snapshot; `today` is injected so the
/// result never depends on the wall clock.
///
/// Multiple completions on the same calendar day count once. A lapsed
/// streak (most recent completion older than yesterday) reports 1, not 0:
/// the single day of activity on record.
pub fn calculate_streak(problems: &[Problem], today: NaiveDate) -> StreakSummary {
    let days: BTreeSet<NaiveDate> = problems
        .iter()
        .filter(|p| p.completed)
        .filter_map(|p| p.completed_day())
        .collect();

    let Some(&most_recent) = days.iter().next_back() else {
        return StreakSummary {
            streak: 0,
            last_date: None,
        };
    };

    if (today - most_recent).num_days() > 1 {
        return StreakSummary {
            streak: 1,
            last_date: Some(most_recent),
        };
    }

    // Walk backwards from the most recent day; the first gap ends the count.
    let mut streak = 1u32;
    let mut cursor = most_recent;
    for &day in days.iter().rev().skip(1) {
        if (cursor - day).num_days() == 1 {
            streak += 1;
            cursor = day;
        } else {
            break;
        }
    }

    StreakSummary {
        streak,
        last_date: Some(most_recent),
    }
}

/// Whether anything was solved today and whether the chain is still alive
/// (last activity today or yesterday). Drives the dashboard message.
pub fn streak_status(
    problems: &[Problem],
    last_date: Option<NaiveDate>,
    today: NaiveDate,
) -> StreakStatus {
    let solved_today = problems
        .iter()
        .any(|p| p.completed && p.completed_day() == Some(today));

    let active = match last_date {
        Some(d) => d == today || Some(d) == today.pred_opt(),
        None => false,
    };

    StreakStatus {
        solved_today,
        active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Platform, Source};
    use chrono::{Duration, NaiveDateTime};

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn problem(completed_at: Option<NaiveDateTime>) -> Problem {
        Problem {
            id: "t".into(),
            title: "Two Sum".into(),
            topic: "Arrays".into(),
            algorithm: "Hashing".into(),
            difficulty: Difficulty::Easy,
            platform: Platform::LeetCode,
            link: None,
            completed: completed_at.is_some(),
            completed_at,
            favorite: false,
            notes: String::new(),
            revision_count: 0,
            source: Source::Builtin,
            created_at: None,
            updated_at: None,
        }
    }

    fn solved_on(date: NaiveDate) -> Problem {
        problem(Some(date.and_hms_opt(9, 30, 0).unwrap()))
    }

    #[test]
    fn empty_input_yields_zero_state() {
        let today = day("2026-08-29");
        let summary = calculate_streak(&[], today);
        assert_eq!(summary, StreakSummary::default());

        let unsolved = vec![problem(None), problem(None)];
        let summary = calculate_streak(&unsolved, today);
        assert_eq!(summary.streak, 0);
        assert_eq!(summary.last_date, None);
    }

    #[test]
    fn counts_consecutive_days() {
        let today = day("2026-08-29");
        let problems = vec![
            solved_on(today),
            solved_on(today - Duration::days(1)),
            solved_on(today - Duration::days(2)),
        ];
        let summary = calculate_streak(&problems, today);
        assert_eq!(summary.streak, 3);
        assert_eq!(summary.last_date, Some(today));
    }

    #[test]
    fn same_day_completions_count_once() {
        let today = day("2026-08-29");
        let problems = vec![
            solved_on(today),
            problem(Some(today.and_hms_opt(22, 15, 0).unwrap())),
            solved_on(today - Duration::days(1)),
        ];
        assert_eq!(calculate_streak(&problems, today).streak, 2);
    }

    #[test]
    fn gap_terminates_the_walk() {
        let today = day("2026-08-29");
        // Solved today and 3 days ago: the older day is unreachable.
        let problems = vec![solved_on(today), solved_on(today - Duration::days(3))];
        let summary = calculate_streak(&problems, today);
        assert_eq!(summary.streak, 1);
        assert_eq!(summary.last_date, Some(today));
    }

    #[test]
    fn lapsed_streak_reports_one_not_zero() {
        let today = day("2026-08-29");
        let old = today - Duration::days(5);
        // Even with a consecutive run in the past, a lapse floors to 1.
        let problems = vec![solved_on(old), solved_on(old - Duration::days(1))];
        let summary = calculate_streak(&problems, today);
        assert_eq!(summary.streak, 1);
        assert_eq!(summary.last_date, Some(old));
    }

    #[test]
    fn yesterday_anchored_streak_still_counts() {
        let today = day("2026-08-29");
        let problems = vec![
            solved_on(today - Duration::days(1)),
            solved_on(today - Duration::days(2)),
        ];
        let summary = calculate_streak(&problems, today);
        assert_eq!(summary.streak, 2);
        assert_eq!(summary.last_date, Some(today - Duration::days(1)));
    }

    #[test]
    fn recomputation_is_idempotent() {
        let today = day("2026-08-29");
        let problems = vec![solved_on(today), solved_on(today - Duration::days(1))];
        let first = calculate_streak(&problems, today);
        let second = calculate_streak(&problems, today);
        assert_eq!(first, second);
        assert_eq!(first.streak, 2);
    }

    #[test]
    fn status_reflects_activity_window() {
        let today = day("2026-08-29");
        let problems = vec![solved_on(today - Duration::days(1))];
        let summary = calculate_streak(&problems, today);
        let status = streak_status(&problems, summary.last_date, today);
        assert!(status.active);
        assert!(!status.solved_today);
        assert_eq!(status.message(), "Solve a problem to continue your streak!");

        let status = streak_status(&[], None, today);
        assert!(!status.active);
        assert_eq!(status.message(), "Start a new streak!");
    }
}
