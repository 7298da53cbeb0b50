use chrono::{Duration, NaiveDate};

use crate::models::{
    CompletionEstimate, DailyActivity, Difficulty, DifficultyCount, DifficultySplit,
    DifficultyStats, Problem, TopicStats,
};

fn percentage(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}

/// Overall completion percentage, rounded. Empty input is a normal state
/// (brand-new sheet) and yields 0, never an error.
pub fn overall_progress(problems: &[Problem]) -> u32 {
    let completed = problems.iter().filter(|p| p.completed).count();
    percentage(completed, problems.len())
}

pub fn topic_progress(problems: &[Problem], topic: &str) -> u32 {
    let scoped: Vec<&Problem> = problems.iter().filter(|p| p.topic == topic).collect();
    let completed = scoped.iter().filter(|p| p.completed).count();
    percentage(completed, scoped.len())
}

pub fn algorithm_progress(problems: &[Problem], topic: &str, algorithm: &str) -> u32 {
    let scoped: Vec<&Problem> = problems
        .iter()
        .filter(|p| p.topic == topic && p.algorithm == algorithm)
        .collect();
    let completed = scoped.iter().filter(|p| p.completed).count();
    percentage(completed, scoped.len())
}

/// Distinct topics in first-seen order.
pub fn topics(problems: &[Problem]) -> Vec<String> {
    let mut seen = Vec::new();
    for p in problems {
        if !seen.contains(&p.topic) {
            seen.push(p.topic.clone());
        }
    }
    seen
}

/// One entry per distinct topic, in first-seen order. The difficulty
/// breakdown counts every problem in the topic regardless of completion.
pub fn topic_stats(problems: &[Problem]) -> Vec<TopicStats> {
    topics(problems)
        .into_iter()
        .map(|topic| {
            let scoped: Vec<&Problem> = problems.iter().filter(|p| p.topic == topic).collect();
            let completed = scoped.iter().filter(|p| p.completed).count();
            let mut breakdown = DifficultyCount::default();
            for p in &scoped {
                match p.difficulty {
                    Difficulty::Easy => breakdown.easy += 1,
                    Difficulty::Medium => breakdown.medium += 1,
                    Difficulty::Hard => breakdown.hard += 1,
                }
            }
            TopicStats {
                progress: percentage(completed, scoped.len()),
                total: scoped.len() as u32,
                completed: completed as u32,
                breakdown,
                topic,
            }
        })
        .collect()
}

pub fn difficulty_stats(problems: &[Problem]) -> DifficultyStats {
    let mut stats = DifficultyStats::default();
    for p in problems {
        let split: &mut DifficultySplit = match p.difficulty {
            Difficulty::Easy => &mut stats.easy,
            Difficulty::Medium => &mut stats.medium,
            Difficulty::Hard => &mut stats.hard,
        };
        split.total += 1;
        if p.completed {
            split.completed += 1;
        }
    }
    stats
}

/// How long until the sheet is done at `per_day` problems a day. A zero
/// rate is clamped to 1 so the estimate stays finite.
pub fn completion_estimate(
    problems: &[Problem],
    per_day: u32,
    today: NaiveDate,
) -> CompletionEstimate {
    let remaining = problems.iter().filter(|p| !p.completed).count() as u32;
    let per_day = per_day.max(1);
    let days_needed = remaining.div_ceil(per_day);
    CompletionEstimate {
        remaining,
        days_needed,
        target_date: today + Duration::days(days_needed as i64),
    }
}

/// Completions per calendar day over the last `days` days, oldest first.
/// Feeds the weekly heatmap.
pub fn daily_activity(problems: &[Problem], today: NaiveDate, days: u32) -> Vec<DailyActivity> {
    (0..days)
        .rev()
        .map(|back| {
            let date = today - Duration::days(back as i64);
            let solved = problems
                .iter()
                .filter(|p| p.completed && p.completed_day() == Some(date))
                .count() as u32;
            DailyActivity { date, solved }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Platform, Source};

    fn problem(topic: &str, algorithm: &str, difficulty: Difficulty, completed: bool) -> Problem {
        Problem {
            id: format!("{}-{}", topic, algorithm),
            title: format!("{} problem", topic),
            topic: topic.into(),
            algorithm: algorithm.into(),
            difficulty,
            platform: Platform::LeetCode,
            link: None,
            completed,
            completed_at: completed.then(|| {
                NaiveDate::from_ymd_opt(2026, 8, 29)
                    .unwrap()
                    .and_hms_opt(12, 0, 0)
                    .unwrap()
            }),
            favorite: false,
            notes: String::new(),
            revision_count: 0,
            source: Source::Builtin,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn empty_input_degrades_to_zero() {
        assert_eq!(overall_progress(&[]), 0);
        assert_eq!(topic_progress(&[], "Arrays"), 0);
        assert_eq!(algorithm_progress(&[], "Arrays", "Hashing"), 0);
        assert!(topic_stats(&[]).is_empty());
    }

    #[test]
    fn overall_progress_rounds_to_nearest() {
        // 4 of 10 → 40
        let mut problems: Vec<Problem> = (0..4)
            .map(|_| problem("Arrays", "Hashing", Difficulty::Easy, true))
            .collect();
        problems.extend((0..6).map(|_| problem("Arrays", "Hashing", Difficulty::Easy, false)));
        assert_eq!(overall_progress(&problems), 40);

        // 1 of 3 → 33, 2 of 3 → 67
        let third = vec![
            problem("Graphs", "BFS", Difficulty::Medium, true),
            problem("Graphs", "BFS", Difficulty::Medium, false),
            problem("Graphs", "BFS", Difficulty::Medium, false),
        ];
        assert_eq!(overall_progress(&third), 33);
    }

    #[test]
    fn progress_stays_in_bounds() {
        let all_done: Vec<Problem> = (0..7)
            .map(|_| problem("DP", "Memoization", Difficulty::Hard, true))
            .collect();
        assert_eq!(overall_progress(&all_done), 100);

        let none_done: Vec<Problem> = (0..7)
            .map(|_| problem("DP", "Memoization", Difficulty::Hard, false))
            .collect();
        assert_eq!(overall_progress(&none_done), 0);
    }

    #[test]
    fn topic_progress_scopes_to_topic() {
        let problems = vec![
            problem("Arrays", "Two Pointer", Difficulty::Easy, true),
            problem("Arrays", "Two Pointer", Difficulty::Easy, true),
            problem("Arrays", "Hashing", Difficulty::Medium, false),
            problem("Arrays", "Hashing", Difficulty::Medium, false),
            problem("Arrays", "Hashing", Difficulty::Hard, false),
            problem("Graphs", "BFS", Difficulty::Hard, true),
        ];
        assert_eq!(topic_progress(&problems, "Arrays"), 40);
        assert_eq!(topic_progress(&problems, "Graphs"), 100);
        assert_eq!(topic_progress(&problems, "Strings"), 0);
        assert_eq!(algorithm_progress(&problems, "Arrays", "Two Pointer"), 100);
        assert_eq!(algorithm_progress(&problems, "Arrays", "Hashing"), 0);
    }

    #[test]
    fn topic_stats_keep_first_seen_order_and_count_all_difficulties() {
        let problems = vec![
            problem("Strings", "KMP", Difficulty::Hard, false),
            problem("Arrays", "Hashing", Difficulty::Easy, true),
            problem("Strings", "Hashing", Difficulty::Easy, true),
            problem("Arrays", "Sorting", Difficulty::Medium, false),
        ];
        let stats = topic_stats(&problems);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].topic, "Strings");
        assert_eq!(stats[0].total, 2);
        assert_eq!(stats[0].completed, 1);
        assert_eq!(stats[0].progress, 50);
        assert_eq!(stats[0].breakdown.easy, 1);
        assert_eq!(stats[0].breakdown.hard, 1);
        assert_eq!(stats[1].topic, "Arrays");
        assert_eq!(stats[1].breakdown.medium, 1);
    }

    #[test]
    fn difficulty_stats_split_totals_and_completed() {
        let problems = vec![
            problem("Arrays", "Hashing", Difficulty::Easy, true),
            problem("Arrays", "Hashing", Difficulty::Easy, false),
            problem("DP", "Tabulation", Difficulty::Hard, true),
        ];
        let stats = difficulty_stats(&problems);
        assert_eq!(stats.easy.total, 2);
        assert_eq!(stats.easy.completed, 1);
        assert_eq!(stats.medium.total, 0);
        assert_eq!(stats.hard.completed, 1);
    }

    #[test]
    fn estimate_rounds_days_up_and_clamps_rate() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let problems: Vec<Problem> = (0..7)
            .map(|_| problem("Arrays", "Hashing", Difficulty::Easy, false))
            .collect();

        let est = completion_estimate(&problems, 3, today);
        assert_eq!(est.remaining, 7);
        assert_eq!(est.days_needed, 3);
        assert_eq!(est.target_date, today + Duration::days(3));

        let est = completion_estimate(&problems, 0, today);
        assert_eq!(est.days_needed, 7);
    }

    #[test]
    fn daily_activity_covers_the_window_oldest_first() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let mut p = problem("Arrays", "Hashing", Difficulty::Easy, true);
        p.completed_at = Some(today.and_hms_opt(8, 0, 0).unwrap());
        let grid = daily_activity(&[p], today, 7);
        assert_eq!(grid.len(), 7);
        assert_eq!(grid[0].date, today - Duration::days(6));
        assert_eq!(grid[6].solved, 1);
        assert_eq!(grid[5].solved, 0);
    }
}
