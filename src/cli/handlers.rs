use anyhow::{anyhow, Context, Result};
use chrono::Local;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::config::AppConfig;
use crate::data::{quotes, resources};
use crate::db::migrations::seed_curated_sheet;
use crate::db::repository::{now_datetime, ActivityRepo, MetaRepo, ProblemRepo};
use crate::models::{
    ActivityAction, CompletionFilter, Difficulty, Platform, Problem, ProblemFilter, Source,
    StreakSummary,
};
use crate::progress;
use crate::utils::format::{format_relative, progress_bar, truncate};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! print_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        print!("\x1b[0m");
    }};
}

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

fn difficulty_color(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => GREEN,
        Difficulty::Medium => AMBER,
        Difficulty::Hard => RED,
    }
}

// ─── Setup ───────────────────────────────────────────────────────────────────

pub fn handle_setup(conn: &Connection, config: &mut AppConfig, reset: bool) -> Result<()> {
    if !reset {
        if let Some(done) = MetaRepo::get(conn, "setup_done")? {
            if done == "1" {
                println!("grind is already configured. Use --reset to reconfigure.");
                return Ok(());
            }
        }
    }

    println!();
    println_colored!(GOLD, "  Welcome to grind");
    println!();

    let name = prompt(&format!("  Your name [{}]: ", config.profile.user_name))?;
    if !name.is_empty() {
        config.profile.user_name = name;
    }

    let target = prompt(&format!(
        "  Problems per day [{}]: ",
        config.profile.daily_target
    ))?;
    if !target.is_empty() {
        config.profile.daily_target = target
            .parse()
            .map_err(|_| anyhow!("'{}' is not a valid number", target))?;
    }

    config.save()?;
    MetaRepo::set(conn, "setup_done", "1")?;

    println!();
    println_colored!(
        GREEN,
        "  ✓ All set, {}. Run `grind` for the dashboard or `grind list` for the sheet.",
        config.profile.user_name
    );
    Ok(())
}

// ─── List ────────────────────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
pub fn handle_list(
    conn: &Connection,
    topic: Option<String>,
    difficulty: Option<String>,
    completed: bool,
    pending: bool,
    favorites: bool,
    search: Option<String>,
) -> Result<()> {
    let filter = ProblemFilter {
        search,
        topic,
        difficulty: difficulty.as_deref().map(Difficulty::from_str).transpose()?,
        completion: if completed {
            CompletionFilter::Completed
        } else if pending {
            CompletionFilter::Pending
        } else {
            CompletionFilter::All
        },
        favorites_only: favorites,
        platform: None,
    };

    let problems = ProblemRepo::list_all(conn)?;
    let matched: Vec<&Problem> = problems.iter().filter(|p| filter.matches(p)).collect();

    println!();
    if matched.is_empty() {
        println_colored!(DIM, "  No problems match.");
        println!();
        return Ok(());
    }

    let mut current_topic: Option<&str> = None;
    for p in &matched {
        if current_topic != Some(p.topic.as_str()) {
            if current_topic.is_some() {
                println!();
            }
            println_colored!(GOLD, "  {}", p.topic);
            current_topic = Some(p.topic.as_str());
        }

        let icon = if p.completed {
            format!("{}✓\x1b[0m", GREEN)
        } else {
            format!("{}○\x1b[0m", DIM)
        };
        let star = if p.favorite {
            format!("{}★\x1b[0m", GOLD)
        } else {
            " ".to_string()
        };
        let revs = if p.revision_count > 0 {
            format!("  ·  r{}", p.revision_count)
        } else {
            String::new()
        };

        print!("  {} {} {:<44}", icon, star, truncate(&p.title, 42));
        print_colored!(difficulty_color(p.difficulty), "{:<8}", p.difficulty);
        println_colored!(DIM, "  {}{}", p.id, revs);
    }
    println!();
    println_colored!(DIM, "  {} problems shown", matched.len());
    println!();
    Ok(())
}

// ─── Topics ──────────────────────────────────────────────────────────────────

pub fn handle_topics(conn: &Connection) -> Result<()> {
    let problems = ProblemRepo::list_all(conn)?;
    let stats = progress::topic_stats(&problems);

    println!();
    if stats.is_empty() {
        println_colored!(DIM, "  The sheet is empty.");
        println!();
        return Ok(());
    }

    println_colored!(GOLD, "  Topic Progress");
    println!();
    for s in &stats {
        print!("  {:<22}", truncate(&s.topic, 20));
        print_colored!(GREEN, "{}", progress_bar(s.completed, s.total, 12));
        print!("  {:>3}%  ", s.progress);
        print_colored!(DIM, "{}/{}", s.completed, s.total);
        println_colored!(
            DIM,
            "   E{} M{} H{}",
            s.breakdown.easy,
            s.breakdown.medium,
            s.breakdown.hard
        );
    }

    println!();
    println_colored!(
        BOLD,
        "  Overall: {}%",
        progress::overall_progress(&problems)
    );
    println!();
    Ok(())
}

// ─── Done / Fav / Note / Revise ──────────────────────────────────────────────

pub fn handle_done(conn: &Connection, config: &AppConfig, id: &str) -> Result<()> {
    let now = now_datetime();
    let problem = ProblemRepo::toggle_completed(conn, id, now)?;

    if problem.completed {
        ActivityRepo::log(conn, ActivityAction::Completed, &problem.title)?;
        println_colored!(GREEN, "  ✓ {} marked as done", problem.title);
        if config.display.show_quotes {
            println_colored!(DIM, "    “{}”", quotes::random_quote());
        }
    } else {
        ActivityRepo::log(conn, ActivityAction::Uncompleted, &problem.title)?;
        println_colored!(AMBER, "  ○ {} unmarked", problem.title);
    }

    let problems = ProblemRepo::list_all(conn)?;
    let summary = progress::calculate_streak(&problems, now.date());
    if summary.streak > 0 {
        println_colored!(GOLD, "  Streak: {} {}", summary.streak, day_word(summary.streak));
    }
    Ok(())
}

pub fn handle_fav(conn: &Connection, id: &str) -> Result<()> {
    let favorite = ProblemRepo::toggle_favorite(conn, id)?;
    if favorite {
        println_colored!(GOLD, "  ★ Added to favorites");
    } else {
        println_colored!(DIM, "  ☆ Removed from favorites");
    }
    Ok(())
}

pub fn handle_note(conn: &Connection, id: &str, text: Option<String>) -> Result<()> {
    match text {
        Some(notes) => {
            ProblemRepo::set_notes(conn, id, &notes)?;
            println_colored!(GREEN, "  ✓ Note saved");
        }
        None => {
            let problem = ProblemRepo::get(conn, id)?
                .ok_or_else(|| anyhow!("No problem with id '{}'", id))?;
            println!();
            println_colored!(GOLD, "  {}", problem.title);
            if problem.notes.is_empty() {
                println_colored!(DIM, "  (no notes yet — `grind note {} \"...\"`)", id);
            } else {
                println!("  {}", problem.notes);
            }
            println!();
        }
    }
    Ok(())
}

pub fn handle_revise(conn: &Connection, id: &str) -> Result<()> {
    let count = ProblemRepo::bump_revision(conn, id)?;
    let problem = ProblemRepo::get(conn, id)?
        .ok_or_else(|| anyhow!("No problem with id '{}'", id))?;
    ActivityRepo::log(conn, ActivityAction::Revised, &problem.title)?;
    println_colored!(GREEN, "  ✓ {} revised ({} times total)", problem.title, count);
    Ok(())
}

// ─── Add / Remove ────────────────────────────────────────────────────────────

pub fn handle_add(
    conn: &Connection,
    title: &str,
    topic: &str,
    algorithm: &str,
    difficulty: &str,
    platform: &str,
    link: Option<String>,
) -> Result<()> {
    let now = now_datetime();
    let problem = Problem {
        id: format!("custom-{}", now.and_utc().timestamp_millis()),
        title: title.to_string(),
        topic: topic.to_string(),
        algorithm: algorithm.to_string(),
        difficulty: Difficulty::from_str(difficulty)?,
        platform: Platform::from_str(platform)?,
        link,
        completed: false,
        completed_at: None,
        favorite: false,
        notes: String::new(),
        revision_count: 0,
        source: Source::Custom,
        created_at: Some(now),
        updated_at: Some(now),
    };
    ProblemRepo::insert(conn, &problem)?;
    ActivityRepo::log(conn, ActivityAction::Added, &problem.title)?;
    println_colored!(GREEN, "  ✓ Added {} ({})", problem.title, problem.id);
    Ok(())
}

pub fn handle_remove(conn: &Connection, id: &str) -> Result<()> {
    match ProblemRepo::delete(conn, id)? {
        Some(problem) => {
            ActivityRepo::log(conn, ActivityAction::Deleted, &problem.title)?;
            println_colored!(AMBER, "  Removed {}", problem.title);
        }
        None => println_colored!(DIM, "  No problem with id '{}'", id),
    }
    Ok(())
}

// ─── Stats ───────────────────────────────────────────────────────────────────

pub fn handle_stats(conn: &Connection, config: &AppConfig, week: bool) -> Result<()> {
    let today = Local::now().date_naive();
    let problems = ProblemRepo::list_all(conn)?;

    let summary = progress::calculate_streak(&problems, today);
    let status = progress::streak_status(&problems, summary.last_date, today);
    let overall = progress::overall_progress(&problems);
    let split = progress::difficulty_stats(&problems);
    let estimate = progress::completion_estimate(&problems, config.profile.daily_target, today);

    let completed = problems.iter().filter(|p| p.completed).count() as u32;
    let total = problems.len() as u32;

    println!();
    println_colored!(GOLD, "  Statistics");
    println!();
    println_colored!(
        BOLD,
        "  Streak:      {} {}  —  {}",
        summary.streak,
        day_word(summary.streak),
        status.message()
    );
    if let Some(last) = summary.last_date {
        println_colored!(DIM, "  Last active: {}", last.format("%Y-%m-%d"));
    }
    println!();

    print!("  Overall:     ");
    print_colored!(GREEN, "{}", progress_bar(completed, total, 16));
    println!("  {}%  ({}/{})", overall, completed, total);

    print!("  Easy ");
    print_colored!(GREEN, "{}/{}", split.easy.completed, split.easy.total);
    print!("   Medium ");
    print_colored!(AMBER, "{}/{}", split.medium.completed, split.medium.total);
    print!("   Hard ");
    println_colored!(RED, "{}/{}", split.hard.completed, split.hard.total);

    println!();
    println_colored!(
        DIM,
        "  At {}/day:   {} problems left, ~{} days (target {})",
        config.profile.daily_target.max(1),
        estimate.remaining,
        estimate.days_needed,
        estimate.target_date.format("%Y-%m-%d")
    );

    if week {
        println!();
        println_colored!(DIM, "  Last 7 days  (● = 3+, ◕ = 2, ◑ = 1, ○ = 0)");
        println!();
        print!("  ");
        for cell in progress::daily_activity(&problems, today, 7) {
            let icon = match cell.solved {
                n if n >= 3 => format!("{}●\x1b[0m ", GREEN),
                2 => format!("{}◕\x1b[0m ", AMBER),
                1 => format!("{}◑\x1b[0m ", AMBER),
                _ => format!("{}○\x1b[0m ", DIM),
            };
            print!("{}", icon);
        }
        println!();
    }

    // Recent activity feed
    let recent = ActivityRepo::recent(conn, 5)?;
    if !recent.is_empty() {
        println!();
        println_colored!(GOLD, "  Recent Activity");
        for entry in &recent {
            println_colored!(
                DIM,
                "  {} {}  —  {}",
                entry.action.verb(),
                entry.title,
                format_relative(entry.timestamp, today)
            );
        }
    }
    println!();
    Ok(())
}

// ─── Resources ───────────────────────────────────────────────────────────────

pub fn handle_resources(category: Option<String>) -> Result<()> {
    println!();
    let mut shown = 0;
    for cat in resources::categories() {
        if let Some(wanted) = &category {
            if !cat.eq_ignore_ascii_case(wanted) {
                continue;
            }
        }
        println_colored!(GOLD, "  {}", cat);
        println!();
        for r in resources::RESOURCES.iter().filter(|r| r.category == cat) {
            print_colored!(BOLD, "  {}", r.title);
            println_colored!(DIM, "  ({}, {})", r.creator, r.level);
            println_colored!(DIM, "    {}", r.description);
            println_colored!(AMBER, "    {}", r.url);
            println!();
            shown += 1;
        }
    }
    if shown == 0 {
        println_colored!(DIM, "  No resources in that category.");
        println!();
    }
    Ok(())
}

// ─── Export / Import ─────────────────────────────────────────────────────────

/// Snapshot written by `export`. The streak fields are derived values kept
/// for human readers; `import` recomputes them from the problems.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    problems: Vec<Problem>,
    #[serde(default)]
    current_streak: u32,
    #[serde(default)]
    last_activity_date: Option<chrono::NaiveDate>,
    #[serde(default)]
    exported_at: String,
}

pub fn handle_export(conn: &Connection) -> Result<()> {
    let problems = ProblemRepo::list_all(conn)?;
    let today = Local::now().date_naive();
    let StreakSummary { streak, last_date } = progress::calculate_streak(&problems, today);

    let snapshot = Snapshot {
        problems,
        current_streak: streak,
        last_activity_date: last_date,
        exported_at: now_datetime().format("%Y-%m-%dT%H:%M:%S").to_string(),
    };
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

pub fn handle_import(conn: &Connection, file: &str, merge: bool) -> Result<()> {
    let content =
        std::fs::read_to_string(file).with_context(|| format!("Reading {}", file))?;
    let snapshot: Snapshot =
        serde_json::from_str(&content).with_context(|| format!("Parsing {}", file))?;

    let mut incoming = snapshot.problems;
    let imported = incoming.len();

    if merge {
        // Keep existing rows the snapshot doesn't mention.
        let ids: std::collections::HashSet<String> =
            incoming.iter().map(|p| p.id.clone()).collect();
        let existing = ProblemRepo::list_all(conn)?;
        incoming.extend(existing.into_iter().filter(|p| !ids.contains(&p.id)));
    }

    ProblemRepo::delete_all(conn)?;
    for p in &incoming {
        ProblemRepo::insert(conn, p)?;
    }
    log::info!("Imported {} problems from {}", imported, file);

    println_colored!(
        GREEN,
        "  ✓ Imported {} problems ({} total on the sheet)",
        imported,
        incoming.len()
    );
    Ok(())
}

// ─── Reset ───────────────────────────────────────────────────────────────────

pub fn handle_reset(conn: &Connection) -> Result<()> {
    println_colored!(
        AMBER,
        "  This wipes all progress, notes, and custom problems."
    );
    let answer = prompt("  Type 'yes' to confirm: ")?;
    if answer.to_lowercase() != "yes" {
        println_colored!(DIM, "  Aborted.");
        return Ok(());
    }

    ProblemRepo::reset_progress(conn)?;
    seed_curated_sheet(conn)?;
    ActivityRepo::clear(conn)?;
    println_colored!(GREEN, "  ✓ Back to a fresh sheet");
    Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn day_word(n: u32) -> &'static str {
    if n == 1 { "day" } else { "days" }
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().lock().read_line(&mut buf)?;
    Ok(buf.trim_end_matches('\n').trim_end_matches('\r').to_string())
}
