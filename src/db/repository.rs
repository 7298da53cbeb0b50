use anyhow::{anyhow, Result};
use chrono::{NaiveDateTime, Local};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::str::FromStr;

use crate::models::{
    ActivityAction, ActivityEntry, Difficulty, Platform, Problem, Source,
};

const DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATETIME_FMT)
        .map_err(|e| anyhow!("Bad datetime '{}': {}", s, e))
}

pub fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format(DATETIME_FMT).to_string()
}

pub fn now_datetime() -> NaiveDateTime {
    Local::now().naive_local()
}

// ─── Problem repo ────────────────────────────────────────────────────────────

const PROBLEM_COLUMNS: &str =
    "id, title, topic, algorithm, difficulty, platform, link, completed, completed_at,
     favorite, notes, revision_count, source, created_at, updated_at";

fn invalid(e: anyhow::Error) -> rusqlite::Error {
    rusqlite::Error::InvalidParameterName(e.to_string())
}

fn map_problem(row: &Row) -> rusqlite::Result<Problem> {
    let difficulty: String = row.get(4)?;
    let platform: String = row.get(5)?;
    let completed_at: Option<String> = row.get(8)?;
    let source: String = row.get(12)?;
    let created_at: Option<String> = row.get(13)?;
    let updated_at: Option<String> = row.get(14)?;

    Ok(Problem {
        id: row.get(0)?,
        title: row.get(1)?,
        topic: row.get(2)?,
        algorithm: row.get(3)?,
        difficulty: Difficulty::from_str(&difficulty).map_err(invalid)?,
        platform: Platform::from_str(&platform).map_err(invalid)?,
        link: row.get(6)?,
        completed: row.get::<_, i32>(7)? != 0,
        completed_at: completed_at
            .map(|s| parse_datetime(&s).map_err(invalid))
            .transpose()?,
        favorite: row.get::<_, i32>(9)? != 0,
        notes: row.get(10)?,
        revision_count: row.get::<_, i64>(11)? as u32,
        source: Source::from_str(&source).map_err(invalid)?,
        created_at: created_at
            .map(|s| parse_datetime(&s).map_err(invalid))
            .transpose()?,
        updated_at: updated_at
            .map(|s| parse_datetime(&s).map_err(invalid))
            .transpose()?,
    })
}

pub struct ProblemRepo;

impl ProblemRepo {
    /// Full sheet in insertion order, so topics come out in curated order.
    pub fn list_all(conn: &Connection) -> Result<Vec<Problem>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {PROBLEM_COLUMNS} FROM problems ORDER BY rowid"
        ))?;
        let rows = stmt.query_map([], map_problem)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(anyhow::Error::from)
    }

    pub fn get(conn: &Connection, id: &str) -> Result<Option<Problem>> {
        conn.query_row(
            &format!("SELECT {PROBLEM_COLUMNS} FROM problems WHERE id = ?1"),
            params![id],
            map_problem,
        )
        .optional()
        .map_err(anyhow::Error::from)
    }

    /// Flip completion. True→stamps `completed_at` with `now`; false→clears
    /// it unconditionally. Returns the updated row.
    pub fn toggle_completed(conn: &Connection, id: &str, now: NaiveDateTime) -> Result<Problem> {
        let problem = Self::get(conn, id)?
            .ok_or_else(|| anyhow!("No problem with id '{}'", id))?;
        let completed = !problem.completed;
        let completed_at = completed.then(|| format_datetime(now));

        conn.execute(
            "UPDATE problems SET completed = ?1, completed_at = ?2, updated_at = ?3 WHERE id = ?4",
            params![completed as i32, completed_at, format_datetime(now), id],
        )?;

        Self::get(conn, id)?.ok_or_else(|| anyhow!("Problem '{}' vanished mid-update", id))
    }

    /// Returns the new favorite state.
    pub fn toggle_favorite(conn: &Connection, id: &str) -> Result<bool> {
        let problem = Self::get(conn, id)?
            .ok_or_else(|| anyhow!("No problem with id '{}'", id))?;
        let favorite = !problem.favorite;
        conn.execute(
            "UPDATE problems SET favorite = ?1, updated_at = ?2 WHERE id = ?3",
            params![favorite as i32, format_datetime(now_datetime()), id],
        )?;
        Ok(favorite)
    }

    pub fn set_notes(conn: &Connection, id: &str, notes: &str) -> Result<()> {
        let changed = conn.execute(
            "UPDATE problems SET notes = ?1, updated_at = ?2 WHERE id = ?3",
            params![notes, format_datetime(now_datetime()), id],
        )?;
        if changed == 0 {
            return Err(anyhow!("No problem with id '{}'", id));
        }
        Ok(())
    }

    /// Returns the new revision count.
    pub fn bump_revision(conn: &Connection, id: &str) -> Result<u32> {
        let changed = conn.execute(
            "UPDATE problems SET revision_count = revision_count + 1, updated_at = ?1
             WHERE id = ?2",
            params![format_datetime(now_datetime()), id],
        )?;
        if changed == 0 {
            return Err(anyhow!("No problem with id '{}'", id));
        }
        conn.query_row(
            "SELECT revision_count FROM problems WHERE id = ?1",
            params![id],
            |row| row.get::<_, i64>(0).map(|n| n as u32),
        )
        .map_err(anyhow::Error::from)
    }

    pub fn insert(conn: &Connection, p: &Problem) -> Result<()> {
        conn.execute(
            &format!(
                "INSERT OR REPLACE INTO problems ({PROBLEM_COLUMNS})
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13,
                         COALESCE(?14, datetime('now','localtime')),
                         COALESCE(?15, datetime('now','localtime')))"
            ),
            params![
                p.id,
                p.title,
                p.topic,
                p.algorithm,
                p.difficulty.as_str(),
                p.platform.as_str(),
                p.link,
                p.completed as i32,
                p.completed_at.map(format_datetime),
                p.favorite as i32,
                p.notes,
                p.revision_count as i64,
                p.source.as_str(),
                p.created_at.map(format_datetime),
                p.updated_at.map(format_datetime),
            ],
        )?;
        Ok(())
    }

    pub fn delete(conn: &Connection, id: &str) -> Result<Option<Problem>> {
        let existing = Self::get(conn, id)?;
        if existing.is_some() {
            conn.execute("DELETE FROM problems WHERE id = ?1", params![id])?;
        }
        Ok(existing)
    }

    pub fn delete_all(conn: &Connection) -> Result<()> {
        conn.execute("DELETE FROM problems", [])?;
        Ok(())
    }

    /// Back to a fresh sheet: builtin rows lose their progress, custom rows
    /// are removed. Deleted builtins reappear via re-seeding at the call
    /// site.
    pub fn reset_progress(conn: &Connection) -> Result<()> {
        conn.execute(
            "UPDATE problems
             SET completed = 0, completed_at = NULL, favorite = 0, notes = '',
                 revision_count = 0, updated_at = datetime('now','localtime')
             WHERE source = 'builtin'",
            [],
        )?;
        conn.execute("DELETE FROM problems WHERE source = 'custom'", [])?;
        Ok(())
    }
}

// ─── Activity repo ───────────────────────────────────────────────────────────

pub struct ActivityRepo;

impl ActivityRepo {
    pub fn log(conn: &Connection, action: ActivityAction, title: &str) -> Result<()> {
        conn.execute(
            "INSERT INTO activity_log (action, title, timestamp) VALUES (?1, ?2, ?3)",
            params![action.as_str(), title, format_datetime(now_datetime())],
        )?;
        Ok(())
    }

    pub fn recent(conn: &Connection, limit: u32) -> Result<Vec<ActivityEntry>> {
        let mut stmt = conn.prepare(
            "SELECT id, action, title, timestamp FROM activity_log
             ORDER BY id DESC LIMIT ?1",
        )?;

        let rows = stmt.query_map(params![limit], |row| {
            let action: String = row.get(1)?;
            let timestamp: String = row.get(3)?;
            Ok(ActivityEntry {
                id: Some(row.get(0)?),
                action: ActivityAction::from_str(&action).map_err(invalid)?,
                title: row.get(2)?,
                timestamp: parse_datetime(&timestamp).map_err(invalid)?,
            })
        })?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(anyhow::Error::from)
    }

    pub fn clear(conn: &Connection) -> Result<()> {
        conn.execute("DELETE FROM activity_log", [])?;
        Ok(())
    }
}

// ─── App meta ────────────────────────────────────────────────────────────────

pub struct MetaRepo;

impl MetaRepo {
    pub fn get(conn: &Connection, key: &str) -> Result<Option<String>> {
        conn.query_row(
            "SELECT value FROM app_meta WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(anyhow::Error::from)
    }

    pub fn set(conn: &Connection, key: &str, value: &str) -> Result<()> {
        conn.execute(
            "INSERT INTO app_meta (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = ?2",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;
    use crate::models::{CompletionFilter, ProblemFilter};

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn migrations_seed_the_curated_sheet() {
        let conn = test_conn();
        let problems = ProblemRepo::list_all(&conn).unwrap();
        assert!(!problems.is_empty());
        assert!(problems.iter().all(|p| p.source == Source::Builtin));
        assert!(problems.iter().all(|p| !p.completed && p.completed_at.is_none()));

        // Re-running must not duplicate or clobber rows.
        run_migrations(&conn).unwrap();
        assert_eq!(ProblemRepo::list_all(&conn).unwrap().len(), problems.len());
    }

    #[test]
    fn toggle_completed_maintains_timestamp_invariant() {
        let conn = test_conn();
        let now = now_datetime();

        let done = ProblemRepo::toggle_completed(&conn, "arr-1", now).unwrap();
        assert!(done.completed);
        assert!(done.completed_at.is_some());

        let undone = ProblemRepo::toggle_completed(&conn, "arr-1", now).unwrap();
        assert!(!undone.completed);
        assert!(undone.completed_at.is_none());
    }

    #[test]
    fn toggle_completed_unknown_id_errors() {
        let conn = test_conn();
        assert!(ProblemRepo::toggle_completed(&conn, "nope", now_datetime()).is_err());
    }

    #[test]
    fn notes_favorite_and_revisions_round_trip() {
        let conn = test_conn();

        assert!(ProblemRepo::toggle_favorite(&conn, "arr-2").unwrap());
        ProblemRepo::set_notes(&conn, "arr-2", "sliding max trick").unwrap();
        assert_eq!(ProblemRepo::bump_revision(&conn, "arr-2").unwrap(), 1);
        assert_eq!(ProblemRepo::bump_revision(&conn, "arr-2").unwrap(), 2);

        let p = ProblemRepo::get(&conn, "arr-2").unwrap().unwrap();
        assert!(p.favorite);
        assert_eq!(p.notes, "sliding max trick");
        assert_eq!(p.revision_count, 2);
        assert!(!p.completed, "favorite is independent of completion");
    }

    #[test]
    fn reset_clears_progress_and_drops_custom_rows() {
        let conn = test_conn();
        let now = now_datetime();

        ProblemRepo::toggle_completed(&conn, "arr-1", now).unwrap();
        let custom = Problem {
            id: "custom-1".into(),
            title: "My Problem".into(),
            topic: "Arrays".into(),
            algorithm: String::new(),
            difficulty: Difficulty::Medium,
            platform: Platform::LeetCode,
            link: None,
            completed: false,
            completed_at: None,
            favorite: false,
            notes: String::new(),
            revision_count: 0,
            source: Source::Custom,
            created_at: None,
            updated_at: None,
        };
        ProblemRepo::insert(&conn, &custom).unwrap();

        ProblemRepo::reset_progress(&conn).unwrap();

        let problems = ProblemRepo::list_all(&conn).unwrap();
        assert!(problems.iter().all(|p| !p.completed));
        assert!(problems.iter().all(|p| p.source == Source::Builtin));
    }

    #[test]
    fn activity_feed_is_newest_first_and_capped() {
        let conn = test_conn();
        for i in 0..8 {
            ActivityRepo::log(&conn, ActivityAction::Completed, &format!("P{}", i)).unwrap();
        }
        let recent = ActivityRepo::recent(&conn, 5).unwrap();
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].title, "P7");
        assert_eq!(recent[4].title, "P3");
    }

    #[test]
    fn filters_compose_over_the_sheet() {
        let conn = test_conn();
        ProblemRepo::toggle_completed(&conn, "arr-1", now_datetime()).unwrap();

        let problems = ProblemRepo::list_all(&conn).unwrap();
        let filter = ProblemFilter {
            topic: Some("Arrays".into()),
            completion: CompletionFilter::Completed,
            ..Default::default()
        };
        let hits: Vec<&Problem> = problems.iter().filter(|p| filter.matches(p)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "arr-1");
    }

    #[test]
    fn meta_round_trips() {
        let conn = test_conn();
        assert_eq!(MetaRepo::get(&conn, "setup_done").unwrap(), None);
        MetaRepo::set(&conn, "setup_done", "1").unwrap();
        MetaRepo::set(&conn, "setup_done", "1").unwrap();
        assert_eq!(MetaRepo::get(&conn, "setup_done").unwrap(), Some("1".into()));
    }
}
