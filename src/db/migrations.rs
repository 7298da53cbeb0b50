use anyhow::Result;
use rusqlite::Connection;

use crate::data::problems::CURATED_SHEET;

pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch("
        CREATE TABLE IF NOT EXISTS problems (
            id             TEXT PRIMARY KEY,
            title          TEXT NOT NULL,
            topic          TEXT NOT NULL,
            algorithm      TEXT NOT NULL DEFAULT '',
            difficulty     TEXT NOT NULL CHECK(difficulty IN ('Easy','Medium','Hard')),
            platform       TEXT NOT NULL DEFAULT 'LeetCode'
                           CHECK(platform IN ('LeetCode','GFG','CodeStudio')),
            link           TEXT,
            completed      INTEGER NOT NULL DEFAULT 0,
            completed_at   TEXT,
            favorite       INTEGER NOT NULL DEFAULT 0,
            notes          TEXT NOT NULL DEFAULT '',
            revision_count INTEGER NOT NULL DEFAULT 0,
            source         TEXT NOT NULL DEFAULT 'builtin'
                           CHECK(source IN ('builtin','custom')),
            created_at     TEXT NOT NULL DEFAULT (datetime('now','localtime')),
            updated_at     TEXT NOT NULL DEFAULT (datetime('now','localtime'))
        );

        CREATE TABLE IF NOT EXISTS activity_log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            action    TEXT NOT NULL
                      CHECK(action IN ('completed','uncompleted','added','deleted','revised')),
            title     TEXT NOT NULL,
            timestamp TEXT NOT NULL DEFAULT (datetime('now','localtime'))
        );

        CREATE TABLE IF NOT EXISTS app_meta (
            key   TEXT PRIMARY KEY,
            value TEXT
        );
    ")?;

    seed_curated_sheet(conn)?;
    Ok(())
}

/// Idempotent: existing rows keep their progress, deleted builtins come back.
pub fn seed_curated_sheet(conn: &Connection) -> Result<()> {
    for seed in CURATED_SHEET {
        conn.execute(
            "INSERT OR IGNORE INTO problems (id, title, topic, algorithm, difficulty, platform, link, source)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 'builtin')",
            rusqlite::params![
                seed.id,
                seed.title,
                seed.topic,
                seed.algorithm,
                seed.difficulty,
                seed.platform,
                seed.link,
            ],
        )?;
    }
    Ok(())
}
