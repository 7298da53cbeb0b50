mod cli;
mod config;
mod data;
mod db;
mod models;
mod progress;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use rusqlite::Connection;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use db::migrations::run_migrations;
use db::repository::MetaRepo;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = AppConfig::load().context("Loading config")?;

    // Ensure data directory exists and open DB
    AppConfig::ensure_data_dir()?;
    let db_path = AppConfig::db_path()?;
    let conn = Connection::open(&db_path)
        .with_context(|| format!("Opening database at {:?}", db_path))?;
    log::debug!("Opened database at {:?}", db_path);

    // Enable WAL mode for better concurrent access
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    // Run migrations on every startup
    run_migrations(&conn)?;

    match cli.command {
        // Setup wizard
        Some(Commands::Setup { reset }) => {
            handlers::handle_setup(&conn, &mut config, reset)?;
        }

        // Explicit subcommands — check setup first
        Some(cmd) => {
            ensure_setup(&conn, &mut config)?;
            match cmd {
                Commands::List {
                    topic,
                    difficulty,
                    completed,
                    pending,
                    favorites,
                    search,
                } => {
                    handlers::handle_list(
                        &conn, topic, difficulty, completed, pending, favorites, search,
                    )?;
                }
                Commands::Topics => {
                    handlers::handle_topics(&conn)?;
                }
                Commands::Done { id } => {
                    handlers::handle_done(&conn, &config, &id)?;
                }
                Commands::Fav { id } => {
                    handlers::handle_fav(&conn, &id)?;
                }
                Commands::Note { id, text } => {
                    handlers::handle_note(&conn, &id, text)?;
                }
                Commands::Revise { id } => {
                    handlers::handle_revise(&conn, &id)?;
                }
                Commands::Add {
                    title,
                    topic,
                    algorithm,
                    difficulty,
                    platform,
                    link,
                } => {
                    handlers::handle_add(
                        &conn, &title, &topic, &algorithm, &difficulty, &platform, link,
                    )?;
                }
                Commands::Remove { id } => {
                    handlers::handle_remove(&conn, &id)?;
                }
                Commands::Stats { week } => {
                    handlers::handle_stats(&conn, &config, week)?;
                }
                Commands::Resources { category } => {
                    handlers::handle_resources(category)?;
                }
                Commands::Export => {
                    handlers::handle_export(&conn)?;
                }
                Commands::Import { file, merge } => {
                    handlers::handle_import(&conn, &file, merge)?;
                }
                Commands::Reset => {
                    handlers::handle_reset(&conn)?;
                }
                Commands::Setup { .. } => unreachable!(),
            }
        }

        // No subcommand → launch TUI
        None => {
            ensure_setup(&conn, &mut config)?;
            tui::app::run(conn, config)?;
        }
    }

    Ok(())
}

/// Check if setup has been done; if not, run the wizard automatically.
fn ensure_setup(conn: &Connection, config: &mut AppConfig) -> Result<()> {
    let done = MetaRepo::get(conn, "setup_done")?;
    if done.as_deref() != Some("1") {
        eprintln!("No configuration found. Running setup...");
        eprintln!();
        handlers::handle_setup(conn, config, false)?;
    }
    Ok(())
}
