use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use rusqlite::Connection;

use crate::config::AppConfig;
use crate::data::quotes;
use crate::db::repository::{now_datetime, ActivityRepo, ProblemRepo};
use crate::models::{
    ActivityAction, ActivityEntry, DailyActivity, Problem, StreakStatus, StreakSummary,
    TopicStats,
};
use crate::progress;
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{activity, header, overview, problems, statusbar, streak, topics};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Dashboard,
    Problems,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pane {
    Topics,
    Problems,
}

pub struct App {
    pub view: View,
    pub config: AppConfig,
    pub pane: Pane,
    pub topic_idx: usize,
    pub problem_idx: usize,
    pub should_quit: bool,

    // Cached state (refreshed on action and on day rollover)
    pub today: NaiveDate,
    pub problems: Vec<Problem>,
    pub topic_stats: Vec<TopicStats>,
    pub streak: StreakSummary,
    pub status: StreakStatus,
    pub weekly: Vec<DailyActivity>,
    pub recent: Vec<ActivityEntry>,
    pub quote: &'static str,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            view: View::Dashboard,
            config,
            pane: Pane::Topics,
            topic_idx: 0,
            problem_idx: 0,
            should_quit: false,
            today: Local::now().date_naive(),
            problems: Vec::new(),
            topic_stats: Vec::new(),
            streak: StreakSummary::default(),
            status: StreakStatus::default(),
            weekly: Vec::new(),
            recent: Vec::new(),
            quote: quotes::random_quote(),
        }
    }

    pub fn load(&mut self, conn: &Connection) -> Result<()> {
        self.today = Local::now().date_naive();
        self.problems = ProblemRepo::list_all(conn)?;
        self.topic_stats = progress::topic_stats(&self.problems);
        self.streak = progress::calculate_streak(&self.problems, self.today);
        self.status = progress::streak_status(&self.problems, self.streak.last_date, self.today);
        self.weekly = progress::daily_activity(&self.problems, self.today, 7);
        self.recent = ActivityRepo::recent(conn, 5)?;

        if self.topic_idx >= self.topic_stats.len() {
            self.topic_idx = self.topic_stats.len().saturating_sub(1);
        }
        let count = self.topic_problems().len();
        if self.problem_idx >= count {
            self.problem_idx = count.saturating_sub(1);
        }
        Ok(())
    }

    pub fn tick(&mut self, conn: &Connection) {
        // Streak math cares about the calendar day, so refresh on rollover.
        if Local::now().date_naive() != self.today {
            let _ = self.load(conn);
        }
    }

    fn selected_topic(&self) -> Option<&str> {
        self.topic_stats.get(self.topic_idx).map(|s| s.topic.as_str())
    }

    fn topic_problems(&self) -> Vec<&Problem> {
        match self.selected_topic() {
            Some(topic) => self.problems.iter().filter(|p| p.topic == topic).collect(),
            None => Vec::new(),
        }
    }

    fn selected_problem_id(&self) -> Option<String> {
        self.topic_problems()
            .get(self.problem_idx)
            .map(|p| p.id.clone())
    }

    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent, conn: &Connection) {
        // Ignore release/repeat events from some terminals
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.view {
            View::Dashboard => self.handle_dashboard_key(key),
            View::Problems => self.handle_problems_key(key, conn),
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            KeyCode::Char('p') | KeyCode::Enter => {
                self.view = View::Problems;
                self.pane = Pane::Problems;
                self.problem_idx = 0;
            }
            KeyCode::Up => {
                if self.topic_idx > 0 {
                    self.topic_idx -= 1;
                }
            }
            KeyCode::Down => {
                if self.topic_idx + 1 < self.topic_stats.len() {
                    self.topic_idx += 1;
                }
            }
            _ => {}
        }
    }

    fn handle_problems_key(&mut self, key: crossterm::event::KeyEvent, conn: &Connection) {
        match key.code {
            KeyCode::Esc => {
                self.view = View::Dashboard;
            }
            KeyCode::Tab => {
                self.pane = match self.pane {
                    Pane::Topics => Pane::Problems,
                    Pane::Problems => Pane::Topics,
                };
            }
            KeyCode::Up => match self.pane {
                Pane::Topics => {
                    if self.topic_idx > 0 {
                        self.topic_idx -= 1;
                        self.problem_idx = 0;
                    }
                }
                Pane::Problems => {
                    if self.problem_idx > 0 {
                        self.problem_idx -= 1;
                    }
                }
            },
            KeyCode::Down => match self.pane {
                Pane::Topics => {
                    if self.topic_idx + 1 < self.topic_stats.len() {
                        self.topic_idx += 1;
                        self.problem_idx = 0;
                    }
                }
                Pane::Problems => {
                    if self.problem_idx + 1 < self.topic_problems().len() {
                        self.problem_idx += 1;
                    }
                }
            },
            KeyCode::Char('m') | KeyCode::Enter => self.toggle_selected_done(conn),
            KeyCode::Char('f') => self.toggle_selected_favorite(conn),
            KeyCode::Char('v') => self.revise_selected(conn),
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => {
                self.view = View::Dashboard;
            }
            _ => {}
        }
    }

    fn toggle_selected_done(&mut self, conn: &Connection) {
        if let Some(id) = self.selected_problem_id() {
            if let Ok(problem) = ProblemRepo::toggle_completed(conn, &id, now_datetime()) {
                let action = if problem.completed {
                    ActivityAction::Completed
                } else {
                    ActivityAction::Uncompleted
                };
                let _ = ActivityRepo::log(conn, action, &problem.title);
                if problem.completed {
                    self.quote = quotes::random_quote();
                }
            }
            let _ = self.load(conn);
        }
    }

    fn toggle_selected_favorite(&mut self, conn: &Connection) {
        if let Some(id) = self.selected_problem_id() {
            let _ = ProblemRepo::toggle_favorite(conn, &id);
            let _ = self.load(conn);
        }
    }

    fn revise_selected(&mut self, conn: &Connection) {
        if let Some(id) = self.selected_problem_id() {
            if ProblemRepo::bump_revision(conn, &id).is_ok() {
                if let Ok(Some(problem)) = ProblemRepo::get(conn, &id) {
                    let _ = ActivityRepo::log(conn, ActivityAction::Revised, &problem.title);
                }
            }
            let _ = self.load(conn);
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Dashboard => self.draw_dashboard(frame),
            View::Problems => self.draw_problems(frame),
            View::Help => {
                self.draw_dashboard(frame);
                self.draw_help_overlay(frame);
            }
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // quote
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(frame, outer_chunks[0], &self.config.profile.user_name);

        if self.config.display.show_quotes {
            let quote = Paragraph::new(Line::from(Span::styled(
                format!("  “{}”", self.quote),
                theme::dim(),
            )));
            frame.render_widget(quote, outer_chunks[2]);
        }
        statusbar::render(frame, outer_chunks[3], false);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(outer_chunks[1]);

        topics::render(
            frame,
            columns[0],
            &self.topic_stats,
            self.topic_idx,
            true,
        );

        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // overview
                Constraint::Length(8), // streak
                Constraint::Min(0),    // activity
            ])
            .split(columns[1]);

        let completed = self.problems.iter().filter(|p| p.completed).count() as u32;
        let data = overview::OverviewData {
            total: self.problems.len() as u32,
            completed,
            overall: progress::overall_progress(&self.problems),
            split: progress::difficulty_stats(&self.problems),
            estimate: progress::completion_estimate(
                &self.problems,
                self.config.profile.daily_target,
                self.today,
            ),
            daily_target: self.config.profile.daily_target,
        };
        overview::render(frame, right_chunks[0], &data);
        streak::render(
            frame,
            right_chunks[1],
            &self.streak,
            &self.status,
            &self.weekly,
        );
        activity::render(frame, right_chunks[2], &self.recent, self.today);
    }

    fn draw_problems(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        statusbar::render(frame, outer_chunks[1], true);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(outer_chunks[0]);

        topics::render(
            frame,
            columns[0],
            &self.topic_stats,
            self.topic_idx,
            self.pane == Pane::Topics,
        );
        problems::render(
            frame,
            columns[1],
            self.selected_topic().unwrap_or("Problems"),
            &self.topic_problems(),
            self.problem_idx,
            self.pane == Pane::Problems,
        );
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();

        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: area.height / 2,
        };

        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::accent().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  [p] / Enter  ", theme::accent()),
                Span::styled("Open the problem browser", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [m] / Enter  ", theme::accent()),
                Span::styled("Toggle problem done (browser)", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [f]          ", theme::accent()),
                Span::styled("Toggle favorite", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [v]          ", theme::accent()),
                Span::styled("Record a revision pass", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [Tab]        ", theme::accent()),
                Span::styled("Switch pane", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [↑ ↓]        ", theme::accent()),
                Span::styled("Navigate", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [?]          ", theme::accent()),
                Span::styled("Toggle help", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [Esc]        ", theme::accent()),
                Span::styled("Back / quit", theme::dim()),
            ]),
        ];

        let block = Block::default()
            .title(Span::styled(" Help ", theme::accent()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::accent())
            .style(theme::surface());

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, popup_area);
    }
}

/// Run the TUI event loop.
pub fn run(conn: Connection, config: AppConfig) -> Result<()> {
    let mut app = App::new(config);
    app.load(&conn)?;

    let mut terminal = ratatui::init();
    let events = EventHandler::new(500);

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        match events.next()? {
            Event::Key(key) => {
                app.handle_key(key, &conn);
                if app.should_quit {
                    break;
                }
            }
            Event::Tick => {
                app.tick(&conn);
            }
        }
    }

    ratatui::restore();
    Ok(())
}
