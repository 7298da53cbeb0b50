use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Derived streak state. Never persisted as authoritative — always
/// recomputed from the problem records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    pub streak: u32,
    pub last_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakStatus {
    pub solved_today: bool,
    /// Last activity was today or yesterday, so the chain is still alive.
    pub active: bool,
}

impl StreakStatus {
    pub fn message(&self) -> &'static str {
        if self.active {
            if self.solved_today {
                "Keep it up!"
            } else {
                "Solve a problem to continue your streak!"
            }
        } else {
            "Start a new streak!"
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyCount {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicStats {
    pub topic: String,
    pub total: u32,
    pub completed: u32,
    /// Rounded percentage in 0..=100.
    pub progress: u32,
    /// Counts all problems in the topic regardless of completion state.
    pub breakdown: DifficultyCount,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DifficultySplit {
    pub total: u32,
    pub completed: u32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DifficultyStats {
    pub easy: DifficultySplit,
    pub medium: DifficultySplit,
    pub hard: DifficultySplit,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CompletionEstimate {
    pub remaining: u32,
    pub days_needed: u32,
    pub target_date: NaiveDate,
}

/// One cell of the weekly activity heatmap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DailyActivity {
    pub date: NaiveDate,
    pub solved: u32,
}
