pub mod activity;
pub mod problem;
pub mod resource;
pub mod stats;

pub use activity::{ActivityAction, ActivityEntry};
pub use problem::{CompletionFilter, Difficulty, Platform, Problem, ProblemFilter, Source};
pub use resource::Resource;
pub use stats::{
    CompletionEstimate, DailyActivity, DifficultyCount, DifficultySplit, DifficultyStats,
    StreakStatus, StreakSummary, TopicStats,
};
