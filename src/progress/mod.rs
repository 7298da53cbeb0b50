pub mod aggregate;
pub mod calculator;

pub use aggregate::{
    algorithm_progress, completion_estimate, daily_activity, difficulty_stats, overall_progress,
    topic_progress, topic_stats, topics,
};
pub use calculator::{calculate_streak, streak_status};
