use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityAction {
    Completed,
    Uncompleted,
    Added,
    Deleted,
    Revised,
}

impl ActivityAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityAction::Completed => "completed",
            ActivityAction::Uncompleted => "uncompleted",
            ActivityAction::Added => "added",
            ActivityAction::Deleted => "deleted",
            ActivityAction::Revised => "revised",
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            ActivityAction::Completed => "Completed",
            ActivityAction::Uncompleted => "Unmarked",
            ActivityAction::Added => "Added",
            ActivityAction::Deleted => "Deleted",
            ActivityAction::Revised => "Revised",
        }
    }
}

impl FromStr for ActivityAction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(ActivityAction::Completed),
            "uncompleted" => Ok(ActivityAction::Uncompleted),
            "added" => Ok(ActivityAction::Added),
            "deleted" => Ok(ActivityAction::Deleted),
            "revised" => Ok(ActivityAction::Revised),
            _ => Err(anyhow::anyhow!("Unknown activity action: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: Option<i64>,
    pub action: ActivityAction,
    pub title: String,
    pub timestamp: NaiveDateTime,
}
