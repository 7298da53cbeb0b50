#![allow(dead_code)]
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn all() -> Vec<Difficulty> {
        vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" | "e" => Ok(Difficulty::Easy),
            "medium" | "med" | "m" => Ok(Difficulty::Medium),
            "hard" | "h" => Ok(Difficulty::Hard),
            _ => Err(anyhow::anyhow!("Unknown difficulty: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    LeetCode,
    Gfg,
    CodeStudio,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::LeetCode => "LeetCode",
            Platform::Gfg => "GFG",
            Platform::CodeStudio => "CodeStudio",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "leetcode" | "lc" => Ok(Platform::LeetCode),
            "gfg" | "geeksforgeeks" => Ok(Platform::Gfg),
            "codestudio" | "cs" => Ok(Platform::CodeStudio),
            _ => Err(anyhow::anyhow!("Unknown platform: {}", s)),
        }
    }
}

/// Curated sheet rows vs. rows the user added themselves. Custom rows are
/// removed on reset; builtin rows only lose their progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Builtin,
    Custom,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Builtin => "builtin",
            Source::Custom => "custom",
        }
    }
}

impl FromStr for Source {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "builtin" => Ok(Source::Builtin),
            "custom" => Ok(Source::Custom),
            _ => Err(anyhow::anyhow!("Unknown source: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub title: String,
    pub topic: String,
    pub algorithm: String,
    pub difficulty: Difficulty,
    pub platform: Platform,
    pub link: Option<String>,
    pub completed: bool,
    /// Set when `completed` flips to true, cleared when it flips back.
    /// Invariant: non-null iff `completed`.
    pub completed_at: Option<NaiveDateTime>,
    pub favorite: bool,
    pub notes: String,
    pub revision_count: u32,
    pub source: Source,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Problem {
    /// Local calendar day of the completion, if any. Day granularity is all
    /// the streak calculator ever looks at.
    pub fn completed_day(&self) -> Option<NaiveDate> {
        self.completed_at.map(|dt| dt.date())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionFilter {
    #[default]
    All,
    Completed,
    Pending,
}

/// In-memory filter over the full problem list. Every set field must match.
#[derive(Debug, Clone, Default)]
pub struct ProblemFilter {
    pub search: Option<String>,
    pub topic: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub completion: CompletionFilter,
    pub favorites_only: bool,
    pub platform: Option<Platform>,
}

impl ProblemFilter {
    pub fn matches(&self, p: &Problem) -> bool {
        if let Some(q) = &self.search {
            if !p.title.to_lowercase().contains(&q.to_lowercase()) {
                return false;
            }
        }
        if let Some(topic) = &self.topic {
            if !p.topic.eq_ignore_ascii_case(topic) {
                return false;
            }
        }
        if let Some(diff) = self.difficulty {
            if p.difficulty != diff {
                return false;
            }
        }
        match self.completion {
            CompletionFilter::Completed if !p.completed => return false,
            CompletionFilter::Pending if p.completed => return false,
            _ => {}
        }
        if self.favorites_only && !p.favorite {
            return false;
        }
        if let Some(platform) = self.platform {
            if p.platform != platform {
                return false;
            }
        }
        true
    }
}
