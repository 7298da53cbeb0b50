use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "grind", version, author, about = "A terminal companion for DSA interview preparation tracking")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// First-run setup (name, daily problem target)
    Setup {
        /// Reset existing configuration
        #[arg(long)]
        reset: bool,
    },
    /// List problems, optionally filtered
    List {
        /// Restrict to a topic (e.g. "Arrays")
        topic: Option<String>,
        /// Filter by difficulty: easy, medium, hard
        #[arg(long, short)]
        difficulty: Option<String>,
        /// Show only completed problems
        #[arg(long, conflicts_with = "pending")]
        completed: bool,
        /// Show only unsolved problems
        #[arg(long)]
        pending: bool,
        /// Show only favorites
        #[arg(long, short)]
        favorites: bool,
        /// Case-insensitive title search
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Per-topic progress overview
    Topics,
    /// Toggle a problem's completion
    Done {
        /// Problem id (see `grind list`)
        id: String,
    },
    /// Toggle a problem's favorite flag
    Fav {
        /// Problem id
        id: String,
    },
    /// Show or set notes on a problem
    Note {
        /// Problem id
        id: String,
        /// New note text (omit to display the current note)
        text: Option<String>,
    },
    /// Record another revision pass over a problem
    Revise {
        /// Problem id
        id: String,
    },
    /// Add a custom problem to the sheet
    Add {
        /// Problem title
        title: String,
        /// Topic label
        #[arg(long, short)]
        topic: String,
        /// Algorithm / pattern label
        #[arg(long, short, default_value = "")]
        algorithm: String,
        /// Difficulty: easy, medium, hard
        #[arg(long, short, default_value = "medium")]
        difficulty: String,
        /// Platform: leetcode, gfg, codestudio
        #[arg(long, short, default_value = "leetcode")]
        platform: String,
        /// Problem URL
        #[arg(long)]
        link: Option<String>,
    },
    /// Remove a problem from the sheet
    Remove {
        /// Problem id
        id: String,
    },
    /// Show streak, progress, and difficulty breakdown
    Stats {
        /// Include a heatmap of the last 7 days
        #[arg(long)]
        week: bool,
    },
    /// Browse curated learning resources
    Resources {
        /// Restrict to a category (e.g. "Roadmaps")
        #[arg(long, short)]
        category: Option<String>,
    },
    /// Print a JSON snapshot of the sheet to stdout
    Export,
    /// Import a JSON snapshot
    Import {
        /// Snapshot file produced by `grind export`
        file: String,
        /// Keep existing problems that the snapshot does not mention
        #[arg(long)]
        merge: bool,
    },
    /// Wipe all progress back to the curated sheet
    Reset,
}
