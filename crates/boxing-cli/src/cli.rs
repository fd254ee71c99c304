//! CLI command definitions and argument parsing.

use boxing_domain::{BoxerId, LeaderboardSort, Outcome};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Boxing CLI - Manage boxers and stage fights.
#[derive(Debug, Parser)]
#[command(name = "boxing")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// SQLite database path
    #[arg(long, global = true, env = "BOXING_DB_PATH")]
    pub db: Option<PathBuf>,

    /// random.org endpoint
    #[arg(long, global = true, env = "RANDOM_ORG_URL")]
    pub random_url: Option<String>,

    /// Use a local generator with this seed instead of random.org
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register a new boxer
    Create(CreateArgs),

    /// Delete a boxer
    Delete(DeleteArgs),

    /// Show a boxer and their record
    Get(GetArgs),

    /// Record a fight result for a boxer
    Record(RecordArgs),

    /// Show the leaderboard
    Leaderboard(LeaderboardArgs),

    /// Put two boxers in the ring and fight
    Fight(FightArgs),

    /// Check the database
    Health,

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the create command.
#[derive(Debug, Parser)]
pub struct CreateArgs {
    /// Unique name
    pub name: String,

    /// Weight in pounds (at least 125)
    #[arg(allow_negative_numbers = true)]
    pub weight: i32,

    /// Height in inches
    #[arg(allow_negative_numbers = true)]
    pub height: i32,

    /// Reach in inches
    #[arg(allow_negative_numbers = true)]
    pub reach: f64,

    /// Age in years (18-40)
    #[arg(allow_negative_numbers = true)]
    pub age: i32,
}

/// Arguments for the delete command.
#[derive(Debug, Parser)]
pub struct DeleteArgs {
    /// Boxer ID
    pub id: BoxerId,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the get command.
#[derive(Debug, Parser)]
pub struct GetArgs {
    /// Look up by ID
    #[arg(long, conflicts_with = "name", required_unless_present = "name")]
    pub id: Option<BoxerId>,

    /// Look up by name
    #[arg(long)]
    pub name: Option<String>,
}

/// Arguments for the record command.
#[derive(Debug, Parser)]
pub struct RecordArgs {
    /// Boxer ID
    pub id: BoxerId,

    /// Fight result
    #[arg(value_enum)]
    pub result: OutcomeArg,
}

/// Arguments for the leaderboard command.
#[derive(Debug, Parser)]
pub struct LeaderboardArgs {
    /// Sort key
    #[arg(short, long, value_enum, default_value = "wins")]
    pub sort: SortArg,
}

/// Arguments for the fight command.
#[derive(Debug, Parser)]
pub struct FightArgs {
    /// Boxer entering the first slot
    pub first: String,

    /// Boxer entering the second slot
    pub second: String,
}

/// Fight result argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutcomeArg {
    /// The boxer won
    Win,
    /// The boxer lost
    Loss,
}

/// Leaderboard sort argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SortArg {
    /// Most wins first
    Wins,
    /// Highest win percentage first
    WinPct,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

impl From<OutcomeArg> for Outcome {
    fn from(outcome: OutcomeArg) -> Self {
        match outcome {
            OutcomeArg::Win => Outcome::Win,
            OutcomeArg::Loss => Outcome::Loss,
        }
    }
}

impl From<SortArg> for LeaderboardSort {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Wins => LeaderboardSort::Wins,
            SortArg::WinPct => LeaderboardSort::WinPct,
        }
    }
}
