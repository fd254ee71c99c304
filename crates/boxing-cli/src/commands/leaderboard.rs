//! Leaderboard command implementation.

use crate::cli::LeaderboardArgs;
use crate::error::Result;
use crate::output::Formatter;
use boxing_domain::traits::BoxerRepository;
use boxing_domain::{roster, BoxerRecord};

/// Execute the leaderboard command.
pub fn execute_leaderboard<R: BoxerRepository>(
    args: LeaderboardArgs,
    repo: &R,
    formatter: &Formatter,
) -> Result<Vec<BoxerRecord>> {
    let records = roster::get_leaderboard(repo, args.sort.into())?;
    println!("{}", formatter.format_leaderboard(&records)?);
    Ok(records)
}
