//! Fight command implementation.

use crate::cli::FightArgs;
use crate::error::Result;
use crate::output::Formatter;
use boxing_domain::traits::{BoxerRepository, RandomSource};
use boxing_domain::{roster, Bout, Ring};

/// Execute the fight command: both boxers enter a fresh ring and fight.
pub fn execute_fight<R, S>(
    args: FightArgs,
    repo: &mut R,
    random: &mut S,
    formatter: &Formatter,
) -> Result<Bout>
where
    R: BoxerRepository,
    S: RandomSource,
{
    let mut ring = Ring::new();
    ring.enter(roster::get_boxer_by_name(repo, &args.first)?)?;
    ring.enter(roster::get_boxer_by_name(repo, &args.second)?)?;

    run_bout(&mut ring, repo, random, formatter)
}

/// Fight the boxers already in `ring` and print the result.
pub fn run_bout<R, S>(
    ring: &mut Ring,
    repo: &mut R,
    random: &mut S,
    formatter: &Formatter,
) -> Result<Bout>
where
    R: BoxerRepository,
    S: RandomSource,
{
    let bout = ring.bout(repo, random)?;
    println!("{}", formatter.format_bout(&bout)?);
    Ok(bout)
}
