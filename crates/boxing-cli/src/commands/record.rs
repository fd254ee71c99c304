//! Record command implementation.

use crate::cli::RecordArgs;
use crate::error::Result;
use crate::output::Formatter;
use boxing_domain::traits::BoxerRepository;
use boxing_domain::{roster, BoxerRecord, Outcome};

/// Execute the record command, returning the updated record.
pub fn execute_record<R: BoxerRepository>(
    args: RecordArgs,
    repo: &mut R,
    formatter: &Formatter,
) -> Result<BoxerRecord> {
    let outcome: Outcome = args.result.into();
    roster::update_boxer_stats(repo, args.id, outcome)?;

    let record = roster::get_record_by_id(repo, args.id)?;
    println!("{}", formatter.format_boxer(&record)?);
    Ok(record)
}
