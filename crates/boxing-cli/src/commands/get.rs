//! Get command implementation.

use crate::cli::GetArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use boxing_domain::traits::BoxerRepository;
use boxing_domain::{roster, BoxerRecord};

/// Execute the get command.
pub fn execute_get<R: BoxerRepository>(
    args: GetArgs,
    repo: &R,
    formatter: &Formatter,
) -> Result<BoxerRecord> {
    let record = match (args.id, args.name) {
        (Some(id), _) => roster::get_record_by_id(repo, id)?,
        (None, Some(name)) => roster::get_record_by_name(repo, &name)?,
        (None, None) => {
            return Err(CliError::InvalidInput("Either --id or --name is required".to_string()));
        }
    };

    println!("{}", formatter.format_boxer(&record)?);
    Ok(record)
}
