//! Delete command implementation.

use crate::cli::DeleteArgs;
use crate::error::Result;
use crate::output::Formatter;
use boxing_domain::roster;
use boxing_domain::traits::BoxerRepository;
use serde_json::json;
use std::io::{self, Write};

/// Execute the delete command.
///
/// Returns `false` when the user declines the confirmation prompt.
pub fn execute_delete<R: BoxerRepository>(
    args: DeleteArgs,
    repo: &mut R,
    formatter: &Formatter,
) -> Result<bool> {
    // Fail on unknown ids before asking anything
    let boxer = roster::get_boxer_by_id(repo, args.id)?;

    // Confirm deletion unless --yes is specified
    if !args.yes {
        print!("Delete boxer '{}' (ID {})? [y/N] ", boxer.name(), boxer.id());
        io::stdout().flush()?;

        let mut response = String::new();
        io::stdin().read_line(&mut response)?;

        if !response.trim().eq_ignore_ascii_case("y") {
            println!("{}", formatter.info("Operation cancelled"));
            return Ok(false);
        }
    }

    roster::delete_boxer(repo, args.id)?;
    println!(
        "{}",
        formatter.status(
            &format!("Boxer '{}' deleted", boxer.name()),
            json!({ "deleted": args.id.value() }),
        )?
    );

    Ok(true)
}
