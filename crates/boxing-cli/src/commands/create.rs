//! Create command implementation.

use crate::cli::CreateArgs;
use crate::error::Result;
use crate::output::Formatter;
use boxing_domain::traits::BoxerRepository;
use boxing_domain::{roster, BoxerId, NewBoxer};
use serde_json::json;

/// Execute the create command.
pub fn execute_create<R: BoxerRepository>(
    args: CreateArgs,
    repo: &mut R,
    formatter: &Formatter,
) -> Result<BoxerId> {
    let boxer = NewBoxer::new(args.name, args.weight, args.height, args.reach, args.age);
    let name = boxer.name.clone();
    let id = roster::create_boxer(repo, boxer)?;

    println!(
        "{}",
        formatter.status(
            &format!("Boxer '{}' created with ID {}", name, id),
            json!({ "id": id.value(), "name": name }),
        )?
    );

    Ok(id)
}
