//! Health command implementation.

use crate::error::Result;
use crate::output::Formatter;
use boxing_store::{SqliteStore, StoreError};
use serde_json::json;

const BOXERS_TABLE: &str = "boxers";

/// Execute the health command.
pub fn execute_health(store: &SqliteStore, formatter: &Formatter) -> Result<()> {
    store.health_check()?;

    if !store.table_exists(BOXERS_TABLE)? {
        return Err(StoreError::NotFound(format!("Table '{}'", BOXERS_TABLE)).into());
    }

    let boxers = store.count()?;
    println!(
        "{}",
        formatter.status(
            &format!("Database healthy ({} boxers)", boxers),
            json!({ "status": "healthy", "boxers": boxers }),
        )?
    );
    Ok(())
}
