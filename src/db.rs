//! Sets up the application database.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{Error, entry::create_budget_entry_table};

/// Create the tables for the domain models if they do not already exist.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_budget_entry_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
