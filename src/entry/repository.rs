//! Defines the budget entry repository trait and its SQLite implementation.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{
    AppState, Error,
    entry::core::{
        BudgetEntry, EntryId, NewBudgetEntry, delete_budget_entry, get_all_budget_entries,
        insert_budget_entry,
    },
};

/// Stores and retrieves budget entries.
pub trait BudgetRepository {
    /// Store a new entry and return it with its ID.
    fn save(&self, entry: NewBudgetEntry) -> Result<BudgetEntry, Error>;

    /// Retrieve every entry, newest budget date first.
    fn list(&self) -> Result<Vec<BudgetEntry>, Error>;

    /// Delete the entry with `id`.
    ///
    /// Implementers should return [Error::DeleteMissingEntry] if there is no
    /// entry with `id`.
    fn delete(&self, id: EntryId) -> Result<(), Error>;
}

/// Stores budget entries in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteBudgetRepository {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteBudgetRepository {
    /// Create a repository backed by `connection`.
    ///
    /// The `budget_entry` table is expected to exist already, see
    /// [crate::initialize_db].
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)
    }
}

impl FromRef<AppState> for SQLiteBudgetRepository {
    fn from_ref(state: &AppState) -> Self {
        Self::new(state.db_connection.clone())
    }
}

impl BudgetRepository for SQLiteBudgetRepository {
    fn save(&self, entry: NewBudgetEntry) -> Result<BudgetEntry, Error> {
        insert_budget_entry(&entry, &*self.lock()?)
    }

    fn list(&self) -> Result<Vec<BudgetEntry>, Error> {
        get_all_budget_entries(&*self.lock()?)
    }

    fn delete(&self, id: EntryId) -> Result<(), Error> {
        delete_budget_entry(id, &*self.lock()?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        db::initialize,
        entry::{
            core::NewBudgetEntry,
            repository::{BudgetRepository, SQLiteBudgetRepository},
        },
    };

    fn get_repository() -> SQLiteBudgetRepository {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        SQLiteBudgetRepository::new(Arc::new(Mutex::new(connection)))
    }

    #[test]
    fn save_list_delete() {
        let repository = get_repository();

        let first = repository
            .save(NewBudgetEntry::new(date!(2025 - 02 - 01), 0.0, 500.0))
            .unwrap();
        let second = repository
            .save(NewBudgetEntry::new(date!(2025 - 02 - 08), 0.0, 650.0))
            .unwrap();

        assert_eq!(repository.list().unwrap(), vec![second.clone(), first.clone()]);

        repository.delete(first.id).unwrap();

        assert_eq!(repository.list().unwrap(), vec![second]);
        assert_eq!(repository.delete(first.id), Err(Error::DeleteMissingEntry(first.id)));
    }
}
