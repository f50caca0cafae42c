use rusqlite::{Connection, Row, params, types::Type};
use serde::{Serialize, de::DeserializeOwned};
use time::Date;

use crate::{
    Error,
    budget::{Breakdown, NeedsBreakdown, SavingsBreakdown, WantsBreakdown},
    database_id::DatabaseId,
};

pub type EntryId = DatabaseId;

/// A budget submission as it was stored.
///
/// Entries are never updated. They are created from a [NewBudgetEntry] and may
/// be deleted by ID.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetEntry {
    /// The id for the entry.
    pub id: EntryId,
    /// The date the budget applies to.
    pub budget_date: Date,
    /// The starting balance held as a buffer.
    pub total_money: f64,
    /// The income for the week.
    pub income: f64,
    /// The raw spending on needs.
    pub needs_data: NeedsBreakdown,
    /// The raw spending on wants, as entered by the user.
    pub wants_data: WantsBreakdown,
    /// The raw amounts saved.
    pub savings_data: SavingsBreakdown,
    /// An optional free-text note.
    pub notes: Option<String>,
}

impl BudgetEntry {
    /// The total spent on needs, wants and savings combined.
    pub fn total_allocated(&self) -> f64 {
        self.needs_data.total() + self.wants_data.total() + self.savings_data.total()
    }
}

/// The data needed to store a new budget entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBudgetEntry {
    pub budget_date: Date,
    pub total_money: f64,
    pub income: f64,
    pub needs: NeedsBreakdown,
    pub wants: WantsBreakdown,
    pub savings: SavingsBreakdown,
    pub notes: Option<String>,
}

impl NewBudgetEntry {
    /// Create an entry with no breakdowns or notes.
    pub fn new(budget_date: Date, total_money: f64, income: f64) -> Self {
        Self {
            budget_date,
            total_money,
            income,
            needs: NeedsBreakdown::default(),
            wants: WantsBreakdown::default(),
            savings: SavingsBreakdown::default(),
            notes: None,
        }
    }

    /// Set the note, blank text is stored as no note.
    pub fn notes(mut self, notes: Option<&str>) -> Self {
        self.notes = notes
            .map(str::trim)
            .filter(|notes| !notes.is_empty())
            .map(ToOwned::to_owned);
        self
    }
}

pub fn create_budget_entry_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS budget_entry (
            id INTEGER PRIMARY KEY,
            budget_date TEXT NOT NULL,
            total_money REAL NOT NULL DEFAULT 0,
            income REAL NOT NULL,
            needs_data TEXT NOT NULL,
            wants_data TEXT NOT NULL,
            savings_data TEXT NOT NULL,
            notes TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_budget_entry_date ON budget_entry(budget_date);",
    )?;

    Ok(())
}

/// Store `entry` and return it with its generated ID.
///
/// # Errors
/// Returns [Error::JSONSerializationError] if a breakdown cannot be encoded,
/// or [Error::SqlError] if the insert fails.
pub fn insert_budget_entry(
    entry: &NewBudgetEntry,
    connection: &Connection,
) -> Result<BudgetEntry, Error> {
    connection.execute(
        "INSERT INTO budget_entry (budget_date, total_money, income, needs_data, wants_data, savings_data, notes)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            entry.budget_date,
            entry.total_money,
            entry.income,
            to_json(&entry.needs)?,
            to_json(&entry.wants)?,
            to_json(&entry.savings)?,
            entry.notes,
        ],
    )?;

    let id = connection.last_insert_rowid();

    Ok(BudgetEntry {
        id,
        budget_date: entry.budget_date,
        total_money: entry.total_money,
        income: entry.income,
        needs_data: entry.needs,
        wants_data: entry.wants,
        savings_data: entry.savings,
        notes: entry.notes.clone(),
    })
}

/// Retrieve all entries, newest budget date first.
pub fn get_all_budget_entries(connection: &Connection) -> Result<Vec<BudgetEntry>, Error> {
    connection
        .prepare(
            "SELECT id, budget_date, total_money, income, needs_data, wants_data, savings_data, notes
            FROM budget_entry
            ORDER BY budget_date DESC, id DESC",
        )?
        .query_map([], map_row_to_budget_entry)?
        .map(|maybe_entry| maybe_entry.map_err(Error::from))
        .collect()
}

/// Retrieve a single entry by ID.
#[cfg(test)]
pub fn get_budget_entry(id: EntryId, connection: &Connection) -> Result<BudgetEntry, Error> {
    connection
        .query_one(
            "SELECT id, budget_date, total_money, income, needs_data, wants_data, savings_data, notes
            FROM budget_entry WHERE id = ?1",
            params![id],
            map_row_to_budget_entry,
        )
        .map_err(Error::from)
}

/// Delete the entry with `id`.
///
/// # Errors
/// Returns [Error::DeleteMissingEntry] if no entry has the ID.
pub fn delete_budget_entry(id: EntryId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM budget_entry WHERE id = ?1", [id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingEntry(id));
    }

    Ok(())
}

pub fn map_row_to_budget_entry(row: &Row) -> Result<BudgetEntry, rusqlite::Error> {
    Ok(BudgetEntry {
        id: row.get(0)?,
        budget_date: row.get(1)?,
        total_money: row.get(2)?,
        income: row.get(3)?,
        needs_data: from_json_column(row, 4)?,
        wants_data: from_json_column(row, 5)?,
        savings_data: from_json_column(row, 6)?,
        notes: row.get(7)?,
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<String, Error> {
    serde_json::to_string(value).map_err(|error| Error::JSONSerializationError(error.to_string()))
}

fn from_json_column<T: DeserializeOwned>(row: &Row, index: usize) -> Result<T, rusqlite::Error> {
    let text: String = row.get(index)?;

    serde_json::from_str(&text)
        .map_err(|error| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(error)))
}
