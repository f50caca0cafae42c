use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    Error,
    entry::{
        core::EntryId,
        repository::{BudgetRepository, SQLiteBudgetRepository},
    },
};

/// Parse the ID segment of a budget entry URL.
///
/// The whole segment must be an integer, so `12abc` is rejected.
pub(crate) fn parse_entry_id(raw_id: &str) -> Result<EntryId, Error> {
    raw_id
        .trim()
        .parse()
        .map_err(|_| Error::InvalidEntryId(raw_id.to_owned()))
}

/// A route handler for deleting a budget entry, responds with `204 No Content`.
pub async fn delete_budget_endpoint(
    State(repository): State<SQLiteBudgetRepository>,
    Path(entry_id): Path<String>,
) -> Result<StatusCode, Error> {
    let entry_id = parse_entry_id(&entry_id)?;

    repository.delete(entry_id)?;
    tracing::info!("Deleted budget entry {entry_id}");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod parse_entry_id_tests {
    use crate::{Error, entry::delete_endpoint::parse_entry_id};

    #[test]
    fn parses_integers() {
        assert_eq!(parse_entry_id("42"), Ok(42));
    }

    #[test]
    fn rejects_trailing_text() {
        assert_eq!(
            parse_entry_id("12abc"),
            Err(Error::InvalidEntryId("12abc".to_owned()))
        );
    }

    #[test]
    fn rejects_words() {
        assert_eq!(
            parse_entry_id("abc"),
            Err(Error::InvalidEntryId("abc".to_owned()))
        );
    }
}
