//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, db::initialize};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The number of weeks of baseline the buffer should cover when the
    /// planner form is first shown.
    pub default_buffer_goal_weeks: f64,

    /// The database connection
    pub db_connection: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns [Error::InvalidBufferGoalWeeks] if `default_buffer_goal_weeks`
    /// is not a positive, finite number, or an error if the database cannot
    /// be initialized.
    pub fn new(
        db_connection: Connection,
        local_timezone: &str,
        default_buffer_goal_weeks: f64,
    ) -> Result<Self, Error> {
        if !(default_buffer_goal_weeks.is_finite() && default_buffer_goal_weeks > 0.0) {
            return Err(Error::InvalidBufferGoalWeeks(default_buffer_goal_weeks));
        }

        initialize(&db_connection)?;

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
            default_buffer_goal_weeks,
            db_connection: Arc::new(Mutex::new(db_connection)),
        })
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::{AppState, Error};

    fn new_state(default_buffer_goal_weeks: f64) -> Result<AppState, Error> {
        let connection = Connection::open_in_memory().unwrap();

        AppState::new(connection, "Etc/UTC", default_buffer_goal_weeks)
    }

    #[test]
    fn accepts_positive_buffer_goal() {
        let state = new_state(2.5).unwrap();

        assert_eq!(state.default_buffer_goal_weeks, 2.5);
    }

    #[test]
    fn rejects_non_positive_buffer_goal() {
        for weeks in [0.0, -4.0, f64::INFINITY] {
            assert_eq!(
                new_state(weeks).map(|_| ()),
                Err(Error::InvalidBufferGoalWeeks(weeks))
            );
        }
    }

    #[test]
    fn rejects_nan_buffer_goal() {
        assert!(matches!(
            new_state(f64::NAN),
            Err(Error::InvalidBufferGoalWeeks(_))
        ));
    }
}
