use crate::Assignment;
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PersistenceError {
    Serialization(SerdeJsonError),
    Io(io::Error),
    #[cfg(feature = "sqlite")]
    Sqlite(rusqlite::Error),
    Csv(csv::Error),
    InvalidData(String),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Serialization(err) => write!(f, "serialization error: {err}"),
            PersistenceError::Io(err) => write!(f, "io error: {err}"),
            #[cfg(feature = "sqlite")]
            PersistenceError::Sqlite(err) => write!(f, "sqlite error: {err}"),
            PersistenceError::Csv(err) => write!(f, "csv error: {err}"),
            PersistenceError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<SerdeJsonError> for PersistenceError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<io::Error> for PersistenceError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for PersistenceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<csv::Error> for PersistenceError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// What a load attempt found. `Missing` and `Unreadable` are kept apart so a
/// caller can tell a first run from a damaged file.
#[derive(Debug)]
pub enum LoadOutcome {
    Missing,
    Unreadable(PersistenceError),
    Loaded(Vec<Assignment>),
}

impl LoadOutcome {
    pub fn is_missing(&self) -> bool {
        matches!(self, LoadOutcome::Missing)
    }

    pub fn is_unreadable(&self) -> bool {
        matches!(self, LoadOutcome::Unreadable(_))
    }

    /// Collapse to a plain list; missing or unreadable data counts as empty.
    pub fn into_assignments(self) -> Vec<Assignment> {
        match self {
            LoadOutcome::Loaded(assignments) => assignments,
            LoadOutcome::Missing => Vec::new(),
            LoadOutcome::Unreadable(err) => {
                log::warn!("assignment data is unreadable, starting empty: {err}");
                Vec::new()
            }
        }
    }
}

pub trait AssignmentStore {
    fn save_assignments(&self, assignments: &[Assignment]) -> PersistenceResult<()>;
    fn load_assignments(&self) -> PersistenceResult<LoadOutcome>;
}

pub mod file;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use file::{
    JsonAssignmentStore, export_assignments_to_csv, load_assignments_from_json,
    read_assignments_from_json, save_assignments_to_json, timetable_needs_setup,
    write_timetable_placeholder,
};
