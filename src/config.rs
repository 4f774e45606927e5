use crate::persistence::{AssignmentStore, JsonAssignmentStore, PersistenceError};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DATA_DIR_VAR: &str = "TIMETABLER_DATA_DIR";
pub const ASSIGNMENTS_FILE_VAR: &str = "TIMETABLER_ASSIGNMENTS_FILE";
pub const TIMETABLE_FILE_VAR: &str = "TIMETABLER_TIMETABLE_FILE";
pub const SQLITE_FILE_VAR: &str = "TIMETABLER_SQLITE_FILE";
pub const STORE_VAR: &str = "TIMETABLER_STORE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    Json,
    Sqlite,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(StoreBackend::Json),
            "sqlite" => Ok(StoreBackend::Sqlite),
            other => Err(ConfigError::UnknownStore(other.to_string())),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    UnknownStore(String),
    SqliteUnavailable,
    Store(PersistenceError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownStore(name) => {
                write!(f, "unknown store '{name}' (expected json or sqlite)")
            }
            ConfigError::SqliteUnavailable => {
                write!(f, "sqlite store requested but the `sqlite` feature is disabled")
            }
            ConfigError::Store(err) => write!(f, "could not open store: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<PersistenceError> for ConfigError {
    fn from(value: PersistenceError) -> Self {
        Self::Store(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub assignments_path: PathBuf,
    pub timetable_path: PathBuf,
    pub sqlite_path: PathBuf,
    pub store: StoreBackend,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

impl TrackerConfig {
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            assignments_path: dir.join("assignments.json"),
            timetable_path: dir.join("timetable.json"),
            sqlite_path: dir.join("assignments.db"),
            store: StoreBackend::Json,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Relative file names resolve
    /// against the data directory.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let dir = lookup(DATA_DIR_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        let mut config = Self::in_dir(&dir);

        if let Some(name) = lookup(ASSIGNMENTS_FILE_VAR) {
            config.assignments_path = dir.join(name);
        }
        if let Some(name) = lookup(TIMETABLE_FILE_VAR) {
            config.timetable_path = dir.join(name);
        }
        if let Some(name) = lookup(SQLITE_FILE_VAR) {
            config.sqlite_path = dir.join(name);
        }
        if let Some(store) = lookup(STORE_VAR) {
            config.store = store.parse()?;
        }
        Ok(config)
    }

    pub fn open_store(&self) -> Result<Box<dyn AssignmentStore>, ConfigError> {
        match self.store {
            StoreBackend::Json => Ok(Box::new(JsonAssignmentStore::new(
                self.assignments_path.clone(),
            ))),
            #[cfg(feature = "sqlite")]
            StoreBackend::Sqlite => Ok(Box::new(
                crate::persistence::sqlite::SqliteAssignmentStore::new(&self.sqlite_path)?,
            )),
            #[cfg(not(feature = "sqlite"))]
            StoreBackend::Sqlite => Err(ConfigError::SqliteUnavailable),
        }
    }
}
