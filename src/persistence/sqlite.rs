use super::{AssignmentStore, LoadOutcome, PersistenceResult};
use crate::Assignment;
use rusqlite::{Connection, params};
use std::sync::Mutex;

/// Keeps assignments in a SQLite database, one JSON row per assignment,
/// ordered by list position.
pub struct SqliteAssignmentStore {
    connection: Mutex<Connection>,
}

impl SqliteAssignmentStore {
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> PersistenceResult<Self> {
        let connection = Connection::open(path)?;
        Self::initialize_schema(&connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    pub fn in_memory() -> PersistenceResult<Self> {
        let connection = Connection::open_in_memory()?;
        Self::initialize_schema(&connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn initialize_schema(connection: &Connection) -> PersistenceResult<()> {
        let ddl = r#"
            CREATE TABLE IF NOT EXISTS store_state (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                saved_at TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS assignments (
                position INTEGER PRIMARY KEY,
                assignment_json TEXT NOT NULL
            );
        "#;
        connection.execute_batch(ddl)?;
        Ok(())
    }
}

impl AssignmentStore for SqliteAssignmentStore {
    fn save_assignments(&self, assignments: &[Assignment]) -> PersistenceResult<()> {
        let mut conn = self.connection.lock().expect("sqlite mutex poisoned");
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM assignments", [])?;
        {
            let mut stmt =
                tx.prepare("INSERT INTO assignments (position, assignment_json) VALUES (?1, ?2)")?;
            for (position, assignment) in assignments.iter().enumerate() {
                let json = serde_json::to_string(assignment)?;
                stmt.execute(params![position as i64, json])?;
            }
        }
        tx.execute(
            "INSERT OR REPLACE INTO store_state (id, saved_at) VALUES (1, datetime('now'))",
            [],
        )?;
        tx.commit()?;
        log::debug!("saved {} assignments to sqlite", assignments.len());
        Ok(())
    }

    fn load_assignments(&self) -> PersistenceResult<LoadOutcome> {
        let conn = self.connection.lock().expect("sqlite mutex poisoned");

        let saved: i64 = conn.query_row("SELECT COUNT(*) FROM store_state", [], |row| row.get(0))?;
        if saved == 0 {
            return Ok(LoadOutcome::Missing);
        }

        let mut stmt =
            conn.prepare("SELECT assignment_json FROM assignments ORDER BY position ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut assignments = Vec::new();
        for json in rows {
            let json = json?;
            match serde_json::from_str::<Assignment>(&json) {
                Ok(assignment) => assignments.push(assignment),
                Err(err) => return Ok(LoadOutcome::Unreadable(err.into())),
            }
        }
        Ok(LoadOutcome::Loaded(assignments))
    }
}
