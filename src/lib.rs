pub mod assignment;
pub mod config;
pub mod lecture;
pub mod persistence;
pub mod session;
pub mod time_of_day;
pub mod timetable;

pub use assignment::{Assignment, AssignmentKind, AssignmentRecord, AssignmentStatus};
pub use config::{ConfigError, StoreBackend, TrackerConfig};
pub use lecture::{Lecture, NewLecture};
#[cfg(feature = "sqlite")]
pub use persistence::sqlite::SqliteAssignmentStore;
pub use persistence::{
    AssignmentStore, JsonAssignmentStore, LoadOutcome, PersistenceError,
    export_assignments_to_csv, load_assignments_from_json, read_assignments_from_json,
    save_assignments_to_json, timetable_needs_setup, write_timetable_placeholder,
};
pub use session::{Session, SessionError};
pub use time_of_day::compute_end_time;
pub use timetable::{Day, Timetable, TimetableError};
