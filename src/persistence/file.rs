use super::{AssignmentStore, LoadOutcome, PersistenceError, PersistenceResult};
use crate::Assignment;
use crate::assignment::AssignmentRecord;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Decode one element of the assignment file. Records written before the
/// kind was stored explicitly only carry the prefixed display name.
fn decode_assignment(position: usize, value: serde_json::Value) -> PersistenceResult<Assignment> {
    let tagged = value.get("kind").is_some();
    let decoded = if tagged {
        serde_json::from_value::<Assignment>(value)
    } else {
        serde_json::from_value::<AssignmentRecord>(value).map(Assignment::from)
    };
    decoded.map_err(|err| PersistenceError::InvalidData(format!("assignment #{position}: {err}")))
}

pub fn save_assignments_to_json<P: AsRef<Path>>(
    assignments: &[Assignment],
    path: P,
) -> PersistenceResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, assignments)?;
    writer.flush()?;
    log::debug!("saved {} assignments to {}", assignments.len(), path.display());
    Ok(())
}

/// Read the assignment file, reporting whether it was absent or undecodable.
/// Only IO failures other than a missing file are returned as errors.
pub fn read_assignments_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<LoadOutcome> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::debug!("no assignment file at {}", path.display());
            return Ok(LoadOutcome::Missing);
        }
        Err(err) => return Err(err.into()),
    };

    let values = match serde_json::from_reader::<_, Vec<serde_json::Value>>(BufReader::new(file)) {
        Ok(values) => values,
        Err(err) if err.is_io() => return Err(err.into()),
        Err(err) => return Ok(LoadOutcome::Unreadable(err.into())),
    };

    let mut assignments = Vec::with_capacity(values.len());
    for (position, value) in values.into_iter().enumerate() {
        match decode_assignment(position, value) {
            Ok(assignment) => assignments.push(assignment),
            Err(err) => return Ok(LoadOutcome::Unreadable(err)),
        }
    }
    log::debug!(
        "loaded {} assignments from {}",
        assignments.len(),
        path.display()
    );
    Ok(LoadOutcome::Loaded(assignments))
}

/// Missing and undecodable files both come back as an empty list.
pub fn load_assignments_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<Vec<Assignment>> {
    Ok(read_assignments_from_json(path)?.into_assignments())
}

pub fn export_assignments_to_csv<P: AsRef<Path>>(
    assignments: &[Assignment],
    path: P,
) -> PersistenceResult<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    for assignment in assignments {
        writer.serialize(assignment.to_record())?;
    }
    writer.flush()?;
    Ok(())
}

#[derive(Debug, Clone)]
pub struct JsonAssignmentStore {
    path: PathBuf,
}

impl JsonAssignmentStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AssignmentStore for JsonAssignmentStore {
    fn save_assignments(&self, assignments: &[Assignment]) -> PersistenceResult<()> {
        save_assignments_to_json(assignments, &self.path)
    }

    fn load_assignments(&self) -> PersistenceResult<LoadOutcome> {
        read_assignments_from_json(&self.path)
    }
}

/// Shape of the timetable file. Lectures are not persisted, so every list
/// is written empty.
#[derive(Debug, Default, Serialize)]
struct TimetablePlaceholder {
    monday: Vec<serde_json::Value>,
    tuesday: Vec<serde_json::Value>,
    wednesday: Vec<serde_json::Value>,
    thursday: Vec<serde_json::Value>,
    friday: Vec<serde_json::Value>,
}

/// Setup is needed when the timetable file is missing, blank or not JSON.
/// Any other IO failure is returned rather than treated as missing.
pub fn timetable_needs_setup<P: AsRef<Path>>(path: P) -> PersistenceResult<bool> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content.trim().is_empty()
            || serde_json::from_str::<serde_json::Value>(&content).is_err()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(true),
        Err(err) => Err(err.into()),
    }
}

pub fn write_timetable_placeholder<P: AsRef<Path>>(path: P) -> PersistenceResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &TimetablePlaceholder::default())?;
    writer.flush()?;
    Ok(())
}
