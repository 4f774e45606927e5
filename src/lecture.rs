use crate::time_of_day::format_time_of_day;
use chrono::NaiveTime;
use std::fmt;

/// A single scheduled class occurrence. Fields are fixed once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lecture {
    name: String,
    lecture_type: String,
    start_time: NaiveTime,
    end_time: NaiveTime,
    location: String,
    instructor: String,
}

/// User-entered lecture details, before the end time is computed.
#[derive(Debug, Clone, Default)]
pub struct NewLecture {
    pub name: String,
    pub start_time: String,
    pub duration_minutes: String,
    pub location: String,
    pub instructor: String,
    /// Free text, conventionally `Theory`, `Lab` or `Other`.
    pub lecture_type: String,
}

impl Lecture {
    pub fn new(
        name: impl Into<String>,
        lecture_type: impl Into<String>,
        start_time: NaiveTime,
        end_time: NaiveTime,
        location: impl Into<String>,
        instructor: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            lecture_type: lecture_type.into(),
            start_time,
            end_time,
            location: location.into(),
            instructor: instructor.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lecture_type(&self) -> &str {
        &self.lecture_type
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    /// Lab lectures issue a writeup and an execution instead of a single assignment.
    pub fn is_lab(&self) -> bool {
        self.lecture_type.trim().eq_ignore_ascii_case("lab")
    }
}

impl fmt::Display for Lecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.name, self.lecture_type)?;
        writeln!(
            f,
            "Time: {} - {}",
            format_time_of_day(self.start_time),
            format_time_of_day(self.end_time)
        )?;
        writeln!(f, "Location: {}", self.location)?;
        writeln!(f, "Instructor: {}", self.instructor)
    }
}
