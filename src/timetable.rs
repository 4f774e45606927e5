use crate::lecture::{Lecture, NewLecture};
use crate::time_of_day::{end_time_after, parse_duration_minutes, parse_time_of_day};
use chrono::Weekday;
use std::fmt;

pub const DAY_COUNT: usize = 5;

pub const NO_LECTURES: &str = "No lectures scheduled";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimetableError {
    InvalidTime { input: String },
    InvalidDuration { input: String },
    DayOutOfRange { index: usize },
}

impl TimetableError {
    /// True for malformed user text, as opposed to a bad day index.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            TimetableError::InvalidTime { .. } | TimetableError::InvalidDuration { .. }
        )
    }
}

impl fmt::Display for TimetableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimetableError::InvalidTime { input } => {
                write!(f, "invalid time '{input}' (expected HH:MM)")
            }
            TimetableError::InvalidDuration { input } => {
                write!(f, "invalid duration '{input}' (expected whole minutes)")
            }
            TimetableError::DayOutOfRange { index } => write!(
                f,
                "day index {index} is out of range (expected 0..={})",
                DAY_COUNT - 1
            ),
        }
    }
}

impl std::error::Error for TimetableError {}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

pub fn weekday_title(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    weekday: Weekday,
    lectures: Vec<Lecture>,
}

impl Day {
    fn new(weekday: Weekday) -> Self {
        Self {
            weekday,
            lectures: Vec::new(),
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Lowercase weekday identifier, e.g. `monday`.
    pub fn name(&self) -> &'static str {
        weekday_name(self.weekday)
    }

    pub fn title(&self) -> &'static str {
        weekday_title(self.weekday)
    }

    /// Lectures in the order they were added.
    pub fn lectures(&self) -> &[Lecture] {
        &self.lectures
    }

    pub(crate) fn add_lecture(&mut self, lecture: Lecture) {
        self.lectures.push(lecture);
    }

    pub fn lectures_text(&self) -> String {
        if self.lectures.is_empty() {
            return NO_LECTURES.to_string();
        }
        self.lectures
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Monday through Friday, always in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timetable {
    days: [Day; DAY_COUNT],
}

impl Default for Timetable {
    fn default() -> Self {
        Self::new()
    }
}

impl Timetable {
    pub const WEEKDAYS: [Weekday; DAY_COUNT] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    pub fn new() -> Self {
        Self {
            days: Self::WEEKDAYS.map(Day::new),
        }
    }

    pub fn days(&self) -> &[Day; DAY_COUNT] {
        &self.days
    }

    pub fn day(&self, index: usize) -> Result<&Day, TimetableError> {
        self.days
            .get(index)
            .ok_or(TimetableError::DayOutOfRange { index })
    }

    /// Index of a weekday in the timetable, `None` for Saturday and Sunday.
    pub fn index_for_weekday(weekday: Weekday) -> Option<usize> {
        Self::WEEKDAYS.iter().position(|day| *day == weekday)
    }

    /// Compute the end time and append the lecture to the given day.
    /// Nothing is mutated when an error is returned.
    pub fn add_lecture(
        &mut self,
        day_index: usize,
        request: NewLecture,
    ) -> Result<&Lecture, TimetableError> {
        let start = parse_time_of_day(&request.start_time)?;
        let minutes = parse_duration_minutes(&request.duration_minutes)?;
        let day = self
            .days
            .get_mut(day_index)
            .ok_or(TimetableError::DayOutOfRange { index: day_index })?;

        let lecture = Lecture::new(
            request.name,
            request.lecture_type,
            start,
            end_time_after(start, minutes),
            request.location,
            request.instructor,
        );
        log::debug!("adding lecture '{}' on {}", lecture.name(), day.name());
        day.add_lecture(lecture);
        Ok(&day.lectures[day.lectures.len() - 1])
    }

    pub fn lectures_text(&self, day_index: usize) -> Result<String, TimetableError> {
        Ok(self.day(day_index)?.lectures_text())
    }

    pub fn lecture_count(&self) -> usize {
        self.days.iter().map(|day| day.lectures.len()).sum()
    }
}
