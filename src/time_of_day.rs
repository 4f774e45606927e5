use crate::timetable::TimetableError;
use chrono::{Duration, NaiveTime};

pub const TIME_FORMAT: &str = "%H:%M";

/// Parse a `HH:MM` 24-hour time of day.
pub fn parse_time_of_day(input: &str) -> Result<NaiveTime, TimetableError> {
    NaiveTime::parse_from_str(input.trim(), TIME_FORMAT).map_err(|_| TimetableError::InvalidTime {
        input: input.to_string(),
    })
}

/// Parse a duration given in whole minutes. Negative values are rejected.
pub fn parse_duration_minutes(input: &str) -> Result<u32, TimetableError> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| TimetableError::InvalidDuration {
            input: input.to_string(),
        })
}

/// Time of day reached `minutes` after `start`, wrapping past midnight.
pub fn end_time_after(start: NaiveTime, minutes: u32) -> NaiveTime {
    let (end, _) = start.overflowing_add_signed(Duration::minutes(i64::from(minutes)));
    end
}

pub fn format_time_of_day(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Compute the `HH:MM` end time of something starting at `start` and lasting
/// `duration_minutes`. Both arguments arrive as user text.
pub fn compute_end_time(start: &str, duration_minutes: &str) -> Result<String, TimetableError> {
    let start = parse_time_of_day(start)?;
    let minutes = parse_duration_minutes(duration_minutes)?;
    Ok(format_time_of_day(end_time_after(start, minutes)))
}
