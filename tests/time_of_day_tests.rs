use chrono::NaiveTime;
use timetabler::TimetableError;
use timetabler::time_of_day::{compute_end_time, end_time_after, parse_duration_minutes};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn end_time_adds_duration_within_day() {
    assert_eq!(compute_end_time("09:00", "50").unwrap(), "09:50");
    assert_eq!(compute_end_time("10:30", "90").unwrap(), "12:00");
    assert_eq!(compute_end_time("14:15", "0").unwrap(), "14:15");
}

#[test]
fn end_time_wraps_past_midnight() {
    assert_eq!(compute_end_time("23:50", "20").unwrap(), "00:10");
    assert_eq!(compute_end_time("22:00", "1500").unwrap(), "23:00");
    assert_eq!(end_time_after(t(23, 59), 1), t(0, 0));
}

#[test]
fn single_digit_hours_and_padding_are_accepted() {
    assert_eq!(compute_end_time("9:05", " 10 ").unwrap(), "09:15");
}

#[test]
fn malformed_start_time_is_a_parse_error() {
    for bad in ["", "9am", "24:00", "12:60", "noon"] {
        let err = compute_end_time(bad, "30").unwrap_err();
        assert_eq!(
            err,
            TimetableError::InvalidTime {
                input: bad.to_string()
            }
        );
        assert!(err.is_parse_error());
    }
}

#[test]
fn non_integer_or_negative_duration_is_a_parse_error() {
    for bad in ["", "1.5", "ten", "-10"] {
        let err = compute_end_time("09:00", bad).unwrap_err();
        assert!(matches!(err, TimetableError::InvalidDuration { .. }), "{bad}");
    }
    assert_eq!(parse_duration_minutes("45"), Ok(45));
}
