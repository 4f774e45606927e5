use chrono::{NaiveTime, Weekday};
use timetabler::timetable::NO_LECTURES;
use timetabler::{NewLecture, Timetable, TimetableError};

fn lecture(name: &str, start: &str, duration: &str, lecture_type: &str) -> NewLecture {
    NewLecture {
        name: name.into(),
        start_time: start.into(),
        duration_minutes: duration.into(),
        location: "Room 1".into(),
        instructor: "Dr. X".into(),
        lecture_type: lecture_type.into(),
    }
}

#[test]
fn new_timetable_has_five_weekdays_in_order() {
    let timetable = Timetable::new();
    let names: Vec<&str> = timetable.days().iter().map(|d| d.name()).collect();
    assert_eq!(
        names,
        ["monday", "tuesday", "wednesday", "thursday", "friday"]
    );
    assert_eq!(timetable.days()[4].weekday(), Weekday::Fri);
    assert_eq!(timetable.lecture_count(), 0);
}

#[test]
fn empty_day_renders_placeholder_text() {
    let timetable = Timetable::new();
    for idx in 0..5 {
        assert_eq!(timetable.lectures_text(idx).unwrap(), NO_LECTURES);
    }
    assert_eq!(timetable.lectures_text(0).unwrap(), "No lectures scheduled");
}

#[test]
fn add_lecture_computes_end_time() {
    let mut timetable = Timetable::new();
    let added = timetable
        .add_lecture(0, lecture("Algorithms", "09:00", "50", "Theory"))
        .unwrap();
    assert_eq!(added.name(), "Algorithms");
    assert_eq!(added.start_time(), NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    assert_eq!(added.end_time(), NaiveTime::from_hms_opt(9, 50, 0).unwrap());
    assert_eq!(timetable.days()[0].lectures().len(), 1);
}

#[test]
fn lectures_text_uses_exact_paragraph_format() {
    let mut timetable = Timetable::new();
    timetable
        .add_lecture(0, lecture("Algorithms", "09:00", "50", "Theory"))
        .unwrap();
    assert_eq!(
        timetable.lectures_text(0).unwrap(),
        "Algorithms (Theory)\nTime: 09:00 - 09:50\nLocation: Room 1\nInstructor: Dr. X\n"
    );
}

#[test]
fn lectures_text_keeps_insertion_order_with_blank_line_between() {
    let mut timetable = Timetable::new();
    timetable
        .add_lecture(2, lecture("Networks Lab", "14:00", "120", "Lab"))
        .unwrap();
    timetable
        .add_lecture(2, lecture("Algorithms", "09:00", "50", "Theory"))
        .unwrap();

    let expected = "Networks Lab (Lab)\nTime: 14:00 - 16:00\nLocation: Room 1\nInstructor: Dr. X\n\
                    \n\
                    Algorithms (Theory)\nTime: 09:00 - 09:50\nLocation: Room 1\nInstructor: Dr. X\n";
    assert_eq!(timetable.lectures_text(2).unwrap(), expected);
    assert_eq!(timetable.lectures_text(1).unwrap(), NO_LECTURES);
}

#[test]
fn out_of_range_day_fails_without_mutation() {
    let mut timetable = Timetable::new();
    let before = timetable.clone();

    let err = timetable
        .add_lecture(5, lecture("Ghost", "09:00", "50", "Theory"))
        .unwrap_err();
    assert_eq!(err, TimetableError::DayOutOfRange { index: 5 });
    assert!(!err.is_parse_error());
    assert_eq!(timetable, before);

    assert_eq!(
        timetable.lectures_text(7).unwrap_err(),
        TimetableError::DayOutOfRange { index: 7 }
    );
    assert!(timetable.day(5).is_err());
}

#[test]
fn parse_errors_propagate_and_leave_day_untouched() {
    let mut timetable = Timetable::new();
    let err = timetable
        .add_lecture(1, lecture("Broken", "25:00", "50", "Theory"))
        .unwrap_err();
    assert!(err.is_parse_error());
    let err = timetable
        .add_lecture(1, lecture("Broken", "10:00", "an hour", "Theory"))
        .unwrap_err();
    assert!(matches!(err, TimetableError::InvalidDuration { .. }));
    assert_eq!(timetable.lecture_count(), 0);
}

#[test]
fn lab_detection_ignores_case() {
    let mut timetable = Timetable::new();
    timetable
        .add_lecture(3, lecture("Chemistry", "11:00", "60", "LAB"))
        .unwrap();
    timetable
        .add_lecture(3, lecture("History", "12:00", "60", "Theory"))
        .unwrap();
    let lectures = timetable.days()[3].lectures();
    assert!(lectures[0].is_lab());
    assert!(!lectures[1].is_lab());
}

#[test]
fn weekday_maps_to_index_and_weekend_has_none() {
    assert_eq!(Timetable::index_for_weekday(Weekday::Mon), Some(0));
    assert_eq!(Timetable::index_for_weekday(Weekday::Fri), Some(4));
    assert_eq!(Timetable::index_for_weekday(Weekday::Sat), None);
    assert_eq!(Timetable::index_for_weekday(Weekday::Sun), None);
}

#[test]
fn start_time_is_rendered_zero_padded() {
    let mut timetable = Timetable::new();
    timetable
        .add_lecture(0, lecture("Seminar", "9:05", "25", "Other"))
        .unwrap();
    assert!(
        timetable
            .lectures_text(0)
            .unwrap()
            .contains("Time: 09:05 - 09:30\n")
    );
}
