use crate::assignment::{Assignment, AssignmentStatus, DUE_DATE_FORMAT};
use crate::lecture::NewLecture;
use crate::persistence::{
    AssignmentStore, LoadOutcome, PersistenceError, timetable_needs_setup,
    write_timetable_placeholder,
};
use crate::timetable::{DAY_COUNT, Day, Timetable, weekday_title};
use chrono::{NaiveDate, Weekday};
use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::Path;

#[derive(Debug)]
pub enum SessionError {
    Io(io::Error),
    Persistence(PersistenceError),
    /// Stored assignments exist but could not be decoded. The session stops
    /// before saving so they are not overwritten.
    UnreadableAssignments(PersistenceError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Io(err) => write!(f, "console error: {err}"),
            SessionError::Persistence(err) => write!(f, "{err}"),
            SessionError::UnreadableAssignments(err) => write!(
                f,
                "stored assignments could not be read ({err}); fix or move the file and try again"
            ),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<io::Error> for SessionError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<PersistenceError> for SessionError {
    fn from(value: PersistenceError) -> Self {
        Self::Persistence(value)
    }
}

/// Line-by-line console dialogue over the timetable and assignment list.
/// End of input ends whichever loop is running.
pub struct Session<R, W> {
    input: R,
    output: W,
    today: Weekday,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, today: Weekday) -> Self {
        Self {
            input,
            output,
            today,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn confirm(&mut self, message: &str) -> io::Result<Option<bool>> {
        Ok(self
            .prompt(message)?
            .map(|answer| answer.eq_ignore_ascii_case("y")))
    }

    fn prompt_due_date(&mut self) -> io::Result<Option<String>> {
        loop {
            let Some(input) = self.prompt("Enter due date (YYYY-MM-DD): ")? else {
                return Ok(None);
            };
            if NaiveDate::parse_from_str(&input, DUE_DATE_FORMAT).is_ok() {
                return Ok(Some(input));
            }
            writeln!(self.output, "Please enter a date as YYYY-MM-DD")?;
        }
    }

    fn prompt_lecture_details(&mut self, name: String) -> io::Result<Option<NewLecture>> {
        let Some(start_time) = self.prompt("Start time (HH:MM): ")? else {
            return Ok(None);
        };
        let Some(duration_minutes) = self.prompt("Duration in minutes: ")? else {
            return Ok(None);
        };
        let Some(location) = self.prompt("Location: ")? else {
            return Ok(None);
        };
        let Some(instructor) = self.prompt("Instructor: ")? else {
            return Ok(None);
        };
        let Some(lecture_type) = self.prompt("Type (Theory/Lab/Other): ")? else {
            return Ok(None);
        };
        Ok(Some(NewLecture {
            name,
            start_time,
            duration_minutes,
            location,
            instructor,
            lecture_type,
        }))
    }

    /// Walk Monday to Friday collecting lectures until the user types `done`.
    pub fn setup_timetable(&mut self, timetable: &mut Timetable) -> io::Result<()> {
        writeln!(self.output, "Let's set up your weekly timetable!")?;
        for (day_index, weekday) in Timetable::WEEKDAYS.into_iter().enumerate() {
            writeln!(self.output, "\n{}'s Schedule:", weekday_title(weekday))?;
            loop {
                let Some(name) = self.prompt("\nEnter lecture name (or 'done' to finish day): ")?
                else {
                    return Ok(());
                };
                if name.eq_ignore_ascii_case("done") {
                    break;
                }
                let Some(request) = self.prompt_lecture_details(name)? else {
                    return Ok(());
                };
                if let Err(err) = timetable.add_lecture(day_index, request) {
                    writeln!(self.output, "Could not add lecture: {err}")?;
                    continue;
                }
                match self.confirm("Add another lecture? (y/n): ")? {
                    Some(true) => {}
                    Some(false) => break,
                    None => return Ok(()),
                }
            }
        }
        Ok(())
    }

    /// Print today's lectures and return the day index shown. Weekends fall
    /// back to Friday.
    pub fn show_today(&mut self, timetable: &Timetable) -> io::Result<usize> {
        let day_index = match Timetable::index_for_weekday(self.today) {
            Some(index) => index,
            None => {
                writeln!(self.output, "\nIt's the weekend! Showing Friday's schedule:")?;
                DAY_COUNT - 1
            }
        };
        let day = &timetable.days()[day_index];
        writeln!(self.output, "\n{}'s Lectures:", day.title())?;
        writeln!(self.output, "{}", day.lectures_text())?;
        Ok(day_index)
    }

    /// Ask about each lecture of the day. Labs yield a writeup and an
    /// execution, anything else a single assignment.
    pub fn record_assignments(
        &mut self,
        day: &Day,
        assignments: &mut Vec<Assignment>,
    ) -> io::Result<usize> {
        let before = assignments.len();
        for lecture in day.lectures() {
            let question = format!(
                "\nWas there an assignment given for {}? (y/n): ",
                lecture.name()
            );
            match self.confirm(&question)? {
                Some(true) => {}
                Some(false) => continue,
                None => break,
            }

            if lecture.is_lab() {
                let Some(writeup) = self.prompt("Enter writeup number: ")? else {
                    break;
                };
                let Some(due) = self.prompt_due_date()? else {
                    break;
                };
                assignments.push(Assignment::writeup(writeup, due));

                let Some(experiment) = self.prompt("Enter experiment number: ")? else {
                    break;
                };
                let Some(due) = self.prompt_due_date()? else {
                    break;
                };
                assignments.push(Assignment::execution(experiment, due));
            } else {
                let Some(name) = self.prompt("Enter assignment name: ")? else {
                    break;
                };
                let Some(due) = self.prompt_due_date()? else {
                    break;
                };
                assignments.push(Assignment::plain(name, due));
            }
        }
        Ok(assignments.len() - before)
    }

    pub fn mark_completed(&mut self, assignments: &mut [Assignment]) -> io::Result<()> {
        if assignments.is_empty() {
            return Ok(());
        }

        writeln!(self.output, "\nCurrent Assignments:")?;
        for (number, assignment) in assignments.iter().enumerate() {
            writeln!(
                self.output,
                "{}. {} - Due: {} - Status: {}",
                number + 1,
                assignment.display_name(),
                assignment.due_date,
                assignment.status
            )?;
        }

        loop {
            let Some(input) =
                self.prompt("\nEnter assignment number to mark as completed (or 'done'): ")?
            else {
                break;
            };
            if input.eq_ignore_ascii_case("done") {
                break;
            }
            match input.parse::<usize>() {
                Ok(number) if (1..=assignments.len()).contains(&number) => {
                    let assignment = &mut assignments[number - 1];
                    assignment.set_status(AssignmentStatus::Completed);
                    writeln!(
                        self.output,
                        "Marked '{}' as completed!",
                        assignment.display_name()
                    )?;
                }
                Ok(number) => writeln!(self.output, "There is no assignment {number}")?,
                Err(_) => writeln!(self.output, "Please enter a valid number or 'done'")?,
            }
        }
        Ok(())
    }

    pub fn print_pending(&mut self, assignments: &[Assignment]) -> io::Result<()> {
        let pending: Vec<&Assignment> = assignments.iter().filter(|a| !a.is_completed()).collect();
        if pending.is_empty() {
            writeln!(self.output, "\nNo pending assignments!")?;
            return Ok(());
        }
        writeln!(self.output, "\nPending Assignments:")?;
        for assignment in pending {
            writeln!(
                self.output,
                "- {} (Due: {})",
                assignment.display_name(),
                assignment.due_date
            )?;
        }
        Ok(())
    }

    /// One full pass: load stored assignments, timetable setup when the
    /// sentinel file calls for it, then today's lectures, new assignments,
    /// completions, save and the pending list. Undecodable stored data ends
    /// the pass before anything is written.
    pub fn run(
        &mut self,
        timetable_path: &Path,
        store: &dyn AssignmentStore,
    ) -> Result<Vec<Assignment>, SessionError> {
        let mut assignments = match store.load_assignments()? {
            LoadOutcome::Loaded(assignments) => assignments,
            LoadOutcome::Missing => Vec::new(),
            LoadOutcome::Unreadable(err) => {
                log::warn!("refusing to overwrite unreadable assignment data: {err}");
                return Err(SessionError::UnreadableAssignments(err));
            }
        };

        let mut timetable = Timetable::new();
        if timetable_needs_setup(timetable_path)? {
            self.setup_timetable(&mut timetable)?;
            write_timetable_placeholder(timetable_path)?;
            log::debug!(
                "timetable set up with {} lectures",
                timetable.lecture_count()
            );
        }

        let day_index = self.show_today(&timetable)?;
        self.record_assignments(&timetable.days()[day_index], &mut assignments)?;
        self.mark_completed(&mut assignments)?;

        store.save_assignments(&assignments)?;
        self.print_pending(&assignments)?;
        Ok(assignments)
    }
}
