use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;

pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentKind {
    Plain,
    Writeup,
    Execution,
}

impl AssignmentKind {
    /// Label placed in front of the base name, if any.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            AssignmentKind::Plain => None,
            AssignmentKind::Writeup => Some("Writeup"),
            AssignmentKind::Execution => Some("Execution"),
        }
    }

    /// Split a display name such as `"Writeup 3"` back into kind and base name.
    /// Only the leading label followed by a single space is recognised.
    pub fn infer_from_display_name(name: &str) -> (Self, &str) {
        for kind in [AssignmentKind::Writeup, AssignmentKind::Execution] {
            if let Some(label) = kind.label() {
                if let Some(base) = name
                    .strip_prefix(label)
                    .and_then(|rest| rest.strip_prefix(' '))
                {
                    return (kind, base);
                }
            }
        }
        (AssignmentKind::Plain, name)
    }
}

/// Stored as the text `"Not Started"` or `"Completed"`. Any other text is
/// rejected when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AssignmentStatus {
    #[default]
    NotStarted,
    Completed,
}

impl AssignmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::NotStarted => "Not Started",
            AssignmentStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown assignment status '{}'", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for AssignmentStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Not Started" => Ok(AssignmentStatus::NotStarted),
            "Completed" => Ok(AssignmentStatus::Completed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl Serialize for AssignmentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AssignmentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

/// A gradeable item. Position in the owning list is its only identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub kind: AssignmentKind,
    pub base_name: String,
    /// ISO `YYYY-MM-DD` text, kept verbatim.
    pub due_date: String,
    pub status: AssignmentStatus,
}

/// Flat view of an assignment with the kind folded into the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub name: String,
    pub due_date: String,
    pub status: AssignmentStatus,
}

impl Assignment {
    pub fn new(
        kind: AssignmentKind,
        base_name: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            base_name: base_name.into(),
            due_date: due_date.into(),
            status: AssignmentStatus::NotStarted,
        }
    }

    pub fn plain(base_name: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self::new(AssignmentKind::Plain, base_name, due_date)
    }

    pub fn writeup(base_name: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self::new(AssignmentKind::Writeup, base_name, due_date)
    }

    pub fn execution(base_name: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self::new(AssignmentKind::Execution, base_name, due_date)
    }

    pub fn with_status(mut self, status: AssignmentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn set_status(&mut self, status: AssignmentStatus) {
        self.status = status;
    }

    pub fn is_completed(&self) -> bool {
        self.status == AssignmentStatus::Completed
    }

    pub fn display_name(&self) -> String {
        match self.kind.label() {
            Some(label) => format!("{label} {}", self.base_name),
            None => self.base_name.clone(),
        }
    }

    /// `None` when the stored text is not a valid `YYYY-MM-DD` date.
    pub fn due_date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.due_date.trim(), DUE_DATE_FORMAT).ok()
    }

    pub fn to_record(&self) -> AssignmentRecord {
        AssignmentRecord {
            name: self.display_name(),
            due_date: self.due_date.clone(),
            status: self.status,
        }
    }
}

impl From<AssignmentRecord> for Assignment {
    fn from(record: AssignmentRecord) -> Self {
        let (kind, base_name) = AssignmentKind::infer_from_display_name(&record.name);
        Self {
            kind,
            base_name: base_name.to_string(),
            due_date: record.due_date,
            status: record.status,
        }
    }
}
