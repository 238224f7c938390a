//! Activity domain model.
//!
//! # Responsibility
//! - Define the canonical learning activity record consumed by the pipeline.
//! - Provide exhaustive presentation tables keyed by the closed enums.
//!
//! # Invariants
//! - `id` is stable and unique within one store.
//! - `progress` is only surfaced while `status == InProgress`.
//! - `submissions` and `total_students` are either both set or both absent.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier of one activity.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ActivityId = String;

/// Upper bound for `Activity::progress`.
pub const MAX_PROGRESS: u8 = 100;

/// Kind of learner-facing work or event.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityType {
    /// Live session with a start time.
    OnlineClass,
    /// Graded work with a due date.
    Assignment,
    Quiz,
    Discussion,
}

impl ActivityType {
    /// Every variant in filter-bar display order.
    pub const ALL: [ActivityType; 4] = [
        ActivityType::OnlineClass,
        ActivityType::Assignment,
        ActivityType::Quiz,
        ActivityType::Discussion,
    ];

    /// Singular label shown on activity cards.
    pub fn label(self) -> &'static str {
        match self {
            Self::OnlineClass => "Online Class",
            Self::Assignment => "Assignment",
            Self::Quiz => "Quiz",
            Self::Discussion => "Discussion",
        }
    }

    /// Plural label shown on filter chips.
    pub fn filter_label(self) -> &'static str {
        match self {
            Self::OnlineClass => "Classes",
            Self::Assignment => "Assignments",
            Self::Quiz => "Quizzes",
            Self::Discussion => "Discussions",
        }
    }

    /// Wire name, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnlineClass => "online-class",
            Self::Assignment => "assignment",
            Self::Quiz => "quiz",
            Self::Discussion => "discussion",
        }
    }
}

/// Learner progress state of one activity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityStatus {
    NotStarted,
    InProgress,
    Completed,
    /// Deadline passed without completion.
    Overdue,
}

impl ActivityStatus {
    /// Every variant in filter-bar display order.
    pub const ALL: [ActivityStatus; 4] = [
        ActivityStatus::NotStarted,
        ActivityStatus::InProgress,
        ActivityStatus::Completed,
        ActivityStatus::Overdue,
    ];

    /// Urgency rank used by status ordering: lower sorts first.
    pub fn sort_priority(self) -> u8 {
        match self {
            Self::Overdue => 0,
            Self::InProgress => 1,
            Self::NotStarted => 2,
            Self::Completed => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Overdue => "Overdue",
        }
    }

    /// Call-to-action label for the card button.
    pub fn action_label(self) -> &'static str {
        match self {
            Self::NotStarted => "Start",
            Self::InProgress => "Continue",
            Self::Completed => "Review",
            Self::Overdue => "Submit Now",
        }
    }

    /// Wire name, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
        }
    }
}

/// Validation failures for producer-supplied activity records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityValidationError {
    EmptyId,
    ProgressOutOfRange { progress: u8 },
    /// Exactly one of `submissions` / `total_students` is set.
    UnpairedSubmissions,
}

impl Display for ActivityValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "activity id cannot be blank"),
            Self::ProgressOutOfRange { progress } => {
                write!(f, "progress ({progress}) must be within 0..={MAX_PROGRESS}")
            }
            Self::UnpairedSubmissions => write!(
                f,
                "submissions and totalStudents must be set together or not at all"
            ),
        }
    }
}

impl Error for ActivityValidationError {}

/// Canonical learning activity record.
///
/// Type-specific fields are optional so one shape covers classes,
/// assignments, quizzes and discussions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    pub title: String,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub subject: String,
    pub status: ActivityStatus,
    pub description: String,
    #[serde(
        default,
        with = "optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<DateTime<Utc>>,
    /// Scheduled start, meaningful for online classes.
    #[serde(
        default,
        with = "optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time: Option<DateTime<Utc>>,
    /// Free-form length such as `"90 min"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Percentage in `0..=100`; only meaningful while in progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submissions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_students: Option<u32>,
}

impl Activity {
    /// Creates an activity with empty free text and no optional fields.
    pub fn new(
        id: impl Into<ActivityId>,
        kind: ActivityType,
        status: ActivityStatus,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            subject: String::new(),
            status,
            description: String::new(),
            due_date: None,
            start_time: None,
            duration: None,
            progress: None,
            points: None,
            instructor: None,
            submissions: None,
            total_students: None,
        }
    }

    /// Checks producer-side record invariants.
    pub fn validate(&self) -> Result<(), ActivityValidationError> {
        if self.id.trim().is_empty() {
            return Err(ActivityValidationError::EmptyId);
        }
        if let Some(progress) = self.progress {
            if progress > MAX_PROGRESS {
                return Err(ActivityValidationError::ProgressOutOfRange { progress });
            }
        }
        if self.submissions.is_some() != self.total_students.is_some() {
            return Err(ActivityValidationError::UnpairedSubmissions);
        }
        Ok(())
    }

    /// Returns progress only when the activity is in progress.
    pub fn visible_progress(&self) -> Option<u8> {
        match self.status {
            ActivityStatus::InProgress => self.progress,
            _ => None,
        }
    }

    /// Returns `(submissions, total_students)` when both are present.
    pub fn responses(&self) -> Option<(u32, u32)> {
        self.submissions.zip(self.total_students)
    }
}

/// Parses the timestamp spellings accepted by the store.
///
/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM[:SS[.fff]]` read as UTC, and
/// date-only `YYYY-MM-DD` read as UTC midnight.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

mod optional_timestamp {
    use super::{format_timestamp, parse_timestamp};
    use chrono::{DateTime, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(at) => serializer.serialize_str(&format_timestamp(at)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|text| {
            parse_timestamp(&text)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp `{text}`")))
        })
        .transpose()
    }
}

/// Formats a timestamp the way the wire format writes it.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}
