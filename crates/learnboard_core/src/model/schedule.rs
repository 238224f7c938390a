//! Deadline and start-time classification for activity cards.
//!
//! # Responsibility
//! - Classify an activity's timing relative to a caller-supplied `now`.
//! - Produce the short human-readable timing line shown on cards.
//!
//! # Invariants
//! - Classification is a pure function of `(activity, now)`.
//! - Activities with neither a due date nor a start time have no info.

use crate::model::activity::{Activity, ActivityType};
use chrono::{DateTime, Duration, Utc};
use std::fmt::{Display, Formatter};

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;
const MINUTES_PER_MONTH: i64 = 30 * MINUTES_PER_DAY;
const ALMOST_TWO_DAYS_MINUTES: i64 = 42 * MINUTES_PER_HOUR;
const MONTHS_PER_YEAR: i64 = 12;
const DUE_SOON_HOURS: i64 = 72;

/// Visual urgency bucket for a timing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Urgency {
    Normal,
    Soon,
    Critical,
}

/// Timing classification of one activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueKind {
    /// Class start time is in the past.
    Started,
    /// Class starts in less than an hour.
    StartsInMinutes(i64),
    /// Class starts within a day.
    StartsSoon,
    StartsOn,
    /// Due date is in the past.
    Overdue,
    /// Due within a day.
    DueInHours(i64),
    /// Due within three days.
    DueSoon,
    DueOn,
}

/// Timing line for one activity card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueInfo {
    pub kind: DueKind,
    pub urgency: Urgency,
    /// The instant being described (class start or due date).
    pub at: DateTime<Utc>,
    now: DateTime<Utc>,
}

impl DueInfo {
    pub fn is_overdue(&self) -> bool {
        matches!(self.kind, DueKind::Overdue)
    }

    pub fn is_upcoming(&self) -> bool {
        self.at > self.now
    }
}

impl Display for DueInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let distance = humanize_distance(self.at - self.now);
        match self.kind {
            DueKind::Started => write!(f, "Started {distance} ago"),
            DueKind::StartsInMinutes(minutes) => write!(f, "Starts in {minutes} minutes"),
            DueKind::StartsSoon => write!(f, "Starts in {distance}"),
            DueKind::StartsOn => write!(f, "Starts on {}", format_card_date(&self.at)),
            DueKind::Overdue => write!(f, "Due {distance} ago"),
            DueKind::DueInHours(hours) => write!(f, "Due in {hours} hours"),
            DueKind::DueSoon => write!(f, "Due in {distance}"),
            DueKind::DueOn => write!(f, "Due {}", format_card_date(&self.at)),
        }
    }
}

/// Classifies activity timing relative to `now`.
///
/// Online classes with a start time are described by their start; every
/// other activity is described by its due date. Returns `None` when the
/// relevant instant is absent.
pub fn due_info(activity: &Activity, now: DateTime<Utc>) -> Option<DueInfo> {
    if activity.kind == ActivityType::OnlineClass {
        if let Some(start) = activity.start_time {
            let (kind, urgency) = classify_start(start - now);
            return Some(DueInfo {
                kind,
                urgency,
                at: start,
                now,
            });
        }
    }

    let due = activity.due_date?;
    let (kind, urgency) = classify_due(due - now);
    Some(DueInfo {
        kind,
        urgency,
        at: due,
        now,
    })
}

fn classify_start(until: Duration) -> (DueKind, Urgency) {
    let minutes = until.num_minutes();
    if until < Duration::zero() {
        (DueKind::Started, Urgency::Normal)
    } else if minutes < MINUTES_PER_HOUR {
        (DueKind::StartsInMinutes(round_div(until.num_seconds(), 60)), Urgency::Critical)
    } else if minutes < MINUTES_PER_DAY {
        (DueKind::StartsSoon, Urgency::Soon)
    } else {
        (DueKind::StartsOn, Urgency::Normal)
    }
}

fn classify_due(until: Duration) -> (DueKind, Urgency) {
    let minutes = until.num_minutes();
    if until < Duration::zero() {
        (DueKind::Overdue, Urgency::Critical)
    } else if minutes < MINUTES_PER_DAY {
        (DueKind::DueInHours(round_div(until.num_seconds(), 3600)), Urgency::Critical)
    } else if minutes < DUE_SOON_HOURS * MINUTES_PER_HOUR {
        (DueKind::DueSoon, Urgency::Soon)
    } else {
        (DueKind::DueOn, Urgency::Normal)
    }
}

fn round_div(value: i64, divisor: i64) -> i64 {
    (value + divisor / 2).div_euclid(divisor)
}

fn format_card_date(at: &DateTime<Utc>) -> String {
    at.format("%b %d, %Y • %-I:%M %p").to_string()
}

/// Relative wording for a span, direction-agnostic.
///
/// Follows the `formatDistance` buckets of date-fns: spans round to whole
/// minutes, 45 minutes and up read as hours, 42 hours and up as days, and
/// 30 days and up as months. Months are counted as 30 days.
fn humanize_distance(span: Duration) -> String {
    let minutes = round_div(span.num_seconds().abs(), 60);
    if minutes == 0 {
        return "less than a minute".to_string();
    }
    if minutes < 45 {
        return plural(minutes, "minute");
    }
    if minutes < 90 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_PER_DAY {
        return format!("about {}", plural(round_div(minutes, MINUTES_PER_HOUR), "hour"));
    }
    if minutes < ALMOST_TWO_DAYS_MINUTES {
        return "1 day".to_string();
    }
    if minutes < MINUTES_PER_MONTH {
        return plural(round_div(minutes, MINUTES_PER_DAY), "day");
    }
    if minutes < 2 * MINUTES_PER_MONTH {
        return format!("about {}", plural(round_div(minutes, MINUTES_PER_MONTH), "month"));
    }

    let months = minutes / MINUTES_PER_MONTH;
    if months < MONTHS_PER_YEAR {
        return plural(round_div(minutes, MINUTES_PER_MONTH), "month");
    }
    let years = months / MONTHS_PER_YEAR;
    match months % MONTHS_PER_YEAR {
        0..=2 => format!("about {}", plural(years, "year")),
        3..=8 => format!("over {}", plural(years, "year")),
        _ => format!("almost {}", plural(years + 1, "year")),
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::{humanize_distance, round_div};
    use chrono::Duration;

    #[test]
    fn humanize_distance_picks_coarsest_unit() {
        assert_eq!(humanize_distance(Duration::seconds(20)), "less than a minute");
        assert_eq!(humanize_distance(Duration::minutes(1)), "1 minute");
        assert_eq!(humanize_distance(Duration::minutes(44)), "44 minutes");
        assert_eq!(humanize_distance(Duration::hours(3)), "about 3 hours");
        assert_eq!(humanize_distance(Duration::days(2)), "2 days");
        assert_eq!(humanize_distance(Duration::days(65)), "2 months");
    }

    #[test]
    fn humanize_distance_matches_relative_time_buckets() {
        assert_eq!(humanize_distance(Duration::seconds(90)), "2 minutes");
        assert_eq!(humanize_distance(Duration::minutes(-45)), "about 1 hour");
        assert_eq!(humanize_distance(Duration::minutes(89)), "about 1 hour");
        assert_eq!(humanize_distance(Duration::minutes(90)), "about 2 hours");
        assert_eq!(humanize_distance(Duration::hours(24)), "1 day");
        assert_eq!(humanize_distance(Duration::hours(41)), "1 day");
        assert_eq!(humanize_distance(Duration::hours(42)), "2 days");
        assert_eq!(humanize_distance(Duration::days(30)), "about 1 month");
        assert_eq!(humanize_distance(Duration::days(59)), "about 2 months");
        assert_eq!(humanize_distance(Duration::days(400)), "about 1 year");
        assert_eq!(humanize_distance(Duration::days(480)), "over 1 year");
        assert_eq!(humanize_distance(Duration::days(700)), "almost 2 years");
    }

    #[test]
    fn round_div_rounds_half_up() {
        assert_eq!(round_div(90, 60), 2);
        assert_eq!(round_div(89, 60), 1);
        assert_eq!(round_div(0, 60), 0);
    }
}
