use chrono::NaiveDate;
use serde::Serialize;

/// Urgency bucket for a due date, relative to an injected `today`.
///
/// The payload is the whole-day distance: days overdue for `Overdue`,
/// days until due for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "bucket", content = "days", rename_all = "snake_case")]
pub enum Urgency {
    Overdue(i64),
    DueToday,
    DueTomorrow,
    DueSoon(i64),
    DueThisWeek(i64),
}

impl Urgency {
    /// Buckets that drive strong visual emphasis (ring highlight, filled
    /// button) in consuming views.
    pub fn is_urgent(self) -> bool {
        matches!(
            self,
            Urgency::Overdue(_) | Urgency::DueToday | Urgency::DueTomorrow
        )
    }
}

/// Classify a due date against `today`. More than a week out, or no due
/// date at all, means no badge, hence `None`.
///
/// `today` is always a parameter; this function never reads the clock.
pub fn classify(due_date: Option<NaiveDate>, today: NaiveDate) -> Option<Urgency> {
    let due = due_date?;
    let days = (due - today).num_days();
    let bucket = match days {
        d if d < 0 => Urgency::Overdue(-d),
        0 => Urgency::DueToday,
        1 => Urgency::DueTomorrow,
        2..=3 => Urgency::DueSoon(days),
        4..=7 => Urgency::DueThisWeek(days),
        _ => return None,
    };
    Some(bucket)
}
