use chrono::{Duration, NaiveDate};

/// Identifier of the day record that owns a scheduled task.
///
/// The derivation is conventional, not a backend-issued foreign key:
/// `"day_"` followed by the ISO date.
pub fn day_id_for(date: NaiveDate) -> String {
    format!("day_{}", date.format("%Y-%m-%d"))
}

/// The seven consecutive dates starting at `start`, for weekly views.
pub fn week_of(start: NaiveDate) -> Vec<NaiveDate> {
    (0..7).map(|i| start + Duration::days(i)).collect()
}
