use std::collections::HashSet;

use serde::Serialize;

use crate::model::day::day_id_for;
use crate::model::slot::SlotCatalog;
use crate::model::task::Task;
use crate::model::venture::Venture;

/// Structured result of a snapshot consistency check, suitable for JSON
/// output.
#[derive(Debug, Default, Serialize)]
pub struct CheckResult {
    pub valid: bool,
    pub errors: Vec<CheckError>,
    pub warnings: Vec<CheckWarning>,
}

/// A consistency error (something that should be fixed).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum CheckError {
    /// Exactly one of focus date / focus slot is set.
    #[serde(rename = "half_scheduled")]
    HalfScheduled { task_id: String },
    /// The same task id appears more than once in the snapshot.
    #[serde(rename = "duplicate_id")]
    DuplicateId { task_id: String },
    /// A venture reference that resolves to no known venture.
    #[serde(rename = "dangling_venture")]
    DanglingVenture { task_id: String, venture_id: String },
    /// Effort estimates are hours and can't be negative.
    #[serde(rename = "negative_effort")]
    NegativeEffort { task_id: String, est_effort: f64 },
}

/// A consistency warning (non-critical issue).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum CheckWarning {
    /// Scheduled into a slot key the catalog doesn't know. Tolerated at
    /// runtime (the default capacity applies) but worth surfacing.
    #[serde(rename = "unknown_slot")]
    UnknownSlot { task_id: String, slot: String },
    /// Finished or cancelled task still occupying a cell.
    #[serde(rename = "terminal_still_scheduled")]
    TerminalStillScheduled { task_id: String },
    /// Stored day reference disagrees with the focus-date derivation.
    #[serde(rename = "day_id_mismatch")]
    DayIdMismatch {
        task_id: String,
        expected: String,
        actual: String,
    },
}

/// Validate a task snapshot and return structured results.
///
/// This is a read-only pass — it does not modify anything.
///
/// Checks performed:
/// 1. Focus date and slot are set together or not at all
/// 2. No duplicate task ids
/// 3. Venture references resolve (when a venture list is supplied)
/// 4. No negative effort estimates
/// 5. Warnings for unknown slot keys, terminal tasks still scheduled,
///    and day references that disagree with the focus date
pub fn check_snapshot(
    tasks: &[Task],
    catalog: &SlotCatalog,
    ventures: Option<&[Venture]>,
) -> CheckResult {
    let mut result = CheckResult::default();

    let mut seen: HashSet<&str> = HashSet::new();
    for task in tasks {
        if !seen.insert(task.id.as_str()) {
            result.errors.push(CheckError::DuplicateId {
                task_id: task.id.clone(),
            });
        }
    }

    for task in tasks {
        check_task(task, catalog, ventures, &mut result);
    }

    result.valid = result.errors.is_empty();
    result
}

fn check_task(
    task: &Task,
    catalog: &SlotCatalog,
    ventures: Option<&[Venture]>,
    result: &mut CheckResult,
) {
    if task.focus_date.is_some() != task.focus_slot.is_some() {
        result.errors.push(CheckError::HalfScheduled {
            task_id: task.id.clone(),
        });
    }

    if let Some(effort) = task.est_effort {
        if effort < 0.0 {
            result.errors.push(CheckError::NegativeEffort {
                task_id: task.id.clone(),
                est_effort: effort,
            });
        }
    }

    if let (Some(ventures), Some(venture_id)) = (ventures, task.venture_id.as_deref()) {
        if !ventures.iter().any(|v| v.id == venture_id) {
            result.errors.push(CheckError::DanglingVenture {
                task_id: task.id.clone(),
                venture_id: venture_id.to_string(),
            });
        }
    }

    if let Some((date, slot)) = task.focus_cell() {
        if !catalog.is_valid_slot(slot) {
            result.warnings.push(CheckWarning::UnknownSlot {
                task_id: task.id.clone(),
                slot: slot.to_string(),
            });
        }
        if task.status.is_terminal() {
            result.warnings.push(CheckWarning::TerminalStillScheduled {
                task_id: task.id.clone(),
            });
        }
        if let Some(actual) = task.day_id.as_deref() {
            let expected = day_id_for(date);
            if actual != expected {
                result.warnings.push(CheckWarning::DayIdMismatch {
                    task_id: task.id.clone(),
                    expected,
                    actual: actual.to_string(),
                });
            }
        }
    }
}
