use chrono::NaiveDate;
use tracing::debug;

use crate::model::day::day_id_for;
use crate::model::task::Task;
use crate::store::{FocusChange, StoreError, TaskStore};

/// Error type for scheduling operations
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("no tasks selected")]
    EmptySelection,
    #[error("a target date is required")]
    MissingDate,
    #[error("a target slot is required")]
    MissingSlot,
    #[error("task not found: {0}")]
    NotFound(String),
    /// The store refused the batch. The batch is all-or-nothing, so every
    /// id in it is reported as failed.
    #[error("persistence rejected the batch: {source}")]
    Persistence {
        failed: Vec<String>,
        source: StoreError,
    },
}

/// Outcome of a schedule batch, for the host's notification surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleReceipt {
    pub scheduled_count: usize,
}

/// Outcome of an unschedule/clear, for the host's notification surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearReceipt {
    pub cleared_count: usize,
}

/// Bind every task in `ids` to the `(date, slot)` cell and attach the
/// owning day record.
///
/// `date` and `slot` arrive as the host's selection state, so either may
/// still be unset; that is a validation error reported before the store is
/// touched. The batch is all-or-nothing: either every task ends up in the
/// cell or none do.
pub fn schedule_tasks(
    store: &mut dyn TaskStore,
    ids: &[String],
    date: Option<NaiveDate>,
    slot: Option<&str>,
) -> Result<ScheduleReceipt, ScheduleError> {
    if ids.is_empty() {
        return Err(ScheduleError::EmptySelection);
    }
    let date = date.ok_or(ScheduleError::MissingDate)?;
    let slot = slot.ok_or(ScheduleError::MissingSlot)?;

    let snapshot = fetch(store, ids)?;
    for id in ids {
        if !snapshot.iter().any(|t| &t.id == id) {
            return Err(ScheduleError::NotFound(id.clone()));
        }
    }

    let day_id = day_id_for(date);
    let changes: Vec<FocusChange> = ids
        .iter()
        .map(|id| FocusChange::schedule(id, date, slot, &day_id))
        .collect();
    apply(store, &changes)?;

    debug!(count = ids.len(), date = %date, slot, "scheduled batch");
    Ok(ScheduleReceipt {
        scheduled_count: ids.len(),
    })
}

/// Remove a task from its cell: focus date, slot, and day reference are
/// cleared together. Idempotent; clearing an unscheduled task reports
/// zero cleared and leaves the store untouched.
pub fn unschedule_task(
    store: &mut dyn TaskStore,
    id: &str,
) -> Result<ClearReceipt, ScheduleError> {
    let ids = [id.to_string()];
    let snapshot = fetch(store, &ids)?;
    let task = snapshot
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| ScheduleError::NotFound(id.to_string()))?;

    if !task.is_scheduled() && task.focus_slot.is_none() {
        return Ok(ClearReceipt { cleared_count: 0 });
    }

    apply(store, &[FocusChange::clear(id)])?;
    debug!(task_id = id, "unscheduled task");
    Ok(ClearReceipt { cleared_count: 1 })
}

/// Unschedule every task currently in the `(date, slot)` cell. An empty
/// cell is not an error; the receipt just reports zero cleared.
pub fn clear_slot(
    store: &mut dyn TaskStore,
    date: NaiveDate,
    slot: &str,
) -> Result<ClearReceipt, ScheduleError> {
    let snapshot = fetch(store, &[])?;
    let ids: Vec<String> = snapshot
        .iter()
        .filter(|t| t.focus_cell() == Some((date, slot)))
        .map(|t| t.id.clone())
        .collect();

    if ids.is_empty() {
        return Ok(ClearReceipt { cleared_count: 0 });
    }

    let changes: Vec<FocusChange> = ids.iter().map(|id| FocusChange::clear(id)).collect();
    apply(store, &changes)?;
    debug!(count = ids.len(), date = %date, slot, "cleared slot");
    Ok(ClearReceipt {
        cleared_count: ids.len(),
    })
}

fn fetch(store: &dyn TaskStore, batch: &[String]) -> Result<Vec<Task>, ScheduleError> {
    store.tasks().map_err(|source| ScheduleError::Persistence {
        failed: batch.to_vec(),
        source,
    })
}

fn apply(store: &mut dyn TaskStore, changes: &[FocusChange]) -> Result<(), ScheduleError> {
    store
        .apply_focus(changes)
        .map_err(|source| ScheduleError::Persistence {
            failed: changes.iter().map(|c| c.task_id.clone()).collect(),
            source,
        })
}
