pub mod memory;
pub mod json;

pub use json::JsonStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::model::task::Task;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unknown task: {0}")]
    UnknownTask(String),
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse task snapshot: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("store rejected the batch: {0}")]
    Rejected(String),
}

/// The cell half of a focus change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusCell {
    pub date: NaiveDate,
    pub slot: String,
    pub day_id: String,
}

/// One task's focus transition within a batch. `cell: Some` schedules the
/// task into a cell; `cell: None` clears date, slot, and day reference
/// together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusChange {
    pub task_id: String,
    pub cell: Option<FocusCell>,
}

impl FocusChange {
    pub fn schedule(task_id: &str, date: NaiveDate, slot: &str, day_id: &str) -> Self {
        FocusChange {
            task_id: task_id.to_string(),
            cell: Some(FocusCell {
                date,
                slot: slot.to_string(),
                day_id: day_id.to_string(),
            }),
        }
    }

    pub fn clear(task_id: &str) -> Self {
        FocusChange {
            task_id: task_id.to_string(),
            cell: None,
        }
    }
}

/// The persistence boundary. Hosts adapt this to whatever transport they
/// own (REST, RPC, or in-process); the crate ships an in-memory store and
/// a JSON snapshot store.
///
/// `apply_focus` is all-or-nothing: implementations must validate the
/// entire batch before mutating anything, so a returned error means no
/// task changed. Concurrent writers are not coordinated here; the store
/// is the arbiter of last-write-wins.
pub trait TaskStore {
    /// Current snapshot of all tasks.
    fn tasks(&self) -> Result<Vec<Task>, StoreError>;

    /// Apply a batch of focus changes atomically.
    fn apply_focus(&mut self, changes: &[FocusChange]) -> Result<(), StoreError>;
}

/// Apply one change to one task. Shared by the shipped stores so both
/// uphold the set-together/clear-together invariant identically.
pub(crate) fn apply_change(task: &mut Task, change: &FocusChange) {
    match &change.cell {
        Some(cell) => {
            task.focus_date = Some(cell.date);
            task.focus_slot = Some(cell.slot.clone());
            task.day_id = Some(cell.day_id.clone());
        }
        None => {
            task.focus_date = None;
            task.focus_slot = None;
            task.day_id = None;
        }
    }
}
