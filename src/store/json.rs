use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::model::task::Task;
use crate::store::{FocusChange, StoreError, TaskStore, apply_change};

/// File-backed snapshot store: a single JSON file holding the task list.
///
/// Writes go through a temp file in the same directory and are renamed
/// into place, so an interrupted write never truncates the snapshot. The
/// in-memory copy only advances after the disk write succeeds.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl JsonStore {
    /// Load an existing snapshot, or start empty if the file is absent.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let tasks = if path.exists() {
            let text = fs::read_to_string(&path).map_err(|source| StoreError::ReadError {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&text)?
        } else {
            debug!(path = %path.display(), "no task snapshot yet, starting empty");
            Vec::new()
        };
        Ok(JsonStore { path, tasks })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the whole snapshot, e.g. after the host refetches from its
    /// backend. The task cache is invalidated wholesale, never patched.
    pub fn replace_all(&mut self, tasks: Vec<Task>) -> Result<(), StoreError> {
        write_snapshot(&self.path, &tasks)?;
        self.tasks = tasks;
        Ok(())
    }
}

impl TaskStore for JsonStore {
    fn tasks(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.tasks.clone())
    }

    fn apply_focus(&mut self, changes: &[FocusChange]) -> Result<(), StoreError> {
        for change in changes {
            if !self.tasks.iter().any(|t| t.id == change.task_id) {
                warn!(task_id = %change.task_id, "rejecting focus batch: unknown task");
                return Err(StoreError::UnknownTask(change.task_id.clone()));
            }
        }
        // Mutate a scratch copy and persist it before committing, so a
        // failed write leaves the store unchanged.
        let mut next = self.tasks.clone();
        for change in changes {
            if let Some(task) = next.iter_mut().find(|t| t.id == change.task_id) {
                apply_change(task, change);
            }
        }
        write_snapshot(&self.path, &next)?;
        self.tasks = next;
        debug!(count = changes.len(), "focus batch applied");
        Ok(())
    }
}

fn write_snapshot(path: &Path, tasks: &[Task]) -> Result<(), StoreError> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let json = serde_json::to_string_pretty(tasks)?;

    let mut tmp =
        NamedTempFile::new_in(dir.unwrap_or(Path::new("."))).map_err(|source| {
            StoreError::WriteError {
                path: path.to_path_buf(),
                source,
            }
        })?;
    tmp.write_all(json.as_bytes())
        .map_err(|source| StoreError::WriteError {
            path: path.to_path_buf(),
            source,
        })?;
    tmp.persist(path).map_err(|e| StoreError::WriteError {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_open_missing_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path().join("tasks.json")).unwrap();
        assert!(store.tasks().unwrap().is_empty());
    }

    #[test]
    fn test_replace_all_round_trips_through_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");

        let mut store = JsonStore::open(&path).unwrap();
        store
            .replace_all(vec![Task::new("t1", "First"), Task::new("t2", "Second")])
            .unwrap();

        let reopened = JsonStore::open(&path).unwrap();
        let tasks = reopened.tasks().unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, "t1");
    }

    #[test]
    fn test_apply_focus_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");

        let mut store = JsonStore::open(&path).unwrap();
        store.replace_all(vec![Task::new("t1", "First")]).unwrap();
        store
            .apply_focus(&[FocusChange::schedule(
                "t1",
                d(2025, 8, 5),
                "morning",
                "day_2025-08-05",
            )])
            .unwrap();

        let reopened = JsonStore::open(&path).unwrap();
        let tasks = reopened.tasks().unwrap();
        assert_eq!(tasks[0].focus_date, Some(d(2025, 8, 5)));
        assert_eq!(tasks[0].focus_slot.as_deref(), Some("morning"));
        assert_eq!(tasks[0].day_id.as_deref(), Some("day_2025-08-05"));
    }

    #[test]
    fn test_apply_focus_unknown_task_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");

        let mut store = JsonStore::open(&path).unwrap();
        store.replace_all(vec![Task::new("t1", "First")]).unwrap();
        let result = store.apply_focus(&[
            FocusChange::schedule("t1", d(2025, 8, 5), "morning", "day_2025-08-05"),
            FocusChange::clear("missing"),
        ]);
        assert!(result.is_err());

        let reopened = JsonStore::open(&path).unwrap();
        assert_eq!(reopened.tasks().unwrap()[0].focus_date, None);
    }

    #[test]
    fn test_open_rejects_malformed_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            JsonStore::open(&path),
            Err(StoreError::ParseError(_))
        ));
    }
}
