use indexmap::IndexMap;

use crate::model::task::Task;
use crate::store::{FocusChange, StoreError, TaskStore, apply_change};

/// In-memory store, for hosts that manage their own snapshots and for
/// tests. Iteration order is insertion order, so snapshots are stable.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tasks: IndexMap<String, Task>,
}

impl MemoryStore {
    pub fn new(tasks: impl IntoIterator<Item = Task>) -> Self {
        MemoryStore {
            tasks: tasks.into_iter().map(|t| (t.id.clone(), t)).collect(),
        }
    }

    /// Insert or replace a task.
    pub fn insert(&mut self, task: Task) {
        self.tasks.insert(task.id.clone(), task);
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl TaskStore for MemoryStore {
    fn tasks(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.tasks.values().cloned().collect())
    }

    fn apply_focus(&mut self, changes: &[FocusChange]) -> Result<(), StoreError> {
        // Validate the whole batch first; an error must leave nothing applied.
        for change in changes {
            if !self.tasks.contains_key(&change.task_id) {
                return Err(StoreError::UnknownTask(change.task_id.clone()));
            }
        }
        for change in changes {
            if let Some(task) = self.tasks.get_mut(&change.task_id) {
                apply_change(task, change);
            }
        }
        Ok(())
    }
}
