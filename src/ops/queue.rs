use chrono::NaiveDate;

use crate::model::task::{Priority, Task};

/// Optional narrowing for the scheduling queue and the picker modal.
/// An empty filter admits every eligible task.
#[derive(Debug, Clone, Default)]
pub struct QueueFilter {
    pub priority: Option<Priority>,
    pub venture_id: Option<String>,
    /// Host-defined task type.
    pub kind: Option<String>,
    /// Case-insensitive substring over titles.
    pub search: Option<String>,
}

impl QueueFilter {
    fn matches(&self, task: &Task) -> bool {
        if let Some(priority) = self.priority {
            if task.priority != Some(priority) {
                return false;
            }
        }
        if let Some(venture_id) = &self.venture_id {
            if task.venture_id.as_deref() != Some(venture_id.as_str()) {
                return false;
            }
        }
        if let Some(kind) = &self.kind {
            if task.kind.as_deref() != Some(kind.as_str()) {
                return false;
            }
        }
        if let Some(needle) = &self.search {
            let needle = needle.to_lowercase();
            if !task.title.to_lowercase().contains(&needle) {
                return false;
            }
        }
        true
    }
}

/// Tasks eligible for scheduling: no focus date yet and not in a terminal
/// state, narrowed by `filter`.
///
/// Ordering is stable: tasks with a due date come first, ascending by
/// days-until-due (most overdue first), ties broken by priority (P0
/// first); the due-date-less tail is ordered by priority alone. Remaining
/// ties keep input order.
pub fn unscheduled_tasks<'a>(
    tasks: &'a [Task],
    filter: &QueueFilter,
    today: NaiveDate,
) -> Vec<&'a Task> {
    let mut queue: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.focus_date.is_none() && !t.status.is_terminal())
        .filter(|t| filter.matches(t))
        .collect();
    queue.sort_by_key(|t| sort_key(t, today));
    queue
}

fn sort_key(task: &Task, today: NaiveDate) -> (u8, i64, u8) {
    let priority = Priority::rank(task.priority);
    match task.due_date {
        Some(due) => (0, (due - today).num_days(), priority),
        None => (1, 0, priority),
    }
}
