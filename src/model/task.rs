use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task lifecycle state.
///
/// Backends disagree on the spelling of the terminal states (`done` vs
/// `completed`, `canceled` vs `cancelled`). The aliases absorb that drift
/// at the deserialization boundary so the rest of the crate only ever sees
/// the canonical variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    #[serde(alias = "done")]
    Completed,
    OnHold,
    #[serde(alias = "canceled")]
    Cancelled,
}

impl TaskStatus {
    /// States that remove a task from every scheduling queue.
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Cancelled)
    }
}

/// Task priority. P0 is the most urgent; the derived ordering sorts P0 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    P0,
    P1,
    P2,
    P3,
}

impl Priority {
    /// Sort rank for an optional priority. Tasks without one rank after P3.
    pub fn rank(priority: Option<Priority>) -> u8 {
        match priority {
            Some(Priority::P0) => 0,
            Some(Priority::P1) => 1,
            Some(Priority::P2) => 2,
            Some(Priority::P3) => 3,
            None => 4,
        }
    }
}

/// A task as consumed from the persistence API.
///
/// Only the fields scheduling cares about are modeled; hosts carry whatever
/// else they need alongside. Field names follow the backend's camelCase JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Option<Priority>,
    /// Effort estimate in hours. Missing counts as zero in capacity sums.
    #[serde(default)]
    pub est_effort: Option<f64>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// The date this task is scheduled onto. Always set and cleared
    /// together with `focus_slot`.
    #[serde(default)]
    pub focus_date: Option<NaiveDate>,
    #[serde(default)]
    pub focus_slot: Option<String>,
    /// Back-reference to the owning day record, derived from `focus_date`.
    #[serde(default)]
    pub day_id: Option<String>,
    #[serde(default)]
    pub venture_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    /// Host-defined task type, used only for queue filtering.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl Task {
    /// Create a bare todo task with the given id and title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Task {
            id: id.into(),
            title: title.into(),
            status: TaskStatus::Todo,
            priority: None,
            est_effort: None,
            due_date: None,
            focus_date: None,
            focus_slot: None,
            day_id: None,
            venture_id: None,
            project_id: None,
            kind: None,
        }
    }

    /// The cell this task occupies, if it is scheduled. `None` unless both
    /// halves of the pair are present.
    pub fn focus_cell(&self) -> Option<(NaiveDate, &str)> {
        match (self.focus_date, self.focus_slot.as_deref()) {
            (Some(date), Some(slot)) => Some((date, slot)),
            _ => None,
        }
    }

    /// A task is scheduled iff it has a focus date.
    pub fn is_scheduled(&self) -> bool {
        self.focus_date.is_some()
    }

    /// Effort estimate with missing treated as zero.
    pub fn effort_hours(&self) -> f64 {
        self.est_effort.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_aliases_normalize_finished_spellings() {
        let done: TaskStatus = serde_json::from_str("\"done\"").unwrap();
        let completed: TaskStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(done, TaskStatus::Completed);
        assert_eq!(completed, TaskStatus::Completed);

        let canceled: TaskStatus = serde_json::from_str("\"canceled\"").unwrap();
        let cancelled: TaskStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(canceled, TaskStatus::Cancelled);
        assert_eq!(cancelled, TaskStatus::Cancelled);
    }

    #[test]
    fn test_status_serializes_canonical_spelling() {
        let json = serde_json::to_string(&TaskStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
    }

    #[test]
    fn test_terminal_states() {
        assert!(TaskStatus::Completed.is_terminal());
        assert!(TaskStatus::Cancelled.is_terminal());
        assert!(!TaskStatus::Todo.is_terminal());
        assert!(!TaskStatus::InProgress.is_terminal());
        assert!(!TaskStatus::OnHold.is_terminal());
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::P0 < Priority::P1);
        assert!(Priority::P1 < Priority::P3);
        assert_eq!(Priority::rank(Some(Priority::P0)), 0);
        assert_eq!(Priority::rank(None), 4);
    }

    #[test]
    fn test_task_deserializes_camel_case() {
        let task: Task = serde_json::from_str(
            r#"{
                "id": "t1",
                "title": "Write report",
                "status": "in_progress",
                "priority": "P1",
                "estEffort": 1.5,
                "dueDate": "2025-08-07",
                "focusDate": "2025-08-05",
                "focusSlot": "morning",
                "ventureId": "v1",
                "type": "deep_work"
            }"#,
        )
        .unwrap();
        assert_eq!(task.priority, Some(Priority::P1));
        assert_eq!(task.est_effort, Some(1.5));
        assert_eq!(task.focus_slot.as_deref(), Some("morning"));
        assert_eq!(task.kind.as_deref(), Some("deep_work"));
    }

    #[test]
    fn test_focus_cell_requires_both_halves() {
        let mut task = Task::new("t1", "Half scheduled");
        assert_eq!(task.focus_cell(), None);

        task.focus_date = NaiveDate::from_ymd_opt(2025, 8, 5);
        assert_eq!(task.focus_cell(), None);

        task.focus_slot = Some("morning".to_string());
        let (date, slot) = task.focus_cell().unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 8, 5).unwrap());
        assert_eq!(slot, "morning");
    }

    #[test]
    fn test_effort_hours_defaults_to_zero() {
        let mut task = Task::new("t1", "No estimate");
        assert_eq!(task.effort_hours(), 0.0);
        task.est_effort = Some(2.5);
        assert_eq!(task.effort_hours(), 2.5);
    }
}
