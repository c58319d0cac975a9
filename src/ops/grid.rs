use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::model::config::CapacityConfig;
use crate::model::slot::SlotCatalog;
use crate::model::task::Task;
use crate::ops::capacity::{CapacityLevel, CapacityStatus, CellUsage, capacity_status, cell_usage};
use crate::ops::urgency::{Urgency, classify};

/// One (date, slot) cell of the schedule grid: the tasks placed there and
/// the derived capacity figures.
#[derive(Debug)]
pub struct Cell<'a> {
    pub date: NaiveDate,
    pub slot: String,
    pub tasks: Vec<&'a Task>,
    pub usage: CellUsage,
    pub status: CapacityStatus,
}

impl<'a> Cell<'a> {
    fn empty(date: NaiveDate, slot: &str) -> Self {
        Cell {
            date,
            slot: slot.to_string(),
            tasks: Vec::new(),
            usage: CellUsage::default(),
            status: CapacityStatus {
                ratio: 0.0,
                level: CapacityLevel::Ok,
            },
        }
    }

    /// Distinct venture ids among the cell's tasks, in task order, for the
    /// host's color grouping. Ventures never affect scheduling itself.
    pub fn venture_ids(&self) -> Vec<&'a str> {
        let mut ids: Vec<&'a str> = Vec::new();
        for &task in &self.tasks {
            if let Some(venture_id) = task.venture_id.as_deref() {
                if !ids.contains(&venture_id) {
                    ids.push(venture_id);
                }
            }
        }
        ids
    }
}

/// The weekly-calendar view over one task snapshot.
///
/// Every catalog slot for every date in the window gets a cell, in
/// date-major catalog order; scheduled tasks carrying unknown slot keys
/// get a trailing cell for their date rather than disappearing. Derived
/// data only; rebuild after every snapshot refresh.
pub struct ScheduleGrid<'a> {
    cells: IndexMap<(NaiveDate, String), Cell<'a>>,
}

impl<'a> ScheduleGrid<'a> {
    pub fn build(
        tasks: &'a [Task],
        dates: &[NaiveDate],
        catalog: &SlotCatalog,
        config: &CapacityConfig,
    ) -> Self {
        let mut cells: IndexMap<(NaiveDate, String), Cell<'a>> = IndexMap::new();
        for &date in dates {
            for slot in catalog.slots() {
                cells.insert((date, slot.key.clone()), Cell::empty(date, &slot.key));
            }
        }

        for task in tasks {
            if let Some((date, slot)) = task.focus_cell() {
                if !dates.contains(&date) {
                    continue;
                }
                cells
                    .entry((date, slot.to_string()))
                    .or_insert_with(|| Cell::empty(date, slot))
                    .tasks
                    .push(task);
            }
        }

        for cell in cells.values_mut() {
            cell.usage = cell_usage(cell.tasks.iter().copied());
            cell.status = capacity_status(
                cell.usage.used_hours,
                catalog.capacity_hours(&cell.slot),
                config,
            );
        }

        ScheduleGrid { cells }
    }

    pub fn cell(&self, date: NaiveDate, slot: &str) -> Option<&Cell<'a>> {
        self.cells.get(&(date, slot.to_string()))
    }

    /// All cells, date-major in catalog order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell<'a>> {
        self.cells.values()
    }

    /// Cells flagged over capacity.
    pub fn overloaded(&self) -> impl Iterator<Item = &Cell<'a>> {
        self.cells
            .values()
            .filter(|c| c.status.level == CapacityLevel::Over)
    }

    /// Total committed effort for one date across all its slots.
    pub fn day_usage(&self, date: NaiveDate) -> CellUsage {
        cell_usage(
            self.cells
                .values()
                .filter(|c| c.date == date)
                .flat_map(|c| c.tasks.iter().copied()),
        )
    }

    /// Scheduled tasks whose due date makes them urgent as of `today`,
    /// with their bucket, for at-risk badges on the calendar.
    pub fn at_risk(&self, today: NaiveDate) -> Vec<(&'a Task, Urgency)> {
        self.cells
            .values()
            .flat_map(|c| c.tasks.iter().copied())
            .filter_map(|task| {
                let bucket = classify(task.due_date, today)?;
                bucket.is_urgent().then_some((task, bucket))
            })
            .collect()
    }
}
