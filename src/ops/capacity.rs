use serde::Serialize;

use crate::model::config::CapacityConfig;
use crate::model::task::Task;

/// Committed effort within one (date, slot) cell.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CellUsage {
    pub used_hours: f64,
    pub task_count: usize,
}

/// Sum committed effort over the tasks in a cell. Pure reduction over the
/// current snapshot; missing estimates count as zero.
pub fn cell_usage<'a, I>(tasks: I) -> CellUsage
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut usage = CellUsage::default();
    for task in tasks {
        usage.used_hours += task.effort_hours();
        usage.task_count += 1;
    }
    usage
}

/// How full a cell is, for visual warnings in consuming views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityLevel {
    Ok,
    Warning,
    Over,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CapacityStatus {
    pub ratio: f64,
    pub level: CapacityLevel,
}

/// Classify a cell's load against its capacity.
///
/// Total over its whole domain: a zero-capacity cell never divides, it is
/// over iff any effort is committed and its reported ratio stays 0.
pub fn capacity_status(
    used_hours: f64,
    capacity_hours: f64,
    config: &CapacityConfig,
) -> CapacityStatus {
    if capacity_hours <= 0.0 {
        let level = if used_hours > 0.0 {
            CapacityLevel::Over
        } else {
            CapacityLevel::Ok
        };
        return CapacityStatus { ratio: 0.0, level };
    }
    let ratio = used_hours / capacity_hours;
    let level = if ratio > config.over_ratio {
        CapacityLevel::Over
    } else if ratio > config.warning_ratio {
        CapacityLevel::Warning
    } else {
        CapacityLevel::Ok
    };
    CapacityStatus { ratio, level }
}
