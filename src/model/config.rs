use serde::{Deserialize, Serialize};

/// Configuration from planner.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub capacity: CapacityConfig,
    /// Optional slot-catalog override. Empty means the built-in catalog.
    #[serde(default)]
    pub slots: Vec<SlotConfig>,
}

/// Capacity tuning. The ratios are product-level constants, not physical
/// limits; hosts may tighten or relax them per deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacityConfig {
    /// Ratio of committed to available hours above which a cell is flagged
    /// "warning".
    #[serde(default = "default_warning_ratio")]
    pub warning_ratio: f64,
    /// Ratio above which a cell is flagged "over".
    #[serde(default = "default_over_ratio")]
    pub over_ratio: f64,
    /// Capacity assumed for slot keys missing from the catalog.
    #[serde(default = "default_slot_hours")]
    pub default_slot_hours: f64,
}

impl Default for CapacityConfig {
    fn default() -> Self {
        CapacityConfig {
            warning_ratio: 0.7,
            over_ratio: 1.0,
            default_slot_hours: 8.0,
        }
    }
}

fn default_warning_ratio() -> f64 {
    0.7
}

fn default_over_ratio() -> f64 {
    1.0
}

fn default_slot_hours() -> f64 {
    8.0
}

/// One slot entry in a catalog override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotConfig {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    pub capacity_hours: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: PlannerConfig = toml::from_str("").unwrap();
        assert_eq!(config.capacity.warning_ratio, 0.7);
        assert_eq!(config.capacity.over_ratio, 1.0);
        assert_eq!(config.capacity.default_slot_hours, 8.0);
        assert!(config.slots.is_empty());
    }

    #[test]
    fn test_partial_capacity_section() {
        let config: PlannerConfig = toml::from_str(
            "\
[capacity]
warning_ratio = 0.8
",
        )
        .unwrap();
        assert_eq!(config.capacity.warning_ratio, 0.8);
        assert_eq!(config.capacity.over_ratio, 1.0);
    }

    #[test]
    fn test_slot_overrides() {
        let config: PlannerConfig = toml::from_str(
            "\
[[slots]]
key = \"deep_work\"
label = \"Deep work\"
start = \"09:00\"
end = \"12:00\"
capacity_hours = 3.0

[[slots]]
key = \"admin\"
label = \"Admin\"
capacity_hours = 1.0
",
        )
        .unwrap();
        assert_eq!(config.slots.len(), 2);
        assert_eq!(config.slots[0].key, "deep_work");
        assert_eq!(config.slots[1].start, "");
    }
}
