use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::config::{PlannerConfig, SlotConfig};

/// Capacity assumed for slot keys the catalog doesn't know. Backends may
/// introduce new keys ahead of a client update; those degrade to this
/// default instead of erroring.
pub const DEFAULT_SLOT_HOURS: f64 = 8.0;

/// A single catalog entry. `start` and `end` are display strings ("06:00");
/// scheduling never computes with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub key: String,
    pub label: String,
    pub start: String,
    pub end: String,
    pub capacity_hours: f64,
}

/// The canonical full-day catalog. An earlier coarse catalog
/// (morning/midday/afternoon/evening) is retired; tasks still carrying its
/// keys resolve to the default capacity.
const CANONICAL_SLOTS: &[(&str, &str, &str, &str, f64)] = &[
    ("early_morning", "Early morning", "06:00", "08:00", 2.0),
    ("morning", "Morning", "08:00", "10:00", 2.0),
    ("late_morning", "Late morning", "10:00", "12:00", 2.0),
    ("midday", "Midday", "12:00", "14:00", 1.5),
    ("early_afternoon", "Early afternoon", "14:00", "16:00", 2.0),
    ("late_afternoon", "Late afternoon", "16:00", "18:00", 2.0),
    ("evening", "Evening", "18:00", "20:00", 1.5),
    ("night", "Night", "20:00", "22:00", 2.0),
    ("late_night", "Late night", "22:00", "24:00", 1.0),
];

/// Ordered, read-only table of the day's time blocks.
#[derive(Debug, Clone)]
pub struct SlotCatalog {
    slots: IndexMap<String, Slot>,
    default_hours: f64,
}

impl SlotCatalog {
    /// The built-in nine-slot full-day catalog.
    pub fn canonical() -> Self {
        let slots = CANONICAL_SLOTS
            .iter()
            .map(|&(key, label, start, end, capacity_hours)| {
                (
                    key.to_string(),
                    Slot {
                        key: key.to_string(),
                        label: label.to_string(),
                        start: start.to_string(),
                        end: end.to_string(),
                        capacity_hours,
                    },
                )
            })
            .collect();
        SlotCatalog {
            slots,
            default_hours: DEFAULT_SLOT_HOURS,
        }
    }

    /// Catalog from configuration. An empty `[[slots]]` list means the
    /// built-in catalog, with the configured default capacity either way.
    pub fn from_config(config: &PlannerConfig) -> Self {
        let default_hours = config.capacity.default_slot_hours;
        if config.slots.is_empty() {
            let mut catalog = SlotCatalog::canonical();
            catalog.default_hours = default_hours;
            return catalog;
        }
        let slots = config
            .slots
            .iter()
            .map(|sc: &SlotConfig| {
                (
                    sc.key.clone(),
                    Slot {
                        key: sc.key.clone(),
                        label: sc.label.clone(),
                        start: sc.start.clone(),
                        end: sc.end.clone(),
                        capacity_hours: sc.capacity_hours,
                    },
                )
            })
            .collect();
        SlotCatalog {
            slots,
            default_hours,
        }
    }

    pub fn is_valid_slot(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    /// Capacity for a slot key, falling back to the catalog default for
    /// unknown keys.
    pub fn capacity_hours(&self, key: &str) -> f64 {
        self.slots
            .get(key)
            .map(|s| s.capacity_hours)
            .unwrap_or(self.default_hours)
    }

    /// Display label for a known slot key.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(|s| s.label.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&Slot> {
        self.slots.get(key)
    }

    /// Slots in display order.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.values()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for SlotCatalog {
    fn default() -> Self {
        SlotCatalog::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::CapacityConfig;

    #[test]
    fn test_canonical_catalog_has_nine_slots() {
        let catalog = SlotCatalog::canonical();
        assert_eq!(catalog.len(), 9);
        assert!(catalog.is_valid_slot("morning"));
        assert!(catalog.is_valid_slot("late_night"));
    }

    #[test]
    fn test_canonical_catalog_order() {
        let catalog = SlotCatalog::canonical();
        let keys: Vec<&str> = catalog.slots().map(|s| s.key.as_str()).collect();
        assert_eq!(keys[0], "early_morning");
        assert_eq!(keys[8], "late_night");
    }

    #[test]
    fn test_capacity_lookup() {
        let catalog = SlotCatalog::canonical();
        assert_eq!(catalog.capacity_hours("morning"), 2.0);
        assert_eq!(catalog.capacity_hours("midday"), 1.5);
    }

    #[test]
    fn test_unknown_slot_gets_default_capacity() {
        let catalog = SlotCatalog::canonical();
        // A retired coarse-catalog key still resolves.
        assert!(!catalog.is_valid_slot("afternoon"));
        assert_eq!(catalog.capacity_hours("afternoon"), DEFAULT_SLOT_HOURS);
        assert_eq!(catalog.label("afternoon"), None);
    }

    #[test]
    fn test_label_lookup() {
        let catalog = SlotCatalog::canonical();
        assert_eq!(catalog.label("early_afternoon"), Some("Early afternoon"));
    }

    #[test]
    fn test_from_config_with_overrides() {
        let config = PlannerConfig {
            capacity: CapacityConfig {
                default_slot_hours: 4.0,
                ..CapacityConfig::default()
            },
            slots: vec![SlotConfig {
                key: "deep_work".to_string(),
                label: "Deep work".to_string(),
                start: "09:00".to_string(),
                end: "12:00".to_string(),
                capacity_hours: 3.0,
            }],
        };
        let catalog = SlotCatalog::from_config(&config);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.capacity_hours("deep_work"), 3.0);
        assert_eq!(catalog.capacity_hours("morning"), 4.0);
    }

    #[test]
    fn test_from_config_without_overrides_keeps_canonical() {
        let config = PlannerConfig::default();
        let catalog = SlotCatalog::from_config(&config);
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.capacity_hours("unknown_key"), DEFAULT_SLOT_HOURS);
    }
}
