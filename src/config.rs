// Rate schedule and cancellation policy configuration
use crate::room::RoomType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Nightly rate and stated capacity for one room category. Capacity is carried
// for reporting; nothing enforces it against party size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomTypeSpec {
    pub nightly_rate: f64,
    pub capacity: u32,
}

// Injectable rate schedule so deployments can vary rates without code
// changes. The default mirrors the standard schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    specs: HashMap<RoomType, RoomTypeSpec>,
}

impl Default for RateTable {
    fn default() -> Self {
        let mut specs = HashMap::new();
        specs.insert(
            RoomType::Single,
            RoomTypeSpec {
                nightly_rate: 100.0,
                capacity: 1,
            },
        );
        specs.insert(
            RoomType::Double,
            RoomTypeSpec {
                nightly_rate: 150.0,
                capacity: 2,
            },
        );
        specs.insert(
            RoomType::Suite,
            RoomTypeSpec {
                nightly_rate: 300.0,
                capacity: 4,
            },
        );
        Self { specs }
    }
}

impl RateTable {
    pub fn new(specs: HashMap<RoomType, RoomTypeSpec>) -> Self {
        Self { specs }
    }

    // None when the deployment's table carries no entry for the type, which
    // makes the type unbookable in that hotel.
    pub fn spec(&self, room_type: RoomType) -> Option<RoomTypeSpec> {
        self.specs.get(&room_type).copied()
    }

    pub fn set_spec(&mut self, room_type: RoomType, spec: RoomTypeSpec) {
        self.specs.insert(room_type, spec);
    }
}

// Per-hotel policy knobs. Defaults match the standard deployment: 10% tax,
// two full days of cancellation notice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelConfig {
    pub rate_table: RateTable,
    pub tax_rate: f64,
    pub min_cancel_notice_days: i64,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            rate_table: RateTable::default(),
            tax_rate: 0.10,
            min_cancel_notice_days: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rate_table_matches_standard_schedule() {
        let table = RateTable::default();
        let single = table.spec(RoomType::Single).unwrap();
        let double = table.spec(RoomType::Double).unwrap();
        let suite = table.spec(RoomType::Suite).unwrap();

        assert_eq!(single.nightly_rate, 100.0);
        assert_eq!(single.capacity, 1);
        assert_eq!(double.nightly_rate, 150.0);
        assert_eq!(double.capacity, 2);
        assert_eq!(suite.nightly_rate, 300.0);
        assert_eq!(suite.capacity, 4);
    }

    #[test]
    fn test_custom_table_can_omit_types() {
        let mut specs = HashMap::new();
        specs.insert(
            RoomType::Suite,
            RoomTypeSpec {
                nightly_rate: 500.0,
                capacity: 6,
            },
        );
        let table = RateTable::new(specs);

        assert!(table.spec(RoomType::Single).is_none());
        assert_eq!(table.spec(RoomType::Suite).unwrap().nightly_rate, 500.0);
    }

    #[test]
    fn test_default_policy_values() {
        let config = HotelConfig::default();
        assert_eq!(config.tax_rate, 0.10);
        assert_eq!(config.min_cancel_notice_days, 2);
    }
}
