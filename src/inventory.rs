// Inventory seeding: build a hotel from a JSON description
use crate::config::HotelConfig;
use crate::error::HotelError;
use crate::hotel::Hotel;
use crate::room::{RoomNumber, RoomType};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

// Start-up seeding only. Mutable state (bookings, cancellations) is never
// written back; the file describes the opening inventory of a deployment.

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid inventory: {0}")]
    Hotel(#[from] HotelError),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InventoryFile {
    pub hotel_name: String,
    #[serde(default)]
    pub rooms: Vec<InventoryRoom>,
    #[serde(default)]
    pub customers: Vec<InventoryCustomer>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InventoryRoom {
    pub number: RoomNumber,
    pub room_type: RoomType,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InventoryCustomer {
    pub name: String,
    pub contact_info: String,
}

pub const SAMPLE_INVENTORY_PATH: &str = "samples/inventory.json";

// A small inventory for inline testing
pub const SMALL_SAMPLE_INVENTORY: &str = r#"{
  "hotel_name": "Grand Stay",
  "rooms": [
    { "number": 101, "room_type": "Single", "features": ["Sea view"] },
    { "number": 102, "room_type": "Double" },
    { "number": 201, "room_type": "Suite", "features": ["Balcony", "Mini bar"] }
  ],
  "customers": [
    { "name": "Alice", "contact_info": "alice@example.com" },
    { "name": "Bob", "contact_info": "bob@example.com" }
  ]
}"#;

pub fn parse_inventory(json: &str) -> Result<InventoryFile, InventoryError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_inventory(path: impl AsRef<Path>) -> Result<InventoryFile, InventoryError> {
    let content = std::fs::read_to_string(path)?;
    parse_inventory(&content)
}

// Duplicate room numbers or customer names in the file surface as the same
// errors the live API reports.
pub fn hotel_from_inventory(
    inventory: &InventoryFile,
    config: HotelConfig,
) -> Result<Hotel, InventoryError> {
    let mut hotel = Hotel::with_config(inventory.hotel_name.clone(), config);

    for room in &inventory.rooms {
        hotel.add_room(room.number, room.room_type)?;
        for feature in &room.features {
            if let Some(r) = hotel.room_mut(room.number) {
                r.add_feature(feature.clone());
            }
        }
    }
    for customer in &inventory.customers {
        hotel.add_customer(customer.name.clone(), customer.contact_info.clone())?;
    }

    Ok(hotel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_small_sample() {
        let inventory = parse_inventory(SMALL_SAMPLE_INVENTORY).unwrap();
        assert_eq!(inventory.hotel_name, "Grand Stay");
        assert_eq!(inventory.rooms.len(), 3);
        assert_eq!(inventory.customers.len(), 2);
        assert_eq!(inventory.rooms[0].features, vec!["Sea view"]);
        assert!(inventory.rooms[1].features.is_empty());
    }

    #[test]
    fn test_hotel_from_inventory_seeds_rooms_and_customers() {
        let inventory = parse_inventory(SMALL_SAMPLE_INVENTORY).unwrap();
        let hotel = hotel_from_inventory(&inventory, HotelConfig::default()).unwrap();

        assert_eq!(hotel.name(), "Grand Stay");
        assert_eq!(hotel.rooms().len(), 3);
        assert_eq!(hotel.customers().len(), 2);
        assert_eq!(hotel.room(201).unwrap().rate(), 300.0);
        assert_eq!(hotel.room(201).unwrap().features(), &["Balcony", "Mini bar"]);
        assert!(hotel.is_room_available(101));
    }

    #[test]
    fn test_inventory_rejects_duplicate_room_numbers() {
        let json = r#"{
          "hotel_name": "Dup",
          "rooms": [
            { "number": 101, "room_type": "Single" },
            { "number": 101, "room_type": "Double" }
          ]
        }"#;
        let inventory = parse_inventory(json).unwrap();
        let err = hotel_from_inventory(&inventory, HotelConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            InventoryError::Hotel(HotelError::DuplicateRoomNumber(101))
        ));
    }

    #[test]
    fn test_inventory_rejects_unknown_room_type_names() {
        let json = r#"{
          "hotel_name": "Bad",
          "rooms": [{ "number": 101, "room_type": "Penthouse" }]
        }"#;
        let err = parse_inventory(json).unwrap_err();
        assert!(matches!(err, InventoryError::Json(_)));
    }

    #[test]
    fn test_load_sample_inventory_file() {
        let inventory = load_inventory(SAMPLE_INVENTORY_PATH).unwrap();
        let hotel = hotel_from_inventory(&inventory, HotelConfig::default()).unwrap();
        assert_eq!(hotel.name(), "Grand Stay");
        assert_eq!(hotel.rooms().len(), 5);
        assert_eq!(hotel.customers().len(), 2);
    }
}
