// Room model and room type enumeration
use crate::error::HotelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type RoomNumber = u32;

// Fixed room categories. Rate and capacity for each come from the rate table
// in the hotel configuration, not from the variant itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Single,
    Double,
    Suite,
}

impl RoomType {
    pub const ALL: [RoomType; 3] = [RoomType::Single, RoomType::Double, RoomType::Suite];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Suite => "Suite",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Parsing is case-sensitive: the console contract takes the names exactly as
// enumerated, so "single" is rejected.
impl FromStr for RoomType {
    type Err = HotelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Single" => Ok(RoomType::Single),
            "Double" => Ok(RoomType::Double),
            "Suite" => Ok(RoomType::Suite),
            other => Err(HotelError::InvalidRoomType(other.to_string())),
        }
    }
}

// A bookable unit. The nightly rate is copied from the rate table when the
// room is added and stays fixed for the life of the room. Availability is not
// stored here; the hotel derives it from its occupancy index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    number: RoomNumber,
    room_type: RoomType,
    rate: f64,
    features: Vec<String>,
}

impl Room {
    pub(crate) fn new(number: RoomNumber, room_type: RoomType, rate: f64) -> Self {
        Self {
            number,
            room_type,
            rate,
            features: Vec::new(),
        }
    }

    pub fn number(&self) -> RoomNumber {
        self.number
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    // Appends unconditionally; duplicate labels are kept as-is.
    pub fn add_feature(&mut self, label: impl Into<String>) {
        self.features.push(label.into());
    }

    pub fn feature_list(&self) -> String {
        if self.features.is_empty() {
            "No features added.".to_string()
        } else {
            self.features.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Single", RoomType::Single)]
    #[test_case("Double", RoomType::Double)]
    #[test_case("Suite", RoomType::Suite)]
    fn test_room_type_parses_exact_names(input: &str, expected: RoomType) {
        assert_eq!(input.parse::<RoomType>().unwrap(), expected);
    }

    #[test_case("single")]
    #[test_case("SUITE")]
    #[test_case("Penthouse")]
    #[test_case("")]
    fn test_room_type_rejects_unknown_names(input: &str) {
        let err = input.parse::<RoomType>().unwrap_err();
        assert_eq!(err, HotelError::InvalidRoomType(input.to_string()));
    }

    #[test]
    fn test_feature_list_formatting() {
        let mut room = Room::new(101, RoomType::Single, 100.0);
        assert_eq!(room.feature_list(), "No features added.");

        room.add_feature("Sea view");
        room.add_feature("Balcony");
        assert_eq!(room.feature_list(), "Sea view, Balcony");
    }

    #[test]
    fn test_add_feature_keeps_duplicates() {
        let mut room = Room::new(101, RoomType::Single, 100.0);
        room.add_feature("WiFi");
        room.add_feature("WiFi");
        assert_eq!(room.features().len(), 2);
    }
}
