// Main library file for the grand_stay reservation manager

// Export the reservation core modules
pub mod booking;
pub mod config;
pub mod customer;
pub mod error;
pub mod hotel;
pub mod inventory;
pub mod room;

// Re-export key types for convenience
pub use booking::{stay_cost, Booking, BookingId, BookingStatus};
pub use config::{HotelConfig, RateTable, RoomTypeSpec};
pub use customer::{Customer, CustomerId};
pub use error::HotelError;
pub use hotel::{BookingReceipt, BookingSummary, CancellationReceipt, CustomerDetails, Hotel};
pub use inventory::{
    hotel_from_inventory, load_inventory, parse_inventory, InventoryCustomer, InventoryError,
    InventoryFile, InventoryRoom, SAMPLE_INVENTORY_PATH,
};
pub use room::{Room, RoomNumber, RoomType};
