// Error types for the reservation core
use crate::room::{RoomNumber, RoomType};
use chrono::NaiveDate;
use thiserror::Error;

// Every operation failure is reported through this closed set of variants so
// callers can branch on kind instead of matching on message text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HotelError {
    #[error("Invalid room type: {0}")]
    InvalidRoomType(String),

    #[error("No available rooms of type {0}")]
    RoomUnavailable(RoomType),

    #[error("Customer {0} not found")]
    CustomerNotFound(String),

    #[error("Room {0} is already booked")]
    AlreadyBooked(RoomNumber),

    #[error("Room {0} is not currently booked")]
    NotCurrentlyBooked(RoomNumber),

    #[error("Booking is already canceled")]
    AlreadyCancelled,

    #[error("Cancellation denied: {notice_days} day(s) notice, {required} required")]
    CancellationDenied { notice_days: i64, required: i64 },

    #[error("Active booking not found for {0}")]
    NoActiveBooking(String),

    #[error("Check-out {check_out} must be after check-in {check_in}")]
    InvalidDateRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("Room {0} already exists")]
    DuplicateRoomNumber(RoomNumber),

    #[error("Customer {0} already exists")]
    DuplicateCustomer(String),
}
