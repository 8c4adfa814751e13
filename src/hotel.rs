// Hotel aggregate: orchestration and booking lifecycle rules
use crate::booking::{Booking, BookingId};
use crate::config::HotelConfig;
use crate::customer::{Customer, CustomerId};
use crate::error::HotelError;
use crate::room::{Room, RoomNumber, RoomType};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info, warn};

// Reverse index from room to its active booking. This is the single source
// of truth for availability: a room is available iff it has no entry here,
// so room and booking state cannot diverge.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct OccupancyIndex {
    by_room: HashMap<RoomNumber, BookingId>,
}

impl OccupancyIndex {
    fn occupy(&mut self, room: RoomNumber, booking: BookingId) -> Result<(), HotelError> {
        if self.by_room.contains_key(&room) {
            return Err(HotelError::AlreadyBooked(room));
        }
        self.by_room.insert(room, booking);
        Ok(())
    }

    fn release(&mut self, room: RoomNumber) -> Result<BookingId, HotelError> {
        self.by_room
            .remove(&room)
            .ok_or(HotelError::NotCurrentlyBooked(room))
    }

    fn is_occupied(&self, room: RoomNumber) -> bool {
        self.by_room.contains_key(&room)
    }
}

// Returned from a successful booking; carries the computed cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingReceipt {
    pub booking_id: BookingId,
    pub room_number: RoomNumber,
    pub customer_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_cost: f64,
}

impl fmt::Display for BookingReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room {} booked for {} from {} to {}. Total Cost: {:.2}",
            self.room_number, self.customer_name, self.check_in, self.check_out, self.total_cost
        )
    }
}

// Returned from a successful cancellation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancellationReceipt {
    pub booking_id: BookingId,
    pub room_number: RoomNumber,
    pub customer_name: String,
    pub notice_days: i64,
}

impl fmt::Display for CancellationReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Booking for room {} canceled with {} day(s) notice.",
            self.room_number, self.notice_days
        )
    }
}

// One active-booking row for summaries and customer details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub booking_id: BookingId,
    pub customer_name: String,
    pub room_number: RoomNumber,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_cost: f64,
}

impl fmt::Display for BookingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Booking for {}: Room {} from {} to {}, Cost: {:.2}",
            self.customer_name, self.room_number, self.check_in, self.check_out, self.total_cost
        )
    }
}

// Customer record plus the active slice of their never-pruned history. An
// empty `active` list is a real answer, distinct from an unknown name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub contact_info: String,
    pub active: Vec<BookingSummary>,
}

impl fmt::Display for CustomerDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.active.is_empty() {
            return write!(f, "No active bookings found for this customer.");
        }
        for (i, summary) in self.active.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "Room {}, Check-in: {}, Check-out: {}",
                summary.room_number, summary.check_in, summary.check_out
            )?;
        }
        Ok(())
    }
}

// Aggregate root. Owns every room, customer and booking; all mutation goes
// through these methods. Rooms, customers and bookings are append-only, in
// insertion order; cancellation is a status flip, never a removal, so the
// ledger keeps full history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    name: String,
    config: HotelConfig,
    rooms: Vec<Room>,
    customers: Vec<Customer>,
    bookings: Vec<Booking>,
    occupancy: OccupancyIndex,
}

impl Hotel {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, HotelConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: HotelConfig) -> Self {
        Self {
            name: name.into(),
            config,
            rooms: Vec::new(),
            customers: Vec::new(),
            bookings: Vec::new(),
            occupancy: OccupancyIndex::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &HotelConfig {
        &self.config
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn room(&self, number: RoomNumber) -> Option<&Room> {
        self.rooms.iter().find(|r| r.number() == number)
    }

    pub fn room_mut(&mut self, number: RoomNumber) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.number() == number)
    }

    pub fn is_room_available(&self, number: RoomNumber) -> bool {
        !self.occupancy.is_occupied(number)
    }

    // Adds a room with the rate the configured table carries for its type.
    // A type absent from the table is unbookable in this deployment and is
    // rejected the same way an unknown type name is.
    pub fn add_room(&mut self, number: RoomNumber, room_type: RoomType) -> Result<&Room, HotelError> {
        if self.rooms.iter().any(|r| r.number() == number) {
            return Err(HotelError::DuplicateRoomNumber(number));
        }
        let spec = self
            .config
            .rate_table
            .spec(room_type)
            .ok_or_else(|| HotelError::InvalidRoomType(room_type.to_string()))?;

        self.rooms.push(Room::new(number, room_type, spec.nightly_rate));
        debug!(room = number, %room_type, rate = spec.nightly_rate, "room added");
        Ok(&self.rooms[self.rooms.len() - 1])
    }

    pub fn add_customer(
        &mut self,
        name: impl Into<String>,
        contact_info: impl Into<String>,
    ) -> Result<&Customer, HotelError> {
        let name = name.into();
        if self.customers.iter().any(|c| c.name() == name) {
            return Err(HotelError::DuplicateCustomer(name));
        }
        self.customers.push(Customer::new(name, contact_info.into()));
        Ok(&self.customers[self.customers.len() - 1])
    }

    // First-match scan in insertion order. This is the sole allocation
    // policy; identical rooms are never load-balanced.
    pub fn find_available_room(&self, room_type: RoomType) -> Option<&Room> {
        self.rooms
            .iter()
            .find(|r| r.room_type() == room_type && !self.occupancy.is_occupied(r.number()))
    }

    // Books the first available room of the type for the named customer.
    // Room resolution happens strictly before customer resolution, so a full
    // house is reported even when the customer is also unknown.
    pub fn book_room(
        &mut self,
        customer_name: &str,
        room_type: RoomType,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<BookingReceipt, HotelError> {
        if check_out <= check_in {
            return Err(HotelError::InvalidDateRange {
                check_in,
                check_out,
            });
        }

        let (room_number, rate) = match self.find_available_room(room_type) {
            Some(room) => (room.number(), room.rate()),
            None => return Err(HotelError::RoomUnavailable(room_type)),
        };

        let customer_id = self
            .customer_id(customer_name)
            .ok_or_else(|| HotelError::CustomerNotFound(customer_name.to_string()))?;

        let booking_id = self.bookings.len();
        self.occupancy.occupy(room_number, booking_id)?;

        let booking = Booking::new(
            customer_id,
            room_number,
            check_in,
            check_out,
            rate,
            self.config.tax_rate,
        );
        let total_cost = booking.total_cost();
        self.bookings.push(booking);
        self.customers[customer_id].record_booking(booking_id);

        info!(
            room = room_number,
            customer = customer_name,
            %check_in,
            %check_out,
            total_cost,
            "room booked"
        );

        Ok(BookingReceipt {
            booking_id,
            room_number,
            customer_name: customer_name.to_string(),
            check_in,
            check_out,
            total_cost,
        })
    }

    // Cancels against the local calendar date. Tests and integrators that
    // need a fixed clock use `cancel_booking_as_of`.
    pub fn cancel_booking(&mut self, customer_name: &str) -> Result<CancellationReceipt, HotelError> {
        self.cancel_booking_as_of(customer_name, Local::now().date_naive())
    }

    // Targets the customer's first active booking in ledger order. The
    // notice gate applies to that booking only, even if the customer holds
    // later bookings with more notice.
    pub fn cancel_booking_as_of(
        &mut self,
        customer_name: &str,
        today: NaiveDate,
    ) -> Result<CancellationReceipt, HotelError> {
        let found = self.bookings.iter().enumerate().find(|(_, b)| {
            b.is_active() && self.customers[b.customer()].name() == customer_name
        });
        let (booking_id, booking) = match found {
            Some((id, b)) => (id, b),
            None => return Err(HotelError::NoActiveBooking(customer_name.to_string())),
        };

        let notice_days = (booking.check_in() - today).num_days();
        let required = self.config.min_cancel_notice_days;
        if notice_days < required {
            warn!(
                customer = customer_name,
                notice_days, required, "cancellation denied"
            );
            return Err(HotelError::CancellationDenied {
                notice_days,
                required,
            });
        }

        let room_number = booking.room();
        self.bookings[booking_id].cancel()?;
        self.occupancy.release(room_number)?;

        info!(
            room = room_number,
            customer = customer_name,
            notice_days,
            "booking canceled"
        );

        Ok(CancellationReceipt {
            booking_id,
            room_number,
            customer_name: customer_name.to_string(),
            notice_days,
        })
    }

    // Active bookings hotel-wide, ledger order.
    pub fn booking_summary(&self) -> Vec<BookingSummary> {
        self.bookings
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_active())
            .map(|(id, b)| self.summarize(id, b))
            .collect()
    }

    pub fn customer_details(&self, name: &str) -> Result<CustomerDetails, HotelError> {
        let customer = self
            .customers
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| HotelError::CustomerNotFound(name.to_string()))?;

        let active = customer
            .booking_ids()
            .iter()
            .map(|&id| (id, &self.bookings[id]))
            .filter(|(_, b)| b.is_active())
            .map(|(id, b)| self.summarize(id, b))
            .collect();

        Ok(CustomerDetails {
            name: customer.name().to_string(),
            contact_info: customer.contact_info().to_string(),
            active,
        })
    }

    // Every room with no active booking, insertion order. Empty means full
    // house; presentation layers print their own sentinel.
    pub fn room_availability(&self) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|r| !self.occupancy.is_occupied(r.number()))
            .collect()
    }

    // One line per room in insertion order, booked or not.
    pub fn list_all_features(&self) -> Vec<String> {
        self.rooms
            .iter()
            .map(|r| format!("Room {} features: {}", r.number(), r.feature_list()))
            .collect()
    }

    fn customer_id(&self, name: &str) -> Option<CustomerId> {
        self.customers.iter().position(|c| c.name() == name)
    }

    fn summarize(&self, id: BookingId, booking: &Booking) -> BookingSummary {
        BookingSummary {
            booking_id: id,
            customer_name: self.customers[booking.customer()].name().to_string(),
            room_number: booking.room(),
            check_in: booking.check_in(),
            check_out: booking.check_out(),
            total_cost: booking.total_cost(),
        }
    }
}
