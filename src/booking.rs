// Booking record: cost derivation and the active/cancelled status flip
use crate::customer::CustomerId;
use crate::error::HotelError;
use crate::room::RoomNumber;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

pub type BookingId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Active,
    Cancelled,
}

// Stay cost: nights * nightly rate, plus tax on the base. This is the single
// place the formula lives; bookings cache the result at construction.
pub fn stay_cost(
    check_in: NaiveDate,
    check_out: NaiveDate,
    nightly_rate: f64,
    tax_rate: f64,
) -> f64 {
    let nights = (check_out - check_in).num_days();
    let base = nights as f64 * nightly_rate;
    base + base * tax_rate
}

// One customer's stay in one room. Immutable after creation except for the
// one-way Active -> Cancelled transition. The total cost is computed once and
// kept for the ledger even after cancellation; there are no refunds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    customer: CustomerId,
    room: RoomNumber,
    check_in: NaiveDate,
    check_out: NaiveDate,
    booked_on: DateTime<Local>,
    status: BookingStatus,
    total_cost: f64,
}

impl Booking {
    pub(crate) fn new(
        customer: CustomerId,
        room: RoomNumber,
        check_in: NaiveDate,
        check_out: NaiveDate,
        nightly_rate: f64,
        tax_rate: f64,
    ) -> Self {
        Self {
            customer,
            room,
            check_in,
            check_out,
            booked_on: Local::now(),
            status: BookingStatus::Active,
            total_cost: stay_cost(check_in, check_out, nightly_rate, tax_rate),
        }
    }

    pub fn customer(&self) -> CustomerId {
        self.customer
    }

    pub fn room(&self) -> RoomNumber {
        self.room
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn booked_on(&self) -> DateTime<Local> {
        self.booked_on
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == BookingStatus::Active
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    // Flips Active -> Cancelled exactly once. The hotel releases the room;
    // the cost stays on record.
    pub(crate) fn cancel(&mut self) -> Result<(), HotelError> {
        if self.status == BookingStatus::Cancelled {
            return Err(HotelError::AlreadyCancelled);
        }
        self.status = BookingStatus::Cancelled;
        Ok(())
    }
}
