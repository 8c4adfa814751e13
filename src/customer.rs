// Customer identity and booking history
use crate::booking::BookingId;
use serde::{Deserialize, Serialize};

pub type CustomerId = usize;

// Identity plus an append-only booking history. Cancelled bookings stay in
// the list; active views are derived by the hotel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    contact_info: String,
    bookings: Vec<BookingId>,
}

impl Customer {
    pub(crate) fn new(name: impl Into<String>, contact_info: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact_info: contact_info.into(),
            bookings: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact_info(&self) -> &str {
        &self.contact_info
    }

    pub fn contact_line(&self) -> String {
        format!("{}'s contact info: {}", self.name, self.contact_info)
    }

    pub fn booking_ids(&self) -> &[BookingId] {
        &self.bookings
    }

    pub(crate) fn record_booking(&mut self, id: BookingId) {
        self.bookings.push(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_line() {
        let customer = Customer::new("Alice", "alice@example.com");
        assert_eq!(
            customer.contact_line(),
            "Alice's contact info: alice@example.com"
        );
    }

    #[test]
    fn test_history_is_append_only() {
        let mut customer = Customer::new("Bob", "bob@example.com");
        assert!(customer.booking_ids().is_empty());

        customer.record_booking(0);
        customer.record_booking(3);
        assert_eq!(customer.booking_ids(), &[0, 3]);
    }
}
