//! Room entity and its display format
//!
//! A room is a pure data holder. Its two mutators do not guard against
//! double booking or cancelling a free room; the inventory checks state
//! before calling them.

use crate::types::{Booking, RoomId, RoomSeed, RoomStatus, DEFAULT_CURRENCY};
use crate::utils::{current_timestamp, format_price, generate_booking_reference};
use serde::Serialize;

/// One bookable room
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    id: RoomId,
    room_type: String,
    price: f64,
    booking: Option<Booking>,
}

impl Room {
    /// Create an available room
    pub fn new(id: RoomId, room_type: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            room_type: room_type.into(),
            price,
            booking: None,
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn room_type(&self) -> &str {
        &self.room_type
    }

    /// Nightly rate
    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn is_booked(&self) -> bool {
        self.booking.is_some()
    }

    pub fn status(&self) -> RoomStatus {
        if self.is_booked() {
            RoomStatus::Booked
        } else {
            RoomStatus::Available
        }
    }

    /// Guest holding the room, if any
    pub fn guest_name(&self) -> Option<&str> {
        self.booking
            .as_ref()
            .map(|booking| booking.guest_name.as_str())
    }

    pub fn booking(&self) -> Option<&Booking> {
        self.booking.as_ref()
    }

    /// Attach a booking for `guest_name`, replacing any existing one
    pub fn book(&mut self, guest_name: impl Into<String>) -> &Booking {
        self.booking.insert(Booking {
            guest_name: guest_name.into(),
            reference: generate_booking_reference(),
            booked_at: current_timestamp(),
        })
    }

    /// Drop the current booking and return it
    pub fn cancel(&mut self) -> Option<Booking> {
        self.booking.take()
    }

    /// Render the room using the given currency symbol
    ///
    /// `Room 101 | Single | ₹999.00 | AVAILABLE` or
    /// `Room 101 | Single | ₹999.00 | BOOKED (Guest: Alice)`
    pub fn render(&self, currency: &str) -> String {
        let mut line = format!(
            "Room {} | {} | {} | {}",
            self.id,
            self.room_type,
            format_price(currency, self.price),
            self.status()
        );
        if let Some(guest) = self.guest_name() {
            line.push_str(&format!(" (Guest: {})", guest));
        }
        line
    }
}

impl From<RoomSeed> for Room {
    fn from(seed: RoomSeed) -> Self {
        Room::new(seed.id, seed.room_type, seed.price)
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(DEFAULT_CURRENCY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_room_is_available() {
        let room = Room::new(101, "Single", 999.0);
        assert_eq!(room.id(), 101);
        assert_eq!(room.room_type(), "Single");
        assert_eq!(room.price(), 999.0);
        assert!(!room.is_booked());
        assert_eq!(room.status(), RoomStatus::Available);
        assert!(room.guest_name().is_none());
    }

    #[test]
    fn test_book_and_cancel() {
        let mut room = Room::new(201, "Double", 1499.0);

        let reference = room.book("Alice").reference;
        assert!(room.is_booked());
        assert_eq!(room.guest_name(), Some("Alice"));
        assert_eq!(room.booking().unwrap().reference, reference);

        let released = room.cancel().unwrap();
        assert_eq!(released.guest_name, "Alice");
        assert!(!room.is_booked());
        assert!(room.guest_name().is_none());
    }

    #[test]
    fn test_cancel_available_room_is_noop() {
        let mut room = Room::new(301, "Deluxe", 2499.0);
        assert!(room.cancel().is_none());
        assert_eq!(room, Room::new(301, "Deluxe", 2499.0));
    }

    #[test]
    fn test_display_available() {
        let room = Room::new(101, "Single", 999.0);
        assert_eq!(room.to_string(), "Room 101 | Single | ₹999.00 | AVAILABLE");
    }

    #[test]
    fn test_display_booked() {
        let mut room = Room::new(302, "Deluxe", 2799.0);
        room.book("Bob");
        assert_eq!(
            room.to_string(),
            "Room 302 | Deluxe | ₹2799.00 | BOOKED (Guest: Bob)"
        );
    }

    #[test]
    fn test_render_with_custom_currency() {
        let room = Room::new(202, "Double", 1499.5);
        assert_eq!(room.render("$"), "Room 202 | Double | $1499.50 | AVAILABLE");
    }

    #[test]
    fn test_from_seed() {
        let room: Room = RoomSeed::new(102, "Single", 999.0).into();
        assert_eq!(room, Room::new(102, "Single", 999.0));
    }
}
