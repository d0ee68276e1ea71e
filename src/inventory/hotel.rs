//! Room inventory and booking operations
//!
//! Rooms are kept in insertion order. Every lookup is a linear scan where
//! the first match wins, which also decides which room a type booking
//! picks.

use crate::error::{BookingError, Result};
use crate::inventory::provider::RoomProvider;
use crate::inventory::room::Room;
use crate::types::{InventorySummary, RoomId};
use crate::utils::room_types_match;
use serde::Serialize;
use tracing::{debug, info};

/// Ordered collection of every room in the hotel
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoomInventory {
    rooms: Vec<Room>,
}

impl RoomInventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self { rooms: Vec::new() }
    }

    /// Create an inventory holding every room the provider supplies
    pub fn from_provider(provider: &dyn RoomProvider) -> Result<Self> {
        let mut inventory = Self::new();
        for seed in provider.seed_rooms()? {
            inventory.add_room(seed.into());
        }

        info!("Seeded inventory with {} rooms", inventory.len());
        Ok(inventory)
    }

    /// Append a room; ids are not checked for uniqueness
    pub fn add_room(&mut self, room: Room) {
        debug!(room_id = room.id(), room_type = room.room_type(), "Adding room");
        self.rooms.push(room);
    }

    pub fn all_rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Rooms that are not booked, in insertion order
    pub fn available_rooms(&self) -> Vec<&Room> {
        self.rooms.iter().filter(|room| !room.is_booked()).collect()
    }

    /// First room with the given id
    pub fn find_room_by_id(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id() == id)
    }

    fn find_room_by_id_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.id() == id)
    }

    /// Book the room with the given id for `guest_name`
    pub fn book_by_id(
        &mut self,
        id: RoomId,
        guest_name: &str,
    ) -> std::result::Result<&Room, BookingError> {
        ensure_guest_name(guest_name)?;

        let room = self
            .find_room_by_id_mut(id)
            .ok_or(BookingError::NotFound { room_id: id })?;

        if room.is_booked() {
            debug!(room_id = id, "Rejecting booking for a booked room");
            return Err(BookingError::AlreadyBooked { room_id: id });
        }

        let reference = room.book(guest_name).reference;
        info!(room_id = id, guest = guest_name, %reference, "Room booked");
        Ok(room)
    }

    /// Book the first available room whose type matches, ignoring case
    pub fn book_by_type(
        &mut self,
        room_type: &str,
        guest_name: &str,
    ) -> std::result::Result<&Room, BookingError> {
        ensure_guest_name(guest_name)?;

        let room = self
            .rooms
            .iter_mut()
            .find(|room| !room.is_booked() && room_types_match(room.room_type(), room_type))
            .ok_or_else(|| BookingError::NoMatchingType {
                room_type: room_type.to_string(),
            })?;

        let reference = room.book(guest_name).reference;
        info!(
            room_id = room.id(),
            room_type = room.room_type(),
            guest = guest_name,
            %reference,
            "Room booked by type"
        );
        Ok(room)
    }

    /// Release the booking on the room with the given id
    pub fn cancel_by_id(&mut self, id: RoomId) -> std::result::Result<&Room, BookingError> {
        let room = self
            .find_room_by_id_mut(id)
            .ok_or(BookingError::NotFound { room_id: id })?;

        match room.cancel() {
            Some(booking) => {
                info!(
                    room_id = id,
                    guest = booking.guest_name.as_str(),
                    reference = %booking.reference,
                    "Booking cancelled"
                );
                Ok(room)
            }
            None => {
                debug!(room_id = id, "Rejecting cancellation for an available room");
                Err(BookingError::NotBooked { room_id: id })
            }
        }
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Occupancy counts
    pub fn summary(&self) -> InventorySummary {
        let booked = self.rooms.iter().filter(|room| room.is_booked()).count();
        InventorySummary {
            total: self.rooms.len(),
            available: self.rooms.len() - booked,
            booked,
        }
    }
}

fn ensure_guest_name(guest_name: &str) -> std::result::Result<(), BookingError> {
    if guest_name.trim().is_empty() {
        debug!("Rejecting booking without a guest name");
        return Err(BookingError::EmptyGuestName);
    }
    Ok(())
}
