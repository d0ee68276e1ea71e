//! Common types used throughout the front desk

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Room number as printed on the door (101, 202, ...)
pub type RoomId = i32;

/// Confirmation reference handed out for each booking
pub type BookingReference = Uuid;

/// Currency symbol used when nothing else is configured
pub const DEFAULT_CURRENCY: &str = "₹";

/// Availability of a single room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomStatus {
    Available,
    Booked,
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomStatus::Available => write!(f, "AVAILABLE"),
            RoomStatus::Booked => write!(f, "BOOKED"),
        }
    }
}

/// A guest's hold on a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub guest_name: String,
    pub reference: BookingReference,
    pub booked_at: DateTime<Utc>,
}

/// Room definition used to seed the inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSeed {
    pub id: RoomId,
    pub room_type: String,
    pub price: f64,
}

impl RoomSeed {
    pub fn new(id: RoomId, room_type: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            room_type: room_type.into(),
            price,
        }
    }
}

/// Occupancy counts for the whole inventory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total: usize,
    pub available: usize,
    pub booked: usize,
}

impl std::fmt::Display for InventorySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rooms ({} available, {} booked)",
            self.total, self.available, self.booked
        )
    }
}
