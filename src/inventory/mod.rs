//! Room inventory for the front desk
//!
//! This module owns the rooms, the booking and cancellation rules, and the
//! providers used to seed the inventory at startup.

pub mod hotel;
pub mod provider;
pub mod room;

// Re-export commonly used types
pub use hotel::RoomInventory;
pub use provider::{validate_seeds, ConfiguredRoomProvider, RoomProvider, StaticRoomProvider};
pub use room::Room;
