//! Front Desk - hotel room inventory and bookings
//!
//! This crate provides an in-memory room inventory with booking and
//! cancellation rules, plus the interactive console an operator uses to
//! drive it.

pub mod config;
pub mod console;
pub mod error;
pub mod inventory;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{BookingError, FrontDeskError, Result};
pub use types::*;

// Re-export key components
pub use console::{Console, ConsoleSettings, SessionEnd};
pub use inventory::{Room, RoomInventory, RoomProvider, StaticRoomProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
