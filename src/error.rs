//! Error types for the front desk
//!
//! Booking outcomes are plain values the console turns into operator
//! messages. Everything around them (config, seeding, console I/O) uses
//! anyhow for propagation.

use crate::types::RoomId;

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Expected, recoverable outcomes of inventory operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Room not found: {room_id}")]
    NotFound { room_id: RoomId },

    #[error("Room is already booked: {room_id}")]
    AlreadyBooked { room_id: RoomId },

    #[error("Room is not currently booked: {room_id}")]
    NotBooked { room_id: RoomId },

    #[error("No available rooms of type: {room_type}")]
    NoMatchingType { room_type: String },

    #[error("Guest name cannot be empty")]
    EmptyGuestName,
}

/// Errors raised by the layers around the inventory
#[derive(Debug, thiserror::Error)]
pub enum FrontDeskError {
    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Invalid room seed: {reason}")]
    InvalidRoomSeed { reason: String },

    #[error("Operator input closed")]
    InputClosed,
}
