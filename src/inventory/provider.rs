//! Room providers used to seed the inventory at startup
//!
//! The static provider carries the hotel's default room list. The
//! configured provider takes the list from the config file instead.

use crate::error::{FrontDeskError, Result};
use crate::types::{RoomId, RoomSeed};
use std::collections::HashSet;
use tracing::warn;

/// Source of the initial room list
pub trait RoomProvider {
    /// Rooms to add, in insertion order
    fn seed_rooms(&self) -> Result<Vec<RoomSeed>>;
}

/// The hotel's built-in room list
///
/// Two Single rooms at 999, two Double rooms at 1499, and two Deluxe rooms
/// at 2499 and 2799.
#[derive(Debug, Clone, Default)]
pub struct StaticRoomProvider;

impl StaticRoomProvider {
    pub fn new() -> Self {
        Self
    }
}

impl RoomProvider for StaticRoomProvider {
    fn seed_rooms(&self) -> Result<Vec<RoomSeed>> {
        Ok(vec![
            RoomSeed::new(101, "Single", 999.0),
            RoomSeed::new(102, "Single", 999.0),
            RoomSeed::new(201, "Double", 1499.0),
            RoomSeed::new(202, "Double", 1499.0),
            RoomSeed::new(301, "Deluxe", 2499.0),
            RoomSeed::new(302, "Deluxe", 2799.0),
        ])
    }
}

/// Room list supplied through configuration
#[derive(Debug, Clone)]
pub struct ConfiguredRoomProvider {
    seeds: Vec<RoomSeed>,
}

impl ConfiguredRoomProvider {
    /// Create a provider after validating every seed
    pub fn new(seeds: Vec<RoomSeed>) -> Result<Self> {
        validate_seeds(&seeds)?;
        Ok(Self { seeds })
    }
}

impl RoomProvider for ConfiguredRoomProvider {
    fn seed_rooms(&self) -> Result<Vec<RoomSeed>> {
        Ok(self.seeds.clone())
    }
}

/// Check a room list for values the inventory cannot represent
///
/// Duplicate ids are accepted: lookups resolve to the first room with a
/// given id, so later duplicates are only reachable through type booking.
pub fn validate_seeds(seeds: &[RoomSeed]) -> Result<()> {
    let mut seen: HashSet<RoomId> = HashSet::new();

    for seed in seeds {
        if seed.room_type.trim().is_empty() {
            return Err(FrontDeskError::InvalidRoomSeed {
                reason: format!("room {} has an empty type", seed.id),
            }
            .into());
        }

        if !seed.price.is_finite() || seed.price < 0.0 {
            return Err(FrontDeskError::InvalidRoomSeed {
                reason: format!("room {} has invalid price {}", seed.id, seed.price),
            }
            .into());
        }

        if !seen.insert(seed.id) {
            warn!(
                room_id = seed.id,
                "Duplicate room id in seed list, lookups will resolve to the first one"
            );
        }
    }

    Ok(())
}
