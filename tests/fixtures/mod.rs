//! Test fixtures and mock implementations for integration testing

#![allow(dead_code)]

use front_desk::console::{Console, ConsoleSettings, SessionEnd};
use front_desk::inventory::{Room, RoomInventory, RoomProvider, StaticRoomProvider};
use front_desk::types::{RoomId, RoomSeed};
use mockall::mock;

mock! {
    pub Provider {}

    impl RoomProvider for Provider {
        fn seed_rooms(&self) -> front_desk::Result<Vec<RoomSeed>>;
    }
}

/// Inventory seeded with the hotel's built-in six rooms
pub fn seeded_inventory() -> RoomInventory {
    RoomInventory::from_provider(&StaticRoomProvider::new()).unwrap()
}

/// Inventory built from `(id, type, price)` triples in order
pub fn inventory_of(rooms: &[(RoomId, &str, f64)]) -> RoomInventory {
    let mut inventory = RoomInventory::new();
    for (id, room_type, price) in rooms {
        inventory.add_room(Room::new(*id, *room_type, *price));
    }
    inventory
}

/// Feed `input` to a console over `inventory` and capture everything it prints
pub fn run_script(inventory: &mut RoomInventory, input: &str) -> (SessionEnd, String) {
    let mut output = Vec::new();
    let end = Console::new(
        inventory,
        input.as_bytes(),
        &mut output,
        ConsoleSettings::default(),
    )
    .run()
    .unwrap();

    (end, String::from_utf8(output).unwrap())
}

/// Snapshot of the observable state of every room
pub fn room_states(inventory: &RoomInventory) -> Vec<(RoomId, String, f64, bool, Option<String>)> {
    inventory
        .all_rooms()
        .iter()
        .map(|room| {
            (
                room.id(),
                room.room_type().to_string(),
                room.price(),
                room.is_booked(),
                room.guest_name().map(str::to_string),
            )
        })
        .collect()
}
