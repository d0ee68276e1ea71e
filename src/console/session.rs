//! Interactive operator session
//!
//! The console borrows the inventory for the length of the session and
//! turns booking outcomes into operator messages.

use crate::config::HotelSettings;
use crate::console::menu::{BookingMode, MenuChoice, MENU_RULE};
use crate::console::prompt::Prompter;
use crate::error::{BookingError, FrontDeskError, Result};
use crate::inventory::RoomInventory;
use crate::types::DEFAULT_CURRENCY;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Display settings for a console session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleSettings {
    pub hotel_name: String,
    pub currency_symbol: String,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            hotel_name: "SyntecxHub".to_string(),
            currency_symbol: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl From<&HotelSettings> for ConsoleSettings {
    fn from(hotel: &HotelSettings) -> Self {
        Self {
            hotel_name: hotel.name.clone(),
            currency_symbol: hotel.currency_symbol.clone(),
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The operator chose Exit
    Exited,
    /// Input ran out before the operator chose Exit
    InputClosed,
}

enum Flow {
    Continue,
    Exit,
}

/// Menu-driven front desk session over any line reader and writer
pub struct Console<'a, R, W> {
    inventory: &'a mut RoomInventory,
    prompter: Prompter<R, W>,
    settings: ConsoleSettings,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(
        inventory: &'a mut RoomInventory,
        input: R,
        output: W,
        settings: ConsoleSettings,
    ) -> Self {
        Self {
            inventory,
            prompter: Prompter::new(input, output),
            settings,
        }
    }

    /// Run the menu loop until the operator exits or input ends
    pub fn run(&mut self) -> Result<SessionEnd> {
        self.prompter.say(format!(
            "=== Welcome to {} Hotel Booking System ===",
            self.settings.hotel_name
        ))?;

        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    info!("Operator ended the session");
                    return Ok(SessionEnd::Exited);
                }
                Err(e) => {
                    if matches!(
                        e.downcast_ref::<FrontDeskError>(),
                        Some(FrontDeskError::InputClosed)
                    ) {
                        info!("Input closed, ending session");
                        return Ok(SessionEnd::InputClosed);
                    }
                    return Err(e);
                }
            }
        }
    }

    fn step(&mut self) -> Result<Flow> {
        self.print_menu()?;
        let number = self.prompter.read_int("Choose an option: ")?;

        let flow = match MenuChoice::try_from(number) {
            Ok(MenuChoice::ViewAvailable) => {
                self.show_available_rooms()?;
                Flow::Continue
            }
            Ok(MenuChoice::Book) => {
                self.book_room()?;
                Flow::Continue
            }
            Ok(MenuChoice::Cancel) => {
                self.cancel_booking()?;
                Flow::Continue
            }
            Ok(MenuChoice::ViewAll) => {
                self.show_all_rooms()?;
                Flow::Continue
            }
            Ok(MenuChoice::Exit) => {
                self.prompter
                    .say("Thank you for using the system. Goodbye!")?;
                Flow::Exit
            }
            Err(other) => {
                debug!(choice = other, "Rejected menu choice");
                self.prompter
                    .say("Invalid choice. Enter a number between 1-5.")?;
                Flow::Continue
            }
        };

        self.prompter.blank()?;
        Ok(flow)
    }

    fn print_menu(&mut self) -> Result<()> {
        self.prompter.say(MENU_RULE)?;
        for choice in MenuChoice::ALL {
            self.prompter
                .say(format!("{}. {}", choice.number(), choice.label()))?;
        }
        self.prompter.say(MENU_RULE)
    }

    fn show_available_rooms(&mut self) -> Result<()> {
        let lines: Vec<String> = self
            .inventory
            .available_rooms()
            .iter()
            .map(|room| room.render(&self.settings.currency_symbol))
            .collect();

        if lines.is_empty() {
            return self.prompter.say("No rooms available right now.");
        }

        self.prompter.say("Available Rooms:")?;
        for line in lines {
            self.prompter.say(line)?;
        }
        Ok(())
    }

    fn show_all_rooms(&mut self) -> Result<()> {
        let lines: Vec<String> = self
            .inventory
            .all_rooms()
            .iter()
            .map(|room| room.render(&self.settings.currency_symbol))
            .collect();

        self.prompter.say("All Rooms:")?;
        for line in lines {
            self.prompter.say(line)?;
        }
        Ok(())
    }

    fn book_room(&mut self) -> Result<()> {
        self.prompter.say("Booking Menu:")?;
        self.prompter.say("1. Book by Room ID")?;
        self.prompter
            .say("2. Book by Room Type (Single/Double/Deluxe)")?;
        let number = self.prompter.read_int("Choose 1 or 2: ")?;

        match BookingMode::try_from(number) {
            Ok(BookingMode::ById) => self.book_by_id(),
            Ok(BookingMode::ByType) => self.book_by_type(),
            Err(_) => self.prompter.say("Invalid option."),
        }
    }

    fn book_by_id(&mut self) -> Result<()> {
        let id = self.prompter.read_int("Enter Room ID to book: ")?;

        // Reject unknown and booked rooms before prompting for a guest
        match self.inventory.find_room_by_id(id) {
            None => return self.prompter.say("Room ID not found."),
            Some(room) if room.is_booked() => {
                return self.prompter.say("Room is already booked.")
            }
            Some(_) => {}
        }

        let guest = self.prompter.read_non_empty("Enter guest name: ")?;
        let message = match self.inventory.book_by_id(id, &guest) {
            Ok(room) => format!(
                "Booked successfully! {}",
                room.render(&self.settings.currency_symbol)
            ),
            Err(e) => {
                debug!(room_id = id, error = %e, "Booking by id failed");
                "Booking failed. Try again.".to_string()
            }
        };
        self.prompter.say(message)
    }

    fn book_by_type(&mut self) -> Result<()> {
        let room_type = self
            .prompter
            .read_non_empty("Enter room type (Single/Double/Deluxe): ")?;
        let guest = self.prompter.read_non_empty("Enter guest name: ")?;

        let message = match self.inventory.book_by_type(&room_type, &guest) {
            Ok(room) => format!(
                "Booked successfully! {}",
                room.render(&self.settings.currency_symbol)
            ),
            Err(BookingError::NoMatchingType { room_type }) => {
                format!("No available rooms of type: {}", room_type)
            }
            Err(e) => {
                debug!(room_type = room_type.as_str(), error = %e, "Booking by type failed");
                "Booking failed. Try again.".to_string()
            }
        };
        self.prompter.say(message)
    }

    fn cancel_booking(&mut self) -> Result<()> {
        let id = self
            .prompter
            .read_int("Enter Room ID to cancel booking: ")?;

        let message = match self.inventory.cancel_by_id(id) {
            Ok(_) => format!("Booking cancelled successfully for room {}", id),
            Err(BookingError::NotFound { .. }) => "Room ID not found.".to_string(),
            Err(BookingError::NotBooked { .. }) => "Room is not currently booked.".to_string(),
            Err(e) => e.to_string(),
        };
        self.prompter.say(message)
    }
}
