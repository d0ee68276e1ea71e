//! Menu choices offered to the operator

/// Horizontal rule framing the main menu
pub const MENU_RULE: &str = "-------------------------------------------------";

/// Main menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewAvailable,
    Book,
    Cancel,
    ViewAll,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::ViewAvailable,
        MenuChoice::Book,
        MenuChoice::Cancel,
        MenuChoice::ViewAll,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> i32 {
        match self {
            MenuChoice::ViewAvailable => 1,
            MenuChoice::Book => 2,
            MenuChoice::Cancel => 3,
            MenuChoice::ViewAll => 4,
            MenuChoice::Exit => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ViewAvailable => "View available rooms",
            MenuChoice::Book => "Book a room",
            MenuChoice::Cancel => "Cancel booking",
            MenuChoice::ViewAll => "View all rooms",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl TryFrom<i32> for MenuChoice {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.number() == value)
            .ok_or(value)
    }
}

/// How the operator wants to pick a room when booking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingMode {
    ById,
    ByType,
}

impl TryFrom<i32> for BookingMode {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(BookingMode::ById),
            2 => Ok(BookingMode::ByType),
            other => Err(other),
        }
    }
}
