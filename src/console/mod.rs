//! Operator console for the front desk
//!
//! This module drives the interactive menu: it prints options, validates
//! what the operator types, calls into the room inventory and renders the
//! results.

pub mod menu;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use menu::{BookingMode, MenuChoice};
pub use prompt::Prompter;
pub use session::{Console, ConsoleSettings, SessionEnd};
