//! Utility functions for the front desk

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::types::BookingReference;

/// Generate a new unique booking reference
pub fn generate_booking_reference() -> BookingReference {
    Uuid::new_v4()
}

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Case-insensitive comparison of two room type labels
///
/// Characters are compared one at a time: two characters match when they
/// are equal, share an uppercase form, or share a lowercase form after
/// uppercasing. Mappings that expand to several characters are not
/// applied, so `Straße` and `STRASSE` differ.
pub fn room_types_match(left: &str, right: &str) -> bool {
    left.chars().count() == right.chars().count()
        && left.chars().zip(right.chars()).all(|(a, b)| {
            if a == b {
                return true;
            }
            let (upper_a, upper_b) = (simple_uppercase(a), simple_uppercase(b));
            upper_a == upper_b || simple_lowercase(upper_a) == simple_lowercase(upper_b)
        })
}

fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn simple_lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Render a nightly rate with its currency symbol and two decimals
pub fn format_price(currency: &str, price: f64) -> String {
    format!("{}{:.2}", currency, price)
}
