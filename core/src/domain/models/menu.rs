//! # Menu Model
//!
//! The items a customer can order, and how a typed choice maps onto them.

use std::fmt;
use std::num::IntErrorKind;

use crate::domain::error::ChoiceError;

/// An orderable item with a fixed price.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItem {
    Donut,
    Burger,
}

impl MenuItem {
    pub const ALL: [MenuItem; 2] = [MenuItem::Donut, MenuItem::Burger];

    pub fn name(&self) -> &'static str {
        match self {
            MenuItem::Donut => "Donut",
            MenuItem::Burger => "Burger",
        }
    }

    pub fn price(&self) -> f64 {
        match self {
            MenuItem::Donut => 20.0,
            MenuItem::Burger => 40.0,
        }
    }

    /// The number a customer types to pick this item.
    pub fn choice(&self) -> u8 {
        match self {
            MenuItem::Donut => 1,
            MenuItem::Burger => 2,
        }
    }

    /// Maps a typed item choice onto the menu.
    ///
    /// The choice must be a whole number. `1` selects the donut and every
    /// other number falls back to the burger; this fallback is the menu's
    /// default, not a validation step.
    pub fn from_choice(raw: &str) -> Result<Self, ChoiceError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ChoiceError::Empty);
        }
        match raw.parse::<i64>() {
            Ok(1) => Ok(MenuItem::Donut),
            Ok(_) => Ok(MenuItem::Burger),
            // Too large for i64, but still a number.
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                Ok(MenuItem::Burger)
            }
            Err(_) => Err(ChoiceError::NotANumber(raw.to_string())),
        }
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
