//! # Discount Strategies
//!
//! A [`Discount`] turns a list price into the price the customer pays. New
//! pricing rules are added as new implementations; callers only ever see the
//! trait.

/// Applies a price reduction.
pub trait Discount {
    fn apply_discount(&self, price: f64) -> f64;
}

/// Leaves the price untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NoDiscount;

impl Discount for NoDiscount {
    fn apply_discount(&self, price: f64) -> f64 {
        price
    }
}

/// Takes `percentage` percent off the price.
///
/// The percentage is not range checked: values above 100 produce a negative
/// price and negative values raise it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PercentageDiscount {
    percentage: f64,
}

impl PercentageDiscount {
    pub fn new(percentage: f64) -> Self {
        Self { percentage }
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }
}

impl Discount for PercentageDiscount {
    fn apply_discount(&self, price: f64) -> f64 {
        price - (price * self.percentage / 100.0)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
