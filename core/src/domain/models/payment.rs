use std::fmt;

/// How the customer pays for an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentMethod {
    CreditCard,
    PayPal,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::CreditCard, PaymentMethod::PayPal];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
        }
    }

    pub fn choice(&self) -> u8 {
        match self {
            PaymentMethod::CreditCard => 1,
            PaymentMethod::PayPal => 2,
        }
    }

    /// `"1"` selects the credit card, anything else selects PayPal.
    pub fn from_choice(raw: &str) -> Self {
        match raw.trim() {
            "1" => PaymentMethod::CreditCard,
            _ => PaymentMethod::PayPal,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
