mod checkout;
pub mod utils;
