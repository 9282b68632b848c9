pub mod menu;
pub mod order;

use clap::{ArgAction, Args, Parser, Subcommand};
use orderly_core::application::services::checkout::DEFAULT_ORDER_ID;

#[derive(Parser)]
#[command(name = "orderly")]
#[command(about = "Order something, pay for it and get notified.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Less output (-q hides the banner and headers)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Place an order (the default when no command is given)
    #[command(alias = "o")]
    Order(OrderArgs),
    /// Show the menu and the accepted payment methods
    #[command(alias = "m")]
    Menu,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct OrderArgs {
    /// Item choice: 1 for a donut, any other number for a burger. Prompted for when omitted
    #[arg(long, allow_hyphen_values = true)]
    pub item: Option<String>,

    /// Payment choice: 1 for credit card, anything else for PayPal. Prompted for when omitted
    #[arg(long, allow_hyphen_values = true)]
    pub payment: Option<String>,

    /// Percentage taken off the item price (0-100)
    #[arg(long, value_parser = parse_percentage)]
    pub discount: Option<f64>,

    /// Identifier given to the order
    #[arg(long, default_value_t = DEFAULT_ORDER_ID)]
    pub order_id: u32,
}

impl Default for OrderArgs {
    fn default() -> Self {
        Self {
            item: None,
            payment: None,
            discount: None,
            order_id: DEFAULT_ORDER_ID,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn parse_percentage(raw: &str) -> Result<f64, String> {
    let percentage: f64 = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if !(0.0..=100.0).contains(&percentage) {
        return Err(format!("{percentage} is outside 0-100"));
    }
    Ok(percentage)
}
