use colored::*;

use crate::config::Config;
use crate::terminal::{colors, print};
use orderly_core::domain::models::menu::MenuItem;
use orderly_core::domain::models::payment::PaymentMethod;

const KEY_WIDTH: usize = 16;

pub fn menu(cfg: &Config) {
    print::header("menu", cfg.quiet);
    for item in MenuItem::ALL {
        print::aligned_line(
            &format!("[{}] {}", item.choice(), item.name()),
            format!("${:.2}", item.price()).color(colors::AMOUNT),
            KEY_WIDTH,
        );
    }
    print::print(&format!(
        "{}",
        "Any other number orders a burger.".color(colors::SECONDARY)
    ));

    print::header("payment methods", cfg.quiet);
    for method in PaymentMethod::ALL {
        print::aligned_line(
            &format!("[{}] {}", method.choice(), method.label()),
            "accepted",
            KEY_WIDTH,
        );
    }
    print::print(&format!(
        "{}",
        "Any other answer pays with PayPal.".color(colors::SECONDARY)
    ));

    print::closing_rule();
}
