//! Terminal output for orderly.
//!
//! Every line is rendered into a `String` first and then handed to
//! [`print`], which routes it through `tracing` under [`PRINT_TARGET`].

use std::fmt::Display;

use crate::terminal::colors;
use crate::terminal::logging::PRINT_TARGET;
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

/// Key/value details shown under a tree head.
pub type Detail = (String, ColoredString);

/// Values that carry their own color, or take the default one.
pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }
    print(&banner_line());
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    print(&header_line(msg));
}

/// `key....: value`, with the dots padding `key` out to `key_width`.
pub fn aligned_line<V>(key: &str, value: V, key_width: usize)
where
    V: Display + WithDefaultColor,
{
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    print_status(format!(
        "{}{} {}",
        key.color(colors::PRIMARY),
        leader(key, key_width).color(colors::SEPARATOR),
        value
    ));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    print(&format!(
        "{} {}",
        ">".color(colors::SEPARATOR),
        msg.as_ref().color(colors::TEXT_DEFAULT)
    ));
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    print(&format!(
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
}

/// Prints `details` as the branches of the last [`tree_head`].
pub fn tree(details: &[Detail]) {
    for line in tree_lines(details) {
        print(&line);
    }
}

pub fn centerln(msg: &str) {
    let pad: String = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{pad}{msg}{pad}"));
}

pub fn closing_rule() {
    print(&format!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)));
}

fn banner_line() -> String {
    let title: String = format!("⟦ ORDERLY v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let side: String = "═".repeat(TOTAL_WIDTH.saturating_sub(title.width()) / 2);
    format!(
        "{}{}{}",
        side.bright_black(),
        title.bright_green().bold(),
        side.bright_black()
    )
}

fn header_line(msg: &str) -> String {
    let title: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let dashes: usize = TOTAL_WIDTH.saturating_sub(title.chars().count());
    let left: usize = dashes / 2;
    format!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        title.bright_green(),
        "─".repeat(dashes - left).bright_black()
    )
}

/// Dots and a colon that line `key` up with a column `key_width` wide.
fn leader(key: &str, key_width: usize) -> String {
    format!("{}:", ".".repeat((key_width + 1).saturating_sub(key.width())))
}

fn tree_lines(details: &[Detail]) -> Vec<String> {
    let key_width: usize = details.iter().map(|(key, _)| key.width()).max().unwrap_or(0);
    details
        .iter()
        .enumerate()
        .map(|(i, (key, value))| {
            let branch: &str = if i + 1 == details.len() { "└─" } else { "├─" };
            format!(
                " {} {}{} {}",
                branch.bright_black(),
                key.color(colors::TEXT_DEFAULT),
                leader(key, key_width).color(colors::SEPARATOR),
                value
            )
        })
        .collect()
}
