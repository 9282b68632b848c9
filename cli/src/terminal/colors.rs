use colored::Color;

pub const PRIMARY: Color = Color::BrightCyan;
pub const SECONDARY: Color = Color::Cyan;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const AMOUNT: Color = Color::BrightGreen;
