//! Reusable UI widgets for decimal-tui.

pub mod decimal_input;
pub mod help;
