//! decimal-tui: a terminal decimal input field.
//!
//! The caret's side of the decimal separator decides whether Up/Down steps
//! the integer or the fractional part; typed input is gated to a
//! numeric-with-limited-decimals pattern.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use app::App;
pub use config::AppConfig;
pub use error::{AppError, Result};
