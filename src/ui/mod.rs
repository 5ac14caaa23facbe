//! UI components for decimal-tui.
//!
//! This module contains:
//! - layout: Host page rendering
//! - input: Chrome-level keyboard handling
//! - widgets: The decimal input field, step buttons and help overlay

pub mod input;
pub mod layout;
pub mod widgets;
