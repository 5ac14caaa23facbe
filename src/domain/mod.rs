//! Domain model for decimal-tui.
//!
//! The decimal module holds the pure value/step arithmetic; nothing in
//! here knows about terminals or widgets.

mod decimal;

pub use decimal::{
    cursor_on_integer_side, decrement, format_parts, increment, is_valid_edit, split, Parts, Step,
};
