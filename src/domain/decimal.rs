//! Decimal value model: step decomposition, caret side detection, and
//! carry/borrow arithmetic on the integer and fractional components.
//!
//! Values are strings of the shape `-?digits(.digits)?`. They are
//! manipulated as a pair of integers rather than as floats, so no binary
//! rounding error can leak into the displayed text.

use crate::error::{ValueError, ValueResult};
use regex::Regex;

/// Increment/decrement granularity, decomposed from a value-shaped string.
///
/// `"0.01"` decomposes into integer magnitude 0, fractional magnitude 1 and
/// two fractional digits; `"1.50"` into 1 / 50 / 2. The fractional digit
/// count also fixes how many digits the displayed value is padded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Amount added to the integer component per step
    pub integer: i64,
    /// Amount added to the fractional component per step
    pub fraction: i64,
    /// Number of digits in the fractional component
    pub fraction_digits: u32,
}

impl Step {
    /// Parse a step from a value-shaped string.
    ///
    /// The decomposition is a magnitude: the sign of a step is decided by
    /// the operation applying it, so signed strings are rejected. Pure
    /// function of the input; callers re-parse rather than cache so a
    /// changed step string can never drift from its decomposition.
    pub fn parse(s: &str) -> ValueResult<Self> {
        let re = Regex::new(r"^(\d+)(?:\.(\d*))?$").unwrap();
        let caps = re
            .captures(s)
            .ok_or_else(|| ValueError::InvalidStep(s.to_string()))?;

        let integer = caps[1]
            .parse::<i64>()
            .map_err(|_| ValueError::InvalidStep(s.to_string()))?;

        let (fraction, fraction_digits) = match caps.get(2) {
            Some(m) if !m.as_str().is_empty() => {
                let digits = m.as_str().len() as u32;
                // 10^19 overflows i64
                if digits > 18 {
                    return Err(ValueError::InvalidStep(s.to_string()));
                }
                let fraction = m
                    .as_str()
                    .parse::<i64>()
                    .map_err(|_| ValueError::InvalidStep(s.to_string()))?;
                (fraction, digits)
            }
            _ => (0, 0),
        };

        Ok(Self {
            integer,
            fraction,
            fraction_digits,
        })
    }

    /// Wrap-around base for the fractional component (10^fraction_digits)
    pub fn base(&self) -> i64 {
        10i64.pow(self.fraction_digits)
    }

    /// The step magnitude rendered as a value string, optionally negated.
    /// Used as the reset value when stepping an empty or non-numeric value.
    pub fn magnitude(&self, negative: bool) -> String {
        let s = format_parts(self.integer, self.fraction, self.fraction_digits);
        if negative {
            format!("-{}", s)
        } else {
            s
        }
    }
}

impl Default for Step {
    /// Equivalent to `Step::parse("0.01")`
    fn default() -> Self {
        Self {
            integer: 0,
            fraction: 1,
            fraction_digits: 2,
        }
    }
}

/// Integer and fractional components of a decimal value string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parts {
    pub integer: i64,
    pub fraction: i64,
}

/// Split a value string into its components.
///
/// Returns `None` for empty or non-numeric input. A missing fractional
/// substring ("5" or "5.") parses as fraction 0.
pub fn split(value: &str) -> Option<Parts> {
    if value.is_empty() {
        return None;
    }
    let (int_str, frac_str) = match value.split_once('.') {
        Some((i, f)) => (i, f),
        None => (value, ""),
    };
    let integer = int_str.parse::<i64>().ok()?;
    let fraction = if frac_str.is_empty() {
        0
    } else {
        frac_str.parse::<i64>().ok()?
    };
    Some(Parts { integer, fraction })
}

/// Render components back into a value string, with the fractional part
/// zero-padded to `digits`. No separator is emitted when `digits` is 0.
pub fn format_parts(integer: i64, fraction: i64, digits: u32) -> String {
    if digits == 0 {
        integer.to_string()
    } else {
        format!("{}.{:0width$}", integer, fraction, width = digits as usize)
    }
}

/// True when the caret sits on the integer side of the separator.
///
/// The caret offset is compared against the separator position; a value
/// without a separator compares as if the separator sat before the start,
/// so every caret offset reports the fractional side. Callers that need
/// different behavior for separator-less values must handle it themselves.
pub fn cursor_on_integer_side(value: &str, cursor: usize) -> bool {
    match value.find('.') {
        Some(dot) => cursor <= dot,
        None => false,
    }
}

/// Step the value upward at the given caret offset.
///
/// Empty or non-numeric values reset to the positive step magnitude. On the
/// integer side the integer magnitude is added; on the fractional side the
/// fractional magnitude is added and an overflow past `10^fraction_digits`
/// wraps and carries one unit into the integer component. A component that
/// would leave the representable i64 range leaves the value unchanged.
pub fn increment(value: &str, step: &Step, cursor: usize) -> String {
    let Some(Parts {
        mut integer,
        mut fraction,
    }) = split(value)
    else {
        return step.magnitude(false);
    };

    if cursor_on_integer_side(value, cursor) {
        match integer.checked_add(step.integer) {
            Some(i) => integer = i,
            None => return value.to_string(),
        }
    } else {
        fraction = match fraction.checked_add(step.fraction) {
            Some(f) => f,
            None => return value.to_string(),
        };
        if fraction >= step.base() {
            fraction %= step.base();
            match integer.checked_add(1) {
                Some(i) => integer = i,
                None => return value.to_string(),
            }
        }
    }

    format_parts(integer, fraction, step.fraction_digits)
}

/// Step the value downward at the given caret offset.
///
/// Symmetric to [`increment`]: empty or non-numeric values reset to the
/// negated step magnitude, a fractional underflow below zero borrows one
/// unit from the integer component, and an out-of-range component leaves
/// the value unchanged.
pub fn decrement(value: &str, step: &Step, cursor: usize) -> String {
    let Some(Parts {
        mut integer,
        mut fraction,
    }) = split(value)
    else {
        return step.magnitude(true);
    };

    if cursor_on_integer_side(value, cursor) {
        match integer.checked_sub(step.integer) {
            Some(i) => integer = i,
            None => return value.to_string(),
        }
    } else {
        fraction -= step.fraction;
        if fraction < 0 {
            fraction += step.base();
            match integer.checked_sub(1) {
                Some(i) => integer = i,
                None => return value.to_string(),
            }
        }
    }

    format_parts(integer, fraction, step.fraction_digits)
}

/// Gate for manual edits: optional leading minus, any number of integer
/// digits, optional separator followed by at most `fraction_digits`
/// fractional digits. The empty string passes.
pub fn is_valid_edit(text: &str, fraction_digits: u32) -> bool {
    let re = Regex::new(&format!(r"^-?\d*(\.\d{{0,{}}})?$", fraction_digits)).unwrap();
    re.is_match(text)
}
