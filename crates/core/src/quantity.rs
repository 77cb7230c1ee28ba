//! Stock quantities: whole or fractional, always compared numerically.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Sub};
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Amount of an item held in stock.
///
/// Whole amounts stay whole under addition/subtraction (falling back to a
/// fractional value on `i64` overflow); any fractional operand makes the result
/// fractional. Serializes as a bare JSON number, so `7` and `7.5` round-trip
/// with their representation intact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Whole(i64),
    Fractional(f64),
}

impl Quantity {
    pub const ZERO: Quantity = Quantity::Whole(0);

    pub fn as_f64(self) -> f64 {
        match self {
            Quantity::Whole(n) => n as f64,
            Quantity::Fractional(x) => x,
        }
    }

    /// `true` for finite values strictly above zero.
    pub fn is_positive(self) -> bool {
        match self {
            Quantity::Whole(n) => n > 0,
            Quantity::Fractional(x) => x.is_finite() && x > 0.0,
        }
    }

    /// Accept this quantity as an amount to add or remove.
    pub fn positive(self) -> DomainResult<Self> {
        if self.is_positive() {
            Ok(self)
        } else {
            Err(DomainError::validation(format!(
                "quantity must be positive, got {self}"
            )))
        }
    }
}

impl ValueObject for Quantity {}

impl Default for Quantity {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Quantity::Whole(a), Quantity::Whole(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Quantity::Whole(a), Quantity::Whole(b)) => a.partial_cmp(b),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Quantity::Whole(a), Quantity::Whole(b)) => a
                .checked_add(b)
                .map(Quantity::Whole)
                .unwrap_or(Quantity::Fractional(a as f64 + b as f64)),
            _ => Quantity::Fractional(self.as_f64() + rhs.as_f64()),
        }
    }
}

impl Sub for Quantity {
    type Output = Quantity;

    fn sub(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Quantity::Whole(a), Quantity::Whole(b)) => a
                .checked_sub(b)
                .map(Quantity::Whole)
                .unwrap_or(Quantity::Fractional(a as f64 - b as f64)),
            _ => Quantity::Fractional(self.as_f64() - rhs.as_f64()),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Whole(n) => fmt::Display::fmt(n, f),
            Quantity::Fractional(x) => fmt::Display::fmt(x, f),
        }
    }
}

impl FromStr for Quantity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Quantity::Whole(n));
        }
        match s.parse::<f64>() {
            Ok(x) if x.is_finite() => Ok(Quantity::Fractional(x)),
            _ => Err(DomainError::validation(format!(
                "quantity must be a number, got '{s}'"
            ))),
        }
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Quantity::Whole(value)
    }
}

impl From<i32> for Quantity {
    fn from(value: i32) -> Self {
        Quantity::Whole(value.into())
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Quantity::Whole(value.into())
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Quantity::Fractional(value)
    }
}
