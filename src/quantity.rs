//! Quantities

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Quantity outside the accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("quantity must be between {min} and {max}, got {value}", min = Quantity::MIN, max = Quantity::MAX)]
pub struct QuantityError {
    /// The rejected value.
    pub value: i64,
}

/// A cart line quantity, always within `[Quantity::MIN, Quantity::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// Smallest quantity a line can hold.
    pub const MIN: u32 = 1;

    /// Largest quantity a line can hold.
    pub const MAX: u32 = 10;

    /// A single unit.
    pub const ONE: Quantity = Quantity(1);

    /// Create a quantity.
    ///
    /// # Errors
    ///
    /// Returns a `QuantityError` if `value` is outside `[MIN, MAX]`.
    pub fn new(value: i64) -> Result<Self, QuantityError> {
        u32::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
            .ok_or(QuantityError { value })
    }

    /// The quantity as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Sum two quantities, clamping silently at `MAX`.
    #[must_use]
    pub fn merge(self, other: Quantity) -> Quantity {
        Quantity(self.0.saturating_add(other.0).min(Self::MAX))
    }
}

impl TryFrom<i64> for Quantity {
    type Error = QuantityError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}
