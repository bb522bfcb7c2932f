use serde::{Deserialize, Serialize};

/// A monetary amount in integer minor units (paise).
/// All price arithmetic stays in integers; the API and snapshots carry the
/// raw minor-unit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price(u64);

#[derive(Debug, thiserror::Error)]
#[error("price.negative")]
pub struct NegativePrice;

impl Price {
    pub const ZERO: Price = Price(0);

    /// Creates a price from minor units already known to be non-negative.
    pub const fn new(minor_units: u64) -> Self {
        Self(minor_units)
    }

    /// Validates signed boundary input (JSON bodies, database rows).
    pub fn from_minor_units(minor_units: i64) -> Result<Self, NegativePrice> {
        u64::try_from(minor_units)
            .map(Self)
            .map_err(|_| NegativePrice)
    }

    pub const fn minor_units(self) -> u64 {
        self.0
    }

    /// Line total for `quantity` units of this price, in minor units.
    pub fn total_for(self, quantity: u32) -> u64 {
        self.0 * u64::from(quantity)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
