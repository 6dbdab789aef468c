//! A fixed-point amount of the wallet's settlement currency.

use std::fmt;
use std::ops::Add;
use std::ops::AddAssign;
use std::str::FromStr;

use num_traits::CheckedAdd;
use serde::Deserialize;
use serde::Serialize;

use crate::fixed_point;
use crate::fixed_point::ParseAmountError;

/// An amount of the wallet's settlement currency.
///
/// Internally the amount is stored as a signed 64-bit count of minor units
/// (10^6 per whole unit), the representation the backend transmits and the
/// authoritative value for all arithmetic. On the wire this serializes as a
/// bare integer.
///
/// Display shows up to 6 fraction digits with trailing zeros stripped, so
/// the smallest unit still renders as `0.000001` while whole amounts render
/// with no fraction at all.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SettlementAmount(i64);

impl SettlementAmount {
    /// The zero amount.
    pub const ZERO: Self = Self(0);

    // --- Constructors ---

    /// Creates an amount directly from its minor units, as received from
    /// the backend.
    pub const fn new_from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Creates an amount from a decimal value, rounding half away from
    /// zero to the nearest minor unit.
    ///
    /// Every float that enters the system becomes canonical here; form
    /// input must go through this (via [`FromStr`]) before an amount is
    /// sent anywhere.
    pub fn new_from_float(value: f64) -> Self {
        Self(fixed_point::SETTLEMENT.from_float(value))
    }

    // --- Getters ---

    /// Returns the raw amount in minor units, the wire representation.
    pub const fn as_minor_units(&self) -> i64 {
        self.0
    }

    /// Returns the decimal value this amount represents.
    pub fn to_float(&self) -> f64 {
        fixed_point::SETTLEMENT.to_float(self.0)
    }

    /// Returns true if the amount is zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if the amount is negative.
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    // --- Conversions ---

    /// Snaps a decimal value onto the fixed-point grid the backend stores.
    ///
    /// Equivalent to a round trip through [`Self::new_from_float`] and
    /// [`Self::to_float`]; idempotent, so re-deriving a value from the
    /// normalized amount cannot drift.
    pub fn normalize(value: f64) -> f64 {
        Self::new_from_float(value).to_float()
    }

    /// Formats the amount with thousands grouping (e.g., "123,456.5").
    pub fn to_string_grouped(&self) -> String {
        fixed_point::SETTLEMENT.render(self.0, true)
    }
}

/// Parses a locale-invariant decimal string (`.` separator, no grouping)
/// into an amount, rounding to the nearest minor unit.
impl FromStr for SettlementAmount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fixed_point::SETTLEMENT.parse(s).map(Self)
    }
}

/// Formats the amount as a plain decimal string (e.g., "123456.123456").
impl fmt::Display for SettlementAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&fixed_point::SETTLEMENT.render(self.0, false))
    }
}

impl Add for SettlementAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for SettlementAmount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

/// Implements checked addition. Returns `None` if the sum overflows.
impl CheckedAdd for SettlementAmount {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        self.0.checked_add(v.0).map(Self)
    }
}
