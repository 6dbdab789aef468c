//! A fixed-point fiat amount, used for prices and exchange-rate quotes.

use std::fmt;
use std::ops::Add;
use std::ops::AddAssign;
use std::str::FromStr;

use num_traits::CheckedAdd;
use serde::Deserialize;
use serde::Serialize;

use crate::fixed_point;
use crate::fixed_point::ParseAmountError;

/// A monetary value in a fiat reference currency.
///
/// Stored as a signed 64-bit count of minor units at the same 10^6 scale as
/// [`SettlementAmount`](crate::SettlementAmount), and serialized as a bare
/// integer on the wire. The two kinds are distinct types on purpose: a fiat
/// price can never be passed where a settlement amount is expected.
///
/// Display is coarser than the internal scale: always exactly 2 fraction
/// digits, rounded at render time, so sub-cent amounts show as `0.00` while
/// the stored value stays exact. Rate display keeps 4 digits instead, see
/// [`Self::to_rate_string`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FiatAmount(i64);

impl FiatAmount {
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
    pub fn new_from_float(value: f64) -> Self {
        Self(fixed_point::FIAT.from_float(value))
    }

    // --- Getters ---

    /// Returns the raw amount in minor units, the wire representation.
    pub const fn as_minor_units(&self) -> i64 {
        self.0
    }

    /// Returns the decimal value this amount represents.
    pub fn to_float(&self) -> f64 {
        fixed_point::FIAT.to_float(self.0)
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

    /// Snaps a decimal value onto the fixed-point grid; idempotent.
    pub fn normalize(value: f64) -> f64 {
        Self::new_from_float(value).to_float()
    }

    /// Formats the amount with thousands grouping (e.g., "123,456.12").
    pub fn to_string_grouped(&self) -> String {
        fixed_point::FIAT.render(self.0, true)
    }

    /// Formats the amount as an exchange-rate quote: exactly 4 fraction
    /// digits, never grouped. The 2-digit price display would lose quote
    /// precision here.
    pub fn to_rate_string(&self) -> String {
        fixed_point::RATE.render(self.0, false)
    }
}

/// Parses a locale-invariant decimal string (`.` separator, no grouping)
/// into an amount, rounding to the nearest minor unit.
impl FromStr for FiatAmount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fixed_point::FIAT.parse(s).map(Self)
    }
}

/// Formats the amount as a plain 2-digit price string (e.g., "123456.12").
impl fmt::Display for FiatAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&fixed_point::FIAT.render(self.0, false))
    }
}

impl Add for FiatAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for FiatAmount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

/// Implements checked addition. Returns `None` if the sum overflows.
impl CheckedAdd for FiatAmount {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        self.0.checked_add(v.0).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_always_two_digits() {
        assert_eq!(FiatAmount::new_from_minor(123_456_123_456).to_string(), "123456.12");
        assert_eq!(FiatAmount::new_from_minor(5_000_000).to_string(), "5.00");
        assert_eq!(FiatAmount::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_display_sub_cent_rounds_to_zero() {
        // Display precision is coarser than the internal scale; the stored
        // value is unaffected.
        let amount = FiatAmount::new_from_minor(1);
        assert_eq!(amount.to_string(), "0.00");
        assert_eq!(amount.as_minor_units(), 1);
    }

    #[test]
    fn test_display_rounds_at_render_time() {
        // 1.005 -> "1.01", 1.004 -> "1.00"
        assert_eq!(FiatAmount::new_from_minor(1_005_000).to_string(), "1.01");
        assert_eq!(FiatAmount::new_from_minor(1_004_999).to_string(), "1.00");
        assert_eq!(FiatAmount::new_from_minor(-1_005_000).to_string(), "-1.01");
    }

    #[test]
    fn test_display_grouped() {
        assert_eq!(
            FiatAmount::new_from_minor(123_456_123_456).to_string_grouped(),
            "123,456.12"
        );
    }

    #[test]
    fn test_rate_string_four_digits() {
        assert_eq!(
            FiatAmount::new_from_minor(123_456_123_456).to_rate_string(),
            "123456.1235"
        );
        assert_eq!(FiatAmount::new_from_minor(1_000_000).to_rate_string(), "1.0000");
        // Rates are never grouped, regardless of magnitude.
        assert_eq!(
            FiatAmount::new_from_minor(1_234_567_000_000).to_rate_string(),
            "1234567.0000"
        );
    }

    #[test]
    fn test_from_str() {
        let amount: FiatAmount = "19.99".parse().unwrap();
        assert_eq!(amount.as_minor_units(), 19_990_000);

        assert_eq!(
            "1 000".parse::<FiatAmount>(),
            Err(ParseAmountError::InvalidFormat)
        );
    }

    #[test]
    fn test_from_float_rounds_to_nearest_minor_unit() {
        assert_eq!(FiatAmount::new_from_float(0.0000006).as_minor_units(), 1);
        assert_eq!(FiatAmount::new_from_float(-0.0000006).as_minor_units(), -1);
        assert_eq!(FiatAmount::new_from_float(0.0000004).as_minor_units(), 0);
        assert_eq!(FiatAmount::new_from_float(123.456).as_minor_units(), 123_456_000);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for value in [0.0, 19.994999, -0.005, 123456.123456789] {
            let once = FiatAmount::normalize(value);
            assert_eq!(FiatAmount::normalize(once), once);
        }
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = FiatAmount::new_from_minor(i64::MAX);
        assert_eq!(max.checked_add(&FiatAmount::new_from_minor(1)), None);
        assert_eq!(
            FiatAmount::new_from_minor(100).checked_add(&FiatAmount::new_from_minor(23)),
            Some(FiatAmount::new_from_minor(123))
        );
    }
}
