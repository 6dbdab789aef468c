//! Shared fixed-point conversion and rendering engine.
//!
//! Every amount kind in the system stores a signed 64-bit count of minor
//! units at a 10^6 scale. The kinds differ only in how many fraction digits
//! they show, so the conversion and formatting logic lives here once and is
//! instantiated per kind as a `FixedPoint` layout.

use thiserror::Error;

/// Minor units per whole unit, shared by every amount kind.
pub(crate) const SCALE: i64 = 1_000_000;

/// An error that can occur when parsing a string into an amount.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseAmountError {
    /// The string is not a decimal number (e.g., "abc", "1,000", "").
    #[error("invalid amount format")]
    InvalidFormat,
    /// The string parsed to NaN or an infinity, which has no fixed-point
    /// representation. Surfaced explicitly rather than propagated through
    /// arithmetic.
    #[error("amount is not a finite number")]
    NotFinite,
}

/// How many fraction digits a kind shows when rendered for humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FractionDigits {
    /// At most this many digits: the stored value is truncated to them and
    /// trailing zeros are stripped, down to none.
    UpTo(u32),
    /// Always exactly this many digits, rounding at render time.
    Exactly(u32),
}

/// One amount kind's layout: the scaling factor between minor units and
/// whole units, plus the fraction-digit policy used for display.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedPoint {
    scaling_factor: i64,
    fraction_digits: FractionDigits,
}

/// Settlement-currency layout: up to 6 digits, enough to show one minor unit.
pub(crate) const SETTLEMENT: FixedPoint = FixedPoint {
    scaling_factor: SCALE,
    fraction_digits: FractionDigits::UpTo(6),
};

/// Fiat layout: conventional 2-digit price display, coarser than the scale.
pub(crate) const FIAT: FixedPoint = FixedPoint {
    scaling_factor: SCALE,
    fraction_digits: FractionDigits::Exactly(2),
};

/// Exchange-rate layout: 4 digits, where 2 would lose quote precision.
pub(crate) const RATE: FixedPoint = FixedPoint {
    scaling_factor: SCALE,
    fraction_digits: FractionDigits::Exactly(4),
};

impl FixedPoint {
    /// Converts minor units to the decimal value they represent.
    pub(crate) fn to_float(&self, minor: i64) -> f64 {
        minor as f64 / self.scaling_factor as f64
    }

    /// Converts a decimal value to minor units, rounding half away from
    /// zero on the scaled value. The sole ingress from float to the
    /// canonical integer representation.
    pub(crate) fn from_float(&self, value: f64) -> i64 {
        (value * self.scaling_factor as f64).round() as i64
    }

    /// Parses a locale-invariant decimal string (`.` decimal point, no
    /// grouping separators) and converts it to minor units.
    pub(crate) fn parse(&self, s: &str) -> Result<i64, ParseAmountError> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| ParseAmountError::InvalidFormat)?;
        if !value.is_finite() {
            return Err(ParseAmountError::NotFinite);
        }
        Ok(self.from_float(value))
    }

    /// Renders minor units as a decimal string under the kind's
    /// fraction-digit policy, with optional thousands grouping on the
    /// integer part.
    pub(crate) fn render(&self, minor: i64, use_grouping: bool) -> String {
        match self.fraction_digits {
            FractionDigits::UpTo(digits) => self.render_truncated(minor, digits, use_grouping),
            FractionDigits::Exactly(digits) => self.render_rounded(minor, digits, use_grouping),
        }
    }

    fn scale_digits(&self) -> u32 {
        self.scaling_factor.ilog10()
    }

    fn render_truncated(&self, minor: i64, digits: u32, use_grouping: bool) -> String {
        let scale = self.scaling_factor as u64;
        let abs = minor.unsigned_abs();
        let major = abs / scale;
        let frac = (abs % scale) / 10u64.pow(self.scale_digits() - digits);

        let mut out = String::new();
        if minor < 0 && (major != 0 || frac != 0) {
            out.push('-');
        }
        out.push_str(&major_string(major, use_grouping));
        if frac != 0 {
            let mut frac_str = format!("{frac:0width$}", width = digits as usize);
            while frac_str.ends_with('0') {
                frac_str.pop();
            }
            out.push('.');
            out.push_str(&frac_str);
        }
        out
    }

    fn render_rounded(&self, minor: i64, digits: u32, use_grouping: bool) -> String {
        let step = 10u64.pow(self.scale_digits() - digits);
        let abs = minor.unsigned_abs();
        let rounded = (abs + step / 2) / step;
        let pow = 10u64.pow(digits);
        let major = rounded / pow;
        let frac = rounded % pow;

        let mut out = String::new();
        if minor < 0 && rounded != 0 {
            out.push('-');
        }
        out.push_str(&major_string(major, use_grouping));
        if digits > 0 {
            out.push('.');
            out.push_str(&format!("{frac:0width$}", width = digits as usize));
        }
        out
    }
}

/// Formats the integer part, inserting a `,` every three digits when
/// grouping is requested.
fn major_string(major: u64, use_grouping: bool) -> String {
    let plain = major.to_string();
    if !use_grouping || plain.len() <= 3 {
        return plain;
    }
    let mut grouped = String::with_capacity(plain.len() + plain.len() / 3);
    for (i, ch) in plain.chars().enumerate() {
        if i != 0 && (plain.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_string_grouping() {
        assert_eq!(major_string(0, true), "0");
        assert_eq!(major_string(999, true), "999");
        assert_eq!(major_string(1000, true), "1,000");
        assert_eq!(major_string(123456, true), "123,456");
        assert_eq!(major_string(1234567890, true), "1,234,567,890");
        assert_eq!(major_string(1234567890, false), "1234567890");
    }

    #[test]
    fn test_render_truncated_strips_trailing_zeros() {
        assert_eq!(SETTLEMENT.render(123_450_000, false), "123.45");
        assert_eq!(SETTLEMENT.render(123_000_000, false), "123");
        assert_eq!(SETTLEMENT.render(0, false), "0");
    }

    #[test]
    fn test_render_rounded_sign_of_rendered_zero() {
        // A negative value that rounds to zero at display precision shows
        // no sign.
        assert_eq!(FIAT.render(-1, false), "0.00");
        assert_eq!(FIAT.render(-5_000, false), "-0.01");
    }

    #[test]
    fn test_render_negative_fraction_only() {
        assert_eq!(SETTLEMENT.render(-500_000, false), "-0.5");
        assert_eq!(FIAT.render(-500_000, false), "-0.50");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(SETTLEMENT.parse("abc"), Err(ParseAmountError::InvalidFormat));
        assert_eq!(SETTLEMENT.parse(""), Err(ParseAmountError::InvalidFormat));
        assert_eq!(SETTLEMENT.parse("1,000"), Err(ParseAmountError::InvalidFormat));
        assert_eq!(SETTLEMENT.parse("1.2.3"), Err(ParseAmountError::InvalidFormat));
        assert_eq!(SETTLEMENT.parse("NaN"), Err(ParseAmountError::NotFinite));
        assert_eq!(SETTLEMENT.parse("inf"), Err(ParseAmountError::NotFinite));
    }
}
