//! Defines the fiat reference currencies supported by the application.

use serde::Deserialize;
use serde::Serialize;

/// A fiat currency used for pricing and exchange-rate quoting.
///
/// Static reference data, defined once at compile time and looked up by
/// ISO 4217 code (`FromStr` is case-insensitive). Fiat amounts always use
/// the shared 10^6 scale internally and a 2-digit display, regardless of
/// currency.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum FiatCurrency {
    AUD, // Australian Dollar
    BRL, // Brazilian Real
    CAD, // Canadian Dollar
    CHF, // Swiss Franc
    CNY, // Chinese Yuan
    EUR, // Euro
    GBP, // Great British Pound
    JPY, // Japanese Yen
    NGN, // Nigerian Naira
    SGD, // Singapore Dollar
    TRY, // Turkish Lira
    #[default]
    USD, // United States Dollar
}

impl FiatCurrency {
    /// Returns the graphical symbol for the currency (e.g., '$').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::AUD => "$",
            Self::BRL => "R$",
            Self::CAD => "$",
            Self::CHF => "CHF",
            Self::CNY => "¥",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::JPY => "¥",
            Self::NGN => "₦",
            Self::SGD => "$",
            Self::TRY => "₺",
            Self::USD => "$",
        }
    }

    /// Returns the ISO 4217 string code for the currency (e.g., "USD").
    /// This is handled automatically by the `strum::IntoStaticStr` derive macro.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Appends the currency code to an already-formatted amount string.
    pub fn format_amount(&self, amt: &str) -> String {
        format!("{} {}", amt, self.code())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_code_round_trip() {
        for currency in FiatCurrency::iter() {
            assert_eq!(FiatCurrency::from_str(currency.code()), Ok(currency));
        }
        assert_eq!(FiatCurrency::from_str("usd"), Ok(FiatCurrency::USD));
        assert!(FiatCurrency::from_str("XXX").is_err());
        assert!(FiatCurrency::from_str("").is_err());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(FiatCurrency::EUR.format_amount("19.99"), "19.99 EUR");
    }
}
