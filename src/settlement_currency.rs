//! Defines the settlement currencies the wallet can hold.

use serde::Deserialize;
use serde::Serialize;

/// A settlement currency: the wallet's native transactable asset, as
/// opposed to the fiat reference currencies used only for pricing.
///
/// Static reference data, defined once at compile time and looked up by
/// code (`FromStr` is case-insensitive). All settlement currencies share
/// the same 10^6 amount scale.
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
pub enum SettlementCurrency {
    #[default]
    BTC, // Bitcoin
    ETH,  // Ether
    LTC,  // Litecoin
    SOL,  // Solana
    USDT, // Tether
    XRP,  // XRP
}

impl SettlementCurrency {
    /// Returns the graphical symbol for the currency (e.g., '₿').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::BTC => "₿",
            Self::ETH => "Ξ",
            Self::LTC => "Ł",
            Self::SOL => "◎",
            Self::USDT => "₮",
            Self::XRP => "✕",
        }
    }

    /// Returns the ticker code for the currency (e.g., "BTC").
    /// This is handled automatically by the `strum::IntoStaticStr` derive macro.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the full display name of the currency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BTC => "Bitcoin",
            Self::ETH => "Ether",
            Self::LTC => "Litecoin",
            Self::SOL => "Solana",
            Self::USDT => "Tether",
            Self::XRP => "XRP",
        }
    }

    /// Appends the ticker code to an already-formatted amount string.
    pub fn format_amount(&self, amt: &str) -> String {
        format!("{} {}", amt, self.code())
    }
}
