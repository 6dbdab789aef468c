//! Fixed-point monetary amount model for the wallet client.
//!
//! The backend transmits every balance, price, and quote as a fixed-point
//! integer (minor units, 10^6 per whole unit). This crate is the only place
//! those integers become human-facing decimals and back:
//!
//! - [`SettlementAmount`] — amounts of the wallet's native transactable
//!   currency (balances, transaction amounts, transfer quotes).
//! - [`FiatAmount`] — fiat prices and exchange-rate quotes.
//! - [`SettlementCurrency`] / [`FiatCurrency`] — static currency reference
//!   data (codes, names, symbols).
//! - [`RateMap`] / [`RatePair`] — a caller-owned snapshot of exchange
//!   rates keyed by ordered currency pair.
//! - [`price_from_amount`] / [`amount_from_price`] — the pure pair that
//!   keeps a typed price and a derived amount consistent in transfer forms.
//!
//! Free-text form input enters through the amount types' `FromStr` impls,
//! which round to the nearest minor unit and reject anything that is not a
//! finite number. Display goes through `Display`, `to_string_grouped`, or
//! `to_rate_string`; raw minor units are never shown to a user.
//!
//! Everything here is synchronous, pure, and free of shared state; callers
//! on any number of threads need no coordination.

pub mod conversion;
pub mod fiat_amount;
pub mod fiat_currency;
mod fixed_point;
pub mod rate_map;
pub mod settlement_amount;
pub mod settlement_currency;

pub use conversion::amount_from_price;
pub use conversion::price_from_amount;
pub use conversion::RateError;
pub use fiat_amount::FiatAmount;
pub use fiat_currency::FiatCurrency;
pub use fixed_point::ParseAmountError;
pub use rate_map::ParseRatePairError;
pub use rate_map::RateMap;
pub use rate_map::RatePair;
pub use settlement_amount::SettlementAmount;
pub use settlement_currency::SettlementCurrency;
