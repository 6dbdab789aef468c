//! Converts between settlement amounts and fiat prices through an exchange
//! rate.
//!
//! Transfer forms keep a typed fiat price and a derived settlement amount
//! (or vice versa) consistent by calling this pair on each edit. Both
//! functions are pure and both snap their result onto the fixed-point grid,
//! so re-deriving one side from the other is idempotent.

use thiserror::Error;

use crate::fiat_amount::FiatAmount;
use crate::settlement_amount::SettlementAmount;

/// An error that can occur when deriving an amount from a price.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateError {
    /// The exchange rate is zero; no amount corresponds to the price.
    #[error("exchange rate is zero")]
    ZeroRate,
    /// The exchange rate is NaN or infinite.
    #[error("exchange rate is not finite")]
    NotFinite,
}

/// Computes the fiat price of a settlement amount at the given rate
/// (quote units per base unit).
///
/// Total for any finite rate; a result beyond the fiat range saturates at
/// the representable extreme.
pub fn price_from_amount(amount: SettlementAmount, rate: f64) -> FiatAmount {
    FiatAmount::new_from_float(amount.to_float() * rate)
}

/// Computes the settlement amount a fiat price corresponds to at the given
/// rate (quote units per base unit).
///
/// Fails if the rate is zero or not finite; anything else would silently
/// produce a nonsense amount from the division.
pub fn amount_from_price(price: FiatAmount, rate: f64) -> Result<SettlementAmount, RateError> {
    if !rate.is_finite() {
        return Err(RateError::NotFinite);
    }
    if rate == 0.0 {
        return Err(RateError::ZeroRate);
    }
    Ok(SettlementAmount::new_from_float(price.to_float() / rate))
}
