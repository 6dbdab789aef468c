//! Provides a snapshot type for exchange rates keyed by ordered currency pairs.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::de;
use serde::ser::SerializeMap;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use thiserror::Error;

use crate::fiat_currency::FiatCurrency;
use crate::settlement_currency::SettlementCurrency;

/// An error that can occur when parsing a string into a `RatePair`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRatePairError {
    /// The string is not of the form `"<BASE>_<QUOTE>"`.
    #[error("rate pair key must be of the form BASE_QUOTE")]
    InvalidFormat,
    /// One side of the pair is not a known currency code.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// An ordered currency pair: the settlement currency being priced and the
/// fiat currency quoting it.
///
/// On the wire a pair is the string `"<BASE>_<QUOTE>"` (e.g., `"BTC_USD"`),
/// which `Display` and `FromStr` round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RatePair {
    pub base: SettlementCurrency,
    pub quote: FiatCurrency,
}

impl RatePair {
    /// Creates a new ordered pair.
    pub const fn new(base: SettlementCurrency, quote: FiatCurrency) -> Self {
        Self { base, quote }
    }
}

impl fmt::Display for RatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.base.code(), self.quote.code())
    }
}

impl FromStr for RatePair {
    type Err = ParseRatePairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base_str, quote_str) = s
            .split_once('_')
            .ok_or(ParseRatePairError::InvalidFormat)?;
        let base = base_str
            .parse::<SettlementCurrency>()
            .map_err(|_| ParseRatePairError::UnknownCurrency(base_str.to_string()))?;
        let quote = quote_str
            .parse::<FiatCurrency>()
            .map_err(|_| ParseRatePairError::UnknownCurrency(quote_str.to_string()))?;
        Ok(Self { base, quote })
    }
}

/// A snapshot of exchange rates, one `f64` multiplier per ordered pair.
///
/// This struct wraps a `HashMap` to provide a type-safe API for rate
/// management. A snapshot is an owned value supplied by the caller; a
/// periodic refresh builds a new `RateMap` and replaces the previous one
/// wholesale, so the amount model itself stays free of shared state.
/// Within one snapshot, `insert` overwrites per pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateMap(HashMap<RatePair, f64>);

impl RateMap {
    /// Creates a new, empty `RateMap`.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Inserts or updates the rate for a pair, returning the previous rate
    /// if one was present.
    pub fn insert(&mut self, pair: RatePair, rate: f64) -> Option<f64> {
        self.0.insert(pair, rate)
    }

    /// Retrieves the rate for a pair.
    ///
    /// Returns `None` if the snapshot has no rate for the requested pair.
    pub fn get(&self, pair: RatePair) -> Option<f64> {
        self.0.get(&pair).copied()
    }

    /// Removes the rate for a pair, returning it if it existed.
    pub fn remove(&mut self, pair: RatePair) -> Option<f64> {
        self.0.remove(&pair)
    }

    /// Returns the number of pairs in the snapshot.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the snapshot holds no rates.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the `(pair, rate)` entries.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.iter())
    }
}

/// An iterator over the entries of a `RateMap`, created by its `iter`
/// method.
pub struct Iter<'a>(std::collections::hash_map::Iter<'a, RatePair, f64>);

impl Iterator for Iter<'_> {
    type Item = (RatePair, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(pair, rate)| (*pair, *rate))
    }
}

/// Allows `RateMap` to be used directly in `for` loops.
impl<'a> IntoIterator for &'a RateMap {
    type Item = (RatePair, f64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(RatePair, f64)> for RateMap {
    fn from_iter<T: IntoIterator<Item = (RatePair, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Serializes as a JSON object keyed by `"<BASE>_<QUOTE>"`, the backend's
/// rate-table wire form.
impl Serialize for RateMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (pair, rate) in &self.0 {
            map.serialize_entry(&pair.to_string(), rate)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RateMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = HashMap::<String, f64>::deserialize(deserializer)?;
        let mut inner = HashMap::with_capacity(raw.len());
        for (key, rate) in raw {
            let pair = key.parse::<RatePair>().map_err(de::Error::custom)?;
            inner.insert(pair, rate);
        }
        Ok(Self(inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BTC_USD: RatePair = RatePair::new(SettlementCurrency::BTC, FiatCurrency::USD);
    const ETH_EUR: RatePair = RatePair::new(SettlementCurrency::ETH, FiatCurrency::EUR);

    #[test]
    fn test_pair_display_and_parse() {
        assert_eq!(BTC_USD.to_string(), "BTC_USD");
        assert_eq!("BTC_USD".parse::<RatePair>(), Ok(BTC_USD));
        assert_eq!("eth_eur".parse::<RatePair>(), Ok(ETH_EUR));

        assert_eq!(
            "BTCUSD".parse::<RatePair>(),
            Err(ParseRatePairError::InvalidFormat)
        );
        assert_eq!(
            "BTC_XXX".parse::<RatePair>(),
            Err(ParseRatePairError::UnknownCurrency("XXX".to_string()))
        );
        assert_eq!(
            "DOGE_USD".parse::<RatePair>(),
            Err(ParseRatePairError::UnknownCurrency("DOGE".to_string()))
        );
    }

    #[test]
    fn test_insert_overwrites_per_pair() {
        let mut rates = RateMap::new();
        assert_eq!(rates.insert(BTC_USD, 64_250.5), None);
        assert_eq!(rates.insert(BTC_USD, 64_300.0), Some(64_250.5));
        assert_eq!(rates.get(BTC_USD), Some(64_300.0));
        assert_eq!(rates.get(ETH_EUR), None);
        assert_eq!(rates.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut rates: RateMap = [(BTC_USD, 1.0)].into_iter().collect();
        assert_eq!(rates.remove(BTC_USD), Some(1.0));
        assert_eq!(rates.remove(BTC_USD), None);
        assert!(rates.is_empty());
    }

    #[test]
    fn test_snapshot_replacement_is_wholesale() {
        let mut current: RateMap = [(BTC_USD, 100.0), (ETH_EUR, 10.0)].into_iter().collect();
        assert_eq!(current.get(ETH_EUR), Some(10.0));
        // A refresh carries only the pairs the backend returned this time.
        let fresh: RateMap = [(BTC_USD, 101.0)].into_iter().collect();
        current = fresh;
        assert_eq!(current.get(BTC_USD), Some(101.0));
        assert_eq!(current.get(ETH_EUR), None);
    }

    #[test]
    fn test_wire_round_trip() {
        let rates: RateMap = [(BTC_USD, 64_250.5), (ETH_EUR, 3_010.25)].into_iter().collect();
        let json = serde_json::to_string(&rates).unwrap();
        let back: RateMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rates);
    }

    #[test]
    fn test_deserialize_rejects_unknown_pair_key() {
        let json = r#"{"BTC-USD": 1.0}"#;
        assert!(serde_json::from_str::<RateMap>(json).is_err());
    }
}
