//! Denomination metadata with decimal precision.
//!
//! CRITICAL: Never use floating-point for multipliers.
//! A multiplier wraps `rust_decimal::Decimal` holding a non-negative integer.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors raised while parsing a denomination multiplier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MultiplierError {
    /// Input was empty or whitespace.
    #[error("Multiplier is empty")]
    Empty,

    /// Input is not an integer.
    #[error("Multiplier is not an integer: {0}")]
    NotAnInteger(String),

    /// Input is below zero.
    #[error("Multiplier cannot be negative: {0}")]
    Negative(String),
}

/// Scaling factor between a denomination and the currency's smallest base unit.
///
/// Zero is representable: wallets report it while currency metadata is still
/// loading, and the converter treats it the same as an absent multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Multiplier(Decimal);

/// Multipliers arrive as JSON strings or JSON numbers.
///
/// Providers that serialize through a float type send `1000.0` or `1e3`;
/// those are accepted when they carry no fraction.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMultiplier {
    Text(String),
    Integer(u64),
    Float(f64),
}

impl Multiplier {
    /// Returns the multiplier as a decimal.
    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Returns true if the multiplier is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Number of decimal digits the multiplier spans, i.e. `floor(log10(m))`.
    ///
    /// Returns 0 for zero.
    #[must_use]
    pub fn decimal_places(&self) -> u32 {
        let mut remaining = self.0.mantissa();
        let mut places = 0;
        while remaining >= 10 {
            remaining /= 10;
            places += 1;
        }
        places
    }

    /// Validates that `value` is a non-negative integer; `source` is echoed in errors.
    fn from_integral(value: Decimal, source: &str) -> Result<Self, MultiplierError> {
        if !value.fract().is_zero() {
            return Err(MultiplierError::NotAnInteger(source.to_string()));
        }
        if value.is_sign_negative() && !value.is_zero() {
            return Err(MultiplierError::Negative(source.to_string()));
        }

        // scale 0 so the mantissa is the integer value
        let mut integer = value.trunc();
        integer.rescale(0);
        integer.set_sign_positive(true);
        Ok(Self(integer))
    }
}

impl From<u64> for Multiplier {
    fn from(value: u64) -> Self {
        Self(Decimal::from(value))
    }
}

impl FromStr for Multiplier {
    type Err = MultiplierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MultiplierError::Empty);
        }
        // rust_decimal accepts `_` as a digit separator
        if trimmed.contains('_') {
            return Err(MultiplierError::NotAnInteger(trimmed.to_string()));
        }

        let value = Decimal::from_str(trimmed)
            .map_err(|_| MultiplierError::NotAnInteger(trimmed.to_string()))?;
        Self::from_integral(value, trimmed)
    }
}

impl<'de> Deserialize<'de> for Multiplier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawMultiplier::deserialize(deserializer)? {
            RawMultiplier::Text(text) => text.parse().map_err(serde::de::Error::custom),
            RawMultiplier::Integer(value) => Ok(Self::from(value)),
            RawMultiplier::Float(value) => {
                let source = value.to_string();
                let decimal = Decimal::try_from(value)
                    .map_err(|_| MultiplierError::NotAnInteger(source.clone()))
                    .map_err(serde::de::Error::custom)?;
                Self::from_integral(decimal, &source).map_err(serde::de::Error::custom)
            }
        }
    }
}

impl From<Multiplier> for String {
    fn from(multiplier: Multiplier) -> Self {
        multiplier.to_string()
    }
}

impl std::fmt::Display for Multiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display and exchange metadata for one currency.
///
/// Supplied by a wallet or currency-metadata provider; fields may be missing
/// while that provider is still loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DenominationInfo {
    /// Display label (e.g., "BTC", "mBTC").
    pub name: String,
    /// Currency symbol (e.g., "$"), may be absent.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Display unit to base unit multiplier.
    #[serde(default)]
    pub display_multiplier: Option<Multiplier>,
    /// Exchange-quoting unit to base unit multiplier.
    #[serde(default)]
    pub exchange_multiplier: Option<Multiplier>,
}

impl DenominationInfo {
    /// Creates denomination info with no symbol and no multipliers.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: None,
            display_multiplier: None,
            exchange_multiplier: None,
        }
    }

    /// Sets the currency symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Sets both multipliers.
    #[must_use]
    pub fn with_multipliers(mut self, display: Multiplier, exchange: Multiplier) -> Self {
        self.display_multiplier = Some(display);
        self.exchange_multiplier = Some(exchange);
        self
    }

    /// Returns true once both multipliers are present and non-zero.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        let loaded = |m: Option<&Multiplier>| m.is_some_and(|m| !m.is_zero());
        loaded(self.display_multiplier.as_ref()) && loaded(self.exchange_multiplier.as_ref())
    }
}
