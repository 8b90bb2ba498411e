//! Conversion request types and amount parsing.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ConversionError;

/// Primary amount used when the caller does not supply one.
pub const DEFAULT_PRIMARY_AMOUNT: &str = "1";

/// An amount as delivered by a pricing provider: a JSON string or number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    /// Decimal text, e.g. `"64000.5"`.
    Text(String),
    /// JSON number, e.g. `64000.5`.
    Number(serde_json::Number),
}

impl AmountInput {
    /// Parses the amount into a decimal.
    ///
    /// # Errors
    ///
    /// Same as [`parse_amount`].
    pub fn to_decimal(&self) -> Result<Decimal, ConversionError> {
        match self {
            Self::Text(text) => parse_amount(text),
            Self::Number(number) => parse_amount(&number.to_string()),
        }
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u64> for AmountInput {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl std::fmt::Display for AmountInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Largest scale a `Decimal` can hold.
const MAX_SCALE: u32 = 28;

/// Parses a decimal amount in plain or scientific notation.
///
/// Scientific notation shows up when amounts were produced by a
/// number-to-string conversion (`1e-7`). Digits past the 28th decimal place
/// are rounded half away from zero, whichever notation carried them.
///
/// # Errors
///
/// - `InvalidAmountFormat` for empty or non-numeric input, including digit
///   separators such as `1_000`.
/// - `ArithmeticOverflow` for a well-formed number beyond the decimal range.
pub fn parse_amount(text: &str) -> Result<Decimal, ConversionError> {
    let invalid = || ConversionError::InvalidAmountFormat(text.to_string());

    let trimmed = text.trim();
    let (significand, exponent) = match trimmed.find(['e', 'E']) {
        Some(at) => {
            let exponent = trimmed[at + 1..]
                .parse::<i32>()
                .map_err(|_| invalid())?;
            (&trimmed[..at], exponent)
        }
        None => (trimmed, 0),
    };
    if !is_decimal_literal(significand) {
        return Err(invalid());
    }

    let significand =
        Decimal::from_str(significand).map_err(|_| ConversionError::ArithmeticOverflow)?;
    scale_by_power_of_ten(significand, exponent)
}

/// Optional sign, integer digits, then optionally `.` and fraction digits.
fn is_decimal_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "0"));
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(integer) && all_digits(fraction)
}

/// Returns `value * 10^exponent`, rounded to the decimal scale limit.
fn scale_by_power_of_ten(value: Decimal, exponent: i32) -> Result<Decimal, ConversionError> {
    if value.is_zero() || exponent == 0 {
        return Ok(value);
    }

    if exponent > 0 {
        let mut scaled = value;
        for _ in 0..exponent {
            scaled = scaled
                .checked_mul(Decimal::TEN)
                .ok_or(ConversionError::ArithmeticOverflow)?;
        }
        return Ok(scaled);
    }

    let scale = value.scale().saturating_add(exponent.unsigned_abs());
    if scale <= MAX_SCALE {
        let mut scaled = value;
        scaled
            .set_scale(scale)
            .map_err(|_| ConversionError::ArithmeticOverflow)?;
        return Ok(scaled);
    }

    // mantissa fits in 96 bits, so 10^30 and beyond always rounds to zero
    let Some(divisor) = 10i128.checked_pow(scale - MAX_SCALE).filter(|d| *d <= 10i128.pow(30))
    else {
        return Ok(Decimal::ZERO);
    };
    let mantissa = value.mantissa();
    let mut quotient = mantissa / divisor;
    if (mantissa % divisor).abs() * 2 >= divisor {
        quotient += mantissa.signum();
    }
    Decimal::try_from_i128_with_scale(quotient, MAX_SCALE)
        .map_err(|_| ConversionError::ArithmeticOverflow)
}

/// Amounts for a single rate computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    /// Amount in the primary currency's display unit. Defaults to `"1"`.
    #[serde(default)]
    pub primary_amount: Option<String>,
    /// Amount in the secondary currency's exchange unit.
    pub secondary_amount: AmountInput,
}

impl ConversionRequest {
    /// Creates a request for one primary display unit.
    #[must_use]
    pub fn new(secondary_amount: impl Into<AmountInput>) -> Self {
        Self {
            primary_amount: None,
            secondary_amount: secondary_amount.into(),
        }
    }

    /// Sets the primary amount.
    #[must_use]
    pub fn with_primary_amount(mut self, amount: impl Into<String>) -> Self {
        self.primary_amount = Some(amount.into());
        self
    }

    /// Returns the primary amount, falling back to `"1"` when absent or empty.
    #[must_use]
    pub fn primary_amount(&self) -> &str {
        match self.primary_amount.as_deref() {
            Some(amount) if !amount.is_empty() => amount,
            _ => DEFAULT_PRIMARY_AMOUNT,
        }
    }
}
