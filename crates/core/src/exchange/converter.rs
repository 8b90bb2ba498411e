//! Exchange amount conversion between two denominations.
//!
//! The primary amount is expressed in the primary currency's *display* unit,
//! the secondary input in the secondary currency's *exchange* unit, and the
//! output in the secondary currency's *display* unit:
//!
//! ```text
//! primary_ratio   = primary.display   / primary.exchange
//! secondary_ratio = secondary.display / secondary.exchange
//! raw             = (primary_ratio / secondary_ratio) * secondary_amount
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use fxline_shared::types::DenominationInfo;

use super::error::{ConversionError, DenominationSide};
use super::precision::{format_adaptive, initial_precision};
use super::request::ConversionRequest;

/// A computed rate line, ready for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedConversion {
    /// Primary amount as given, or `"1"`.
    pub primary_amount: String,
    /// Primary display denomination name.
    pub primary_name: String,
    /// Secondary amount, fixed-point with exactly `precision` decimals.
    pub secondary_amount: String,
    /// Secondary display symbol.
    pub secondary_symbol: Option<String>,
    /// Secondary display denomination name.
    pub secondary_name: String,
    /// Final display precision of `secondary_amount`.
    pub precision: u32,
}

impl FormattedConversion {
    /// Returns true if every displayed field is present and non-empty.
    ///
    /// An incomplete record is rendered as the loading placeholder.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.primary_amount.is_empty()
            && !self.primary_name.is_empty()
            && !self.secondary_amount.is_empty()
            && self.secondary_symbol.as_deref().is_some_and(|s| !s.is_empty())
            && !self.secondary_name.is_empty()
    }
}

/// Stateless exchange amount converter.
pub struct ExchangeAmountConverter;

impl ExchangeAmountConverter {
    /// Computes the secondary display amount for a conversion request.
    ///
    /// # Errors
    ///
    /// - `IncompleteDenominationData` if a multiplier on either side is
    ///   missing or zero. Checked before the amount is parsed.
    /// - `InvalidAmountFormat` if the secondary amount is not numeric.
    /// - `ArithmeticOverflow` if the result exceeds the decimal range.
    ///
    /// # Example
    ///
    /// ```
    /// use fxline_core::exchange::{ConversionRequest, ExchangeAmountConverter};
    /// use fxline_shared::types::{DenominationInfo, Multiplier};
    ///
    /// let btc = DenominationInfo::new("BTC")
    ///     .with_multipliers(Multiplier::from(100_000_000), Multiplier::from(100_000_000));
    /// let bits = DenominationInfo::new("bits")
    ///     .with_symbol("ƀ")
    ///     .with_multipliers(Multiplier::from(1000), Multiplier::from(100_000_000));
    ///
    /// let result = ExchangeAmountConverter::compute(&btc, &bits, &ConversionRequest::new("50000"))
    ///     .unwrap();
    /// assert_eq!(result.secondary_amount, "5000000000.000");
    /// ```
    pub fn compute(
        primary: &DenominationInfo,
        secondary: &DenominationInfo,
        request: &ConversionRequest,
    ) -> Result<FormattedConversion, ConversionError> {
        let primary_ratio = Self::unit_ratio(primary, DenominationSide::Primary)?;
        let secondary_ratio = Self::unit_ratio(secondary, DenominationSide::Secondary)?;
        let amount = request.secondary_amount.to_decimal()?;

        let raw = primary_ratio
            .checked_div(secondary_ratio)
            .and_then(|ratio| ratio.checked_mul(amount))
            .ok_or(ConversionError::ArithmeticOverflow)?;

        let initial = initial_precision(secondary.display_multiplier.as_ref());
        let formatted = format_adaptive(raw, initial);

        Ok(FormattedConversion {
            primary_amount: request.primary_amount().to_string(),
            primary_name: primary.name.clone(),
            secondary_amount: formatted.text,
            secondary_symbol: secondary.symbol.clone(),
            secondary_name: secondary.name.clone(),
            precision: formatted.precision,
        })
    }

    /// Computes the display amount for one primary display unit.
    ///
    /// # Errors
    ///
    /// Same as [`ExchangeAmountConverter::compute`].
    pub fn compute_display_amount(
        primary: &DenominationInfo,
        secondary: &DenominationInfo,
        secondary_amount: &str,
    ) -> Result<FormattedConversion, ConversionError> {
        Self::compute(primary, secondary, &ConversionRequest::new(secondary_amount))
    }

    /// Display-to-exchange unit ratio of one denomination.
    fn unit_ratio(
        info: &DenominationInfo,
        side: DenominationSide,
    ) -> Result<Decimal, ConversionError> {
        let (Some(display), Some(exchange)) = (info.display_multiplier, info.exchange_multiplier)
        else {
            debug!(%side, name = %info.name, "multiplier missing, denomination not loaded");
            return Err(ConversionError::IncompleteDenominationData { side });
        };
        if display.is_zero() || exchange.is_zero() {
            debug!(%side, name = %info.name, "zero multiplier, denomination not loaded");
            return Err(ConversionError::IncompleteDenominationData { side });
        }

        display
            .as_decimal()
            .checked_div(exchange.as_decimal())
            .ok_or(ConversionError::ArithmeticOverflow)
    }
}
