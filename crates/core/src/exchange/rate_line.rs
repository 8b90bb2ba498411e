//! Rate line rendering and change detection.
//!
//! A rate line reads `1 BTC = $ 64,000.46 USD`. When denomination data is not
//! loaded yet, or any displayed field is empty, the line is replaced by a
//! loading message instead of a malformed number.

use serde::{Deserialize, Serialize};
use tracing::debug;

use fxline_shared::DisplayConfig;
use fxline_shared::types::DenominationInfo;

use super::converter::{ExchangeAmountConverter, FormattedConversion};
use super::error::ConversionError;
use super::number_format::NumberFormat;
use super::request::{AmountInput, ConversionRequest};

/// What the rendering layer should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateLine {
    /// A complete conversion line.
    Rate(String),
    /// Placeholder shown while data is loading.
    Loading(String),
}

impl RateLine {
    /// Returns the text to display.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Rate(text) | Self::Loading(text) => text,
        }
    }

    /// Returns true if this is the loading placeholder.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }
}

impl std::fmt::Display for RateLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// Renders conversions as rate lines.
#[derive(Debug, Clone)]
pub struct RateLineRenderer {
    number_format: NumberFormat,
    loading_message: String,
}

impl Default for RateLineRenderer {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}

impl RateLineRenderer {
    /// Creates a renderer.
    #[must_use]
    pub fn new(number_format: NumberFormat, loading_message: impl Into<String>) -> Self {
        Self {
            number_format,
            loading_message: loading_message.into(),
        }
    }

    /// Creates a renderer from display configuration.
    #[must_use]
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self::new(
            NumberFormat::from_config(config),
            config.loading_message.clone(),
        )
    }

    /// Computes and renders the rate line.
    ///
    /// # Errors
    ///
    /// Propagates `InvalidAmountFormat` and `ArithmeticOverflow`. Incomplete
    /// denomination data is not an error; it renders as [`RateLine::Loading`].
    pub fn render(
        &self,
        primary: &DenominationInfo,
        secondary: &DenominationInfo,
        request: &ConversionRequest,
    ) -> Result<RateLine, ConversionError> {
        match ExchangeAmountConverter::compute(primary, secondary, request) {
            Ok(conversion) if conversion.is_complete() => {
                Ok(RateLine::Rate(self.format_line(&conversion)))
            }
            Ok(_) => {
                debug!(
                    primary = %primary.name,
                    secondary = %secondary.name,
                    "exchange data incomplete, showing loading message"
                );
                Ok(self.loading())
            }
            Err(err) if err.is_loading() => Ok(self.loading()),
            Err(err) => Err(err),
        }
    }

    /// Renders a complete conversion with grouped amounts.
    #[must_use]
    pub fn format_line(&self, conversion: &FormattedConversion) -> String {
        format!(
            "{} {} = {} {} {}",
            self.number_format.format_number(&conversion.primary_amount),
            conversion.primary_name,
            conversion.secondary_symbol.as_deref().unwrap_or_default(),
            self.number_format.format_number(&conversion.secondary_amount),
            conversion.secondary_name,
        )
    }

    fn loading(&self) -> RateLine {
        RateLine::Loading(self.loading_message.clone())
    }
}

/// Everything a rate line depends on.
///
/// Hosts keep the last rendered inputs and skip re-rendering while
/// [`RateLineInputs::needs_refresh`] is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLineInputs {
    /// Primary currency denomination.
    pub primary: DenominationInfo,
    /// Secondary currency denomination.
    pub secondary: DenominationInfo,
    /// Primary display amount. Defaults to `"1"`.
    #[serde(default)]
    pub primary_amount: Option<String>,
    /// Secondary amount in exchange units.
    pub secondary_amount: AmountInput,
}

fn denomination_changed(current: &DenominationInfo, next: &DenominationInfo) -> bool {
    current.display_multiplier != next.display_multiplier
        || current.exchange_multiplier != next.exchange_multiplier
        || current.name != next.name
        || current.symbol != next.symbol
}

impl RateLineInputs {
    /// Returns the conversion request for these inputs.
    #[must_use]
    pub fn request(&self) -> ConversionRequest {
        ConversionRequest {
            primary_amount: self.primary_amount.clone(),
            secondary_amount: self.secondary_amount.clone(),
        }
    }

    /// Returns true if `next` would render differently from `self`.
    #[must_use]
    pub fn needs_refresh(&self, next: &Self) -> bool {
        denomination_changed(&self.primary, &next.primary)
            || denomination_changed(&self.secondary, &next.secondary)
            || self.primary_amount != next.primary_amount
            || self.secondary_amount != next.secondary_amount
    }

    /// Renders these inputs with `renderer`.
    ///
    /// # Errors
    ///
    /// Same as [`RateLineRenderer::render`].
    pub fn render(&self, renderer: &RateLineRenderer) -> Result<RateLine, ConversionError> {
        renderer.render(&self.primary, &self.secondary, &self.request())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxline_shared::types::Multiplier;

    fn btc() -> DenominationInfo {
        DenominationInfo::new("BTC")
            .with_symbol("₿")
            .with_multipliers(Multiplier::from(100_000_000), Multiplier::from(100_000_000))
    }

    fn usd() -> DenominationInfo {
        DenominationInfo::new("USD")
            .with_symbol("$")
            .with_multipliers(Multiplier::from(100), Multiplier::from(100))
    }

    fn inputs() -> RateLineInputs {
        RateLineInputs {
            primary: btc(),
            secondary: usd(),
            primary_amount: None,
            secondary_amount: AmountInput::from("64000.456"),
        }
    }

    #[test]
    fn test_render_rate_line() {
        let line = RateLineRenderer::default()
            .render(&btc(), &usd(), &ConversionRequest::new("64000.456"))
            .unwrap();
        assert_eq!(line, RateLine::Rate("1 BTC = $ 64,000.46 USD".to_string()));
        assert!(!line.is_loading());
    }

    #[test]
    fn test_render_groups_primary_amount() {
        let request = ConversionRequest::new("2").with_primary_amount("1000");
        let line = RateLineRenderer::default()
            .render(&btc(), &usd(), &request)
            .unwrap();
        assert_eq!(line.text(), "1,000 BTC = $ 2.00 USD");
    }

    #[test]
    fn test_render_loading_when_multiplier_missing() {
        let line = RateLineRenderer::default()
            .render(&btc(), &DenominationInfo::new("USD"), &ConversionRequest::new("1"))
            .unwrap();
        assert_eq!(line, RateLine::Loading("Exchange rate loading".to_string()));
    }

    #[test]
    fn test_render_loading_when_symbol_missing() {
        let mut secondary = usd();
        secondary.symbol = None;
        let line = RateLineRenderer::default()
            .render(&btc(), &secondary, &ConversionRequest::new("1"))
            .unwrap();
        assert!(line.is_loading());
    }

    #[test]
    fn test_render_propagates_invalid_amount() {
        let err = RateLineRenderer::default()
            .render(&btc(), &usd(), &ConversionRequest::new("oops"))
            .unwrap_err();
        assert_eq!(err, ConversionError::InvalidAmountFormat("oops".into()));
    }

    #[test]
    fn test_render_with_config() {
        let config = DisplayConfig {
            loading_message: "Kurs wird geladen".to_string(),
            grouping_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            grouping_size: 3,
        };
        let renderer = RateLineRenderer::from_config(&config);

        let line = renderer
            .render(&btc(), &usd(), &ConversionRequest::new("64000.456"))
            .unwrap();
        assert_eq!(line.to_string(), "1 BTC = $ 64.000,46 USD");

        let line = renderer
            .render(&DenominationInfo::new("BTC"), &usd(), &ConversionRequest::new("1"))
            .unwrap();
        assert_eq!(line.to_string(), "Kurs wird geladen");
    }

    #[test]
    fn test_inputs_render() {
        let line = inputs().render(&RateLineRenderer::default()).unwrap();
        assert_eq!(line.text(), "1 BTC = $ 64,000.46 USD");
    }

    #[test]
    fn test_identical_inputs_do_not_refresh() {
        assert!(!inputs().needs_refresh(&inputs()));
    }

    #[test]
    fn test_equal_multiplier_values_do_not_refresh() {
        let mut next = inputs();
        next.secondary.display_multiplier = Some("100.0".parse().unwrap());
        assert!(!inputs().needs_refresh(&next));
    }

    #[test]
    fn test_denomination_changes_refresh() {
        let current = inputs();

        let mut next = current.clone();
        next.secondary.exchange_multiplier = Some(Multiplier::from(1));
        assert!(current.needs_refresh(&next));

        let mut next = current.clone();
        next.primary.name = "mBTC".to_string();
        assert!(current.needs_refresh(&next));

        let mut next = current.clone();
        next.secondary.symbol = Some("US$".to_string());
        assert!(current.needs_refresh(&next));

        let mut next = current.clone();
        next.primary.display_multiplier = None;
        assert!(current.needs_refresh(&next));
    }

    #[test]
    fn test_amount_changes_refresh() {
        let current = inputs();

        let mut next = current.clone();
        next.secondary_amount = AmountInput::from("64001");
        assert!(current.needs_refresh(&next));

        let mut next = current.clone();
        next.primary_amount = Some("2".to_string());
        assert!(current.needs_refresh(&next));
    }

    #[test]
    fn test_deserialize_inputs() {
        let inputs: RateLineInputs = serde_json::from_str(
            r#"{
                "primary": {"name": "BTC", "displayMultiplier": "100000000", "exchangeMultiplier": "100000000"},
                "secondary": {"name": "USD", "symbol": "$", "displayMultiplier": 100, "exchangeMultiplier": 100},
                "secondaryAmount": 64000.5
            }"#,
        )
        .unwrap();
        let line = inputs.render(&RateLineRenderer::default()).unwrap();
        assert_eq!(line.text(), "1 BTC = $ 64,000.50 USD");
    }
}
