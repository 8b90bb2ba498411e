//! Exchange-rate display computation.

pub mod converter;
pub mod error;
pub mod number_format;
pub mod precision;
pub mod rate_line;
pub mod request;

#[cfg(test)]
mod props;

pub use converter::{ExchangeAmountConverter, FormattedConversion};
pub use error::{ConversionError, DenominationSide};
pub use number_format::NumberFormat;
pub use precision::{AdaptiveAmount, PRECISION_BUMP, SMALL_AMOUNT_THRESHOLD};
pub use rate_line::{RateLine, RateLineInputs, RateLineRenderer};
pub use request::{AmountInput, ConversionRequest};
