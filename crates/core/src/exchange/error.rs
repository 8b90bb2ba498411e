//! Exchange computation error types.

use fxline_shared::AppError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which side of a conversion a denomination belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DenominationSide {
    /// The currency the rate is quoted for (left of `=`).
    Primary,
    /// The currency the rate is expressed in (right of `=`).
    Secondary,
}

impl std::fmt::Display for DenominationSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Secondary => write!(f, "secondary"),
        }
    }
}

/// Errors that can occur while computing an exchange display amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A multiplier is missing or zero; the caller should show a loading state.
    #[error("Denomination data incomplete for {side} currency")]
    IncompleteDenominationData {
        /// Side whose multipliers are not loaded.
        side: DenominationSide,
    },

    /// The amount is not a finite decimal number.
    #[error("Invalid amount format: {0:?}")]
    InvalidAmountFormat(String),

    /// The result does not fit in a 96-bit decimal.
    #[error("Exchange amount overflowed decimal range")]
    ArithmeticOverflow,
}

impl ConversionError {
    /// Returns true if the rendering layer should show a loading placeholder.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::IncompleteDenominationData { .. })
    }
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        Self::Conversion(err.to_string())
    }
}
