//! Adaptive display precision for exchange amounts.
//!
//! Amounts are shown fixed-point with as many decimals as the secondary
//! display multiplier spans. Tiny amounts would read as `0.000`, so a result
//! whose rounded magnitude is at most [`SMALL_AMOUNT_THRESHOLD`] gets
//! [`PRECISION_BUMP`] extra digits. The bump is applied once, never repeated.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::trace;

use fxline_shared::types::Multiplier;

/// Extra decimals granted to small amounts.
pub const PRECISION_BUMP: u32 = 3;

/// Rounded magnitudes at or below this value get [`PRECISION_BUMP`] more decimals.
pub const SMALL_AMOUNT_THRESHOLD: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Largest scale a `Decimal` can hold.
const MAX_DECIMAL_SCALE: u32 = 28;

/// A fixed-point amount string and the precision it was rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdaptiveAmount {
    /// Fixed-point text with exactly `precision` decimals.
    pub text: String,
    /// Number of decimals in `text`.
    pub precision: u32,
}

/// Initial precision for a display multiplier: `floor(log10(m))`, or 0 when
/// the multiplier is absent or zero.
#[must_use]
pub fn initial_precision(display_multiplier: Option<&Multiplier>) -> u32 {
    match display_multiplier {
        Some(multiplier) if !multiplier.is_zero() => multiplier.decimal_places(),
        _ => 0,
    }
}

/// Rounds half away from zero, the way fixed-point display rounding behaves.
fn round_for_display(value: Decimal, precision: u32) -> Decimal {
    let rounded = value.round_dp_with_strategy(
        precision.min(MAX_DECIMAL_SCALE),
        RoundingStrategy::MidpointAwayFromZero,
    );
    // no "-0.000"
    if rounded.is_zero() { Decimal::ZERO } else { rounded }
}

/// Formats `value` fixed-point with exactly `precision` decimals.
///
/// Never uses scientific notation and never trims trailing zeros.
#[must_use]
pub fn to_fixed(value: Decimal, precision: u32) -> String {
    let rounded = round_for_display(value, precision);
    let mut text = rounded.to_string();

    let missing = precision.saturating_sub(rounded.scale());
    if missing > 0 {
        if rounded.scale() == 0 {
            text.push('.');
        }
        text.push_str(&"0".repeat(usize::try_from(missing).unwrap_or(0)));
    }
    text
}

/// Formats `value` at `initial` precision, bumping once for small magnitudes.
///
/// The magnitude check uses the absolute value so negative amounts follow
/// the same rule as positive ones.
#[must_use]
pub fn format_adaptive(value: Decimal, initial: u32) -> AdaptiveAmount {
    let first_pass = round_for_display(value, initial);
    let precision = if first_pass.abs() <= SMALL_AMOUNT_THRESHOLD {
        trace!(%value, initial, bumped = initial + PRECISION_BUMP, "small amount, raising precision");
        initial + PRECISION_BUMP
    } else {
        initial
    };

    AdaptiveAmount {
        text: to_fixed(value, precision),
        precision,
    }
}
