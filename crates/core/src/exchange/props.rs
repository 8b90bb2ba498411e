//! Property-based tests for exchange display computation.
//!
//! - Property 1: Primary Amount Passthrough
//! - Property 2: Deterministic Output
//! - Property 3: Precision Monotonicity
//! - Property 4: Fixed Decimal Places
//! - Property 5: Incomplete Data Never Yields a Number

use proptest::prelude::*;
use rust_decimal::Decimal;

use fxline_shared::types::{DenominationInfo, Multiplier};

use super::converter::ExchangeAmountConverter;
use super::number_format::NumberFormat;
use super::precision::{PRECISION_BUMP, SMALL_AMOUNT_THRESHOLD, initial_precision, to_fixed};
use super::request::ConversionRequest;

/// Strategy to generate power-of-ten multipliers (1 to 100,000,000).
fn multiplier() -> impl Strategy<Value = Multiplier> {
    (0u32..=8).prop_map(|exp| Multiplier::from(10u64.pow(exp)))
}

/// Strategy to generate fully loaded denominations.
fn loaded_denomination() -> impl Strategy<Value = DenominationInfo> {
    (multiplier(), multiplier()).prop_map(|(display, exchange)| {
        DenominationInfo::new("CUR")
            .with_symbol("C")
            .with_multipliers(display, exchange)
    })
}

/// Strategy to generate amounts (-10,000,000,000 to 10,000,000,000 at 0-12 decimals).
fn amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000i64..10_000_000_000i64, 0u32..=12).prop_map(|(m, s)| Decimal::new(m, s))
}

/// Counts the digits after the decimal point.
fn decimals_in(text: &str) -> u32 {
    text.split_once('.')
        .map_or(0, |(_, fraction)| u32::try_from(fraction.len()).unwrap_or(u32::MAX))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property 1: the primary amount is returned as given, or "1" when omitted.
    #[test]
    fn prop_primary_amount_passthrough(
        primary in loaded_denomination(),
        secondary in loaded_denomination(),
        value in amount(),
        given in proptest::option::of("[1-9][0-9]{0,6}"),
    ) {
        let mut request = ConversionRequest::new(value.to_string());
        if let Some(given) = &given {
            request = request.with_primary_amount(given.clone());
        }

        let result = ExchangeAmountConverter::compute(&primary, &secondary, &request).unwrap();
        let expected = given.as_deref().unwrap_or("1");
        prop_assert_eq!(result.primary_amount.as_str(), expected);
    }

    /// Property 2: identical inputs give an identical formatted string.
    #[test]
    fn prop_compute_is_deterministic(
        primary in loaded_denomination(),
        secondary in loaded_denomination(),
        value in amount(),
    ) {
        let text = value.to_string();
        let first = ExchangeAmountConverter::compute_display_amount(&primary, &secondary, &text).unwrap();
        let second = ExchangeAmountConverter::compute_display_amount(&primary, &secondary, &text).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property 3: precision is bumped exactly when the unadjusted rounded
    /// magnitude is at most 0.1.
    #[test]
    fn prop_precision_monotonicity(
        primary in loaded_denomination(),
        secondary in loaded_denomination(),
        value in amount(),
    ) {
        let result = ExchangeAmountConverter::compute_display_amount(
            &primary, &secondary, &value.to_string(),
        ).unwrap();

        let initial = initial_precision(secondary.display_multiplier.as_ref());
        let ratio = (primary.display_multiplier.unwrap().as_decimal()
            / primary.exchange_multiplier.unwrap().as_decimal())
            / (secondary.display_multiplier.unwrap().as_decimal()
                / secondary.exchange_multiplier.unwrap().as_decimal());
        let unadjusted: Decimal = to_fixed(ratio * value, initial).parse().unwrap();

        if unadjusted.abs() <= SMALL_AMOUNT_THRESHOLD {
            prop_assert_eq!(result.precision, initial + PRECISION_BUMP);
        } else {
            prop_assert_eq!(result.precision, initial);
        }
    }

    /// Property 4: the formatted amount has exactly `precision` decimals.
    #[test]
    fn prop_fixed_decimal_places(
        primary in loaded_denomination(),
        secondary in loaded_denomination(),
        value in amount(),
    ) {
        let result = ExchangeAmountConverter::compute_display_amount(
            &primary, &secondary, &value.to_string(),
        ).unwrap();
        prop_assert_eq!(decimals_in(&result.secondary_amount), result.precision);
        prop_assert!(!result.secondary_amount.contains('e'));
    }

    /// Property 5: a missing or zero secondary display multiplier never yields a number.
    #[test]
    fn prop_incomplete_secondary_is_loading(
        primary in loaded_denomination(),
        exchange in multiplier(),
        zero in any::<bool>(),
        value in amount(),
    ) {
        let mut secondary = DenominationInfo::new("CUR").with_symbol("C");
        secondary.exchange_multiplier = Some(exchange);
        if zero {
            secondary.display_multiplier = Some(Multiplier::from(0));
        }

        let err = ExchangeAmountConverter::compute_display_amount(
            &primary, &secondary, &value.to_string(),
        ).unwrap_err();
        prop_assert!(err.is_loading());
    }

    /// Grouping only inserts separators: removing them restores the input.
    #[test]
    fn prop_grouping_preserves_digits(value in amount()) {
        let text = to_fixed(value, 4);
        let grouped = NumberFormat::default().format_number(&text);
        prop_assert_eq!(grouped.replace(',', ""), text);
    }
}
