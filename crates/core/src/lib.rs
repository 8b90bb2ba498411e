//! Core exchange-rate display logic for fxline.
//!
//! This crate contains pure presentation arithmetic with ZERO I/O dependencies.
//! Given the denomination metadata of two currencies and an exchange amount,
//! it computes the line a wallet shows as `1 BTC = $ 64,000.46 USD`.
//!
//! # Modules
//!
//! - `exchange` - Conversion, adaptive precision, digit grouping, and rate line rendering

pub mod exchange;
