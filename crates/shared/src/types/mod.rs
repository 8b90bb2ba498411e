//! Common types used across the workspace.

pub mod denomination;

pub use denomination::{DenominationInfo, Multiplier, MultiplierError};
