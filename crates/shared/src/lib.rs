//! Shared types, errors, and configuration for fxline.
//!
//! This crate provides common types used across all other crates:
//! - Denomination metadata with decimal multipliers
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, DisplayConfig};
pub use error::{AppError, AppResult};
