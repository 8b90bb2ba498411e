//! fxline command-line host
//!
//! Reads a rate line request as JSON (from the file given as the first
//! argument, or stdin) and prints the rendered exchange-rate line.

use std::io::Read;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fxline_core::exchange::{RateLine, RateLineInputs, RateLineRenderer};
use fxline_shared::{AppConfig, AppError, AppResult};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing; stdout is reserved for the rate line
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fxline=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load()?;
    let source = std::env::args().nth(1);

    let line = run(&config, source.as_deref())?;
    if line.is_loading() {
        warn!("denomination data incomplete");
    }
    println!("{line}");

    Ok(())
}

fn run(config: &AppConfig, source: Option<&str>) -> AppResult<RateLine> {
    let text = read_source(source)?;
    let inputs = parse_inputs(&text)?;
    info!(
        primary = %inputs.primary.name,
        secondary = %inputs.secondary.name,
        "rendering rate line"
    );

    let renderer = RateLineRenderer::from_config(&config.display);
    Ok(inputs.render(&renderer)?)
}

fn read_source(source: Option<&str>) -> AppResult<String> {
    match source {
        Some("-") | None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn parse_inputs(text: &str) -> AppResult<RateLineInputs> {
    serde_json::from_str(text).map_err(|e| AppError::Validation(format!("invalid request: {e}")))
}
