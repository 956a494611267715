//! Core types and orchestration for the Revenda back office
//!
//! This crate is UI-agnostic: the list controller talks to the grid, the
//! confirmation dialog, the notification area, and the waiting overlay
//! through the capability traits in [`capabilities`], so every piece can be
//! exercised without a browser.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod capabilities;
pub mod config;
pub mod controller;
pub mod error;
pub mod grid;
pub mod types;

// Re-export commonly used types
pub use capabilities::{CarsGateway, ConfirmationGate, ListState, Notifier, Severity, WaitingIndicator};
pub use config::Config;
pub use controller::CarListController;
pub use error::{Error, Result};
pub use types::Car;

/// Initialize the logging system from the logging section of the
/// configuration. `RUST_LOG` takes precedence over the configured level.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(logging: &config::LoggingConfig) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(logging.level.clone()));

    let registry = tracing_subscriber::registry().with(filter);
    let init = if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    init.map_err(|e| Error::Other(e.to_string()))
}
