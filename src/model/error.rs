//! Error types for the snapsheet crate.
//!
//! A hierarchical taxonomy built on `thiserror`, composing via `?` and
//! `From` conversions. Note what is absent: the gesture pipeline itself has
//! no error surface. Per the controller's contract, a bad frame degrades to
//! "the gesture had no effect" and is logged, never propagated; the
//! variants below all belong to the impure shell (configuration, logging
//! setup, terminal I/O).

use thiserror::Error;

use crate::config::loader::ConfigError;
use crate::logging::LoggingError;
use crate::model::detent::DetentError;

/// Top-level error for the demo shell and host integration.
///
/// All domain-specific errors convert into `SheetError` via `From`, so the
/// binary's setup path can use `?` throughout.
#[derive(Debug, Error)]
pub enum SheetError {
    /// Configuration file could not be read or parsed, or contained
    /// invalid tuning values.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Configured detent fractions do not form a valid table.
    #[error("Invalid detent table: {0}")]
    Detents(#[from] DetentError),

    /// Tracing subscriber could not be initialized.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal setup, rendering, or restore failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
