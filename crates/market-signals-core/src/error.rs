//! Error types for market-signals-core.

use thiserror::Error;

/// Errors raised while building a [`ShellConfig`](crate::ShellConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Fade-in duration is zero or above the allowed maximum
    #[error("Fade-in duration {value}ms is out of range (1..={max}ms)")]
    FadeDurationOutOfRange { value: u32, max: u32 },
    /// Background color is not a `#rrggbb` hex literal
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}
