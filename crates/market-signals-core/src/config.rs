//! Presentation constants and shell configuration.
//!
//! The constants describe the production look of the dashboard. [`ShellConfig`]
//! carries the subset that may be tuned per launch and is handed to the page
//! shell through the component context.
//!
//! # Usage
//!
//! ```
//! use market_signals_core::config::{ShellConfig, FADE_IN_DURATION_MS};
//!
//! let config = ShellConfig::default();
//! assert_eq!(config.fade_in_ms(), FADE_IN_DURATION_MS);
//!
//! let slower = config.with_fade_in_ms(1200).unwrap();
//! assert_eq!(slower.fade_in_ms(), 1200);
//! ```

use crate::error::ConfigError;

// =============================================================================
// Layout
// =============================================================================

/// Heading shown above the signals grid. Not configurable.
pub const DASHBOARD_HEADING: &str = "Market Signals Dashboard";

/// Width of the centered content band, in rem.
pub const CONTENT_MAX_WIDTH_REM: u32 = 80;

// =============================================================================
// Transition
// =============================================================================

/// Duration of the opacity fade-in once the shell has mounted.
pub const FADE_IN_DURATION_MS: u32 = 700;

/// Upper bound accepted by [`ShellConfig`] for the fade-in duration.
pub const MAX_FADE_IN_MS: u32 = 10_000;

// =============================================================================
// Background
// =============================================================================

/// Inner stop of the radial background gradient.
pub const BACKGROUND_INNER: &str = "#0d0d1a";

/// Outer stop of the radial background gradient.
pub const BACKGROUND_OUTER: &str = "#111827";

/// Tunable presentation settings for the page shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    fade_in_ms: u32,
    background_inner: String,
    background_outer: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            fade_in_ms: FADE_IN_DURATION_MS,
            background_inner: BACKGROUND_INNER.to_string(),
            background_outer: BACKGROUND_OUTER.to_string(),
        }
    }
}

impl ShellConfig {
    /// Builds a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FadeDurationOutOfRange`] when `fade_in_ms` is zero
    /// or above [`MAX_FADE_IN_MS`], and [`ConfigError::InvalidColor`] when a
    /// color is not a `#rrggbb` literal.
    pub fn new(
        fade_in_ms: u32,
        background_inner: impl Into<String>,
        background_outer: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let background_inner = background_inner.into();
        let background_outer = background_outer.into();

        validate_fade(fade_in_ms)?;
        validate_color(&background_inner)?;
        validate_color(&background_outer)?;

        Ok(Self {
            fade_in_ms,
            background_inner,
            background_outer,
        })
    }

    /// Returns a copy with a different fade-in duration.
    pub fn with_fade_in_ms(self, fade_in_ms: u32) -> Result<Self, ConfigError> {
        validate_fade(fade_in_ms)?;
        Ok(Self { fade_in_ms, ..self })
    }

    /// Returns a copy with different background gradient stops.
    pub fn with_background(
        self,
        inner: impl Into<String>,
        outer: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self::new(self.fade_in_ms, inner, outer)
    }

    pub fn fade_in_ms(&self) -> u32 {
        self.fade_in_ms
    }

    pub fn background_inner(&self) -> &str {
        &self.background_inner
    }

    pub fn background_outer(&self) -> &str {
        &self.background_outer
    }
}

fn validate_fade(value: u32) -> Result<(), ConfigError> {
    if value == 0 || value > MAX_FADE_IN_MS {
        return Err(ConfigError::FadeDurationOutOfRange {
            value,
            max: MAX_FADE_IN_MS,
        });
    }
    Ok(())
}

fn validate_color(color: &str) -> Result<(), ConfigError> {
    let valid = color
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()));

    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidColor(color.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = ShellConfig::default();
        assert_eq!(config.fade_in_ms(), 700);
        assert_eq!(config.background_inner(), BACKGROUND_INNER);
        assert_eq!(config.background_outer(), BACKGROUND_OUTER);
    }

    #[test]
    fn test_fade_duration_bounds() {
        assert_eq!(
            ShellConfig::default().with_fade_in_ms(0),
            Err(ConfigError::FadeDurationOutOfRange {
                value: 0,
                max: MAX_FADE_IN_MS
            })
        );
        assert!(ShellConfig::default()
            .with_fade_in_ms(MAX_FADE_IN_MS + 1)
            .is_err());
        assert!(ShellConfig::default().with_fade_in_ms(1).is_ok());
        assert!(ShellConfig::default()
            .with_fade_in_ms(MAX_FADE_IN_MS)
            .is_ok());
    }

    #[test]
    fn test_color_validation() {
        assert!(ShellConfig::new(700, "#000000", "#FFFfff").is_ok());

        for bad in ["000000", "#fff", "#12345g", "#1234567", ""] {
            assert_eq!(
                ShellConfig::new(700, bad, BACKGROUND_OUTER),
                Err(ConfigError::InvalidColor(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_with_background_keeps_duration() {
        let config = ShellConfig::default()
            .with_fade_in_ms(300)
            .and_then(|c| c.with_background("#101010", "#202020"))
            .unwrap();
        assert_eq!(config.fade_in_ms(), 300);
        assert_eq!(config.background_inner(), "#101010");
        assert_eq!(config.background_outer(), "#202020");
    }
}
