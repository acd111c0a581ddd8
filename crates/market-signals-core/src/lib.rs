//! # Market Signals Core
//!
//! Platform-independent pieces of the Market Signals dashboard.
//!
//! This crate holds everything the page shell needs that does not depend on a
//! particular UI framework, so the lifecycle rules can be tested without a
//! renderer.
//!
//! ## Modules
//!
//! - [`lifecycle`] - One-shot mount latch driving the fade-in transition
//! - [`config`] - Presentation constants and the validated [`ShellConfig`]
//! - [`style`] - Class and inline-style composition for the shell container
//! - [`signals`] - Static market signal catalog rendered by the grid
//! - [`error`] - Error types

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod signals;
pub mod style;

pub use config::ShellConfig;
pub use error::ConfigError;
pub use lifecycle::{MountLatch, MountState, SettleOutcome};
pub use signals::{default_signals, MarketSignal, SignalDirection};
