//! Market Signals - dashboard page shell.
//!
//! A Dioxus application that renders a header, a grid of market signal
//! widgets, and a footer inside a shell that fades in once it has mounted.
//!
//! # Architecture
//!
//! - **Shell**: [`components::PageShell`] owns layout and the one-time mount flag
//! - **Lifecycle**: [`components::use_mount_state`] wraps the core `MountLatch`
//!   in a post-mount effect and a teardown hook
//! - **Core**: `market-signals-core` holds the latch, configuration, styling
//!   and the signal catalog, independent of Dioxus
//!
//! # Renderers
//!
//! The crate enables no renderer by default so tests build headless. The
//! binary needs one of:
//!
//! - `web`: `dx serve --platform web` (or `cargo build --features web`)
//! - `desktop`: `cargo run --features desktop`
//!
//! Without either, `market-signals` logs an error and exits with status 1.
//!
//! # Examples
//!
//! ```ignore
//! use market_signals::components::App;
//!
//! dioxus::launch(App);
//! ```

// Enforce memory safety: forbid all unsafe code
#![forbid(unsafe_code)]

pub mod components;
