//! UI components for the Market Signals dashboard.
//!
//! - `app_shell`: PageShell, Header, Footer
//! - `signals`: SignalsGrid, SignalCard
//! - `mount`: the post-mount lifecycle hook used by the shell
//!
//! # Context Providers
//!
//! [`App`] provides a [`ShellConfig`] to the tree. [`PageShell`] reads it and
//! falls back to the defaults when rendered on its own:
//!
//! ```ignore
//! use_context_provider(|| ShellConfig::default().with_fade_in_ms(400).unwrap());
//! ```

mod app_shell;
mod mount;
mod signals;

pub use app_shell::{Footer, Header, PageShell};
pub use mount::{use_mount_latch, use_mount_state};
pub use signals::{SignalCard, SignalsGrid};

use dioxus::prelude::*;
use market_signals_core::ShellConfig;

/// Access the shell configuration, or the defaults when none was provided.
pub fn use_shell_config() -> ShellConfig {
    try_use_context::<ShellConfig>().unwrap_or_default()
}

/// Root component: provides configuration and renders the page shell.
#[component]
pub fn App() -> Element {
    use_context_provider(ShellConfig::default);

    rsx! {
        PageShell {}
    }
}
