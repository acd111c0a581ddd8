use dioxus::prelude::*;
use market_signals_core::config::DASHBOARD_HEADING;
use market_signals_core::style::{shell_class, shell_style};

use super::{Footer, Header};
use crate::components::{use_mount_state, use_shell_config, SignalsGrid};

/// Top-level page layout with a one-time fade-in after mount
#[component]
pub fn PageShell() -> Element {
    let config = use_shell_config();
    let mount_state = use_mount_state();

    let class = shell_class(mount_state);
    let style = shell_style(&config);

    rsx! {
        div { class: "{class}", style: "{style}",
            div { class: "ms-content",
                Header {}

                main { class: "ms-main",
                    h2 { class: "ms-heading", "{DASHBOARD_HEADING}" }
                    SignalsGrid {}
                }
            }

            Footer {}
        }
    }
}
