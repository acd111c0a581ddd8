use dioxus::prelude::*;
use market_signals_core::default_signals;

use super::SignalCard;

/// Responsive grid with one card per catalog entry
#[component]
pub fn SignalsGrid() -> Element {
    rsx! {
        section { class: "ms-signals-grid",
            for signal in default_signals() {
                SignalCard { key: "{signal.ticker}", signal: signal.clone() }
            }
        }
    }
}
