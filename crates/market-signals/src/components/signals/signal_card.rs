use dioxus::prelude::*;
use market_signals_core::MarketSignal;

#[component]
pub fn SignalCard(signal: MarketSignal) -> Element {
    let badge_class = format!(
        "ms-signal-badge ms-signal-badge--{}",
        signal.direction.modifier()
    );
    let direction = signal.direction.label();
    let confidence = signal.confidence_label();

    rsx! {
        article { class: "ms-signal-card",
            div { class: "ms-signal-card-header",
                span { class: "ms-signal-ticker", "{signal.ticker}" }
                span { class: "{badge_class}", "{direction}" }
            }
            div { class: "ms-signal-name", "{signal.name}" }
            div { class: "ms-signal-confidence",
                span { class: "ms-signal-confidence-label", "Confidence" }
                span { class: "ms-signal-confidence-value", "{confidence}" }
            }
            p { class: "ms-signal-summary", "{signal.summary}" }
        }
    }
}
