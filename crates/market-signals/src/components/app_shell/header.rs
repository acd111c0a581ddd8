use dioxus::prelude::*;

/// Page banner with product name and tagline
#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "ms-header",
            div { class: "ms-header-brand",
                span { class: "ms-header-mark", "◆" }
                h1 { class: "ms-header-title", "Market Signals" }
            }
            p { class: "ms-header-tagline",
                "Directional signals across crypto, equities and commodities."
            }
        }
    }
}
