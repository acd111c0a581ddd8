use dioxus::prelude::*;

/// Footer with disclaimer
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "ms-footer",
            span { class: "ms-footer-text",
                "Signals are illustrative only • Not investment advice."
            }
        }
    }
}
