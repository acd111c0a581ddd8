use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use market_signals::components::App as MarketSignalsApp;

#[cfg_attr(not(any(feature = "web", feature = "desktop")), allow(dead_code))]
const MAIN_CSS: Asset = asset!("/assets/market-signals.css");

fn main() {
    // Initialize cross-platform logger (web console + desktop stdout)
    // Use DEBUG level for development builds, INFO for release builds
    #[cfg(debug_assertions)]
    dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
    #[cfg(not(debug_assertions))]
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    info!("Starting Market Signals dashboard");

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let config = Config::default().with_window(
            WindowBuilder::new()
                .with_title("Market Signals")
                .with_resizable(true)
                .with_inner_size(LogicalSize::new(1280.0, 900.0))
                .with_min_inner_size(LogicalSize::new(800.0, 600.0)),
        );

        dioxus::LaunchBuilder::desktop()
            .with_cfg(config)
            .launch(App);
    }

    #[cfg(all(feature = "web", not(feature = "desktop")))]
    {
        dioxus::launch(App);
    }

    #[cfg(not(any(feature = "web", feature = "desktop")))]
    {
        dioxus::logger::tracing::error!("No renderer enabled: build with `--features web` or `--features desktop`");
        std::process::exit(1);
    }
}

#[cfg_attr(not(any(feature = "web", feature = "desktop")), allow(dead_code))]
#[component]
fn App() -> Element {
    rsx! {
        // asset! does not resolve on desktop without the dx bundler, inline it there
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet { href: MAIN_CSS }
        } else {
            style { {include_str!("../assets/market-signals.css")} }
        }

        MarketSignalsApp {}
    }
}
