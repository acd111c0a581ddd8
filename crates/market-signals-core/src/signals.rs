//! Static market signal catalog rendered by the dashboard grid.

/// Direction a signal points in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalDirection {
    Bullish,
    Bearish,
    Neutral,
}

impl SignalDirection {
    pub fn label(self) -> &'static str {
        match self {
            SignalDirection::Bullish => "Bullish",
            SignalDirection::Bearish => "Bearish",
            SignalDirection::Neutral => "Neutral",
        }
    }

    /// Style class suffix, e.g. `ms-signal-badge--bullish`.
    pub fn modifier(self) -> &'static str {
        match self {
            SignalDirection::Bullish => "bullish",
            SignalDirection::Bearish => "bearish",
            SignalDirection::Neutral => "neutral",
        }
    }
}

/// A single widget in the signals grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketSignal {
    pub ticker: &'static str,
    pub name: &'static str,
    pub direction: SignalDirection,
    /// Percentage, 0..=100
    pub confidence: u8,
    pub summary: &'static str,
}

impl MarketSignal {
    pub fn confidence_label(&self) -> String {
        format!("{}%", self.confidence)
    }
}

const CATALOG: &[MarketSignal] = &[
    MarketSignal {
        ticker: "BTC",
        name: "Bitcoin",
        direction: SignalDirection::Bullish,
        confidence: 78,
        summary: "Momentum holding above the 50-day average.",
    },
    MarketSignal {
        ticker: "ETH",
        name: "Ethereum",
        direction: SignalDirection::Bullish,
        confidence: 64,
        summary: "Volume expanding on higher lows.",
    },
    MarketSignal {
        ticker: "SOL",
        name: "Solana",
        direction: SignalDirection::Neutral,
        confidence: 51,
        summary: "Range-bound, waiting on a breakout.",
    },
    MarketSignal {
        ticker: "SPX",
        name: "S&P 500",
        direction: SignalDirection::Neutral,
        confidence: 55,
        summary: "Breadth mixed across sectors.",
    },
    MarketSignal {
        ticker: "GOLD",
        name: "Gold",
        direction: SignalDirection::Bullish,
        confidence: 69,
        summary: "Safe-haven demand steady.",
    },
    MarketSignal {
        ticker: "OIL",
        name: "Crude Oil",
        direction: SignalDirection::Bearish,
        confidence: 61,
        summary: "Inventories building for a third week.",
    },
];

/// Built-in catalog shown when the dashboard starts.
pub fn default_signals() -> &'static [MarketSignal] {
    CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_invariants() {
        let signals = default_signals();
        assert!(!signals.is_empty());

        let tickers: HashSet<_> = signals.iter().map(|s| s.ticker).collect();
        assert_eq!(tickers.len(), signals.len(), "tickers must be unique");

        assert!(signals.iter().all(|s| s.confidence <= 100));
    }

    #[test]
    fn test_confidence_label() {
        let signal = &default_signals()[0];
        assert_eq!(signal.confidence_label(), format!("{}%", signal.confidence));
    }

    #[test]
    fn test_direction_text() {
        assert_eq!(SignalDirection::Bearish.label(), "Bearish");
        assert_eq!(SignalDirection::Neutral.modifier(), "neutral");
    }
}
