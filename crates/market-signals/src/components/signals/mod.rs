//! Signals grid and the cards it renders.

mod signal_card;
mod signals_grid;

pub use signal_card::SignalCard;
pub use signals_grid::SignalsGrid;
