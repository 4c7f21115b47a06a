//! Card system: cards, decks and the stat catalog.
//!
//! ## Key Types
//!
//! - `Card`: a deck entry (name and level)
//! - `Deck`: the cards a side can play
//! - `CardStats`: cost, damage and crit chance for a card name
//! - `CardCatalog`: name to stats lookup with a fallback entry

pub mod definition;
pub mod registry;

pub use definition::{Card, CardStats, Deck};
pub use registry::CardCatalog;
