//! Card catalog and deck rules for the trading card battle game.
//!
//! - [`CardCatalog`] loads the JSON card list (`name`, `hp`, `attack`, `type`,
//!   `pokedexNumber`) and indexes it by pokedex number.
//! - [`Deck`] enforces the deck rules: a name and exactly [`DECK_SIZE`]
//!   distinct cards, all present in the catalog.
//! - [`starter_deck`] deals a random deck for a new player.
//! - [`DeckCollection`] keeps every player's decks, scoped to their owner.

pub mod catalog;
pub mod collection;
pub mod deck;

pub use catalog::{Card, CardCatalog, CatalogError};
pub use collection::{DeckCollection, DeckId, OwnedDeck, PlayerId};
pub use deck::{starter_deck, Deck, DeckError, DECK_SIZE, STARTER_DECK_NAME};
