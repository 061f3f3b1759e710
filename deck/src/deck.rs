//! Ten-card decks

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tcg_battle::Fighter;
use thiserror::Error;

use crate::catalog::{Card, CardCatalog};

/// Number of cards in every deck
pub const DECK_SIZE: usize = 10;

/// Name given to decks built by [`starter_deck`]
pub const STARTER_DECK_NAME: &str = "Starter Deck";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("Deck name is required")]
    MissingName,

    #[error("A deck must contain exactly {expected} cards, found {found}")]
    WrongSize { expected: usize, found: usize },

    #[error("Unknown cards: {0:?}")]
    UnknownCards(Vec<u32>),

    #[error("Cards listed more than once: {0:?}")]
    DuplicateCards(Vec<u32>),

    #[error("Not enough cards for a deck: need {required}, catalog has {available}")]
    CatalogTooSmall { required: usize, available: usize },

    #[error("Deck not found: {0}")]
    NotFound(u32),

    #[error("Deck {0} belongs to another player")]
    NotOwner(u32),
}

/// A named deck of exactly [`DECK_SIZE`] distinct cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DeckRecord")]
pub struct Deck {
    name: String,
    cards: Vec<Card>,
}

/// Serialized form of a [`Deck`], validated before it becomes one
#[derive(Deserialize)]
struct DeckRecord {
    name: String,
    cards: Vec<Card>,
}

impl TryFrom<DeckRecord> for Deck {
    type Error = DeckError;

    fn try_from(record: DeckRecord) -> Result<Self, Self::Error> {
        let name = validate_name(&record.name)?;
        let numbers: Vec<u32> = record.cards.iter().map(|c| c.pokedex_number).collect();
        check_numbers(&numbers)?;

        Ok(Self {
            name,
            cards: record.cards,
        })
    }
}

impl Deck {
    /// Build a deck from pokedex numbers, checked against the catalog
    pub fn build(
        name: &str,
        pokedex_numbers: &[u32],
        catalog: &CardCatalog,
    ) -> Result<Self, DeckError> {
        let name = validate_name(name)?;
        let cards = resolve_cards(pokedex_numbers, catalog)?;

        tracing::debug!(deck = %name, "deck built");
        Ok(Self { name, cards })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn pokedex_numbers(&self) -> Vec<u32> {
        self.cards.iter().map(|c| c.pokedex_number).collect()
    }

    /// Rename the deck. The old name is kept on error.
    pub fn rename(&mut self, name: &str) -> Result<(), DeckError> {
        self.name = validate_name(name)?;
        Ok(())
    }

    /// Replace every card. The old cards are kept on error.
    pub fn replace_cards(
        &mut self,
        pokedex_numbers: &[u32],
        catalog: &CardCatalog,
    ) -> Result<(), DeckError> {
        self.cards = resolve_cards(pokedex_numbers, catalog)?;
        Ok(())
    }

    /// Every card at full HP, in deck order
    pub fn to_fighters(&self) -> Vec<Fighter> {
        self.cards.iter().map(Card::to_fighter).collect()
    }
}

/// Deck of [`DECK_SIZE`] random distinct cards from the catalog
pub fn starter_deck<R: Rng + ?Sized>(
    catalog: &CardCatalog,
    rng: &mut R,
) -> Result<Deck, DeckError> {
    if catalog.len() < DECK_SIZE {
        return Err(DeckError::CatalogTooSmall {
            required: DECK_SIZE,
            available: catalog.len(),
        });
    }

    let pool: Vec<&Card> = catalog.iter().collect();
    let cards: Vec<Card> = pool
        .choose_multiple(rng, DECK_SIZE)
        .map(|c| (*c).clone())
        .collect();

    Ok(Deck {
        name: STARTER_DECK_NAME.to_string(),
        cards,
    })
}

fn validate_name(name: &str) -> Result<String, DeckError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DeckError::MissingName);
    }
    Ok(name.to_string())
}

fn resolve_cards(pokedex_numbers: &[u32], catalog: &CardCatalog) -> Result<Vec<Card>, DeckError> {
    check_numbers(pokedex_numbers)?;

    let unknown: Vec<u32> = pokedex_numbers
        .iter()
        .copied()
        .filter(|n| !catalog.contains(*n))
        .collect();
    if !unknown.is_empty() {
        return Err(DeckError::UnknownCards(unknown));
    }

    Ok(pokedex_numbers
        .iter()
        .filter_map(|n| catalog.get(*n).cloned())
        .collect())
}

/// Size and distinctness, the rules that need no catalog
fn check_numbers(pokedex_numbers: &[u32]) -> Result<(), DeckError> {
    if pokedex_numbers.len() != DECK_SIZE {
        return Err(DeckError::WrongSize {
            expected: DECK_SIZE,
            found: pokedex_numbers.len(),
        });
    }

    let mut seen = BTreeSet::new();
    let duplicates: BTreeSet<u32> = pokedex_numbers
        .iter()
        .copied()
        .filter(|n| !seen.insert(*n))
        .collect();
    if !duplicates.is_empty() {
        return Err(DeckError::DuplicateCards(duplicates.into_iter().collect()));
    }
    Ok(())
}
