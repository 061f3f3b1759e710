//! Player-owned decks

use std::collections::BTreeMap;

use crate::catalog::CardCatalog;
use crate::deck::{Deck, DeckError};

pub type DeckId = u32;
pub type PlayerId = u32;

/// A deck with its id and owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedDeck {
    pub id: DeckId,
    pub owner: PlayerId,
    pub deck: Deck,
}

/// Decks of every player, each visible and editable only by its owner
///
/// Ids are handed out in increasing order, so a higher id is a newer deck.
#[derive(Debug, Clone)]
pub struct DeckCollection {
    decks: BTreeMap<DeckId, OwnedDeck>,
    next_id: DeckId,
}

impl Default for DeckCollection {
    fn default() -> Self {
        Self {
            decks: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl DeckCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Build and store a new deck for `owner`
    pub fn create(
        &mut self,
        owner: PlayerId,
        name: &str,
        pokedex_numbers: &[u32],
        catalog: &CardCatalog,
    ) -> Result<&OwnedDeck, DeckError> {
        let deck = Deck::build(name, pokedex_numbers, catalog)?;
        Ok(self.insert(owner, deck))
    }

    /// Store an already built deck, such as a starter deck
    pub fn insert(&mut self, owner: PlayerId, deck: Deck) -> &OwnedDeck {
        let id = self.next_id;
        self.next_id += 1;

        tracing::debug!(id, owner, deck = %deck.name(), "deck created");
        self.decks
            .entry(id)
            .or_insert(OwnedDeck { id, owner, deck })
    }

    /// Decks of `owner`, newest first
    pub fn mine(&self, owner: PlayerId) -> Vec<&OwnedDeck> {
        self.decks
            .values()
            .rev()
            .filter(|d| d.owner == owner)
            .collect()
    }

    /// A deck of `owner`. Another player's deck is reported as not found.
    pub fn get(&self, owner: PlayerId, id: DeckId) -> Result<&OwnedDeck, DeckError> {
        self.decks
            .get(&id)
            .filter(|d| d.owner == owner)
            .ok_or(DeckError::NotFound(id))
    }

    /// Change the name, the cards, or both
    ///
    /// A missing or blank name leaves the name as it is. New cards go
    /// through the usual deck rules; on error nothing changes.
    pub fn update(
        &mut self,
        owner: PlayerId,
        id: DeckId,
        name: Option<&str>,
        pokedex_numbers: Option<&[u32]>,
        catalog: &CardCatalog,
    ) -> Result<&OwnedDeck, DeckError> {
        let entry = self.owned_mut(owner, id)?;

        let mut deck = entry.deck.clone();
        if let Some(numbers) = pokedex_numbers {
            deck.replace_cards(numbers, catalog)?;
        }
        if let Some(name) = name.filter(|n| !n.trim().is_empty()) {
            deck.rename(name)?;
        }
        entry.deck = deck;

        tracing::debug!(id, owner, "deck updated");
        Ok(entry)
    }

    /// Remove a deck of `owner`, returning it
    pub fn delete(&mut self, owner: PlayerId, id: DeckId) -> Result<OwnedDeck, DeckError> {
        self.owned_mut(owner, id)?;

        tracing::debug!(id, owner, "deck deleted");
        self.decks.remove(&id).ok_or(DeckError::NotFound(id))
    }

    fn owned_mut(&mut self, owner: PlayerId, id: DeckId) -> Result<&mut OwnedDeck, DeckError> {
        let entry = self.decks.get_mut(&id).ok_or(DeckError::NotFound(id))?;
        if entry.owner != owner {
            return Err(DeckError::NotOwner(id));
        }
        Ok(entry)
    }
}
