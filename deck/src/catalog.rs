//! Card catalog loaded from a JSON card list

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tcg_battle::{Element, Fighter};
use thiserror::Error;

const ARTWORK_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read card list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid card list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Card #{pokedex_number} has unknown type: {element}")]
    UnknownElement { pokedex_number: u32, element: String },

    #[error("Duplicate pokedex number: {0}")]
    DuplicateCard(u32),
}

/// A collectible card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub pokedex_number: u32,
    pub name: String,
    pub hp: u32,
    pub attack: u32,
    #[serde(rename = "type", deserialize_with = "element_from_name")]
    pub element: Element,
    #[serde(rename = "imgUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Element names in card data are case-insensitive, as in [`Element::from_name`]
fn element_from_name<'de, D>(deserializer: D) -> Result<Element, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse::<Element>().map_err(serde::de::Error::custom)
}

impl Card {
    /// Image URL, falling back to the official artwork for the pokedex number
    pub fn image_url(&self) -> String {
        self.image_url
            .clone()
            .unwrap_or_else(|| format!("{}/{}.png", ARTWORK_BASE_URL, self.pokedex_number))
    }

    /// Put this card into play at full HP
    pub fn to_fighter(&self) -> Fighter {
        Fighter::new(&self.name, self.element, self.attack, self.hp)
    }
}

/// Entry of the card list file. The type name is kept as a string so an
/// unknown type can be reported with its card number.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardRecord {
    name: String,
    hp: u32,
    attack: u32,
    #[serde(rename = "type")]
    element: String,
    pokedex_number: u32,
    #[serde(rename = "imgUrl", default)]
    image_url: Option<String>,
}

impl TryFrom<CardRecord> for Card {
    type Error = CatalogError;

    fn try_from(record: CardRecord) -> Result<Self, Self::Error> {
        let element =
            Element::from_name(&record.element).ok_or_else(|| CatalogError::UnknownElement {
                pokedex_number: record.pokedex_number,
                element: record.element.clone(),
            })?;

        Ok(Card {
            pokedex_number: record.pokedex_number,
            name: record.name,
            hp: record.hp,
            attack: record.attack,
            element,
            image_url: record.image_url,
        })
    }
}

/// All known cards, keyed by pokedex number
#[derive(Debug, Clone, Default)]
pub struct CardCatalog {
    cards: BTreeMap<u32, Card>,
}

impl CardCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from cards, rejecting duplicate pokedex numbers
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for card in cards {
            catalog.insert(card)?;
        }
        Ok(catalog)
    }

    /// Parse a JSON array of card records
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<CardRecord> = serde_json::from_str(json)?;
        let cards = records
            .into_iter()
            .map(Card::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let catalog = Self::from_cards(cards)?;

        tracing::debug!(cards = catalog.len(), "card catalog parsed");
        Ok(catalog)
    }

    /// Load a JSON card list from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), cards = catalog.len(), "card catalog loaded");
        Ok(catalog)
    }

    pub fn insert(&mut self, card: Card) -> Result<(), CatalogError> {
        if self.cards.contains_key(&card.pokedex_number) {
            return Err(CatalogError::DuplicateCard(card.pokedex_number));
        }
        self.cards.insert(card.pokedex_number, card);
        Ok(())
    }

    pub fn get(&self, pokedex_number: u32) -> Option<&Card> {
        self.cards.get(&pokedex_number)
    }

    pub fn contains(&self, pokedex_number: u32) -> bool {
        self.cards.contains_key(&pokedex_number)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in ascending pokedex order
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Cards of a given element, in pokedex order
    pub fn by_element(&self, element: Element) -> impl Iterator<Item = &Card> {
        self.iter().filter(move |c| c.element == element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARDS: &str = r#"[
        {"name": "Charmander", "hp": 39, "attack": 52, "type": "Fire", "pokedexNumber": 4},
        {"name": "Bulbasaur", "hp": 45, "attack": 49, "type": "Grass", "pokedexNumber": 1},
        {"name": "Squirtle", "hp": 44, "attack": 48, "type": "water", "pokedexNumber": 7}
    ]"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = CardCatalog::from_json_str(CARDS).unwrap();
        assert_eq!(catalog.len(), 3);

        let squirtle = catalog.get(7).unwrap();
        assert_eq!(squirtle.name, "Squirtle");
        assert_eq!(squirtle.element, Element::Water);
        assert_eq!(squirtle.hp, 44);
        assert!(catalog.get(25).is_none());
    }

    #[test]
    fn test_iter_is_sorted_by_pokedex_number() {
        let catalog = CardCatalog::from_json_str(CARDS).unwrap();
        let numbers: Vec<u32> = catalog.iter().map(|c| c.pokedex_number).collect();
        assert_eq!(numbers, vec![1, 4, 7]);
    }

    #[test]
    fn test_by_element() {
        let catalog = CardCatalog::from_json_str(CARDS).unwrap();
        let fire: Vec<&str> = catalog
            .by_element(Element::Fire)
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(fire, vec!["Charmander"]);
        assert_eq!(catalog.by_element(Element::Dragon).count(), 0);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = CardCatalog::from_json_str("[]").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_duplicate_rejected() {
        let json = r#"[
            {"name": "Pikachu", "hp": 35, "attack": 55, "type": "Electric", "pokedexNumber": 25},
            {"name": "Pikachu", "hp": 35, "attack": 55, "type": "Electric", "pokedexNumber": 25}
        ]"#;
        let err = CardCatalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCard(25)));
    }

    #[test]
    fn test_unknown_element_rejected() {
        let json = r#"[{"name": "Missingno", "hp": 33, "attack": 136, "type": "Bird", "pokedexNumber": 0}]"#;
        let err = CardCatalog::from_json_str(json).unwrap_err();
        match err {
            CatalogError::UnknownElement {
                pokedex_number,
                element,
            } => {
                assert_eq!(pokedex_number, 0);
                assert_eq!(element, "Bird");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = CardCatalog::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = CardCatalog::load("/definitely/not/here/pokemon.json").unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[test]
    fn test_image_url_fallback() {
        let catalog = CardCatalog::from_json_str(CARDS).unwrap();
        assert_eq!(
            catalog.get(4).unwrap().image_url(),
            format!("{}/4.png", ARTWORK_BASE_URL)
        );

        let json = r#"[{"name": "Eevee", "hp": 55, "attack": 55, "type": "Normal", "pokedexNumber": 133, "imgUrl": "eevee.png"}]"#;
        let catalog = CardCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.get(133).unwrap().image_url(), "eevee.png");
    }

    #[test]
    fn test_card_serializes_with_type_key() {
        let catalog = CardCatalog::from_json_str(CARDS).unwrap();
        let value = serde_json::to_value(catalog.get(1).unwrap()).unwrap();
        assert_eq!(value["type"], "Grass");
        assert_eq!(value["pokedexNumber"], 1);
        assert!(value.get("imgUrl").is_none());
    }

    #[test]
    fn test_card_deserializes_like_card_list() {
        let json = r#"{"name": "Squirtle", "hp": 44, "attack": 48, "type": "water", "pokedexNumber": 7}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.element, Element::Water);

        let catalog = CardCatalog::from_json_str(CARDS).unwrap();
        assert_eq!(&card, catalog.get(7).unwrap());

        let bad = r#"{"name": "Missingno", "hp": 33, "attack": 136, "type": "Bird", "pokedexNumber": 0}"#;
        assert!(serde_json::from_str::<Card>(bad).is_err());
    }

    #[test]
    fn test_to_fighter() {
        let catalog = CardCatalog::from_json_str(CARDS).unwrap();
        let fighter = catalog.get(4).unwrap().to_fighter();
        assert_eq!(fighter.name, "Charmander");
        assert_eq!(fighter.element, Element::Fire);
        assert_eq!(fighter.attack, 52);
        assert_eq!(fighter.hp_current, 39);
    }
}
