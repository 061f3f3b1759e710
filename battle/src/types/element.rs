//! Card element types

/// Card element types (18 fixed categories)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Element {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Element {
    /// Number of element types
    pub const COUNT: usize = 18;

    /// All 18 element types, in discriminant order
    pub const ALL: [Element; Element::COUNT] = [
        Element::Normal,
        Element::Fire,
        Element::Water,
        Element::Electric,
        Element::Grass,
        Element::Ice,
        Element::Fighting,
        Element::Poison,
        Element::Ground,
        Element::Flying,
        Element::Psychic,
        Element::Bug,
        Element::Rock,
        Element::Ghost,
        Element::Dragon,
        Element::Dark,
        Element::Steel,
        Element::Fairy,
    ];

    /// Get all element types as a slice
    pub fn all() -> &'static [Element] {
        &Self::ALL
    }

    /// Discriminant of this element, usable as a table index
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Element for a raw discriminant, `None` when out of range
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Parse from a card data string (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(Element::Normal),
            "fire" => Some(Element::Fire),
            "water" => Some(Element::Water),
            "electric" => Some(Element::Electric),
            "grass" => Some(Element::Grass),
            "ice" => Some(Element::Ice),
            "fighting" => Some(Element::Fighting),
            "poison" => Some(Element::Poison),
            "ground" => Some(Element::Ground),
            "flying" => Some(Element::Flying),
            "psychic" => Some(Element::Psychic),
            "bug" => Some(Element::Bug),
            "rock" => Some(Element::Rock),
            "ghost" => Some(Element::Ghost),
            "dragon" => Some(Element::Dragon),
            "dark" => Some(Element::Dark),
            "steel" => Some(Element::Steel),
            "fairy" => Some(Element::Fairy),
            _ => None,
        }
    }

    /// Convert to canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Normal => "Normal",
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Electric => "Electric",
            Element::Grass => "Grass",
            Element::Ice => "Ice",
            Element::Fighting => "Fighting",
            Element::Poison => "Poison",
            Element::Ground => "Ground",
            Element::Flying => "Flying",
            Element::Psychic => "Psychic",
            Element::Bug => "Bug",
            Element::Rock => "Rock",
            Element::Ghost => "Ghost",
            Element::Dragon => "Dragon",
            Element::Dark => "Dark",
            Element::Steel => "Steel",
            Element::Fairy => "Fairy",
        }
    }

    /// The element this one is weak against
    pub fn weakness(self) -> Element {
        crate::rules::WEAKNESS_TABLE[self.index()]
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Element {
    type Err = UnknownElement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::from_name(s).ok_or_else(|| UnknownElement(s.to_string()))
    }
}

/// Returned when a string does not name one of the 18 elements
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown element type: {0}")]
pub struct UnknownElement(pub String);
