//! Weakness chart

use crate::types::Element;

/// Weakness of each defending element, indexed by the defender's discriminant.
///
/// Each element has a single weakness. The relation is not symmetric:
/// Fire is weak to Water, but Water is weak to Electric.
///
/// Order: Normal, Fire, Water, Electric, Grass, Ice, Fighting, Poison, Ground,
///        Flying, Psychic, Bug, Rock, Ghost, Dragon, Dark, Steel, Fairy
pub static WEAKNESS_TABLE: [Element; Element::COUNT] = [
    Element::Fighting, // Normal
    Element::Water,    // Fire
    Element::Electric, // Water
    Element::Ground,   // Electric
    Element::Fire,     // Grass
    Element::Fire,     // Ice
    Element::Psychic,  // Fighting
    Element::Psychic,  // Poison
    Element::Water,    // Ground
    Element::Electric, // Flying
    Element::Dark,     // Psychic
    Element::Fire,     // Bug
    Element::Water,    // Rock
    Element::Dark,     // Ghost
    Element::Ice,      // Dragon
    Element::Fighting, // Dark
    Element::Fire,     // Steel
    Element::Poison,   // Fairy
];

/// Get the element that is super effective against `defender`
///
/// Always `Some` for a valid [`Element`]; the `Option` mirrors
/// [`lookup_weakness_by_index`] so callers can treat both the same way.
pub fn lookup_weakness(defender: Element) -> Option<Element> {
    WEAKNESS_TABLE.get(defender.index()).copied()
}

/// Weakness lookup from a raw element discriminant
///
/// Returns `None` for values outside the 18 known elements instead of failing.
pub fn lookup_weakness_by_index(defender: u8) -> Option<Element> {
    Element::from_index(defender).and_then(lookup_weakness)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_weakness() {
        assert_eq!(lookup_weakness(Element::Dragon), Some(Element::Ice));
        assert_eq!(lookup_weakness(Element::Grass), Some(Element::Fire));
        assert_eq!(lookup_weakness(Element::Water), Some(Element::Electric));
        assert_eq!(lookup_weakness(Element::Psychic), Some(Element::Dark));
        assert_eq!(lookup_weakness(Element::Fairy), Some(Element::Poison));
        assert_eq!(lookup_weakness(Element::Normal), Some(Element::Fighting));
    }

    #[test]
    fn test_table_is_total() {
        for defender in Element::all() {
            let weakness = lookup_weakness(*defender);
            assert!(weakness.is_some(), "{defender} has no weakness");
            assert_eq!(weakness, Some(defender.weakness()));
        }
    }

    #[test]
    fn test_no_element_is_weak_to_itself() {
        for defender in Element::all() {
            assert_ne!(defender.weakness(), *defender);
        }
    }

    #[test]
    fn test_relation_is_not_symmetric() {
        assert_eq!(Element::Fire.weakness(), Element::Water);
        assert_ne!(Element::Water.weakness(), Element::Fire);
    }

    #[test]
    fn test_lookup_is_deterministic() {
        for defender in Element::all() {
            assert_eq!(lookup_weakness(*defender), lookup_weakness(*defender));
        }
    }

    #[test]
    fn test_lookup_by_index() {
        assert_eq!(lookup_weakness_by_index(14), Some(Element::Ice));
        assert_eq!(lookup_weakness_by_index(0), Some(Element::Fighting));
        assert_eq!(lookup_weakness_by_index(18), None);
        assert_eq!(lookup_weakness_by_index(200), None);
    }
}
