//! Element matchup helpers for decision making

use crate::rules::lookup_weakness;
use crate::types::Element;

/// Check if `defender` takes double damage from `attacker`
pub fn is_weak_to(defender: Element, attacker: Element) -> bool {
    lookup_weakness(defender) == Some(attacker)
}

/// Check if defender is weak to any of the attacking elements
pub fn is_weak_to_any(defender: Element, attackers: &[Element]) -> bool {
    attackers.iter().any(|a| is_weak_to(defender, *a))
}

/// Get all defending elements that `attacker` hits super effectively
pub fn super_effective_targets(attacker: Element) -> Vec<Element> {
    Element::all()
        .iter()
        .copied()
        .filter(|d| is_weak_to(*d, attacker))
        .collect()
}

/// First candidate that is super effective against the defender
pub fn best_attacker(defender: Element, candidates: &[Element]) -> Option<Element> {
    candidates.iter().copied().find(|a| is_weak_to(defender, *a))
}
