//! Damage multiplier and final damage calculation

use super::weakness::lookup_weakness;
use crate::types::Element;

/// Multiplier when the attacker matches the defender's weakness
pub const SUPER_EFFECTIVE_MULTIPLIER: f64 = 2.0;

/// Multiplier for every other matchup
pub const NORMAL_MULTIPLIER: f64 = 1.0;

/// Every attack deals at least this much damage
pub const MIN_DAMAGE: u32 = 1;

/// Outcome of an element matchup
///
/// There is no resisted or immune case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effectiveness {
    Normal,
    SuperEffective,
}

impl Effectiveness {
    /// Damage multiplier for this outcome
    pub fn multiplier(&self) -> f64 {
        match self {
            Effectiveness::Normal => NORMAL_MULTIPLIER,
            Effectiveness::SuperEffective => SUPER_EFFECTIVE_MULTIPLIER,
        }
    }

    pub fn is_super_effective(&self) -> bool {
        matches!(self, Effectiveness::SuperEffective)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Effectiveness::Normal => "normal",
            Effectiveness::SuperEffective => "super effective",
        }
    }
}

impl std::fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify an attack of `attacker` element against `defender`
pub fn effectiveness(attacker: Element, defender: Element) -> Effectiveness {
    if lookup_weakness(defender) == Some(attacker) {
        Effectiveness::SuperEffective
    } else {
        Effectiveness::Normal
    }
}

/// Damage multiplier for `attacker` hitting `defender` (2.0 or 1.0)
pub fn damage_multiplier(attacker: Element, defender: Element) -> f64 {
    effectiveness(attacker, defender).multiplier()
}

/// Final damage dealt by an attack
///
/// `floor(attack_stat * multiplier)`, never less than [`MIN_DAMAGE`].
/// Zero, negative and NaN stats deal the minimum; huge values saturate at
/// `u32::MAX`.
pub fn calculate_damage(attack_stat: f64, attacker: Element, defender: Element) -> u32 {
    let multiplier = damage_multiplier(attacker, defender);
    // float-to-int `as` saturates and maps NaN to 0
    let damage = ((attack_stat * multiplier).floor() as u32).max(MIN_DAMAGE);

    tracing::trace!(
        attack_stat,
        %attacker,
        %defender,
        multiplier,
        damage,
        "calculated damage"
    );

    damage
}

/// [`calculate_damage`] for integer attack stats
pub fn calculate_damage_u32(attack_stat: u32, attacker: Element, defender: Element) -> u32 {
    calculate_damage(f64::from(attack_stat), attacker, defender)
}
