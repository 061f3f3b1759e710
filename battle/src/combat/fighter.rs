//! Fighter state and attack resolution

use thiserror::Error;

use crate::rules::{calculate_damage_u32, effectiveness, Effectiveness};
use crate::types::Element;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombatError {
    #[error("{0} is knocked out and cannot attack")]
    AttackerKnockedOut(String),

    #[error("{0} is already knocked out")]
    DefenderKnockedOut(String),
}

/// A card in play, with its remaining hit points
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    pub name: String,

    pub element: Element,

    /// Base attack stat
    pub attack: u32,

    pub hp_max: u32,

    pub hp_current: u32,
}

impl Fighter {
    /// Create a fighter at full HP
    pub fn new(name: impl Into<String>, element: Element, attack: u32, hp: u32) -> Self {
        Self {
            name: name.into(),
            element,
            attack,
            hp_max: hp,
            hp_current: hp,
        }
    }

    pub fn is_knocked_out(&self) -> bool {
        self.hp_current == 0
    }

    /// Get HP as percentage (0-100)
    pub fn hp_percent(&self) -> u32 {
        if self.hp_max == 0 {
            return 0;
        }
        let percent = (u64::from(self.hp_current) * 100) / u64::from(self.hp_max);
        // hp_current is public and may exceed hp_max
        percent.min(100) as u32
    }

    /// Remove HP, returns the damage actually applied
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.hp_current);
        self.hp_current -= applied;
        applied
    }

    /// Restore HP to the maximum
    pub fn heal_full(&mut self) {
        self.hp_current = self.hp_max;
    }
}

/// Result of one attack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    /// Damage rolled by the rules (may exceed the defender's remaining HP)
    pub damage: u32,

    pub effectiveness: Effectiveness,

    /// Whether the defender was knocked out by this attack
    pub knocked_out: bool,
}

/// Resolve one attack from `attacker` against `defender`
pub fn resolve_attack(
    attacker: &Fighter,
    defender: &mut Fighter,
) -> Result<AttackOutcome, CombatError> {
    if attacker.is_knocked_out() {
        return Err(CombatError::AttackerKnockedOut(attacker.name.clone()));
    }
    if defender.is_knocked_out() {
        return Err(CombatError::DefenderKnockedOut(defender.name.clone()));
    }

    let damage = calculate_damage_u32(attacker.attack, attacker.element, defender.element);
    defender.take_damage(damage);

    let outcome = AttackOutcome {
        damage,
        effectiveness: effectiveness(attacker.element, defender.element),
        knocked_out: defender.is_knocked_out(),
    };

    tracing::debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        damage,
        effectiveness = %outcome.effectiveness,
        hp_left = defender.hp_current,
        "attack resolved"
    );

    Ok(outcome)
}
