//! Single-attack combat state
//!
//! Applies the damage rules to cards with hit points. Turn order, hands and
//! rooms belong to whatever drives the battle.

mod fighter;

pub use fighter::{resolve_attack, AttackOutcome, CombatError, Fighter};
