//! Element types and damage rules for the trading card battle game.
//!
//! This crate holds the rules every attack goes through, independent of how
//! cards are stored or how a match is driven.
//!
//! # Overview
//!
//! ```text
//! tcg-battle (elements + damage rules) ← THIS CRATE
//!        │
//!        ├─> tcg-deck (card catalog, deck validation)
//!        └─> tcg-sim (duel simulator)
//! ```
//!
//! # Main Types
//!
//! ## Rules
//! - [`Element`] - The 18 card element types
//! - [`WEAKNESS_TABLE`] - The single weakness of each element
//! - [`lookup_weakness`], [`damage_multiplier`], [`calculate_damage`] - Damage resolution
//! - [`Effectiveness`] - Normal or super effective
//!
//! ## Combat
//! - [`Fighter`] - A card in play with remaining HP
//! - [`resolve_attack`] - Apply one attack to a defender
//!
//! # Example Usage
//!
//! ```
//! use tcg_battle::{calculate_damage, damage_multiplier, lookup_weakness, Element};
//!
//! assert_eq!(lookup_weakness(Element::Dragon), Some(Element::Ice));
//! assert_eq!(damage_multiplier(Element::Dark, Element::Psychic), 2.0);
//! assert_eq!(calculate_damage(50.0, Element::Fire, Element::Grass), 100);
//! assert_eq!(calculate_damage(0.0, Element::Fire, Element::Grass), 1);
//! ```

pub mod combat;
pub mod query;
pub mod rules;
pub mod types;

// Re-export main types at crate root for convenience
pub use combat::{resolve_attack, AttackOutcome, CombatError, Fighter};
pub use rules::{
    calculate_damage, calculate_damage_u32, damage_multiplier, effectiveness, lookup_weakness,
    lookup_weakness_by_index, Effectiveness, MIN_DAMAGE, NORMAL_MULTIPLIER,
    SUPER_EFFECTIVE_MULTIPLIER, WEAKNESS_TABLE,
};
pub use types::{Element, UnknownElement};
