//! Query helpers for battle decision making
//!
//! This module provides utilities for analyzing element matchups,
//! useful for picking which card to send against a given defender.

mod matchup;

pub use matchup::{best_attacker, is_weak_to, is_weak_to_any, super_effective_targets};
