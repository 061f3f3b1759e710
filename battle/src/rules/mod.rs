//! Damage resolution rules
//!
//! Every element has exactly one weakness. An attack matching the defender's
//! weakness deals double damage, and every attack deals at least one point.

mod damage;
mod weakness;

pub use damage::{
    calculate_damage, calculate_damage_u32, damage_multiplier, effectiveness, Effectiveness,
    MIN_DAMAGE, NORMAL_MULTIPLIER, SUPER_EFFECTIVE_MULTIPLIER,
};
pub use weakness::{lookup_weakness, lookup_weakness_by_index, WEAKNESS_TABLE};
