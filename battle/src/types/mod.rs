//! Domain types for the battle rules

mod element;

pub use element::{Element, UnknownElement};
