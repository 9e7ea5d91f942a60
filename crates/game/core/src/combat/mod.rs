//! Combat resolution.
//!
//! Pure functions for turning a strike between two fighters into damage.
//! The engine supplies the random roll, so everything here is deterministic.
//!
//! # Core Functions
//!
//! - `calculate_damage`: base + archetype bonus - armor reduction, floored at 1
//! - `apply_damage`: HP reduction (clamped to 0)
//! - `resolve_strike`: draw-free strike resolution against a live defender

pub mod damage;
pub mod result;

pub use damage::{MAX_ROLL, MIN_DAMAGE, apply_damage, calculate_damage};
pub use result::{StrikeResult, resolve_strike};
