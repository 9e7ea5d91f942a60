//! Attack tactics.
//!
//! A tactic is the attack kind a fighter commits to for one turn. Tactics are
//! plain values: they carry no state, are `Copy`, and may be shared freely
//! between fighters. The controller asks a tactic for its label instead of
//! branching on the fighter's archetype, so new tactics only need a new
//! variant here.

/// Attack kind selected for a turn.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tactic {
    /// Close-quarters weapon attack.
    Melee,
    /// Bow or thrown attack.
    Ranged,
    /// Spell attack.
    Magic,
}

impl Tactic {
    /// All tactics in canonical order. The AI draws uniformly from this list.
    pub const ALL: [Tactic; 3] = [Tactic::Melee, Tactic::Ranged, Tactic::Magic];

    /// Short human label used in event broadcasts.
    pub const fn describe(&self) -> &'static str {
        match self {
            Tactic::Melee => "Melee",
            Tactic::Ranged => "Ranged",
            Tactic::Magic => "Magic",
        }
    }

    /// Tactic at `index` in [`Tactic::ALL`], wrapping out-of-range indices.
    pub const fn from_index(index: u32) -> Self {
        Self::ALL[(index as usize) % Self::ALL.len()]
    }
}
