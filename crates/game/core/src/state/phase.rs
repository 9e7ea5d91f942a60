use crate::env::Timestamp;

/// Top-level match phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchPhase {
    /// Archetype selection.
    #[default]
    Menu,
    /// Fighters alternate turns.
    Fight,
    /// One fighter is defeated.
    End,
}

/// Whose turn it is. Only meaningful during [`MatchPhase::Fight`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    #[default]
    Player,
    Ai,
}

impl Turn {
    pub const fn other(&self) -> Turn {
        match self {
            Turn::Player => Turn::Ai,
            Turn::Ai => Turn::Player,
        }
    }

    /// Side that acts on this turn. The player always fights on the left.
    pub const fn side(&self) -> Side {
        match self {
            Turn::Player => Side::Left,
            Turn::Ai => Side::Right,
        }
    }
}

/// Arena side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const fn opponent(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Per-side animation phase.
///
/// ```text
/// Idle ──pick──▶ Approach ──400ms──▶ Strike ──200ms──▶ Recover ──▶ Idle
///   └──AI turn──▶ Pause ──600ms──▶ Approach
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SidePhase {
    #[default]
    Idle,
    /// AI-only thinking pause before its Approach.
    Pause,
    Approach,
    Strike,
    Recover,
}

impl SidePhase {
    pub const fn is_idle(&self) -> bool {
        matches!(self, SidePhase::Idle)
    }
}

/// Phase of one side plus the instant it was entered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideState {
    pub phase: SidePhase,
    pub started_at: Timestamp,
}

impl SideState {
    pub const fn idle(at: Timestamp) -> Self {
        Self {
            phase: SidePhase::Idle,
            started_at: at,
        }
    }

    pub fn enter(&mut self, phase: SidePhase, at: Timestamp) {
        self.phase = phase;
        self.started_at = at;
    }

    /// Instant at which a phase of `duration` ms entered at `started_at` ends.
    pub const fn deadline(&self, duration: u64) -> Timestamp {
        self.started_at.add_millis(duration)
    }
}

/// Renderer-facing request to shake the screen after a strike.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShakeRequest {
    pub started_at: Timestamp,
    pub duration_ms: u64,
}

impl ShakeRequest {
    pub const fn is_active(&self, now: Timestamp) -> bool {
        now.0 >= self.started_at.0 && !now.has_elapsed(self.started_at, self.duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_alternates_sides() {
        assert_eq!(Turn::Player.side(), Side::Left);
        assert_eq!(Turn::Player.other(), Turn::Ai);
        assert_eq!(Turn::Ai.side(), Side::Right);
        assert_eq!(Side::Right.opponent(), Side::Left);
    }

    #[test]
    fn shake_window_is_half_open() {
        let shake = ShakeRequest {
            started_at: Timestamp(400),
            duration_ms: 200,
        };
        assert!(!shake.is_active(Timestamp(399)));
        assert!(shake.is_active(Timestamp(400)));
        assert!(shake.is_active(Timestamp(599)));
        assert!(!shake.is_active(Timestamp(600)));
    }

    #[test]
    fn side_deadline() {
        let mut side = SideState::idle(Timestamp::ZERO);
        side.enter(SidePhase::Approach, Timestamp(1_000));
        assert_eq!(side.deadline(400), Timestamp(1_400));
    }
}
