/// Combat timing constants and tunable parameters.
///
/// All durations are milliseconds measured against the instant passed to
/// the engine's tick.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Approach → Strike.
    pub approach_ms: u64,
    /// Strike → Recover.
    pub strike_ms: u64,
    /// AI pause before its Approach begins.
    pub ai_pause_ms: u64,
    /// Duration of the screen-shake request raised on every strike.
    pub shake_ms: u64,
    /// How long hosts show the round banner after a match starts.
    pub fight_banner_ms: u64,
}

impl CombatConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_APPROACH_MS: u64 = 400;
    pub const DEFAULT_STRIKE_MS: u64 = 200;
    pub const DEFAULT_AI_PAUSE_MS: u64 = 600;
    pub const DEFAULT_SHAKE_MS: u64 = 200;
    pub const DEFAULT_FIGHT_BANNER_MS: u64 = 1500;

    pub fn new() -> Self {
        Self {
            approach_ms: Self::DEFAULT_APPROACH_MS,
            strike_ms: Self::DEFAULT_STRIKE_MS,
            ai_pause_ms: Self::DEFAULT_AI_PAUSE_MS,
            shake_ms: Self::DEFAULT_SHAKE_MS,
            fight_banner_ms: Self::DEFAULT_FIGHT_BANNER_MS,
        }
    }

    /// Length of one side's action window, from Approach start to Recover.
    pub fn action_window_ms(&self) -> u64 {
        self.approach_ms + self.strike_ms
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract() {
        let config = CombatConfig::default();
        assert_eq!(config.approach_ms, 400);
        assert_eq!(config.strike_ms, 200);
        assert_eq!(config.ai_pause_ms, 600);
        assert_eq!(config.shake_ms, 200);
        assert_eq!(config.action_window_ms(), 600);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_keeps_defaults() {
        let config: CombatConfig = serde_json::from_str(r#"{ "approach_ms": 250 }"#).unwrap();
        assert_eq!(config.approach_ms, 250);
        assert_eq!(config.strike_ms, CombatConfig::DEFAULT_STRIKE_MS);
    }
}
