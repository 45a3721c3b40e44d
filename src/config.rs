//! Game tuning. Defaults reproduce the classic Kupu rules.

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct GameConfig {
    /// Columns and rows of the grid.
    pub grid_size: usize,
    pub starting_time_secs: u32,
    pub tick_interval_ms: u32,
    /// Delay between consuming a word and splicing its cells out, so the
    /// consumption can be animated.
    pub removal_delay_ms: u32,
    pub bonus_time_secs: u32,
    /// Score that earns the first time bonus.
    pub first_bonus_score: u32,
    /// Cost of the first bonus; each bonus raises it by `bonus_cost_step`.
    pub bonus_cost_start: u32,
    pub bonus_cost_step: u32,
    /// Tick/tock cues sound while this many seconds or fewer remain.
    pub low_time_secs: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            starting_time_secs: 180,
            tick_interval_ms: 1000,
            removal_delay_ms: 100,
            bonus_time_secs: 60,
            first_bonus_score: 50,
            bonus_cost_start: 50,
            bonus_cost_step: 10,
            low_time_secs: 10,
        }
    }
}

impl GameConfig {
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, crate::KupuError> {
        serde_json::from_str(json).map_err(|source| crate::KupuError::Json {
            what: "game config",
            source,
        })
    }
}
