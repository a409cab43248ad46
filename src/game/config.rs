//! 遊戲設定
//!
//! 預設值取自 `constants`，可由 JSON 覆寫（缺少的欄位沿用預設）。

use serde::{Deserialize, Serialize};

use super::blinds::{BlindType, RoundType};
use super::constants::{
    ANTE_SCALE, BASE_TARGET_CHIPS, BIG_BLIND_MULTIPLIER, BOSS_BLIND_MULTIPLIER, CASH_BONUS_RATE,
    DISCARDS_PER_BLIND, HANDS_PER_BLIND, MAX_ANTE, MAX_SAFE_TARGET, SMALL_BLIND_MULTIPLIER,
    STARTING_CASH, STARTING_HAND_SIZE,
};
use crate::error::ConfigError;

/// 各 Blind 的目標分數倍率
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlindMultipliers {
    pub small: f64,
    pub big: f64,
    pub boss: f64,
}

impl Default for BlindMultipliers {
    fn default() -> Self {
        Self {
            small: SMALL_BLIND_MULTIPLIER,
            big: BIG_BLIND_MULTIPLIER,
            boss: BOSS_BLIND_MULTIPLIER,
        }
    }
}

impl BlindMultipliers {
    pub fn get(&self, blind: BlindType) -> f64 {
        match blind {
            BlindType::Small => self.small,
            BlindType::Big => self.big,
            BlindType::Boss => self.boss,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub base_target_chips: f64,
    pub ante_scale: f64,
    pub blind_multipliers: BlindMultipliers,
    pub max_ante: u32,
    pub hands_per_blind: u32,
    /// 每 Blind 可棄牌次數
    pub discards_per_blind: u32,
    pub starting_cash: i64,
    pub starting_hand_size: usize,
    pub max_safe_target: f64,
    pub cash_bonus_rate: f64,
    pub default_round_type: RoundType,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            base_target_chips: BASE_TARGET_CHIPS,
            ante_scale: ANTE_SCALE,
            blind_multipliers: BlindMultipliers::default(),
            max_ante: MAX_ANTE,
            hands_per_blind: HANDS_PER_BLIND,
            discards_per_blind: DISCARDS_PER_BLIND,
            starting_cash: STARTING_CASH,
            starting_hand_size: STARTING_HAND_SIZE,
            max_safe_target: MAX_SAFE_TARGET,
            cash_bonus_rate: CASH_BONUS_RATE,
            default_round_type: RoundType::Normal,
        }
    }
}

impl GameConfig {
    /// 解析 JSON 並驗證
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Parse)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &str) -> ConfigError {
            ConfigError::Invalid {
                field,
                reason: reason.to_string(),
            }
        }

        if !self.base_target_chips.is_finite() || self.base_target_chips <= 0.0 {
            return Err(invalid("base_target_chips", "must be a positive number"));
        }
        if !self.ante_scale.is_finite() || self.ante_scale < 1.0 {
            return Err(invalid("ante_scale", "must be at least 1"));
        }
        let m = &self.blind_multipliers;
        for (field, value) in [
            ("blind_multipliers.small", m.small),
            ("blind_multipliers.big", m.big),
            ("blind_multipliers.boss", m.boss),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, "must be a positive number"));
            }
        }
        if self.max_ante == 0 {
            return Err(invalid("max_ante", "must be at least 1"));
        }
        if self.hands_per_blind == 0 {
            return Err(invalid("hands_per_blind", "must be at least 1"));
        }
        if self.starting_hand_size == 0 {
            return Err(invalid("starting_hand_size", "must be at least 1"));
        }
        if !self.max_safe_target.is_finite() || self.max_safe_target <= 0.0 {
            return Err(invalid("max_safe_target", "must be a positive finite number"));
        }
        if !self.cash_bonus_rate.is_finite() || self.cash_bonus_rate < 0.0 {
            return Err(invalid("cash_bonus_rate", "must not be negative"));
        }
        Ok(())
    }
}

// ============================================================================
// 單元測試
// ============================================================================
