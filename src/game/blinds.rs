//! Blind、回合類型與遊戲階段定義

use std::fmt;

use serde::{Deserialize, Serialize};

/// 遊戲階段
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Idle,
    InRound,
    Shop,
    End(GameEnd),
}

/// 遊戲結束狀態
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEnd {
    Win,
    Lose,
    Overflow,
}

/// `check_end_conditions` 的結果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndCondition {
    Overflow,
    Win,
    Lose,
}

impl From<EndCondition> for GameEnd {
    fn from(condition: EndCondition) -> Self {
        match condition {
            EndCondition::Overflow => GameEnd::Overflow,
            EndCondition::Win => GameEnd::Win,
            EndCondition::Lose => GameEnd::Lose,
        }
    }
}

/// Blind 類型
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlindType {
    Small,
    Big,
    Boss,
}

impl BlindType {
    pub fn next(&self) -> Option<BlindType> {
        match self {
            BlindType::Small => Some(BlindType::Big),
            BlindType::Big => Some(BlindType::Boss),
            BlindType::Boss => None, // Boss 之後進入下一個 Ante
        }
    }
}

/// 回合類型（Hard 回合分數 x1.5）
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundType {
    #[default]
    Normal,
    Hard,
}

/// 目標分數；溢位後為 `Unbounded`，該回合永遠無法達成
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetChips {
    Finite(u64),
    Unbounded,
}

impl TargetChips {
    pub fn is_met_by(&self, score: i64) -> bool {
        match self {
            TargetChips::Finite(target) => score >= 0 && score as u64 >= *target,
            TargetChips::Unbounded => false,
        }
    }

    pub fn finite(&self) -> Option<u64> {
        match self {
            TargetChips::Finite(target) => Some(*target),
            TargetChips::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, TargetChips::Unbounded)
    }
}

impl fmt::Display for TargetChips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetChips::Finite(target) => write!(f, "{}", target),
            TargetChips::Unbounded => write!(f, "∞"),
        }
    }
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blind_cycle() {
        assert_eq!(BlindType::Small.next(), Some(BlindType::Big));
        assert_eq!(BlindType::Big.next(), Some(BlindType::Boss));
        assert_eq!(BlindType::Boss.next(), None);
    }

    #[test]
    fn test_target_chips() {
        assert!(TargetChips::Finite(100).is_met_by(100));
        assert!(!TargetChips::Finite(100).is_met_by(99));
        assert!(!TargetChips::Finite(0).is_met_by(-1));
        assert!(!TargetChips::Unbounded.is_met_by(i64::MAX));
        assert_eq!(TargetChips::Finite(300).finite(), Some(300));
        assert_eq!(TargetChips::Unbounded.to_string(), "∞");
    }

    #[test]
    fn test_end_condition_to_game_end() {
        assert_eq!(GameEnd::from(EndCondition::Lose), GameEnd::Lose);
        assert_eq!(GameEnd::from(EndCondition::Overflow), GameEnd::Overflow);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&BlindType::Boss).unwrap(), "\"boss\"");
        assert_eq!(serde_json::to_string(&RoundType::Hard).unwrap(), "\"hard\"");
    }
}
