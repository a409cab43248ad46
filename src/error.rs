//! 錯誤類型
//!
//! 抽牌不足與目標分數溢位屬於正常遊戲狀態，不在此列。

use thiserror::Error;

use crate::game::Stage;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("No active round to calculate score for")]
    NoActiveRound,
    #[error("Invalid stage: expected {expected:?}, found {actual:?}")]
    InvalidStage { expected: Stage, actual: Stage },
    #[error("Card index {index} out of range for hand of {hand_size}")]
    InvalidCardIndex { index: usize, hand_size: usize },
    #[error("Card index {index} selected more than once")]
    DuplicateCardIndex { index: usize },
    #[error("Discard limit of {limit} reached for this blind")]
    DiscardLimitReached { limit: u32 },
    #[error("No cards selected")]
    EmptySelection,
    #[error("Unknown session {0}")]
    UnknownSession(u64),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Snapshot error: {0}")]
    Snapshot(#[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("Invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
