//! 像素撲克 Roguelike 遊戲核心
//!
//! - `game`: 卡牌、牌組、牌型判定、Blind 與設定等純定義
//! - `service`: 計分引擎、Ante/Blind 進度狀態機、遊戲流程控制與 Session 管理
//! - `error`: 錯誤類型

pub mod error;
pub mod game;
pub mod service;

pub use error::{ConfigError, GameError};
pub use game::{
    evaluate_all, evaluate_hand, standard_deck, standard_deck_with_jokers, BlindType, Card,
    CardFace, CardId, CardTable, Deck, EndCondition, EvaluatedHand, GameConfig, GameEnd, HandId,
    RoundType, Stage, Suit, TargetChips,
};
pub use service::{
    calculate_hand_score, suggest_best_play, GameSession, NextBlind, PlayOutcome, Progression,
    ProgressionSnapshot, ScoreBreakdown, ScoringOptions, SessionId, SessionRegistry, Suggestion,
};
