//! 服務層模組
//!
//! 計分引擎、Ante/Blind 進度狀態機、遊戲流程控制、出牌建議與 Session 管理

pub mod scoring;
pub mod progression;
pub mod state;
pub mod suggestion;
pub mod registry;

pub use scoring::{calculate_hand_score, ScoreBreakdown, ScoringOptions};
pub use progression::{Progression, ProgressionSnapshot, Round, RoundRestrictions};
pub use state::{GameSession, NextBlind, PlayOutcome};
pub use suggestion::{suggest_best_play, Suggestion};
pub use registry::{SessionId, SessionRegistry};
