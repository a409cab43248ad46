//! 遊戲核心模組
//!
//! 包含遊戲的純定義（無流程狀態）：
//! - `constants`: 遊戲常量
//! - `config`: 遊戲設定 (`GameConfig`)
//! - `cards`: 卡牌與身分定義
//! - `deck`: 抽牌堆/棄牌堆
//! - `hand_types`: 牌型定義
//! - `scoring`: 牌型判定
//! - `blinds`: Blind、回合類型與遊戲階段

pub mod constants;
pub mod config;
pub mod cards;
pub mod deck;
pub mod hand_types;
pub mod scoring;
pub mod blinds;

pub use constants::*;
pub use config::{BlindMultipliers, GameConfig};
pub use cards::{standard_deck, standard_deck_with_jokers, Card, CardFace, CardId, CardTable, Suit};
pub use deck::Deck;
pub use hand_types::{EvaluatedHand, HandGuide, HandId};
pub use scoring::{evaluate_all, evaluate_hand};
pub use blinds::{BlindType, EndCondition, GameEnd, RoundType, Stage, TargetChips};
