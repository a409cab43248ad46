//! 牌型定義

use serde::{Deserialize, Serialize};

use super::constants::WILD_CARD_BONUS;

/// 牌型 ID
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandId {
    HighCard, // 無任何牌型，0 分
    Pair,
    TwoPair,
    ThreeKind,
    Straight,
    Flush,
    FullHouse,
    FourKind,
}

/// 牌型說明（遊戲內牌型指南）
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandGuide {
    pub id: HandId,
    pub name: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub base_score: i64,
}

impl HandId {
    /// 所有計分牌型（由低到高）
    pub fn scoring() -> &'static [HandId] {
        &[
            HandId::Pair,
            HandId::TwoPair,
            HandId::ThreeKind,
            HandId::Straight,
            HandId::Flush,
            HandId::FullHouse,
            HandId::FourKind,
        ]
    }

    /// 牌型基礎分數
    pub fn base_score(&self) -> i64 {
        match self {
            HandId::HighCard => 0,
            HandId::Pair => 100,
            HandId::TwoPair => 200,
            HandId::ThreeKind => 300,
            HandId::Straight => 400,
            HandId::Flush => 500,
            HandId::FullHouse => 600,
            HandId::FourKind => 700,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HandId::HighCard => "High Card",
            HandId::Pair => "Pair",
            HandId::TwoPair => "Two Pair",
            HandId::ThreeKind => "Three of a Kind",
            HandId::Straight => "Straight",
            HandId::Flush => "Flush",
            HandId::FullHouse => "Full House",
            HandId::FourKind => "Four of a Kind",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HandId::HighCard => "No scoring combination",
            HandId::Pair => "Two cards of the same value",
            HandId::TwoPair => "Two different pairs of cards",
            HandId::ThreeKind => "Three cards of the same value",
            HandId::Straight => "Five consecutive values",
            HandId::Flush => "Five cards of the same suit",
            HandId::FullHouse => "Three of a kind plus a pair",
            HandId::FourKind => "Four cards of the same value",
        }
    }

    fn example(&self) -> &'static str {
        match self {
            HandId::HighCard => "A♠ 9♥ 7♦ 4♣ 2♠",
            HandId::Pair => "A♠ A♥",
            HandId::TwoPair => "A♠ A♥ 2♦ 2♣",
            HandId::ThreeKind => "A♠ A♥ A♦",
            HandId::Straight => "A♠ 2♥ 3♦ 4♣ 5♠",
            HandId::Flush => "A♥ 3♥ 5♥ 7♥ 9♥",
            HandId::FullHouse => "K♠ K♥ K♦ 4♣ 4♠",
            HandId::FourKind => "9♠ 9♥ 9♦ 9♣",
        }
    }

    /// 牌型指南（所有計分牌型）
    pub fn guide() -> Vec<HandGuide> {
        Self::scoring()
            .iter()
            .map(|&id| HandGuide {
                id,
                name: id.name(),
                description: id.description(),
                example: id.example(),
                base_score: id.base_score(),
            })
            .collect()
    }
}

/// 牌型判定結果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvaluatedHand {
    pub id: HandId,
    pub description: &'static str,
    pub score: i64,
    pub wild_count: usize,
}

impl EvaluatedHand {
    /// 匹配到的牌型：基礎分 + 每張 Joker 20 分
    pub fn matched(id: HandId, wild_count: usize) -> Self {
        Self {
            id,
            description: id.description(),
            score: id.base_score() + WILD_CARD_BONUS * wild_count as i64,
            wild_count,
        }
    }

    /// 無牌型：0 分
    pub fn none() -> Self {
        Self {
            id: HandId::HighCard,
            description: HandId::HighCard.description(),
            score: 0,
            wild_count: 0,
        }
    }
}

impl Default for EvaluatedHand {
    fn default() -> Self {
        Self::none()
    }
}

// ============================================================================
// 單元測試
// ============================================================================
