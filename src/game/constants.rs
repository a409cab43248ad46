//! 遊戲常量定義

// ============================================================================
// 進度常量（GameConfig 預設值）
// ============================================================================

pub const BASE_TARGET_CHIPS: f64 = 300.0;  // Ante 1 Small Blind 目標分數
pub const ANTE_SCALE: f64 = 1.5;           // 每 Ante 目標倍率
pub const SMALL_BLIND_MULTIPLIER: f64 = 1.0;
pub const BIG_BLIND_MULTIPLIER: f64 = 1.5;
pub const BOSS_BLIND_MULTIPLIER: f64 = 2.0;
pub const MAX_ANTE: u32 = 8;               // 通過此 Ante 即勝利，之後進入無盡模式
pub const HANDS_PER_BLIND: u32 = 4;        // 每 Blind 出牌次數
pub const DISCARDS_PER_BLIND: u32 = 3;     // 每 Blind 棄牌次數
pub const STARTING_CASH: i64 = 4;          // 起始金幣
pub const STARTING_HAND_SIZE: usize = 5;   // 起始手牌數量
pub const CASH_BONUS_RATE: f64 = 0.1;      // 過關獎勵 = floor(目標 * 0.1)

/// 目標分數安全上限（2^53 - 1，超過即視為溢位）
pub const MAX_SAFE_TARGET: f64 = 9_007_199_254_740_991.0;

// ============================================================================
// 計分常量
// ============================================================================

pub const NO_DISCARD_BONUS: i64 = 50;          // 未棄牌獎勵
pub const EXCESS_DISCARD_PENALTY: i64 = 20;    // 棄牌過多懲罰
pub const EXCESS_DISCARD_THRESHOLD: u32 = 3;   // 棄牌數 > 3 觸發懲罰
pub const HARD_ROUND_MULT: f64 = 1.5;          // Hard 回合倍率
pub const WILD_CARD_BONUS: i64 = 20;           // 每張 Joker 加分

// ============================================================================
// 牌型判定常量
// ============================================================================

pub const MIN_STRAIGHT_FLUSH_CARDS: usize = 5;  // 順子/同花最少張數
pub const MAX_PLAY_SIZE: usize = 5;             // 建議出牌最多張數
pub const STANDARD_DECK_SIZE: usize = 52;
