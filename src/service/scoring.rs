//! 計分服務
//!
//! 固定順序：牌型分數 → 未棄牌獎勵 → 棄牌過多懲罰 → Hard 倍率 → 取整

use tracing::debug;

use crate::game::{
    evaluate_hand, Card, HandId, RoundType, EXCESS_DISCARD_PENALTY, EXCESS_DISCARD_THRESHOLD,
    HARD_ROUND_MULT, NO_DISCARD_BONUS,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoringOptions {
    /// 本回合已棄牌張數
    pub discards: u32,
    pub round_type: RoundType,
}

impl ScoringOptions {
    pub fn new(discards: u32, round_type: RoundType) -> Self {
        Self {
            discards,
            round_type,
        }
    }
}

/// 計分明細
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreBreakdown {
    pub chips: i64,
    pub mult: f64,
    pub total: i64,
    pub best_hand: HandId,
}

/// 計算手牌分數（純函數）
pub fn calculate_hand_score(hand: &[Card], options: ScoringOptions) -> ScoreBreakdown {
    let best = evaluate_hand(hand);
    let mut chips = best.score;

    if options.discards == 0 {
        chips += NO_DISCARD_BONUS;
    }
    if options.discards > EXCESS_DISCARD_THRESHOLD {
        chips -= EXCESS_DISCARD_PENALTY;
    }

    let mut mult = 1.0;
    if options.round_type == RoundType::Hard {
        mult *= HARD_ROUND_MULT;
    }

    let total = ((chips as f64) * mult).floor().max(0.0) as i64;
    let chips = chips.max(0);

    debug!(
        best_hand = ?best.id,
        chips,
        mult,
        total,
        discards = options.discards,
        "hand scored"
    );

    ScoreBreakdown {
        chips,
        mult,
        total,
        best_hand: best.id,
    }
}

// ============================================================================
// 單元測試
// ============================================================================
