//! Ante/Blind 進度狀態機
//!
//! 持有 Ante、Blind、目標分數與勝負/無盡/溢位旗標，
//! 並管理單一回合的分數累計。

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::scoring::{calculate_hand_score, ScoreBreakdown, ScoringOptions};
use crate::error::GameError;
use crate::game::{BlindType, Card, EndCondition, GameConfig, RoundType, TargetChips};

/// 回合限制
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundRestrictions {
    /// 覆寫每 Blind 棄牌次數
    pub max_discards: Option<u32>,
}

/// 進行中的回合
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Round {
    pub round_type: RoundType,
    pub target: TargetChips,
    pub restrictions: RoundRestrictions,
}

#[derive(Clone, Debug)]
pub struct Progression {
    config: GameConfig,
    ante: u32,
    blind: BlindType,
    endless: bool,
    overflowed: bool,
    win: bool,
    lose: bool,
    total_score: i64,
    current_round: Option<Round>,
    round_score: i64,
    last_breakdown: Option<ScoreBreakdown>,
}

impl Progression {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            ante: 1,
            blind: BlindType::Small,
            endless: false,
            overflowed: false,
            win: false,
            lose: false,
            total_score: 0,
            current_round: None,
            round_score: 0,
            last_breakdown: None,
        }
    }

    /// 回到新遊戲狀態（清除溢位等所有旗標）
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
    }

    // ------------------------------------------------------------------------
    // 回合
    // ------------------------------------------------------------------------

    pub fn start_round(&mut self, round_type: RoundType, target: TargetChips) {
        self.start_round_with_restrictions(round_type, target, RoundRestrictions::default());
    }

    pub fn start_round_with_restrictions(
        &mut self,
        round_type: RoundType,
        target: TargetChips,
        restrictions: RoundRestrictions,
    ) {
        self.current_round = Some(Round {
            round_type,
            target,
            restrictions,
        });
        self.round_score = 0;
        info!(
            ?round_type,
            %target,
            ante = self.ante,
            blind = ?self.blind,
            "round started"
        );
    }

    /// 計分並累加到本回合分數，回傳累計分數
    pub fn calculate_score(&mut self, hand: &[Card], discards: u32) -> Result<i64, GameError> {
        let round = self.current_round.ok_or(GameError::NoActiveRound)?;
        let breakdown = calculate_hand_score(hand, ScoringOptions::new(discards, round.round_type));
        self.round_score += breakdown.total;
        self.last_breakdown = Some(breakdown);
        Ok(self.round_score)
    }

    /// 結束回合：本回合分數併入總分，回傳本回合分數
    pub fn end_round(&mut self) -> i64 {
        let round_score = self.round_score;
        self.total_score += round_score;
        info!(
            round_type = ?self.current_round.map(|r| r.round_type),
            round_score,
            total_score = self.total_score,
            "round ended"
        );
        self.current_round = None;
        self.round_score = 0;
        round_score
    }

    // ------------------------------------------------------------------------
    // 進度
    // ------------------------------------------------------------------------

    /// 目標分數 = floor(base * scale^(ante-1) * blind 倍率)
    ///
    /// 非有限值或超過安全上限時設定 `overflowed`，之後一律回傳 `Unbounded`。
    pub fn target_chips(&mut self) -> TargetChips {
        if self.overflowed {
            return TargetChips::Unbounded;
        }

        let scale_pow = self
            .config
            .ante_scale
            .powf(f64::from(self.ante.saturating_sub(1)));
        let raw = self.config.base_target_chips
            * scale_pow
            * self.config.blind_multipliers.get(self.blind);

        if !raw.is_finite() || raw > self.config.max_safe_target {
            warn!(ante = self.ante, blind = ?self.blind, raw, "target chips overflowed");
            self.overflowed = true;
            return TargetChips::Unbounded;
        }

        TargetChips::Finite(raw.floor().max(0.0) as u64)
    }

    /// Small → Big → Boss → 下一個 Ante
    pub fn advance_blind(&mut self) {
        match self.blind.next() {
            Some(next) => self.blind = next,
            None => self.advance_ante(),
        }
    }

    /// 超過 `max_ante` 時勝利並進入無盡模式，Ante 持續增加
    pub fn advance_ante(&mut self) {
        self.ante = self.ante.saturating_add(1);
        self.blind = BlindType::Small;

        if self.ante > self.config.max_ante && !self.win {
            self.win = true;
            self.endless = true;
            info!(ante = self.ante, "run won, entering endless mode");
        } else {
            info!(ante = self.ante, endless = self.endless, "ante advanced");
        }
    }

    /// 結束條件（優先序 Overflow > Win > Lose）
    ///
    /// 出牌次數用盡且未達目標時：已勝利的遊戲結算為 Win，否則為 Lose。
    pub fn check_end_conditions(
        &mut self,
        current_score: i64,
        hands_left: u32,
    ) -> Option<EndCondition> {
        let target = self.target_chips();
        if self.overflowed {
            return Some(EndCondition::Overflow);
        }

        if hands_left == 0 && !target.is_met_by(current_score) {
            if self.win {
                return Some(EndCondition::Win);
            }
            self.lose = true;
            return Some(EndCondition::Lose);
        }

        None
    }

    // ------------------------------------------------------------------------
    // 存取
    // ------------------------------------------------------------------------

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ante(&self) -> u32 {
        self.ante
    }

    pub fn blind(&self) -> BlindType {
        self.blind
    }

    pub fn is_endless(&self) -> bool {
        self.endless
    }

    pub fn is_overflowed(&self) -> bool {
        self.overflowed
    }

    pub fn is_won(&self) -> bool {
        self.win
    }

    pub fn is_lost(&self) -> bool {
        self.lose
    }

    pub fn total_score(&self) -> i64 {
        self.total_score
    }

    pub fn round_score(&self) -> i64 {
        self.round_score
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.current_round.as_ref()
    }

    pub fn last_breakdown(&self) -> Option<&ScoreBreakdown> {
        self.last_breakdown.as_ref()
    }

    // ------------------------------------------------------------------------
    // 存檔
    // ------------------------------------------------------------------------

    pub fn snapshot(&self) -> ProgressionSnapshot {
        ProgressionSnapshot {
            config: self.config.clone(),
            ante: self.ante,
            blind: self.blind,
            endless: self.endless,
            overflowed: self.overflowed,
            win: self.win,
            lose: self.lose,
            total_score: self.total_score,
        }
    }

    /// 從存檔還原（不含進行中的回合），存檔內的設定須通過驗證
    pub fn restore(snapshot: ProgressionSnapshot) -> Result<Self, GameError> {
        snapshot.config.validate()?;
        Ok(Self {
            config: snapshot.config,
            ante: snapshot.ante.max(1),
            blind: snapshot.blind,
            endless: snapshot.endless,
            overflowed: snapshot.overflowed,
            win: snapshot.win,
            lose: snapshot.lose,
            total_score: snapshot.total_score,
            current_round: None,
            round_score: 0,
            last_breakdown: None,
        })
    }
}

/// 進度存檔（純資料）
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgressionSnapshot {
    pub config: GameConfig,
    pub ante: u32,
    pub blind: BlindType,
    pub endless: bool,
    pub overflowed: bool,
    pub win: bool,
    pub lose: bool,
    pub total_score: i64,
}

impl ProgressionSnapshot {
    pub fn to_json(&self) -> Result<String, GameError> {
        serde_json::to_string(self).map_err(GameError::Snapshot)
    }

    pub fn from_json(json: &str) -> Result<Self, GameError> {
        serde_json::from_str(json).map_err(GameError::Snapshot)
    }
}

// ============================================================================
// 單元測試
// ============================================================================
