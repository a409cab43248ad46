//! 遊戲流程狀態
//!
//! 每個 `GameSession` 擁有自己的牌組與進度狀態機，
//! Session 之間不共用任何可變狀態。

use std::collections::HashSet;

use tracing::{debug, info};

use super::progression::Progression;
use super::suggestion::{suggest_best_play, Suggestion};
use crate::error::GameError;
use crate::game::{Card, Deck, GameConfig, GameEnd, Stage, TargetChips, MAX_PLAY_SIZE};

/// 出牌結果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// 達到目標，進入商店
    Cleared { round_score: i64, cash_awarded: i64 },
    /// 未達目標，發新手牌重試
    Retry { round_score: i64, hands_left: u32 },
    /// 遊戲結束
    Ended(GameEnd),
}

/// 離開商店後的結果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextBlind {
    /// 下一個 Blind 已開始；`run_won` 表示剛通過最終 Ante、進入無盡模式
    Started { run_won: bool },
    /// 目標分數溢位，遊戲結束
    Ended(GameEnd),
}

pub struct GameSession {
    config: GameConfig,
    cards: Vec<Card>,
    deck: Deck,
    progression: Progression,

    // 當前 Blind 狀態
    hand: Vec<Card>,
    hands_left: u32,
    discard_actions: u32,
    cards_discarded: u32,

    cash: i64,
    stage: Stage,
}

impl GameSession {
    pub fn new(config: GameConfig, cards: &[Card], seed: u64) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            deck: Deck::new(cards, seed),
            progression: Progression::new(config.clone()),
            cards: cards.to_vec(),
            hand: Vec::new(),
            hands_left: config.hands_per_blind,
            discard_actions: 0,
            cards_discarded: 0,
            cash: config.starting_cash,
            stage: Stage::Idle,
            config,
        })
    }

    /// 開新遊戲：重置進度、收回所有卡牌並開始第一個 Blind
    pub fn start_new_game(&mut self) -> Stage {
        self.progression.reset();
        self.hand.clear();
        self.deck.reset_deck(Some(&self.cards));
        self.cash = self.config.starting_cash;
        info!(cards = self.cards.len(), cash = self.cash, "new game started");
        self.start_blind()
    }

    fn start_blind(&mut self) -> Stage {
        let target = self.progression.target_chips();
        if target.is_unbounded() {
            self.stage = Stage::End(GameEnd::Overflow);
            info!(ante = self.progression.ante(), "blind target overflowed, run halted");
            return self.stage;
        }

        self.progression
            .start_round(self.config.default_round_type, target);
        self.hands_left = self.config.hands_per_blind;
        self.discard_actions = 0;
        self.cards_discarded = 0;
        self.hand = self.deck.draw_cards(self.config.starting_hand_size);
        self.stage = Stage::InRound;
        self.stage
    }

    fn require_stage(&self, expected: Stage) -> Result<(), GameError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(GameError::InvalidStage {
                expected,
                actual: self.stage,
            })
        }
    }

    /// 所有手牌放回棄牌堆並重新洗牌
    fn recycle_cards(&mut self) {
        let hand = std::mem::take(&mut self.hand);
        self.deck.discard_cards(&hand);
        self.deck.reset_deck(None);
    }

    /// 每 Blind 可棄牌次數（回合限制優先）
    pub fn discard_limit(&self) -> u32 {
        self.progression
            .current_round()
            .and_then(|r| r.restrictions.max_discards)
            .unwrap_or(self.config.discards_per_blind)
    }

    /// 棄掉指定索引的手牌並補牌，回傳新抽到的牌
    pub fn discard(&mut self, indices: &[usize]) -> Result<Vec<Card>, GameError> {
        self.require_stage(Stage::InRound)?;
        if indices.is_empty() {
            return Err(GameError::EmptySelection);
        }
        let limit = self.discard_limit();
        if self.discard_actions >= limit {
            return Err(GameError::DiscardLimitReached { limit });
        }

        let mut seen = HashSet::with_capacity(indices.len());
        for &index in indices {
            if index >= self.hand.len() {
                return Err(GameError::InvalidCardIndex {
                    index,
                    hand_size: self.hand.len(),
                });
            }
            if !seen.insert(index) {
                return Err(GameError::DuplicateCardIndex { index });
            }
        }

        // 由後往前移除，保持其餘手牌順序
        let mut sorted = indices.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        let mut discarded: Vec<Card> = sorted.into_iter().map(|i| self.hand.remove(i)).collect();
        discarded.reverse();

        self.deck.discard_cards(&discarded);
        let drawn = self.deck.draw_cards(discarded.len());
        self.hand.extend_from_slice(&drawn);

        self.discard_actions += 1;
        self.cards_discarded += discarded.len() as u32;
        debug!(
            discarded = discarded.len(),
            drawn = drawn.len(),
            discards_left = limit - self.discard_actions,
            "cards discarded"
        );
        Ok(drawn)
    }

    /// 以目前手牌計分
    pub fn play_hand(&mut self) -> Result<PlayOutcome, GameError> {
        self.require_stage(Stage::InRound)?;
        let round_score = self
            .progression
            .calculate_score(&self.hand, self.cards_discarded)?;
        let target = self
            .progression
            .current_round()
            .map(|r| r.target)
            .unwrap_or(TargetChips::Unbounded);

        if target.is_met_by(round_score) {
            let cash_awarded = target
                .finite()
                .map(|t| (t as f64 * self.config.cash_bonus_rate).floor() as i64)
                .unwrap_or(0);
            self.cash += cash_awarded;
            self.progression.end_round();
            self.stage = Stage::Shop;
            info!(round_score, %target, cash_awarded, cash = self.cash, "blind cleared");
            return Ok(PlayOutcome::Cleared {
                round_score,
                cash_awarded,
            });
        }

        self.hands_left = self.hands_left.saturating_sub(1);
        match self
            .progression
            .check_end_conditions(round_score, self.hands_left)
        {
            Some(condition) => {
                self.progression.end_round();
                let end = GameEnd::from(condition);
                self.stage = Stage::End(end);
                info!(?end, round_score, %target, "run ended");
                Ok(PlayOutcome::Ended(end))
            }
            None => {
                let hand_size = self.hand.len().max(self.config.starting_hand_size);
                let old_hand = std::mem::take(&mut self.hand);
                self.deck.discard_cards(&old_hand);
                self.hand = self.deck.draw_cards(hand_size);
                Ok(PlayOutcome::Retry {
                    round_score,
                    hands_left: self.hands_left,
                })
            }
        }
    }

    /// 離開商店，進入下一個 Blind（可能進入下一個 Ante 或無盡模式）
    pub fn leave_shop(&mut self) -> Result<NextBlind, GameError> {
        self.require_stage(Stage::Shop)?;
        let was_won = self.progression.is_won();
        self.progression.advance_blind();
        self.recycle_cards();

        match self.start_blind() {
            Stage::End(end) => Ok(NextBlind::Ended(end)),
            _ => Ok(NextBlind::Started {
                run_won: !was_won && self.progression.is_won(),
            }),
        }
    }

    /// 目前手牌的最佳出牌建議
    pub fn suggestion(&self) -> Option<Suggestion> {
        suggest_best_play(&self.hand, MAX_PLAY_SIZE)
    }

    // ------------------------------------------------------------------------
    // 存取
    // ------------------------------------------------------------------------

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn cash(&self) -> i64 {
        self.cash
    }

    pub fn hands_left(&self) -> u32 {
        self.hands_left
    }

    pub fn discards_left(&self) -> u32 {
        self.discard_limit().saturating_sub(self.discard_actions)
    }

    pub fn cards_discarded(&self) -> u32 {
        self.cards_discarded
    }

    /// 當前回合目標分數
    pub fn target_chips(&self) -> Option<TargetChips> {
        self.progression.current_round().map(|r| r.target)
    }

    /// 所有卡牌數量（手牌 + 抽牌堆 + 棄牌堆）
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.deck.remaining() + self.deck.discarded()
    }
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{standard_deck, CardId, HandId};

    fn session(seed: u64) -> GameSession {
        GameSession::new(GameConfig::default(), &standard_deck(), seed).unwrap()
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = session(1);
        assert_eq!(session.stage(), Stage::Idle);
        assert!(session.hand().is_empty());
        assert_eq!(session.card_count(), 52);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig {
            hands_per_blind: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            GameSession::new(config, &standard_deck(), 1),
            Err(GameError::Config(_))
        ));
    }

    #[test]
    fn test_start_new_game_deals_starting_hand() {
        let mut session = session(1);
        assert_eq!(session.start_new_game(), Stage::InRound);
        assert_eq!(session.hand().len(), 5);
        assert_eq!(session.deck().remaining(), 47);
        assert_eq!(session.hands_left(), 4);
        assert_eq!(session.discards_left(), 3);
        assert_eq!(session.cash(), 4);
        assert_eq!(session.target_chips(), Some(TargetChips::Finite(300)));
    }

    #[test]
    fn test_discard_replaces_cards() {
        let mut session = session(2);
        session.start_new_game();
        let before: Vec<Card> = session.hand().to_vec();

        let drawn = session.discard(&[0, 2]).unwrap();
        assert_eq!(drawn.len(), 2);
        assert_eq!(session.hand().len(), 5);
        assert_eq!(session.cards_discarded(), 2);
        assert_eq!(session.discards_left(), 2);
        assert_eq!(session.deck().discarded(), 2);

        // 未棄的牌保持原順序
        assert_eq!(&session.hand()[..3], &[before[1], before[3], before[4]]);
        assert!(!session.hand().contains(&before[0]));
        assert!(!session.hand().contains(&before[2]));
        assert_eq!(session.card_count(), 52);
    }

    #[test]
    fn test_discard_validation() {
        let mut session = session(3);
        assert!(matches!(
            session.discard(&[0]),
            Err(GameError::InvalidStage { expected: Stage::InRound, actual: Stage::Idle })
        ));

        session.start_new_game();
        assert!(matches!(session.discard(&[]), Err(GameError::EmptySelection)));
        assert!(matches!(
            session.discard(&[5]),
            Err(GameError::InvalidCardIndex { index: 5, hand_size: 5 })
        ));
        assert!(matches!(
            session.discard(&[1, 1]),
            Err(GameError::DuplicateCardIndex { index: 1 })
        ));
        // 失敗的棄牌不消耗次數
        assert_eq!(session.discards_left(), 3);
    }

    #[test]
    fn test_discard_limit() {
        let mut session = session(4);
        session.start_new_game();
        for _ in 0..3 {
            session.discard(&[0]).unwrap();
        }
        assert!(matches!(
            session.discard(&[0]),
            Err(GameError::DiscardLimitReached { limit: 3 })
        ));
    }

    #[test]
    fn test_cards_tracked_by_identity() {
        let mut session = session(5);
        session.start_new_game();
        let hand: Vec<CardId> = session.hand().iter().map(|c| c.id).collect();
        let unique: HashSet<CardId> = hand.iter().copied().collect();
        assert_eq!(unique.len(), hand.len());
        for card in session.hand() {
            assert!(!session.deck().draw_pile().contains(card));
        }
    }

    #[test]
    fn test_play_requires_round() {
        let mut session = session(6);
        assert!(matches!(
            session.play_hand(),
            Err(GameError::InvalidStage { .. })
        ));
    }

    #[test]
    fn test_suggestion_uses_current_hand() {
        let mut session = session(7);
        assert!(session.suggestion().is_none());
        session.start_new_game();
        if let Some(suggestion) = session.suggestion() {
            assert_ne!(suggestion.hand.id, HandId::HighCard);
            assert!(suggestion.indices.iter().all(|&i| i < session.hand().len()));
        }
    }
}
