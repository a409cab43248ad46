//! 牌組：抽牌堆 + 棄牌堆
//!
//! 抽牌不足時的策略：先將棄牌堆洗回抽牌堆再繼續抽；
//! 若合併後仍不足，只回傳剩餘的牌（不會報錯）。

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use super::cards::Card;

#[derive(Clone, Debug)]
pub struct Deck {
    draw_pile: Vec<Card>,
    discard_pile: Vec<Card>,
    rng: StdRng,
}

impl Deck {
    /// 複製輸入卡牌並立即洗牌
    pub fn new(cards: &[Card], seed: u64) -> Self {
        Self::with_rng(cards, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(cards: &[Card], rng: StdRng) -> Self {
        let mut deck = Self {
            draw_pile: cards.to_vec(),
            discard_pile: Vec::new(),
            rng,
        };
        deck.shuffle();
        deck
    }

    /// Fisher-Yates 均勻洗牌
    pub fn shuffle(&mut self) {
        self.draw_pile.shuffle(&mut self.rng);
    }

    /// 從抽牌堆頂端依序抽出 `count` 張
    pub fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        if count > self.draw_pile.len() && !self.discard_pile.is_empty() {
            self.recycle_discards();
        }

        let take = count.min(self.draw_pile.len());
        if take < count {
            debug!(requested = count, drawn = take, "short draw");
        }
        self.draw_pile.drain(0..take).collect()
    }

    /// 放入棄牌堆（不驗證是否由本牌組抽出）
    pub fn discard_cards(&mut self, cards: &[Card]) {
        self.discard_pile.extend_from_slice(cards);
    }

    /// 重置牌組
    ///
    /// - `Some(cards)`: 以新卡牌取代抽牌堆
    /// - `None`: 棄牌堆併回抽牌堆
    ///
    /// 兩種情況都會清空棄牌堆並重新洗牌。
    pub fn reset_deck(&mut self, new_cards: Option<&[Card]>) {
        match new_cards {
            Some(cards) => self.draw_pile = cards.to_vec(),
            None => self.draw_pile.append(&mut self.discard_pile),
        }
        self.discard_pile.clear();
        self.shuffle();
    }

    fn recycle_discards(&mut self) {
        debug!(
            draw_pile = self.draw_pile.len(),
            discard_pile = self.discard_pile.len(),
            "reshuffling discard pile into draw pile"
        );
        // 洗入的牌放在現有抽牌堆之後，剩餘的牌仍先抽出
        let mut recycled = std::mem::take(&mut self.discard_pile);
        recycled.shuffle(&mut self.rng);
        self.draw_pile.append(&mut recycled);
    }

    /// 目前抽牌堆（依抽牌順序）
    pub fn draw_pile(&self) -> &[Card] {
        &self.draw_pile
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    pub fn remaining(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn discarded(&self) -> usize {
        self.discard_pile.len()
    }
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::cards::{standard_deck, CardId};
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn ids(cards: &[Card]) -> HashSet<CardId> {
        cards.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_new_deck_is_shuffled_copy() {
        let cards = standard_deck();
        let deck = Deck::new(&cards, 42);
        assert_eq!(deck.remaining(), 52);
        assert_eq!(ids(deck.draw_pile()), ids(&cards));
        assert_ne!(deck.draw_pile(), cards.as_slice());
    }

    #[test]
    fn test_same_seed_same_order() {
        let cards = standard_deck();
        let a = Deck::new(&cards, 7);
        let b = Deck::new(&cards, 7);
        assert_eq!(a.draw_pile(), b.draw_pile());
    }

    #[test]
    fn test_draw_takes_from_top_in_order() {
        let cards = standard_deck();
        let mut deck = Deck::new(&cards, 1);
        let top: Vec<Card> = deck.draw_pile()[..5].to_vec();
        let drawn = deck.draw_cards(5);
        assert_eq!(drawn, top);
        assert_eq!(deck.remaining(), 47);
        for card in &drawn {
            assert!(!deck.draw_pile().contains(card));
        }
    }

    #[test]
    fn test_short_draw_without_discards() {
        let cards = standard_deck();
        let mut deck = Deck::new(&cards[..3], 1);
        let drawn = deck.draw_cards(5);
        assert_eq!(drawn.len(), 3);
        assert_eq!(deck.remaining(), 0);
        assert!(deck.draw_cards(2).is_empty());
    }

    #[test]
    fn test_draw_reshuffles_discards_when_short() {
        let cards = standard_deck();
        let mut deck = Deck::new(&cards[..6], 3);
        let first = deck.draw_cards(4);
        deck.discard_cards(&first);
        assert_eq!(deck.remaining(), 2);

        let remaining_before: Vec<Card> = deck.draw_pile().to_vec();
        let drawn = deck.draw_cards(5);
        assert_eq!(drawn.len(), 5);
        // 原抽牌堆剩餘的牌先被抽出
        assert_eq!(&drawn[..2], remaining_before.as_slice());
        assert_eq!(deck.discarded(), 0);
        assert_eq!(deck.remaining(), 1);
    }

    #[test]
    fn test_reset_merges_discards() {
        let cards = standard_deck();
        let mut deck = Deck::new(&cards, 9);
        let hand = deck.draw_cards(5);
        deck.discard_cards(&hand);
        assert_eq!(deck.remaining() + deck.discarded(), 52);

        deck.reset_deck(None);
        assert_eq!(deck.remaining(), 52);
        assert_eq!(deck.discarded(), 0);
        assert_eq!(ids(deck.draw_pile()), ids(&cards));
    }

    #[test]
    fn test_reset_with_new_cards() {
        let cards = standard_deck();
        let mut deck = Deck::new(&cards, 9);
        let hand = deck.draw_cards(2);
        deck.discard_cards(&hand);

        deck.reset_deck(Some(&cards[..10]));
        assert_eq!(deck.remaining(), 10);
        assert_eq!(deck.discarded(), 0);
        assert_eq!(ids(deck.draw_pile()), ids(&cards[..10]));
    }

    #[test]
    fn test_discard_does_not_validate_origin() {
        let cards = standard_deck();
        let mut deck = Deck::new(&cards[..5], 2);
        deck.discard_cards(&cards[40..42]);
        assert_eq!(deck.discarded(), 2);
    }

    proptest! {
        #[test]
        fn prop_draw_plus_remaining_is_total(size in 0usize..=52, n in 0usize..70, seed in any::<u64>()) {
            let cards = standard_deck();
            let mut deck = Deck::new(&cards[..size], seed);
            let drawn = deck.draw_cards(n);
            prop_assert_eq!(drawn.len() + deck.remaining(), size);
            prop_assert_eq!(drawn.len(), n.min(size));
        }

        #[test]
        fn prop_reset_preserves_pile_total(draws in prop::collection::vec(0usize..8, 0..10), seed in any::<u64>()) {
            let cards = standard_deck();
            let mut deck = Deck::new(&cards, seed);
            for n in draws {
                let hand = deck.draw_cards(n);
                deck.discard_cards(&hand);
            }
            let before = deck.remaining() + deck.discarded();
            deck.reset_deck(None);
            prop_assert_eq!(deck.remaining(), before);
            prop_assert_eq!(deck.discarded(), 0);
            prop_assert_eq!(ids(deck.draw_pile()).len(), before);
        }
    }
}
