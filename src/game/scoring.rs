//! 牌型判定
//!
//! 各牌型獨立判定，Joker 可補足任何門檻：
//! - 對子/三條/四條/葫蘆/兩對：同點數張數 + Joker 數 ≥ 門檻
//! - 同花：忽略 Joker 花色，其餘牌同花色
//! - 順子：一般牌點數不重複，且 Joker 可填滿缺口（A 可當 1）
//!
//! 多個牌型同時成立時，一律取分數最高者。

use super::cards::{Card, ACE};
use super::constants::MIN_STRAIGHT_FLUSH_CARDS;
use super::hand_types::{EvaluatedHand, HandId};

/// 手牌統計（Joker 分開計算）
struct HandShape {
    len: usize,
    wild_count: usize,
    value_counts: [usize; 15],
    suit_counts: [usize; 4],
    /// 同點數張數，由多到少
    groups: Vec<usize>,
}

impl HandShape {
    fn from_cards(cards: &[Card]) -> Self {
        let mut value_counts = [0usize; 15];
        let mut suit_counts = [0usize; 4];
        let mut wild_count = 0;

        for card in cards {
            match (card.suit(), card.value()) {
                (Some(suit), Some(value)) => {
                    value_counts[value.min(ACE) as usize] += 1;
                    suit_counts[suit.to_index()] += 1;
                }
                _ => wild_count += 1,
            }
        }

        let mut groups: Vec<usize> = value_counts.iter().copied().filter(|&c| c > 0).collect();
        groups.sort_unstable_by(|a, b| b.cmp(a));

        Self {
            len: cards.len(),
            wild_count,
            value_counts,
            suit_counts,
            groups,
        }
    }

    /// 第 `rank` 大的同點數組張數（不存在視為 0）
    fn group(&self, rank: usize) -> usize {
        self.groups.get(rank).copied().unwrap_or(0)
    }

    /// 將第 `rank` 組補到 `size` 張所需的 Joker 數
    fn shortfall(&self, rank: usize, size: usize) -> usize {
        size.saturating_sub(self.group(rank))
    }

    fn is_pair(&self) -> bool {
        self.shortfall(0, 2) <= self.wild_count
    }

    fn is_two_pair(&self) -> bool {
        self.shortfall(0, 2) + self.shortfall(1, 2) <= self.wild_count
    }

    fn is_three_kind(&self) -> bool {
        self.shortfall(0, 3) <= self.wild_count
    }

    fn is_four_kind(&self) -> bool {
        self.shortfall(0, 4) <= self.wild_count
    }

    fn is_full_house(&self) -> bool {
        self.shortfall(0, 3) + self.shortfall(1, 2) <= self.wild_count
    }

    fn is_flush(&self) -> bool {
        if self.len < MIN_STRAIGHT_FLUSH_CARDS {
            return false;
        }
        self.suit_counts.iter().filter(|&&c| c > 0).count() <= 1
    }

    fn is_straight(&self) -> bool {
        let n = self.len;
        // 點數 1..=14 共 14 個位置
        if n < MIN_STRAIGHT_FLUSH_CARDS || n > ACE as usize {
            return false;
        }

        let values: Vec<u8> = (2..=ACE)
            .filter(|&v| self.value_counts[v as usize] > 0)
            .collect();

        // 一般牌點數不可重複
        if values.len() + self.wild_count != n {
            return false;
        }
        if values.is_empty() {
            return true;
        }

        let fits = |low: u8, high: u8| ((high - low) as usize) < n;

        let high_ace = fits(values[0], values[values.len() - 1]);
        // A-low：A 當作 1
        let low_ace = self.value_counts[ACE as usize] > 0 && {
            let top = values
                .iter()
                .copied()
                .filter(|&v| v != ACE)
                .max()
                .unwrap_or(1);
            fits(1, top)
        };

        high_ace || low_ace
    }
}

/// 回傳所有成立的牌型，依分數由高到低排序
pub fn evaluate_all(cards: &[Card]) -> Vec<EvaluatedHand> {
    if cards.is_empty() {
        return Vec::new();
    }

    let shape = HandShape::from_cards(cards);
    let detectors: [(HandId, bool); 7] = [
        (HandId::Pair, shape.is_pair()),
        (HandId::TwoPair, shape.is_two_pair()),
        (HandId::ThreeKind, shape.is_three_kind()),
        (HandId::Straight, shape.is_straight()),
        (HandId::Flush, shape.is_flush()),
        (HandId::FullHouse, shape.is_full_house()),
        (HandId::FourKind, shape.is_four_kind()),
    ];

    let mut hands: Vec<EvaluatedHand> = detectors
        .iter()
        .filter(|(_, matched)| *matched)
        .map(|&(id, _)| EvaluatedHand::matched(id, shape.wild_count))
        .collect();
    hands.sort_by(|a, b| b.score.cmp(&a.score));
    hands
}

/// 判定最佳牌型；無牌型時回傳 0 分的 `HighCard`
pub fn evaluate_hand(cards: &[Card]) -> EvaluatedHand {
    evaluate_all(cards)
        .into_iter()
        .next()
        .unwrap_or_else(EvaluatedHand::none)
}

// ============================================================================
// 單元測試
// ============================================================================
