//! 出牌建議
//!
//! 枚舉手牌所有子集並平行判定牌型，挑出分數最高者。

use rayon::prelude::*;

use crate::game::{evaluate_hand, Card, EvaluatedHand, HandId};

/// 建議保留/打出的手牌索引與其牌型
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    pub indices: Vec<usize>,
    pub hand: EvaluatedHand,
}

/// 在最多 `max_play` 張的子集中找出最佳牌型
///
/// 同分時偏好張數較少，其次是索引字典序較小者。
/// 沒有任何子集成牌時回傳 `None`。
pub fn suggest_best_play(held: &[Card], max_play: usize) -> Option<Suggestion> {
    let max_play = max_play.min(held.len());
    if max_play == 0 {
        return None;
    }

    subsets_up_to(held.len(), max_play)
        .into_par_iter()
        .map(|indices| {
            let cards: Vec<Card> = indices.iter().map(|&i| held[i]).collect();
            let hand = evaluate_hand(&cards);
            Suggestion { indices, hand }
        })
        .filter(|s| s.hand.id != HandId::HighCard)
        .max_by(|a, b| {
            a.hand
                .score
                .cmp(&b.hand.score)
                .then_with(|| b.indices.len().cmp(&a.indices.len()))
                .then_with(|| b.indices.cmp(&a.indices))
        })
}

/// 所有大小 1..=max_size 的索引子集（遞增排列）
fn subsets_up_to(n: usize, max_size: usize) -> Vec<Vec<usize>> {
    fn extend(
        start: usize,
        n: usize,
        max_size: usize,
        current: &mut Vec<usize>,
        out: &mut Vec<Vec<usize>>,
    ) {
        for i in start..n {
            current.push(i);
            out.push(current.clone());
            if current.len() < max_size {
                extend(i + 1, n, max_size, current, out);
            }
            current.pop();
        }
    }

    let mut out = Vec::new();
    extend(0, n, max_size, &mut Vec::with_capacity(max_size), &mut out);
    out
}
