//! 卡牌定義
//!
//! 每張卡牌帶有唯一的 `CardId`，相等比較以身分為準：
//! 兩張花色點數相同的牌不會被視為同一張。

use super::constants::STANDARD_DECK_SIZE;

pub const ACE: u8 = 14;
pub const MIN_VALUE: u8 = 2;

/// 花色
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub fn all() -> &'static [Suit] {
        &[Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades]
    }

    pub fn to_index(&self) -> usize {
        match self {
            Suit::Hearts => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

/// 牌面：一般牌或百搭 Joker
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardFace {
    Standard { suit: Suit, value: u8 }, // value: 2..=14 (Ace = 14)
    Joker,
}

/// 卡牌在牌表中的身分
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: CardId,
    pub face: CardFace,
}

impl Card {
    pub fn is_wild(&self) -> bool {
        matches!(self.face, CardFace::Joker)
    }

    /// Joker 沒有花色
    pub fn suit(&self) -> Option<Suit> {
        match self.face {
            CardFace::Standard { suit, .. } => Some(suit),
            CardFace::Joker => None,
        }
    }

    /// Joker 沒有點數
    pub fn value(&self) -> Option<u8> {
        match self.face {
            CardFace::Standard { value, .. } => Some(value),
            CardFace::Joker => None,
        }
    }

    /// 顯示用標籤，例如 `10♥`、`A♠`、`JOKER`
    pub fn label(&self) -> String {
        match self.face {
            CardFace::Standard { suit, value } => {
                let rank = match value {
                    11 => "J".to_string(),
                    12 => "Q".to_string(),
                    13 => "K".to_string(),
                    ACE => "A".to_string(),
                    n => n.to_string(),
                };
                format!("{}{}", rank, suit.symbol())
            }
            CardFace::Joker => "JOKER".to_string(),
        }
    }
}

/// 發放唯一 `CardId` 的牌表
///
/// 同一牌表發出的卡牌 id 互不重複。
#[derive(Clone, Debug, Default)]
pub struct CardTable {
    next_id: u32,
}

impl CardTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 從指定 id 開始發號（用於擴充既有牌組）
    pub fn starting_at(next_id: u32) -> Self {
        Self { next_id }
    }

    fn mint(&mut self, face: CardFace) -> Card {
        let id = CardId(self.next_id);
        self.next_id += 1;
        Card { id, face }
    }

    /// 建立一般牌；點數會被限制在 2..=14
    pub fn card(&mut self, suit: Suit, value: u8) -> Card {
        let value = value.clamp(MIN_VALUE, ACE);
        self.mint(CardFace::Standard { suit, value })
    }

    pub fn joker(&mut self) -> Card {
        self.mint(CardFace::Joker)
    }

    pub fn issued(&self) -> u32 {
        self.next_id
    }
}

/// 創建標準 52 張牌組（id 0..52）
pub fn standard_deck() -> Vec<Card> {
    standard_deck_with_jokers(0)
}

/// 標準 52 張牌組，末尾追加 `jokers` 張百搭牌
pub fn standard_deck_with_jokers(jokers: usize) -> Vec<Card> {
    let mut table = CardTable::new();
    let mut deck = Vec::with_capacity(STANDARD_DECK_SIZE + jokers);
    for &suit in Suit::all() {
        for value in MIN_VALUE..=ACE {
            deck.push(table.card(suit, value));
        }
    }
    for _ in 0..jokers {
        deck.push(table.joker());
    }
    deck
}

// ============================================================================
// 單元測試
// ============================================================================
