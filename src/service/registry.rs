//! Session 管理
//!
//! 以 `DashMap` 保存多個互相獨立的 `GameSession`，可跨執行緒同時操作。

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use tracing::info;

use super::state::GameSession;
use crate::error::GameError;
use crate::game::{Card, GameConfig};

pub type SessionId = u64;

#[derive(Default)]
pub struct SessionRegistry {
    sessions: DashMap<SessionId, GameSession>,
    next_id: AtomicU64,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 建立新 Session 並開始遊戲
    pub fn create(
        &self,
        config: GameConfig,
        cards: &[Card],
        seed: u64,
    ) -> Result<SessionId, GameError> {
        let mut session = GameSession::new(config, cards, seed)?;
        session.start_new_game();

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.sessions.insert(id, session);
        info!(session = id, seed, "session created");
        Ok(id)
    }

    /// 以可變借用操作指定 Session
    ///
    /// `f` 執行期間持有該 Session 所在分片的寫鎖：
    /// `f` 內不可再呼叫本 registry 的任何方法（`contains`、`remove`、`with_session` 等），
    /// 否則同一分片會死鎖。需要時請先回傳結果，再於閉包外操作 registry。
    pub fn with_session<R>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut GameSession) -> R,
    ) -> Result<R, GameError> {
        let mut entry = self
            .sessions
            .get_mut(&id)
            .ok_or(GameError::UnknownSession(id))?;
        Ok(f(entry.value_mut()))
    }

    pub fn remove(&self, id: SessionId) -> Option<GameSession> {
        let removed = self.sessions.remove(&id).map(|(_, session)| session);
        if removed.is_some() {
            info!(session = id, "session removed");
        }
        removed
    }

    pub fn contains(&self, id: SessionId) -> bool {
        self.sessions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{standard_deck, Stage};
    use rayon::prelude::*;

    #[test]
    fn test_create_and_remove() {
        let registry = SessionRegistry::new();
        assert!(registry.is_empty());

        let a = registry.create(GameConfig::default(), &standard_deck(), 1).unwrap();
        let b = registry.create(GameConfig::default(), &standard_deck(), 2).unwrap();
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(a));

        let removed = registry.remove(a).unwrap();
        assert_eq!(removed.stage(), Stage::InRound);
        assert!(!registry.contains(a));
        assert!(registry.remove(a).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_session() {
        let registry = SessionRegistry::new();
        let result = registry.with_session(42, |s| s.cash());
        assert!(matches!(result, Err(GameError::UnknownSession(42))));
    }

    #[test]
    fn test_invalid_config_not_registered() {
        let registry = SessionRegistry::new();
        let config = GameConfig {
            max_ante: 0,
            ..GameConfig::default()
        };
        assert!(registry.create(config, &standard_deck(), 1).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_usable_after_closure_returns() {
        let registry = SessionRegistry::new();
        let id = registry.create(GameConfig::default(), &standard_deck(), 5).unwrap();

        // 閉包只回傳資料，registry 操作在鎖釋放後進行
        let stage = registry.with_session(id, |s| s.stage()).unwrap();
        assert_eq!(stage, Stage::InRound);
        assert!(registry.contains(id));
        let hand_len = registry.with_session(id, |s| s.hand().len()).unwrap();
        assert_eq!(hand_len, 5);
        assert!(registry.remove(id).is_some());
    }

    #[test]
    fn test_sessions_are_independent() {
        let registry = SessionRegistry::new();
        let a = registry.create(GameConfig::default(), &standard_deck(), 9).unwrap();
        let b = registry.create(GameConfig::default(), &standard_deck(), 9).unwrap();

        registry.with_session(a, |s| s.discard(&[0, 1])).unwrap().unwrap();

        let a_left = registry.with_session(a, |s| s.discards_left()).unwrap();
        let b_left = registry.with_session(b, |s| s.discards_left()).unwrap();
        assert_eq!(a_left, 2);
        assert_eq!(b_left, 3);
    }

    #[test]
    fn test_parallel_sessions() {
        let registry = SessionRegistry::new();
        let ids: Vec<SessionId> = (0..8)
            .map(|seed| registry.create(GameConfig::default(), &standard_deck(), seed).unwrap())
            .collect();

        ids.par_iter().for_each(|&id| {
            registry
                .with_session(id, |s| {
                    while s.discards_left() > 0 {
                        s.discard(&[0]).unwrap();
                    }
                })
                .unwrap();
        });

        for id in ids {
            let (left, total) = registry
                .with_session(id, |s| (s.discards_left(), s.card_count()))
                .unwrap();
            assert_eq!(left, 0);
            assert_eq!(total, 52);
        }
    }
}
