use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Live-session cap used when `MAX_SESSIONS` is not set.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("session limit of {limit} reached; delete an existing session and retry")]
pub struct StoreFull {
    pub limit: usize,
}

/// In-memory, per-process session registry shared across handlers.
///
/// Each session is owned by exactly one map entry and only touched under the
/// lock, so handlers never observe a half-applied turn. The number of live
/// sessions is capped; entries leave only through `remove`.
pub struct SessionStore<S> {
    sessions: Arc<RwLock<HashMap<Uuid, S>>>,
    max_sessions: usize,
}

impl<S> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
            max_sessions: self.max_sessions,
        }
    }
}

impl<S> Default for SessionStore<S> {
    fn default() -> Self {
        Self::with_limit(DEFAULT_MAX_SESSIONS)
    }
}

impl<S> SessionStore<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions,
        }
    }

    /// Adds a session. Fails once `max_sessions` distinct ids are live;
    /// replacing an existing id never counts against the cap.
    pub async fn insert(&self, id: Uuid, session: S) -> Result<(), StoreFull> {
        let mut sessions = self.sessions.write().await;
        if !sessions.contains_key(&id) && sessions.len() >= self.max_sessions {
            return Err(StoreFull {
                limit: self.max_sessions,
            });
        }
        sessions.insert(id, session);
        Ok(())
    }

    /// Runs `f` against the session, or returns `None` for an unknown id.
    pub async fn read<R>(&self, id: Uuid, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.sessions.read().await.get(&id).map(f)
    }

    pub async fn update<R>(&self, id: Uuid, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.sessions.write().await.get_mut(&id).map(f)
    }

    pub async fn remove(&self, id: Uuid) -> Option<S> {
        self.sessions.write().await.remove(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_read_update_remove() {
        let store: SessionStore<u32> = SessionStore::new();
        let id = Uuid::new_v4();
        store.insert(id, 1).await.unwrap();

        assert_eq!(store.read(id, |v| *v).await, Some(1));
        assert_eq!(store.update(id, |v| { *v += 1; *v }).await, Some(2));
        assert_eq!(store.remove(id).await, Some(2));
        assert_eq!(store.read(id, |v| *v).await, None);
    }

    #[tokio::test]
    async fn test_clones_share_sessions() {
        let store: SessionStore<&str> = SessionStore::new();
        let other = store.clone();
        let id = Uuid::new_v4();
        store.insert(id, "x").await.unwrap();
        assert_eq!(other.read(id, |v| *v).await, Some("x"));
    }

    #[tokio::test]
    async fn test_unknown_id_is_none() {
        let store: SessionStore<u32> = SessionStore::new();
        assert!(store.update(Uuid::new_v4(), |v| *v).await.is_none());
        assert!(store.remove(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_live_sessions_never_exceed_limit() {
        let store: SessionStore<usize> = SessionStore::with_limit(100);
        let mut rejected = 0;
        for n in 0..1_000 {
            if store.insert(Uuid::new_v4(), n).await.is_err() {
                rejected += 1;
            }
        }
        assert_eq!(rejected, 900);
        assert_eq!(store.sessions.read().await.len(), 100);
        assert_eq!(
            store.insert(Uuid::new_v4(), 0).await,
            Err(StoreFull { limit: 100 })
        );
    }

    #[tokio::test]
    async fn test_remove_frees_a_slot() {
        let store: SessionStore<u32> = SessionStore::with_limit(1);
        let first = Uuid::new_v4();
        store.insert(first, 1).await.unwrap();
        assert!(store.insert(Uuid::new_v4(), 2).await.is_err());

        store.remove(first).await;
        assert!(store.insert(Uuid::new_v4(), 3).await.is_ok());
    }

    #[tokio::test]
    async fn test_replacing_existing_id_at_limit() {
        let store: SessionStore<u32> = SessionStore::with_limit(1);
        let id = Uuid::new_v4();
        store.insert(id, 1).await.unwrap();
        store.insert(id, 2).await.unwrap();
        assert_eq!(store.read(id, |v| *v).await, Some(2));
    }
}
