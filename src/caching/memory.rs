//! In-memory 세션 저장소
//!
//! 프로세스가 재시작되면 모든 세션이 사라집니다.
//! 만료된 세션은 다음 `save` 때 한꺼번에 정리됩니다.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crate::caching::SessionStore;
use crate::domain::models::user_profile::UserProfile;
use crate::errors::{AppError, AppResult};

struct Entry {
    profile: UserProfile,
    expires_at: DateTime<Utc>,
}

#[derive(Default)]
pub struct MemorySessionStore {
    data: Mutex<HashMap<String, Entry>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, HashMap<String, Entry>>> {
        self.data
            .lock()
            .map_err(|_| AppError::SessionError("session map lock poisoned".to_string()))
    }
}

/// `now + ttl`. 표현 범위를 넘으면 가장 먼 시각으로 고정합니다.
fn expiry(now: DateTime<Utc>, ttl: Duration) -> DateTime<Utc> {
    chrono::Duration::from_std(ttl)
        .ok()
        .and_then(|ttl| now.checked_add_signed(ttl))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn save(&self, session_key: &str, profile: &UserProfile, ttl: Duration) -> AppResult<()> {
        let now = Utc::now();
        let expires_at = expiry(now, ttl);

        let mut data = self.lock()?;
        data.retain(|_, entry| entry.expires_at > now);
        data.insert(
            session_key.to_string(),
            Entry {
                profile: profile.clone(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn load(&self, session_key: &str) -> AppResult<Option<UserProfile>> {
        let mut data = self.lock()?;

        match data.get(session_key) {
            Some(entry) if entry.expires_at > Utc::now() => Ok(Some(entry.profile.clone())),
            Some(_) => {
                data.remove(session_key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, session_key: &str) -> AppResult<()> {
        self.lock()?.remove(session_key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;
    use crate::domain::dto::oauth_response::TokenResponse;

    const HOUR: Duration = Duration::from_secs(3600);

    fn profile(token: &str) -> UserProfile {
        UserProfile::project(&Map::new(), &TokenResponse::new(token).with_expires(3600))
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let store = MemorySessionStore::new();
        store.save("s1", &profile("tok1"), HOUR).await.unwrap();

        let loaded = store.load("s1").await.unwrap().unwrap();
        assert_eq!(loaded.access_token, "tok1");
    }

    #[tokio::test]
    async fn test_load_missing() {
        let store = MemorySessionStore::new();
        assert!(store.load("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_token() {
        let store = MemorySessionStore::new();
        store.save("s1", &profile("tok1"), HOUR).await.unwrap();

        let token = store.load_token("s1").await.unwrap().unwrap();
        assert_eq!(token, TokenResponse::new("tok1").with_expires(3600));
    }

    #[tokio::test]
    async fn test_remove() {
        let store = MemorySessionStore::new();
        store.save("s1", &profile("tok"), HOUR).await.unwrap();
        store.remove("s1").await.unwrap();

        assert!(store.load("s1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_overwrite() {
        let store = MemorySessionStore::new();
        store.save("s1", &profile("first"), HOUR).await.unwrap();
        store.save("s1", &profile("second"), HOUR).await.unwrap();

        assert_eq!(store.load("s1").await.unwrap().unwrap().access_token, "second");
    }

    #[tokio::test]
    async fn test_expired_session_is_gone() {
        let store = MemorySessionStore::new();
        store.save("old", &profile("tok"), Duration::ZERO).await.unwrap();
        store.save("new", &profile("tok"), HOUR).await.unwrap();

        assert!(store.load("old").await.unwrap().is_none());
        assert!(store.load("new").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_save_evicts_expired_sessions() {
        let store = MemorySessionStore::new();
        for i in 0..1000 {
            store.save(&format!("abandoned-{}", i), &profile("tok"), Duration::ZERO).await.unwrap();
        }
        store.save("live", &profile("tok"), HOUR).await.unwrap();

        assert_eq!(store.data.lock().unwrap().len(), 1);
        assert!(store.load("live").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_huge_ttl_does_not_overflow() {
        let store = MemorySessionStore::new();
        store.save("s1", &profile("tok"), Duration::from_secs(u64::MAX)).await.unwrap();

        assert!(store.load("s1").await.unwrap().is_some());
    }
}
