//! # Redis 세션 저장소
//!
//! 프로필을 JSON 으로 직렬화해 `session:<key>` 아래 `SETEX`로 저장합니다.
//! 만료는 Redis TTL 에 맡깁니다.
//!
//! ## 연결 관리
//!
//! Redis 연결은 멀티플렉싱을 사용하여 단일 TCP 연결에서
//! 여러 동시 요청을 처리합니다.

use std::time::Duration;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisError};
use crate::caching::SessionStore;
use crate::domain::models::user_profile::UserProfile;
use crate::errors::{AppError, AppResult, ErrorContext};

const KEY_PREFIX: &str = "session:";

#[derive(Clone)]
pub struct RedisSessionStore {
    client: Client,
}

impl RedisSessionStore {
    /// Redis 에 연결하고 `PING`으로 가용성을 확인합니다.
    pub async fn connect(redis_url: &str) -> Result<Self, RedisError> {
        let client = Client::open(redis_url)?;

        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { client })
    }
}

/// 세션 키에 대응하는 Redis 키
pub fn redis_key(session_key: &str) -> String {
    format!("{}{}", KEY_PREFIX, session_key)
}

fn store_error(e: RedisError) -> AppError {
    AppError::SessionError(format!("redis: {}", e))
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn save(&self, session_key: &str, profile: &UserProfile, ttl: Duration) -> AppResult<()> {
        let json = serde_json::to_string(profile).context("세션 직렬화 실패")?;

        let mut conn = self.client.get_multiplexed_async_connection().await.map_err(store_error)?;
        conn.set_ex::<_, _, ()>(redis_key(session_key), json, ttl.as_secs().max(1))
            .await
            .map_err(store_error)
    }

    async fn load(&self, session_key: &str) -> AppResult<Option<UserProfile>> {
        let mut conn = self.client.get_multiplexed_async_connection().await.map_err(store_error)?;
        let value: Option<String> = conn.get(redis_key(session_key)).await.map_err(store_error)?;

        match value {
            Some(json) => serde_json::from_str(&json).map(Some).map_err(|e| {
                log::warn!("세션 데이터 역직렬화 실패 ({}): {}", session_key, e);
                AppError::SessionError(format!("Deserialization failed: {}", e))
            }),
            None => Ok(None),
        }
    }

    async fn remove(&self, session_key: &str) -> AppResult<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await.map_err(store_error)?;
        conn.del::<_, ()>(redis_key(session_key)).await.map_err(store_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redis_key_prefix() {
        assert_eq!(redis_key("abc"), "session:abc");
    }

    #[test]
    fn test_store_error_maps_to_session_error() {
        let err = RedisError::from((redis::ErrorKind::TypeError, "bad value"));
        assert!(matches!(store_error(err), AppError::SessionError(_)));
    }
}
