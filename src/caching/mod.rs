//! 세션 저장소 계층 모듈
//!
//! 로그인한 사용자의 프로필(액세스 토큰 포함)을 세션 키로 보관합니다.
//! 쿠키에는 불투명한 세션 키만 담기고 토큰은 서버에만 남습니다.
//!
//! # 구현체
//!
//! - [`memory::MemorySessionStore`] - `Mutex<HashMap>` 기반. 단일 프로세스용
//! - [`redis::RedisSessionStore`] - Redis `SETEX` 기반. 여러 인스턴스가 공유
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use crate::caching::{SessionStore, new_session_key};
//!
//! let key = new_session_key();
//! store.save(&key, &profile, Duration::from_secs(3600)).await?;
//!
//! let token = store.load_token(&key).await?;
//! store.remove(&key).await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! SESSION_STORE=redis
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod memory;
pub mod redis;

use std::time::Duration;
use async_trait::async_trait;
use crate::domain::dto::oauth_response::TokenResponse;
use crate::domain::models::user_profile::UserProfile;
use crate::errors::AppResult;

pub use self::memory::MemorySessionStore;
pub use self::redis::RedisSessionStore;

/// 세션 키 → 사용자 프로필 저장소
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// 프로필을 저장합니다. 같은 키가 있으면 덮어씁니다.
    async fn save(&self, session_key: &str, profile: &UserProfile, ttl: Duration) -> AppResult<()>;

    /// 만료되지 않은 프로필을 반환합니다.
    async fn load(&self, session_key: &str) -> AppResult<Option<UserProfile>>;

    async fn remove(&self, session_key: &str) -> AppResult<()>;

    /// 세션에 저장된 토큰 정보
    async fn load_token(&self, session_key: &str) -> AppResult<Option<TokenResponse>> {
        Ok(self.load(session_key).await?.map(|profile| profile.token()))
    }
}

/// 쿠키에 담을 새 세션 키 (UUID v4)
pub fn new_session_key() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
