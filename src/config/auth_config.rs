//! # Authentication Configuration Module
//!
//! Disqus OAuth 2.0 클라이언트 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export DISQUS_CLIENT_ID="your-disqus-public-key"
//! export DISQUS_CLIENT_SECRET="your-disqus-secret-key"
//! ```
//!
//! ## 선택 환경 변수
//!
//! ```bash
//! # 콜백 URL 을 고정하고 싶을 때 (미설정 시 요청 Host 기준으로 생성)
//! export DISQUS_REDIRECT_URI="http://localhost:8888/login?next=/"
//!
//! # 엔드포인트 교체 (테스트용 목 서버 등)
//! export DISQUS_AUTHORIZE_URI="https://disqus.com/api/oauth/2.0/authorize/?"
//! export DISQUS_TOKEN_URI="https://disqus.com/api/oauth/2.0/access_token/?"
//! export DISQUS_API_BASE="https://disqus.com/api/3.0"
//! export DISQUS_SCOPE="read,write"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::DisqusOAuthConfig;
//!
//! let credentials = DisqusOAuthConfig::credentials();
//! let token_uri = DisqusOAuthConfig::token_uri();
//! ```

use std::env;
use crate::domain::models::credentials::Credentials;

pub const DEFAULT_AUTHORIZE_URI: &str = "https://disqus.com/api/oauth/2.0/authorize/?";
pub const DEFAULT_TOKEN_URI: &str = "https://disqus.com/api/oauth/2.0/access_token/?";
pub const DEFAULT_API_BASE: &str = "https://disqus.com/api/3.0";
pub const DEFAULT_SCOPE: &str = "read,write";

/// 자격 증명이 설정되지 않았을 때 사용하는 자리표시 값
const PLACEHOLDER_KEY: &str = "keygoeshere";

/// Disqus OAuth 2.0 설정을 관리하는 구조체
///
/// Disqus 애플리케이션 관리 페이지(<https://disqus.com/api/applications/>)에서
/// 발급받은 키를 환경 변수로 전달합니다.
///
/// ## 보안 고려사항
///
/// - `client_secret`은 절대 클라이언트 사이드에 노출되어서는 안 됩니다
/// - 프로덕션에서는 HTTPS redirect URI만 사용하세요
pub struct DisqusOAuthConfig;

impl DisqusOAuthConfig {
    /// Disqus 공개 키 (API key 로도 사용됩니다).
    ///
    /// 설정되지 않은 경우 자리표시 값을 사용하고 경고를 남깁니다.
    pub fn client_id() -> String {
        env::var("DISQUS_CLIENT_ID").unwrap_or_else(|_| {
            log::warn!("DISQUS_CLIENT_ID not set, using placeholder key");
            PLACEHOLDER_KEY.to_string()
        })
    }

    /// Disqus 비밀 키. 로그에 출력하지 마세요.
    pub fn client_secret() -> String {
        env::var("DISQUS_CLIENT_SECRET").unwrap_or_else(|_| {
            log::warn!("DISQUS_CLIENT_SECRET not set, using placeholder key");
            PLACEHOLDER_KEY.to_string()
        })
    }

    /// 환경 변수에서 읽은 [`Credentials`]
    pub fn credentials() -> Credentials {
        Credentials::new(Self::client_id(), Self::client_secret())
    }

    /// 고정된 콜백 URL. `None` 이면 요청 정보로 생성합니다.
    pub fn redirect_uri() -> Option<String> {
        env::var("DISQUS_REDIRECT_URI").ok().filter(|v| !v.is_empty())
    }

    /// 인증(동의) 페이지 엔드포인트
    ///
    /// # 기본값
    ///
    /// `https://disqus.com/api/oauth/2.0/authorize/?`
    pub fn authorize_uri() -> String {
        env::var("DISQUS_AUTHORIZE_URI").unwrap_or_else(|_| DEFAULT_AUTHORIZE_URI.to_string())
    }

    /// 토큰 교환 엔드포인트
    ///
    /// # 기본값
    ///
    /// `https://disqus.com/api/oauth/2.0/access_token/?`
    pub fn token_uri() -> String {
        env::var("DISQUS_TOKEN_URI").unwrap_or_else(|_| DEFAULT_TOKEN_URI.to_string())
    }

    /// REST API 기본 URL. 요청 경로가 그대로 뒤에 붙습니다.
    pub fn api_base() -> String {
        env::var("DISQUS_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
    }

    pub fn scope() -> String {
        env::var("DISQUS_SCOPE").unwrap_or_else(|_| DEFAULT_SCOPE.to_string())
    }
}
