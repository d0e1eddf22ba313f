//! # Disqus OAuth 2.0 인증 서비스
//!
//! 토큰 교환과 사용자 정보 조회를 묶어 로그인 흐름을 완성합니다.
//!
//! ## OAuth 2.0 Authorization Code Flow
//!
//! ```text
//! ┌──────────┐            ┌──────────────┐                  ┌──────────┐
//! │ Browser  │            │  우리 서버    │                  │  Disqus  │
//! └──────────┘            └──────────────┘                  └──────────┘
//!      │ 1. GET /login           │                                │
//!      ├────────────────────────►│                                │
//!      │ 2. 302 authorize URL    │                                │
//!      │◄────────────────────────┤                                │
//!      │ 3. 사용자 동의                                            │
//!      ├─────────────────────────────────────────────────────────►│
//!      │ 4. GET /login?code=xxx  │                                │
//!      ├────────────────────────►│ 5. POST access_token           │
//!      │                         ├───────────────────────────────►│
//!      │                         │ 6. GET /users/details.json     │
//!      │                         ├───────────────────────────────►│
//!      │ 7. 세션 쿠키 + 302 next  │                                │
//!      │◄────────────────────────┤                                │
//! ```
//!
//! 5번과 6번은 순차적으로 실행되며 6번은 5번에서 받은 토큰만 사용합니다.

use std::sync::Arc;
use serde_json::Value;
use crate::domain::models::credentials::Credentials;
use crate::domain::models::user_profile::UserProfile;
use crate::errors::{ApiError, AuthError};
use crate::http::HttpTransport;
use crate::services::auth::token_exchanger::TokenExchanger;
use crate::services::disqus::api_client::ApiClient;
use crate::utils::query::{QueryArgs, url_concat};

/// Disqus 엔드포인트 묶음
#[derive(Debug, Clone)]
pub struct DisqusEndpoints {
    pub authorize_uri: String,
    pub token_uri: String,
    pub api_base: String,
    pub scope: String,
}

impl DisqusEndpoints {
    /// 환경 변수 설정을 읽어 생성합니다.
    pub fn from_env() -> Self {
        use crate::config::DisqusOAuthConfig;

        Self {
            authorize_uri: DisqusOAuthConfig::authorize_uri(),
            token_uri: DisqusOAuthConfig::token_uri(),
            api_base: DisqusOAuthConfig::api_base(),
            scope: DisqusOAuthConfig::scope(),
        }
    }
}

impl Default for DisqusEndpoints {
    fn default() -> Self {
        use crate::config::{DEFAULT_API_BASE, DEFAULT_AUTHORIZE_URI, DEFAULT_SCOPE, DEFAULT_TOKEN_URI};

        Self {
            authorize_uri: DEFAULT_AUTHORIZE_URI.to_string(),
            token_uri: DEFAULT_TOKEN_URI.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            scope: DEFAULT_SCOPE.to_string(),
        }
    }
}

pub struct DisqusAuthService {
    exchanger: TokenExchanger,
    api_client: ApiClient,
    credentials: Credentials,
    authorize_uri: String,
    scope: String,
}

impl DisqusAuthService {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        credentials: Credentials,
        endpoints: DisqusEndpoints,
    ) -> Self {
        Self {
            exchanger: TokenExchanger::new(transport.clone(), endpoints.token_uri),
            api_client: ApiClient::new(transport, endpoints.api_base),
            credentials,
            authorize_uri: endpoints.authorize_uri,
            scope: endpoints.scope,
        }
    }

    pub fn client_id(&self) -> &str {
        &self.credentials.client_id
    }

    pub fn api_client(&self) -> &ApiClient {
        &self.api_client
    }

    /// 사용자를 보낼 Disqus 동의 페이지 URL
    pub fn get_login_url(&self, redirect_uri: &str) -> String {
        let args = QueryArgs::new()
            .with("client_id", self.credentials.client_id.as_str())
            .with("redirect_uri", redirect_uri)
            .with("response_type", "code")
            .with("scope", self.scope.as_str());

        url_concat(&self.authorize_uri, &args.encode())
    }

    /// Authorization code 로 로그인을 완료하고 사용자 프로필을 반환합니다.
    ///
    /// `redirect_uri`는 동의 페이지로 보낼 때 사용한 값과 같아야 합니다.
    pub async fn authenticate_with_code(
        &self,
        redirect_uri: &str,
        code: &str,
    ) -> Result<UserProfile, AuthError> {
        let token = self.exchanger.exchange(redirect_uri, &self.credentials, code).await?;
        let profile = self.api_client.get_current_user(&token, self.client_id()).await?;

        log::info!("Disqus 사용자 로그인: {}", profile.username().unwrap_or("<unknown>"));
        Ok(profile)
    }

    /// 세션 토큰으로 사용자 게시글 목록을 조회합니다. `api_key`는 client id.
    pub async fn list_posts(&self, access_token: &str) -> Result<Value, ApiError> {
        self.api_client.list_posts(access_token, self.client_id()).await
    }
}
