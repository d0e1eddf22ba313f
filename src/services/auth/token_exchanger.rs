//! # Authorization Code 교환
//!
//! OAuth 2.0 authorization-code grant 를 Disqus 토큰 엔드포인트에 대해 수행합니다.
//!
//! ```text
//! POST {token_uri}
//! Content-Type: application/x-www-form-urlencoded
//!
//! redirect_uri=..&code=..&client_id=..&client_secret=..&grant_type=authorization_code
//! ```
//!
//! 교환은 정확히 한 번의 요청으로 끝나며 재시도하지 않습니다.
//! 얻은 토큰을 저장하는 것은 호출자의 몫입니다.

use std::sync::Arc;
use serde_json::Value;
use crate::domain::dto::oauth_response::TokenResponse;
use crate::domain::models::credentials::Credentials;
use crate::errors::{ApiError, AuthError};
use crate::http::{FetchRequest, HttpTransport};
use crate::utils::query::QueryArgs;

pub struct TokenExchanger {
    transport: Arc<dyn HttpTransport>,
    token_uri: String,
}

impl TokenExchanger {
    pub fn new(transport: Arc<dyn HttpTransport>, token_uri: impl Into<String>) -> Self {
        Self {
            transport,
            token_uri: token_uri.into(),
        }
    }

    /// Authorization code 를 액세스 토큰으로 교환합니다.
    ///
    /// # Errors
    ///
    /// * [`AuthError::TokenExchange`] - 전송 실패, 2xx 가 아닌 응답, JSON 이 아닌 본문
    /// * [`AuthError::MissingAccessToken`] - 응답에 `access_token`이 없음
    pub async fn exchange(
        &self,
        redirect_uri: &str,
        credentials: &Credentials,
        code: &str,
    ) -> Result<TokenResponse, AuthError> {
        let form = token_form_params(redirect_uri, credentials, code);
        let request = FetchRequest::post_form(self.token_uri.clone(), form);

        let response = match self.transport.fetch(request).await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Disqus auth error: {}", e);
                return Err(AuthError::TokenExchange(e));
            }
        };

        if !response.is_success() {
            log::warn!("Disqus auth error: HTTP {}: {}", response.status, response.body);
            return Err(AuthError::TokenExchange(ApiError::ProviderError {
                status: response.status,
                body: response.body,
            }));
        }

        let json: Value = serde_json::from_str(&response.body).map_err(|e| {
            log::warn!("Disqus auth error: invalid token response: {}", response.body);
            AuthError::TokenExchange(ApiError::DecodeError(e.to_string()))
        })?;

        TokenResponse::from_json(&json).inspect_err(|_| {
            log::warn!("Disqus auth error: token response without access_token: {}", response.body);
        })
    }
}

/// 토큰 요청 본문 파라미터 (순서 고정)
pub fn token_form_params(redirect_uri: &str, credentials: &Credentials, code: &str) -> QueryArgs {
    QueryArgs::new()
        .with("redirect_uri", redirect_uri)
        .with("code", code)
        .with("client_id", credentials.client_id.as_str())
        .with("client_secret", credentials.client_secret.as_str())
        .with("grant_type", "authorization_code")
}
