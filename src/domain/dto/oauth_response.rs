//! Disqus OAuth 응답 DTO 모듈
//!
//! Authorization Code 를 Access Token 으로 교환할 때 Disqus 가 반환하는
//! 데이터를 표현합니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::errors::AuthError;

/// Disqus OAuth 2.0 토큰 교환 응답
///
/// 토큰 엔드포인트 응답 예시:
///
/// ```json
/// {
///   "access_token": "c2d06abacfbb40179e47f62e06546ea9",
///   "refresh_token": "9182211c5a7d4a4d9a4c6bd1a8f5b7a5",
///   "expires": 2592000,
///   "username": "bob",
///   "user_id": 947103743
/// }
/// ```
///
/// 세션을 넘어서 유지하려면 호출자가 세션 저장소에 보관해야 합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// 이후 API 호출에 사용하는 액세스 토큰
    pub access_token: String,
    /// 토큰 유효 기간 (초 단위, 선택사항)
    pub expires: Option<i64>,
    /// 리프레시 토큰 (선택사항)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl TokenResponse {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            expires: None,
            refresh_token: None,
        }
    }

    pub fn with_expires(mut self, seconds: i64) -> Self {
        self.expires = Some(seconds);
        self
    }

    /// 토큰 엔드포인트의 JSON 본문을 해석합니다.
    ///
    /// `access_token`은 필수이며 `expires`, `refresh_token`은 없어도 됩니다.
    ///
    /// # Errors
    ///
    /// `access_token`이 없거나 문자열이 아니면 [`AuthError::MissingAccessToken`].
    pub fn from_json(json: &Value) -> Result<Self, AuthError> {
        let access_token = json
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or(AuthError::MissingAccessToken)?;

        let expires = json.get("expires").and_then(|v| match v {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        });

        let refresh_token = json
            .get("refresh_token")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self {
            access_token: access_token.to_string(),
            expires,
            refresh_token,
        })
    }
}
