//! # Disqus 사용자 프로필 모델
//!
//! `/users/details.json` 응답에서 허용 목록(allow-list)에 있는 필드만 골라
//! 액세스 토큰 정보와 합친 프로필을 정의합니다.
//!
//! ## 투영 규칙
//!
//! ```text
//! details.response ──► PROFILE_FIELDS 에 있는 키만 복사 ──► UserProfile
//!                       (없는 키는 null 로 채움)              + access_token
//!                                                             + session_expires
//! ```
//!
//! 허용 목록에 없는 필드는 버려지며, 누락된 필드는 에러가 아니라
//! 명시적인 `null` 값이 됩니다.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::domain::dto::oauth_response::TokenResponse;

/// 프로필로 복사되는 Disqus 사용자 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Id,
    Username,
    Name,
    ProfileUrl,
    Email,
}

impl ProfileField {
    /// Disqus 응답에서 사용하는 키 이름
    pub const fn key(self) -> &'static str {
        match self {
            ProfileField::Id => "id",
            ProfileField::Username => "username",
            ProfileField::Name => "name",
            ProfileField::ProfileUrl => "profileUrl",
            ProfileField::Email => "email",
        }
    }
}

/// 프로필 투영에 사용하는 허용 목록
pub const PROFILE_FIELDS: [ProfileField; 5] = [
    ProfileField::Id,
    ProfileField::Username,
    ProfileField::Name,
    ProfileField::ProfileUrl,
    ProfileField::Email,
];

static NULL: Value = Value::Null;

/// 인증된 Disqus 사용자 프로필
///
/// JSON 으로 직렬화하면 평탄한 객체가 됩니다:
///
/// ```json
/// {
///   "email": "b@x.com",
///   "id": "1",
///   "name": "Bob",
///   "profileUrl": "http://x",
///   "username": "bob",
///   "access_token": "tok1",
///   "session_expires": 3600
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// 허용 목록 필드. 항상 [`PROFILE_FIELDS`]의 모든 키를 가집니다.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
    pub access_token: String,
    pub session_expires: Option<i64>,
}

impl UserProfile {
    /// 사용자 객체를 허용 목록으로 투영하고 토큰 정보를 합칩니다.
    pub fn project(user: &Map<String, Value>, token: &TokenResponse) -> Self {
        let fields = PROFILE_FIELDS
            .iter()
            .map(|field| {
                let value = user.get(field.key()).cloned().unwrap_or(Value::Null);
                (field.key().to_string(), value)
            })
            .collect();

        Self {
            fields,
            access_token: token.access_token.clone(),
            session_expires: token.expires,
        }
    }

    /// 필드 값. 누락된 필드는 `Value::Null`.
    pub fn get(&self, field: ProfileField) -> &Value {
        self.fields.get(field.key()).unwrap_or(&NULL)
    }

    pub fn username(&self) -> Option<&str> {
        self.get(ProfileField::Username).as_str()
    }

    /// 세션 저장소 계약에 맞춘 토큰 정보
    pub fn token(&self) -> TokenResponse {
        TokenResponse {
            access_token: self.access_token.clone(),
            expires: self.session_expires,
            refresh_token: None,
        }
    }
}
