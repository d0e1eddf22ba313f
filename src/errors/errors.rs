//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! Disqus 연동 계층과 웹 계층의 에러를 정의합니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 계층
//!
//! ```text
//! ApiError  (전송 / 프로바이더 / 디코딩)
//!     │
//!     ▼
//! AuthError (토큰 교환 실패 / access_token 누락 / 사용자 없음)
//!     │
//!     ▼
//! AppError  (HTTP 응답으로 변환)
//! ```
//!
//! 호출자는 `Result`의 성공/실패만 구분하면 됩니다. 세부 원인은 로그와
//! 에러 체인(`source`)에만 남습니다.

use thiserror::Error;

/// Disqus REST API 호출 실패 원인
///
/// 모든 변형은 호출자에게 동일한 `Err` 채널로 전달되며, 재시도는 하지 않습니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 네트워크, DNS, 연결 실패
    #[error("Transport error: {0}")]
    TransportError(String),

    /// 2xx 가 아닌 HTTP 상태 코드
    #[error("Provider error: HTTP {status}: {body}")]
    ProviderError { status: u16, body: String },

    /// 응답 본문이 올바른 JSON 이 아님
    #[error("Decode error: {0}")]
    DecodeError(String),
}

/// OAuth 인증 플로우 실패 원인
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    /// 토큰 엔드포인트 호출 실패
    #[error("Token exchange failed: {0}")]
    TokenExchange(#[source] ApiError),

    /// 토큰 응답에 `access_token` 이 없음
    #[error("Token response is missing access_token")]
    MissingAccessToken,

    /// 사용자 상세 정보 조회 실패
    #[error("No authenticated user: {0}")]
    NoUser(#[source] ApiError),
}

/// 웹 계층 에러 타입
///
/// 핸들러에서 반환되며 자동으로 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 세션 저장소 관련 에러 (500 Internal Server Error)
    #[error("Session store error: {0}")]
    SessionError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 외부 서비스 에러 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<AuthError> for AppError {
    /// 인증 플로우 실패는 원인과 관계없이 "Disqus auth failed." 로 응답합니다.
    fn from(err: AuthError) -> Self {
        log::warn!("Disqus 인증 실패: {}", err);
        AppError::ExternalServiceError("Disqus auth failed.".to_string())
    }
}

impl actix_web::ResponseError for AppError {
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 직렬화 등 부수 작업의 에러에 설명을 붙여 `AppError::InternalError`로 변환합니다.
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
