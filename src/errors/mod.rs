//! 에러 타입 모듈
//!
//! - [`errors::ApiError`] - Disqus REST API 호출 실패
//! - [`errors::AuthError`] - OAuth 인증 플로우 실패
//! - [`errors::AppError`] - HTTP 응답으로 변환되는 웹 계층 에러

pub mod errors;

pub use errors::*;
