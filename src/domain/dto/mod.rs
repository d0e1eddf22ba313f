//! # Data Transfer Objects (DTOs) Module
//!
//! 외부와 주고받는 데이터 구조를 정의합니다.
//!
//! ## 요청 / 응답 흐름
//!
//! ```text
//! Browser ──/login?code=..──► LoginQuery ──► DisqusAuthService
//!                                                  │
//! Disqus  ◄── POST access_token ──────────────────┘
//!    │
//!    └── JSON ──► TokenResponse
//! ```
//!
//! - [`auth_request`] - `/login`, `/logout` 쿼리 파라미터 (`validator` 검증 포함)
//! - [`oauth_response`] - 토큰 엔드포인트 응답

pub mod auth_request;
pub mod oauth_response;

pub use auth_request::*;
pub use oauth_response::*;
