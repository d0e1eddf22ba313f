//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, Disqus 인증 흐름에서 오가는 데이터를 정의합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── DTOs         - 데이터 전송 객체 (쿼리 파라미터, 토큰 응답)
//! └── Models       - 자격 증명과 사용자 프로필
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (HTTP Transport, Session Store)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! HTTP 요청 파라미터와 Disqus 토큰 엔드포인트 응답을 매핑합니다.
//!
//! ### [`models`] - 도메인 모델
//!
//! 애플리케이션 자격 증명([`Credentials`])과 인증된 사용자 프로필([`UserProfile`])입니다.
//! 프로필은 허용 목록에 있는 필드만 가지며 세션 저장소에 그대로 직렬화됩니다.
//!
//! ```rust,ignore
//! use crate::domain::{TokenResponse, UserProfile};
//!
//! let token = TokenResponse::new("tok1").with_expires(3600);
//! let profile = UserProfile::project(&user_object, &token);
//! assert_eq!(profile.access_token, "tok1");
//! ```

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
