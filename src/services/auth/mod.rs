//! 인증 서비스 모듈
//!
//! Disqus OAuth 2.0 로그인을 담당하는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - 동의 페이지 URL 생성
//! - Authorization code → 액세스 토큰 교환
//! - 토큰으로 사용자 프로필 조회
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::DisqusAuthService;
//!
//! let profile = service.authenticate_with_code(&redirect_uri, code).await?;
//! ```

pub mod token_exchanger;
pub mod disqus_auth_service;

pub use token_exchanger::*;
pub use disqus_auth_service::*;
