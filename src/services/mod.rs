//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 모든 서비스는 `Arc<dyn HttpTransport>`를 주입받아 명시적으로 생성합니다.
//!
//! # Features
//!
//! - OAuth 2.0 authorization-code 교환 ([`auth::TokenExchanger`])
//! - Disqus REST API 호출 ([`disqus::ApiClient`])
//! - 두 단계를 묶은 로그인 흐름 ([`auth::DisqusAuthService`])
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::http::ReqwestTransport;
//! use crate::services::auth::{DisqusAuthService, DisqusEndpoints};
//!
//! let service = DisqusAuthService::new(
//!     Arc::new(ReqwestTransport::new()),
//!     DisqusOAuthConfig::credentials(),
//!     DisqusEndpoints::from_env(),
//! );
//! let login_url = service.get_login_url("http://localhost:8888/login?next=/");
//! ```

pub mod auth;
pub mod disqus;
