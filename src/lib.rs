//! Disqus 인증 서비스
//!
//! Disqus OAuth 2.0 클라이언트와 이를 사용하는 데모 웹 애플리케이션입니다.
//! Authorization code 를 액세스 토큰으로 교환하고, 그 토큰으로 Disqus REST API 를
//! 호출하며, 실패를 하나의 `Result`로 전달합니다.
//!
//! # Features
//!
//! - **토큰 교환**: authorization-code grant (`TokenExchanger`)
//! - **API 호출**: access token / api key 를 붙인 GET, POST (`ApiClient`)
//! - **사용자 프로필**: 허용 목록 필드만 남긴 프로필 (`UserProfile`)
//! - **세션 저장소**: 메모리 또는 Redis
//! - **데모 앱**: `/login`, `/logout`, `/` (actix-web)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /login, /logout, /, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 세션 쿠키
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← TokenExchanger, ApiClient, DisqusAuthService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  HttpTransport  │ ← reqwest
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     Disqus      │
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use disqus_auth_service::config::DisqusOAuthConfig;
//! use disqus_auth_service::http::ReqwestTransport;
//! use disqus_auth_service::services::auth::{DisqusAuthService, DisqusEndpoints};
//!
//! let service = DisqusAuthService::new(
//!     Arc::new(ReqwestTransport::new()),
//!     DisqusOAuthConfig::credentials(),
//!     DisqusEndpoints::from_env(),
//! );
//!
//! let profile = service.authenticate_with_code(&redirect_uri, "abc123").await?;
//! println!("{:?}", profile.username());
//! ```

pub mod config;
pub mod caching;
pub mod domain;
pub mod http;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
