//! # Configuration Module
//!
//! 서비스 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 단위 구조체의 연관 함수로 노출합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 실행 환경, 세션 저장소 설정
//! - [`auth_config`] - Disqus OAuth 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DisqusOAuthConfig, Environment, ServerConfig, SessionConfig};
//!
//! let env = Environment::current();
//! let bind = ServerConfig::bind_address();
//! let credentials = DisqusOAuthConfig::credentials();
//! let backend = SessionConfig::backend();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8888"
//! export ENVIRONMENT="development"
//!
//! # Disqus OAuth
//! export DISQUS_CLIENT_ID="your-public-key"
//! export DISQUS_CLIENT_SECRET="your-secret-key"
//!
//! # 세션 저장소
//! export SESSION_STORE="redis"
//! export REDIS_URL="redis://127.0.0.1:6379"
//! export SESSION_TTL_SECONDS="2592000"
//! ```
//!
//! `.env.dev` / `.env.prod` 파일은 `PROFILE` 값에 따라 `main`에서 로드됩니다.

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
