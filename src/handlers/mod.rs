//! HTTP 요청 핸들러 모듈
//!
//! - [`auth`] - `/login`, `/logout`
//! - [`posts`] - `/` (세션 필요)
//!
//! 핸들러는 `web::Data`로 주입된 [`DisqusAuthService`](crate::services::auth::DisqusAuthService),
//! [`SessionStore`](crate::caching::SessionStore), [`AppSettings`](crate::config::AppSettings)를 사용합니다.

pub mod auth;
pub mod posts;
