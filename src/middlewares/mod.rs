//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용하는 미들웨어를 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 세션 인증 미들웨어 (SessionAuth)
//! - `user` 쿠키에서 세션 키 추출
//! - [`SessionStore`](crate::caching::SessionStore)에서 프로필 조회
//! - 프로필을 request extension 에 저장
//! - 세션이 없으면 `/login?next=<원래 경로>`로 302
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::SessionAuth;
//!
//! cfg.service(
//!     web::resource("/")
//!         .wrap(SessionAuth::required())
//!         .route(web::get().to(posts::index)),
//! );
//! ```

pub mod session_auth;
pub mod session_inner;

pub use session_auth::SessionAuth;
