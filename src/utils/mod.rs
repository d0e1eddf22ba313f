//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`query`] - 순서 보존 쿼리 인자, URL 연결, 로그용 값 가리기
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::query::{QueryArgs, url_concat};
//!
//! let args = QueryArgs::new().with("access_token", token);
//! let url = url_concat("https://disqus.com/api/3.0/users/details.json", &args.encode());
//! ```

pub mod query;
