//! Disqus REST API 3.0 호출 모듈

pub mod api_client;

pub use api_client::*;
