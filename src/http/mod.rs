//! 외부 HTTP 통신 모듈
//!
//! Disqus OAuth / REST API 호출에 사용하는 전송 계층을 제공합니다.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::http::{HttpTransport, ReqwestTransport};
//!
//! let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new());
//! ```

pub mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use transport::*;
