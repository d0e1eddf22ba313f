//! # Domain Models Module
//!
//! 값 객체(Value Objects)를 정의합니다.
//!
//! - [`Credentials`] - Disqus 애플리케이션 자격 증명. 프로세스 수명 동안 불변
//! - [`UserProfile`] - 허용 목록으로 투영된 사용자 정보와 액세스 토큰
//!
//! 두 타입 모두 I/O 를 하지 않으며 서비스 계층이 생성합니다.

pub mod credentials;
pub mod user_profile;

pub use credentials::Credentials;
pub use user_profile::{PROFILE_FIELDS, ProfileField, UserProfile};
