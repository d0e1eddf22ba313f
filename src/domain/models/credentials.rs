//! Disqus 애플리케이션 자격 증명

use std::fmt;

/// Disqus 에 등록된 애플리케이션의 자격 증명
///
/// 프로세스 수명 동안 변하지 않으며 읽기 전용으로 공유됩니다.
/// `client_secret`은 `Debug` 출력에서 가려집니다.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// 공개 API 키 (`api_key`로도 사용)
    pub client_id: String,
    /// 비밀 키. 토큰 교환에만 사용합니다.
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}
