//! 인증 요청관련 DTO
//!
//! 로그인/로그아웃 엔드포인트의 쿼리 파라미터를 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// `GET /login` 쿼리 파라미터 구조체
///
/// `code`가 없으면 Disqus 인증 페이지로 리다이렉트하고,
/// 있으면 토큰 교환을 진행합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginQuery {
    #[validate(length(min = 1, message = "Authorization code가 비어 있습니다"))]
    pub code: Option<String>,

    /// 로그인 완료 후 이동할 경로
    pub next: Option<String>,

    /// 에러가 있을 경우 (사용자가 거부했거나 에러 발생)
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// `GET /logout` 쿼리 파라미터 구조체
#[derive(Debug, Deserialize)]
pub struct LogoutQuery {
    pub next: Option<String>,
}

/// 외부 도메인으로의 오픈 리다이렉트를 막기 위해 상대 경로만 허용합니다.
///
/// 브라우저는 `//host`와 `/\host`를 모두 프로토콜 상대 URL 로 해석합니다.
pub fn safe_next(next: Option<&str>) -> String {
    match next {
        Some(path) if is_local_path(path) => path.to_string(),
        _ => "/".to_string(),
    }
}

fn is_local_path(path: &str) -> bool {
    let mut chars = path.chars();
    chars.next() == Some('/') && !matches!(chars.next(), Some('/') | Some('\\'))
}
