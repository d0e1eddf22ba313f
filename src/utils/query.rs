//! # 쿼리 문자열 유틸리티
//!
//! Disqus API 요청에 사용하는 쿼리/폼 인자를 다룹니다.
//! 인자 순서를 보존하며, 같은 키를 다시 설정하면 기존 위치의 값을 덮어씁니다.

use serde::Serialize;

/// 순서가 보존되는 쿼리 인자 목록
///
/// 폼 본문으로 보낼 때는 `Serialize` 구현을 통해 `(key, value)` 쌍 목록이 됩니다.
///
/// # 예제
///
/// ```rust
/// use disqus_auth_service::utils::query::QueryArgs;
///
/// let mut args = QueryArgs::new();
/// args.set("access_token", "tok");
/// args.set("api_key", "cid");
/// args.set("access_token", "tok2");
///
/// assert_eq!(args.encode(), "access_token=tok2&api_key=cid");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryArgs(Vec<(String, String)>);

impl QueryArgs {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// 인자를 설정합니다. 이미 있는 키라면 순서를 유지한 채 값만 교체합니다.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// 빌더 스타일 [`QueryArgs::set`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// 다른 인자 목록을 병합합니다. 뒤에 오는 값이 우선합니다.
    pub fn extend(&mut self, other: &QueryArgs) {
        for (k, v) in &other.0 {
            self.set(k.clone(), v.clone());
        }
    }

    /// 쿼리 문자열 형식으로 인코딩합니다.
    pub fn encode(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// URL 뒤에 인코딩된 쿼리 문자열을 붙입니다.
///
/// `base`가 이미 `?` 또는 `&`로 끝나면 구분자를 추가하지 않으며,
/// 이미 쿼리가 있는 URL 에는 `&`로 이어 붙입니다.
pub fn url_concat(base: &str, query: &str) -> String {
    if query.is_empty() {
        return base.to_string();
    }

    if base.ends_with('?') || base.ends_with('&') {
        format!("{}{}", base, query)
    } else if base.contains('?') {
        format!("{}&{}", base, query)
    } else {
        format!("{}?{}", base, query)
    }
}

/// 로그 출력용으로 URL 쿼리의 특정 인자 값을 가립니다.
pub fn redact_query_value(url: &str, key: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let redacted = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((k, _)) if k == key => format!("{}=***", k),
            _ => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", base, redacted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_in_place() {
        let mut args = QueryArgs::new();
        args.set("a", "1");
        args.set("b", "2");
        args.set("a", "3");

        assert_eq!(args.encode(), "a=3&b=2");
    }

    #[test]
    fn test_extend_later_values_win() {
        let mut args = QueryArgs::new().with("access_token", "tok").with("forum", "x");
        let other = QueryArgs::new().with("forum", "y").with("limit", "25");
        args.extend(&other);

        assert_eq!(args.encode(), "access_token=tok&forum=y&limit=25");
    }

    #[test]
    fn test_encode_escapes_reserved_characters() {
        let args = QueryArgs::new()
            .with("redirect_uri", "http://localhost:8888/login?next=/")
            .with("scope", "read,write");

        assert_eq!(
            args.encode(),
            "redirect_uri=http%3A%2F%2Flocalhost%3A8888%2Flogin%3Fnext%3D%2F&scope=read%2Cwrite"
        );
    }

    #[test]
    fn test_url_concat_variants() {
        assert_eq!(url_concat("https://x/a/?", "k=v"), "https://x/a/?k=v");
        assert_eq!(url_concat("https://x/a", "k=v"), "https://x/a?k=v");
        assert_eq!(url_concat("https://x/a?z=1", "k=v"), "https://x/a?z=1&k=v");
        assert_eq!(url_concat("https://x/a", ""), "https://x/a");
    }

    #[test]
    fn test_redact_query_value() {
        let url = "https://disqus.com/api/3.0/users/details.json?access_token=secret&api_key=cid";
        assert_eq!(
            redact_query_value(url, "access_token"),
            "https://disqus.com/api/3.0/users/details.json?access_token=***&api_key=cid"
        );
        assert_eq!(redact_query_value("https://x/a", "access_token"), "https://x/a");
    }
}
