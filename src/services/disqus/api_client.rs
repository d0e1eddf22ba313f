//! # Disqus REST API 클라이언트
//!
//! 액세스 토큰으로 Disqus API 3.0 을 호출하는 범용 요청 함수와,
//! 그 위에 구성한 사용자 정보 조회를 제공합니다.
//!
//! ## 쿼리 문자열 규칙
//!
//! | access_token | 쿼리 문자열 | 본문 |
//! |--------------|-------------|------|
//! | 있음 | `access_token` ∪ `extra` ∪ `post_args` | `post_args` (POST 일 때) |
//! | 없음 | 없음 (`extra`도 무시) | `post_args` (POST 일 때) |
//!
//! 같은 키가 다시 나오면 앞의 자리에서 값만 덮어씁니다.
//! 기존 클라이언트와 같은 요청을 보내기 위해 위 규칙을 그대로 유지합니다.

use std::sync::Arc;
use serde_json::Value;
use crate::domain::dto::oauth_response::TokenResponse;
use crate::domain::models::user_profile::UserProfile;
use crate::errors::{ApiError, AuthError};
use crate::http::{FetchRequest, HttpTransport};
use crate::utils::query::{QueryArgs, redact_query_value, url_concat};

pub const USER_DETAILS_PATH: &str = "/users/details.json";
pub const LIST_POSTS_PATH: &str = "/users/listPosts.json";

pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    api_base: String,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn HttpTransport>, api_base: impl Into<String>) -> Self {
        Self {
            transport,
            api_base: api_base.into(),
        }
    }

    /// 요청 URL 을 만듭니다. 토큰이 없으면 쿼리 문자열을 붙이지 않습니다.
    pub fn build_request_url(
        &self,
        path: &str,
        access_token: Option<&str>,
        extra: &QueryArgs,
        post_args: Option<&QueryArgs>,
    ) -> String {
        let url = format!("{}{}", self.api_base, path);

        let Some(token) = access_token.filter(|t| !t.is_empty()) else {
            return url;
        };

        let mut args = QueryArgs::new().with("access_token", token);
        args.extend(extra);
        if let Some(post_args) = post_args {
            args.extend(post_args);
        }

        url_concat(&url, &args.encode())
    }

    /// API 를 한 번 호출하고 JSON 본문을 그대로 반환합니다.
    ///
    /// `post_args`가 있으면 form 본문을 담은 POST, 없으면 GET 입니다.
    ///
    /// # Errors
    ///
    /// * [`ApiError::TransportError`] - 네트워크 실패
    /// * [`ApiError::ProviderError`] - 2xx 가 아닌 응답
    /// * [`ApiError::DecodeError`] - JSON 이 아닌 본문
    pub async fn request(
        &self,
        path: &str,
        access_token: Option<&str>,
        extra: &QueryArgs,
        post_args: Option<&QueryArgs>,
    ) -> Result<Value, ApiError> {
        let url = self.build_request_url(path, access_token, extra, post_args);
        let log_url = redact_query_value(&url, "access_token");

        let request = match post_args {
            Some(args) => FetchRequest::post_form(url, args.clone()),
            None => FetchRequest::get(url),
        };

        let response = self.transport.fetch(request).await.inspect_err(|e| {
            log::error!("Disqus request failed: {} ({})", log_url, e);
        })?;

        if !response.is_success() {
            log::error!("Disqus request failed: {} (HTTP {})", log_url, response.status);
            return Err(ApiError::ProviderError {
                status: response.status,
                body: response.body,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| {
            log::error!("Disqus response is not JSON: {} ({})", log_url, e);
            ApiError::DecodeError(e.to_string())
        })
    }

    pub async fn get(&self, path: &str, access_token: Option<&str>, args: &QueryArgs) -> Result<Value, ApiError> {
        self.request(path, access_token, args, None).await
    }

    pub async fn post(&self, path: &str, access_token: Option<&str>, args: &QueryArgs) -> Result<Value, ApiError> {
        self.request(path, access_token, &QueryArgs::new(), Some(args)).await
    }

    /// 로그인한 사용자의 게시글 목록 (`/users/listPosts.json`)
    pub async fn list_posts(&self, access_token: &str, api_key: &str) -> Result<Value, ApiError> {
        let args = QueryArgs::new().with("api_key", api_key);
        self.get(LIST_POSTS_PATH, Some(access_token), &args).await
    }

    /// 토큰 소유자의 프로필을 조회합니다.
    ///
    /// `/users/details.json` 응답의 `response` 객체를 허용 목록으로 투영하고
    /// 토큰 정보를 합칩니다. 하위 실패는 모두 [`AuthError::NoUser`]가 됩니다.
    pub async fn get_current_user(
        &self,
        token: &TokenResponse,
        client_id: &str,
    ) -> Result<UserProfile, AuthError> {
        let args = QueryArgs::new().with("api_key", client_id);
        let details = self
            .get(USER_DETAILS_PATH, Some(&token.access_token), &args)
            .await
            .map_err(AuthError::NoUser)?;

        let user = details
            .get("response")
            .and_then(Value::as_object)
            .ok_or_else(|| {
                log::warn!("Disqus user details without response object");
                AuthError::NoUser(ApiError::DecodeError("missing response object".to_string()))
            })?;

        Ok(UserProfile::project(user, token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::http::mock::RecordingTransport;
    use crate::http::HttpMethod;

    const API_BASE: &str = "https://disqus.test/api/3.0";

    fn client(transport: &Arc<RecordingTransport>) -> ApiClient {
        ApiClient::new(transport.clone(), API_BASE)
    }

    #[tokio::test]
    async fn test_request_returns_body_verbatim() {
        let body = r#"{"code":0,"response":[{"id":"p1"}]}"#;
        let transport = Arc::new(RecordingTransport::new().respond(200, body));

        let value = client(&transport)
            .request("/users/listPosts.json", Some("tok"), &QueryArgs::new(), None)
            .await
            .unwrap();

        assert_eq!(value, json!({"code": 0, "response": [{"id": "p1"}]}));
    }

    #[tokio::test]
    async fn test_request_without_token_has_no_query_string() {
        let transport = Arc::new(RecordingTransport::new().respond(200, "{}"));
        let extra = QueryArgs::new().with("api_key", "cid");

        client(&transport)
            .request("/forums/details.json", None, &extra, None)
            .await
            .unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.url, "https://disqus.test/api/3.0/forums/details.json");
        assert!(!request.url.contains('?'));
        assert_eq!(request.method, HttpMethod::Get);
    }

    #[tokio::test]
    async fn test_empty_token_is_treated_as_absent() {
        let transport = Arc::new(RecordingTransport::new().respond(200, "{}"));
        let extra = QueryArgs::new().with("api_key", "cid");

        client(&transport)
            .request("/x.json", Some(""), &extra, None)
            .await
            .unwrap();

        assert_eq!(transport.requests()[0].url, "https://disqus.test/api/3.0/x.json");
    }

    #[tokio::test]
    async fn test_post_args_go_to_query_and_body() {
        let transport = Arc::new(RecordingTransport::new().respond(200, "{}"));
        let post_args = QueryArgs::new().with("message", "hi");

        client(&transport)
            .request("/posts/create.json", Some("tok"), &QueryArgs::new(), Some(&post_args))
            .await
            .unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(
            request.url,
            "https://disqus.test/api/3.0/posts/create.json?access_token=tok&message=hi"
        );
        assert_eq!(request.form, Some(QueryArgs::new().with("message", "hi")));
    }

    #[tokio::test]
    async fn test_post_without_token_keeps_body_only() {
        let transport = Arc::new(RecordingTransport::new().respond(200, "{}"));
        let post_args = QueryArgs::new().with("message", "hi");

        client(&transport).post("/posts/create.json", None, &post_args).await.unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.url, "https://disqus.test/api/3.0/posts/create.json");
        assert_eq!(request.form, Some(QueryArgs::new().with("message", "hi")));
    }

    #[test]
    fn test_later_args_overwrite_in_place() {
        let transport = Arc::new(RecordingTransport::new());
        let extra = QueryArgs::new().with("api_key", "cid").with("access_token", "other");
        let post_args = QueryArgs::new().with("api_key", "cid2");

        let url = client(&transport).build_request_url("/x.json", Some("tok"), &extra, Some(&post_args));

        assert_eq!(url, "https://disqus.test/api/3.0/x.json?access_token=other&api_key=cid2");
    }

    #[tokio::test]
    async fn test_request_error_status_is_single_attempt() {
        let transport = Arc::new(RecordingTransport::new().respond(500, "boom"));

        let result = client(&transport)
            .request("/users/details.json", Some("tok"), &QueryArgs::new(), None)
            .await;

        assert_eq!(
            result,
            Err(ApiError::ProviderError { status: 500, body: "boom".to_string() })
        );
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_request_invalid_json() {
        let transport = Arc::new(RecordingTransport::new().respond(200, "<html>"));

        let result = client(&transport).get("/x.json", Some("tok"), &QueryArgs::new()).await;

        assert!(matches!(result, Err(ApiError::DecodeError(_))));
    }

    #[tokio::test]
    async fn test_list_posts_sends_token_and_api_key() {
        let transport = Arc::new(RecordingTransport::new().respond(200, r#"{"response":[]}"#));

        client(&transport).list_posts("tok1", "cid").await.unwrap();

        assert_eq!(
            transport.requests()[0].url,
            "https://disqus.test/api/3.0/users/listPosts.json?access_token=tok1&api_key=cid"
        );
    }

    #[tokio::test]
    async fn test_current_user_drops_extra_fields() {
        let transport = Arc::new(RecordingTransport::new().respond(
            200,
            r#"{"response":{"id":"1","username":"bob","name":"Bob","profileUrl":"http://x","email":"b@x.com","isPrivate":false,"numPosts":12}}"#,
        ));
        let token = TokenResponse::new("tok1").with_expires(3600);

        let profile = client(&transport).get_current_user(&token, "cid").await.unwrap();

        assert_eq!(
            serde_json::to_value(&profile).unwrap(),
            json!({
                "id": "1",
                "username": "bob",
                "name": "Bob",
                "profileUrl": "http://x",
                "email": "b@x.com",
                "access_token": "tok1",
                "session_expires": 3600
            })
        );
        assert_eq!(
            transport.requests()[0].url,
            "https://disqus.test/api/3.0/users/details.json?access_token=tok1&api_key=cid"
        );
    }

    #[tokio::test]
    async fn test_current_user_missing_field_is_null() {
        let transport = Arc::new(RecordingTransport::new().respond(
            200,
            r#"{"response":{"id":"1","username":"bob","name":"Bob","profileUrl":"http://x"}}"#,
        ));

        let profile = client(&transport)
            .get_current_user(&TokenResponse::new("tok1"), "cid")
            .await
            .unwrap();

        assert_eq!(profile.fields.get("email"), Some(&Value::Null));
    }

    #[tokio::test]
    async fn test_current_user_failure_is_no_user() {
        let transport = Arc::new(RecordingTransport::new().respond(401, r#"{"code":12}"#));

        let result = client(&transport)
            .get_current_user(&TokenResponse::new("expired"), "cid")
            .await;

        assert!(matches!(result, Err(AuthError::NoUser(ApiError::ProviderError { status: 401, .. }))));
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_current_user_without_response_object() {
        let transport = Arc::new(RecordingTransport::new().respond(200, r#"{"code":0,"response":"nope"}"#));

        let result = client(&transport)
            .get_current_user(&TokenResponse::new("tok"), "cid")
            .await;

        assert!(matches!(result, Err(AuthError::NoUser(ApiError::DecodeError(_)))));
    }
}
