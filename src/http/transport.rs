//! # 비동기 HTTP 전송 계층
//!
//! Disqus 와의 모든 통신은 [`HttpTransport`] trait 을 통해 이루어집니다.
//! 운영 환경에서는 `reqwest` 기반의 [`ReqwestTransport`]를 사용하고,
//! 테스트에서는 호출 횟수와 요청 내용을 기록하는 목(mock) 구현으로 대체합니다.
//!
//! 각 호출은 정확히 한 번의 요청을 보내며 재시도하지 않습니다.
//! 타임아웃은 주입된 `reqwest::Client`의 기본값을 따릅니다.

use async_trait::async_trait;
use crate::errors::ApiError;
use crate::utils::query::QueryArgs;

/// 요청 메서드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// 전송 계층으로 보내는 요청
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub method: HttpMethod,
    /// 쿼리 문자열까지 포함된 절대 URL
    pub url: String,
    /// 폼 본문 인자 (POST 전용). 인코딩은 전송 구현이 맡습니다.
    pub form: Option<QueryArgs>,
}

impl FetchRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            form: None,
        }
    }

    pub fn post_form(url: impl Into<String>, form: QueryArgs) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            form: Some(form),
        }
    }
}

/// 전송 계층의 응답
///
/// 2xx 가 아닌 상태도 그대로 반환됩니다. 성공 여부 판단은 호출자가 합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 비동기 HTTP 전송 추상화
///
/// 네트워크 수준 실패(DNS, 연결, 본문 수신)만 `Err(ApiError::TransportError)`로
/// 반환합니다.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn fetch(&self, request: FetchRequest) -> Result<FetchResponse, ApiError>;
}

/// `reqwest` 기반 전송 구현
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// 미리 구성된 클라이언트(프록시, 타임아웃 등)를 사용합니다.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn fetch(&self, request: FetchRequest) -> Result<FetchResponse, ApiError> {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self
                .client
                .post(&request.url)
                .form(&request.form.unwrap_or_default()),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::TransportError(format!("요청 실패: {}", e.without_url())))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::TransportError(format!("응답 본문 수신 실패: {}", e.without_url())))?;

        Ok(FetchResponse { status, body })
    }
}
