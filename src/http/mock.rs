//! 테스트용 기록 전송 구현

use std::collections::VecDeque;
use std::sync::Mutex;
use async_trait::async_trait;
use crate::errors::ApiError;
use super::transport::{FetchRequest, FetchResponse, HttpTransport};

/// 준비된 응답을 순서대로 돌려주고, 받은 요청을 모두 기록합니다.
#[derive(Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<Result<FetchResponse, ApiError>>>,
    requests: Mutex<Vec<FetchRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(FetchResponse { status, body: body.to_string() }));
        self
    }

    pub fn fail(self, error: ApiError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<FetchRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn fetch(&self, request: FetchRequest) -> Result<FetchResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::TransportError("no prepared response".to_string())))
    }
}
