//! In-memory transport for tests

use async_trait::async_trait;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;

use super::transport::{ApiRequest, ApiResponse, HttpTransport};

/// Replays queued responses in order and records every request
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, String>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: Value) {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse::new(status, Some(body))));
    }

    pub fn respond_empty(&self, status: u16) {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse::new(status, None)));
    }

    pub fn respond_status_text(&self, status: u16, status_text: &str) {
        self.responses.borrow_mut().push_back(Ok(ApiResponse {
            status,
            status_text: status_text.to_string(),
            body: None,
        }));
    }

    pub fn fail(&self, message: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(message.to_string()));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, String> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err("no response queued".to_string()))
    }
}
