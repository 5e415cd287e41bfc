//! Mock CMS transport for testing
//!
//! Responses are scripted per resource and consumed in order; every request
//! is recorded so tests can assert on queries and call counts.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::CmsTransport;
use crate::error::ApiError;

/// A captured request for test assertions
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub resource: String,
    pub query: String,
}

/// Mock transport.
///
/// # Example
/// ```ignore
/// let mock = MockTransport::new()
///     .with_response("home", Ok(json!({"data": {"heading": "Hi"}})));
/// ```
#[derive(Default, Clone)]
pub struct MockTransport {
    responses: Arc<Mutex<HashMap<String, VecDeque<Result<Value, ApiError>>>>>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next request to `resource`.
    pub fn with_response(self, resource: &str, response: Result<Value, ApiError>) -> Self {
        self.responses
            .try_lock()
            .expect("mock not shared yet")
            .entry(resource.to_string())
            .or_default()
            .push_back(response);
        self
    }

    /// Number of requests made so far.
    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    /// All requests made so far, in order.
    pub async fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl CmsTransport for MockTransport {
    async fn get(&self, resource: &str, query: &str) -> Result<Value, ApiError> {
        self.requests.lock().await.push(CapturedRequest {
            resource: resource.to_string(),
            query: query.to_string(),
        });

        self.responses
            .lock()
            .await
            .get_mut(resource)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(ApiError::NotFound(format!("no mock response for {}", resource))))
    }
}
