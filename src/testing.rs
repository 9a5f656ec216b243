//! Fakes shared by the unit tests.

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::error::{ErrorKind, Result};
use crate::interface::HttpClient;
use crate::model::dtos::{ApiRequest, RawResponse};
use crate::session::MemorySessionStore;
use std::collections::VecDeque;
use std::sync::Mutex;

pub use crate::app::nav::RecordingNavigator;

/// Canned reply for the mock transport; `None` simulates a connection failure.
type Reply = Option<RawResponse>;

/// Transport that records requests and answers from a queue.
/// The last queued reply repeats once the queue runs dry.
#[derive(Debug, Default)]
pub struct MockClient {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockClient {
    pub fn replying(status: u16, body: &str) -> Self {
        Self::default().then(status, body)
    }

    pub fn failing() -> Self {
        let client = Self::default();
        client.replies.lock().unwrap().push_back(None);
        client
    }

    pub fn then(self, status: u16, body: &str) -> Self {
        self.replies.lock().unwrap().push_back(Some(RawResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl HttpClient for MockClient {
    async fn new() -> Result<Self> {
        Ok(Self::default())
    }

    async fn execute(&self, request: ApiRequest) -> Result<RawResponse> {
        self.requests.lock().unwrap().push(request);

        let mut replies = self.replies.lock().unwrap();
        let reply = if replies.len() > 1 {
            replies.pop_front().flatten()
        } else {
            replies.front().cloned().flatten()
        };

        reply.ok_or_else(|| {
            ErrorKind::StdIoError(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))
            .into()
        })
    }
}

pub type TestApi = ApiClient<MockClient, MemorySessionStore, RecordingNavigator>;

/// Client against the relative `/api` prefix, as served in the browser.
pub fn test_api(client: MockClient, store: MemorySessionStore) -> TestApi {
    let config = ClientConfig {
        base_url: "/api".to_string(),
        ..ClientConfig::default()
    };
    ApiClient::new(client, store, RecordingNavigator::default(), &config)
}
