//! Shared test helpers.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use docsapi::{ClientConfig, DocsClient, DocsError, HttpRequest, HttpResponse, Transport};

/// Transport double that records requests and replays canned responses.
#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<HttpResponse>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, response: HttpResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: HttpRequest) -> docsapi::Result<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| DocsError::Transport("connection refused".to_string()))
    }
}

pub const API_KEY: &str = "test-key";

/// Client wired to a recording transport.
pub fn recording_client() -> (DocsClient, Arc<RecordingTransport>) {
    let transport = RecordingTransport::new();
    let config = ClientConfig::builder(API_KEY).build().unwrap();
    let client = DocsClient::with_transport(config, transport.clone());
    (client, transport)
}

/// Client pointed at a wiremock server, with the API under `/v1/`.
pub fn wire_client(server_uri: &str) -> DocsClient {
    let config = ClientConfig::builder(API_KEY)
        .base_url(format!("{server_uri}/v1/"))
        .user_agent("docsapi-tests/1.0")
        .build()
        .unwrap();
    DocsClient::new(config).unwrap()
}
