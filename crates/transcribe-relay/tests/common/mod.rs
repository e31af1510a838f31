#![allow(dead_code)]

use axum::body::Body;
use axum::http::Request;
use transcribe_relay::RelayConfig;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";
pub const BOUNDARY: &str = "transcribe-relay-boundary";

pub struct TestHarness {
    pub mock_server: MockServer,
}

impl TestHarness {
    pub async fn new() -> Self {
        let _ = tracing_subscriber::fmt::try_init();
        Self {
            mock_server: MockServer::start().await,
        }
    }

    pub fn config(&self) -> RelayConfig {
        RelayConfig::new(TEST_API_KEY).with_api_base(self.mock_server.uri())
    }

    pub fn app(&self) -> axum::Router {
        transcribe_relay::router(self.config()).unwrap()
    }

    pub async fn mount_json_response(&self, status: u16, response: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/audio/transcriptions"))
            .and(header("Authorization", format!("Bearer {TEST_API_KEY}").as_str()))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_json(&response)
                    .insert_header("Content-Type", "application/json"),
            )
            .expect(1)
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mount_raw_response(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/audio/transcriptions"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .expect(1)
            .mount(&self.mock_server)
            .await;
    }

    pub async fn expect_no_upstream_call(&self) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&self.mock_server)
            .await;
    }

    /// Body of the single request the mock upstream received.
    pub async fn upstream_body(&self) -> Vec<u8> {
        let requests = self
            .mock_server
            .received_requests()
            .await
            .expect("request recording enabled");
        assert_eq!(requests.len(), 1, "expected exactly one upstream request");
        requests.into_iter().next().unwrap().body
    }
}

pub struct FormPart<'a> {
    pub name: &'a str,
    pub file_name: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub data: &'a [u8],
}

pub fn multipart_body(parts: &[FormPart<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        let mut disposition = format!("Content-Disposition: form-data; name=\"{}\"", part.name);
        if let Some(file_name) = part.file_name {
            disposition.push_str(&format!("; filename=\"{file_name}\""));
        }
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(b"\r\n");
        if let Some(content_type) = part.content_type {
            body.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_request(parts: &[FormPart<'_>]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

pub fn audio_upload(file_name: &str, data: &[u8]) -> Request<Body> {
    multipart_request(&[FormPart {
        name: "audio",
        file_name: Some(file_name),
        content_type: Some("audio/wav"),
        data,
    }])
}

pub fn raw_request(content_type: &str, data: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("Content-Type", content_type)
        .body(Body::from(data))
        .unwrap()
}

pub fn empty_request(method: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri("/")
        .body(Body::empty())
        .unwrap()
}

pub async fn response_to_string(response: axum::http::Response<Body>) -> String {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8_lossy(&body_bytes).to_string()
}

pub async fn response_to_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

pub fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    haystack
        .windows(needle.len())
        .any(|window| window == needle)
}
