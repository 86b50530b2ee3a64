#![allow(dead_code)]

use relay_service::config::{GeminiSettings, PersonaSettings, RelayConfig, UploadSettings};
use relay_service::startup::Application;
use secrecy::Secret;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_MODEL: &str = "gemini-2.5-flash";
pub const TEST_PERSONA: &str = "You are Test Persona. Resume: built relays.";
pub const GENERATE_PATH: &str = "/v1/models/gemini-2.5-flash:generateContent";

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub upstream: MockServer,
    pub client: reqwest::Client,
}

pub fn test_config(upstream: &MockServer) -> RelayConfig {
    RelayConfig {
        common: service_core::config::Config {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
        },
        gemini: GeminiSettings {
            api_key: Secret::new(TEST_API_KEY.to_string()),
            model: TEST_MODEL.to_string(),
            api_base: format!("{}/v1", upstream.uri()),
            timeout: Some(Duration::from_secs(5)),
        },
        persona: PersonaSettings {
            context: TEST_PERSONA.to_string(),
        },
        upload: UploadSettings {
            max_bytes: 1024 * 1024,
        },
        log_level: "debug".to_string(),
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        let upstream = MockServer::start().await;

        let app = Application::build(test_config(&upstream))
            .await
            .expect("Failed to build test application");
        let port = app.port();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        Self {
            address: format!("http://127.0.0.1:{}", port),
            port,
            upstream,
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self, route: &str) -> String {
        format!("{}{}", self.address, route)
    }

    pub async fn post_chat(&self, message: &str) -> reqwest::Response {
        self.client
            .post(self.url("/chat"))
            .json(&serde_json::json!({ "message": message }))
            .send()
            .await
            .expect("Failed to send chat request")
    }

    pub async fn post_file(&self, route: &str, filename: &str, bytes: Vec<u8>) -> reqwest::Response {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        self.client
            .post(self.url(route))
            .multipart(form)
            .send()
            .await
            .expect("Failed to send upload")
    }

    /// JSON bodies the upstream received, oldest first.
    pub async fn upstream_bodies(&self) -> Vec<serde_json::Value> {
        self.upstream
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| serde_json::from_slice(&r.body).expect("upstream body was not JSON"))
            .collect()
    }
}

pub fn candidate(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": text }], "role": "model" } }]
    }))
}

pub fn api_error(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(serde_json::json!({
        "error": { "code": status, "message": message }
    }))
}

/// A local port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind probe port");
    listener.local_addr().expect("Probe port has no address").port()
}

/// Matcher for generateContent calls carrying the configured key.
pub fn generate_content() -> wiremock::MockBuilder {
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(query_param("key", TEST_API_KEY))
}
