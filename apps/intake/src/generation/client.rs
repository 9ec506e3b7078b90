//! HTTP client for the external generation service.
//!
//! One POST per submission. No retries and no timeout: a failed call is
//! reported once and the user decides whether to submit again.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::generation::{GenerationError, GenerationService};
use crate::models::intake::{GeneratedContent, IntakeRequest};

/// Path appended to the configured base URL.
pub const GENERATE_PATH: &str = "/api/generate";

#[derive(Clone)]
pub struct HttpGenerationService {
    client: Client,
    base_url: Option<String>,
}

impl HttpGenerationService {
    /// `base_url` is expected without a trailing slash (see `Config`).
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn endpoint(&self) -> Result<String, GenerationError> {
        self.base_url
            .as_deref()
            .map(|base| format!("{base}{GENERATE_PATH}"))
            .ok_or(GenerationError::MissingBaseUrl)
    }
}

#[async_trait]
impl GenerationService for HttpGenerationService {
    async fn generate(&self, request: &IntakeRequest) -> Result<GeneratedContent, GenerationError> {
        let url = self.endpoint()?;

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Generation service returned {}: {}", status, body);
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        // Read as text first so a malformed body is a Decode error, not Http.
        let body = response.text().await?;
        let content: GeneratedContent = serde_json::from_str(&body)?;

        debug!(
            "Generation succeeded: hooks={}, outlines={}, posts={}",
            content.hooks.len(),
            content.post_outlines.len(),
            content.full_posts.len()
        );

        Ok(content)
    }

    fn describe(&self) -> String {
        match &self.base_url {
            Some(base) => format!("{base}{GENERATE_PATH}"),
            None => "unconfigured generation service".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    use super::*;
    use crate::models::intake::Tone;

    type Received = Arc<Mutex<Vec<Value>>>;

    /// Binds a stub generation service on an ephemeral port and returns its base URL.
    async fn spawn_stub(status: StatusCode, body: &'static str, received: Received) -> String {
        async fn handler(
            State((status, body, received)): State<(StatusCode, &'static str, Received)>,
            Json(payload): Json<Value>,
        ) -> (StatusCode, String) {
            received.lock().unwrap().push(payload);
            (status, body.to_string())
        }

        let app = Router::new()
            .route(GENERATE_PATH, post(handler))
            .with_state((status, body, received));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn request() -> IntakeRequest {
        IntakeRequest {
            raw_input: "Founders keep rewriting the same post".to_string(),
            product: "LinkedIn content agency".to_string(),
            audience: "SaaS founders".to_string(),
            tone: Tone::Story,
        }
    }

    #[tokio::test]
    async fn test_generate_posts_all_four_fields_once() {
        let received: Received = Arc::default();
        let body = r#"{"hooks":["A","B"],"postOutlines":["C"],"fullPosts":["D\nE"]}"#;
        let base = spawn_stub(StatusCode::OK, body, received.clone()).await;

        let service = HttpGenerationService::new(Some(base));
        let content = service.generate(&request()).await.unwrap();

        assert_eq!(content.hooks, vec!["A", "B"]);
        assert_eq!(content.post_outlines, vec!["C"]);
        assert_eq!(content.full_posts, vec!["D\nE"]);

        let calls = received.lock().unwrap();
        assert_eq!(calls.len(), 1, "exactly one outbound call");
        assert_eq!(
            calls[0],
            json!({
                "rawInput": "Founders keep rewriting the same post",
                "product": "LinkedIn content agency",
                "audience": "SaaS founders",
                "tone": "story"
            })
        );
    }

    #[tokio::test]
    async fn test_server_error_maps_to_status_error_without_retry() {
        let received: Received = Arc::default();
        let base = spawn_stub(StatusCode::INTERNAL_SERVER_ERROR, "boom", received.clone()).await;

        let service = HttpGenerationService::new(Some(base));
        let err = service.generate(&request()).await.unwrap_err();

        match err {
            GenerationError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
        assert_eq!(received.lock().unwrap().len(), 1, "no retry on 5xx");
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let received: Received = Arc::default();
        let base = spawn_stub(StatusCode::OK, r#"{"hooks":"nope"}"#, received).await;

        let service = HttpGenerationService::new(Some(base));
        let err = service.generate(&request()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Decode(_)));
    }

    #[tokio::test]
    async fn test_missing_base_url_fails_before_any_request() {
        let service = HttpGenerationService::new(None);
        let err = service.generate(&request()).await.unwrap_err();
        assert!(matches!(err, GenerationError::MissingBaseUrl));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_http_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let service = HttpGenerationService::new(Some(format!("http://{addr}")));
        let err = service.generate(&request()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Http(_)));
    }

    #[test]
    fn test_describe_names_endpoint() {
        let service = HttpGenerationService::new(Some("http://gen.local".to_string()));
        assert_eq!(service.describe(), "http://gen.local/api/generate");
        assert_eq!(
            HttpGenerationService::new(None).describe(),
            "unconfigured generation service"
        );
    }
}
