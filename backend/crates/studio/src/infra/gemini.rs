//! Gemini Generation Backend
//!
//! `generateContent` over REST. One request per call, no retries, no
//! streaming.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::application::config::StudioConfig;
use crate::domain::repository::GenerationBackend;
use crate::domain::value_objects::{GenerationRequest, SamplingParams};
use crate::error::BackendError;

const API_KEY_HEADER: &str = "x-goog-api-key";

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
}

impl From<SamplingParams> for GenerationConfig {
    fn from(params: SamplingParams) -> Self {
        Self {
            temperature: params.temperature,
            top_k: params.top_k,
            top_p: params.top_p,
        }
    }
}

impl<'a> From<&'a GenerationRequest> for GenerateContentBody<'a> {
    fn from(request: &'a GenerationRequest) -> Self {
        Self {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: &request.system_instruction,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: &request.user_content,
                }],
            }],
            generation_config: request.params.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate; empty when there is none
    fn text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default()
    }
}

// ============================================================================
// Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct GeminiBackend {
    client: reqwest::Client,
    config: Arc<StudioConfig>,
}

impl GeminiBackend {
    pub fn new(config: Arc<StudioConfig>) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| BackendError::Request(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }
}

impl GenerationBackend for GeminiBackend {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, BackendError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(BackendError::MissingApiKey)?;

        let response = self
            .client
            .post(self.config.generate_url())
            .header(API_KEY_HEADER, api_key)
            .json(&GenerateContentBody::from(request))
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let decoded: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))?;

        Ok(decoded.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use serde_json::{Value, json};
    use std::sync::Mutex;

    fn request() -> GenerationRequest {
        GenerationRequest {
            system_instruction: "Be brief.".into(),
            user_content: "Cats".into(),
            params: SamplingParams::default(),
        }
    }

    #[test]
    fn test_body_shape() {
        let request = request();
        let body = serde_json::to_value(GenerateContentBody::from(&request)).unwrap();
        assert_eq!(
            body,
            json!({
                "systemInstruction": {"parts": [{"text": "Be brief."}]},
                "contents": [{"role": "user", "parts": [{"text": "Cats"}]}],
                "generationConfig": {"temperature": 0.85f32, "topK": 40, "topP": 0.95f32}
            })
        );
    }

    #[test]
    fn test_response_text_joins_parts_of_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{"text": "Hello, "}, {"text": "world"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(response.text(), "Hello, world");
    }

    #[test]
    fn test_response_without_candidates_is_empty() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.text(), "");

        let response: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"finishReason": "SAFETY"}]})).unwrap();
        assert_eq!(response.text(), "");
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_any_request() {
        let backend = GeminiBackend::new(Arc::new(StudioConfig::default())).unwrap();
        let err = backend.generate(&request()).await.unwrap_err();
        assert!(matches!(err, BackendError::MissingApiKey));
    }

    /// Serve `reply` on an ephemeral port, recording request headers and bodies
    async fn fake_backend(
        status: StatusCode,
        reply: Value,
    ) -> (String, Arc<Mutex<Vec<(HeaderMap, Value)>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = seen.clone();
        let app = axum::Router::new().route(
            "/v1beta/models/{call}",
            post(move |headers: HeaderMap, Json(body): Json<Value>| {
                let recorder = recorder.clone();
                let reply = reply.clone();
                async move {
                    recorder.lock().unwrap().push((headers, body));
                    (status, Json(reply))
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}"), seen)
    }

    fn config(base_url: String) -> Arc<StudioConfig> {
        Arc::new(StudioConfig {
            base_url,
            api_key: Some("test-key".into()),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_generate_against_fake_backend() {
        let (base_url, seen) = fake_backend(
            StatusCode::OK,
            json!({"candidates": [{"content": {"parts": [{"text": "10 ideas"}]}}]}),
        )
        .await;

        let backend = GeminiBackend::new(config(base_url)).unwrap();
        let text = backend.generate(&request()).await.unwrap();
        assert_eq!(text, "10 ideas");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0[API_KEY_HEADER], "test-key");
        assert_eq!(seen[0].1["contents"][0]["parts"][0]["text"], "Cats");
    }

    #[tokio::test]
    async fn test_error_status_is_backend_error() {
        let (base_url, _) =
            fake_backend(StatusCode::FORBIDDEN, json!({"error": {"message": "bad key"}})).await;

        let backend = GeminiBackend::new(config(base_url)).unwrap();
        let err = backend.generate(&request()).await.unwrap_err();
        assert!(matches!(err, BackendError::Status { status: 403, .. }));
    }
}
