//! Google Gemini provider implementation.
//!
//! Uses the `generateContent` REST API. A prompt bundle maps to a single
//! user turn whose parts mirror the bundle order: text blocks as `text`
//! parts, the media payload as an `inline_data` part with base64 bytes.

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use lessonlens_core::error::GenerationError;
use lessonlens_core::prompt::{PromptBundle, PromptPart};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Gemini `generateContent` client.
pub struct GeminiProvider {
    name: String,
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider for the given model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            name: "gemini".into(),
            base_url: DEFAULT_BASE_URL.into(),
            api_key: api_key.into(),
            model: model.into(),
            client,
        }
    }

    /// Create with a custom base URL (e.g., for testing or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Convert a prompt bundle to the Gemini request body.
    ///
    /// Part order is preserved exactly — the media payload stays at its
    /// fixed slot after the persona/instructions part.
    fn to_request(bundle: &PromptBundle) -> GeminiRequest {
        let parts = bundle
            .parts()
            .iter()
            .map(|part| match part {
                PromptPart::Text(text) => GeminiPart::Text { text: text.clone() },
                PromptPart::Media(payload) => GeminiPart::InlineData {
                    inline_data: InlineData {
                        mime_type: payload.mime_type.clone(),
                        data: BASE64.encode(&payload.data),
                    },
                },
            })
            .collect();

        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".into(),
                parts,
            }],
        }
    }

    /// Extract the answer text from a Gemini response.
    fn response_text(resp: GeminiResponse) -> Result<String, GenerationError> {
        let candidate = resp
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| GenerationError::InvalidResponse("no candidates returned".into()))?;

        let mut text = String::new();
        for part in candidate.content.parts {
            if let GeminiPart::Text { text: t } = part {
                if !text.is_empty() {
                    text.push('\n');
                }
                text.push_str(&t);
            }
        }

        if text.is_empty() {
            return Err(GenerationError::InvalidResponse(
                "candidate contained no text parts".into(),
            ));
        }

        Ok(text)
    }
}

#[async_trait]
impl lessonlens_core::Generator for GeminiProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, bundle: &PromptBundle) -> Result<String, GenerationError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let body = Self::to_request(bundle);

        debug!(
            model = %self.model,
            parts = bundle.len(),
            has_media = bundle.has_media(),
            "Sending generation request"
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 429 {
            return Err(GenerationError::RateLimited {
                retry_after_secs: 5,
            });
        }
        if status == 401 || status == 403 {
            return Err(GenerationError::AuthenticationFailed(
                "Invalid Gemini API key".into(),
            ));
        }
        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Gemini API error");
            return Err(GenerationError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let api_resp: GeminiResponse =
            response
                .json()
                .await
                .map_err(|e| GenerationError::InvalidResponse(format!(
                    "Failed to parse Gemini response: {e}"
                )))?;

        Self::response_text(api_resp)
    }
}

// --- Gemini API types ---

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum GeminiPart {
    Text {
        text: String,
    },
    InlineData {
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize, Deserialize)]
struct InlineData {
    mime_type: String,
    /// Base64-encoded image bytes.
    data: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}
