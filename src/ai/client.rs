//! Remote model (Gemini) API client module
//!
//! Encapsulates the single-turn `generateContent` call used to answer
//! customer questions.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::info;

use crate::errors::ChatError;

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f64,
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 1024,
        }
    }
}

/// A hosted generative model that turns one prompt into one block of text.
///
/// An empty string is a valid success value; callers decide what to show
/// instead.
#[async_trait]
pub trait RemoteModel: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent, the provider answers
    /// with a non-success status, the response body is not JSON, or the
    /// provider blocked the reply.
    async fn generate_content(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ChatError>;

    fn model_name(&self) -> &str;
}

/// Gemini API client for generating replies
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model_name: String,
    base_url: String,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        api_key: String,
        model_name: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, ChatError> {
        let http = Client::builder().timeout(timeout).build().map_err(|e| {
            ChatError::HttpError(format!("Failed to build Gemini HTTP client: {e}"))
        })?;

        Ok(Self {
            http,
            api_key,
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model_name
        )
    }
}

#[async_trait]
impl RemoteModel for GeminiClient {
    async fn generate_content(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ChatError> {
        #[cfg(feature = "debug-logs")]
        info!("Using Gemini prompt:\n{}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            model = %self.model_name,
            prompt_chars = prompt.chars().count(),
            "Requesting Gemini completion"
        );

        let request_body = build_request_body(prompt, params);

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ChatError::HttpError(format!("Gemini API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(ChatError::RemoteModelError(format!(
                "Gemini API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            ChatError::RemoteModelError(format!("Failed to parse Gemini response: {e}"))
        })?;

        extract_text(&response_json)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// Builds the `generateContent` body: one user turn carrying the whole prompt.
#[must_use]
pub fn build_request_body(prompt: &str, params: &GenerationParams) -> Value {
    json!({
        "contents": [
            {
                "role": "user",
                "parts": [{ "text": prompt }]
            }
        ],
        "generationConfig": {
            "temperature": params.temperature,
            "maxOutputTokens": params.max_output_tokens
        }
    })
}

/// Finish reasons for which Gemini withholds the candidate's text.
const BLOCKED_FINISH_REASONS: &[&str] = &["SAFETY", "RECITATION", "LANGUAGE"];

/// Joins every text part of the first candidate. Missing candidates or parts
/// yield an empty string.
///
/// # Errors
///
/// Returns an error if the prompt was blocked (`promptFeedback.blockReason`
/// with no candidates) or the first candidate stopped for a blocked reason.
pub fn extract_text(response_json: &Value) -> Result<String, ChatError> {
    let first = response_json
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|candidates| candidates.first());

    let Some(candidate) = first else {
        if let Some(reason) = response_json
            .get("promptFeedback")
            .and_then(|f| f.get("blockReason"))
        {
            return Err(ChatError::RemoteModelError(format!(
                "Prompt blocked by Gemini: {reason}"
            )));
        }
        return Ok(String::new());
    };

    if let Some(reason) = candidate.get("finishReason").and_then(|r| r.as_str()) {
        if BLOCKED_FINISH_REASONS.contains(&reason) {
            return Err(ChatError::RemoteModelError(format!(
                "Candidate blocked by Gemini: {reason}"
            )));
        }
    }

    Ok(candidate
        .get("content")
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.as_array())
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
                .collect::<String>()
        })
        .unwrap_or_default())
}
