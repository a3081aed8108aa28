//! Reply generation: remote model first, keyword fallback second.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use super::client::{GeminiClient, GenerationParams, RemoteModel};
use super::{local, prompt_builder};
use crate::core::config::AppConfig;
use crate::core::models::ReplySource;
use crate::errors::ChatError;

/// Shown when the remote model answers successfully but with no text.
pub const EMPTY_REPLY: &str = "感謝你的提問。請稍候或通過聯絡表單與我們聯繫。";

/// Produces a reply for every message. Errors from the remote model are
/// logged and replaced by the local keyword reply; callers never see them.
pub struct ResponseGenerator {
    remote: Option<Arc<dyn RemoteModel>>,
    params: GenerationParams,
    timeout: Duration,
}

impl ResponseGenerator {
    #[must_use]
    pub fn new(remote: Option<Arc<dyn RemoteModel>>, timeout: Duration) -> Self {
        Self {
            remote,
            params: GenerationParams::default(),
            timeout,
        }
    }

    /// A generator that never makes a network call.
    #[must_use]
    pub fn local_only() -> Self {
        Self::new(None, Duration::ZERO)
    }

    /// Builds a Gemini-backed generator when a credential is configured,
    /// otherwise a local-only one.
    ///
    /// # Errors
    ///
    /// Returns an error if the Gemini HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, ChatError> {
        let timeout = Duration::from_secs(config.remote_timeout_secs);

        let Some(api_key) = config.gemini_api_key.clone() else {
            warn!("GEMINI_API_KEY not configured, using local replies");
            return Ok(Self::local_only());
        };

        let client = GeminiClient::new(
            api_key,
            config.model_name().to_string(),
            config.api_base().to_string(),
            timeout,
        )?;

        let remote: Arc<dyn RemoteModel> = Arc::new(client);
        Ok(Self::new(Some(remote), timeout))
    }

    #[must_use]
    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub async fn generate(&self, message: &str) -> String {
        self.generate_with_source(message).await.0
    }

    pub async fn generate_with_source(&self, message: &str) -> (String, ReplySource) {
        let Some(remote) = &self.remote else {
            return (local::respond(message).to_string(), ReplySource::Local);
        };

        match self.try_remote(remote.as_ref(), message).await {
            Ok(text) if text.is_empty() => {
                warn!(model = %remote.model_name(), "Gemini returned an empty reply");
                (EMPTY_REPLY.to_string(), ReplySource::Remote)
            }
            Ok(text) => {
                info!(model = %remote.model_name(), "Gemini reply generated");
                (text, ReplySource::Remote)
            }
            Err(e) => {
                error!(model = %remote.model_name(), "Gemini API error: {}", e);
                (local::respond(message).to_string(), ReplySource::Local)
            }
        }
    }

    async fn try_remote(
        &self,
        remote: &dyn RemoteModel,
        message: &str,
    ) -> Result<String, ChatError> {
        let prompt = prompt_builder::build_prompt(message);

        tokio::time::timeout(self.timeout, remote.generate_content(&prompt, &self.params))
            .await
            .map_err(|_| ChatError::Timeout(self.timeout.as_secs()))?
    }
}
