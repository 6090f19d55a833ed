//! Single-shot HTTP client used by the completion transport.
//!
//! Retries are not handled here: the sampler rebuilds the whole client between
//! attempts, see [`crate::core::retry`].

use std::sync::Arc;
use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use super::error::LlmError;

/// Callback invoked with a request or response body.
pub type Inspector = Arc<dyn Fn(&serde_json::Value) + Send + Sync>;

/// Hooks for observing raw JSON bodies, mostly useful while debugging prompts.
#[derive(Clone, Default)]
pub struct InspectorConfig {
    pub request_inspector: Option<Inspector>,
    pub response_inspector: Option<Inspector>,
}

impl std::fmt::Debug for InspectorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InspectorConfig")
            .field("request_inspector", &self.request_inspector.is_some())
            .field("response_inspector", &self.response_inspector.is_some())
            .finish()
    }
}

/// Configuration for the per-attempt HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Total time allowed for a single attempt (default: 10 minutes, long enough
    /// for a full-length generation)
    pub timeout: Duration,
    /// Overrides the default `gemsample/<version>` user agent
    pub user_agent: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(600),
            user_agent: None,
        }
    }
}

pub struct HttpClient {
    client: reqwest::Client,
    inspector_config: Option<InspectorConfig>,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(
        config: &HttpClientConfig,
        inspector_config: Option<InspectorConfig>,
    ) -> Result<Self, LlmError> {
        let default_ua = format!("gemsample/{}", env!("CARGO_PKG_VERSION"));
        let ua = config.user_agent.as_deref().unwrap_or(&default_ua);

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(ua)
            .build()
            .map_err(|e| {
                LlmError::ProviderConfiguration(format!("Failed to build reqwest client: {e}"))
            })?;

        Ok(Self {
            client,
            inspector_config,
        })
    }

    /// POST a JSON body once and deserialize the JSON reply.
    ///
    /// Non-success statuses become [`LlmError::Api`] carrying the status code, so
    /// the caller can decide whether the failure is worth retrying.
    #[tracing::instrument(
        name = "http_post_json",
        skip(self, headers, body),
        fields(url = %url),
        err
    )]
    pub async fn post_json<Req, Res>(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &Req,
    ) -> Result<Res, LlmError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let body_value = serde_json::to_value(body).map_err(|e| LlmError::Parse {
            message: "Failed to serialize request".to_string(),
            source: Box::new(e),
        })?;

        if let Some(inspector) = self
            .inspector_config
            .as_ref()
            .and_then(|config| config.request_inspector.as_ref())
        {
            inspector(&body_value);
        }

        let mut req_builder = self.client.post(url).json(&body_value);
        for (name, value) in headers {
            req_builder = req_builder.header(name, value);
        }

        let res = req_builder.send().await.map_err(|e| LlmError::Network {
            message: "Request failed".to_string(),
            source: Box::new(e),
        })?;

        let status = res.status();
        let response_text = res.text().await.map_err(|e| LlmError::Network {
            message: "Failed to read response body".to_string(),
            source: Box::new(e),
        })?;

        if !status.is_success() {
            warn!(status = %status, "API returned error status");

            if let Some(inspector) = self
                .inspector_config
                .as_ref()
                .and_then(|config| config.response_inspector.as_ref())
            {
                let error_value = serde_json::from_str(&response_text).unwrap_or_else(|_| {
                    serde_json::json!({
                        "error": response_text,
                        "status_code": status.as_u16()
                    })
                });
                inspector(&error_value);
            }

            return Err(LlmError::Api {
                message: format!("Gemini API error ({status}): {response_text}"),
                status_code: Some(status.as_u16()),
                source: None,
            });
        }

        debug!(status = %status, "HTTP request successful");

        let response_value: serde_json::Value =
            serde_json::from_str(&response_text).map_err(|e| LlmError::Parse {
                message: "Failed to parse response as JSON".to_string(),
                source: Box::new(e),
            })?;

        if let Some(inspector) = self
            .inspector_config
            .as_ref()
            .and_then(|config| config.response_inspector.as_ref())
        {
            inspector(&response_value);
        }

        serde_json::from_value(response_value).map_err(|e| LlmError::Parse {
            message: "Failed to parse API response".to_string(),
            source: Box::new(e),
        })
    }
}
