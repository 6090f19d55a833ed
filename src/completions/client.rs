//! Transport client for the `generateContent` method.
//!
//! A [`CompletionClient`] owns its own `reqwest::Client` and is meant to live for
//! exactly one attempt. Sharing one across concurrent calls is what produced the
//! `EBADF` socket faults the retry policy still tolerates.

use crate::{
    Provider,
    completions::{GenerateContentRequest, GenerateContentResponse},
    core::{HttpClient, HttpClientConfig, InspectorConfig, LlmError},
};

/// Where and how a completion request is sent.
pub trait CompletionProviderConfig {
    /// Model Provider
    fn provider(&self) -> Provider;

    /// Base URL for the API (e.g., `https://generativelanguage.googleapis.com`)
    fn base_url(&self) -> &str;

    /// Path of the `generateContent` method for `model`
    fn endpoint(&self, model: &str) -> String;

    /// Authentication header as (header_name, header_value) tuple, if any
    fn auth_header(&self) -> Option<(String, String)>;

    /// Additional headers to include with each request
    fn extra_headers(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

pub struct CompletionClient<P: CompletionProviderConfig> {
    pub config: P,
    http: HttpClient,
}

impl<P: CompletionProviderConfig> CompletionClient<P> {
    /// Build a client with a fresh connection pool.
    pub fn new(
        config: P,
        http_config: &HttpClientConfig,
        inspector_config: Option<InspectorConfig>,
    ) -> Result<Self, LlmError> {
        let http = HttpClient::new(http_config, inspector_config)?;
        Ok(Self { config, http })
    }

    #[tracing::instrument(
        name = "generate_content",
        skip(self, request),
        fields(
            provider = %self.config.provider(),
            base_url = %self.config.base_url(),
        ),
        err
    )]
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        let url = format!("{}{}", self.config.base_url(), self.config.endpoint(model));

        let mut headers: Vec<(String, String)> = self.config.auth_header().into_iter().collect();
        headers.extend(self.config.extra_headers());

        self.http.post_json(&url, &headers, request).await
    }
}
