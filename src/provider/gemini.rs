//! Gemini sampler, routed either to the Developer API or to Vertex AI.

use std::str::FromStr;

use async_trait::async_trait;
use schemars::{JsonSchema, schema_for};
use serde_json::Value;
use tracing::{debug, warn};

use crate::completions::{
    CompletionClient, CompletionProviderConfig, Content, ContentRole, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, MIME_JSON, MIME_TEXT, SafetySetting,
    SystemInstruction,
};
use crate::core::{
    ChatRole, HttpClientConfig, InspectorConfig, LlmError, Message, ResponseMetadata, RetryPolicy,
    Sampler, SamplerResponse,
};
use crate::provider::Provider;
use crate::provider::constants::{gemini, vertex};

/// Reported in every [`ResponseMetadata`], whatever the provider said.
const FINISH_REASON: &str = "stop";

/// Output mode requested when no schema is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Text,
    /// Free-form JSON output
    JsonObject,
}

impl FromStr for ResponseFormat {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ResponseFormat::Text),
            "json_object" => Ok(ResponseFormat::JsonObject),
            other => Err(LlmError::ProviderConfiguration(format!(
                "Unsupported response format '{other}', expected 'text' or 'json_object'"
            ))),
        }
    }
}

/// Credentials resolved once, when the sampler is built.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub project: Option<String>,
    pub api_key: Option<String>,
    /// Bearer token for Vertex AI, minted outside this crate
    pub access_token: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("project", &self.project)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl Credentials {
    /// Pick credentials from explicit and environment-provided values.
    ///
    /// The explicit project wins over the environment one. Empty strings count
    /// as unset. Fails when neither a project nor an API key is available.
    pub fn resolve(
        explicit_project: Option<String>,
        env_project: Option<String>,
        env_api_key: Option<String>,
        env_access_token: Option<String>,
    ) -> Result<Self, LlmError> {
        let project = non_empty(explicit_project).or_else(|| non_empty(env_project));
        let api_key = non_empty(env_api_key);

        if project.is_none() && api_key.is_none() {
            return Err(LlmError::ProviderConfiguration(format!(
                "Missing credentials ({} or {})",
                Provider::VertexAi.default_credential_env_var(),
                Provider::GeminiApi.default_credential_env_var()
            )));
        }

        Ok(Self {
            project,
            api_key,
            access_token: non_empty(env_access_token),
        })
    }

    /// Resolve against `GOOGLE_CLOUD_PROJECT`, `GOOGLE_API_KEY` and
    /// `GOOGLE_CLOUD_ACCESS_TOKEN`.
    pub fn from_env(explicit_project: Option<String>) -> Result<Self, LlmError> {
        Self::resolve(
            explicit_project,
            std::env::var(vertex::PROJECT_ENV_VAR).ok(),
            std::env::var(gemini::API_KEY_ENV_VAR).ok(),
            std::env::var(vertex::ACCESS_TOKEN_ENV_VAR).ok(),
        )
    }
}

/// Target of one attempt. Rebuilt for every client, never stored.
#[derive(Clone)]
#[cfg_attr(test, derive(Debug))]
pub enum GeminiEndpoint {
    Developer {
        base_url: String,
        api_key: String,
    },
    Vertex {
        base_url: String,
        project: String,
        location: String,
        access_token: Option<String>,
        api_key: Option<String>,
    },
}

impl GeminiEndpoint {
    /// Vertex when a project is known, the Developer API otherwise.
    ///
    /// A Vertex endpoint needs either a bearer token or an API key; a bare
    /// project is rejected here rather than failing every request with 401.
    pub fn select(
        credentials: &Credentials,
        location: &str,
        base_url: Option<&str>,
    ) -> Result<Self, LlmError> {
        if let Some(project) = &credentials.project {
            if credentials.access_token.is_none() && credentials.api_key.is_none() {
                return Err(LlmError::ProviderConfiguration(format!(
                    "Vertex AI project '{project}' has no credential: set {} or {}",
                    vertex::ACCESS_TOKEN_ENV_VAR,
                    gemini::API_KEY_ENV_VAR
                )));
            }

            return Ok(GeminiEndpoint::Vertex {
                base_url: base_url
                    .map(str::to_string)
                    .unwrap_or_else(|| vertex::api_base(location)),
                project: project.clone(),
                location: location.to_string(),
                access_token: credentials.access_token.clone(),
                api_key: credentials.api_key.clone(),
            });
        }

        match &credentials.api_key {
            Some(api_key) => Ok(GeminiEndpoint::Developer {
                base_url: base_url.unwrap_or(gemini::API_BASE).to_string(),
                api_key: api_key.clone(),
            }),
            None => Err(LlmError::ProviderConfiguration(
                "Neither a project nor an API key is configured".to_string(),
            )),
        }
    }
}

impl CompletionProviderConfig for GeminiEndpoint {
    fn provider(&self) -> Provider {
        match self {
            GeminiEndpoint::Developer { .. } => Provider::GeminiApi,
            GeminiEndpoint::Vertex { .. } => Provider::VertexAi,
        }
    }

    fn base_url(&self) -> &str {
        match self {
            GeminiEndpoint::Developer { base_url, .. } | GeminiEndpoint::Vertex { base_url, .. } => {
                base_url.as_str()
            }
        }
    }

    fn endpoint(&self, model: &str) -> String {
        match self {
            GeminiEndpoint::Developer { .. } => {
                format!("/v1beta/models/{model}:generateContent")
            }
            GeminiEndpoint::Vertex {
                project, location, ..
            } => format!(
                "/v1/projects/{project}/locations/{location}/publishers/google/models/{model}:generateContent"
            ),
        }
    }

    fn auth_header(&self) -> Option<(String, String)> {
        match self {
            GeminiEndpoint::Developer { api_key, .. } => {
                Some((gemini::API_KEY_HEADER.to_string(), api_key.clone()))
            }
            GeminiEndpoint::Vertex {
                access_token: Some(token),
                ..
            } => Some(("Authorization".to_string(), format!("Bearer {token}"))),
            GeminiEndpoint::Vertex {
                api_key: Some(api_key),
                ..
            } => Some((gemini::API_KEY_HEADER.to_string(), api_key.clone())),
            GeminiEndpoint::Vertex { .. } => None,
        }
    }
}

/// Construction options for [`GeminiSampler`]
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub model: String,
    /// Default system instruction; a `system` message in the conversation replaces it
    pub system_message: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Explicit Vertex project, preferred over `GOOGLE_CLOUD_PROJECT`
    pub project: Option<String>,
    pub location: String,
    pub response_format: ResponseFormat,
    /// Structured-output contract; takes precedence over `response_format`
    pub response_schema: Option<Value>,
    pub safety_settings: Vec<SafetySetting>,
    /// Per-attempt HTTP limits. The default timeout is 10 minutes; an attempt
    /// that runs past it fails with [`LlmError::Network`] and is not retried.
    pub http_config: HttpClientConfig,
    pub retry_policy: RetryPolicy,
    /// Overrides the endpoint host, mainly for tests and proxies
    pub base_url: Option<String>,
    pub inspector_config: Option<InspectorConfig>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: gemini::DEFAULT_MODEL.to_string(),
            system_message: None,
            temperature: gemini::DEFAULT_TEMPERATURE,
            max_tokens: gemini::DEFAULT_MAX_TOKENS,
            project: None,
            location: vertex::DEFAULT_LOCATION.to_string(),
            response_format: ResponseFormat::Text,
            response_schema: None,
            safety_settings: SafetySetting::permissive(),
            http_config: HttpClientConfig::default(),
            retry_policy: RetryPolicy::default(),
            base_url: None,
            inspector_config: None,
        }
    }
}

impl GeminiConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }

    pub fn with_system_message(mut self, system_message: impl Into<String>) -> Self {
        self.system_message = Some(system_message.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_response_format(mut self, response_format: ResponseFormat) -> Self {
        self.response_format = response_format;
        self
    }

    pub fn with_response_schema(mut self, schema: Value) -> Self {
        self.response_schema = Some(schema);
        self
    }

    /// Derive the response schema from `T`.
    pub fn with_response_schema_for<T: JsonSchema>(self) -> Self {
        let mut schema = schema_for!(T).to_value();
        if let Some(object) = schema.as_object_mut() {
            object.remove("$schema");
        }
        self.with_response_schema(schema)
    }

    /// Replace the default permissive safety policy.
    pub fn with_safety_settings(mut self, safety_settings: Vec<SafetySetting>) -> Self {
        self.safety_settings = safety_settings;
        self
    }

    pub fn with_http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = config;
        self
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_inspector_config(mut self, config: InspectorConfig) -> Self {
        self.inspector_config = Some(config);
        self
    }

    /// `application/json` when a schema or JSON mode is requested.
    pub fn response_mime_type(&self) -> &'static str {
        if self.response_schema.is_some() || self.response_format == ResponseFormat::JsonObject {
            MIME_JSON
        } else {
            MIME_TEXT
        }
    }
}

/// Sampler for Gemini models.
///
/// Holds only immutable configuration. Each attempt of [`Sampler::call`] builds
/// its own HTTP client, so one sampler can be shared freely between tasks.
///
/// ```rust,no_run
/// use gemsample::{GeminiConfig, GeminiSampler, Message, Sampler};
///
/// # async fn run() -> Result<(), gemsample::LlmError> {
/// let sampler = GeminiSampler::new(GeminiConfig::default().with_system_message("Be terse."))?;
/// let response = sampler.call(&[Message::user("2 + 2?")]).await?;
/// println!("{}", response.response_text);
/// # Ok(())
/// # }
/// ```
pub struct GeminiSampler {
    config: GeminiConfig,
    credentials: Credentials,
}

impl GeminiSampler {
    /// Build a sampler, resolving credentials from the process environment.
    ///
    /// Fails with [`LlmError::ProviderConfiguration`] when neither a project nor an
    /// API key can be found.
    pub fn new(config: GeminiConfig) -> Result<Self, LlmError> {
        let credentials = Credentials::from_env(config.project.clone())?;
        Self::with_credentials(config, credentials)
    }

    /// Build a sampler from already resolved credentials.
    ///
    /// `config.project` is not consulted; the credentials are taken as they are.
    pub fn with_credentials(config: GeminiConfig, credentials: Credentials) -> Result<Self, LlmError> {
        config.retry_policy.validate()?;
        GeminiEndpoint::select(&credentials, &config.location, config.base_url.as_deref())?;
        Ok(Self {
            config,
            credentials,
        })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn provider(&self) -> Provider {
        if self.credentials.project.is_some() {
            Provider::VertexAi
        } else {
            Provider::GeminiApi
        }
    }

    /// Split a conversation into the effective system instruction and provider turns.
    ///
    /// The last `system` message replaces the configured default. `assistant` turns
    /// become `model` turns and unknown roles are dropped.
    pub fn convert_messages(&self, messages: &[Message]) -> (Option<String>, Vec<Content>) {
        let mut system_instruction = self.config.system_message.clone();
        let mut contents = Vec::with_capacity(messages.len());

        for message in messages {
            match &message.role {
                ChatRole::System => system_instruction = Some(message.content.clone()),
                ChatRole::User => contents.push(Content::text(ContentRole::User, &message.content)),
                ChatRole::Assistant => {
                    contents.push(Content::text(ContentRole::Model, &message.content))
                }
                ChatRole::Other(role) => {
                    debug!(role = %role, "Dropping message with unsupported role");
                }
            }
        }

        (system_instruction, contents)
    }

    pub fn build_request(&self, messages: &[Message]) -> GenerateContentRequest {
        let (system_instruction, contents) = self.convert_messages(messages);

        GenerateContentRequest {
            contents,
            system_instruction: system_instruction.map(SystemInstruction::text),
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_tokens,
                candidate_count: 1,
                response_mime_type: self.config.response_mime_type().to_string(),
                response_schema: self.config.response_schema.clone(),
            },
            safety_settings: self.config.safety_settings.clone(),
        }
    }

    /// One attempt with a client that is dropped when the attempt ends.
    async fn generate_once(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        let endpoint = GeminiEndpoint::select(
            &self.credentials,
            &self.config.location,
            self.config.base_url.as_deref(),
        )?;
        let client = CompletionClient::new(
            endpoint,
            &self.config.http_config,
            self.config.inspector_config.clone(),
        )?;

        client.generate_content(&self.config.model, request).await
    }
}

#[async_trait]
impl Sampler for GeminiSampler {
    #[tracing::instrument(
        name = "gemini_call",
        skip(self, messages),
        fields(
            model = %self.config.model,
            provider = %self.provider(),
            message_count = messages.len()
        ),
        err
    )]
    async fn call(&self, messages: &[Message]) -> Result<SamplerResponse, LlmError> {
        let request = self.build_request(messages);

        let response = self
            .config
            .retry_policy
            .execute(|_| self.generate_once(&request))
            .await?;

        if let Some(reason) = response.block_reason() {
            warn!(block_reason = %reason, "Prompt was blocked by the provider");
        }

        let response_text = response.text().unwrap_or_default();
        debug!(
            text_len = response_text.len(),
            finish_reason = response.finish_reason().unwrap_or("none"),
            "Received completion"
        );

        Ok(SamplerResponse {
            response_text,
            response_metadata: ResponseMetadata {
                usage: response.usage(),
                finish_reason: FINISH_REASON.to_string(),
                provider_finish_reason: response.finish_reason().map(str::to_string),
            },
            actual_queried_message_list: messages.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn api_key_credentials() -> Credentials {
        Credentials::resolve(None, None, Some("test-key".to_string()), None).unwrap()
    }

    fn sampler(config: GeminiConfig) -> GeminiSampler {
        GeminiSampler::with_credentials(config, api_key_credentials()).unwrap()
    }

    #[test]
    fn missing_credentials_fail_construction() {
        let err = Credentials::resolve(None, None, None, None).unwrap_err();
        match err {
            LlmError::ProviderConfiguration(message) => {
                assert!(message.contains("GOOGLE_CLOUD_PROJECT"));
                assert!(message.contains("GOOGLE_API_KEY"));
            }
            other => panic!("Expected ProviderConfiguration, got {other:?}"),
        }

        let err = Credentials::resolve(Some(String::new()), Some(String::new()), None, None);
        assert!(matches!(err, Err(LlmError::ProviderConfiguration(_))));
    }

    #[test]
    fn explicit_project_wins_over_environment() {
        let credentials = Credentials::resolve(
            Some("explicit".to_string()),
            Some("from-env".to_string()),
            Some("key".to_string()),
            None,
        )
        .unwrap();
        assert_eq!(credentials.project.as_deref(), Some("explicit"));
        assert_eq!(credentials.api_key.as_deref(), Some("key"));

        let credentials =
            Credentials::resolve(None, Some("from-env".to_string()), None, None).unwrap();
        assert_eq!(credentials.project.as_deref(), Some("from-env"));
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let credentials = Credentials::resolve(
            None,
            Some("proj".to_string()),
            Some("super-secret".to_string()),
            Some("token-secret".to_string()),
        )
        .unwrap();
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("proj"));
        assert!(!rendered.contains("super-secret"));
        assert!(!rendered.contains("token-secret"));
    }

    #[test]
    fn last_system_message_overrides_default() {
        let sampler = sampler(GeminiConfig::default().with_system_message("default"));
        let (system, contents) = sampler.convert_messages(&[
            Message::system("first"),
            Message::user("Hi"),
            Message::system("second"),
        ]);

        assert_eq!(system.as_deref(), Some("second"));
        assert_eq!(contents, vec![Content::text(ContentRole::User, "Hi")]);
    }

    #[test]
    fn default_system_message_used_without_override() {
        let sampler = sampler(GeminiConfig::default().with_system_message("default"));
        let (system, _) = sampler.convert_messages(&[Message::user("Hi")]);
        assert_eq!(system.as_deref(), Some("default"));

        let sampler = self::sampler(GeminiConfig::default());
        let (system, contents) = sampler.convert_messages(&[]);
        assert!(system.is_none());
        assert!(contents.is_empty());
    }

    #[test]
    fn assistant_becomes_model_and_unknown_roles_are_dropped() {
        let sampler = sampler(GeminiConfig::default());
        let (_, contents) = sampler.convert_messages(&[
            Message::user("Q1"),
            Message::assistant("A1"),
            Message::new("developer", "dropped"),
            Message::user("Q2"),
        ]);

        assert_eq!(
            contents,
            vec![
                Content::text(ContentRole::User, "Q1"),
                Content::text(ContentRole::Model, "A1"),
                Content::text(ContentRole::User, "Q2"),
            ]
        );
    }

    #[test]
    fn mime_type_follows_schema_then_format() {
        assert_eq!(GeminiConfig::default().response_mime_type(), "text/plain");
        assert_eq!(
            GeminiConfig::default()
                .with_response_format(ResponseFormat::JsonObject)
                .response_mime_type(),
            "application/json"
        );

        let config = GeminiConfig::default()
            .with_response_format(ResponseFormat::JsonObject)
            .with_response_schema(json!({"type": "OBJECT"}));
        assert_eq!(config.response_mime_type(), "application/json");

        let request = sampler(config).build_request(&[Message::user("Hi")]);
        assert_eq!(
            request.generation_config.response_schema,
            Some(json!({"type": "OBJECT"}))
        );
    }

    #[test]
    fn response_format_parses_known_values() {
        assert_eq!(
            "json_object".parse::<ResponseFormat>().unwrap(),
            ResponseFormat::JsonObject
        );
        assert_eq!("text".parse::<ResponseFormat>().unwrap(), ResponseFormat::Text);
        assert!("yaml".parse::<ResponseFormat>().is_err());
    }

    #[test]
    fn schema_derived_from_type_has_no_meta_schema() {
        #[derive(JsonSchema)]
        #[allow(dead_code)]
        struct Verdict {
            answer: String,
            confidence: f32,
        }

        let config = GeminiConfig::default().with_response_schema_for::<Verdict>();
        let schema = config.response_schema.unwrap();
        assert!(schema.get("$schema").is_none());
        assert_eq!(schema["type"], "object");
        assert!(schema["properties"].get("answer").is_some());
    }

    #[test]
    fn request_uses_configured_generation_options() {
        let sampler = sampler(
            GeminiConfig::new("gemini-2.0-flash")
                .with_temperature(0.7)
                .with_max_tokens(256),
        );
        let request = sampler.build_request(&[Message::user("Hi")]);

        assert_eq!(request.generation_config.temperature, 0.7);
        assert_eq!(request.generation_config.max_output_tokens, 256);
        assert_eq!(request.generation_config.candidate_count, 1);
        assert_eq!(request.safety_settings, SafetySetting::permissive());
        assert!(request.system_instruction.is_none());
    }

    #[test]
    fn developer_endpoint_uses_api_key_header() {
        let endpoint = GeminiEndpoint::select(&api_key_credentials(), "us-central1", None).unwrap();

        assert_eq!(endpoint.provider(), Provider::GeminiApi);
        assert_eq!(endpoint.base_url(), "https://generativelanguage.googleapis.com");
        assert_eq!(
            endpoint.endpoint("gemini-1.5-pro-002"),
            "/v1beta/models/gemini-1.5-pro-002:generateContent"
        );
        assert_eq!(
            endpoint.auth_header(),
            Some(("x-goog-api-key".to_string(), "test-key".to_string()))
        );
    }

    #[test]
    fn vertex_endpoint_is_bound_to_project_and_location() {
        let credentials = Credentials::resolve(
            Some("my-proj".to_string()),
            None,
            Some("key".to_string()),
            Some("ya29.token".to_string()),
        )
        .unwrap();
        let endpoint = GeminiEndpoint::select(&credentials, "europe-west4", None).unwrap();

        assert_eq!(endpoint.provider(), Provider::VertexAi);
        assert_eq!(endpoint.base_url(), "https://europe-west4-aiplatform.googleapis.com");
        assert_eq!(
            endpoint.endpoint("gemini-1.5-pro-002"),
            "/v1/projects/my-proj/locations/europe-west4/publishers/google/models/gemini-1.5-pro-002:generateContent"
        );
        assert_eq!(
            endpoint.auth_header(),
            Some(("Authorization".to_string(), "Bearer ya29.token".to_string()))
        );
    }

    #[test]
    fn vertex_without_token_falls_back_to_api_key() {
        let credentials =
            Credentials::resolve(Some("p".to_string()), None, Some("key".to_string()), None)
                .unwrap();
        let endpoint = GeminiEndpoint::select(&credentials, "global", None).unwrap();
        assert_eq!(endpoint.base_url(), "https://aiplatform.googleapis.com");
        assert_eq!(
            endpoint.auth_header(),
            Some(("x-goog-api-key".to_string(), "key".to_string()))
        );
    }

    #[test]
    fn vertex_project_without_token_or_key_fails_construction() {
        let credentials = Credentials::resolve(Some("proj".to_string()), None, None, None).unwrap();

        let err = GeminiEndpoint::select(&credentials, "us-central1", None).unwrap_err();
        match err {
            LlmError::ProviderConfiguration(message) => {
                assert!(message.contains("GOOGLE_CLOUD_ACCESS_TOKEN"));
                assert!(message.contains("GOOGLE_API_KEY"));
            }
            other => panic!("Expected ProviderConfiguration, got {other:?}"),
        }

        let result = GeminiSampler::with_credentials(GeminiConfig::default(), credentials);
        assert!(matches!(result, Err(LlmError::ProviderConfiguration(_))));
    }

    #[test]
    fn hand_built_credentials_without_project_or_key_are_rejected() {
        let credentials = Credentials {
            project: None,
            api_key: None,
            access_token: Some("token".to_string()),
        };
        let result = GeminiSampler::with_credentials(GeminiConfig::default(), credentials);
        assert!(matches!(result, Err(LlmError::ProviderConfiguration(_))));
    }

    #[test]
    fn invalid_retry_policy_fails_construction() {
        let config = GeminiConfig::default()
            .with_retry_policy(RetryPolicy::new(10, std::time::Duration::from_secs(2), f64::NAN));
        let result = GeminiSampler::with_credentials(config, api_key_credentials());
        assert!(matches!(result, Err(LlmError::ProviderConfiguration(_))));
    }

    #[test]
    fn default_attempt_timeout_leaves_room_for_long_generations() {
        let config = GeminiConfig::default();
        assert_eq!(config.http_config.timeout, std::time::Duration::from_secs(600));
    }

    #[test]
    fn sampler_is_shareable_across_tasks() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeminiSampler>();
    }
}
