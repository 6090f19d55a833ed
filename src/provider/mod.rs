pub(crate) mod constants;
pub(crate) mod gemini;

pub use gemini::{Credentials, GeminiConfig, GeminiEndpoint, GeminiSampler, ResponseFormat};

/// Backend a request is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// Gemini Developer API, authenticated with an API key
    GeminiApi,
    /// Vertex AI, bound to a project and location
    VertexAi,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::GeminiApi => write!(f, "GeminiApi"),
            Provider::VertexAi => write!(f, "VertexAi"),
        }
    }
}

impl Provider {
    /// Environment variable holding this backend's primary credential
    pub fn default_credential_env_var(&self) -> &'static str {
        match self {
            Provider::GeminiApi => constants::gemini::API_KEY_ENV_VAR,
            Provider::VertexAi => constants::vertex::PROJECT_ENV_VAR,
        }
    }
}
