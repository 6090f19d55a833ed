//! # gemsample
//!
//! Gemini chat completions behind the uniform sampler convention used by
//! evaluation harnesses: a list of `{role, content}` messages goes in, one
//! normalized completion with token usage comes out.
//!
//! Requests go to Vertex AI when a project is configured (explicitly or through
//! `GOOGLE_CLOUD_PROJECT`) and to the Gemini Developer API otherwise
//! (`GOOGLE_API_KEY`). Rate limits and temporary server failures are retried
//! with exponential backoff.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gemsample::{GeminiConfig, GeminiSampler, Message, ResponseFormat, Sampler};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sampler = GeminiSampler::new(
//!         GeminiConfig::new("gemini-1.5-pro-002")
//!             .with_system_message("Answer with a JSON object.")
//!             .with_response_format(ResponseFormat::JsonObject),
//!     )?;
//!
//!     let response = sampler
//!         .call(&[Message::user("What is the capital of France?")])
//!         .await?;
//!
//!     println!("{}", response.response_text);
//!     Ok(())
//! }
//! ```

pub mod completions;
pub mod core;
pub mod provider;

pub use crate::core::{
    ChatRole, HttpClientConfig, Inspector, InspectorConfig, LanguageModelUsage, LlmError,
    Message, ResponseMetadata, RetryPolicy, Sampler, SamplerResponse,
};
pub use crate::completions::{HarmBlockThreshold, HarmCategory, SafetySetting};
pub use crate::provider::{
    Credentials, GeminiConfig, GeminiEndpoint, GeminiSampler, Provider, ResponseFormat,
};
