pub mod error;
pub mod http;
pub mod retry;
pub mod traits;
pub mod types;

pub use error::LlmError;
pub use http::{HttpClient, HttpClientConfig, Inspector, InspectorConfig};
pub use retry::RetryPolicy;
pub use traits::Sampler;
pub use types::{ChatRole, LanguageModelUsage, Message, ResponseMetadata, SamplerResponse};
