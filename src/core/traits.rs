use async_trait::async_trait;

use super::{
    error::LlmError,
    types::{Message, SamplerResponse},
};

/// Uniform calling convention shared by every model adapter in a harness.
///
/// Implementations must be safe to call concurrently from many tasks.
#[async_trait]
pub trait Sampler: Send + Sync {
    async fn call(&self, messages: &[Message]) -> Result<SamplerResponse, LlmError>;
}
