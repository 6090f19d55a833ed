//! Structured output: the response schema is derived from a Rust type.

use dotenv::dotenv;
use schemars::JsonSchema;
use serde::Deserialize;

use gemsample::{GeminiConfig, GeminiSampler, Message, Sampler};

#[derive(Debug, Deserialize, JsonSchema)]
struct Grade {
    /// Whether the candidate answer matches the reference
    correct: bool,
    /// One-sentence justification
    explanation: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let sampler = GeminiSampler::new(
        GeminiConfig::new("gemini-2.0-flash")
            .with_system_message("You grade answers against a reference.")
            .with_response_schema_for::<Grade>(),
    )?;

    let response = sampler
        .call(&[Message::user(
            "Reference: 391. Candidate: 17 * 23 = 381. Is the candidate correct?",
        )])
        .await?;

    let grade: Grade = serde_json::from_str(&response.response_text)?;
    println!("{grade:#?}");

    Ok(())
}
