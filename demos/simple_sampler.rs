//! Multi-turn call against whichever backend the environment configures.
//!
//! Set `GOOGLE_CLOUD_PROJECT` (plus `GOOGLE_CLOUD_ACCESS_TOKEN`) for Vertex AI,
//! or `GOOGLE_API_KEY` for the Gemini Developer API.

use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use gemsample::{GeminiConfig, GeminiSampler, Message, Sampler};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gemsample=debug")),
        )
        .init();

    let sampler = GeminiSampler::new(
        GeminiConfig::default().with_system_message("You are a concise math tutor."),
    )?;
    println!("Using {}", sampler.provider());

    let messages = vec![
        Message::user("What is 17 * 23?"),
        Message::assistant("391"),
        Message::user("And divided by 17 again?"),
    ];

    let response = sampler.call(&messages).await?;

    println!("{}", response.response_text);
    if let Some(usage) = response.response_metadata.usage {
        println!(
            "tokens: prompt={} completion={} total={}",
            usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
        );
    }

    Ok(())
}
