//! Gemini `generateContent` wire format and the per-attempt transport client.

pub mod client;
pub mod request;
pub mod response;

pub use client::{CompletionClient, CompletionProviderConfig};
pub use request::{
    Content, ContentRole, GenerateContentRequest, GenerationConfig, HarmBlockThreshold,
    HarmCategory, MIME_JSON, MIME_TEXT, Part, SafetySetting, SystemInstruction,
};
pub use response::GenerateContentResponse;
