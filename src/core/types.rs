use serde::{Deserialize, Serialize};

/// Speaker of a conversation turn.
///
/// Serialized as a lowercase string. Roles the adapter does not know about are
/// kept in [`ChatRole::Other`] so harness payloads round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChatRole {
    System,
    User,
    Assistant,
    Other(String),
}

impl From<String> for ChatRole {
    fn from(role: String) -> Self {
        match role.as_str() {
            "system" => ChatRole::System,
            "user" => ChatRole::User,
            "assistant" => ChatRole::Assistant,
            _ => ChatRole::Other(role),
        }
    }
}

impl From<&str> for ChatRole {
    fn from(role: &str) -> Self {
        ChatRole::from(role.to_string())
    }
}

impl From<ChatRole> for String {
    fn from(role: ChatRole) -> Self {
        match role {
            ChatRole::System => "system".to_string(),
            ChatRole::User => "user".to_string(),
            ChatRole::Assistant => "assistant".to_string(),
            ChatRole::Other(role) => role,
        }
    }
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatRole::System => write!(f, "system"),
            ChatRole::User => write!(f, "user"),
            ChatRole::Assistant => write!(f, "assistant"),
            ChatRole::Other(role) => write!(f, "{role}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: ChatRole,
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<ChatRole>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageModelUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    /// Absent when the provider reported no usage.
    pub usage: Option<LanguageModelUsage>,
    /// Always `"stop"`; callers compare against this literal.
    pub finish_reason: String,
    /// Termination reason as reported upstream (e.g. `STOP`, `MAX_TOKENS`).
    pub provider_finish_reason: Option<String>,
}

/// Normalized result of one sampler call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplerResponse {
    pub response_text: String,
    pub response_metadata: ResponseMetadata,
    /// The conversation exactly as the caller passed it in.
    pub actual_queried_message_list: Vec<Message>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn roles_round_trip_through_json() {
        let messages: Vec<Message> = serde_json::from_value(json!([
            {"role": "system", "content": "Be brief."},
            {"role": "user", "content": "Hi"},
            {"role": "assistant", "content": "Hello"},
            {"role": "developer", "content": "ignored upstream"}
        ]))
        .unwrap();

        assert_eq!(messages[0].role, ChatRole::System);
        assert_eq!(messages[1].role, ChatRole::User);
        assert_eq!(messages[2].role, ChatRole::Assistant);
        assert_eq!(messages[3].role, ChatRole::Other("developer".to_string()));

        let value = serde_json::to_value(&messages).unwrap();
        assert_eq!(value[3]["role"], "developer");
        assert_eq!(value[2]["role"], "assistant");
    }

    #[test]
    fn missing_usage_serializes_as_null() {
        let metadata = ResponseMetadata {
            usage: None,
            finish_reason: "stop".to_string(),
            provider_finish_reason: None,
        };
        let value = serde_json::to_value(metadata).unwrap();
        assert!(value["usage"].is_null());
        assert_eq!(value["finish_reason"], "stop");
    }
}
