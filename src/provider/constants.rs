pub mod gemini {
    pub const DEFAULT_MODEL: &str = "gemini-1.5-pro-002";
    pub const DEFAULT_TEMPERATURE: f32 = 0.0;
    pub const DEFAULT_MAX_TOKENS: u32 = 4096;
    pub const API_BASE: &str = "https://generativelanguage.googleapis.com";
    pub const API_KEY_ENV_VAR: &str = "GOOGLE_API_KEY";
    pub const API_KEY_HEADER: &str = "x-goog-api-key";
}

pub mod vertex {
    pub const DEFAULT_LOCATION: &str = "us-central1";
    pub const PROJECT_ENV_VAR: &str = "GOOGLE_CLOUD_PROJECT";
    pub const ACCESS_TOKEN_ENV_VAR: &str = "GOOGLE_CLOUD_ACCESS_TOKEN";

    /// Regional endpoint serving `location`; `global` has no region prefix.
    pub fn api_base(location: &str) -> String {
        if location == "global" {
            "https://aiplatform.googleapis.com".to_string()
        } else {
            format!("https://{location}-aiplatform.googleapis.com")
        }
    }
}
