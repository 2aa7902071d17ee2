use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Base URL of an OpenAI-compatible completion API
    pub openai_base_url: String,
    /// API key for the completion API; unset means the license resolver
    /// always takes the deterministic fallback path
    pub openai_api_key: Option<String>,
    /// Model used for license-terms generation
    pub openai_model: String,
    /// Base URL for the API - currently unused, for links returned to clients
    #[allow(dead_code)]
    pub api_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com".to_string()),
            openai_api_key: env::var("OPENAI_API_KEY").ok(),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4".to_string()),
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
        }
    }

    /// Check if the AI-assisted license path is configured
    pub fn llm_enabled(&self) -> bool {
        self.openai_api_key.is_some()
    }
}
