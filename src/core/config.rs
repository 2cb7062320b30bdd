use std::env;

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_key: String,
    pub gemini_api_key: String,
    pub slack_webhook_url: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            supabase_url: env::var("SUPABASE_URL").map_err(|e| format!("SUPABASE_URL: {}", e))?,
            supabase_key: env::var("SUPABASE_KEY").map_err(|e| format!("SUPABASE_KEY: {}", e))?,
            gemini_api_key: env::var("GEMINI_API_KEY")
                .map_err(|e| format!("GEMINI_API_KEY: {}", e))?,
            slack_webhook_url: env::var("SLACK_WEBHOOK_URL")
                .map_err(|e| format!("SLACK_WEBHOOK_URL: {}", e))?,
            port: match env::var("PORT") {
                Ok(raw) => raw.parse().map_err(|e| format!("PORT: {}", e))?,
                Err(_) => DEFAULT_PORT,
            },
        })
    }
}
