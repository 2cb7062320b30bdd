//! Gemini API client for generating todo summaries.
//!
//! A single synchronous request/response call to `generateContent`; no
//! streaming and no retries. A failed attempt surfaces immediately.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use crate::errors::AppError;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const GEMINI_MODEL: &str = "gemini-1.5-flash";

const PROMPT_PREFIX: &str = "Summarize the following todos:";

/// Render titles as a numbered list, one per line, 1-based.
pub fn format_todo_lines(titles: &[String]) -> String {
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| format!("{}. {}", i + 1, title))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The full deterministic prompt sent to the model.
pub fn build_prompt(titles: &[String]) -> String {
    format!("{}\n{}", PROMPT_PREFIX, format_todo_lines(titles))
}

/// Pull the first candidate's first text part out of a `generateContent`
/// response. Returns `None` for malformed responses, empty candidate lists,
/// or an empty text part.
pub fn extract_candidate_text(response: &Value) -> Option<String> {
    response
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Produces a summary string from a list of todo titles.
#[async_trait]
pub trait SummaryGenerator: Send + Sync {
    async fn summarize(&self, titles: &[String]) -> Result<String, AppError>;
}

pub struct GeminiClient {
    http: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl SummaryGenerator for GeminiClient {
    async fn summarize(&self, titles: &[String]) -> Result<String, AppError> {
        // The orchestrator rejects an empty list before we are called, but
        // the contract holds here as well.
        if titles.is_empty() {
            return Err(AppError::EmptyInput);
        }

        let prompt = build_prompt(titles);
        info!("Requesting summary for {} todos", titles.len());

        let url = format!("{}/{}:generateContent", GEMINI_API_BASE, GEMINI_MODEL);
        let request_body = json!({
            "contents": [
                {
                    "parts": [{ "text": prompt }]
                }
            ]
        });

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::Generation(format!("Gemini API request failed: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Generation(format!("Gemini API error: {}", error_text)));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| AppError::Generation(format!("Failed to parse Gemini response: {}", e)))?;

        extract_candidate_text(&response_json)
            .ok_or_else(|| AppError::Generation("No candidate text in response".to_string()))
    }
}
