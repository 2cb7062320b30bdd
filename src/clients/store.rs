//! Supabase (PostgREST) client for the `todos` table.
//!
//! Every operation is a single remote round-trip; there are no transactions
//! and no batching.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::json;
use tracing::info;

use crate::core::models::Todo;
use crate::errors::AppError;

/// Gateway to the todo table.
///
/// `create` deliberately does not return the generated id; callers re-list
/// to observe it. `delete` of an id that does not exist is indistinguishable
/// from a successful delete - the store answers 204 either way.
#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn create(&self, title: Option<&str>) -> Result<(), AppError>;
    async fn list(&self) -> Result<Vec<Todo>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

pub struct SupabaseStore {
    http: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseStore {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/todos", self.base_url)
    }

    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

#[async_trait]
impl TodoStore for SupabaseStore {
    async fn create(&self, title: Option<&str>) -> Result<(), AppError> {
        let response = self
            .authed(self.http.post(self.table_url()))
            .header("Prefer", "return=minimal")
            .json(&json!([{ "title": title }]))
            .send()
            .await
            .map_err(|e| AppError::Store(format!("insert request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Store(format!("insert returned {}: {}", status, body)));
        }

        info!("Inserted todo row");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Todo>, AppError> {
        let response = self
            .authed(self.http.get(self.table_url()))
            .query(&[("select", "*")])
            .send()
            .await
            .map_err(|e| AppError::Store(format!("select request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Store(format!("select returned {}: {}", status, body)));
        }

        response
            .json::<Vec<Todo>>()
            .await
            .map_err(|e| AppError::Store(format!("Failed to parse select response: {}", e)))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let response = self
            .authed(self.http.delete(self.table_url()))
            .query(&[("id", format!("eq.{}", id))])
            .send()
            .await
            .map_err(|e| AppError::Store(format!("delete request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Store(format!("delete returned {}: {}", status, body)));
        }

        info!("Deleted todo rows matching id {}", id);
        Ok(())
    }
}
