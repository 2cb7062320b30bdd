use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to access the todo store: {0}")]
    Store(String),

    #[error("No todos to summarize")]
    EmptyInput,

    #[error("Failed to generate summary: {0}")]
    Generation(String),

    #[error("Failed to deliver summary to Slack: {0}")]
    Delivery(String),
}
