//! The summarize pipeline: fetch all todos, generate a summary, post it to
//! Slack. Three sequential round-trips with no compensation - if the
//! notifier fails after a summary was generated, the summary is discarded
//! and the caller re-runs the whole pipeline.

use tracing::info;

use crate::clients::gemini::SummaryGenerator;
use crate::clients::store::TodoStore;
use crate::clients::webhook::SummaryNotifier;
use crate::errors::AppError;

/// Run the full fetch -> summarize -> notify flow and return the summary
/// text on success.
///
/// An empty todo list fails with `AppError::EmptyInput` before any call to
/// the generator or the notifier; this is the one business-rule branch in
/// the system.
pub async fn run_summarize(
    store: &dyn TodoStore,
    generator: &dyn SummaryGenerator,
    notifier: &dyn SummaryNotifier,
) -> Result<String, AppError> {
    let todos = store.list().await?;

    if todos.is_empty() {
        return Err(AppError::EmptyInput);
    }

    let titles: Vec<String> = todos
        .into_iter()
        .map(|todo| todo.title.unwrap_or_default())
        .collect();

    info!("Summarizing {} todos", titles.len());
    let summary = generator.summarize(&titles).await?;

    notifier.send(&summary).await?;

    Ok(summary)
}
