/// todosum - a todo list backend that summarizes your tasks into Slack.
///
/// The service exposes a small JSON API over a hosted Supabase table plus
/// one composite endpoint that chains three remote calls:
///
/// 1. Fetch every todo from the store
/// 2. Ask Gemini to summarize the list
/// 3. Post the summary to a Slack incoming webhook
///
/// # Architecture
///
/// The system uses:
/// - axum for the HTTP surface (plus a served single-page UI)
/// - reqwest for all outbound calls (Supabase, Gemini, Slack)
/// - Tokio for the async runtime
///
/// Each external collaborator sits behind a trait (`TodoStore`,
/// `SummaryGenerator`, `SummaryNotifier`) so the summarize pipeline can be
/// exercised without the network.
// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod pipeline;

/// Configure structured logging with JSON format.
///
/// Sets up tracing-subscriber with a JSON formatter; the verbosity is taken
/// from `RUST_LOG` and defaults to `info`. Call once at process start.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
