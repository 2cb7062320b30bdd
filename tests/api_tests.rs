use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use todosum::api::{AppState, router};
use todosum::clients::gemini::SummaryGenerator;
use todosum::clients::store::TodoStore;
use todosum::clients::webhook::SummaryNotifier;
use todosum::core::models::Todo;
use todosum::errors::AppError;

/// In-memory stand-in for the Supabase table. Ids are assigned on insert
/// and deleting an unknown id is silently successful, matching PostgREST.
#[derive(Default)]
struct MemoryStore {
    rows: Mutex<Vec<Todo>>,
    next_id: Mutex<i64>,
    fail: bool,
}

impl MemoryStore {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn create(&self, title: Option<&str>) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::Store("insert failed".to_string()));
        }
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        self.rows.lock().unwrap().push(Todo {
            id: *next_id,
            title: title.map(str::to_string),
        });
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Todo>, AppError> {
        if self.fail {
            return Err(AppError::Store("select failed".to_string()));
        }
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::Store("delete failed".to_string()));
        }
        if let Ok(id) = id.parse::<i64>() {
            self.rows.lock().unwrap().retain(|todo| todo.id != id);
        }
        Ok(())
    }
}

struct StubGenerator {
    fail: bool,
    calls: Mutex<usize>,
}

#[async_trait]
impl SummaryGenerator for StubGenerator {
    async fn summarize(&self, _titles: &[String]) -> Result<String, AppError> {
        *self.calls.lock().unwrap() += 1;
        if self.fail {
            return Err(AppError::Generation("upstream error".to_string()));
        }
        Ok("A tidy summary.".to_string())
    }
}

struct StubNotifier {
    calls: Mutex<usize>,
}

#[async_trait]
impl SummaryNotifier for StubNotifier {
    async fn send(&self, _summary: &str) -> Result<(), AppError> {
        *self.calls.lock().unwrap() += 1;
        Ok(())
    }
}

struct TestHarness {
    app: Router,
    generator: Arc<StubGenerator>,
    notifier: Arc<StubNotifier>,
}

fn harness_with(store: Arc<dyn TodoStore>, generator_fails: bool) -> TestHarness {
    let generator = Arc::new(StubGenerator {
        fail: generator_fails,
        calls: Mutex::new(0),
    });
    let notifier = Arc::new(StubNotifier {
        calls: Mutex::new(0),
    });
    let state = Arc::new(AppState {
        store,
        generator: generator.clone(),
        notifier: notifier.clone(),
    });
    TestHarness {
        app: router(state),
        generator,
        notifier,
    }
}

fn harness() -> TestHarness {
    harness_with(Arc::new(MemoryStore::default()), false)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_todo(title: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/todos")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(format!(r#"{{"title":"{}"}}"#, title)))
        .unwrap()
}

fn get_todos() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/todos")
        .body(Body::empty())
        .unwrap()
}

fn delete_todo(id: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(format!("/todos/{}", id))
        .body(Body::empty())
        .unwrap()
}

fn post_summarize() -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/summarize")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn create_then_list_includes_title_once() {
    let h = harness();

    let (status, body) = send(&h.app, post_todo("Buy milk")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Todo saved successfully!");

    let (status, body) = send(&h.app, get_todos()).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|todo| todo["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Buy milk"]);
}

#[tokio::test]
async fn delete_removes_row_and_unknown_id_is_silent() {
    let h = harness();
    send(&h.app, post_todo("Buy milk")).await;

    let (_, body) = send(&h.app, get_todos()).await;
    let id = body.as_array().unwrap()[0]["id"].as_i64().unwrap();

    let (status, body) = send(&h.app, delete_todo(&id.to_string())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Todo deleted successfully");

    let (_, body) = send(&h.app, get_todos()).await;
    assert!(body.as_array().unwrap().is_empty());

    // Deleting an id that never existed is indistinguishable from success.
    let (status, _) = send(&h.app, delete_todo("9999")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn summarize_with_no_todos_is_a_client_error_and_calls_nothing() {
    let h = harness();

    let (status, body) = send(&h.app, post_summarize()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No todos to summarize");
    assert_eq!(*h.generator.calls.lock().unwrap(), 0);
    assert_eq!(*h.notifier.calls.lock().unwrap(), 0);
}

#[tokio::test]
async fn summarize_happy_path_returns_summary() {
    let h = harness();
    send(&h.app, post_todo("Buy milk")).await;
    send(&h.app, post_todo("Write report")).await;

    let (status, body) = send(&h.app, post_summarize()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Summary sent to Slack");
    assert_eq!(body["summary"], "A tidy summary.");
    assert_eq!(*h.notifier.calls.lock().unwrap(), 1);
}

#[tokio::test]
async fn summarize_maps_generation_failure_to_generic_500() {
    let store = Arc::new(MemoryStore::default());
    store.create(Some("Buy milk")).await.unwrap();
    let h = harness_with(store, true);

    let (status, body) = send(&h.app, post_summarize()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error summarizing todos");
    assert_eq!(*h.notifier.calls.lock().unwrap(), 0);
}

#[tokio::test]
async fn store_failures_map_to_endpoint_specific_generic_errors() {
    let h = harness_with(Arc::new(MemoryStore::failing()), false);

    let (status, body) = send(&h.app, post_todo("Buy milk")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error saving todo");

    let (status, body) = send(&h.app, get_todos()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error fetching todos");

    let (status, body) = send(&h.app, delete_todo("1")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error deleting todo");

    let (status, body) = send(&h.app, post_summarize()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error summarizing todos");
}

#[tokio::test]
async fn create_accepts_body_without_title() {
    let h = harness();

    let request = Request::builder()
        .method("POST")
        .uri("/todos")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let (status, _) = send(&h.app, request).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&h.app, get_todos()).await;
    assert!(body.as_array().unwrap()[0]["title"].is_null());
}

#[tokio::test]
async fn index_serves_the_ui() {
    let h = harness();
    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let response = h.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Summarize"));
}
