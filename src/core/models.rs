use serde::{Deserialize, Serialize};

/// A single row of the `todos` table. The id is assigned by the store on
/// insert; the title column is nullable, so a row created from a body with
/// no `title` field comes back as `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: Option<String>,
}

/// Body of `POST /todos`. The title is forwarded to the store as-is,
/// including when it is absent; presence is only checked client-side.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
}
