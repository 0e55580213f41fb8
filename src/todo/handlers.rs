use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::errors::{Envelope, TodoError};
use super::store::{Todo, TodoPatch, TodoStore};

pub type SharedStore = Arc<TodoStore>;

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub text: Option<String>,
}

/// Ids that do not parse can never match a todo.
fn parse_id(raw: &str) -> Result<u64, TodoError> {
    raw.parse().map_err(|_| TodoError::NotFound)
}

/// GET /api/v1/health
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /api/v1/todos
pub async fn handle_list(State(store): State<SharedStore>) -> Json<Envelope<Vec<Todo>>> {
    Json(Envelope::data(store.list()))
}

/// GET /api/v1/todos/:id
pub async fn handle_get(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Todo>>, TodoError> {
    let todo = store.get(parse_id(&id)?).ok_or(TodoError::NotFound)?;
    Ok(Json(Envelope::data(todo)))
}

/// POST /api/v1/todos
///
/// A body that is not JSON, or whose `text` is missing, blank or not a
/// string, is rejected with 400.
pub async fn handle_create(
    State(store): State<SharedStore>,
    body: Option<Json<CreateTodoRequest>>,
) -> Result<(StatusCode, Json<Envelope<Todo>>), TodoError> {
    let text = body
        .and_then(|Json(req)| req.text)
        .filter(|text| !text.trim().is_empty())
        .ok_or(TodoError::TextRequired)?;

    let todo = store.create(&text);
    log::info!("Created todo {}", todo.id);
    Ok((StatusCode::CREATED, Json(Envelope::data(todo))))
}

/// PATCH /api/v1/todos/:id
pub async fn handle_update(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    body: Option<Json<TodoPatch>>,
) -> Result<Json<Envelope<Todo>>, TodoError> {
    let patch = body.map(|Json(patch)| patch).unwrap_or_default();
    let todo = store.update(parse_id(&id)?, patch).ok_or(TodoError::NotFound)?;
    Ok(Json(Envelope::data(todo)))
}

/// DELETE /api/v1/todos/:id
pub async fn handle_delete(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Todo>>, TodoError> {
    let todo = store.delete(parse_id(&id)?).ok_or(TodoError::NotFound)?;
    log::info!("Deleted todo {}", todo.id);
    Ok(Json(Envelope::data(todo)))
}
