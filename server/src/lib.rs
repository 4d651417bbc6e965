use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::cors::CorsLayer;

/// A persisted todo record. Serialized camelCase for the API, with
/// timestamps in ISO-8601 or null.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Rails-style nested request body: `{"todo": {"title": ..., "content": ...}}`.
#[derive(Debug, Deserialize)]
pub struct TodoRequest {
    pub todo: TodoParams,
}

#[derive(Debug, Deserialize)]
pub struct TodoParams {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// Body of a 422 response: a non-empty list of human-readable messages.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<String>,
}

/// In-memory store. Ids are assigned from a counter that never rolls back,
/// so deleting the newest todo cannot cause id reuse. `BTreeMap` keeps
/// listing in ascending id order.
#[derive(Debug, Default)]
pub struct Store {
    next_id: i64,
    todos: BTreeMap<i64, Todo>,
}

pub type Db = Arc<RwLock<Store>>;

enum ApiFailure {
    NotFound,
    Unprocessable(Vec<String>),
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        match self {
            ApiFailure::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiFailure::Unprocessable(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrors { errors }),
            )
                .into_response(),
        }
    }
}

fn validate(params: &TodoParams) -> Result<(), ApiFailure> {
    if params.title.trim().is_empty() {
        return Err(ApiFailure::Unprocessable(vec![
            "Title can't be blank".to_string(),
        ]));
    }
    Ok(())
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/v1/todos", get(list_todos).post(create_todo))
        .route("/api/v1/todos/{id}", put(update_todo).delete(delete_todo))
        .layer(CorsLayer::permissive())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    Json(store.todos.values().cloned().collect())
}

async fn create_todo(
    State(db): State<Db>,
    Json(body): Json<TodoRequest>,
) -> Result<(StatusCode, Json<Todo>), ApiFailure> {
    validate(&body.todo)?;
    let mut store = db.write().await;
    store.next_id += 1;
    let now = Utc::now();
    let todo = Todo {
        id: store.next_id,
        title: body.todo.title,
        content: body.todo.content,
        created_at: Some(now),
        updated_at: Some(now),
    };
    store.todos.insert(todo.id, todo.clone());
    tracing::debug!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(body): Json<TodoRequest>,
) -> Result<Json<Todo>, ApiFailure> {
    validate(&body.todo)?;
    let mut store = db.write().await;
    let todo = store.todos.get_mut(&id).ok_or(ApiFailure::NotFound)?;
    todo.title = body.todo.title;
    todo.content = body.todo.content;
    todo.updated_at = Some(Utc::now());
    Ok(Json(todo.clone()))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<i64>) -> Result<StatusCode, ApiFailure> {
    let mut store = db.write().await;
    match store.todos.remove(&id) {
        Some(todo) => {
            tracing::debug!(id = todo.id, "deleted todo");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(ApiFailure::NotFound),
    }
}
