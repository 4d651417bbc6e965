//! Blocking transport and envelope normalization.
//!
//! # Design
//! `TodoApi` owns a `TodoClient` and a ureq agent, composing
//! build / execute / parse into one call per operation. Nothing here
//! returns `Err`: every outcome is folded into an `ApiResponse`, with the
//! code taken from the HTTP status when one was observed and 500 otherwise.
//! The agent is configured with `http_status_as_error(false)` so 4xx/5xx
//! responses come back as data and status interpretation stays in the
//! parse layer.

use crate::client::TodoClient;
use crate::envelope::ApiResponse;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, UpdateTodo};

/// High-level API handle returning envelopes instead of results.
#[derive(Debug)]
pub struct TodoApi {
    client: TodoClient,
    agent: ureq::Agent,
}

impl TodoApi {
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            client: TodoClient::new(base_url),
            agent,
        }
    }

    /// GET all todos. Success envelope carries `data: Vec<Todo>`.
    pub fn get_todos(&self) -> ApiResponse<Vec<Todo>> {
        let request = self.client.build_list_todos();
        let result = self
            .execute(request)
            .and_then(|response| self.client.parse_list_todos(response));
        match result {
            Ok(todos) => ApiResponse::success(200, todos),
            Err(err) => err.into(),
        }
    }

    /// POST a new todo. Success envelope carries the created record.
    pub fn create_todo(&self, input: &CreateTodo) -> ApiResponse<Todo> {
        let result = self
            .client
            .build_create_todo(input)
            .and_then(|request| self.execute(request))
            .and_then(|response| self.client.parse_create_todo(response));
        match result {
            Ok(todo) => ApiResponse::success(201, todo),
            Err(err) => err.into(),
        }
    }

    /// PUT replacement title/content for an existing todo.
    pub fn update_todo(&self, id: i64, input: &UpdateTodo) -> ApiResponse<Todo> {
        let result = self
            .client
            .build_update_todo(id, input)
            .and_then(|request| self.execute(request))
            .and_then(|response| self.client.parse_update_todo(response));
        match result {
            Ok(todo) => ApiResponse::success(200, todo),
            Err(err) => err.into(),
        }
    }

    /// DELETE an existing todo.
    pub fn delete_todo(&self, id: i64) -> ApiResponse<()> {
        let request = self.client.build_delete_todo(id);
        let result = self
            .execute(request)
            .and_then(|response| self.client.parse_delete_todo(response));
        match result {
            Ok(()) => ApiResponse::success(204, ()),
            Err(err) => err.into(),
        }
    }

    /// Execute an `HttpRequest` over the wire and capture the response as
    /// plain data. Transport failures (refused connection, timeout) map to
    /// `ApiError::Transport`.
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let sent = match (request.method, request.body) {
            (HttpMethod::Get, _) => self.agent.get(&request.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&request.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&request.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&request.path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&request.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&request.path).send_empty(),
        };

        let mut response = sent.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();
        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}
