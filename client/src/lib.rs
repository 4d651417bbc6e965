//! Synchronous API client for the todo service.
//!
//! # Overview
//! The request/response core builds `HttpRequest` values and parses
//! `HttpResponse` values without touching the network, so it stays
//! deterministic and testable. `TodoApi` layers a blocking ureq transport on
//! top and normalizes every outcome (including transport failures) into a
//! uniform `ApiResponse` envelope, so callers branch on the presence of
//! `data` instead of matching on errors.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - DTOs are defined independently from the server crate; the end-to-end
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod envelope;
pub mod error;
pub mod http;
pub mod types;

pub use api::TodoApi;
pub use client::TodoClient;
pub use envelope::ApiResponse;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, Todo, UpdateTodo};
