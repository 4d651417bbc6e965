//! HTTP requests and responses as plain data.
//!
//! The pure client core never performs I/O: it emits `HttpRequest` values
//! and consumes `HttpResponse` values. Whoever executes the round-trip (the
//! ureq transport in `api`, or a test harness) sits between the two. All
//! fields are owned so values can be moved freely across that boundary.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A request produced by `TodoClient::build_*`, not yet executed.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// A response as observed by the transport, ready for `TodoClient::parse_*`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
