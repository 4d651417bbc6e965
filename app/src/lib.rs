//! Presentation-state layer for the todo service.
//!
//! Holds the fetched todo list in memory and derives the view from it:
//! a case-insensitive prefix search over titles, a confirmation-gated
//! delete, and an in-place update. Fetch failures are logged and absorbed,
//! never surfaced to the caller as errors.

pub mod fetch;
pub mod state;

pub use fetch::load_todos;
pub use state::TodoList;
