use todo_client::TodoApi;

use crate::state::TodoList;

/// Fetch all todos once and load them into `state`.
///
/// On a failure envelope the message is logged (with a fallback when the
/// envelope carries none) and the state is left as it was. Returns whether
/// the list was loaded.
pub fn load_todos(api: &TodoApi, state: &mut TodoList) -> bool {
    let response = api.get_todos();
    match response.data {
        Some(todos) => {
            tracing::debug!(count = todos.len(), "fetched todos");
            state.load(todos);
            true
        }
        None => {
            let message = response
                .message
                .unwrap_or_else(|| "No data received".to_string());
            tracing::error!(code = response.code, "failed to fetch todos: {message}");
            false
        }
    }
}
