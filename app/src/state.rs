use todo_client::Todo;

/// In-memory todo list plus the search term the view filters by.
#[derive(Debug, Default)]
pub struct TodoList {
    todos: Vec<Todo>,
    search: String,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list, e.g. from the initial fetch.
    pub fn load(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Todos whose title starts with the search term, case-insensitively.
    /// An empty search shows everything.
    pub fn visible(&self) -> Vec<&Todo> {
        let needle = self.search.to_lowercase();
        self.todos
            .iter()
            .filter(|todo| todo.title.to_lowercase().starts_with(&needle))
            .collect()
    }

    /// Remove the todo with `id` once the `confirm` gate approves. The gate
    /// receives `title` for display. Returns whether an item was removed;
    /// a declined confirmation leaves the list untouched.
    pub fn delete(&mut self, id: i64, title: &str, confirm: impl FnOnce(&str) -> bool) -> bool {
        if !confirm(title) {
            return false;
        }
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != id);
        self.todos.len() < before
    }

    /// Replace the title and content of the todo with `id` in place.
    /// Returns false when no todo matches.
    pub fn update(&mut self, id: i64, title: &str, content: Option<&str>) -> bool {
        match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.title = title.to_string();
                todo.content = content.map(str::to_string);
                true
            }
            None => false,
        }
    }
}
