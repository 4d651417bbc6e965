use todo_app::{load_todos, TodoList};
use todo_client::TodoApi;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_app=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url =
        std::env::var("TODO_API_URL").unwrap_or_else(|_| "http://127.0.0.1:3001".to_string());
    let api = TodoApi::new(&base_url);

    let mut list = TodoList::new();
    if !load_todos(&api, &mut list) {
        std::process::exit(1);
    }

    if let Some(term) = std::env::args().nth(1) {
        list.set_search(term);
    }

    for todo in list.visible() {
        match &todo.content {
            Some(content) => println!("{:>4}  {}: {}", todo.id, todo.title, content),
            None => println!("{:>4}  {}", todo.id, todo.title),
        }
    }
}
