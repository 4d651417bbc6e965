//! End-to-end tests against the live todo server.
//!
//! # Design
//! Starts the real server on an OS-assigned port, then exercises every
//! `TodoApi` call over actual HTTP. This is also the schema-drift tripwire
//! between the server's records and the client's DTOs, which are defined
//! independently.

use todo_client::{CreateTodo, TodoApi, UpdateTodo};

/// Spawn the server on a random port and return an API handle bound to it.
fn start_server() -> TodoApi {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener).await
        })
        .unwrap();
    });

    TodoApi::new(&format!("http://{addr}"))
}

#[test]
fn crud_lifecycle() {
    let api = start_server();

    // list starts empty
    let response = api.get_todos();
    assert_eq!(response.code, 200);
    assert!(response.data.expect("todo list").is_empty());

    // create
    let created = api.create_todo(&CreateTodo {
        title: "Integration test".to_string(),
        content: Some("over real HTTP".to_string()),
    });
    assert_eq!(created.code, 201);
    let created = created.data.expect("created todo");
    assert_eq!(created.title, "Integration test");
    assert_eq!(created.content.as_deref(), Some("over real HTTP"));
    assert!(created.created_at.is_some());
    assert!(created.updated_at.is_some());
    let id = created.id;

    // list has the one todo
    let todos = api.get_todos().data.expect("todo list");
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0], created);

    // update replaces title and content
    let updated = api.update_todo(
        id,
        &UpdateTodo {
            title: "Updated title".to_string(),
            content: None,
        },
    );
    assert_eq!(updated.code, 200);
    let updated = updated.data.expect("updated todo");
    assert_eq!(updated.title, "Updated title");
    assert!(updated.content.is_none());
    assert_eq!(updated.created_at, created.created_at);

    // delete
    let deleted = api.delete_todo(id);
    assert_eq!(deleted.code, 204);
    assert!(deleted.is_success());

    // delete again reports not found
    let missing = api.delete_todo(id);
    assert_eq!(missing.code, 404);
    assert!(missing.data.is_none());
    assert!(missing.message.is_some());

    // list is empty again
    let todos = api.get_todos().data.expect("todo list");
    assert!(todos.is_empty());
}

#[test]
fn create_blank_title_yields_validation_envelope() {
    let api = start_server();

    let response = api.create_todo(&CreateTodo {
        title: "   ".to_string(),
        content: None,
    });
    assert_eq!(response.code, 422);
    assert!(response.data.is_none());
    assert_eq!(response.message.as_deref(), Some("Title can't be blank"));
}

#[test]
fn update_unknown_id_yields_404_envelope() {
    let api = start_server();

    let response = api.update_todo(
        999,
        &UpdateTodo {
            title: "Ghost".to_string(),
            content: None,
        },
    );
    assert_eq!(response.code, 404);
    assert!(response.data.is_none());
}

#[test]
fn transport_failure_yields_500_envelope() {
    // Port from the dynamic range with nothing bound to it; the listener is
    // dropped before the request is made.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = TodoApi::new(&format!("http://{addr}"));
    let response = api.get_todos();
    assert_eq!(response.code, 500);
    assert!(response.data.is_none());
    assert_eq!(response.message.as_deref(), Some("Request failed"));
}
