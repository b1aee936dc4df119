mod common;

use std::time::Duration;

use bookify::client::config::ClientConfig;
use bookify::client::models::app_state::{BookifyState, Effect};
use bookify::client::models::book::ShelfKind;
use bookify::client::models::messages::Message;
use bookify::client::models::navigation::Tab;
use bookify::client::services::api_client::BookifyApi;
use bookify::client::services::effects;
use bookify::client::utils::session_store::SessionStore;
use serde_json::json;

use common::{FakeBackend, Reply};

fn backend_router(req: &common::Recorded) -> Reply {
    match req.target.as_str() {
        "/api/users/login" => Reply::json(200, json!({"token": "tok-1", "user": {"name": "Ada", "email": "ada@example.com"}})),
        "/api/users/profile" => Reply::json(
            200,
            json!({"user": {"name": "Ada", "email": "ada@example.com"}, "stats": {"booksRead": 1, "pagesRead": 1200}}),
        ),
        "/api/books/shelf/reading" => Reply::json(200, json!({"books": [{"id": "r1", "title": "Dune"}]})),
        "/api/books/shelf" => Reply::json(201, json!({"message": "saved"})),
        t if t.starts_with("/api/books/shelf/") => Reply::json(200, json!({"books": []})),
        _ => Reply::json(404, json!({"error": "not found"})),
    }
}

/// Runs effects until none are left, skipping timers.
async fn drain(state: &mut BookifyState, api: &BookifyApi, mut pending: Vec<Effect>) {
    while let Some(effect) = pending.pop() {
        if matches!(effect, Effect::ClearLogAfter { .. } | Effect::ScheduleSuggestion { .. }) {
            continue;
        }
        let message = effects::run(api.clone(), effect).await;
        pending.extend(state.update(message));
    }
}

#[tokio::test]
async fn login_loads_profile_then_shelves_and_marks_read() {
    let backend = FakeBackend::start(backend_router).await;
    let api = BookifyApi::new(&backend.base_url, Duration::from_secs(5)).unwrap();
    let session = SessionStore::in_memory();
    let mut state = BookifyState::new(session.clone(), &ClientConfig::default());
    state.boot(Tab::Home);

    state.update(Message::LoginEmailChanged("ada@example.com".into()));
    state.update(Message::LoginPasswordChanged("secret".into()));
    let effects = state.update(Message::SubmitLogin);
    drain(&mut state, &api, effects).await;

    assert!(state.is_signed_in());
    assert_eq!(session.load().as_deref(), Some("tok-1"));
    assert_eq!(state.store.state().stats.map(|s| s.pages_read), Some(1200));
    assert_eq!(state.store.state().shelves.get(ShelfKind::Reading)[0].id, "r1");

    let order: Vec<String> = backend.recorded().await.into_iter().map(|r| r.target).collect();
    assert_eq!(order[0], "/api/users/login");
    assert_eq!(order[1], "/api/users/profile");
    assert!(order[2..].iter().all(|t| t.starts_with("/api/books/shelf/")));

    let book = state.store.state().shelves.get(ShelfKind::Reading)[0].clone();
    let effects = state.update(Message::MarkAsReadPressed(book));
    drain(&mut state, &api, effects).await;
    let shelves = &state.store.state().shelves;
    assert!(shelves.get(ShelfKind::Reading).is_empty());
    assert_eq!(shelves.get(ShelfKind::History)[0].id, "r1");

    let effects = state.update(Message::Logout);
    assert!(!effects.iter().any(|e| matches!(e, Effect::FetchProfile { .. })));
    assert!(session.load().is_none());
    assert!(state.store.state().shelves.is_empty());
}
