use std::collections::BTreeSet;

use crate::client::models::book::{Book, ShelfKind, Shelves};
use crate::client::models::user::{ProfileStats, User};

/// Session-wide application data read by every view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub current_user: Option<User>,
    pub stats: Option<ProfileStats>,
    pub shelves: Shelves,
    pub joined_groups: BTreeSet<String>,
    pub current_query: String,
}

impl AppState {
    pub fn is_signed_in(&self) -> bool {
        self.current_user.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    SignedIn(User),
    ProfileLoaded { user: User, stats: ProfileStats },
    ShelvesLoaded(Shelves),
    MovedToShelf { book: Book, shelf: ShelfKind },
    GroupToggled(String),
    GroupsRestored(BTreeSet<String>),
    QueryCommitted(String),
    SignedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&AppState, &StoreEvent) + Send>;

/// State container: views read through `state()`, every mutation goes
/// through `dispatch`, and subscribers hear about each change once.
#[derive(Default)]
pub struct AppStore {
    state: AppState,
    revision: u64,
    next_subscription: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl std::fmt::Debug for AppStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppStore")
            .field("state", &self.state)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&AppState, &StoreEvent) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        before != self.listeners.len()
    }

    /// Applies `event`. Returns whether the state changed; listeners are
    /// only notified on change.
    pub fn dispatch(&mut self, event: StoreEvent) -> bool {
        let before = self.state.clone();
        Self::reduce(&mut self.state, &event);
        if self.state == before {
            return false;
        }
        self.revision += 1;
        log::debug!("store revision {} after {:?}", self.revision, event_name(&event));
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state, &event);
        }
        true
    }

    fn reduce(state: &mut AppState, event: &StoreEvent) {
        match event {
            StoreEvent::SignedIn(user) => {
                state.current_user = Some(user.clone());
            }
            StoreEvent::ProfileLoaded { user, stats } => {
                state.current_user = Some(user.clone());
                state.stats = Some(*stats);
            }
            StoreEvent::ShelvesLoaded(shelves) => {
                state.shelves = shelves.clone();
            }
            StoreEvent::MovedToShelf { book, shelf } => {
                state.shelves.move_to_shelf(book.clone(), *shelf);
            }
            StoreEvent::GroupToggled(group_id) => {
                if !state.joined_groups.remove(group_id) {
                    state.joined_groups.insert(group_id.clone());
                }
            }
            StoreEvent::GroupsRestored(groups) => {
                state.joined_groups = groups.clone();
            }
            StoreEvent::QueryCommitted(query) => {
                state.current_query = query.clone();
            }
            StoreEvent::SignedOut => {
                *state = AppState::default();
            }
        }
    }
}

fn event_name(event: &StoreEvent) -> &'static str {
    match event {
        StoreEvent::SignedIn(_) => "SignedIn",
        StoreEvent::ProfileLoaded { .. } => "ProfileLoaded",
        StoreEvent::ShelvesLoaded(_) => "ShelvesLoaded",
        StoreEvent::MovedToShelf { .. } => "MovedToShelf",
        StoreEvent::GroupToggled(_) => "GroupToggled",
        StoreEvent::GroupsRestored(_) => "GroupsRestored",
        StoreEvent::QueryCommitted(_) => "QueryCommitted",
        StoreEvent::SignedOut => "SignedOut",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::book::sample_book;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn user() -> User {
        User { id: Some(1), name: "Ada".into(), email: "ada@example.com".into() }
    }

    #[test]
    fn move_to_shelf_notifies_once() {
        let mut store = AppStore::new();
        let book = sample_book("b1", "Dune");
        store.dispatch(StoreEvent::ShelvesLoaded(Shelves::new(vec![book.clone()], vec![], vec![])));

        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        store.subscribe(move |_, _| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        assert!(store.dispatch(StoreEvent::MovedToShelf { book, shelf: ShelfKind::WantToRead }));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(store.state().shelves.get(ShelfKind::Reading).is_empty());
        assert_eq!(store.state().shelves.shelf_of("b1"), Some(ShelfKind::WantToRead));
    }

    #[test]
    fn unchanged_state_does_not_notify() {
        let mut store = AppStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        store.subscribe(move |_, _| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        assert!(!store.dispatch(StoreEvent::SignedOut));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn sign_out_resets_everything() {
        let mut store = AppStore::new();
        store.dispatch(StoreEvent::SignedIn(user()));
        store.dispatch(StoreEvent::GroupToggled("scifi".into()));
        store.dispatch(StoreEvent::MovedToShelf { book: sample_book("b", "B"), shelf: ShelfKind::Reading });
        store.dispatch(StoreEvent::QueryCommitted("dune".into()));

        store.dispatch(StoreEvent::SignedOut);
        assert_eq!(store.state(), &AppState::default());
    }

    #[test]
    fn group_toggle_flips_membership() {
        let mut store = AppStore::new();
        store.dispatch(StoreEvent::GroupToggled("mystery".into()));
        assert!(store.state().joined_groups.contains("mystery"));
        store.dispatch(StoreEvent::GroupToggled("mystery".into()));
        assert!(store.state().joined_groups.is_empty());
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = AppStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let id = store.subscribe(move |_, _| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        assert!(store.unsubscribe(id));
        store.dispatch(StoreEvent::SignedIn(user()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
