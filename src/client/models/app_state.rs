//! Client controller: turns every `Message` into state changes plus the
//! side effects to run. Nothing here touches the network or the widget
//! toolkit; `services::effects` executes the returned effects.

use std::time::Duration;

use crate::client::config::ClientConfig;
use crate::client::models::book::{Book, ShelfKind};
use crate::client::models::messages::Message;
use crate::client::models::navigation::{Navigator, Tab};
use crate::client::models::search_state::{SearchRequest, SearchState, SuggestionRequest};
use crate::client::models::shelf_queue::{ShelfJob, ShelfQueue};
use crate::client::models::store::{AppStore, StoreEvent};
use crate::client::models::ui_state::{AuthForm, LogLevel, LogMessage, LoginInput, Modals, RegisterInput};
use crate::client::models::user::AuthSession;
use crate::client::render::pages::{category_query, GROUPS};
use crate::client::services::api_client::ApiError;
use crate::client::utils::debounce::DebounceTicket;
use crate::client::utils::session_store::SessionStore;

/// How long an alert stays in the bar.
pub const LOG_LIFETIME: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Login { email: String, password: String },
    Register { name: String, email: String, password: String },
    FetchProfile { epoch: u64, token: String },
    FetchShelves { epoch: u64, revision: u64, token: String },
    UpsertShelf { epoch: u64, token: String, job: ShelfJob },
    FetchTrending { limit: u32 },
    FetchNewReleases { limit: u32 },
    ScheduleSuggestion { ticket: DebounceTicket, delay: Duration },
    FetchSuggestions { request: SuggestionRequest, limit: u32 },
    Search { request: SearchRequest, limit: u32 },
    ClearLogAfter { seq: u64, delay: Duration },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum HomeFeed {
    #[default]
    Loading,
    Ready(Vec<Book>),
    Failed(String),
}

#[derive(Debug, Clone, Copy)]
struct Limits {
    search: u32,
    suggestions: u32,
    home: u32,
}

#[derive(Debug)]
pub struct BookifyState {
    pub store: AppStore,
    pub nav: Navigator,
    pub modals: Modals,
    pub search: SearchState,
    pub login: LoginInput,
    pub register: RegisterInput,
    pub logger: Vec<LogMessage>,
    pub trending: HomeFeed,
    pub new_releases: HomeFeed,
    /// Reader link of the last book opened with "Read Now".
    pub reader_link: Option<String>,
    pub auth_pending: bool,
    pub shelves_loaded: bool,
    session: SessionStore,
    token: Option<String>,
    epoch: u64,
    // Bumped on every confirmed shelf move; older snapshots are stale.
    shelf_revision: u64,
    log_seq: u64,
    shelf_queue: ShelfQueue,
    limits: Limits,
}

impl BookifyState {
    pub fn new(session: SessionStore, config: &ClientConfig) -> Self {
        let mut store = AppStore::new();
        let persist = session.clone();
        store.subscribe(move |state, event| {
            let result = match event {
                StoreEvent::GroupToggled(_) => persist.save_groups(&state.joined_groups),
                StoreEvent::SignedIn(user) | StoreEvent::ProfileLoaded { user, .. } => persist.save_user(user),
                _ => Ok(()),
            };
            if let Err(e) = result {
                log::error!("Failed to persist session data: {}", e);
            }
        });

        Self {
            store,
            nav: Navigator::default(),
            modals: Modals::default(),
            search: SearchState::new(config.suggestion_debounce),
            login: LoginInput::default(),
            register: RegisterInput::default(),
            logger: Vec::new(),
            trending: HomeFeed::Loading,
            new_releases: HomeFeed::Loading,
            reader_link: None,
            auth_pending: false,
            shelves_loaded: false,
            session,
            token: None,
            epoch: 0,
            shelf_revision: 0,
            log_seq: 0,
            shelf_queue: ShelfQueue::default(),
            limits: Limits {
                search: config.search_result_limit,
                suggestions: config.suggestion_limit,
                home: config.home_shelf_limit,
            },
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some() && self.store.state().is_signed_in()
    }

    pub fn shelf_revision(&self) -> u64 {
        self.shelf_revision
    }

    pub fn shelf_queue(&self) -> &ShelfQueue {
        &self.shelf_queue
    }

    /// Restores the stored session and starts the home page feeds.
    pub fn boot(&mut self, initial_tab: Tab) -> Vec<Effect> {
        let mut effects = vec![
            Effect::FetchTrending { limit: self.limits.home },
            Effect::FetchNewReleases { limit: self.limits.home },
        ];

        let record = self.session.load_record();
        match record.token.filter(|t| !t.trim().is_empty()) {
            Some(token) => {
                log::info!("Restoring stored session");
                if let Some(user) = record.user {
                    self.store.dispatch(StoreEvent::SignedIn(user));
                }
                self.store.dispatch(StoreEvent::GroupsRestored(record.joined_groups));
                effects.push(Effect::FetchProfile { epoch: self.epoch, token: token.clone() });
                self.token = Some(token);
            }
            None => log::info!("No stored session, starting signed out"),
        }

        let tab = if initial_tab.requires_sign_in() && !self.is_signed_in() { Tab::Home } else { initial_tab };
        self.nav = Navigator::new(tab);
        effects
    }

    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::NoOp => Vec::new(),
            Message::ClearLog(seq) => {
                if seq == self.log_seq {
                    self.logger.clear();
                }
                Vec::new()
            }

            Message::TabSelected(tab) => self.select_tab(tab),
            Message::HistoryBack => {
                self.nav.back();
                Vec::new()
            }
            Message::HistoryForward => {
                self.nav.forward();
                Vec::new()
            }
            Message::ToggleSidebar => {
                self.nav.toggle_sidebar();
                Vec::new()
            }

            Message::OpenAuth => {
                self.open_auth(AuthForm::Login);
                Vec::new()
            }
            Message::AuthFormSelected(form) => {
                self.modals.auth_form = form;
                Vec::new()
            }
            Message::CloseModals => {
                self.modals.close_all();
                Vec::new()
            }

            Message::LoginEmailChanged(v) => {
                self.login.email = v;
                Vec::new()
            }
            Message::LoginPasswordChanged(v) => {
                self.login.password = v;
                Vec::new()
            }
            Message::RegisterNameChanged(v) => {
                self.register.name = v;
                Vec::new()
            }
            Message::RegisterEmailChanged(v) => {
                self.register.email = v;
                Vec::new()
            }
            Message::RegisterPasswordChanged(v) => {
                self.register.password = v;
                Vec::new()
            }
            Message::SubmitLogin => {
                if self.auth_pending {
                    return Vec::new();
                }
                if !self.login.is_complete() {
                    return self.alert(LogLevel::Warning, "Please enter your email and password");
                }
                self.auth_pending = true;
                vec![Effect::Login { email: self.login.email.trim().to_string(), password: self.login.password.clone() }]
            }
            Message::SubmitRegister => {
                if self.auth_pending {
                    return Vec::new();
                }
                if !self.register.is_complete() {
                    return self.alert(LogLevel::Warning, "Please fill in every field");
                }
                self.auth_pending = true;
                vec![Effect::Register {
                    name: self.register.name.trim().to_string(),
                    email: self.register.email.trim().to_string(),
                    password: self.register.password.clone(),
                }]
            }
            Message::AuthCompleted { form, result } => self.on_auth_completed(form, result),
            Message::ProfileLoaded { epoch, result } => {
                if epoch != self.epoch {
                    log::debug!("Dropping profile from an earlier session");
                    return Vec::new();
                }
                match result {
                    Ok(profile) => {
                        self.store.dispatch(StoreEvent::ProfileLoaded { user: profile.user, stats: profile.stats });
                        self.fetch_shelves()
                    }
                    Err(e) => self.on_session_failure(e, "Could not load your profile"),
                }
            }
            Message::ShelvesLoaded { epoch, revision, result } => {
                if epoch != self.epoch {
                    log::debug!("Dropping shelves from an earlier session");
                    return Vec::new();
                }
                match result {
                    Ok(_) if revision != self.shelf_revision => {
                        log::debug!("Shelf snapshot predates a confirmed move, fetching again");
                        self.fetch_shelves()
                    }
                    Ok(shelves) => {
                        log::info!("Loaded {} shelved books", shelves.len());
                        self.store.dispatch(StoreEvent::ShelvesLoaded(shelves));
                        self.shelves_loaded = true;
                        Vec::new()
                    }
                    Err(e) => self.on_session_failure(e, "Could not load your shelves"),
                }
            }
            Message::RefreshProfile => match &self.token {
                Some(token) => vec![Effect::FetchProfile { epoch: self.epoch, token: token.clone() }],
                None => Vec::new(),
            },
            Message::Logout => self.logout(),

            Message::TrendingLoaded(result) => {
                self.trending = self.feed(result, "Could not load trending books");
                Vec::new()
            }
            Message::NewReleasesLoaded(result) => {
                self.new_releases = self.feed(result, "Could not load new releases");
                Vec::new()
            }

            Message::AddToShelfPressed(book) => {
                if !self.is_signed_in() {
                    return self.require_sign_in("Please sign in to manage your shelves");
                }
                self.modals.open_shelf(book);
                Vec::new()
            }
            Message::ShelfChosen(shelf) => {
                let target = self.modals.shelf_target().cloned();
                self.modals.close_all();
                match target {
                    Some(book) => self.enqueue_shelf(ShelfJob { book, shelf }),
                    None => Vec::new(),
                }
            }
            Message::MarkAsReadPressed(book) => {
                if !self.is_signed_in() {
                    return self.require_sign_in("Please sign in to manage your shelves");
                }
                self.enqueue_shelf(ShelfJob { book, shelf: ShelfKind::History })
            }
            Message::ReadNowPressed(book) => {
                if !self.is_signed_in() {
                    return self.require_sign_in("Please sign in to start reading");
                }
                self.reader_link = book.web_reader_link.clone();
                self.enqueue_shelf(ShelfJob { book, shelf: ShelfKind::Reading })
            }
            Message::ShelfUpdated { epoch, job, result } => self.on_shelf_updated(epoch, job, result),

            Message::SearchInputChanged(text) => match self.search.on_input(text) {
                Some(ticket) => vec![Effect::ScheduleSuggestion { ticket, delay: self.search.debounce_window() }],
                None => Vec::new(),
            },
            Message::SuggestionDue(ticket) => match self.search.on_debounce_elapsed(ticket) {
                Some(request) => vec![Effect::FetchSuggestions { request, limit: self.limits.suggestions }],
                None => Vec::new(),
            },
            Message::SuggestionsLoaded { ticket, result } => {
                self.search.apply_suggestions(ticket, result.map_err(|e| e.to_string()));
                Vec::new()
            }
            Message::SuggestionPicked(title) => {
                let request = self.search.commit_text(title);
                self.start_search(request)
            }
            Message::DismissSuggestions => {
                self.search.hide_suggestions();
                Vec::new()
            }
            Message::SubmitSearch => {
                let request = self.search.commit();
                self.start_search(request)
            }
            Message::OrderByChanged(order_by) => {
                let mut options = self.search.options();
                options.order_by = order_by;
                let request = self.search.set_options(options);
                self.start_search(request)
            }
            Message::PrintTypeChanged(print_type) => {
                let mut options = self.search.options();
                options.print_type = print_type;
                let request = self.search.set_options(options);
                self.start_search(request)
            }
            Message::LanguageChanged(language) => {
                let mut options = self.search.options();
                options.language = language;
                let request = self.search.set_options(options);
                self.start_search(request)
            }
            Message::SearchFinished { ticket, result } => {
                let accepted = self.search.finish_search(ticket, result.map_err(|e| {
                    log::warn!("Search failed: {}", e);
                    e.user_message("Search failed")
                }));
                if !accepted {
                    log::debug!("Dropping superseded search results");
                }
                Vec::new()
            }

            Message::CategoryPicked(name) => {
                let request = self.search.commit_text(category_query(&name));
                self.start_search(request)
            }
            Message::GroupToggled(group_id) => {
                if !self.is_signed_in() {
                    return self.require_sign_in("Please sign in to join a group");
                }
                let name = GROUPS.iter().find(|g| g.id == group_id).map(|g| g.name).unwrap_or("the group");
                let joining = !self.store.state().joined_groups.contains(&group_id);
                self.store.dispatch(StoreEvent::GroupToggled(group_id));
                if joining {
                    self.alert(LogLevel::Success, format!("Joined {}", name))
                } else {
                    self.alert(LogLevel::Info, format!("Left {}", name))
                }
            }
        }
    }

    fn select_tab(&mut self, tab: Tab) -> Vec<Effect> {
        if tab.requires_sign_in() && !self.is_signed_in() {
            return self.require_sign_in("Please sign in to continue");
        }
        self.nav.switch_tab(tab);
        if tab == Tab::MyBooks && !self.shelves_loaded {
            return self.fetch_shelves();
        }
        Vec::new()
    }

    fn fetch_shelves(&self) -> Vec<Effect> {
        match &self.token {
            Some(token) => vec![Effect::FetchShelves { epoch: self.epoch, revision: self.shelf_revision, token: token.clone() }],
            None => Vec::new(),
        }
    }

    fn open_auth(&mut self, form: AuthForm) {
        self.modals.auth_form = form;
        self.modals.open_auth();
    }

    fn require_sign_in(&mut self, reason: &str) -> Vec<Effect> {
        self.open_auth(AuthForm::Login);
        self.alert(LogLevel::Info, reason)
    }

    fn alert(&mut self, level: LogLevel, message: impl Into<String>) -> Vec<Effect> {
        self.log_seq += 1;
        self.logger.clear();
        self.logger.push(LogMessage::new(level, message));
        vec![Effect::ClearLogAfter { seq: self.log_seq, delay: LOG_LIFETIME }]
    }

    fn on_auth_completed(&mut self, form: AuthForm, result: Result<AuthSession, ApiError>) -> Vec<Effect> {
        self.auth_pending = false;
        let session = match result {
            Ok(session) => session,
            Err(e) => {
                let fallback = match form {
                    AuthForm::Login => "Login failed",
                    AuthForm::Register => "Registration failed",
                };
                log::warn!("{}: {}", fallback, e);
                return self.alert(LogLevel::Error, e.user_message(fallback));
            }
        };

        if let Err(e) = self.session.save(&session.token) {
            log::error!("Failed to store session token: {}", e);
        }
        log::info!("Signed in as {}", session.user.email);
        let welcome = format!("Welcome, {}!", session.user.name);
        self.token = Some(session.token.clone());
        self.store.dispatch(StoreEvent::SignedIn(session.user));
        self.modals.close_all();
        self.login = LoginInput::default();
        self.register = RegisterInput::default();

        let mut effects = self.alert(LogLevel::Success, welcome);
        effects.push(Effect::FetchProfile { epoch: self.epoch, token: session.token });
        effects
    }

    /// Profile or shelf fetch failed. Rejected credentials end the session;
    /// anything else keeps it so the user can retry.
    fn on_session_failure(&mut self, error: ApiError, what: &str) -> Vec<Effect> {
        if error.is_auth_rejection() {
            log::warn!("Stored session was rejected, signing out");
            self.end_session();
            return self.alert(LogLevel::Warning, "Your session has expired. Please sign in again.");
        }
        log::error!("{}: {}", what, error);
        self.alert(LogLevel::Error, error.user_message(what))
    }

    fn logout(&mut self) -> Vec<Effect> {
        log::info!("Signing out");
        self.end_session();
        self.alert(LogLevel::Info, "You have been logged out")
    }

    /// Forgets the credential and every piece of per-user state. Results of
    /// requests issued before this point are dropped by the epoch check.
    fn end_session(&mut self) {
        self.epoch += 1;
        self.token = None;
        if let Err(e) = self.session.clear() {
            log::error!("Failed to clear stored session: {}", e);
        }
        self.store.dispatch(StoreEvent::SignedOut);
        self.shelf_queue.clear();
        self.shelves_loaded = false;
        self.auth_pending = false;
        self.reader_link = None;
        self.nav.reset_to_home();
        self.modals.close_all();
        self.login = LoginInput::default();
        self.register = RegisterInput::default();
    }

    fn feed(&self, result: Result<Vec<Book>, ApiError>, what: &str) -> HomeFeed {
        match result {
            Ok(mut books) => {
                books.truncate(self.limits.home as usize);
                HomeFeed::Ready(books)
            }
            Err(e) => {
                log::error!("{}: {}", what, e);
                HomeFeed::Failed(e.user_message(what))
            }
        }
    }

    fn enqueue_shelf(&mut self, job: ShelfJob) -> Vec<Effect> {
        let token = match &self.token {
            Some(token) => token.clone(),
            None => return Vec::new(),
        };
        match self.shelf_queue.enqueue(job) {
            Some(job) => vec![Effect::UpsertShelf { epoch: self.epoch, token, job }],
            None => {
                log::debug!("Shelf update queued behind {} other(s)", self.shelf_queue.waiting());
                Vec::new()
            }
        }
    }

    fn on_shelf_updated(&mut self, epoch: u64, job: ShelfJob, result: Result<(), ApiError>) -> Vec<Effect> {
        if epoch != self.epoch {
            log::debug!("Dropping shelf update from an earlier session");
            return Vec::new();
        }
        let mut effects = match result {
            Ok(()) => {
                let message = format!("Added \"{}\" to {}", job.book.display_title(), job.shelf.label());
                self.store.dispatch(StoreEvent::MovedToShelf { book: job.book, shelf: job.shelf });
                self.shelf_revision += 1;
                self.alert(LogLevel::Success, message)
            }
            Err(e) => {
                log::warn!("Shelf update for {} failed: {}", job.book.id, e);
                self.alert(LogLevel::Error, e.user_message("Failed to add book to shelf"))
            }
        };
        if let (Some(next), Some(token)) = (self.shelf_queue.complete(), &self.token) {
            effects.push(Effect::UpsertShelf { epoch: self.epoch, token: token.clone(), job: next });
        }
        effects
    }

    fn start_search(&mut self, request: Option<SearchRequest>) -> Vec<Effect> {
        match request {
            Some(request) => {
                self.store.dispatch(StoreEvent::QueryCommitted(request.query.clone()));
                if self.nav.active() != Tab::Browse {
                    self.nav.switch_tab(Tab::Browse);
                }
                vec![Effect::Search { request, limit: self.limits.search }]
            }
            None => {
                self.store.dispatch(StoreEvent::QueryCommitted(String::new()));
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::book::{sample_book, Shelves};
    use crate::client::models::search_state::SearchOutcome;
    use crate::client::models::ui_state::ModalKind;
    use crate::client::models::user::{Profile, ProfileStats, User};
    use crate::client::render::cards::{render_collection, CardAction, CardVariant, EmptyContext, Layout};

    fn ada() -> User {
        User { id: Some(1), name: "Ada".into(), email: "ada@example.com".into() }
    }

    fn fresh() -> BookifyState {
        BookifyState::new(SessionStore::in_memory(), &ClientConfig::default())
    }

    /// Runs a login through to loaded shelves.
    fn signed_in(shelves: Shelves) -> BookifyState {
        let mut state = fresh();
        state.boot(Tab::Home);
        state.update(Message::AuthCompleted {
            form: AuthForm::Login,
            result: Ok(AuthSession { token: "tok".into(), user: ada() }),
        });
        state.update(Message::ProfileLoaded {
            epoch: state.epoch(),
            result: Ok(Profile { user: ada(), stats: ProfileStats::default() }),
        });
        state.update(Message::ShelvesLoaded { epoch: state.epoch(), revision: state.shelf_revision(), result: Ok(shelves) });
        state
    }

    fn upserts(effects: &[Effect]) -> Vec<&ShelfJob> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::UpsertShelf { job, .. } => Some(job),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn boot_without_session_lands_home_and_loads_feeds() {
        let mut state = fresh();
        let effects = state.boot(Tab::Profile);
        assert_eq!(state.nav.active(), Tab::Home);
        assert_eq!(effects, vec![Effect::FetchTrending { limit: 12 }, Effect::FetchNewReleases { limit: 12 }]);
    }

    #[test]
    fn boot_with_stored_token_fetches_profile() {
        let session = SessionStore::in_memory();
        session.save("stored").unwrap();
        session.save_user(&ada()).unwrap();
        let mut state = BookifyState::new(session, &ClientConfig::default());
        let effects = state.boot(Tab::MyBooks);
        assert!(effects.contains(&Effect::FetchProfile { epoch: 0, token: "stored".into() }));
        assert_eq!(state.nav.active(), Tab::MyBooks);
        assert_eq!(state.store.state().current_user, Some(ada()));
    }

    #[test]
    fn login_then_profile_then_shelves_in_server_order() {
        let mut state = fresh();
        state.boot(Tab::Home);
        state.login.email = "ada@example.com".into();
        state.login.password = "secret".into();
        assert_eq!(
            state.update(Message::SubmitLogin),
            vec![Effect::Login { email: "ada@example.com".into(), password: "secret".into() }]
        );

        let effects = state.update(Message::AuthCompleted {
            form: AuthForm::Login,
            result: Ok(AuthSession { token: "tok".into(), user: ada() }),
        });
        assert!(effects.contains(&Effect::FetchProfile { epoch: 0, token: "tok".into() }));
        assert!(!state.modals.any_open());

        let effects = state.update(Message::ProfileLoaded {
            epoch: 0,
            result: Ok(Profile { user: ada(), stats: ProfileStats { books_read: 3, ..Default::default() } }),
        });
        assert_eq!(effects, vec![Effect::FetchShelves { epoch: 0, revision: 0, token: "tok".into() }]);

        let reading = vec![sample_book("r1", "First"), sample_book("r2", "Second")];
        state.update(Message::ShelvesLoaded { epoch: 0, revision: 0, result: Ok(Shelves::new(reading, vec![], vec![])) });
        let ids: Vec<&str> = state.store.state().shelves.get(ShelfKind::Reading).iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2"]);
        assert_eq!(state.store.state().stats.map(|s| s.books_read), Some(3));
    }

    #[test]
    fn double_submit_sends_one_login() {
        let mut state = fresh();
        state.login.email = "ada@example.com".into();
        state.login.password = "secret".into();
        assert_eq!(state.update(Message::SubmitLogin).len(), 1);
        assert!(state.update(Message::SubmitLogin).is_empty());
    }

    #[test]
    fn rejected_login_shows_server_message() {
        let mut state = fresh();
        state.update(Message::AuthCompleted {
            form: AuthForm::Login,
            result: Err(ApiError::Rejected { status: 401, message: Some("Invalid credentials".into()) }),
        });
        assert_eq!(state.logger[0], LogMessage::new(LogLevel::Error, "Invalid credentials"));
        assert!(!state.is_signed_in());
    }

    #[test]
    fn logout_clears_everything_and_drops_late_results() {
        let mut state = signed_in(Shelves::new(vec![sample_book("r1", "Dune")], vec![], vec![]));
        state.update(Message::GroupToggled("scifi".into()));
        state.update(Message::TabSelected(Tab::Profile));
        let old_epoch = state.epoch();

        let effects = state.update(Message::Logout);
        assert!(!effects.iter().any(|e| matches!(e, Effect::FetchProfile { .. })));
        assert!(state.token().is_none());
        assert!(state.store.state().current_user.is_none());
        assert!(state.store.state().shelves.is_empty());
        assert!(state.store.state().joined_groups.is_empty());
        assert_eq!(state.nav.active(), Tab::Home);
        assert!(state.session.load_record().token.is_none());

        let late = state.update(Message::ProfileLoaded {
            epoch: old_epoch,
            result: Ok(Profile { user: ada(), stats: ProfileStats::default() }),
        });
        assert!(late.is_empty());
        assert!(state.store.state().current_user.is_none());
        assert!(state.update(Message::RefreshProfile).is_empty());
    }

    #[test]
    fn expired_token_is_forgotten() {
        let session = SessionStore::in_memory();
        session.save("expired").unwrap();
        let mut state = BookifyState::new(session, &ClientConfig::default());
        state.boot(Tab::Home);
        state.update(Message::ProfileLoaded { epoch: 0, result: Err(ApiError::Rejected { status: 401, message: None }) });
        assert!(state.token().is_none());
        assert!(state.session.load().is_none());
    }

    #[test]
    fn unreachable_profile_keeps_token() {
        let session = SessionStore::in_memory();
        session.save("kept").unwrap();
        let mut state = BookifyState::new(session, &ClientConfig::default());
        state.boot(Tab::Home);
        state.update(Message::ProfileLoaded { epoch: 0, result: Err(ApiError::Timeout) });
        assert_eq!(state.token(), Some("kept"));
        assert_eq!(state.logger[0].level, LogLevel::Error);
    }

    #[test]
    fn mark_as_read_moves_to_head_of_history() {
        let book = sample_book("r1", "Dune");
        let mut state = signed_in(Shelves::new(vec![book.clone()], vec![], vec![sample_book("h1", "Old")]));
        let effects = state.update(Message::MarkAsReadPressed(book.clone()));
        let job = upserts(&effects)[0].clone();
        assert_eq!(job.shelf, ShelfKind::History);

        state.update(Message::ShelfUpdated { epoch: state.epoch(), job, result: Ok(()) });
        let shelves = &state.store.state().shelves;
        assert!(shelves.get(ShelfKind::Reading).is_empty());
        assert_eq!(shelves.get(ShelfKind::History)[0].id, "r1");
        assert_eq!(shelves.get(ShelfKind::History).len(), 2);
    }

    #[test]
    fn carousel_click_issues_one_request() {
        let books = vec![sample_book("a", "A"), sample_book("b", "B")];
        let mut state = signed_in(Shelves::new(books.clone(), vec![], vec![]));
        let view = render_collection(&books, CardVariant::InProgress, Layout::Carousel, EmptyContext::Shelf);
        let (copy, slot) = view.visual_cards()[2];
        assert!(slot.mirror);

        let effects = state.update(copy.intent(CardAction::MarkAsRead));
        assert_eq!(upserts(&effects).len(), 1);
        assert_eq!(state.shelf_queue().waiting(), 0);
    }

    #[test]
    fn rapid_shelf_changes_are_serialized() {
        let book = sample_book("x", "X");
        let mut state = signed_in(Shelves::default());
        state.update(Message::AddToShelfPressed(book.clone()));
        let first = state.update(Message::ShelfChosen(ShelfKind::Reading));
        state.update(Message::AddToShelfPressed(book.clone()));
        let second = state.update(Message::ShelfChosen(ShelfKind::WantToRead));
        assert_eq!(upserts(&first).len(), 1);
        assert!(upserts(&second).is_empty());

        let job = upserts(&first)[0].clone();
        let next = state.update(Message::ShelfUpdated { epoch: state.epoch(), job, result: Ok(()) });
        let next_job = upserts(&next)[0].clone();
        assert_eq!(next_job.shelf, ShelfKind::WantToRead);
        state.update(Message::ShelfUpdated { epoch: state.epoch(), job: next_job, result: Ok(()) });
        assert_eq!(state.store.state().shelves.shelf_of("x"), Some(ShelfKind::WantToRead));
    }

    #[test]
    fn failed_shelf_update_leaves_shelves_alone() {
        let book = sample_book("x", "X");
        let mut state = signed_in(Shelves::default());
        let effects = state.update(Message::MarkAsReadPressed(book));
        let job = upserts(&effects)[0].clone();
        state.update(Message::ShelfUpdated {
            epoch: state.epoch(),
            job,
            result: Err(ApiError::Rejected { status: 500, message: None }),
        });
        assert!(state.store.state().shelves.is_empty());
        assert_eq!(state.logger[0], LogMessage::new(LogLevel::Error, "Failed to add book to shelf"));
    }

    #[test]
    fn signed_out_actions_open_auth() {
        let mut state = fresh();
        state.boot(Tab::Home);
        let effects = state.update(Message::AddToShelfPressed(sample_book("a", "A")));
        assert!(matches!(&effects[..], [Effect::ClearLogAfter { delay, .. }] if *delay == LOG_LIFETIME));
        assert!(state.modals.is_open(ModalKind::Auth));
        state.update(Message::CloseModals);

        state.update(Message::TabSelected(Tab::MyBooks));
        assert!(state.modals.is_open(ModalKind::Auth));
        assert_eq!(state.nav.active(), Tab::Home);
    }

    #[test]
    fn joined_groups_persist_immediately() {
        let mut state = signed_in(Shelves::default());
        state.update(Message::GroupToggled("fantasy".into()));
        assert!(state.session.load_record().joined_groups.contains("fantasy"));
        state.update(Message::GroupToggled("fantasy".into()));
        assert!(state.session.load_record().joined_groups.is_empty());
    }

    #[test]
    fn category_click_searches_subject_on_browse() {
        let mut state = fresh();
        state.boot(Tab::Categories);
        let effects = state.update(Message::CategoryPicked("Fantasy".into()));
        assert_eq!(state.nav.active(), Tab::Browse);
        match &effects[..] {
            [Effect::Search { request, limit: 40 }] => assert_eq!(request.query, "subject:\"Fantasy\""),
            other => panic!("unexpected effects {:?}", other),
        }
        assert_eq!(state.store.state().current_query, "subject:\"Fantasy\"");
    }

    #[test]
    fn search_input_schedules_then_fetches_suggestions() {
        let mut state = fresh();
        assert!(state.update(Message::SearchInputChanged("du".into())).is_empty());
        let ticket = match &state.update(Message::SearchInputChanged("dune".into()))[..] {
            [Effect::ScheduleSuggestion { ticket, delay }] => {
                assert_eq!(*delay, Duration::from_millis(300));
                *ticket
            }
            other => panic!("unexpected effects {:?}", other),
        };
        match &state.update(Message::SuggestionDue(ticket))[..] {
            [Effect::FetchSuggestions { request, limit: 5 }] => assert_eq!(request.query, "dune"),
            other => panic!("unexpected effects {:?}", other),
        }
    }

    #[test]
    fn failed_search_shows_retry_message() {
        let mut state = fresh();
        state.update(Message::SearchInputChanged("dune".into()));
        let ticket = match &state.update(Message::SubmitSearch)[..] {
            [Effect::Search { request, .. }] => request.ticket,
            other => panic!("unexpected effects {:?}", other),
        };
        state.update(Message::SearchFinished { ticket, result: Err(ApiError::Unreachable("refused".into())) });
        assert_eq!(state.search.outcome(), &SearchOutcome::Failed("Search failed. Please try again.".into()));
    }

    #[test]
    fn read_now_shelves_as_reading_and_keeps_link() {
        let mut book = sample_book("g1", "Dune");
        book.web_reader_link = Some("https://books.google.com/books?id=g1".into());
        let mut state = signed_in(Shelves::default());
        let effects = state.update(Message::ReadNowPressed(book));
        assert_eq!(upserts(&effects)[0].shelf, ShelfKind::Reading);
        assert_eq!(state.reader_link.as_deref(), Some("https://books.google.com/books?id=g1"));
    }

    #[test]
    fn boot_with_token_but_no_user_stays_home() {
        let session = SessionStore::in_memory();
        session.save("orphan").unwrap();
        let mut state = BookifyState::new(session, &ClientConfig::default());
        let effects = state.boot(Tab::MyBooks);
        assert_eq!(state.nav.active(), Tab::Home);
        assert!(effects.contains(&Effect::FetchProfile { epoch: 0, token: "orphan".into() }));
    }

    #[test]
    fn snapshot_from_before_a_move_is_refetched() {
        let mut state = fresh();
        state.boot(Tab::Home);
        state.update(Message::AuthCompleted {
            form: AuthForm::Login,
            result: Ok(AuthSession { token: "tok".into(), user: ada() }),
        });
        let fetch = state.update(Message::ProfileLoaded {
            epoch: 0,
            result: Ok(Profile { user: ada(), stats: ProfileStats::default() }),
        });
        let issued_at = match &fetch[..] {
            [Effect::FetchShelves { revision, .. }] => *revision,
            other => panic!("unexpected effects {:?}", other),
        };

        let effects = state.update(Message::MarkAsReadPressed(sample_book("x", "X")));
        let job = upserts(&effects)[0].clone();
        state.update(Message::ShelfUpdated { epoch: 0, job, result: Ok(()) });
        assert_eq!(state.store.state().shelves.shelf_of("x"), Some(ShelfKind::History));

        let again = state.update(Message::ShelvesLoaded { epoch: 0, revision: issued_at, result: Ok(Shelves::default()) });
        assert_eq!(state.store.state().shelves.shelf_of("x"), Some(ShelfKind::History));
        assert!(!state.shelves_loaded);
        assert_eq!(again, vec![Effect::FetchShelves { epoch: 0, revision: state.shelf_revision(), token: "tok".into() }]);

        let fresh_snapshot = Shelves::new(vec![], vec![], vec![sample_book("x", "X")]);
        state.update(Message::ShelvesLoaded { epoch: 0, revision: state.shelf_revision(), result: Ok(fresh_snapshot) });
        assert!(state.shelves_loaded);
        assert_eq!(state.store.state().shelves.shelf_of("x"), Some(ShelfKind::History));
    }

    #[test]
    fn earlier_alert_timer_leaves_newer_alert_up() {
        let mut state = fresh();
        state.boot(Tab::Home);
        let first = match &state.update(Message::GroupToggled("scifi".into()))[..] {
            [Effect::ClearLogAfter { seq, .. }] => *seq,
            other => panic!("unexpected effects {:?}", other),
        };
        state.update(Message::CloseModals);
        let second = match &state.update(Message::AddToShelfPressed(sample_book("a", "A")))[..] {
            [Effect::ClearLogAfter { seq, .. }] => *seq,
            other => panic!("unexpected effects {:?}", other),
        };
        assert_ne!(first, second);

        state.update(Message::ClearLog(first));
        assert_eq!(state.logger, vec![LogMessage::new(LogLevel::Info, "Please sign in to manage your shelves")]);
        state.update(Message::ClearLog(second));
        assert!(state.logger.is_empty());
    }

    #[test]
    fn home_feeds_are_capped() {
        let mut state = fresh();
        let books: Vec<Book> = (0..20).map(|i| sample_book(&i.to_string(), "T")).collect();
        state.update(Message::TrendingLoaded(Ok(books)));
        assert!(matches!(&state.trending, HomeFeed::Ready(b) if b.len() == 12));
        state.update(Message::NewReleasesLoaded(Err(ApiError::Timeout)));
        assert!(matches!(&state.new_releases, HomeFeed::Failed(_)));
    }
}
