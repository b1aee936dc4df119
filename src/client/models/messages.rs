use crate::client::models::book::{Book, ShelfKind, Shelves};
use crate::client::models::navigation::Tab;
use crate::client::models::search_state::{Language, OrderBy, PrintType, SearchTicket};
use crate::client::models::shelf_queue::ShelfJob;
use crate::client::models::ui_state::AuthForm;
use crate::client::models::user::{AuthSession, Profile};
use crate::client::services::api_client::ApiError;
use crate::client::utils::debounce::DebounceTicket;

#[derive(Debug, Clone)]
pub enum Message {
    NoOp,
    ClearLog(u64),
    // Navigation
    TabSelected(Tab),
    HistoryBack,
    HistoryForward,
    ToggleSidebar,
    // Modals
    OpenAuth,
    AuthFormSelected(AuthForm),
    CloseModals,
    // Auth forms
    LoginEmailChanged(String),
    LoginPasswordChanged(String),
    RegisterNameChanged(String),
    RegisterEmailChanged(String),
    RegisterPasswordChanged(String),
    SubmitLogin,
    SubmitRegister,
    AuthCompleted { form: AuthForm, result: Result<AuthSession, ApiError> },
    ProfileLoaded { epoch: u64, result: Result<Profile, ApiError> },
    ShelvesLoaded { epoch: u64, revision: u64, result: Result<Shelves, ApiError> },
    RefreshProfile,
    Logout,
    // Home page feeds
    TrendingLoaded(Result<Vec<Book>, ApiError>),
    NewReleasesLoaded(Result<Vec<Book>, ApiError>),
    // Book card actions
    AddToShelfPressed(Book),
    ReadNowPressed(Book),
    MarkAsReadPressed(Book),
    ShelfChosen(ShelfKind),
    ShelfUpdated { epoch: u64, job: ShelfJob, result: Result<(), ApiError> },
    // Search
    SearchInputChanged(String),
    SuggestionDue(DebounceTicket),
    SuggestionsLoaded { ticket: DebounceTicket, result: Result<Vec<Book>, ApiError> },
    SuggestionPicked(String),
    DismissSuggestions,
    SubmitSearch,
    OrderByChanged(OrderBy),
    PrintTypeChanged(PrintType),
    LanguageChanged(Language),
    SearchFinished { ticket: SearchTicket, result: Result<Vec<Book>, ApiError> },
    // Categories and community
    CategoryPicked(String),
    GroupToggled(String),
}
