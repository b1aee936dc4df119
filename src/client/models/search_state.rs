use std::time::Duration;

use crate::client::models::book::Book;
use crate::client::utils::debounce::{DebounceTicket, Debouncer};

/// Shortest trimmed query that triggers suggestions.
pub const MIN_SUGGESTION_QUERY: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    #[default]
    Relevance,
    Newest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintType {
    #[default]
    All,
    Books,
    Magazines,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Any,
    English,
    Spanish,
    French,
    German,
    Italian,
}

impl OrderBy {
    pub const ALL: [OrderBy; 2] = [OrderBy::Relevance, OrderBy::Newest];

    pub fn api_value(self) -> &'static str {
        match self {
            OrderBy::Relevance => "relevance",
            OrderBy::Newest => "newest",
        }
    }
}

impl PrintType {
    pub const ALL: [PrintType; 3] = [PrintType::All, PrintType::Books, PrintType::Magazines];

    pub fn api_value(self) -> &'static str {
        match self {
            PrintType::All => "all",
            PrintType::Books => "books",
            PrintType::Magazines => "magazines",
        }
    }
}

impl Language {
    pub const ALL: [Language; 6] =
        [Language::Any, Language::English, Language::Spanish, Language::French, Language::German, Language::Italian];

    pub fn api_value(self) -> &'static str {
        match self {
            Language::Any => "any",
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Italian => "it",
        }
    }
}

impl std::fmt::Display for OrderBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderBy::Relevance => "Relevance",
            OrderBy::Newest => "Newest",
        };
        write!(f, "{}", s)
    }
}

impl std::fmt::Display for PrintType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PrintType::All => "All",
            PrintType::Books => "Books",
            PrintType::Magazines => "Magazines",
        };
        write!(f, "{}", s)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Language::Any => "Any language",
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    pub order_by: OrderBy,
    pub print_type: PrintType,
    pub language: Language,
}

impl SearchOptions {
    pub fn newest() -> Self {
        Self { order_by: OrderBy::Newest, ..Self::default() }
    }

    /// Query parameters for the non-default options only.
    pub fn query_params(&self) -> Vec<(&'static str, &'static str)> {
        let mut params = Vec::new();
        if self.order_by != OrderBy::default() {
            params.push(("orderBy", self.order_by.api_value()));
        }
        if self.print_type != PrintType::default() {
            params.push(("printType", self.print_type.api_value()));
        }
        if self.language != Language::default() {
            params.push(("langRestrict", self.language.api_value()));
        }
        params
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionRequest {
    pub ticket: DebounceTicket,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub ticket: SearchTicket,
    pub query: String,
    pub options: SearchOptions,
}

/// What the results area shows. Exactly one of these at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchOutcome {
    #[default]
    Idle,
    Searching,
    Results(Vec<Book>),
    Empty,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Debouncing,
    Suggesting,
    Searching,
    Results,
    Empty,
    Failed,
}

#[derive(Debug, Clone)]
pub struct SearchState {
    input: String,
    options: SearchOptions,
    debouncer: Debouncer,
    suggestion_in_flight: Option<DebounceTicket>,
    suggestions: Vec<Book>,
    suggestions_visible: bool,
    outcome: SearchOutcome,
    searches_issued: u64,
    active_search: Option<SearchTicket>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(Duration::from_millis(300))
    }
}

impl SearchState {
    pub fn new(debounce_window: Duration) -> Self {
        Self {
            input: String::new(),
            options: SearchOptions::default(),
            debouncer: Debouncer::new(debounce_window),
            suggestion_in_flight: None,
            suggestions: Vec::new(),
            suggestions_visible: false,
            outcome: SearchOutcome::Idle,
            searches_issued: 0,
            active_search: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    pub fn suggestions(&self) -> &[Book] {
        if !self.suggestions_visible {
            return &[];
        }
        &self.suggestions
    }

    pub fn suggestions_visible(&self) -> bool {
        self.suggestions_visible
    }

    pub fn outcome(&self) -> &SearchOutcome {
        &self.outcome
    }

    pub fn debounce_window(&self) -> Duration {
        self.debouncer.window()
    }

    pub fn phase(&self) -> SearchPhase {
        match &self.outcome {
            SearchOutcome::Searching => SearchPhase::Searching,
            _ if self.suggestion_in_flight.is_some() => SearchPhase::Suggesting,
            _ if self.debouncer.is_pending() => SearchPhase::Debouncing,
            SearchOutcome::Idle => SearchPhase::Idle,
            SearchOutcome::Results(_) => SearchPhase::Results,
            SearchOutcome::Empty => SearchPhase::Empty,
            SearchOutcome::Failed(_) => SearchPhase::Failed,
        }
    }

    /// Records a keystroke. Returns a ticket to schedule when the query is
    /// long enough for suggestions; shorter queries cancel and hide them.
    pub fn on_input(&mut self, text: String) -> Option<DebounceTicket> {
        self.input = text;
        if self.input.trim().chars().count() < MIN_SUGGESTION_QUERY {
            self.debouncer.cancel();
            self.suggestion_in_flight = None;
            self.hide_suggestions();
            return None;
        }
        Some(self.debouncer.schedule())
    }

    /// The debounce window for `ticket` elapsed. Superseded tickets yield nothing.
    pub fn on_debounce_elapsed(&mut self, ticket: DebounceTicket) -> Option<SuggestionRequest> {
        if !self.debouncer.fire(ticket) {
            return None;
        }
        let query = self.input.trim().to_string();
        if query.chars().count() < MIN_SUGGESTION_QUERY {
            return None;
        }
        self.suggestion_in_flight = Some(ticket);
        Some(SuggestionRequest { ticket, query })
    }

    pub fn apply_suggestions(&mut self, ticket: DebounceTicket, result: Result<Vec<Book>, String>) -> bool {
        if self.suggestion_in_flight != Some(ticket) {
            return false;
        }
        self.suggestion_in_flight = None;
        match result {
            Ok(books) if !books.is_empty() => {
                self.suggestions = books;
                self.suggestions_visible = true;
            }
            Ok(_) => self.hide_suggestions(),
            Err(err) => {
                log::warn!("suggestion fetch failed: {}", err);
                self.hide_suggestions();
            }
        }
        true
    }

    pub fn hide_suggestions(&mut self) {
        self.suggestions_visible = false;
        self.suggestions.clear();
    }

    /// Commits the current input as a full search.
    pub fn commit(&mut self) -> Option<SearchRequest> {
        self.debouncer.cancel();
        self.suggestion_in_flight = None;
        self.hide_suggestions();

        let query = self.input.trim().to_string();
        if query.is_empty() {
            self.active_search = None;
            self.outcome = SearchOutcome::Idle;
            return None;
        }
        self.searches_issued += 1;
        let ticket = SearchTicket(self.searches_issued);
        self.active_search = Some(ticket);
        self.outcome = SearchOutcome::Searching;
        Some(SearchRequest { ticket, query, options: self.options })
    }

    /// Replaces the input (suggestion pick, category click) and commits.
    pub fn commit_text(&mut self, text: String) -> Option<SearchRequest> {
        self.input = text;
        self.commit()
    }

    /// Changing an option re-runs the search only when there is a query.
    pub fn set_options(&mut self, options: SearchOptions) -> Option<SearchRequest> {
        self.options = options;
        if self.input.trim().is_empty() {
            return None;
        }
        self.commit()
    }

    pub fn finish_search(&mut self, ticket: SearchTicket, result: Result<Vec<Book>, String>) -> bool {
        if self.active_search != Some(ticket) {
            return false;
        }
        self.active_search = None;
        self.outcome = match result {
            Ok(books) if books.is_empty() => SearchOutcome::Empty,
            Ok(books) => SearchOutcome::Results(books),
            Err(message) => SearchOutcome::Failed(message),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::book::sample_book;
    use crate::client::utils::debounce;

    #[test]
    fn default_options_add_no_params() {
        assert!(SearchOptions::default().query_params().is_empty());
        let opts = SearchOptions { order_by: OrderBy::Newest, print_type: PrintType::Books, language: Language::French };
        assert_eq!(opts.query_params(), vec![("orderBy", "newest"), ("printType", "books"), ("langRestrict", "fr")]);
    }

    #[test]
    fn short_query_never_schedules_and_hides_list() {
        let mut s = SearchState::default();
        let t = s.on_input("dune".into()).unwrap();
        let req = s.on_debounce_elapsed(t).unwrap();
        s.apply_suggestions(req.ticket, Ok(vec![sample_book("1", "Dune")]));
        assert!(s.suggestions_visible());

        assert!(s.on_input("du".into()).is_none());
        assert!(!s.suggestions_visible());
        assert_eq!(s.phase(), SearchPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn five_quick_inputs_yield_one_suggestion_request() {
        let mut s = SearchState::default();
        let window = s.debounce_window();
        let mut pending = Vec::new();
        for text in ["dun", "dune", "dune ", "dune m", "dune me"] {
            pending.push(s.on_input(text.to_string()).unwrap());
            tokio::time::advance(Duration::from_millis(50)).await;
        }
        let mut requests = Vec::new();
        for ticket in pending {
            let fired = debounce::wait(ticket, window).await;
            if let Some(req) = s.on_debounce_elapsed(fired) {
                requests.push(req);
            }
        }
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query, "dune me");
    }

    #[test]
    fn commit_cancels_pending_suggestion_and_discards_late_results() {
        let mut s = SearchState::default();
        let t = s.on_input("dune".into()).unwrap();
        let req = s.on_debounce_elapsed(t).unwrap();
        let search = s.commit().unwrap();
        assert_eq!(s.phase(), SearchPhase::Searching);
        assert!(!s.apply_suggestions(req.ticket, Ok(vec![sample_book("1", "Dune")])));
        assert!(!s.suggestions_visible());

        let t2 = s.on_input("dune messiah".into()).unwrap();
        s.commit();
        assert!(s.on_debounce_elapsed(t2).is_none());
        assert!(!s.finish_search(search.ticket, Ok(vec![])), "superseded search is discarded");
    }

    #[test]
    fn search_outcomes_are_exclusive() {
        let mut s = SearchState::default();
        s.on_input("dune".into());
        let req = s.commit().unwrap();
        s.finish_search(req.ticket, Ok(vec![]));
        assert_eq!(s.outcome(), &SearchOutcome::Empty);

        let req = s.commit().unwrap();
        assert_eq!(s.outcome(), &SearchOutcome::Searching);
        s.finish_search(req.ticket, Err("Search failed. Please try again.".into()));
        assert!(matches!(s.outcome(), SearchOutcome::Failed(_)));

        let req = s.commit().unwrap();
        s.finish_search(req.ticket, Ok(vec![sample_book("1", "Dune")]));
        assert!(matches!(s.outcome(), SearchOutcome::Results(books) if books.len() == 1));
    }

    #[test]
    fn option_change_requeries_only_with_query() {
        let mut s = SearchState::default();
        assert!(s.set_options(SearchOptions::newest()).is_none());
        s.on_input("dune".into());
        let req = s.set_options(SearchOptions::default()).unwrap();
        assert_eq!(req.query, "dune");
    }

    #[test]
    fn empty_commit_clears_results() {
        let mut s = SearchState::default();
        s.on_input("dune".into());
        let req = s.commit().unwrap();
        s.finish_search(req.ticket, Ok(vec![sample_book("1", "Dune")]));
        assert!(s.commit_text("   ".into()).is_none());
        assert_eq!(s.outcome(), &SearchOutcome::Idle);
    }
}
