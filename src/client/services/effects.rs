use crate::client::models::app_state::Effect;
use crate::client::models::book::Book;
use crate::client::models::messages::Message;
use crate::client::models::search_state::SearchOptions;
use crate::client::models::ui_state::AuthForm;
use crate::client::services::api_client::{ApiError, BookifyApi};
use crate::client::utils::debounce;

const TRENDING_FALLBACK_QUERY: &str = "bestselling fiction 2024";
const NEW_RELEASES_FALLBACK_QUERY: &str = "new release books";

/// Executes one effect and reports its outcome as a message.
pub async fn run(api: BookifyApi, effect: Effect) -> Message {
    match effect {
        Effect::Login { email, password } => {
            let result = api.login(&email, &password).await;
            Message::AuthCompleted { form: AuthForm::Login, result }
        }
        Effect::Register { name, email, password } => {
            let result = api.register(&name, &email, &password).await;
            Message::AuthCompleted { form: AuthForm::Register, result }
        }
        Effect::FetchProfile { epoch, token } => Message::ProfileLoaded { epoch, result: api.fetch_profile(&token).await },
        Effect::FetchShelves { epoch, revision, token } => {
            Message::ShelvesLoaded { epoch, revision, result: api.fetch_shelves(&token).await }
        }
        Effect::UpsertShelf { epoch, token, job } => {
            let result = api.upsert_shelf_entry(&job.book, job.shelf, &token).await;
            Message::ShelfUpdated { epoch, job, result }
        }
        Effect::FetchTrending { limit } => {
            let primary = api.fetch_trending().await;
            Message::TrendingLoaded(with_fallback(&api, primary, TRENDING_FALLBACK_QUERY, SearchOptions::default(), limit).await)
        }
        Effect::FetchNewReleases { limit } => {
            let primary = api.fetch_new_releases().await;
            Message::NewReleasesLoaded(with_fallback(&api, primary, NEW_RELEASES_FALLBACK_QUERY, SearchOptions::newest(), limit).await)
        }
        Effect::ScheduleSuggestion { ticket, delay } => Message::SuggestionDue(debounce::wait(ticket, delay).await),
        Effect::FetchSuggestions { request, limit } => {
            let result = api.search_books(&request.query, &SearchOptions::default(), limit).await;
            Message::SuggestionsLoaded { ticket: request.ticket, result }
        }
        Effect::Search { request, limit } => {
            let result = api.search_books(&request.query, &request.options, limit).await;
            Message::SearchFinished { ticket: request.ticket, result }
        }
        Effect::ClearLogAfter { seq, delay } => {
            tokio::time::sleep(delay).await;
            Message::ClearLog(seq)
        }
    }
}

// The home feeds fall back to a plain search when the dedicated endpoint fails.
async fn with_fallback(
    api: &BookifyApi,
    primary: Result<Vec<Book>, ApiError>,
    query: &str,
    options: SearchOptions,
    limit: u32,
) -> Result<Vec<Book>, ApiError> {
    match primary {
        Ok(books) => Ok(books),
        Err(e) => {
            log::warn!("Home feed endpoint failed ({}), searching {:?} instead", e, query);
            api.search_books(query, &options, limit).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::utils::debounce::Debouncer;
    use std::time::Duration;

    fn offline_api() -> BookifyApi {
        BookifyApi::new("http://127.0.0.1:9/api", Duration::from_secs(1)).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn clear_log_fires_after_delay() {
        let started = tokio::time::Instant::now();
        let msg = run(offline_api(), Effect::ClearLogAfter { seq: 7, delay: Duration::from_secs(2) }).await;
        assert!(matches!(msg, Message::ClearLog(7)));
        assert!(started.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn scheduled_suggestion_returns_its_ticket() {
        let ticket = Debouncer::new(Duration::from_millis(300)).schedule();
        let msg = run(offline_api(), Effect::ScheduleSuggestion { ticket, delay: Duration::from_millis(300) }).await;
        assert!(matches!(msg, Message::SuggestionDue(t) if t == ticket));
    }
}
