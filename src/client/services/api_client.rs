//! HTTP client for the Bookify backend.
//!
//! Every call has a bounded timeout. Authenticated calls take the bearer
//! token explicitly; callers get it from the signed-in session.

use std::time::Duration;

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::client::config::ClientConfig;
use crate::client::models::book::{Book, ShelfKind, Shelves};
use crate::client::models::search_state::SearchOptions;
use crate::client::models::user::{AuthSession, Profile};
use crate::client::services::wire::{
    web_reader_link, AuthEnvelope, BooksEnvelope, ErrorEnvelope, LoginBody, ProfileEnvelope, RegisterBody,
    ShelfUpsertBody, WireBook,
};

/// Failures of a backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, dropped connection.
    #[error("Bookify server unreachable: {0}")]
    Unreachable(String),

    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-2xx status.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// True when the server could not be reached at all, as opposed to the
    /// server refusing the request.
    pub fn is_reachability(&self) -> bool {
        matches!(self, ApiError::Unreachable(_) | ApiError::Timeout)
    }

    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { status: 401 | 403, .. })
    }

    /// Text shown to the user: the server's own message when it sent one,
    /// otherwise `fallback` (with a retry hint for reachability failures).
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected { message: Some(m), .. } => m.clone(),
            ApiError::Unreachable(_) | ApiError::Timeout => format!("{}. Please try again.", fallback),
            _ => fallback.to_string(),
        }
    }

    fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_builder() {
            ApiError::InvalidRequest(err.to_string())
        } else {
            ApiError::Unreachable(err.to_string())
        }
    }

    fn rejected(status: StatusCode, body: &str) -> Self {
        ApiError::Rejected { status: status.as_u16(), message: ErrorEnvelope::parse(body) }
    }
}

#[derive(Debug, Clone)]
pub struct BookifyApi {
    client: reqwest::Client,
    base_url: String,
}

impl BookifyApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ApiError::InvalidRequest(format!("{}: {}", base_url, e)))?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::new(&config.api_base_url, config.request_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&raw).map_err(|e| ApiError::InvalidRequest(format!("{}: {}", raw, e)))
    }

    /// `/books/search` URL; default options are left out of the query.
    pub fn search_url(&self, query: &str, options: &SearchOptions, limit: u32) -> Result<Url, ApiError> {
        let mut url = self.endpoint("books/search")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", query);
            pairs.append_pair("limit", &limit.to_string());
            for (key, value) in options.query_params() {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await.map_err(ApiError::from_transport)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        log::warn!("Bookify API answered {}", status);
        Err(ApiError::rejected(status, &body))
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await.map_err(ApiError::from_transport)?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        log::info!("Signing in {}", email);
        let request = self.client.post(self.endpoint("users/login")?).json(&LoginBody { email, password });
        let envelope: AuthEnvelope = self.send_json(request).await?;
        Ok(AuthSession { token: envelope.token, user: envelope.user })
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        log::info!("Registering {}", email);
        let request = self
            .client
            .post(self.endpoint("users/register")?)
            .json(&RegisterBody { name, email, password });
        let envelope: AuthEnvelope = self.send_json(request).await?;
        Ok(AuthSession { token: envelope.token, user: envelope.user })
    }

    pub async fn fetch_profile(&self, token: &str) -> Result<Profile, ApiError> {
        let request = self.client.get(self.endpoint("users/profile")?).bearer_auth(token);
        let envelope: ProfileEnvelope = self.send_json(request).await?;
        Ok(Profile { user: envelope.user, stats: envelope.stats })
    }

    pub async fn search_books(&self, query: &str, options: &SearchOptions, limit: u32) -> Result<Vec<Book>, ApiError> {
        log::debug!("Searching for {:?} (limit {})", query, limit);
        let request = self.client.get(self.search_url(query, options, limit)?);
        let envelope: BooksEnvelope = self.send_json(request).await?;
        Ok(envelope
            .into_books()
            .into_iter()
            .map(|mut book| {
                book.web_reader_link = Some(web_reader_link(&book.id, query));
                book
            })
            .collect())
    }

    pub async fn fetch_shelf(&self, kind: ShelfKind, token: &str) -> Result<Vec<Book>, ApiError> {
        let path = format!("books/shelf/{}", kind.api_name());
        let request = self.client.get(self.endpoint(&path)?).bearer_auth(token);
        let envelope: BooksEnvelope = self.send_json(request).await?;
        Ok(envelope.into_books())
    }

    /// All three shelves, fetched concurrently.
    pub async fn fetch_shelves(&self, token: &str) -> Result<Shelves, ApiError> {
        let (reading, want_to_read, history) = tokio::try_join!(
            self.fetch_shelf(ShelfKind::Reading, token),
            self.fetch_shelf(ShelfKind::WantToRead, token),
            self.fetch_shelf(ShelfKind::History, token),
        )?;
        Ok(Shelves::new(reading, want_to_read, history))
    }

    pub async fn upsert_shelf_entry(&self, book: &Book, kind: ShelfKind, token: &str) -> Result<(), ApiError> {
        log::debug!("Putting {} on {}", book.id, kind.api_name());
        let body = ShelfUpsertBody { book: WireBook::from(book), shelf_type: kind.api_name() };
        let request = self.client.post(self.endpoint("books/shelf")?).bearer_auth(token).json(&body);
        self.send(request).await?;
        Ok(())
    }

    pub async fn fetch_trending(&self) -> Result<Vec<Book>, ApiError> {
        let request = self.client.get(self.endpoint("books/trending")?);
        let envelope: BooksEnvelope = self.send_json(request).await?;
        Ok(envelope.into_books())
    }

    pub async fn fetch_new_releases(&self) -> Result<Vec<Book>, ApiError> {
        let request = self.client.get(self.endpoint("books/new-releases")?);
        let envelope: BooksEnvelope = self.send_json(request).await?;
        Ok(envelope.into_books())
    }
}
