//! Transport shapes of the Bookify backend and their mapping to [`Book`].
//!
//! This is the only place that knows about `thumbnail`, `publishedDate`,
//! `imageLinks` and the provider's `volumeInfo` nesting.

use serde::{Deserialize, Deserializer, Serialize};

use crate::client::models::book::Book;
use crate::client::models::user::{ProfileStats, User};

const WEB_READER_BASE: &str = "https://books.google.com/books";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireBook {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings_count: Option<u32>,
    #[serde(default, skip_serializing)]
    pub image_links: Option<ImageLinks>,
    #[serde(default, skip_serializing)]
    pub volume_info: Option<Box<WireBook>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageLinks {
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default, rename = "smallThumbnail")]
    pub small_thumbnail: Option<String>,
}

// Backend rows use string ids; older rows carry numeric ones.
fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

impl From<WireBook> for Book {
    fn from(wire: WireBook) -> Self {
        let WireBook {
            id,
            title,
            authors,
            description,
            thumbnail,
            published_date,
            page_count,
            categories,
            average_rating,
            ratings_count,
            image_links,
            volume_info,
        } = wire;
        let nested = volume_info.map(|v| Book::from(*v)).unwrap_or_default();
        let links = image_links.and_then(|l| l.thumbnail.or(l.small_thumbnail));
        Book {
            id,
            title: title.or(nested.title),
            authors: authors.filter(|a| !a.is_empty()).unwrap_or(nested.authors),
            description: description.or(nested.description),
            thumbnail: thumbnail.or(links).or(nested.thumbnail),
            published_date: published_date.or(nested.published_date),
            page_count: page_count.or(nested.page_count),
            categories: categories.filter(|c| !c.is_empty()).unwrap_or(nested.categories),
            average_rating: average_rating.or(nested.average_rating),
            ratings_count: ratings_count.or(nested.ratings_count),
            web_reader_link: None,
        }
    }
}

impl From<&Book> for WireBook {
    fn from(book: &Book) -> Self {
        WireBook {
            id: book.id.clone(),
            title: book.title.clone(),
            authors: (!book.authors.is_empty()).then(|| book.authors.clone()),
            description: book.description.clone(),
            thumbnail: book.thumbnail.clone(),
            published_date: book.published_date.clone(),
            page_count: book.page_count,
            categories: (!book.categories.is_empty()).then(|| book.categories.clone()),
            average_rating: book.average_rating,
            ratings_count: book.ratings_count,
            image_links: None,
            volume_info: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BooksEnvelope {
    #[serde(default)]
    pub books: Vec<WireBook>,
}

impl BooksEnvelope {
    /// Canonical books, skipping rows without an id.
    pub fn into_books(self) -> Vec<Book> {
        self.books
            .into_iter()
            .map(Book::from)
            .filter(|b| !b.id.is_empty())
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct AuthEnvelope {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub struct ProfileEnvelope {
    pub user: User,
    #[serde(default)]
    pub stats: ProfileStats,
}

#[derive(Debug, Default, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorEnvelope {
    /// Server-provided message, if the body carried one.
    pub fn parse(body: &str) -> Option<String> {
        let envelope: ErrorEnvelope = serde_json::from_str(body).ok()?;
        envelope
            .error
            .or(envelope.message)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct ShelfUpsertBody<'a> {
    pub book: WireBook,
    pub shelf_type: &'a str,
}

#[derive(Debug, Serialize)]
pub struct LoginBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterBody<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Link to the provider's web reader for a search hit.
pub fn web_reader_link(book_id: &str, query: &str) -> String {
    let params = [("id", book_id), ("pg", "GBS.PP1"), ("dq", query), ("hl", ""), ("cd", "1"), ("source", "gbs_api")];
    match url::Url::parse_with_params(WEB_READER_BASE, &params) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{}?id={}", WEB_READER_BASE, book_id),
    }
}
