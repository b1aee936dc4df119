//! Book cards and card collections as plain data.
//!
//! Widgets are built from these in `gui::widgets::book_card`; everything
//! here is pure so the same input always renders the same view.

use url::form_urlencoded;

use crate::client::models::book::Book;
use crate::client::models::messages::Message;

const PLACEHOLDER_COVER: &str = "https://placehold.co/220x300/6a11cb/ffffff";

pub const EMPTY_SEARCH: &str = "No books found for your query.";
pub const EMPTY_SHELF: &str = "No books here yet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Standard,
    Compact,
    /// A book being read: offers "mark as read" instead of "add to shelf".
    InProgress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CardAction {
    AddToShelf,
    MarkAsRead,
    ReadNow,
}

impl CardAction {
    pub fn label(self) -> &'static str {
        match self {
            CardAction::AddToShelf => "Add to shelf",
            CardAction::MarkAsRead => "Mark as Read",
            CardAction::ReadNow => "Read Now",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cover {
    /// Provider artwork, upgraded to https.
    Artwork(String),
    /// No artwork: a tile keyed on the title's first character.
    Placeholder { initial: String },
}

impl Cover {
    pub fn url(&self) -> String {
        match self {
            Cover::Artwork(url) => url.clone(),
            Cover::Placeholder { initial } => {
                let encoded: String = form_urlencoded::byte_serialize(initial.as_bytes()).collect();
                format!("{}?text={}", PLACEHOLDER_COVER, encoded)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookCard {
    pub book: Book,
    pub title: String,
    pub author_line: String,
    pub cover: Cover,
    pub compact: bool,
    pub actions: Vec<CardAction>,
}

impl BookCard {
    /// The message a press on `action` produces. Every visual copy of the
    /// card produces the same one.
    pub fn intent(&self, action: CardAction) -> Message {
        match action {
            CardAction::AddToShelf => Message::AddToShelfPressed(self.book.clone()),
            CardAction::MarkAsRead => Message::MarkAsReadPressed(self.book.clone()),
            CardAction::ReadNow => Message::ReadNowPressed(self.book.clone()),
        }
    }
}

pub fn author_line(authors: &[String]) -> String {
    match authors.len() {
        0 => "Unknown Author".to_string(),
        1 | 2 => authors.join(", "),
        _ => format!("{} et al.", authors[..2].join(", ")),
    }
}

pub fn cover(book: &Book) -> Cover {
    match book.thumbnail.as_deref().filter(|t| !t.trim().is_empty()) {
        Some(thumb) => match thumb.strip_prefix("http://") {
            Some(rest) => Cover::Artwork(format!("https://{}", rest)),
            None => Cover::Artwork(thumb.to_string()),
        },
        None => Cover::Placeholder { initial: book.display_title().chars().take(1).collect() },
    }
}

pub fn cover_url(book: &Book) -> String {
    cover(book).url()
}

pub fn render_card(book: &Book, variant: CardVariant) -> BookCard {
    let mut actions = match variant {
        CardVariant::Standard | CardVariant::Compact => vec![CardAction::AddToShelf],
        CardVariant::InProgress => vec![CardAction::MarkAsRead],
    };
    if book.web_reader_link.is_some() {
        actions.push(CardAction::ReadNow);
    }
    BookCard {
        book: book.clone(),
        title: book.display_title().to_string(),
        author_line: author_line(&book.authors),
        cover: cover(book),
        compact: variant != CardVariant::Standard,
        actions,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Grid,
    /// Horizontally scrolling strip; the sequence is drawn twice so it loops.
    Carousel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyContext {
    Search,
    Shelf,
}

/// One drawn card: an index into `cards`, and whether it is the loop copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    pub card: usize,
    pub mirror: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Binding {
    pub book_id: String,
    pub action: CardAction,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CollectionView {
    Empty(&'static str),
    Cards { layout: Layout, cards: Vec<BookCard>, slots: Vec<CardSlot> },
}

impl CollectionView {
    /// Cards in draw order, loop copies included.
    pub fn visual_cards(&self) -> Vec<(&BookCard, CardSlot)> {
        match self {
            CollectionView::Empty(_) => Vec::new(),
            CollectionView::Cards { cards, slots, .. } => slots.iter().map(|slot| (&cards[slot.card], *slot)).collect(),
        }
    }

    /// One binding per (book, action), however many times the card is drawn.
    pub fn bindings(&self) -> Vec<Binding> {
        match self {
            CollectionView::Empty(_) => Vec::new(),
            CollectionView::Cards { cards, .. } => cards
                .iter()
                .flat_map(|card| {
                    card.actions.iter().map(|action| Binding { book_id: card.book.id.clone(), action: *action })
                })
                .collect(),
        }
    }
}

pub fn render_collection(books: &[Book], variant: CardVariant, layout: Layout, context: EmptyContext) -> CollectionView {
    if books.is_empty() {
        return CollectionView::Empty(match context {
            EmptyContext::Search => EMPTY_SEARCH,
            EmptyContext::Shelf => EMPTY_SHELF,
        });
    }
    let cards: Vec<BookCard> = books.iter().map(|b| render_card(b, variant)).collect();
    let mut slots: Vec<CardSlot> = (0..cards.len()).map(|card| CardSlot { card, mirror: false }).collect();
    if layout == Layout::Carousel {
        slots.extend((0..cards.len()).map(|card| CardSlot { card, mirror: true }));
    }
    CollectionView::Cards { layout, cards, slots }
}
