/// Canonical book representation used everywhere past the API boundary.
///
/// Transport shapes (flat search rows, shelf rows, provider `volumeInfo`
/// objects) are mapped into this type by `services::wire` only.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Book {
    pub id: String,
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub published_date: Option<String>,
    pub page_count: Option<u32>,
    pub categories: Vec<String>,
    pub average_rating: Option<f32>,
    pub ratings_count: Option<u32>,
    pub web_reader_link: Option<String>,
}

impl Book {
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.trim().is_empty() => t,
            _ => "No Title",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShelfKind {
    Reading,
    WantToRead,
    History,
}

impl ShelfKind {
    pub const ALL: [ShelfKind; 3] = [ShelfKind::Reading, ShelfKind::WantToRead, ShelfKind::History];

    /// Name used in `/books/shelf/{name}` and in the `shelf_type` body field.
    pub fn api_name(self) -> &'static str {
        match self {
            ShelfKind::Reading => "reading",
            ShelfKind::WantToRead => "want_to_read",
            ShelfKind::History => "history",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShelfKind::Reading => "Currently Reading",
            ShelfKind::WantToRead => "Want to Read",
            ShelfKind::History => "History",
        }
    }

    /// Label used on the shelf picker buttons.
    pub fn action_label(self) -> &'static str {
        match self {
            ShelfKind::Reading => "Currently Reading",
            ShelfKind::WantToRead => "Want to Read",
            ShelfKind::History => "Add to History",
        }
    }
}

impl std::fmt::Display for ShelfKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The three reading shelves. A book id is on at most one of them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shelves {
    reading: Vec<Book>,
    want_to_read: Vec<Book>,
    history: Vec<Book>,
}

impl Shelves {
    pub fn new(reading: Vec<Book>, want_to_read: Vec<Book>, history: Vec<Book>) -> Self {
        let mut shelves = Self { reading, want_to_read, history };
        shelves.dedupe();
        shelves
    }

    pub fn get(&self, kind: ShelfKind) -> &[Book] {
        match kind {
            ShelfKind::Reading => &self.reading,
            ShelfKind::WantToRead => &self.want_to_read,
            ShelfKind::History => &self.history,
        }
    }

    fn get_mut(&mut self, kind: ShelfKind) -> &mut Vec<Book> {
        match kind {
            ShelfKind::Reading => &mut self.reading,
            ShelfKind::WantToRead => &mut self.want_to_read,
            ShelfKind::History => &mut self.history,
        }
    }

    pub fn shelf_of(&self, book_id: &str) -> Option<ShelfKind> {
        ShelfKind::ALL
            .into_iter()
            .find(|kind| self.get(*kind).iter().any(|b| b.id == book_id))
    }

    /// Removes `book` from every shelf, then puts it at the head of `target`.
    pub fn move_to_shelf(&mut self, book: Book, target: ShelfKind) {
        for kind in ShelfKind::ALL {
            self.get_mut(kind).retain(|b| b.id != book.id);
        }
        self.get_mut(target).insert(0, book);
    }

    pub fn is_empty(&self) -> bool {
        ShelfKind::ALL.into_iter().all(|kind| self.get(kind).is_empty())
    }

    pub fn len(&self) -> usize {
        ShelfKind::ALL.into_iter().map(|kind| self.get(kind).len()).sum()
    }

    // Server snapshots may disagree with the exclusivity rule; the first
    // shelf in ALL order keeps the book, and repeats within a shelf are dropped.
    fn dedupe(&mut self) {
        let mut seen = std::collections::HashSet::new();
        for kind in ShelfKind::ALL {
            self.get_mut(kind).retain(|b| seen.insert(b.id.clone()));
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_book(id: &str, title: &str) -> Book {
    Book {
        id: id.to_string(),
        title: Some(title.to_string()),
        authors: vec!["Frank Herbert".to_string()],
        page_count: Some(412),
        ..Default::default()
    }
}
