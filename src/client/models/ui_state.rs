// Modal visibility and form inputs for the GUI
use crate::client::models::book::Book;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthForm {
    #[default]
    Login,
    Register,
}

impl AuthForm {
    pub fn title(self) -> &'static str {
        match self {
            AuthForm::Login => "Sign In",
            AuthForm::Register => "Create Account",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Auth,
    Shelf,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Modals {
    auth_open: bool,
    shelf_open: bool,
    shelf_target: Option<Book>,
    pub auth_form: AuthForm,
}

impl Modals {
    pub fn open_auth(&mut self) {
        self.auth_open = true;
    }

    /// Opens the shelf picker for `book`.
    pub fn open_shelf(&mut self, book: Book) {
        self.shelf_target = Some(book);
        self.shelf_open = true;
    }

    pub fn is_open(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::Auth => self.auth_open,
            ModalKind::Shelf => self.shelf_open,
        }
    }

    pub fn any_open(&self) -> bool {
        self.auth_open || self.shelf_open
    }

    pub fn shelf_target(&self) -> Option<&Book> {
        self.shelf_target.as_ref()
    }

    pub fn close_all(&mut self) {
        self.auth_open = false;
        self.shelf_open = false;
        self.shelf_target = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Success,
    Error,
    Info,
    Warning,
}

/// One entry of the transient alert bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMessage {
    pub level: LogLevel,
    pub message: String,
}

impl LogMessage {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self { level, message: message.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl LoginInput {
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

impl RegisterInput {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty() && !self.password.is_empty()
    }
}
