pub mod app_state;
pub mod book;
pub mod messages;
pub mod navigation;
pub mod search_state;
pub mod shelf_queue;
pub mod store;
pub mod ui_state;
pub mod user;
