pub mod auth_modal;
pub mod browse;
pub mod categories;
pub mod community;
pub mod header;
pub mod home;
pub mod logger;
pub mod profile;
pub mod shelf_modal;
pub mod shelves;
