pub mod config;
pub mod models;
pub mod render;
pub mod services;
pub mod utils;

#[cfg(feature = "gui")]
pub mod gui;
