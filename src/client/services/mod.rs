pub mod api_client;
pub mod effects;
pub mod wire;
