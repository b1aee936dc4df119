pub mod debounce;
pub mod session_store;
