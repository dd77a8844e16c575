//! Session flag
//!
//! Handles the persisted "is the user logged in" state and its observers.

pub mod manager;
pub mod state;
pub mod store;

pub use manager::{SESSION_KEY, SessionManager};
pub use state::{SessionSnapshot, SessionState};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
