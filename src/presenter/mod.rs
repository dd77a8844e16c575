//! Presentation state
//!
//! Turns login progress and outcomes into observable view state.

pub mod notifier;
pub mod state;

pub use notifier::ResultNotifier;
pub use state::AuthViewState;
