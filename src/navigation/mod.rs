//! Navigation
//!
//! Screen selection, main-screen tabs, and transient banners.

pub mod banner;
pub mod screen;

pub use banner::TransientBanner;
pub use screen::{Screen, Tab};
