pub mod app;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod navigation;
pub mod presenter;
pub mod session;
pub mod shell;

pub use app::App;
pub use config::AppConfig;
