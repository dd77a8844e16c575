//! Menu catalog
//!
//! Static categories, items, and promo banners.

mod data;
pub mod menu;
pub mod models;

pub use menu::MenuCatalog;
pub use models::{MenuItem, MenuSection, PromoBanner};
