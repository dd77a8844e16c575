//! Menu data models

use std::fmt;

/// One purchasable item. `price` is a whole amount with no minor unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MenuItem {
    pub category: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: u32,
    pub image: &'static str,
}

impl MenuItem {
    pub fn price_label(&self) -> String {
        format!("from {} r", self.price)
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.price_label())
    }
}

/// Promotional image shown above the category bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromoBanner {
    pub image: &'static str,
}

/// The items of one category, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection<'a> {
    pub category: &'a str,
    pub items: Vec<&'a MenuItem>,
}
