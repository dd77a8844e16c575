//! Menu catalog
//!
//! Read-only view over the categories and items, grouped for display.

use log::warn;
use std::collections::HashMap;

use super::data::{CATEGORIES, MENU_ITEMS, PROMO_BANNERS};
use super::models::{MenuItem, MenuSection, PromoBanner};

#[derive(Debug, Clone)]
pub struct MenuCatalog {
    categories: Vec<&'static str>,
    banners: Vec<PromoBanner>,
    by_category: HashMap<&'static str, Vec<MenuItem>>,
}

impl MenuCatalog {
    /// The catalog shipped with the app.
    pub fn builtin() -> Self {
        Self::new(CATEGORIES.to_vec(), MENU_ITEMS.to_vec(), PROMO_BANNERS.to_vec())
    }

    /// Groups `items` by category, keeping their relative order.
    ///
    /// Items whose category is not listed are kept but never appear in
    /// [`sections`](Self::sections); they are reported by
    /// [`orphaned_items`](Self::orphaned_items).
    pub fn new(
        categories: Vec<&'static str>,
        items: Vec<MenuItem>,
        banners: Vec<PromoBanner>,
    ) -> Self {
        let mut by_category: HashMap<&'static str, Vec<MenuItem>> = HashMap::new();
        for item in items {
            by_category.entry(item.category).or_default().push(item);
        }

        let catalog = Self {
            categories,
            banners,
            by_category,
        };

        for item in catalog.orphaned_items() {
            warn!(
                "Menu item {} has unlisted category {}; it will not be shown",
                item.name, item.category
            );
        }

        catalog
    }

    pub fn categories(&self) -> &[&'static str] {
        &self.categories
    }

    pub fn banners(&self) -> &[PromoBanner] {
        &self.banners
    }

    /// Items of a listed category in declaration order, ignoring ASCII case.
    /// Empty for unknown categories.
    pub fn items_in(&self, category: &str) -> &[MenuItem] {
        self.find_category(category)
            .and_then(|category| self.by_category.get(category))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// One section per listed category that has items, in category order.
    pub fn sections(&self) -> Vec<MenuSection<'_>> {
        self.categories
            .iter()
            .copied()
            .filter_map(|category| {
                let items = self.by_category.get(category)?;
                Some(MenuSection {
                    category,
                    items: items.iter().collect(),
                })
            })
            .collect()
    }

    /// Index of the section `category` renders as, for scrolling to it.
    pub fn position_of(&self, category: &str) -> Option<usize> {
        self.sections()
            .iter()
            .position(|section| section.category.eq_ignore_ascii_case(category))
    }

    /// Looks up a listed category, ignoring ASCII case.
    pub fn find_category(&self, name: &str) -> Option<&'static str> {
        self.categories
            .iter()
            .copied()
            .find(|category| category.eq_ignore_ascii_case(name))
    }

    /// Items that no listed category covers.
    pub fn orphaned_items(&self) -> Vec<&MenuItem> {
        let mut orphans: Vec<&MenuItem> = self
            .by_category
            .iter()
            .filter(|(category, _)| !self.categories.contains(*category))
            .flat_map(|(_, items)| items.iter())
            .collect();
        orphans.sort_by_key(|item| (item.category, item.name));
        orphans
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
