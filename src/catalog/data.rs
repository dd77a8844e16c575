//! Built-in menu contents.

use super::models::{MenuItem, PromoBanner};

pub(crate) const CATEGORIES: &[&str] = &["Pizza", "Combo", "Desserts", "Drinks", "Salads", "Snacks"];

pub(crate) const PROMO_BANNERS: &[PromoBanner] = &[
    PromoBanner {
        image: "discount-30",
    },
    PromoBanner {
        image: "birthday-promo",
    },
];

pub(crate) const MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        category: "Pizza",
        name: "Ham & Mushrooms",
        description: "Ham, champignons, extra mozzarella, tomato sauce",
        price: 345,
        image: "Bufallo",
    },
    MenuItem {
        category: "Pizza",
        name: "Bavarian Sausages",
        description: "Bavarian sausages, ham, spicy pepperoni, hot chorizo, mozzarella, tomato sauce",
        price: 345,
        image: "Bayern",
    },
    MenuItem {
        category: "Pizza",
        name: "Tender Salmon",
        description: "Salmon, cherry tomatoes, mozzarella, pesto sauce",
        price: 345,
        image: "Marino",
    },
    MenuItem {
        category: "Combo",
        name: "Combo 1",
        description: "Pizza, drink and dessert",
        price: 599,
        image: "Combo-1",
    },
    MenuItem {
        category: "Combo",
        name: "Combo 2",
        description: "2 pizzas, 2 drinks",
        price: 899,
        image: "Combo-2",
    },
    MenuItem {
        category: "Desserts",
        name: "Cheesecake",
        description: "Classic cheesecake with cherry topping",
        price: 250,
        image: "Cheesecake",
    },
    MenuItem {
        category: "Desserts",
        name: "Tiramisu",
        description: "Classic Italian dessert",
        price: 280,
        image: "Tiramisu",
    },
    MenuItem {
        category: "Drinks",
        name: "Cola",
        description: "Sparkling drink 0.5l",
        price: 100,
        image: "Cola",
    },
    MenuItem {
        category: "Drinks",
        name: "Juice",
        description: "Orange juice 1l",
        price: 150,
        image: "Juice",
    },
];
