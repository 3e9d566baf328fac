// ============================================================================
// DATOS DE DEMO - Catálogo mock del storefront
// ============================================================================
// Solo se usan a través de Catalog::demo(); las vistas reciben el catálogo
// por contexto.

use chrono::NaiveDate;

use super::cart::{Cart, CartItem};
use super::menu::{MenuCategory, MenuItem, RestaurantMenu};
use super::order::{PastOrder, PastOrderStatus};
use super::restaurant::Restaurant;

pub fn featured_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant::new(
            "1",
            "The Golden Spoon Diner",
            "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?w=400&h=225&fit=crop&q=80",
            &["Burgers", "Breakfast", "American"],
            4.5,
            25,
            2.99,
        ),
        Restaurant::new(
            "2",
            "Sushi Yama",
            "https://images.unsplash.com/photo-1579871494447-9811cf80d66c?w=400&h=225&fit=crop&q=80",
            &["Sushi", "Japanese", "Asian"],
            4.8,
            30,
            4.50,
        ),
        Restaurant::new(
            "3",
            "Pizza Palace",
            "https://images.unsplash.com/photo-1513104890138-7c749659a591?w=400&h=225&fit=crop&q=80",
            &["Pizza", "Italian"],
            4.3,
            35,
            0.0,
        ),
        Restaurant::new(
            "4",
            "Salad Grove",
            "https://images.unsplash.com/photo-1540420773420-2850a02b5c0d?w=400&h=225&fit=crop&q=80",
            &["Salads", "Healthy", "Soups"],
            4.9,
            20,
            1.99,
        ),
        Restaurant::new(
            "5",
            "Steakhouse Supreme",
            "https://images.unsplash.com/photo-1600891964092-4316c288032e?w=400&h=225&fit=crop&q=80",
            &["Steak", "American"],
            4.7,
            45,
            5.00,
        ),
        Restaurant::new(
            "6",
            "Taco Fiesta",
            "https://images.unsplash.com/photo-1565299624946-b28f40a0ae38?w=400&h=225&fit=crop&q=80",
            &["Mexican", "Tacos"],
            4.6,
            25,
            2.50,
        ),
        Restaurant::new(
            "7",
            "The Breakfast Nook",
            "https://images.unsplash.com/photo-1525351484163-7529414344d8?w=400&h=225&fit=crop&q=80",
            &["Breakfast", "Coffee"],
            4.8,
            15,
            3.00,
        ),
        Restaurant::new(
            "8",
            "Mama's Desserts",
            "https://images.unsplash.com/photo-1551024601-bec78aea704b?w=400&h=225&fit=crop&q=80",
            &["Desserts", "Bakery"],
            4.9,
            20,
            0.0,
        ),
    ]
}

pub fn listing_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant::new(
            "golden-spoon",
            "The Golden Spoon",
            "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?q=80&w=800&auto=format&fit=crop",
            &["Italian", "Pizza", "Pasta"],
            4.5,
            30,
            2.99,
        ),
        Restaurant::new(
            "sushi-central",
            "Sushi Central",
            "https://images.unsplash.com/photo-1579871494447-9811cf80d66c?q=80&w=800&auto=format&fit=crop",
            &["Japanese", "Sushi", "Asian"],
            4.8,
            25,
            0.0,
        ),
        Restaurant::new(
            "burger-bliss",
            "Burger Bliss",
            "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?q=80&w=800&auto=format&fit=crop",
            &["American", "Burgers", "Fries"],
            4.2,
            20,
            1.99,
        ),
        Restaurant::new(
            "taco-town",
            "Taco Town",
            "https://images.unsplash.com/photo-1565299624946-b28f40a0ae38?q=80&w=800&auto=format&fit=crop",
            &["Mexican", "Tacos", "Burritos"],
            4.6,
            35,
            0.0,
        ),
        Restaurant::new(
            "green-leaf",
            "The Green Leaf",
            "https://images.unsplash.com/photo-1498837167922-ddd27525d352?q=80&w=800&auto=format&fit=crop",
            &["Salads", "Healthy", "Vegan"],
            4.9,
            15,
            3.49,
        ),
        Restaurant::new(
            "curry-house",
            "Curry House",
            "https://images.unsplash.com/photo-1589302168068-964664d93dc0?q=80&w=800&auto=format&fit=crop",
            &["Indian", "Curry", "Spicy"],
            4.4,
            40,
            2.99,
        ),
    ]
}

fn menu_item(id: &str, name: &str, description: &str, price: f64, image_url: &str, has_customizations: bool) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        image_url: Some(image_url.to_string()),
        has_customizations,
    }
}

/// Carta de la casa (se muestra para cualquier restaurante sin carta propia)
pub fn sushi_haven_menu() -> RestaurantMenu {
    RestaurantMenu {
        restaurant_id: "sushi-central".to_string(),
        name: "Sushi Haven".to_string(),
        banner_url: "https://images.unsplash.com/photo-1553621042-f6e147245754?q=80&w=1920".to_string(),
        rating: 4.8,
        rating_count: 250,
        address: "123 Main St, Anytown".to_string(),
        categories: vec![
            MenuCategory {
                name: "Appetizers".to_string(),
                expanded_by_default: true,
                items: vec![
                    menu_item(
                        "app-1",
                        "Edamame",
                        "Steamed young soybeans, lightly salted. A classic starter.",
                        5.00,
                        "https://images.unsplash.com/photo-1553277202-7c8612f17e93?q=80&w=800",
                        false,
                    ),
                    menu_item(
                        "app-2",
                        "Gyoza",
                        "Pan-fried pork and vegetable dumplings with a savory dipping sauce.",
                        8.50,
                        "https://images.unsplash.com/photo-1627916928341-447551e1a539?q=80&w=800",
                        false,
                    ),
                ],
            },
            MenuCategory {
                name: "Signature Rolls".to_string(),
                expanded_by_default: true,
                items: vec![
                    menu_item(
                        "roll-1",
                        "Dragon Roll",
                        "Eel and cucumber topped with avocado, tobiko, and eel sauce.",
                        16.99,
                        "https://images.unsplash.com/photo-1617196034183-421b4917c92d?q=80&w=800",
                        true,
                    ),
                    menu_item(
                        "roll-2",
                        "Spicy Tuna Roll",
                        "Chopped tuna with a spicy mayo sauce, cucumber, and sesame seeds.",
                        12.99,
                        "https://images.unsplash.com/photo-1611141649970-58461b7c22e4?q=80&w=800",
                        true,
                    ),
                    menu_item(
                        "roll-3",
                        "California Roll",
                        "Crab, avocado, and cucumber, wrapped in seaweed and rice.",
                        10.50,
                        "https://images.unsplash.com/photo-1553830591-2f394da804e5?q=80&w=800",
                        false,
                    ),
                ],
            },
            MenuCategory {
                name: "Sashimi & Nigiri".to_string(),
                expanded_by_default: false,
                items: vec![
                    menu_item(
                        "sashimi-1",
                        "Tuna Sashimi (5 pcs)",
                        "Thick slices of fresh, high-quality maguro tuna.",
                        18.00,
                        "https://images.unsplash.com/photo-1579871494447-9811cf80d66c?q=80&w=800",
                        false,
                    ),
                    menu_item(
                        "nigiri-1",
                        "Salmon Nigiri (2 pcs)",
                        "A slice of fresh salmon over a small bed of sushi rice.",
                        7.50,
                        "https://images.unsplash.com/photo-1615361200141-f45040f367be?q=80&w=800",
                        false,
                    ),
                ],
            },
        ],
    }
}

pub fn past_orders() -> Vec<PastOrder> {
    let order = |id: &str, (y, m, d): (i32, u32, u32), restaurant: &str, total: f64, status| PastOrder {
        id: id.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        restaurant: restaurant.to_string(),
        total,
        status,
    };

    vec![
        order("ORD#001", (2023, 10, 25), "The Sushi Place", 25.50, PastOrderStatus::Delivered),
        order("ORD#002", (2023, 10, 22), "Pizza Palace", 35.00, PastOrderStatus::Delivered),
        order("ORD#003", (2023, 10, 18), "Burger Barn", 18.75, PastOrderStatus::Cancelled),
        order("ORD#004", (2023, 10, 15), "Taco Town", 22.00, PastOrderStatus::Delivered),
    ]
}

pub fn cart() -> Cart {
    Cart::new(vec![
        CartItem::new("sushi-1", "Spicy Tuna Roll", 12.99, 1, Some("https://via.placeholder.com/150")),
        CartItem::new("drink-2", "Green Tea", 2.50, 2, Some("https://via.placeholder.com/150")),
        CartItem::new("side-3", "Edamame", 5.00, 1, Some("https://via.placeholder.com/150")),
    ])
}
