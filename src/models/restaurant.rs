use serde::{Deserialize, Serialize};

use crate::models::cuisine::CuisineFilter;
use crate::utils::format::format_price;
use crate::utils::constants::RESTAURANT_PLACEHOLDER_IMAGE;

/// Resumen de restaurante para cards y listados
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub cuisine_types: Vec<String>,
    /// 0.0 - 5.0
    pub rating: f32,
    /// Minutos
    pub delivery_time: u32,
    pub delivery_cost: f64,
}

impl Restaurant {
    pub fn new(
        id: &str,
        name: &str,
        image_url: &str,
        cuisine_types: &[&str],
        rating: f32,
        delivery_time: u32,
        delivery_cost: f64,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            image_url: image_url.to_string(),
            cuisine_types: cuisine_types.iter().map(|c| c.to_string()).collect(),
            rating: rating.clamp(0.0, 5.0),
            delivery_time,
            delivery_cost: delivery_cost.max(0.0),
        }
    }

    pub fn has_cuisine(&self, cuisine: &str) -> bool {
        self.cuisine_types.iter().any(|c| c == cuisine)
    }

    pub fn matches(&self, filter: &CuisineFilter) -> bool {
        match filter {
            CuisineFilter::All => true,
            CuisineFilter::Cuisine(name) => self.has_cuisine(name),
        }
    }

    /// Búsqueda libre sobre nombre y cocinas (sin distinguir mayúsculas)
    pub fn matches_text(&self, text: &str) -> bool {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.cuisine_types.iter().any(|c| c.to_lowercase().contains(&needle))
    }

    pub fn is_free_delivery(&self) -> bool {
        self.delivery_cost <= 0.0
    }

    pub fn delivery_cost_label(&self) -> String {
        if self.is_free_delivery() {
            "Free".to_string()
        } else {
            format_price(self.delivery_cost)
        }
    }

    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }

    pub fn image_or_placeholder(&self) -> &str {
        if self.image_url.is_empty() {
            RESTAURANT_PLACEHOLDER_IMAGE
        } else {
            &self.image_url
        }
    }

    /// Badges visibles en la card
    pub fn badges(&self, max: usize) -> &[String] {
        &self.cuisine_types[..self.cuisine_types.len().min(max)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn golden_spoon() -> Restaurant {
        Restaurant::new(
            "1",
            "The Golden Spoon",
            "",
            &["Italian", "Pizza", "Pasta", "Desserts"],
            4.5,
            30,
            2.99,
        )
    }

    #[test]
    fn test_delivery_cost_label() {
        assert_eq!(golden_spoon().delivery_cost_label(), "$2.99");

        let mut free = golden_spoon();
        free.delivery_cost = 0.0;
        assert_eq!(free.delivery_cost_label(), "Free");
    }

    #[test]
    fn test_matches_text_is_case_insensitive() {
        let r = golden_spoon();
        assert!(r.matches_text("golden"));
        assert!(r.matches_text("PIZZA"));
        assert!(r.matches_text("   "));
        assert!(!r.matches_text("sushi"));
    }

    #[test]
    fn test_cuisine_filter() {
        let r = golden_spoon();
        assert!(r.matches(&CuisineFilter::All));
        assert!(r.matches(&CuisineFilter::from_name("Pizza")));
        assert!(!r.matches(&CuisineFilter::from_name("Sushi")));
    }

    #[test]
    fn test_badges_and_placeholder() {
        let r = golden_spoon();
        assert_eq!(r.badges(3).len(), 3);
        assert_eq!(r.badges(10).len(), 4);
        assert_eq!(r.image_or_placeholder(), RESTAURANT_PLACEHOLDER_IMAGE);
        assert_eq!(r.rating_label(), "4.5");
    }

    #[test]
    fn test_new_clamps_rating_and_cost() {
        let r = Restaurant::new("x", "X", "", &[], 7.0, 10, -3.0);
        assert_eq!(r.rating, 5.0);
        assert_eq!(r.delivery_cost, 0.0);
    }
}
