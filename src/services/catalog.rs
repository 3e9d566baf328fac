// ============================================================================
// CATALOG - Fuente de datos de solo lectura inyectada en las vistas
// ============================================================================
// Las vistas nunca leen constantes globales: reciben el Catalog por contexto,
// lo que permite sustituirlo por fixtures en tests.
// ============================================================================

use crate::models::cart::Cart;
use crate::models::cuisine::CuisineFilter;
use crate::models::demo;
use crate::models::menu::RestaurantMenu;
use crate::models::order::PastOrder;
use crate::models::restaurant::Restaurant;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Catalog {
    /// Destacados de la home
    pub featured_restaurants: Vec<Restaurant>,
    /// Listado completo
    pub restaurants: Vec<Restaurant>,
    pub menus: Vec<RestaurantMenu>,
    pub past_orders: Vec<PastOrder>,
    /// Carrito compartido por carta y checkout
    pub cart: Cart,
}

/// Criterio de orden del listado
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Rating,
    DeliveryTime,
    Price,
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::Rating, SortBy::DeliveryTime, SortBy::Price];

    pub fn value(&self) -> &'static str {
        match self {
            SortBy::Rating => "rating",
            SortBy::DeliveryTime => "delivery-time",
            SortBy::Price => "price",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Rating => "Rating",
            SortBy::DeliveryTime => "Delivery Time",
            SortBy::Price => "Price",
        }
    }

    pub fn from_value(value: &str) -> Self {
        SortBy::ALL
            .into_iter()
            .find(|s| s.value() == value)
            .unwrap_or_default()
    }
}

/// Filtros y orden del listado de restaurantes
#[derive(Clone, Debug, PartialEq)]
pub struct ListingQuery {
    pub text: Option<String>,
    pub cuisine: CuisineFilter,
    pub max_delivery_cost: f64,
    pub free_delivery_only: bool,
    pub sort_by: SortBy,
}

impl ListingQuery {
    pub fn new(max_delivery_cost: f64) -> Self {
        Self {
            text: None,
            cuisine: CuisineFilter::All,
            max_delivery_cost,
            free_delivery_only: false,
            sort_by: SortBy::Rating,
        }
    }

    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        let text_ok = self.text.as_deref().map_or(true, |t| restaurant.matches_text(t));
        text_ok
            && restaurant.matches(&self.cuisine)
            && restaurant.delivery_cost <= self.max_delivery_cost
            && (!self.free_delivery_only || restaurant.is_free_delivery())
    }
}

impl Catalog {
    /// Datos de demostración del storefront
    pub fn demo() -> Self {
        Self {
            featured_restaurants: demo::featured_restaurants(),
            restaurants: demo::listing_restaurants(),
            menus: vec![demo::sushi_haven_menu()],
            past_orders: demo::past_orders(),
            cart: demo::cart(),
        }
    }

    pub fn restaurant(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants
            .iter()
            .chain(self.featured_restaurants.iter())
            .find(|r| r.id == id)
    }

    /// Carta del restaurante; si no existe se muestra la carta de la casa
    pub fn menu_for(&self, restaurant_id: &str) -> Option<&RestaurantMenu> {
        let exact = self.menus.iter().find(|m| m.restaurant_id == restaurant_id);
        if exact.is_none() {
            log::info!("📋 Sin carta para restaurante {}, usando la carta de la casa", restaurant_id);
        }
        exact.or_else(|| self.menus.first())
    }

    pub fn featured_by_cuisine(&self, filter: &CuisineFilter) -> Vec<&Restaurant> {
        self.featured_restaurants.iter().filter(|r| r.matches(filter)).collect()
    }

    pub fn search(&self, query: &ListingQuery) -> Vec<&Restaurant> {
        let mut found: Vec<&Restaurant> = self.restaurants.iter().filter(|r| query.matches(r)).collect();

        match query.sort_by {
            SortBy::Rating => found.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortBy::DeliveryTime => found.sort_by_key(|r| r.delivery_time),
            SortBy::Price => found.sort_by(|a, b| a.delivery_cost.total_cmp(&b.delivery_cost)),
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(restaurants: &[&Restaurant]) -> Vec<String> {
        restaurants.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_featured_by_cuisine() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.featured_by_cuisine(&CuisineFilter::All).len(), 8);

        let breakfast = catalog.featured_by_cuisine(&CuisineFilter::from_name("Breakfast"));
        assert_eq!(names(&breakfast), vec!["The Golden Spoon Diner", "The Breakfast Nook"]);

        assert!(catalog.featured_by_cuisine(&CuisineFilter::from_name("Soups")).len() == 1);
        assert!(catalog.featured_by_cuisine(&CuisineFilter::from_name("Ramen")).is_empty());
    }

    #[test]
    fn test_search_sorts_by_rating_by_default() {
        let catalog = Catalog::demo();
        let found = catalog.search(&ListingQuery::new(10.0));

        assert_eq!(found.len(), 6);
        assert_eq!(found[0].name, "The Green Leaf");
        assert!(found.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn test_search_free_delivery_and_cost_cap() {
        let catalog = Catalog::demo();
        let mut query = ListingQuery::new(10.0);
        query.free_delivery_only = true;
        assert_eq!(names(&catalog.search(&query)), vec!["Sushi Central", "Taco Town"]);

        let mut query = ListingQuery::new(2.0);
        query.sort_by = SortBy::Price;
        let found = catalog.search(&query);
        assert!(found.iter().all(|r| r.delivery_cost <= 2.0));
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn test_search_text_and_delivery_time_sort() {
        let catalog = Catalog::demo();
        let mut query = ListingQuery::new(10.0);
        query.text = Some("sushi".to_string());
        assert_eq!(names(&catalog.search(&query)), vec!["Sushi Central"]);

        let mut query = ListingQuery::new(10.0);
        query.sort_by = SortBy::DeliveryTime;
        let found = catalog.search(&query);
        assert_eq!(found.first().map(|r| r.delivery_time), Some(15));
        assert_eq!(found.last().map(|r| r.delivery_time), Some(40));
    }

    #[test]
    fn test_menu_for_falls_back_to_house_menu() {
        let catalog = Catalog::demo();
        let menu = catalog.menu_for("does-not-exist");
        assert_eq!(menu.map(|m| m.name.as_str()), Some("Sushi Haven"));
        assert!(Catalog::default().menu_for("2").is_none());
    }

    #[test]
    fn test_sort_by_from_value() {
        assert_eq!(SortBy::from_value("delivery-time"), SortBy::DeliveryTime);
        assert_eq!(SortBy::from_value("whatever"), SortBy::Rating);
    }
}
