// ============================================================================
// RUTAS - Navegación en memoria reflejada en location.hash
// ============================================================================

/// Páginas del storefront
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    RestaurantListing { query: Option<String> },
    RestaurantMenu { restaurant_id: String },
    Checkout,
    OrderStatusProfile,
}

impl Default for Route {
    fn default() -> Self {
        Route::Home
    }
}

impl Route {
    /// Listado con búsqueda; una búsqueda vacía lleva al listado completo
    pub fn search(query: &str) -> Self {
        let query = query.trim();
        Route::RestaurantListing {
            query: (!query.is_empty()).then(|| query.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::RestaurantListing { query: None } => "/restaurants".to_string(),
            Route::RestaurantListing { query: Some(q) } => {
                format!("/restaurants?q={}", String::from(js_sys::encode_uri_component(q)))
            }
            Route::RestaurantMenu { restaurant_id } => format!("/restaurants/{}", restaurant_id),
            Route::Checkout => "/checkout".to_string(),
            Route::OrderStatusProfile => "/order-status".to_string(),
        }
    }

    /// Rutas desconocidas vuelven a Home
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_start_matches('#');
        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["restaurants"] => Route::RestaurantListing {
                query: query.and_then(parse_query_param),
            },
            ["restaurants", id] => Route::RestaurantMenu {
                restaurant_id: id.to_string(),
            },
            ["checkout"] => Route::Checkout,
            ["order-status"] => Route::OrderStatusProfile,
            _ => {
                log::warn!("⚠️ Ruta desconocida '{}', redirigiendo a Home", path);
                Route::Home
            }
        }
    }
}

fn parse_query_param(query: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "q")
        .map(|(_, value)| decode_component(value))
        .filter(|value| !value.trim().is_empty())
}

fn decode_component(value: &str) -> String {
    let value = value.replace('+', " ");
    if !value.contains('%') {
        return value;
    }
    js_sys::decode_uri_component(&value)
        .map(String::from)
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_paths() {
        for route in [Route::Home, Route::Checkout, Route::OrderStatusProfile] {
            assert_eq!(Route::from_path(&route.path()), route);
        }
        assert_eq!(
            Route::from_path("#/restaurants/2"),
            Route::RestaurantMenu { restaurant_id: "2".to_string() }
        );
    }

    #[test]
    fn test_search_trims_query() {
        assert_eq!(Route::search("   "), Route::RestaurantListing { query: None });
        assert_eq!(
            Route::search("  sushi "),
            Route::RestaurantListing { query: Some("sushi".to_string()) }
        );
    }

    #[test]
    fn test_listing_without_query() {
        assert_eq!(Route::from_path("/restaurants"), Route::RestaurantListing { query: None });
        assert_eq!(Route::from_path("/restaurants?q="), Route::RestaurantListing { query: None });
        assert_eq!(
            Route::from_path("/restaurants?q=green+leaf"),
            Route::RestaurantListing { query: Some("green leaf".to_string()) }
        );
    }

    #[test]
    fn test_unknown_path_goes_home() {
        assert_eq!(Route::from_path("/about"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
    }
}
