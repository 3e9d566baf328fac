/// Categoría del filtro de cocinas
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CuisineCategory {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const ALL_CUISINES: &str = "All";

pub const CUISINE_CATEGORIES: &[CuisineCategory] = &[
    CuisineCategory { name: ALL_CUISINES, icon: "🍽️" },
    CuisineCategory { name: "Pizza", icon: "🍕" },
    CuisineCategory { name: "Sushi", icon: "🍣" },
    CuisineCategory { name: "Salads", icon: "🥗" },
    CuisineCategory { name: "Burgers", icon: "🍔" },
    CuisineCategory { name: "Steak", icon: "🥩" },
    CuisineCategory { name: "Soups", icon: "🍲" },
    CuisineCategory { name: "Desserts", icon: "🍨" },
    CuisineCategory { name: "Breakfast", icon: "🥐" },
    CuisineCategory { name: "Coffee", icon: "☕" },
];

/// Selección actual del filtro
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum CuisineFilter {
    #[default]
    All,
    Cuisine(String),
}

impl CuisineFilter {
    pub fn from_name(name: &str) -> Self {
        if name == ALL_CUISINES {
            CuisineFilter::All
        } else {
            CuisineFilter::Cuisine(name.to_string())
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CuisineFilter::All => ALL_CUISINES,
            CuisineFilter::Cuisine(name) => name,
        }
    }

    pub fn is_selected(&self, category: &CuisineCategory) -> bool {
        self.name() == category.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trip() {
        assert_eq!(CuisineFilter::from_name("All"), CuisineFilter::All);
        assert_eq!(CuisineFilter::from_name("Sushi").name(), "Sushi");
    }

    #[test]
    fn test_is_selected() {
        let sushi = CUISINE_CATEGORIES.iter().find(|c| c.name == "Sushi").copied();
        let filter = CuisineFilter::from_name("Sushi");
        assert!(sushi.map(|c| filter.is_selected(&c)).unwrap_or(false));
        assert!(CuisineFilter::All.is_selected(&CUISINE_CATEGORIES[0]));
    }
}
