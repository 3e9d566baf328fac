use serde::{Deserialize, Serialize};

use crate::utils::constants::MENU_ITEM_PLACEHOLDER_IMAGE;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: Option<String>,
    #[serde(default)]
    pub has_customizations: bool,
}

impl MenuItem {
    pub fn image_or_placeholder(&self) -> &str {
        self.image_url.as_deref().unwrap_or(MENU_ITEM_PLACEHOLDER_IMAGE)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub name: String,
    pub items: Vec<MenuItem>,
    /// Abierta al cargar el acordeón
    #[serde(default)]
    pub expanded_by_default: bool,
}

/// Carta completa de un restaurante + datos del banner
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RestaurantMenu {
    pub restaurant_id: String,
    pub name: String,
    pub banner_url: String,
    pub rating: f32,
    pub rating_count: u32,
    pub address: String,
    pub categories: Vec<MenuCategory>,
}

impl RestaurantMenu {
    pub fn default_open_categories(&self) -> Vec<String> {
        self.categories
            .iter()
            .filter(|c| c.expanded_by_default)
            .map(|c| c.name.clone())
            .collect()
    }

    pub fn item(&self, id: &str) -> Option<&MenuItem> {
        self.categories.iter().flat_map(|c| c.items.iter()).find(|i| i.id == id)
    }

    pub fn rating_count_label(&self) -> String {
        format!("({}+ ratings)", self.rating_count)
    }
}

// ============================================================================
// PERSONALIZACIÓN DE PLATOS
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ItemSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ItemSize {
    pub const ALL: [ItemSize; 3] = [ItemSize::Small, ItemSize::Medium, ItemSize::Large];

    pub fn surcharge(self) -> f64 {
        match self {
            ItemSize::Small => 0.0,
            ItemSize::Medium => 2.0,
            ItemSize::Large => 4.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ItemSize::Small => "Small",
            ItemSize::Medium => "Medium (+$2.00)",
            ItemSize::Large => "Large (+$4.00)",
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            ItemSize::Small => "small",
            ItemSize::Medium => "medium",
            ItemSize::Large => "large",
        }
    }

    pub fn from_value(value: &str) -> Self {
        ItemSize::ALL
            .into_iter()
            .find(|s| s.value() == value)
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddOn {
    Avocado,
    ExtraCheese,
}

impl AddOn {
    pub const ALL: [AddOn; 2] = [AddOn::Avocado, AddOn::ExtraCheese];

    pub fn price(self) -> f64 {
        match self {
            AddOn::Avocado => 1.5,
            AddOn::ExtraCheese => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AddOn::Avocado => "Avocado (+$1.50)",
            AddOn::ExtraCheese => "Extra Cheese (+$1.00)",
        }
    }
}

/// Opciones elegidas en el diálogo de personalización
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Customization {
    pub size: ItemSize,
    pub add_ons: Vec<AddOn>,
    pub special_instructions: String,
}

impl Customization {
    pub fn toggle_add_on(&mut self, add_on: AddOn) {
        if let Some(pos) = self.add_ons.iter().position(|a| *a == add_on) {
            self.add_ons.remove(pos);
        } else {
            self.add_ons.push(add_on);
        }
    }

    pub fn has_add_on(&self, add_on: AddOn) -> bool {
        self.add_ons.contains(&add_on)
    }

    /// Precio unitario con tamaño y extras
    pub fn unit_price(&self, base_price: f64) -> f64 {
        base_price + self.size.surcharge() + self.add_ons.iter().map(|a| a.price()).sum::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_customization_is_medium() {
        let c = Customization::default();
        assert_eq!(c.size, ItemSize::Medium);
        assert!((c.unit_price(10.0) - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_add_ons_toggle_and_price() {
        let mut c = Customization {
            size: ItemSize::Large,
            ..Default::default()
        };
        c.toggle_add_on(AddOn::Avocado);
        c.toggle_add_on(AddOn::ExtraCheese);
        assert!((c.unit_price(16.99) - 23.49).abs() < 1e-9);

        c.toggle_add_on(AddOn::Avocado);
        assert!(!c.has_add_on(AddOn::Avocado));
        assert!((c.unit_price(16.99) - 21.99).abs() < 1e-9);
    }
}
