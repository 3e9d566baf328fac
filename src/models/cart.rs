use serde::{Deserialize, Serialize};

use crate::utils::constants::CART_PLACEHOLDER_IMAGE;

/// Línea del carrito
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub image: Option<String>,
}

impl CartItem {
    pub fn new(id: &str, name: &str, price: f64, quantity: u32, image: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price: price.max(0.0),
            quantity: quantity.max(1),
            image: image.map(str::to_string),
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    pub fn image_or_placeholder(&self) -> &str {
        self.image.as_deref().unwrap_or(CART_PLACEHOLDER_IMAGE)
    }

    /// El botón "-" se deshabilita en cantidad 1
    pub fn can_decrease(&self) -> bool {
        self.quantity > 1
    }
}

/// Carrito compartido entre carta y checkout (solo lectura)
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }
}

/// Resumen del pedido mostrado en checkout
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub items: Vec<CartItem>,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
}

impl OrderSummary {
    pub fn from_cart(cart: &Cart, delivery_fee: f64) -> Self {
        let subtotal = cart.subtotal();
        Self {
            items: cart.items.clone(),
            subtotal,
            delivery_fee,
            total: subtotal + delivery_fee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sushi_cart() -> Cart {
        Cart::new(vec![
            CartItem::new("sushi-1", "Spicy Tuna Roll", 12.99, 1, None),
            CartItem::new("drink-2", "Green Tea", 2.50, 2, None),
            CartItem::new("side-3", "Edamame", 5.00, 1, None),
        ])
    }

    #[test]
    fn test_subtotal_and_count() {
        let cart = sushi_cart();
        assert!((cart.subtotal() - 22.99).abs() < 1e-9);
        assert_eq!(cart.item_count(), 4);
        assert!(!cart.is_empty());
    }

    #[test]
    fn test_summary_total_includes_fee() {
        let summary = OrderSummary::from_cart(&sushi_cart(), 4.99);
        assert!((summary.total - 27.98).abs() < 1e-9);
        assert_eq!(summary.items.len(), 3);
    }

    #[test]
    fn test_item_invariants() {
        let item = CartItem::new("x", "X", -1.0, 0, None);
        assert_eq!(item.price, 0.0);
        assert_eq!(item.quantity, 1);
        assert!(!item.can_decrease());
        assert_eq!(item.image_or_placeholder(), CART_PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), 0.0);
        assert_eq!(OrderSummary::from_cart(&cart, 4.99).total, 4.99);
    }
}
