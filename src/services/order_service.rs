// ============================================================================
// ORDER SERVICE - Confirmación de pedido y perfil (sin backend)
// ============================================================================
// No hay API: los envíos se validan y se loguean. Nada se persiste.
// ============================================================================

use crate::models::cart::OrderSummary;
use crate::models::forms::{validate_form, CheckoutForm, FormErrors, ProfileForm};
use crate::models::order::PlacedOrder;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckoutError {
    #[error("Invalid checkout form: {0}")]
    InvalidForm(FormErrors),

    #[error("Cannot place an order with an empty cart")]
    EmptyCart,
}

/// Valida el formulario y genera la referencia del pedido
pub fn place_order(form: &CheckoutForm, summary: &OrderSummary) -> Result<PlacedOrder, CheckoutError> {
    validate_form(form).map_err(CheckoutError::InvalidForm)?;
    if summary.items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let order = PlacedOrder {
        reference: format!("ORD#{}", &uuid::Uuid::new_v4().simple().to_string()[..8].to_uppercase()),
        total: summary.total,
        item_count: summary.items.iter().map(|i| i.quantity).sum(),
    };

    log::info!(
        "🧾 Order submitted: {} ({}) {}",
        order.reference,
        serde_json::to_string(form).unwrap_or_default(),
        serde_json::to_string(summary).unwrap_or_default()
    );
    Ok(order)
}

pub fn save_profile(form: &ProfileForm) -> Result<(), FormErrors> {
    validate_form(form)?;
    log::info!("👤 Profile updated: {}", serde_json::to_string(form).unwrap_or_default());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cart::{Cart, CartItem};

    fn summary() -> OrderSummary {
        OrderSummary::from_cart(
            &Cart::new(vec![
                CartItem::new("roll-2", "Spicy Tuna Roll", 12.99, 1, None),
                CartItem::new("drink-2", "Green Tea", 2.50, 2, None),
            ]),
            4.99,
        )
    }

    #[test]
    fn test_place_order_with_valid_form() {
        let order = place_order(&CheckoutForm::default(), &summary()).unwrap();

        assert!(order.reference.starts_with("ORD#"));
        assert_eq!(order.reference.len(), 12);
        assert_eq!(order.item_count, 3);
        assert!((order.total - 22.98).abs() < 1e-9);
    }

    #[test]
    fn test_place_order_rejects_invalid_form() {
        let form = CheckoutForm {
            city: String::new(),
            ..Default::default()
        };

        match place_order(&form, &summary()) {
            Err(CheckoutError::InvalidForm(errors)) => {
                assert_eq!(errors.get("city"), Some("City is required."));
            }
            other => panic!("expected InvalidForm, got {:?}", other),
        }
    }

    #[test]
    fn test_place_order_rejects_empty_cart() {
        let empty = OrderSummary::from_cart(&Cart::default(), 4.99);
        assert_eq!(place_order(&CheckoutForm::default(), &empty), Err(CheckoutError::EmptyCart));
    }

    #[test]
    fn test_save_profile() {
        assert!(save_profile(&ProfileForm::default()).is_ok());

        let form = ProfileForm {
            name: "A".to_string(),
            ..Default::default()
        };
        let errors = save_profile(&form).unwrap_err();
        assert!(errors.get("name").is_some());
    }
}
