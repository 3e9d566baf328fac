// ============================================================================
// FORMULARIOS - Esquemas de validación (checkout y perfil)
// ============================================================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationErrors};

/// Errores por campo (campo -> primer mensaje)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<String, String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.fields.entry(field.to_string()).or_insert_with(|| message.into());
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<&ValidationErrors> for FormErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut form_errors = FormErrors::default();
        for (field, field_errors) in errors.field_errors() {
            let message = field_errors
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "Invalid value.".to_string());
            form_errors.insert(&field.to_string(), message);
        }
        form_errors
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.fields().map(|(k, v)| format!("{}: {}", k, v)).collect();
        write!(f, "{}", joined.join(", "))
    }
}

/// Valida cualquier esquema con derive(Validate)
pub fn validate_form<T: Validate>(form: &T) -> Result<(), FormErrors> {
    form.validate().map_err(|e| FormErrors::from(&e))
}

// ============================================================================
// CHECKOUT
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    Paypal,
    Cash,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("You need to select a payment method.")]
pub struct ParsePaymentMethodError(pub String);

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::CreditCard, PaymentMethod::Paypal, PaymentMethod::Cash];

    pub fn value(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit-card",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::Cash => "cash",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::Paypal => "PayPal",
            PaymentMethod::Cash => "Cash on Delivery",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = ParsePaymentMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|m| m.value() == s)
            .ok_or_else(|| ParsePaymentMethodError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CheckoutForm {
    #[validate(length(min = 2, message = "Full name must be at least 2 characters."))]
    pub full_name: String,
    #[validate(length(min = 5, message = "Address must be at least 5 characters."))]
    pub address: String,
    #[validate(length(min = 2, message = "City is required."))]
    pub city: String,
    #[validate(length(min = 5, message = "A valid postal code is required."))]
    pub postal_code: String,
    pub payment_method: PaymentMethod,
    pub promo_code: String,
}

impl Default for CheckoutForm {
    fn default() -> Self {
        Self {
            full_name: "Alex Doe".to_string(),
            address: "123 Flavor Street".to_string(),
            city: "Tastytown".to_string(),
            postal_code: "12345".to_string(),
            payment_method: PaymentMethod::CreditCard,
            promo_code: String::new(),
        }
    }
}

impl CheckoutForm {
    pub fn promo_code(&self) -> Option<&str> {
        let code = self.promo_code.trim();
        (!code.is_empty()).then_some(code)
    }
}

// ============================================================================
// PERFIL
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProfileForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters."))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email."))]
    pub email: String,
    #[validate(length(min = 10, message = "Please enter a valid phone number."))]
    pub phone: String,
    #[validate(length(min = 5, message = "Please enter a valid address."))]
    pub address: String,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            name: "Alex Doe".to_string(),
            email: "alex.doe@example.com".to_string(),
            phone: "123-456-7890".to_string(),
            address: "123 Flavor St, Foodie City, 12345".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_defaults_are_valid() {
        assert!(validate_form(&CheckoutForm::default()).is_ok());
    }

    #[test]
    fn test_checkout_field_messages() {
        let form = CheckoutForm {
            full_name: "A".to_string(),
            postal_code: "123".to_string(),
            ..Default::default()
        };

        let errors = validate_form(&form).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("full_name"), Some("Full name must be at least 2 characters."));
        assert_eq!(errors.get("postal_code"), Some("A valid postal code is required."));
        assert_eq!(errors.get("city"), None);
    }

    #[test]
    fn test_payment_method_parse() {
        assert_eq!("paypal".parse::<PaymentMethod>(), Ok(PaymentMethod::Paypal));
        assert_eq!("cash".parse::<PaymentMethod>(), Ok(PaymentMethod::Cash));
        assert!("bitcoin".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_promo_code_is_optional() {
        let mut form = CheckoutForm::default();
        assert_eq!(form.promo_code(), None);
        form.promo_code = "  TASTY10 ".to_string();
        assert_eq!(form.promo_code(), Some("TASTY10"));
    }

    #[test]
    fn test_profile_defaults_are_valid() {
        assert!(validate_form(&ProfileForm::default()).is_ok());
    }

    #[test]
    fn test_profile_invalid_email_and_phone() {
        let form = ProfileForm {
            email: "not-an-email".to_string(),
            phone: "555".to_string(),
            ..Default::default()
        };

        let errors = validate_form(&form).unwrap_err();
        assert_eq!(errors.get("email"), Some("Please enter a valid email."));
        assert_eq!(errors.get("phone"), Some("Please enter a valid phone number."));
        assert_eq!(errors.get("name"), None);
    }
}
