// ============================================================================
// USE_FORM - Estado + validación de formularios con validator
// ============================================================================

use validator::Validate;
use yew::prelude::*;

use crate::models::forms::{validate_form, FormErrors};

/// Cuándo se valida un campo al editarlo
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationMode {
    /// Solo al enviar; tras un envío fallido se revalida en cada cambio
    OnSubmit,
    /// En cada cambio
    OnChange,
}

impl ValidationMode {
    pub fn validates_on_change(self, submitted: bool) -> bool {
        match self {
            ValidationMode::OnChange => true,
            ValidationMode::OnSubmit => submitted,
        }
    }
}

pub struct UseFormHandle<T> {
    pub values: UseStateHandle<T>,
    pub errors: UseStateHandle<FormErrors>,
    submitted: UseStateHandle<bool>,
    mode: ValidationMode,
}

impl<T> Clone for UseFormHandle<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            errors: self.errors.clone(),
            submitted: self.submitted.clone(),
            mode: self.mode,
        }
    }
}

impl<T> UseFormHandle<T>
where
    T: Validate + Clone + PartialEq + 'static,
{
    pub fn error(&self, field: &str) -> Option<String> {
        self.errors.get(field).map(str::to_string)
    }

    /// Callback que escribe un campo con el texto recibido
    pub fn bind(&self, apply: impl Fn(&mut T, String) + 'static) -> Callback<String> {
        let form = self.clone();
        Callback::from(move |raw: String| {
            let mut next = (*form.values).clone();
            apply(&mut next, raw);
            if form.mode.validates_on_change(*form.submitted) {
                form.errors.set(validate_form(&next).err().unwrap_or_default());
            }
            form.values.set(next);
        })
    }

    /// Valida y, si todo es correcto, emite los valores
    pub fn on_submit(&self, on_valid: Callback<T>) -> Callback<SubmitEvent> {
        let form = self.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.submitted.set(true);
            match validate_form(&*form.values) {
                Ok(()) => {
                    form.errors.set(FormErrors::default());
                    on_valid.emit((*form.values).clone());
                }
                Err(errors) => {
                    log::warn!("⚠️ Formulario inválido: {}", errors);
                    form.errors.set(errors);
                }
            }
        })
    }
}

#[hook]
pub fn use_form<T>(initial: T, mode: ValidationMode) -> UseFormHandle<T>
where
    T: Validate + Clone + PartialEq + 'static,
{
    let values = use_state(move || initial);
    let errors = use_state(FormErrors::default);
    let submitted = use_state(|| false);

    UseFormHandle {
        values,
        errors,
        submitted,
        mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_mode() {
        assert!(ValidationMode::OnChange.validates_on_change(false));
        assert!(!ValidationMode::OnSubmit.validates_on_change(false));
        assert!(ValidationMode::OnSubmit.validates_on_change(true));
    }
}
