use yew::prelude::*;

use crate::context::toast::{Toast, ToastContext};

/// Devuelve el callback para mostrar un toast.
/// Fuera de un ToastProvider el toast solo se loguea.
#[hook]
pub fn use_toast() -> Callback<Toast> {
    use_context::<ToastContext>()
        .map(|ctx| ctx.push)
        .unwrap_or_else(|| Callback::from(|toast: Toast| log::info!("🔔 (sin toaster) {}", toast.title)))
}
