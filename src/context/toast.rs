use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Success,
    Destructive,
}

impl ToastVariant {
    pub fn to_class(self) -> &'static str {
        match self {
            ToastVariant::Default => "toast",
            ToastVariant::Success => "toast toast-success",
            ToastVariant::Destructive => "toast toast-destructive",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: None,
            variant: ToastVariant::Default,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn success(mut self) -> Self {
        self.variant = ToastVariant::Success;
        self
    }

    pub fn destructive(mut self) -> Self {
        self.variant = ToastVariant::Destructive;
        self
    }
}

/// Canal para publicar toasts desde cualquier componente
#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub push: Callback<Toast>,
}

/// Toasts visibles; los más antiguos salen al superar el límite
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
}

pub const MAX_VISIBLE_TOASTS: usize = 3;

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => {
                toasts.push(toast);
                let overflow = toasts.len().saturating_sub(MAX_VISIBLE_TOASTS);
                toasts.drain(..overflow);
            }
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastQueue { toasts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_builder() {
        let toast = Toast::new("Order Placed!").with_description("Your delicious meal is on its way.");
        assert_eq!(toast.title, "Order Placed!");
        assert_eq!(toast.description.as_deref(), Some("Your delicious meal is on its way."));
        assert_eq!(toast.variant, ToastVariant::Default);
        assert_eq!(Toast::new("x").destructive().variant, ToastVariant::Destructive);
        assert_eq!(Toast::new("x").success().variant.to_class(), "toast toast-success");
    }

    fn pushed(queue: Rc<ToastQueue>, id: u32) -> Rc<ToastQueue> {
        let mut toast = Toast::new(format!("toast {}", id));
        toast.id = id;
        queue.reduce(ToastAction::Push(toast))
    }

    #[test]
    fn test_queue_push_and_dismiss() {
        let queue = pushed(pushed(Rc::new(ToastQueue::default()), 1), 2);
        assert_eq!(queue.toasts.len(), 2);

        let queue = queue.reduce(ToastAction::Dismiss(1));
        assert_eq!(queue.toasts.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);

        // Descartar un id inexistente no cambia nada
        let queue = queue.reduce(ToastAction::Dismiss(42));
        assert_eq!(queue.toasts.len(), 1);
    }

    #[test]
    fn test_queue_drops_oldest_over_limit() {
        let mut queue = Rc::new(ToastQueue::default());
        for id in 1..=5 {
            queue = pushed(queue, id);
        }
        assert_eq!(queue.toasts.len(), MAX_VISIBLE_TOASTS);
        assert_eq!(queue.toasts[0].id, 3);
    }
}
