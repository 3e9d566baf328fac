use gloo_timers::callback::Timeout;
use std::collections::HashMap;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::context::toast::{Toast, ToastAction, ToastContext, ToastQueue};

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Provee ToastContext y pinta los toasts activos.
/// Cada toast se descarta solo tras la duración configurada.
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let next_id = use_mut_ref(|| 1u32);
    let timers = use_mut_ref(ToastTimers::<Timeout>::default);

    // Al desmontar se cancelan los auto-dismiss pendientes
    {
        let timers = timers.clone();
        use_effect_with((), move |_| {
            move || {
                let pending = timers.borrow_mut().clear();
                if pending > 0 {
                    log::info!("🧹 {} timers de toast cancelados", pending);
                }
            }
        });
    }

    let push = {
        let dispatcher = queue.dispatcher();
        let next_id = next_id.clone();
        let timers = timers.clone();
        Callback::from(move |mut toast: Toast| {
            {
                let mut next = next_id.borrow_mut();
                toast.id = *next;
                *next = next.wrapping_add(1);
            }
            log::info!("🔔 Toast: {}", toast.title);

            let id = toast.id;
            dispatcher.dispatch(ToastAction::Push(toast));

            let dispatcher = dispatcher.clone();
            let fired = timers.clone();
            let timeout = Timeout::new(CONFIG.ui.toast_duration_ms, move || {
                dispatcher.dispatch(ToastAction::Dismiss(id));
                let handle = fired.borrow_mut().release(id);
                drop(handle);
            });
            timers.borrow_mut().insert(id, timeout);
        })
    };

    let context = use_memo((), move |_| ToastContext { push });

    let on_dismiss = |id: u32| {
        let dispatcher = queue.dispatcher();
        let timers = timers.clone();
        Callback::from(move |_: MouseEvent| {
            let handle = timers.borrow_mut().release(id);
            drop(handle);
            dispatcher.dispatch(ToastAction::Dismiss(id));
        })
    };

    html! {
        <ContextProvider<ToastContext> context={(*context).clone()}>
            { props.children.clone() }
            <ol class="toaster" aria-live="polite">
                { for queue.toasts.iter().map(|toast| html! {
                    <li key={toast.id} class={toast.variant.to_class()} role="status">
                        <div class="toast-body">
                            <p class="toast-title">{&toast.title}</p>
                            if let Some(description) = &toast.description {
                                <p class="toast-description">{description}</p>
                            }
                        </div>
                        <button class="toast-close" aria-label="Close" onclick={on_dismiss(toast.id)}>{"✕"}</button>
                    </li>
                })}
            </ol>
        </ContextProvider<ToastContext>>
    }
}

/// Timers de auto-dismiss por id de toast. Soltar un handle cancela su timer.
pub(crate) struct ToastTimers<H> {
    handles: HashMap<u32, H>,
}

impl<H> Default for ToastTimers<H> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }
}

impl<H> ToastTimers<H> {
    pub fn insert(&mut self, id: u32, handle: H) {
        self.handles.insert(id, handle);
    }

    /// Saca el handle sin soltarlo; el llamador decide cuándo hacer drop
    pub fn release(&mut self, id: u32) -> Option<H> {
        self.handles.remove(&id)
    }

    /// Suelta todos los handles y devuelve cuántos quedaban
    pub fn clear(&mut self) -> usize {
        let pending = self.handles.len();
        self.handles.clear();
        pending
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.handles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingHandle(Rc<Cell<u32>>);

    impl Drop for CountingHandle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_dismiss_releases_only_that_timer() {
        let dropped = Rc::new(Cell::new(0));
        let mut timers = ToastTimers::default();
        timers.insert(1, CountingHandle(dropped.clone()));
        timers.insert(2, CountingHandle(dropped.clone()));

        drop(timers.release(1));
        assert_eq!(dropped.get(), 1);
        assert_eq!(timers.len(), 1);

        // Dismiss repetido no hace nada
        assert!(timers.release(1).is_none());
        assert_eq!(dropped.get(), 1);
    }

    #[test]
    fn test_clear_drops_every_pending_timer() {
        let dropped = Rc::new(Cell::new(0));
        let mut timers = ToastTimers::default();
        for id in 1..=3 {
            timers.insert(id, CountingHandle(dropped.clone()));
        }

        assert_eq!(timers.clear(), 3);
        assert_eq!(dropped.get(), 3);
        assert_eq!(timers.len(), 0);
    }
}
