use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

use crate::services::order_tracker::{start_ticking, OrderProgressTracker, TrackerState};
use crate::services::ticker::{BrowserTicker, TickHandle};

/// Seguimiento en vivo mientras el componente esté montado.
/// El TickHandle vive en un use_mut_ref y se libera en el cleanup del efecto.
#[hook]
pub fn use_order_tracker(tick_interval_ms: u32) -> TrackerState {
    let state = use_state(TrackerState::default);
    let tick_handle = use_mut_ref(|| None::<TickHandle>);

    {
        let setter = state.setter();
        use_effect_with(tick_interval_ms, move |period| {
            log::info!("⏰ Iniciando seguimiento del pedido (tick cada {} ms)", period);

            let tracker = Rc::new(RefCell::new(OrderProgressTracker::new()));
            let handle = start_ticking(&BrowserTicker, tracker, *period, move |s| setter.set(s));
            *tick_handle.borrow_mut() = Some(handle);

            move || {
                // Cleanup
                if let Some(mut handle) = tick_handle.borrow_mut().take() {
                    handle.cancel();
                    log::info!("🛑 Seguimiento del pedido detenido");
                }
            }
        });
    }

    *state
}
