// ============================================================================
// ORDER TRACKER - Máquina de estados del seguimiento de pedido
// ============================================================================
// Progreso lineal y monótono: OrderPlaced -> Preparing -> OutForDelivery -> Delivered
// Nunca retrocede ni salta etapas. Avanzar en la etapa final es un no-op.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::order_stage::{OrderStage, StepStatus, STAGE_COUNT};
use crate::services::ticker::{TickFlow, TickHandle, Ticker};

/// Snapshot inmutable del progreso (lo que la vista renderiza)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackerState {
    current_stage_index: usize,
}

impl Default for TrackerState {
    fn default() -> Self {
        Self { current_stage_index: 0 }
    }
}

impl TrackerState {
    pub fn current_stage_index(&self) -> usize {
        self.current_stage_index
    }

    pub fn current_stage(&self) -> OrderStage {
        // El índice siempre está dentro del catálogo
        OrderStage::from_index(self.current_stage_index).unwrap_or(OrderStage::Delivered)
    }

    pub fn is_terminal(&self) -> bool {
        self.current_stage_index == STAGE_COUNT - 1
    }

    /// index / (STAGE_COUNT - 1), en [0, 1]
    pub fn progress_fraction(&self) -> f64 {
        self.current_stage_index as f64 / (STAGE_COUNT - 1) as f64
    }

    pub fn progress_percentage(&self) -> f64 {
        self.progress_fraction() * 100.0
    }

    pub fn step_status(&self, stage: OrderStage) -> StepStatus {
        let index = stage.index();
        if index < self.current_stage_index {
            StepStatus::Completed
        } else if index == self.current_stage_index {
            StepStatus::Active
        } else {
            StepStatus::Upcoming
        }
    }
}

/// Resultado de un avance
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Advanced(OrderStage),
    AlreadyTerminal,
}

#[derive(Debug, Default)]
pub struct OrderProgressTracker {
    state: TrackerState,
}

impl OrderProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)inicia el seguimiento en la primera etapa
    pub fn start(&mut self) {
        self.state = TrackerState::default();
    }

    /// Único operador de mutación: +1 mientras no sea la etapa final
    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.state.is_terminal() {
            return AdvanceOutcome::AlreadyTerminal;
        }
        self.state.current_stage_index += 1;
        AdvanceOutcome::Advanced(self.state.current_stage())
    }

    pub fn current_stage(&self) -> OrderStage {
        self.state.current_stage()
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn progress_fraction(&self) -> f64 {
        self.state.progress_fraction()
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }
}

/// Arranca el tracker y lo avanza una vez por tick.
/// El ticker se detiene solo al llegar a la etapa final; el handle devuelto
/// cancela los ticks pendientes (también al hacer drop).
pub fn start_ticking<T, F>(
    ticker: &T,
    tracker: Rc<RefCell<OrderProgressTracker>>,
    period_ms: u32,
    on_change: F,
) -> TickHandle
where
    T: Ticker + ?Sized,
    F: Fn(TrackerState) + 'static,
{
    tracker.borrow_mut().start();
    on_change(tracker.borrow().state());

    ticker.every(
        period_ms,
        Box::new(move || {
            let mut tracker = tracker.borrow_mut();
            match tracker.advance() {
                AdvanceOutcome::Advanced(stage) => {
                    log::info!("🚚 Pedido avanzó a: {}", stage);
                    on_change(tracker.state());
                }
                AdvanceOutcome::AlreadyTerminal => {
                    log::debug!("Tick ignorado, el pedido ya fue entregado");
                }
            }

            if tracker.is_terminal() {
                log::info!("✅ Seguimiento finalizado, deteniendo ticks");
                TickFlow::Stop
            } else {
                TickFlow::Continue
            }
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ticker::manual::ManualTicker;

    const TICK_MS: u32 = 4000;

    #[test]
    fn test_start_places_order() {
        let mut tracker = OrderProgressTracker::new();
        tracker.start();

        assert_eq!(tracker.current_stage(), OrderStage::OrderPlaced);
        assert_eq!(tracker.progress_fraction(), 0.0);
        assert!(!tracker.is_terminal());
    }

    #[test]
    fn test_three_advances_reach_delivered() {
        let mut tracker = OrderProgressTracker::new();
        tracker.start();
        for _ in 0..3 {
            assert!(matches!(tracker.advance(), AdvanceOutcome::Advanced(_)));
        }

        assert_eq!(tracker.current_stage(), OrderStage::Delivered);
        assert!(tracker.is_terminal());
        assert_eq!(tracker.progress_fraction(), 1.0);
    }

    #[test]
    fn test_terminal_absorbs_further_advances() {
        let mut tracker = OrderProgressTracker::new();
        for _ in 0..3 {
            tracker.advance();
        }

        assert_eq!(tracker.advance(), AdvanceOutcome::AlreadyTerminal);
        assert_eq!(tracker.advance(), AdvanceOutcome::AlreadyTerminal);
        assert_eq!(tracker.current_stage(), OrderStage::Delivered);
        assert_eq!(tracker.progress_fraction(), 1.0);
    }

    #[test]
    fn test_monotonic_and_bounded() {
        let mut tracker = OrderProgressTracker::new();
        let mut previous = tracker.state().current_stage_index();
        for _ in 0..10 {
            tracker.advance();
            let current = tracker.state().current_stage_index();
            assert!(current >= previous);
            assert!(current - previous <= 1);
            assert!(current < STAGE_COUNT);
            previous = current;
        }
    }

    #[test]
    fn test_fraction_per_stage() {
        let expected = [0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0];
        let mut tracker = OrderProgressTracker::new();
        for (i, fraction) in expected.iter().enumerate() {
            assert_eq!(tracker.state().current_stage_index(), i);
            assert_eq!(tracker.progress_fraction(), *fraction);
            tracker.advance();
        }
        assert_eq!(tracker.state().progress_percentage(), 100.0);
    }

    #[test]
    fn test_start_resets_progress() {
        let mut tracker = OrderProgressTracker::new();
        tracker.advance();
        tracker.advance();
        tracker.start();
        assert_eq!(tracker.current_stage(), OrderStage::OrderPlaced);
    }

    #[test]
    fn test_step_status() {
        let mut tracker = OrderProgressTracker::new();
        tracker.advance();
        let state = tracker.state();

        assert_eq!(state.step_status(OrderStage::OrderPlaced), StepStatus::Completed);
        assert_eq!(state.step_status(OrderStage::Preparing), StepStatus::Active);
        assert_eq!(state.step_status(OrderStage::Delivered), StepStatus::Upcoming);
    }

    #[test]
    fn test_ticking_reaches_delivered_and_stops() {
        let ticker = ManualTicker::new();
        let tracker = Rc::new(RefCell::new(OrderProgressTracker::new()));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let handle = {
            let seen = seen.clone();
            start_ticking(&ticker, tracker.clone(), TICK_MS, move |state| {
                seen.borrow_mut().push(state.current_stage());
            })
        };

        ticker.advance_by(u64::from(TICK_MS) * 3);
        assert_eq!(tracker.borrow().current_stage(), OrderStage::Delivered);
        assert!(!handle.is_active());
        assert_eq!(ticker.fired(), 3);

        // Ya no quedan ticks programados
        ticker.advance_by(u64::from(TICK_MS) * 10);
        assert_eq!(ticker.fired(), 3);
        assert_eq!(
            *seen.borrow(),
            vec![
                OrderStage::OrderPlaced,
                OrderStage::Preparing,
                OrderStage::OutForDelivery,
                OrderStage::Delivered,
            ]
        );
    }

    #[test]
    fn test_one_advance_per_tick() {
        let ticker = ManualTicker::new();
        let tracker = Rc::new(RefCell::new(OrderProgressTracker::new()));
        let _handle = start_ticking(&ticker, tracker.clone(), TICK_MS, |_| {});

        ticker.advance_by(u64::from(TICK_MS) - 1);
        assert_eq!(tracker.borrow().current_stage(), OrderStage::OrderPlaced);

        ticker.advance_by(1);
        assert_eq!(tracker.borrow().current_stage(), OrderStage::Preparing);
    }

    #[test]
    fn test_cancel_before_first_tick_keeps_order_placed() {
        let ticker = ManualTicker::new();
        let tracker = Rc::new(RefCell::new(OrderProgressTracker::new()));
        let mut handle = start_ticking(&ticker, tracker.clone(), TICK_MS, |_| {});

        handle.cancel();
        ticker.advance_by(u64::from(TICK_MS) * 5);

        assert_eq!(tracker.borrow().state().current_stage_index(), 0);
        assert_eq!(ticker.fired(), 0);
    }

    #[test]
    fn test_dropping_handle_stops_ticks() {
        let ticker = ManualTicker::new();
        let tracker = Rc::new(RefCell::new(OrderProgressTracker::new()));
        let handle = start_ticking(&ticker, tracker.clone(), TICK_MS, |_| {});

        ticker.advance_by(u64::from(TICK_MS));
        drop(handle);
        ticker.advance_by(u64::from(TICK_MS) * 5);

        assert_eq!(tracker.borrow().current_stage(), OrderStage::Preparing);
    }
}
