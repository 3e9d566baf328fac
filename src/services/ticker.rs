// ============================================================================
// TICKER - Disparador periódico cancelable
// ============================================================================
// Cada tick es una re-invocación diferida (Timeout encadenado). El callback
// decide si seguir (TickFlow::Continue) o detenerse (TickFlow::Stop).
// El TickHandle libera el timer pendiente al cancelar o al hacer drop.
// ============================================================================

use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFlow {
    Continue,
    Stop,
}

pub type TickCallback = Box<dyn FnMut() -> TickFlow>;

/// Fuente de ticks periódicos
pub trait Ticker {
    fn every(&self, period_ms: u32, on_tick: TickCallback) -> TickHandle;
}

/// Handle de un ticker en curso. Cancelar es idempotente y nunca falla.
pub struct TickHandle {
    active: Rc<Cell<bool>>,
    release: Option<Box<dyn FnOnce()>>,
}

impl TickHandle {
    pub fn new(active: Rc<Cell<bool>>, release: impl FnOnce() + 'static) -> Self {
        Self {
            active,
            release: Some(Box::new(release)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn cancel(&mut self) {
        self.active.set(false);
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Ticker del navegador sobre gloo_timers
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTicker;

type TimeoutSlot = Rc<RefCell<Option<Timeout>>>;

impl Ticker for BrowserTicker {
    fn every(&self, period_ms: u32, on_tick: TickCallback) -> TickHandle {
        let active = Rc::new(Cell::new(true));
        let slot: TimeoutSlot = Rc::new(RefCell::new(None));

        arm(period_ms, active.clone(), slot.clone(), Rc::new(RefCell::new(on_tick)));

        TickHandle::new(active, move || {
            // Drop del Timeout => clearTimeout
            slot.borrow_mut().take();
        })
    }
}

fn arm(
    period_ms: u32,
    active: Rc<Cell<bool>>,
    slot: TimeoutSlot,
    on_tick: Rc<RefCell<TickCallback>>,
) {
    let next_slot = slot.clone();
    let timeout = Timeout::new(period_ms, move || {
        if !active.get() {
            return;
        }

        let flow = (on_tick.borrow_mut())();
        match flow {
            TickFlow::Continue if active.get() => arm(period_ms, active, next_slot, on_tick),
            _ => {
                active.set(false);
                next_slot.borrow_mut().take();
            }
        }
    });
    *slot.borrow_mut() = Some(timeout);
}

/// Reloj virtual para tests: los ticks sólo ocurren con advance_by()
#[cfg(test)]
pub mod manual {
    use super::*;

    struct Scheduled {
        period_ms: u64,
        next_at: u64,
        active: Rc<Cell<bool>>,
        on_tick: TickCallback,
    }

    #[derive(Default)]
    pub struct ManualTicker {
        now: Cell<u64>,
        fired: Cell<usize>,
        tasks: RefCell<Vec<Scheduled>>,
    }

    impl ManualTicker {
        pub fn new() -> Self {
            Self::default()
        }

        /// Cantidad total de ticks disparados
        pub fn fired(&self) -> usize {
            self.fired.get()
        }

        pub fn pending(&self) -> usize {
            self.tasks.borrow().iter().filter(|t| t.active.get()).count()
        }

        pub fn advance_by(&self, elapsed_ms: u64) {
            let target = self.now.get() + elapsed_ms;

            loop {
                let mut tasks = self.tasks.borrow_mut();
                tasks.retain(|t| t.active.get());

                let due = tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.next_at <= target)
                    .min_by_key(|(_, t)| t.next_at)
                    .map(|(i, _)| i);
                let Some(index) = due else { break };

                // Se saca de la lista mientras corre el callback
                let mut task = tasks.swap_remove(index);
                drop(tasks);

                self.now.set(task.next_at);
                self.fired.set(self.fired.get() + 1);
                match (task.on_tick)() {
                    TickFlow::Continue if task.active.get() => {
                        task.next_at += task.period_ms;
                        self.tasks.borrow_mut().push(task);
                    }
                    _ => task.active.set(false),
                }
            }

            self.now.set(target);
        }
    }

    impl Ticker for ManualTicker {
        fn every(&self, period_ms: u32, on_tick: TickCallback) -> TickHandle {
            let active = Rc::new(Cell::new(true));
            self.tasks.borrow_mut().push(Scheduled {
                period_ms: u64::from(period_ms),
                next_at: self.now.get() + u64::from(period_ms),
                active: active.clone(),
                on_tick,
            });
            TickHandle::new(active, || {})
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualTicker;
    use super::*;

    fn counting(ticker: &ManualTicker, period_ms: u32, stop_after: usize) -> (TickHandle, Rc<Cell<usize>>) {
        let count = Rc::new(Cell::new(0));
        let handle = {
            let count = count.clone();
            ticker.every(
                period_ms,
                Box::new(move || {
                    count.set(count.get() + 1);
                    if count.get() >= stop_after {
                        TickFlow::Stop
                    } else {
                        TickFlow::Continue
                    }
                }),
            )
        };
        (handle, count)
    }

    #[test]
    fn test_ticks_at_fixed_cadence() {
        let ticker = ManualTicker::new();
        let (_handle, count) = counting(&ticker, 100, usize::MAX);

        ticker.advance_by(99);
        assert_eq!(count.get(), 0);
        ticker.advance_by(1);
        assert_eq!(count.get(), 1);
        ticker.advance_by(250);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_stop_flow_ends_ticker() {
        let ticker = ManualTicker::new();
        let (handle, count) = counting(&ticker, 100, 2);

        ticker.advance_by(1000);
        assert_eq!(count.get(), 2);
        assert!(!handle.is_active());
        assert_eq!(ticker.pending(), 0);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let ticker = ManualTicker::new();
        let (mut handle, count) = counting(&ticker, 100, usize::MAX);

        handle.cancel();
        handle.cancel();
        ticker.advance_by(500);

        assert_eq!(count.get(), 0);
        assert!(!handle.is_active());
    }

    #[test]
    fn test_release_runs_once() {
        let released = Rc::new(Cell::new(0));
        let mut handle = {
            let released = released.clone();
            TickHandle::new(Rc::new(Cell::new(true)), move || released.set(released.get() + 1))
        };

        handle.cancel();
        drop(handle);
        assert_eq!(released.get(), 1);
    }
}
