//! Отменяемые таймеры и debounce поверх них.
//!
//! `Debouncer` держит не больше одного ожидающего таймера: новый вызов
//! отменяет прежний, drop отменяет последний.

use gloo_timers::callback::Timeout;

/// Планировщик отложенных вызовов
pub trait TimerDriver {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;

    fn cancel(&self, handle: Self::Handle);
}

/// Таймеры браузера (`setTimeout`)
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTimerDriver;

impl TimerDriver for GlooTimerDriver {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }

    fn cancel(&self, handle: Timeout) {
        let _ = handle.cancel();
    }
}

/// Выполняет только последний вызов за окно тишины.
/// Новый вызов синхронно отменяет предыдущий таймер.
pub struct Debouncer<D: TimerDriver> {
    driver: D,
    delay_ms: u32,
    pending: Option<D::Handle>,
}

impl<D: TimerDriver> Debouncer<D> {
    pub fn new(driver: D, delay_ms: u32) -> Self {
        Self {
            driver,
            delay_ms,
            pending: None,
        }
    }

    pub fn call(&mut self, f: impl FnOnce() + 'static) {
        self.cancel();
        self.pending = Some(self.driver.schedule(self.delay_ms, Box::new(f)));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.driver.cancel(handle);
        }
    }
}

impl<D: TimerDriver> Drop for Debouncer<D> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use super::TimerDriver;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Slot {
        delay_ms: u32,
        callback: Option<Box<dyn FnOnce()>>,
    }

    /// Таймеры, которые срабатывают только по команде теста
    #[derive(Clone, Default)]
    pub(crate) struct ManualTimers {
        slots: Rc<RefCell<Vec<Slot>>>,
    }

    pub(crate) struct ManualHandle(usize);

    impl ManualTimers {
        pub(crate) fn pending(&self) -> usize {
            self.slots
                .borrow()
                .iter()
                .filter(|slot| slot.callback.is_some())
                .count()
        }

        pub(crate) fn last_delay(&self) -> Option<u32> {
            self.slots.borrow().last().map(|slot| slot.delay_ms)
        }

        /// Выполняет все неотменённые таймеры
        pub(crate) fn fire_all(&self) {
            let callbacks: Vec<Box<dyn FnOnce()>> = self
                .slots
                .borrow_mut()
                .iter_mut()
                .filter_map(|slot| slot.callback.take())
                .collect();
            for callback in callbacks {
                callback();
            }
        }
    }

    impl TimerDriver for ManualTimers {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
            let mut slots = self.slots.borrow_mut();
            slots.push(Slot {
                delay_ms,
                callback: Some(callback),
            });
            ManualHandle(slots.len() - 1)
        }

        fn cancel(&self, handle: ManualHandle) {
            if let Some(slot) = self.slots.borrow_mut().get_mut(handle.0) {
                slot.callback = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualTimers;
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_only_last_call_fires() {
        let timers = ManualTimers::default();
        let fired = Rc::new(RefCell::new(Vec::new()));
        let mut debouncer = Debouncer::new(timers.clone(), 300);

        for n in 1..=3 {
            let fired = fired.clone();
            debouncer.call(move || fired.borrow_mut().push(n));
        }
        assert_eq!(timers.pending(), 1);
        assert_eq!(timers.last_delay(), Some(300));

        timers.fire_all();
        assert_eq!(*fired.borrow(), vec![3]);
    }

    #[test]
    fn test_fired_timer_is_not_pending() {
        let timers = ManualTimers::default();
        let fired = Rc::new(RefCell::new(0));
        let mut debouncer = Debouncer::new(timers.clone(), 100);

        let f = fired.clone();
        debouncer.call(move || *f.borrow_mut() += 1);
        timers.fire_all();
        assert_eq!(timers.pending(), 0);

        // повторный вызов после срабатывания планирует заново
        let f = fired.clone();
        debouncer.call(move || *f.borrow_mut() += 10);
        timers.fire_all();
        assert_eq!(*fired.borrow(), 11);
    }

    #[test]
    fn test_cancel_and_drop() {
        let timers = ManualTimers::default();
        let fired = Rc::new(RefCell::new(0));
        {
            let mut debouncer = Debouncer::new(timers.clone(), 300);
            let f = fired.clone();
            debouncer.call(move || *f.borrow_mut() += 1);
            debouncer.cancel();
            assert_eq!(timers.pending(), 0);

            let f = fired.clone();
            debouncer.call(move || *f.borrow_mut() += 1);
            assert_eq!(timers.pending(), 1);
        }
        assert_eq!(timers.pending(), 0);
        timers.fire_all();
        assert_eq!(*fired.borrow(), 0);
    }
}
