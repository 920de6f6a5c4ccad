//! Адресная строка и история браузера как явный порт.
//!
//! `BrowserLocationStore` работает с `window.history`, `MemoryLocationStore`
//! хранит стек истории в памяти (тесты, запуск без браузера).

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    Replace,
}

/// Подписка на изменения адреса. Drop снимает слушателя.
#[must_use = "dropping a Subscription removes the listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Подписка, которую нечем снимать (нет `window`)
    pub fn detached() -> Self {
        Self { cancel: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

pub trait LocationStore {
    /// Текущий путь (`/doces/tapioca-de-chocolate`)
    fn path(&self) -> String;

    fn set_path(&self, path: &str, mode: HistoryMode);

    /// Вызывается при переходах назад/вперёд. Собственные `set_path`
    /// слушателей не будят, как и `pushState` в браузере.
    fn on_change(&self, callback: Box<dyn Fn(String)>) -> Subscription;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocationStore;

fn current_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

impl LocationStore for BrowserLocationStore {
    fn path(&self) -> String {
        current_pathname()
    }

    fn set_path(&self, path: &str, mode: HistoryMode) {
        let Some(w) = window() else {
            return;
        };
        let history = match w.history() {
            Ok(history) => history,
            Err(err) => {
                log::warn!("history is not available: {:?}", err);
                return;
            }
        };

        let result = match mode {
            HistoryMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(path)),
            HistoryMode::Replace => history.replace_state_with_url(&JsValue::NULL, "", Some(path)),
        };
        if let Err(err) = result {
            log::warn!("history {:?} to '{}' failed: {:?}", mode, path, err);
        }
    }

    fn on_change(&self, callback: Box<dyn Fn(String)>) -> Subscription {
        let Some(w) = window() else {
            return Subscription::detached();
        };

        let listener = Closure::wrap(Box::new(move |_: web_sys::Event| {
            callback(current_pathname());
        }) as Box<dyn FnMut(web_sys::Event)>);

        if let Err(err) =
            w.add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref())
        {
            log::warn!("popstate listener was not installed: {:?}", err);
            return Subscription::detached();
        }

        Subscription::new(move || {
            let _ = w.remove_event_listener_with_callback(
                "popstate",
                listener.as_ref().unchecked_ref(),
            );
        })
    }
}

type Listener = Rc<dyn Fn(String)>;

struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
    listeners: Vec<(u64, Listener)>,
    next_listener: u64,
}

/// История в памяти с `back`/`forward`
#[derive(Clone)]
pub struct MemoryLocationStore {
    inner: Rc<RefCell<MemoryHistory>>,
}

impl Default for MemoryLocationStore {
    fn default() -> Self {
        Self::new("/")
    }
}

impl MemoryLocationStore {
    pub fn new(initial_path: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryHistory {
                entries: vec![initial_path.to_string()],
                cursor: 0,
                listeners: Vec::new(),
                next_listener: 0,
            })),
        }
    }

    /// Весь стек истории, от первой записи к последней
    pub fn entries(&self) -> Vec<String> {
        self.inner.borrow().entries.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn back(&self) -> bool {
        self.go(-1)
    }

    pub fn forward(&self) -> bool {
        self.go(1)
    }

    /// Ручная правка адресной строки с последующим переходом
    pub fn visit(&self, path: &str) {
        self.set_path(path, HistoryMode::Push);
        self.notify();
    }

    fn go(&self, delta: isize) -> bool {
        {
            let mut history = self.inner.borrow_mut();
            let Some(target) = history.cursor.checked_add_signed(delta) else {
                return false;
            };
            if target >= history.entries.len() {
                return false;
            }
            history.cursor = target;
        }
        self.notify();
        true
    }

    fn notify(&self) {
        // слушатели могут читать стор, поэтому borrow отпускается до вызова
        let (path, listeners) = {
            let history = self.inner.borrow();
            let listeners: Vec<Listener> =
                history.listeners.iter().map(|(_, l)| l.clone()).collect();
            (history.entries[history.cursor].clone(), listeners)
        };
        for listener in listeners {
            listener(path.clone());
        }
    }
}

impl LocationStore for MemoryLocationStore {
    fn path(&self) -> String {
        let history = self.inner.borrow();
        history.entries[history.cursor].clone()
    }

    fn set_path(&self, path: &str, mode: HistoryMode) {
        let mut history = self.inner.borrow_mut();
        match mode {
            HistoryMode::Push => {
                let keep = history.cursor + 1;
                history.entries.truncate(keep);
                history.entries.push(path.to_string());
                history.cursor = keep;
            }
            HistoryMode::Replace => {
                let cursor = history.cursor;
                history.entries[cursor] = path.to_string();
            }
        }
    }

    fn on_change(&self, callback: Box<dyn Fn(String)>) -> Subscription {
        let id = {
            let mut history = self.inner.borrow_mut();
            let id = history.next_listener;
            history.next_listener += 1;
            history.listeners.push((id, Rc::from(callback)));
            id
        };

        let inner: Weak<RefCell<MemoryHistory>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }
}
