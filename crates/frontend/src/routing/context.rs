use super::location_store::{BrowserLocationStore, Subscription};
use super::synchronizer::{follow_history, Synchronizer};
use super::viewport::DomViewport;
use crate::shared::timers::{Debouncer, GlooTimerDriver};
use contracts::catalog::{Catalog, CatalogItem};
use contracts::config::NavigationConfig;
use contracts::routing::{Location, Page};
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

type BrowserSynchronizer = Synchronizer<BrowserLocationStore, DomViewport>;

/// Состояние навигации для всего приложения.
///
/// `location` это реактивный снимок для рендера. Источник истины:
/// синхронизатор внутри `StoredValue`.
#[derive(Clone, Copy)]
pub struct RoutingContext {
    pub location: RwSignal<Location>,
    sync: StoredValue<Rc<RefCell<BrowserSynchronizer>>, LocalStorage>,
    history: StoredValue<Option<Subscription>, LocalStorage>,
    scroll_fallback: StoredValue<Debouncer<GlooTimerDriver>, LocalStorage>,
}

impl RoutingContext {
    pub fn new(catalog: Arc<Catalog>, config: &NavigationConfig) -> Self {
        let sync = Synchronizer::new(
            BrowserLocationStore,
            DomViewport::new(config.highlight_ms),
            catalog,
        );
        let location = RwSignal::new(sync.location().clone());

        Self {
            location,
            sync: StoredValue::new_local(Rc::new(RefCell::new(sync))),
            history: StoredValue::new_local(None),
            scroll_fallback: StoredValue::new_local(Debouncer::new(
                GlooTimerDriver,
                config.scroll_fallback_ms,
            )),
        }
    }

    /// Подписка на popstate. Снимается вместе с владельцем контекста.
    pub fn init_history_integration(&self) {
        let location = self.location;
        let subscription = self.sync.with_value(|sync| {
            follow_history(sync, move |synced| {
                log::debug!("popstate -> {:?}", synced);
                location.set(synced.clone());
            })
        });
        self.history.set_value(Some(subscription));

        let history = self.history;
        let scroll_fallback = self.scroll_fallback;
        on_cleanup(move || {
            history.dispose();
            scroll_fallback.dispose();
        });
    }

    /// Хук на смену страницы или открытой позиции (включая popstate)
    pub fn on_view_change(&self, hook: impl Fn() + 'static) {
        self.sync.with_value(|sync| {
            sync.borrow_mut().set_on_view_change(move |_| hook());
        });
    }

    pub fn navigate(&self, page: Page, anchor: Option<&str>) {
        self.apply(|sync| sync.navigate(page, anchor));
        if anchor.is_some() {
            self.schedule_scroll_fallback();
        }
    }

    pub fn go_home(&self) {
        self.navigate(Page::Home, None);
    }

    pub fn reveal_item(&self, item: &CatalogItem) {
        self.apply(|sync| sync.reveal_item(item));
        self.schedule_scroll_fallback();
    }

    pub fn select_item(&self, item: &CatalogItem) {
        self.apply(|sync| sync.select_item(item));
    }

    pub fn close_selection(&self) {
        self.apply(|sync| sync.close_selection());
    }

    /// Вызывается страницей после монтирования контента
    pub fn content_mounted(&self) {
        let Some(location) = self.sync.try_with_value(|sync| {
            let mut sync = sync.borrow_mut();
            sync.content_mounted();
            sync.location().clone()
        }) else {
            return;
        };
        let changed = self
            .location
            .try_with_untracked(|current| *current != location)
            .unwrap_or(false);
        if changed {
            self.location.set(location);
        }
    }

    /// Открытая позиция (реактивно)
    pub fn selected_item(&self) -> Option<CatalogItem> {
        self.location.track();
        self.sync
            .with_value(|sync| sync.borrow().selected_item().cloned())
    }

    fn apply(&self, change: impl FnOnce(&mut BrowserSynchronizer)) {
        let location = self.sync.with_value(|sync| {
            let mut sync = sync.borrow_mut();
            change(&mut sync);
            sync.location().clone()
        });
        self.location.set(location);
    }

    /// Запасной вариант, если страница так и не сообщила о монтировании.
    /// Якорь одноразовый, второй вызов ничего не сделает.
    /// Новый переход отменяет прежний таймер.
    fn schedule_scroll_fallback(&self) {
        let this = *self;
        self.scroll_fallback
            .update_value(|timer| timer.call(move || this.content_mounted()));
    }
}

pub fn use_routing() -> RoutingContext {
    use_context::<RoutingContext>().expect("RoutingContext context not found")
}
