//! Синхронизация `Location` с адресной строкой.
//!
//! Synchronizer: единственный, кто пишет в историю и слушает переходы
//! назад/вперёд. Все изменения состояния и запись пути происходят в одном
//! вызове, промежуточные состояния наружу не видны.

use super::location_store::{HistoryMode, LocationStore, Subscription};
use super::viewport::Viewport;
use contracts::catalog::{Catalog, CatalogItem, ItemId};
use contracts::routing::{parse_path, Location, Page};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

type ViewHook = Box<dyn Fn(&Location)>;

/// Что видит пользователь: страница и открытая позиция. Якорь не в счёт.
type View = (Page, Option<ItemId>);

fn view_of(location: &Location) -> View {
    (location.page, location.selected_item)
}

pub struct Synchronizer<S, V> {
    store: S,
    viewport: V,
    catalog: Arc<Catalog>,
    location: Location,
    on_view_change: Option<ViewHook>,
}

impl<S: LocationStore, V: Viewport> Synchronizer<S, V> {
    /// Создаёт синхронизатор и сразу разбирает текущий путь стора.
    pub fn new(store: S, viewport: V, catalog: Arc<Catalog>) -> Self {
        let mut sync = Self {
            store,
            viewport,
            catalog,
            location: Location::home(),
            on_view_change: None,
        };
        sync.parse_current_path();
        sync
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Хук на смену страницы или открытой позиции, с любого пути:
    /// navigate, select/close, popstate. Вызывается при захваченном
    /// синхронизаторе, обращаться к нему из хука нельзя.
    pub fn set_on_view_change(&mut self, hook: impl Fn(&Location) + 'static) {
        self.on_view_change = Some(Box::new(hook));
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Открытая позиция, если есть
    pub fn selected_item(&self) -> Option<&CatalogItem> {
        self.location
            .selected_item
            .and_then(|id| self.catalog.get(id))
    }

    /// Переход на страницу. С якорем прокрутка откладывается до
    /// `content_mounted`, без якоря сразу к началу страницы.
    pub fn navigate(&mut self, page: Page, anchor: Option<&str>) {
        let before = view_of(&self.location);
        self.location = Location {
            page,
            selected_item: None,
            anchor: anchor.map(str::to_string),
        };
        log::debug!("navigate: {:?} anchor={:?}", page, anchor);
        self.push(page.path());

        if self.location.anchor.is_none() {
            self.viewport.scroll_to_top();
        }
        self.notify_view_change(before);
    }

    pub fn go_home(&mut self) {
        self.navigate(Page::Home, None);
    }

    /// Страница категории позиции с прокруткой к её карточке
    pub fn reveal_item(&mut self, item: &CatalogItem) {
        let anchor = item.anchor();
        self.navigate(Page::Category(item.category), Some(&anchor));
    }

    /// Открывает позицию. Страница всегда становится категорией позиции.
    pub fn select_item(&mut self, item: &CatalogItem) {
        let before = view_of(&self.location);
        self.location = Location::with_item(item);
        log::debug!("select item {} ({})", item.id, item.name);
        self.push(self.location.path(&self.catalog));
        self.notify_view_change(before);
    }

    pub fn close_selection(&mut self) {
        let before = view_of(&self.location);
        if self.location.selected_item.take().is_none() {
            return;
        }
        self.push(self.location.path(&self.catalog));
        self.notify_view_change(before);
    }

    /// Перечитывает путь из стора
    pub fn parse_current_path(&mut self) {
        let path = self.store.path();
        self.apply_path(&path);
    }

    /// Разбор пути без записи в историю. Якорь сбрасывается.
    pub fn apply_path(&mut self, path: &str) {
        let before = view_of(&self.location);
        self.location = parse_path(path, &self.catalog);
        log::debug!("location from '{}': {:?}", path, self.location);
        self.notify_view_change(before);
    }

    /// Сигнал от рендера: контент страницы смонтирован. Одноразово
    /// прокручивает к отложенному якорю; повторный вызов ничего не делает.
    pub fn content_mounted(&mut self) -> bool {
        let Some(anchor) = self.location.anchor.take() else {
            return false;
        };
        let found = self.viewport.scroll_into_view(&anchor);
        if !found {
            log::warn!("anchor '{}' not found on {:?}", anchor, self.location.page);
        }
        found
    }

    fn notify_view_change(&self, before: View) {
        if view_of(&self.location) == before {
            return;
        }
        debug_assert!(self.location.is_consistent(&self.catalog));
        if let Some(hook) = &self.on_view_change {
            hook(&self.location);
        }
    }

    fn push(&self, path: String) {
        if self.store.path() == path {
            return;
        }
        log::debug!("history push '{}'", path);
        self.store.set_path(&path, HistoryMode::Push);
    }
}

/// Подписывает синхронизатор на переходы назад/вперёд.
/// `on_sync` получает новое состояние после каждого разбора.
pub fn follow_history<S, V>(
    sync: &Rc<RefCell<Synchronizer<S, V>>>,
    on_sync: impl Fn(&Location) + 'static,
) -> Subscription
where
    S: LocationStore + 'static,
    V: Viewport + 'static,
{
    let weak = Rc::downgrade(sync);
    let this = sync.borrow();
    this.store.on_change(Box::new(move |path| {
        let Some(sync) = weak.upgrade() else {
            return;
        };
        let location = {
            let mut sync = sync.borrow_mut();
            sync.apply_path(&path);
            sync.location().clone()
        };
        on_sync(&location);
    }))
}
