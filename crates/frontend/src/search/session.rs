use crate::shared::timers::{Debouncer, TimerDriver};
use super::state::SearchState;
use contracts::catalog::{Catalog, CatalogItem, ItemId};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

type ChangeListener = Rc<dyn Fn(&SearchState)>;

/// Поиск с debounce: ввод -> `Searching`, через паузу -> `Results`.
///
/// Каждое изменение состояния отдаётся в `on_change`.
pub struct SearchSession<D: TimerDriver> {
    state: Rc<RefCell<SearchState>>,
    debouncer: Debouncer<D>,
    catalog: Arc<Catalog>,
    on_change: ChangeListener,
}

impl<D: TimerDriver> SearchSession<D> {
    pub fn new(
        driver: D,
        delay_ms: u32,
        catalog: Arc<Catalog>,
        on_change: impl Fn(&SearchState) + 'static,
    ) -> Self {
        Self {
            state: Rc::new(RefCell::new(SearchState::default())),
            debouncer: Debouncer::new(driver, delay_ms),
            catalog,
            on_change: Rc::new(on_change),
        }
    }

    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    pub fn set_query(&mut self, query: &str) {
        let ticket = self.state.borrow_mut().input(query);

        match ticket {
            Some(ticket) => {
                let state = self.state.clone();
                let catalog = self.catalog.clone();
                let on_change = self.on_change.clone();
                self.debouncer.call(move || {
                    let settled = state.borrow_mut().settle(ticket, &catalog);
                    if settled {
                        let snapshot = state.borrow().clone();
                        log::debug!(
                            "search '{}' -> {} result(s)",
                            snapshot.query,
                            snapshot.results.len()
                        );
                        on_change(&snapshot);
                    }
                });
            }
            None => self.debouncer.cancel(),
        }

        self.notify();
    }

    /// Выбор результата: запрос и список очищаются
    pub fn select_result(&mut self, id: ItemId) -> Option<CatalogItem> {
        let item = self.catalog.get(id).cloned();
        self.clear();
        item
    }

    pub fn clear(&mut self) {
        self.debouncer.cancel();
        self.state.borrow_mut().clear();
        self.notify();
    }

    fn notify(&self) {
        let snapshot = self.state.borrow().clone();
        (self.on_change)(&snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::timers::manual::ManualTimers;
    use crate::search::state::SearchStatus;
    use contracts::catalog::{Category, RawMenuItem};

    fn raw(id: u32, name: &str, price: &str) -> RawMenuItem {
        RawMenuItem {
            id,
            name: name.to_string(),
            description: String::new(),
            price: price.to_string(),
            images: vec![],
            rating: None,
        }
    }

    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::from_groups([
                (Category::Salgadas, vec![raw(1, "Tapioca de Queijo", "R$ 10,00")]),
                (Category::Doces, vec![raw(2, "Tapioca de Chocolate", "R$ 12,00")]),
            ])
            .unwrap(),
        )
    }

    type Seen = Rc<RefCell<Vec<SearchStatus>>>;

    fn setup() -> (SearchSession<ManualTimers>, ManualTimers, Seen) {
        let timers = ManualTimers::default();
        let seen: Seen = Rc::default();
        let sink = seen.clone();
        let session = SearchSession::new(timers.clone(), 300, catalog(), move |state| {
            sink.borrow_mut().push(state.status)
        });
        (session, timers, seen)
    }

    #[test]
    fn test_typing_supersedes_pending_search() {
        let (mut session, timers, seen) = setup();
        session.set_query("t");
        session.set_query("ta");
        session.set_query("tapioca de q");
        assert_eq!(timers.pending(), 1);
        assert_eq!(session.state().status, SearchStatus::Searching);

        timers.fire_all();
        let state = session.state();
        assert_eq!(state.status, SearchStatus::Results);
        assert_eq!(state.results.len(), 1);
        assert_eq!(state.results[0].id, 1);
        assert_eq!(seen.borrow().last(), Some(&SearchStatus::Results));
    }

    #[test]
    fn test_empty_query_never_searching() {
        let (mut session, timers, seen) = setup();
        session.set_query("  ");
        assert_eq!(session.state().status, SearchStatus::Idle);
        assert_eq!(timers.pending(), 0);
        assert_eq!(*seen.borrow(), vec![SearchStatus::Idle]);
    }

    #[test]
    fn test_emptying_query_cancels_pending() {
        let (mut session, timers, _) = setup();
        session.set_query("queijo");
        session.set_query("");
        assert_eq!(timers.pending(), 0);
        timers.fire_all();
        assert_eq!(session.state().status, SearchStatus::Idle);
        assert!(session.state().results.is_empty());
    }

    #[test]
    fn test_category_shortcut() {
        let (mut session, timers, _) = setup();
        session.set_query("Doces");
        timers.fire_all();
        let ids: Vec<u32> = session.state().results.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_clear_while_pending_drops_results() {
        let (mut session, timers, seen) = setup();
        session.set_query("tapioca");
        session.clear();
        timers.fire_all();

        let state = session.state();
        assert_eq!(state.status, SearchStatus::Idle);
        assert!(state.results.is_empty());
        assert_eq!(
            *seen.borrow(),
            vec![SearchStatus::Searching, SearchStatus::Idle]
        );
    }

    #[test]
    fn test_select_result_clears() {
        let (mut session, timers, _) = setup();
        session.set_query("chocolate");
        timers.fire_all();

        let item = session.select_result(2).unwrap();
        assert_eq!(item.name, "Tapioca de Chocolate");
        let state = session.state();
        assert!(state.query.is_empty());
        assert!(state.results.is_empty());
        assert_eq!(state.status, SearchStatus::Idle);
        assert!(session.select_result(99).is_none());
    }
}
