use crate::shared::timers::GlooTimerDriver;
use super::session::SearchSession;
use super::state::SearchState;
use contracts::catalog::{Catalog, CatalogItem, ItemId};
use leptos::prelude::*;
use std::sync::Arc;

/// Поиск в шапке. `state` читает рендер, сессия живёт в `StoredValue`.
#[derive(Clone, Copy)]
pub struct SearchContext {
    pub state: RwSignal<SearchState>,
    session: StoredValue<SearchSession<GlooTimerDriver>, LocalStorage>,
}

impl SearchContext {
    pub fn new(catalog: Arc<Catalog>, debounce_ms: u32) -> Self {
        let state = RwSignal::new(SearchState::default());
        let session = SearchSession::new(GlooTimerDriver, debounce_ms, catalog, move |snapshot| {
            state.set(snapshot.clone());
        });

        Self {
            state,
            session: StoredValue::new_local(session),
        }
    }

    pub fn input(&self, query: String) {
        self.session.update_value(|session| session.set_query(&query));
    }

    pub fn select_result(&self, id: ItemId) -> Option<CatalogItem> {
        self.session
            .try_update_value(|session| session.select_result(id))
            .flatten()
    }

    /// Сбрасывает запрос и отменяет отложенный поиск
    pub fn clear(&self) {
        self.session.update_value(|session| session.clear());
    }
}

pub fn use_search() -> SearchContext {
    use_context::<SearchContext>().expect("SearchContext context not found")
}
