use contracts::catalog::{Catalog, CatalogItem};
use contracts::search::search;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    /// Пустой запрос
    #[default]
    Idle,
    /// Ждём окончания ввода
    Searching,
    /// Результаты готовы (могут быть пустыми)
    Results,
}

/// Что показывает выпадающий список под строкой поиска
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dropdown {
    Hidden,
    /// Список позиций. Пока идёт новый поиск, остаются прежние.
    Results,
    Searching,
    NoResults,
}

/// Билет на отложенный поиск. Устаревший билет игнорируется.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Состояние строки поиска
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub query: String,
    pub status: SearchStatus,
    pub results: Vec<CatalogItem>,
    generation: u64,
}

impl SearchState {
    /// Новый ввод. Пустой запрос сразу даёт `Idle` и билета не выдаёт.
    pub fn input(&mut self, query: &str) -> Option<Ticket> {
        self.query = query.to_string();
        self.generation += 1;

        if query.trim().is_empty() {
            self.status = SearchStatus::Idle;
            self.results.clear();
            return None;
        }

        self.status = SearchStatus::Searching;
        Some(Ticket(self.generation))
    }

    /// Выполняет поиск для билета. `false`, если билет устарел.
    pub fn settle(&mut self, ticket: Ticket, catalog: &Catalog) -> bool {
        if ticket.0 != self.generation || self.status != SearchStatus::Searching {
            return false;
        }
        self.results = search(&self.query, catalog).into_iter().cloned().collect();
        self.status = SearchStatus::Results;
        true
    }

    /// Сброс запроса и результатов; выданные билеты становятся недействительны
    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
        self.status = SearchStatus::Idle;
        self.generation += 1;
    }

    pub fn dropdown(&self) -> Dropdown {
        if self.query.is_empty() {
            Dropdown::Hidden
        } else if !self.results.is_empty() {
            Dropdown::Results
        } else if self.status == SearchStatus::Searching {
            Dropdown::Searching
        } else {
            Dropdown::NoResults
        }
    }

    pub fn no_results_message(&self) -> String {
        format!("Nenhum resultado para \"{}\"", self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn catalog() -> Catalog {
        Catalog::from_groups([
            (Category::Salgadas, vec![raw(1, "Tapioca de Queijo", "R$ 10,00")]),
            (
                Category::Doces,
                vec![
                    raw(2, "Tapioca de Chocolate", "R$ 12,50"),
                    raw(3, "Romeu e Julieta", "R$ 11,00"),
                ],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_whitespace_query_is_idle() {
        let mut state = SearchState::default();
        assert_eq!(state.input("   "), None);
        assert_eq!(state.status, SearchStatus::Idle);
        assert!(state.results.is_empty());
        assert_eq!(state.dropdown(), Dropdown::NoResults);

        state.input("");
        assert_eq!(state.dropdown(), Dropdown::Hidden);
    }

    #[test]
    fn test_settle_produces_results() {
        let catalog = catalog();
        let mut state = SearchState::default();
        let ticket = state.input("12,50").unwrap();
        assert_eq!(state.status, SearchStatus::Searching);

        assert!(state.settle(ticket, &catalog));
        assert_eq!(state.status, SearchStatus::Results);
        let ids: Vec<u32> = state.results.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_settle_empty_results() {
        let catalog = catalog();
        let mut state = SearchState::default();
        let ticket = state.input("pastel").unwrap();
        assert!(state.settle(ticket, &catalog));
        assert_eq!(state.status, SearchStatus::Results);
        assert!(state.results.is_empty());
        assert_eq!(state.dropdown(), Dropdown::NoResults);
        assert_eq!(state.no_results_message(), "Nenhum resultado para \"pastel\"");
    }

    #[test]
    fn test_previous_results_stay_while_searching() {
        let catalog = catalog();
        let mut state = SearchState::default();
        let ticket = state.input("tapioca").unwrap();
        assert_eq!(state.dropdown(), Dropdown::Searching);
        state.settle(ticket, &catalog);
        assert_eq!(state.dropdown(), Dropdown::Results);

        let ticket = state.input("tapioca de c").unwrap();
        assert_eq!(state.status, SearchStatus::Searching);
        assert_eq!(state.dropdown(), Dropdown::Results);
        assert_eq!(state.results.len(), 2);

        state.settle(ticket, &catalog);
        let ids: Vec<u32> = state.results.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let catalog = catalog();
        let mut state = SearchState::default();
        let old = state.input("queijo").unwrap();
        let fresh = state.input("doces").unwrap();

        assert!(!state.settle(old, &catalog));
        assert_eq!(state.status, SearchStatus::Searching);

        assert!(state.settle(fresh, &catalog));
        let ids: Vec<u32> = state.results.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_clear_invalidates_ticket() {
        let catalog = catalog();
        let mut state = SearchState::default();
        let ticket = state.input("tapioca").unwrap();
        state.clear();

        assert!(!state.settle(ticket, &catalog));
        assert_eq!(state.status, SearchStatus::Idle);
        assert!(state.query.is_empty());
        assert!(state.results.is_empty());
    }
}
