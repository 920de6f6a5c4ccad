//! Поиск по каталогу: подстрока в названии, описании или цене,
//! плюс ярлыки категорий ("doce", "salgadas", ...).

use crate::catalog::{Catalog, CatalogItem, Category};

/// Нормализация запроса: trim + нижний регистр
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Приводит цену к виду, пригодному для сравнения подстрокой:
/// "R$ 12,50" -> "12.50"
pub fn normalize_price(price: &str) -> String {
    price
        .to_lowercase()
        .replacen("r$", "", 1)
        .replacen(',', ".", 1)
        .trim()
        .to_string()
}

/// Ищет позиции по запросу. Порядок каталога сохраняется.
pub fn search<'a>(query: &str, catalog: &'a Catalog) -> Vec<&'a CatalogItem> {
    let term = normalize_query(query);
    if term.is_empty() {
        return Vec::new();
    }

    if let Some(category) = Category::from_search_token(&term) {
        return catalog.in_category(category).collect();
    }

    let price_term = normalize_price(&term);
    catalog
        .iter()
        .filter(|item| matches_item(item, &term, &price_term))
        .collect()
}

fn matches_item(item: &CatalogItem, term: &str, price_term: &str) -> bool {
    if item.name.to_lowercase().contains(term) {
        return true;
    }
    if item.description.to_lowercase().contains(term) {
        return true;
    }
    !price_term.is_empty() && normalize_price(&item.price).contains(price_term)
}
